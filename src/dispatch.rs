use std::io::Write;

use serde_json::Value;
use tracing::{info, warn};

use crate::cli::Command;
use crate::datastructures::{
    client::CaxApi,
    order::{Order, Side, Withdrawal},
};
use crate::error::{CaxError, OutputError};
use crate::output::{self, OutputMode};

/// How a run went. Failures have already been reported by the time this is
/// returned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub requests: usize,
    pub failures: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

#[derive(Clone, Copy)]
enum View {
    List,
    Depth,
    Receipt,
}

/// Maps a parsed command onto endpoint calls and prints each result.
pub struct Dispatcher<'a, A: CaxApi + ?Sized> {
    api: &'a A,
    mode: OutputMode,
}

impl<'a, A: CaxApi + ?Sized> Dispatcher<'a, A> {
    pub fn new(api: &'a A, mode: OutputMode) -> Self {
        Dispatcher { api, mode }
    }

    /// Results go to `out`, diagnostics to `err`. With several `list`
    /// selectors a failed call does not stop the ones after it.
    pub async fn run<O: Write, E: Write>(
        &self,
        command: &Command,
        out: &mut O,
        err: &mut E,
    ) -> std::io::Result<Summary> {
        let mut summary = Summary::default();

        match command {
            Command::List(args) => {
                let params = args.params();
                for resource in args.resources() {
                    info!(resource = resource.segment(), "listing");
                    let result = self.api.list(resource, &params).await;
                    self.emit(result, View::List, &mut summary, out, err)?;
                }
            }
            Command::Depth { pair } => {
                let result = self.api.orderbook_depth(&pair.to_uppercase()).await;
                self.emit(result, View::Depth, &mut summary, out, err)?;
            }
            Command::Bid(args) | Command::Ask(args) => {
                let side = match command {
                    Command::Bid(_) => Side::Bid,
                    _ => Side::Ask,
                };
                let order = Order::limit(&args.pair, side, &args.price, &args.amount);
                info!(pair = %order.pair, %side, "submitting order");
                let result = self.api.submit_order(&order).await;
                self.emit(result, View::Receipt, &mut summary, out, err)?;
            }
            Command::Cancel { order_id } => {
                let result = self.api.cancel_order(order_id).await;
                self.emit(result, View::Receipt, &mut summary, out, err)?;
            }
            Command::Withdraw { symbol, amount } => {
                let withdrawal = Withdrawal::new(symbol, amount);
                let result = self.api.request_withdraw(&withdrawal).await;
                self.emit(result, View::Receipt, &mut summary, out, err)?;
            }
        }

        Ok(summary)
    }

    fn emit<O: Write, E: Write, T: Into<CaxError>>(
        &self,
        result: Result<Value, T>,
        view: View,
        summary: &mut Summary,
        out: &mut O,
        err: &mut E,
    ) -> std::io::Result<()> {
        summary.requests += 1;

        let rendered: Result<String, CaxError> = result
            .map_err(Into::into)
            .and_then(|value| self.render(&value, view).map_err(CaxError::from));

        match rendered {
            Ok(text) => writeln!(out, "{text}"),
            Err(e) => {
                warn!(error = %e, "command step failed");
                summary.failures += 1;
                writeln!(err, "{e}")
            }
        }
    }

    fn render(&self, value: &Value, view: View) -> Result<String, OutputError> {
        match view {
            View::List => output::render_list(value, self.mode),
            View::Depth => output::render_depth(value, self.mode),
            View::Receipt => output::render_json(value),
        }
    }
}
