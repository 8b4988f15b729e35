//! Command-line grammar.
//!
//! ```text
//! caxcli list [--deposits] [--withdraws] [--balances] [--orderbooks]
//!             [--symbols] [--orders] [--trades] [filters]
//! caxcli depth <pair>
//! caxcli (bid|ask) <pair> <price> <amount>
//! caxcli cancel <order_id>
//! caxcli withdraw <symbol> <amount>
//! ```
//!
//! `--json`, `--timeout=<N>` and `-v` are accepted anywhere on the line.

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::datastructures::{client::ListResource, config::DEFAULT_TIMEOUT_SECS, query::ListParams};

/// CLI for the Piccadilly CAX.
#[derive(Parser, Debug)]
#[command(name = "caxcli")]
#[command(version)]
#[command(about = "CLI for the Piccadilly CAX")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print raw json (don't format anything)
    #[arg(long, global = true)]
    pub json: bool,

    /// How many seconds to wait for CAX response
    #[arg(long, global = true, value_name = "N", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List account and exchange resources
    List(ListArgs),

    /// Show the order book ladder for a pair
    Depth {
        /// Trading pair, e.g. NTN-USD
        pair: String,
    },

    /// Place a limit buy order
    Bid(OrderArgs),

    /// Place a limit sell order
    Ask(OrderArgs),

    /// Cancel an open order
    Cancel {
        order_id: String,
    },

    /// Request a withdrawal
    Withdraw {
        /// Asset symbol, e.g. NTN
        symbol: String,
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OrderArgs {
    /// Trading pair, e.g. NTN-USD
    pub pair: String,
    #[arg(allow_negative_numbers = true)]
    pub price: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// List all user deposits
    #[arg(long)]
    pub deposits: bool,

    /// List all user withdraws
    #[arg(long)]
    pub withdraws: bool,

    /// List all user balances
    #[arg(long)]
    pub balances: bool,

    /// List all orderbooks
    #[arg(long)]
    pub orderbooks: bool,

    /// List all symbols
    #[arg(long)]
    pub symbols: bool,

    /// List all orders
    #[arg(long)]
    pub orders: bool,

    /// List all trades
    #[arg(long)]
    pub trades: bool,

    /// Asset symbol (eg 'NTN')
    #[arg(long)]
    pub symbol: Option<String>,

    /// Filter by status
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by pair
    #[arg(long)]
    pub pair: Option<String>,

    /// Filter by timestamp on or after <date>
    #[arg(long, value_name = "date")]
    pub start: Option<String>,

    /// Filter by timestamp on or before <date>
    #[arg(long, value_name = "date")]
    pub end: Option<String>,

    /// Filter by side
    #[arg(long)]
    pub side: Option<String>,
}

impl ListArgs {
    /// Selected resources, in the fixed order they are listed.
    pub fn resources(&self) -> Vec<ListResource> {
        ListResource::ALL
            .into_iter()
            .filter(|resource| match resource {
                ListResource::Deposits => self.deposits,
                ListResource::Withdraws => self.withdraws,
                ListResource::Balances => self.balances,
                ListResource::Orderbooks => self.orderbooks,
                ListResource::Symbols => self.symbols,
                ListResource::Orders => self.orders,
                ListResource::Trades => self.trades,
            })
            .collect()
    }

    pub fn params(&self) -> ListParams {
        ListParams::builder()
            .status(self.status.as_deref())
            .start(self.start.as_deref())
            .end(self.end.as_deref())
            .pair(self.pair.as_deref())
            .symbol(self.symbol.as_deref())
            .side(self.side.as_deref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("caxcli").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_every_documented_form() {
        let forms: &[&[&str]] = &[
            &["list", "--orders"],
            &[
                "list",
                "--deposits",
                "--withdraws",
                "--balances",
                "--orderbooks",
                "--symbols",
                "--orders",
                "--trades",
            ],
            &[
                "list",
                "--orders",
                "--status=Open",
                "--pair=ntn-usd",
                "--start=2024-01-01",
                "--end=2024-02-01",
            ],
            &["list", "--balances", "--symbol", "ntn", "--json"],
            &["depth", "ntn-usd"],
            &["depth", "NTN-USD", "--json", "--timeout=10"],
            &["bid", "NTN-USD", "10.5", "2"],
            &["ask", "NTN-USD", "11", "1"],
            &["cancel", "12345"],
            &["withdraw", "ntn", "100"],
        ];
        for form in forms {
            assert!(parse(form).is_ok(), "rejected {form:?}");
        }
    }

    #[test]
    fn rejects_missing_positionals() {
        let forms: &[&[&str]] = &[
            &["depth"],
            &["bid", "NTN-USD", "10"],
            &["ask", "NTN-USD"],
            &["cancel"],
            &["withdraw", "NTN"],
        ];
        for form in forms {
            let err = parse(form).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "{form:?}");
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["sell", "NTN-USD"]).is_err());
        assert!(parse(&["list", "--everything"]).is_err());
        assert!(parse(&["list", "--timeout=soon"]).is_err());
        assert!(parse(&["bid", "NTN-USD", "1", "2", "--orders"]).is_err());
    }

    #[test]
    fn global_flags_and_defaults() {
        let cli = parse(&["list", "--orders"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.timeout(), Duration::from_secs(5));

        let cli = parse(&["--json", "-vv", "depth", "ntn-usd", "--timeout", "2"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.timeout, 2);
        assert_eq!(cli.command, Command::Depth { pair: "ntn-usd".to_string() });
    }

    #[test]
    fn selectors_keep_fixed_order() {
        let cli = parse(&["list", "--trades", "--orders", "--deposits"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(
            args.resources(),
            vec![ListResource::Deposits, ListResource::Orders, ListResource::Trades]
        );
    }

    #[test]
    fn list_filters_are_normalized() {
        let args = ["list", "--orders", "--status=Open", "--pair=ntn-usd", "--side=BID"];
        let cli = parse(&args).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        let params = args.params();
        assert_eq!(params.status.as_deref(), Some("open"));
        assert_eq!(params.pair.as_deref(), Some("NTN-USD"));
        assert_eq!(params.side.as_deref(), Some("bid"));
        assert!(params.symbol.is_none());
    }

    #[test]
    fn order_values_pass_through() {
        let cli = parse(&["ask", "ntn-usd", "-1", "0.000"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Ask(OrderArgs {
                pair: "ntn-usd".to_string(),
                price: "-1".to_string(),
                amount: "0.000".to_string(),
            })
        );
    }
}
