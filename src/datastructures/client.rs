use super::{
    order::{Order, Withdrawal},
    query::ListParams,
};
use crate::error::HttpError;
use async_trait::async_trait;
use serde_json::Value;

/// Resources reachable through `caxcli list`, in the order they are run when
/// several selectors are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListResource {
    Deposits,
    Withdraws,
    Balances,
    Orderbooks,
    Symbols,
    Orders,
    Trades,
}

impl ListResource {
    pub const ALL: [ListResource; 7] = [
        ListResource::Deposits,
        ListResource::Withdraws,
        ListResource::Balances,
        ListResource::Orderbooks,
        ListResource::Symbols,
        ListResource::Orders,
        ListResource::Trades,
    ];

    /// Endpoint name under the API root, without slashes.
    pub fn segment(&self) -> &'static str {
        match self {
            ListResource::Deposits => "deposits",
            ListResource::Withdraws => "withdraws",
            ListResource::Balances => "balances",
            ListResource::Orderbooks => "orderbooks",
            ListResource::Symbols => "symbols",
            ListResource::Orders => "orders",
            ListResource::Trades => "trades",
        }
    }

    /// `/orderbooks` is the only listing that ignores filters.
    pub fn takes_filters(&self) -> bool {
        !matches!(self, ListResource::Orderbooks)
    }
}

/// One method per CAX endpoint. Responses are returned untouched; shaping
/// them for display is the formatter's job.
#[async_trait]
pub trait CaxApi: Send + Sync {
    async fn list_deposits(&self, params: &ListParams) -> Result<Value, HttpError>;
    async fn list_withdraws(&self, params: &ListParams) -> Result<Value, HttpError>;
    async fn list_balances(&self, params: &ListParams) -> Result<Value, HttpError>;
    async fn list_orderbooks(&self) -> Result<Value, HttpError>;
    async fn list_symbols(&self, params: &ListParams) -> Result<Value, HttpError>;
    async fn list_orders(&self, params: &ListParams) -> Result<Value, HttpError>;
    async fn list_trades(&self, params: &ListParams) -> Result<Value, HttpError>;

    async fn orderbook_depth(&self, pair: &str) -> Result<Value, HttpError>;
    async fn orderbook_quote(&self, pair: &str) -> Result<Value, HttpError>;

    async fn submit_order(&self, order: &Order) -> Result<Value, HttpError>;
    async fn cancel_order(&self, order_id: &str) -> Result<Value, HttpError>;
    async fn request_withdraw(&self, withdrawal: &Withdrawal) -> Result<Value, HttpError>;

    /// Routes a `list` selector to its endpoint.
    async fn list(&self, resource: ListResource, params: &ListParams) -> Result<Value, HttpError> {
        match resource {
            ListResource::Deposits => self.list_deposits(params).await,
            ListResource::Withdraws => self.list_withdraws(params).await,
            ListResource::Balances => self.list_balances(params).await,
            ListResource::Orderbooks => self.list_orderbooks().await,
            ListResource::Symbols => self.list_symbols(params).await,
            ListResource::Orders => self.list_orders(params).await,
            ListResource::Trades => self.list_trades(params).await,
        }
    }
}
