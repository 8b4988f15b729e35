use crate::datastructures::{
    client::{CaxApi, ListResource},
    config::Config,
    order::{Order, Withdrawal},
    query::ListParams,
};
use crate::error::HttpError;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client as HttpClient, Method,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};
use url::Url;

const API_KEY_HEADER: &str = "API-Key";

/// Client for the CAX REST API. Every request carries the `API-Key` header and
/// the configured timeout. Nothing is retried.
#[derive(Clone)]
pub struct CaxClient {
    http_client: HttpClient,
    base_url: Url,
}

impl CaxClient {
    pub fn new(config: &Config) -> Result<Self, HttpError> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| HttpError::InvalidHeader)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(HttpError::Network)?;

        Ok(CaxClient {
            http_client,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    /// Host used in diagnostics, e.g. `cax.piccadilly.autonity.org`.
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, url: Url, query: Option<&ListParams>) -> Result<Value, HttpError> {
        self.send(Method::GET, url, query, None::<&()>).await
    }

    pub async fn post<B: Serialize + Sync>(
        &self,
        url: Url,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        self.send(Method::POST, url, None, body).await
    }

    pub async fn delete<B: Serialize + Sync>(
        &self,
        url: Url,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        self.send(Method::DELETE, url, None, body).await
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        query: Option<&ListParams>,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        debug!(%method, %url, "sending request");

        let mut request = self.http_client.request(method, url);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = self.execute(request).await;
        if let Err(e) = &result {
            warn!(error = %e, "request failed");
        }
        result
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, HttpError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        trace!(%status, "response received");

        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> HttpError {
        if e.is_timeout() {
            HttpError::Timeout {
                host: self.host().to_string(),
            }
        } else {
            HttpError::Network(e)
        }
    }

    async fn list_resource(
        &self,
        resource: ListResource,
        params: &ListParams,
    ) -> Result<Value, HttpError> {
        let url = self.endpoint(&[resource.segment()])?;
        let query = resource.takes_filters().then_some(params);
        self.get(url, query).await
    }
}

#[async_trait]
impl CaxApi for CaxClient {
    async fn list_deposits(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Deposits, params).await
    }

    async fn list_withdraws(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Withdraws, params).await
    }

    async fn list_balances(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Balances, params).await
    }

    async fn list_orderbooks(&self) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Orderbooks, &ListParams::default())
            .await
    }

    async fn list_symbols(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Symbols, params).await
    }

    async fn list_orders(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Orders, params).await
    }

    async fn list_trades(&self, params: &ListParams) -> Result<Value, HttpError> {
        self.list_resource(ListResource::Trades, params).await
    }

    async fn orderbook_depth(&self, pair: &str) -> Result<Value, HttpError> {
        let url = self.endpoint(&["orderbooks", pair, "depth"])?;
        self.get(url, None).await
    }

    async fn orderbook_quote(&self, pair: &str) -> Result<Value, HttpError> {
        let url = self.endpoint(&["orderbooks", pair, "quote"])?;
        self.get(url, None).await
    }

    async fn submit_order(&self, order: &Order) -> Result<Value, HttpError> {
        let url = self.endpoint(&["orders"])?;
        self.post(url, Some(order)).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, HttpError> {
        let url = self.endpoint(&["orders", order_id])?;
        self.delete(url, None::<&()>).await
    }

    async fn request_withdraw(&self, withdrawal: &Withdrawal) -> Result<Value, HttpError> {
        let url = self.endpoint(&["withdraws"])?;
        self.post(url, Some(withdrawal)).await
    }
}
