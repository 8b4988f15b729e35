use serde::Serialize;

/// Filters shared by the list endpoints. Unset filters are left out of the
/// query string entirely.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

impl ListParams {
    pub fn builder() -> ListParamsBuilder {
        ListParamsBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == ListParams::default()
    }
}

/// Applies the case rules: status and side go lower case, pair and symbol
/// upper case, dates pass through.
#[derive(Default)]
pub struct ListParamsBuilder {
    params: ListParams,
}

impl ListParamsBuilder {
    pub fn status(mut self, status: Option<&str>) -> Self {
        self.params.status = status.map(str::to_lowercase);
        self
    }

    pub fn start(mut self, start: Option<&str>) -> Self {
        self.params.start = start.map(str::to_string);
        self
    }

    pub fn end(mut self, end: Option<&str>) -> Self {
        self.params.end = end.map(str::to_string);
        self
    }

    pub fn pair(mut self, pair: Option<&str>) -> Self {
        self.params.pair = pair.map(str::to_uppercase);
        self
    }

    pub fn symbol(mut self, symbol: Option<&str>) -> Self {
        self.params.symbol = symbol.map(str::to_uppercase);
        self
    }

    pub fn side(mut self, side: Option<&str>) -> Self {
        self.params.side = side.map(str::to_lowercase);
        self
    }

    pub fn build(self) -> ListParams {
        self.params
    }
}
