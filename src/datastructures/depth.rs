use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::OutputError;

/// `GET /orderbooks/{pair}/depth` as the server sends it. Levels may carry
/// extra fields and may encode numbers as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DepthResponse {
    #[serde(default)]
    pub asks: Vec<RawLevel>,
    #[serde(default)]
    pub bids: Vec<RawLevel>,
    #[serde(default)]
    pub timestamp: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLevel {
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub amount: Value,
}

/// A depth figure. Values outside `Decimal` range (beyond 28 fractional
/// digits or roughly 7.9e28) fall back to a finite `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Exact(Decimal),
    Approx(f64),
}

impl Quantity {
    fn as_f64(&self) -> f64 {
        match self {
            Quantity::Exact(d) => d.to_f64().unwrap_or_default(),
            Quantity::Approx(f) => *f,
        }
    }

    /// Numeric order. Exact against exact never goes through `f64`.
    pub fn compare(&self, other: &Quantity) -> Ordering {
        match (self, other) {
            (Quantity::Exact(a), Quantity::Exact(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Exact(d) => write!(f, "{d}"),
            Quantity::Approx(x) => write!(f, "{x:e}"),
        }
    }
}

/// One rung of the ladder after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLevel {
    pub amount: Quantity,
    pub price: Quantity,
}

/// Display-ready depth: both sides sorted by price, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderbookDepth {
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
    pub timestamp: Value,
}

impl OrderbookDepth {
    pub fn from_value(value: &Value) -> Result<Self, OutputError> {
        if !value.is_object() {
            return Err(OutputError::Shape(format!(
                "expected an orderbook depth object, got {value}"
            )));
        }
        let raw: DepthResponse = serde_json::from_value(value.clone())?;

        Ok(OrderbookDepth {
            asks: ladder(&raw.asks)?,
            bids: ladder(&raw.bids)?,
            timestamp: raw.timestamp,
        })
    }
}

fn ladder(levels: &[RawLevel]) -> Result<Vec<PriceLevel>, OutputError> {
    let mut ladder = levels
        .iter()
        .map(|level| {
            Ok(PriceLevel {
                amount: to_quantity("amount", &level.amount)?,
                price: to_quantity("price", &level.price)?,
            })
        })
        .collect::<Result<Vec<_>, OutputError>>()?;
    ladder.sort_by(|a, b| b.price.compare(&a.price));
    Ok(ladder)
}

fn to_quantity(field: &'static str, value: &Value) -> Result<Quantity, OutputError> {
    let invalid = || OutputError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(invalid()),
    };

    if let Ok(d) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Ok(Quantity::Exact(d.normalize()));
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Quantity::Approx(f)),
        _ => Err(invalid()),
    }
}
