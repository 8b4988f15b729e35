use std::fmt;

use serde::{Deserialize, Serialize};

/// Limit order body for `POST /orders`. Price and amount are sent exactly as
/// the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Order {
    pub pair: String,
    pub side: Side,
    pub price: String,
    pub amount: String,
}

impl Order {
    pub fn limit(pair: &str, side: Side, price: &str, amount: &str) -> Self {
        Order {
            pair: pair.to_uppercase(),
            side,
            price: price.to_string(),
            amount: amount.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Ask => f.write_str("ask"),
        }
    }
}

/// Body for `POST /withdraws`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Withdrawal {
    pub symbol: String,
    pub amount: String,
}

impl Withdrawal {
    pub fn new(symbol: &str, amount: &str) -> Self {
        Withdrawal {
            symbol: symbol.to_uppercase(),
            amount: amount.to_string(),
        }
    }
}
