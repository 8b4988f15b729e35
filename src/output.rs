//! Rendering of API responses for the terminal.
//!
//! `--json` prints the response exactly as received. Otherwise list results
//! become a right-aligned table with a header row, and orderbook depth becomes
//! a headerless price ladder.

use std::fmt;

use serde_json::Value;

use crate::datastructures::depth::{OrderbookDepth, PriceLevel};
use crate::error::OutputError;

const EMPTY: &str = "(empty)";
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Named-field rows with an optional header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from an arbitrary JSON response.
    ///
    /// An array of objects gets one column per key, in first-seen order.
    /// A lone object becomes key/value rows. Anything else becomes a single
    /// `value` column.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                let mut columns: Vec<&str> = Vec::new();
                for item in items.iter().filter_map(Value::as_object) {
                    for key in item.keys() {
                        if !columns.contains(&key.as_str()) {
                            columns.push(key);
                        }
                    }
                }
                let rows = items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|record| {
                        columns
                            .iter()
                            .map(|column| record.get(*column).map(cell).unwrap_or_default())
                            .collect()
                    })
                    .collect();
                Table {
                    header: Some(columns.into_iter().map(str::to_string).collect()),
                    rows,
                }
            }
            Value::Array(items) => Table {
                header: Some(vec!["value".to_string()]),
                rows: items.iter().map(|item| vec![cell(item)]).collect(),
            },
            Value::Object(record) => Table {
                header: Some(vec!["key".to_string(), "value".to_string()]),
                rows: record
                    .iter()
                    .map(|(key, value)| vec![key.clone(), cell(value)])
                    .collect(),
            },
            Value::Null => Table::default(),
            scalar => Table {
                header: None,
                rows: vec![vec![cell(scalar)]],
            },
        }
    }

    /// Ladder rows as `amount price`, without a header.
    pub fn from_levels(levels: &[PriceLevel]) -> Self {
        Table {
            header: None,
            rows: levels
                .iter()
                .map(|level| vec![level.amount.to_string(), level.price.to_string()])
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        let lines = self.header.iter().chain(self.rows.iter());
        for line in lines {
            for (i, text) in line.iter().enumerate() {
                let len = text.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let lines = self.header.iter().chain(self.rows.iter());
        for (n, line) in lines.enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{text:>width$}"))
                .collect();
            f.write_str(&cells.join(COLUMN_GAP))?;
        }
        Ok(())
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compact JSON of the response as received.
pub fn render_json(value: &Value) -> Result<String, OutputError> {
    Ok(serde_json::to_string(value)?)
}

/// Output for a `list` selector.
pub fn render_list(value: &Value, mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json => render_json(value),
        OutputMode::Table => {
            let table = Table::from_value(value);
            if table.is_empty() {
                Ok(EMPTY.to_string())
            } else {
                Ok(table.to_string())
            }
        }
    }
}

/// Output for `depth`: asks, blank line, bids, blank line, timestamp.
pub fn render_depth(value: &Value, mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json => render_json(value),
        OutputMode::Table => {
            let depth = OrderbookDepth::from_value(value)?;
            let asks = Table::from_levels(&depth.asks);
            let bids = Table::from_levels(&depth.bids);
            Ok(format!("{asks}\n\n{bids}\n\n{}", cell(&depth.timestamp)))
        }
    }
}
