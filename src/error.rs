//! Error types for config loading, HTTP calls and output rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum CaxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Startup failures. These are fatal and happen before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error parsing config file: {0}")]
    Parse(String),

    #[error("Missing config value: {0}")]
    MissingKey(String),
}

/// Per-request failures.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request to {host} timed out")]
    Timeout { host: String },

    #[error("failed to retrieve data: {0}")]
    Network(reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("server returned a non-JSON response: {0}")]
    Decode(String),

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API key is not a valid header value")]
    InvalidHeader,
}

/// Failures while turning a response into printable text.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("{field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
