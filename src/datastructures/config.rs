use std::path::Path;
use std::time::Duration;

use ini::{Ini, ParseOption};
use tracing::debug;

use crate::error::ConfigError;

/// Production API root.
pub const BASE_URL: &str = "https://cax.piccadilly.autonity.org/api";

/// Config file looked up in the invocation directory.
pub const CONFIG_FILE: &str = ".caxcli";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/* Immutable configuration object, built once at startup. */
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/* Creates the final config object.  */
pub struct ConfigBuilder {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            base_url: BASE_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConfigBuilder {
    /// Overrides the API root. Only tests point this anywhere else.
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn api_key(mut self, api_key: String) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Config {
        Config {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            timeout: self.timeout,
        }
    }
}

/// Reads `api_key` from the `[api]` section of an INI file.
///
/// Values are taken verbatim: quotes and backslashes are part of the key.
/// Option names match case-insensitively, section names do not.
pub fn read_api_key(path: &Path) -> Result<String, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, options)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    let api_key = ini
        .section(Some("api"))
        .and_then(|section| {
            section
                .iter()
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("api_key"))
                .map(|(_, value)| value.trim().to_string())
        })
        .ok_or_else(|| ConfigError::MissingKey("api.api_key".to_string()))?;

    debug!(path = %path.display(), "loaded api key");
    Ok(api_key)
}
