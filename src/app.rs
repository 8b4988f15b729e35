//! One full invocation: config, client, dispatch, exit status.

use std::io::Write;
use std::path::Path;

use tracing::error;

use crate::cax::CaxClient;
use crate::cli::Cli;
use crate::datastructures::config::{read_api_key, Config};
use crate::dispatch::Dispatcher;
use crate::output::OutputMode;

pub const EXIT_OK: u8 = 0;
/// Config file missing or unusable. Nothing was sent.
pub const EXIT_CONFIG: u8 = 1;
/// At least one request or its rendering failed.
pub const EXIT_REQUEST: u8 = 2;

/// Runs a parsed command line against `base_url`, reading the API key from
/// `config_path`, and returns the process exit status.
pub async fn run<O: Write, E: Write>(
    cli: &Cli,
    config_path: &Path,
    base_url: &str,
    out: &mut O,
    err: &mut E,
) -> u8 {
    let api_key = match read_api_key(config_path) {
        Ok(api_key) => api_key,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            return EXIT_CONFIG;
        }
    };

    let config = Config::builder()
        .base_url(base_url.to_string())
        .api_key(api_key)
        .timeout(cli.timeout())
        .build();

    let client = match CaxClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            return EXIT_CONFIG;
        }
    };

    let dispatcher = Dispatcher::new(&client, OutputMode::from_json_flag(cli.json));
    match dispatcher.run(&cli.command, out, err).await {
        Ok(summary) if summary.is_success() => EXIT_OK,
        Ok(_) => EXIT_REQUEST,
        Err(e) => {
            error!(error = %e, "could not write output");
            EXIT_REQUEST
        }
    }
}
