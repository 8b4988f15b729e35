use std::io;
use std::path::Path;
use std::process::ExitCode;

use caxcli::app;
use caxcli::cli::Cli;
use caxcli::datastructures::config::{BASE_URL, CONFIG_FILE};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("caxcli={level}")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let status = app::run(&cli, Path::new(CONFIG_FILE), BASE_URL, &mut out, &mut err).await;
    ExitCode::from(status)
}
