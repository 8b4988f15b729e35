//! Client library behind the `caxcli` binary: config loading, the CAX REST
//! client, output rendering and command dispatch.

pub mod app;
pub mod cax;
pub mod cli;
pub mod datastructures;
pub mod dispatch;
pub mod error;
pub mod output;

pub use cax::CaxClient;
pub use datastructures::client::{CaxApi, ListResource};
pub use datastructures::config::Config;
pub use dispatch::{Dispatcher, Summary};
pub use error::{CaxError, ConfigError, HttpError, OutputError};
pub use output::OutputMode;
