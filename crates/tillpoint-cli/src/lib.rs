//! Command-line adapter for tillpoint.
//!
//! `tillpoint serve` runs the web server; the other subcommands drive the
//! same services directly against the local database.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only the binary installs the subscriber and reads `.env`
use dotenvy as _;
use tracing_subscriber as _;

// Runtime comes from `#[tokio::main]` in the binary
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod menu_commands;
pub mod parser;
pub mod presentation;
pub mod settings_commands;
pub mod stock_commands;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, KitchenCommand};
pub use error::CliError;
pub use menu_commands::MenuCommand;
pub use parser::Cli;
pub use settings_commands::SettingsCommand;
pub use stock_commands::StockCommand;
