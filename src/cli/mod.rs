//! CLI module for formbase
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP API
//! - init: Write a default config and create the data file
//! - schema: Print the active form schema
//! - validate: Check a payload from stdin without storing it
//! - list: Print one page of submissions
//! - export: Write one page of submissions as CSV

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{export, init, list, run, run_command, schema, serve, validate};
pub use config::{Config, PORT_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_response, write_text};
