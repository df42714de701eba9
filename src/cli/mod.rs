//! CLI module for planetlocal
//!
//! Parses flags, connects to MySQL and serves the protocol over HTTP.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
