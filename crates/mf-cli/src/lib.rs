//! mf-cli library
//!
//! Command parsing and execution for the `mefit` binary, exported for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{build_store, execute, run};
