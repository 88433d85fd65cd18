//! mefit - MeFit session CLI
//!
//! Drives the session store from the command line. Every command prints a
//! single JSON value on stdout; logs go to stderr or the configured file.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the built-in contributor
//! mefit sign-in --email contributor@mefit.com --password contrib123
//!
//! # Check whether the current session may open the contributor area
//! mefit access contributor --pretty
//!
//! # Sign out
//! mefit sign-out
//! ```

use mf_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
