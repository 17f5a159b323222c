//! Loads a superchain registry tree and prints its contents as JSON.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod cli;
mod report;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use superchain_cli::LogConfig;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LogConfig::from(cli.logs.clone()).init_tracing_subscriber(None) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "inspect", "{e:#}");
            ExitCode::FAILURE
        }
    }
}
