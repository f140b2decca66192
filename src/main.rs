// SPDX-License-Identifier: MIT
//
// dentacore — theme palettes and dashboard helpers for the practice dashboard.
//
// This is the binary that wires the library crates to a command line:
//
//   dc-color     → Color, hex parsing, lighten / darken / blend / opacity
//   dc-theme     → style modes, palette registry, theme generation
//   dc-dashboard → dashboard models, trend and percentage rules
//
// Start-up order:
//
//   .env (dotenvy) → tracing subscriber (RUST_LOG) → clap → dispatch
//
// Log output goes to stderr so stdout carries only command results.

mod cli;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Missing .env is fine.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
