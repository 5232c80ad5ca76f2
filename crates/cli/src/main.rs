// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! yamlcheck binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yamlcheck::cli::{run, Cli, EXIT_TROUBLE};
use yamlcheck::diagnostics::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            print_error(e);
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

/// Log to stderr so stdout stays reserved for reports.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "yamlcheck=debug" } else { "yamlcheck=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
