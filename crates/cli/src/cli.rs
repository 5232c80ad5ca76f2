// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for comparing golden files outside of cargo test.
//!
//! Exit codes follow `diff`: 0 identical, 1 different, 2 trouble.

use clap::{Args, Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::compare::{CompareError, Comparison, Comparator};
use crate::config::{CompareConfig, ConfigError};
use crate::diagnostics::Diagnostics;
use crate::normalize::TimestampNormalizer;
use crate::status::{is_modifying_status, DEFAULT_MODIFYING_STATUSES};

/// Inputs matched (or status is modifying)
pub const EXIT_SAME: u8 = 0;
/// Inputs differ (or status is not modifying)
pub const EXIT_DIFFERENT: u8 = 1;
/// The command could not run
pub const EXIT_TROUBLE: u8 = 2;

/// Golden-file comparison for generated YAML
#[derive(Parser, Debug)]
#[command(name = "yamlcheck", version, about = "Compare generated YAML against golden files")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare actual output against an expectation file
    Compare(CompareArgs),
    /// Check whether a status is one of the modifying statuses
    Status(StatusArgs),
    /// Print input with quoted timestamps normalized
    Normalize(NormalizeArgs),
}

/// Configuration flags shared by commands that normalize or compare
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML config file (default: $YAMLCHECK_CONFIG, then built-in defaults)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding expectation files
    #[arg(long, value_name = "DIR")]
    pub testdata_dir: Option<PathBuf>,

    /// Value substituted for quoted timestamps
    #[arg(long, value_name = "TIMESTAMP")]
    pub canonical_timestamp: Option<String>,

    /// Context lines around each diff hunk
    #[arg(long = "context", short = 'U', value_name = "LINES")]
    pub context_lines: Option<usize>,
}

impl ConfigArgs {
    /// Resolve flags over the config file or environment
    pub fn resolve(&self) -> Result<CompareConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CompareConfig::load(path)?,
            None => CompareConfig::from_env()?,
        };

        if let Some(dir) = &self.testdata_dir {
            config.testdata_dir = dir.clone();
        }
        if let Some(timestamp) = &self.canonical_timestamp {
            config.canonical_timestamp = timestamp.clone();
        }
        if let Some(lines) = self.context_lines {
            config.context_lines = lines;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Expectation file, relative to the test-data directory
    pub expectation: String,

    /// File holding the actual output ("-" or omitted for stdin)
    pub actual: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Current status of the resource
    pub current: String,

    /// Modifying statuses (default: CREATING UPDATING DELETING)
    pub modifying: Vec<String>,
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// File to normalize ("-" or omitted for stdin)
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Errors that stop a command from producing an answer
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error("failed to read {}: {source}", display_source(.path))]
    Read {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) if !is_stdin(p) => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a file, or stdin for `None` / `-`
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    let result = match path {
        Some(p) if !is_stdin(p) => std::fs::read(p),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).map(|_| buf)
        }
    };
    result.map_err(|source| CliError::Read {
        path: path.map(Path::to_path_buf),
        source,
    })
}

/// Run a parsed command, returning the process exit code
pub fn run(cli: &Cli) -> Result<u8, CliError> {
    match &cli.command {
        Command::Compare(args) => run_compare(args),
        Command::Status(args) => run_status(args, &mut std::io::stdout()),
        Command::Normalize(args) => run_normalize(args, &mut std::io::stdout()),
    }
}

fn run_compare(args: &CompareArgs) -> Result<u8, CliError> {
    let config = args.config.resolve()?;
    let comparator = Comparator::new(config)?;
    let actual = read_source(args.actual.as_deref())?;

    match comparator.check(&args.expectation, &actual)? {
        Comparison::Match => Ok(EXIT_SAME),
        Comparison::Mismatch {
            expected_path,
            actual,
            diff,
        } => {
            Diagnostics::stdout().mismatch(&expected_path, &actual, &diff);
            Ok(EXIT_DIFFERENT)
        }
    }
}

fn run_status<W: Write>(args: &StatusArgs, out: &mut W) -> Result<u8, CliError> {
    let modifying = if args.modifying.is_empty() {
        is_modifying_status(&args.current, &DEFAULT_MODIFYING_STATUSES)
    } else {
        is_modifying_status(&args.current, &args.modifying)
    };
    writeln!(out, "{}", modifying).map_err(CliError::Write)?;
    Ok(if modifying { EXIT_SAME } else { EXIT_DIFFERENT })
}

fn run_normalize<W: Write>(args: &NormalizeArgs, out: &mut W) -> Result<u8, CliError> {
    let config = args.config.resolve()?;
    let normalizer = TimestampNormalizer::from_config(&config)?;
    let input = read_source(args.input.as_deref())?;
    out.write_all(&normalizer.normalize(&input))
        .and_then(|()| out.flush())
        .map_err(CliError::Write)?;
    Ok(EXIT_SAME)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
