// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by yamlcheck are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `YAMLCHECK_CONFIG` — Path to a TOML comparison config file.
pub fn config_file() -> Option<PathBuf> {
    var_nonempty(names::YAMLCHECK_CONFIG).map(PathBuf::from)
}

/// `YAMLCHECK_TESTDATA_DIR` — Directory holding expectation files.
pub fn testdata_dir() -> Option<PathBuf> {
    var_nonempty(names::YAMLCHECK_TESTDATA_DIR).map(PathBuf::from)
}

/// `YAMLCHECK_CANONICAL_TIMESTAMP` — Replacement for normalized timestamps.
pub fn canonical_timestamp() -> Option<String> {
    var_nonempty(names::YAMLCHECK_CANONICAL_TIMESTAMP)
}

/// `YAMLCHECK_CONTEXT_LINES` — Raw value; parsed by the config layer so a
/// malformed number can be reported instead of silently ignored.
pub fn context_lines() -> Option<String> {
    var_nonempty(names::YAMLCHECK_CONTEXT_LINES)
}

fn var_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
