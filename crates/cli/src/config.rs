// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison configuration.
//!
//! Everything that used to be a process-wide constant (test-data location,
//! canonical timestamp, normalization pattern) lives in [`CompareConfig`] so
//! each comparator can be configured independently.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env;

/// Default directory holding expectation files
pub const DEFAULT_TESTDATA_DIR: &str = "testdata";
/// Value substituted for every normalized timestamp
pub const DEFAULT_CANONICAL_TIMESTAMP: &str = "0001-01-01T00:00:00Z";
/// ISO 8601 UTC timestamp with second precision (matched inside double quotes)
pub const DEFAULT_TIMESTAMP_PATTERN: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z";
/// Prefix for temporary copies of actual output
pub const DEFAULT_TEMP_PREFIX: &str = "actualYaml";
/// Unchanged lines shown around each diff hunk
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Configuration held by a [`Comparator`](crate::compare::Comparator)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Directory expectation references are resolved against
    pub testdata_dir: PathBuf,

    /// Replacement written for every matched timestamp
    pub canonical_timestamp: String,

    /// Regex for the timestamp body; the surrounding quotes are implied
    pub timestamp_pattern: String,

    /// Prefix for temporary files created in `testdata_dir`
    pub temp_prefix: String,

    /// Context lines per diff hunk
    pub context_lines: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            testdata_dir: PathBuf::from(DEFAULT_TESTDATA_DIR),
            canonical_timestamp: DEFAULT_CANONICAL_TIMESTAMP.to_string(),
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timestamp pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },

    #[error("invalid canonical timestamp '{0}': must be non-empty and contain no quotes or newlines")]
    InvalidTimestamp(String),

    #[error("temp file prefix cannot be empty")]
    EmptyTempPrefix,

    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

impl CompareConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build from `YAMLCHECK_CONFIG` (or defaults) plus env overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env::config_file() {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        if let Some(dir) = env::testdata_dir() {
            config.testdata_dir = dir;
        }
        if let Some(timestamp) = env::canonical_timestamp() {
            config.canonical_timestamp = timestamp;
        }
        if let Some(raw) = env::context_lines() {
            config.context_lines = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: env::YAMLCHECK_CONTEXT_LINES,
                value: raw.clone(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ts = &self.canonical_timestamp;
        if ts.is_empty() || ts.contains(['"', '\n', '\r']) {
            return Err(ConfigError::InvalidTimestamp(ts.clone()));
        }

        if self.temp_prefix.is_empty() {
            return Err(ConfigError::EmptyTempPrefix);
        }

        regex::bytes::Regex::new(&self.timestamp_pattern).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: self.timestamp_pattern.clone(),
                error: e.to_string(),
            }
        })?;

        Ok(())
    }

    pub fn with_testdata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.testdata_dir = dir.into();
        self
    }

    pub fn with_canonical_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.canonical_timestamp = timestamp.into();
        self
    }

    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
