// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp normalization.
//!
//! Generated documents carry creation and update times that differ on every
//! run. Quoted timestamps are rewritten to a canonical value before diffing.

use regex::bytes::{NoExpand, Regex};
use std::borrow::Cow;
use std::path::Path;

use crate::config::{CompareConfig, ConfigError};

/// Rewrites quoted timestamps to a canonical value
#[derive(Clone, Debug)]
pub struct TimestampNormalizer {
    regex: Regex,
    replacement: Vec<u8>,
}

impl TimestampNormalizer {
    /// Build a normalizer for `pattern` (without quotes) and `canonical`
    pub fn new(pattern: &str, canonical: &str) -> Result<Self, ConfigError> {
        let quoted = format!("\"(?:{pattern})\"");
        let regex = Regex::new(&quoted).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            error: e.to_string(),
        })?;
        Ok(Self {
            regex,
            replacement: format!("\"{canonical}\"").into_bytes(),
        })
    }

    pub fn from_config(config: &CompareConfig) -> Result<Self, ConfigError> {
        Self::new(&config.timestamp_pattern, &config.canonical_timestamp)
    }

    /// Normalize raw bytes; borrows the input when nothing matched
    pub fn normalize<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        self.regex
            .replace_all(input, NoExpand(self.replacement.as_slice()))
    }

    /// Rewrite a file in place. The file is left untouched when no
    /// timestamp matched.
    pub fn normalize_file(&self, path: &Path) -> std::io::Result<()> {
        let content = std::fs::read(path)?;
        if let Cow::Owned(normalized) = self.normalize(&content) {
            std::fs::write(path, normalized)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
