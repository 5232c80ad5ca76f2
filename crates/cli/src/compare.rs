// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file comparison of generated YAML.
//!
//! The actual output is written to a scratch file next to the expectations,
//! its quoted timestamps are normalized, and the result is diffed against
//! the expectation file. [`Comparator::check`] returns structured results;
//! [`Comparator::compare`] reduces them to a boolean and reports details to
//! its [`Diagnostics`].

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{CompareConfig, ConfigError};
use crate::diagnostics::Diagnostics;
use crate::diff::{read_input, DiffError, DiffOutcome, LineDiff};
use crate::normalize::TimestampNormalizer;
use crate::scratch::ScratchFile;

/// Result of a comparison that ran to completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch {
        /// Resolved path of the expectation file
        expected_path: PathBuf,
        /// Actual output after timestamp normalization
        actual: String,
        /// Unified diff from expected to actual
        diff: String,
    },
}

/// Errors that prevent a comparison from completing
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("invalid expectation reference '{0}': expected a relative path inside the test-data directory")]
    InvalidExpectation(String),

    #[error("could not create temporary actual file: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("could not normalize timestamps: {0}")]
    Normalize(#[source] std::io::Error),

    #[error("diff failed to run: {0}")]
    Diff(#[from] DiffError),
}

/// Compares actual output against expectation files
#[derive(Debug)]
pub struct Comparator {
    config: CompareConfig,
    normalizer: TimestampNormalizer,
    differ: LineDiff,
    diagnostics: Diagnostics,
}

impl Comparator {
    /// Create a comparator reporting to stdout
    pub fn new(config: CompareConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let normalizer = TimestampNormalizer::from_config(&config)?;
        Ok(Self {
            differ: LineDiff::new(config.context_lines),
            normalizer,
            config,
            diagnostics: Diagnostics::stdout(),
        })
    }

    /// Create a comparator configured from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(CompareConfig::from_env()?)
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Resolve an expectation reference against the test-data directory
    pub fn expected_path(&self, expectation: &str) -> Result<PathBuf, CompareError> {
        let relative = Path::new(expectation);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if expectation.is_empty() || !contained {
            return Err(CompareError::InvalidExpectation(expectation.to_string()));
        }
        Ok(self.config.testdata_dir.join(relative))
    }

    /// Compare `actual` against the expectation, returning structured results.
    ///
    /// The scratch file is removed before this returns, on every path.
    pub fn check(&self, expectation: &str, actual: &[u8]) -> Result<Comparison, CompareError> {
        let expected_path = self.expected_path(expectation)?;
        debug!(expected = %expected_path.display(), bytes = actual.len(), "comparing");

        let scratch = ScratchFile::create_in(
            &self.config.testdata_dir,
            &self.config.temp_prefix,
            actual,
        )
        .map_err(CompareError::Scratch)?;

        self.normalizer
            .normalize_file(scratch.path())
            .map_err(CompareError::Normalize)?;

        // Expectations may hold real timestamps too; normalize them in memory
        // so the file itself is never written.
        let expected = read_input(&expected_path)?;
        let expected = self.normalizer.normalize(&expected);
        let normalized = read_input(scratch.path())?;

        let outcome = self.differ.diff_bytes(
            &expected,
            &normalized,
            &expected_path.display().to_string(),
            &scratch.path().display().to_string(),
        );
        match outcome {
            DiffOutcome::Identical => {
                debug!(expected = %expected_path.display(), "match");
                Ok(Comparison::Match)
            }
            DiffOutcome::Differences(diff) => {
                debug!(expected = %expected_path.display(), "mismatch");
                Ok(Comparison::Mismatch {
                    expected_path,
                    actual: String::from_utf8_lossy(&normalized).into_owned(),
                    diff,
                })
            }
        }
    }

    /// Returns true if `actual` matches the expectation modulo timestamps.
    ///
    /// Never fails: errors and mismatches are written to the diagnostics
    /// sink and reported as `false`.
    pub fn compare(&self, expectation: &str, actual: &[u8]) -> bool {
        match self.check(expectation, actual) {
            Ok(Comparison::Match) => true,
            Ok(Comparison::Mismatch {
                expected_path,
                actual,
                diff,
            }) => {
                self.diagnostics.mismatch(&expected_path, &actual, &diff);
                false
            }
            Err(err) => {
                warn!(expectation, error = %err, "comparison failed");
                self.diagnostics.error(&err);
                false
            }
        }
    }
}

/// Compare `actual` against `expectation` using the environment's
/// configuration, reporting to stdout.
pub fn is_yaml_equal(expectation: &str, actual: &[u8]) -> bool {
    match Comparator::from_env() {
        Ok(comparator) => comparator.compare(expectation, actual),
        Err(err) => {
            warn!(error = %err, "invalid comparison config");
            Diagnostics::stdout().error(format_args!("invalid comparison config: {}", err));
            false
        }
    }
}

/// Assert that actual output matches an expectation file.
///
/// Panics with the diff on mismatch, or with the error if the comparison
/// could not run.
///
/// ```no_run
/// use yamlcheck::{assert_yaml_matches, compare::Comparator, config::CompareConfig};
///
/// let comparator = Comparator::new(CompareConfig::default()).unwrap();
/// assert_yaml_matches!(comparator, "cluster.yaml", "status: \"OK\"\n");
/// ```
#[macro_export]
macro_rules! assert_yaml_matches {
    ($comparator:expr, $expectation:expr, $actual:expr $(,)?) => {
        match $comparator.check($expectation, ::std::convert::AsRef::<[u8]>::as_ref(&$actual)) {
            ::std::result::Result::Ok($crate::compare::Comparison::Match) => {}
            ::std::result::Result::Ok($crate::compare::Comparison::Mismatch {
                expected_path,
                diff,
                ..
            }) => {
                panic!(
                    "actual output does not match {}\n{}",
                    expected_path.display(),
                    diff
                )
            }
            ::std::result::Result::Err(err) => {
                panic!("comparison against {} failed: {}", $expectation, err)
            }
        }
    };
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
