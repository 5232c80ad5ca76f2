// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-based unified diff between an expectation and actual output.
//!
//! Running a diff and finding differences are distinct results: a diff that
//! could not run is an `Err(DiffError)`, a diff that ran yields a
//! [`DiffOutcome`].

use similar::{DiffTag, TextDiff};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of a diff that ran to completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOutcome {
    Identical,
    /// Unified diff text, never empty
    Differences(String),
}

/// The diff could not be computed because an input was unreadable
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", .path.display())]
pub struct DiffError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Unified line differ
#[derive(Clone, Copy, Debug)]
pub struct LineDiff {
    context_lines: usize,
}

impl LineDiff {
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }

    /// Diff raw bytes line by line, labelling the hunks with the given names.
    ///
    /// Lines are compared as bytes, so distinct invalid UTF-8 never compares
    /// equal; only the rendered hunks are lossy.
    pub fn diff_bytes(
        &self,
        expected: &[u8],
        actual: &[u8],
        expected_label: &str,
        actual_label: &str,
    ) -> DiffOutcome {
        let diff = TextDiff::from_lines(expected, actual);
        if diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
            return DiffOutcome::Identical;
        }

        let text = diff
            .unified_diff()
            .context_radius(self.context_lines)
            .header(expected_label, actual_label)
            .to_string();
        DiffOutcome::Differences(text)
    }
}

/// Read a diff input, attributing failures to its path
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, DiffError> {
    std::fs::read(path).map_err(|source| DiffError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
