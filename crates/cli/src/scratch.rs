// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped temporary copies of actual output.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A uniquely named temporary file, deleted when dropped.
///
/// Concurrent comparisons each get their own file, so sharing a
/// test-data directory between threads is safe.
#[derive(Debug)]
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Create a file named `<prefix><random>` in `dir` holding `contents`.
    ///
    /// On a failed write the partially written file is removed before the
    /// error is returned.
    pub fn create_in(dir: &Path, prefix: &str, contents: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new().prefix(prefix).tempfile_in(dir)?;
        file.write_all(contents)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
#[path = "scratch_tests.rs"]
mod tests;
