// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Modifying-status matching.

/// Statuses conventionally reported while a resource is changing.
pub const DEFAULT_MODIFYING_STATUSES: [&str; 3] = ["CREATING", "UPDATING", "DELETING"];

/// Returns true if `latest` equals one of `modifying`.
///
/// Comparison is exact and case-sensitive. An empty slice never matches.
pub fn is_modifying_status<S: AsRef<str>>(latest: &str, modifying: &[S]) -> bool {
    modifying.iter().any(|status| status.as_ref() == latest)
}

/// An owned set of modifying statuses, reusable across checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifyingStatuses {
    statuses: Vec<String>,
}

impl ModifyingStatuses {
    /// Create an empty set (matches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// The `CREATING` / `UPDATING` / `DELETING` set
    pub fn conventional() -> Self {
        DEFAULT_MODIFYING_STATUSES.into_iter().collect()
    }

    /// Add a status, keeping insertion order
    pub fn with(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    /// Check whether `latest` is one of the modifying statuses
    pub fn contains(&self, latest: &str) -> bool {
        is_modifying_status(latest, &self.statuses)
    }

    /// Statuses in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.statuses
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ModifyingStatuses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            statuses: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
