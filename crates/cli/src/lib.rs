// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file comparison for generated YAML.
//!
//! Test suites that render resources to YAML compare the output against
//! expectation files under a `testdata` directory. Quoted ISO 8601 UTC
//! timestamps (`"2024-06-05T10:11:12Z"`) differ on every run, so they are
//! rewritten to a canonical value before diffing.
//!
//! ```no_run
//! use yamlcheck::{Comparator, CompareConfig};
//!
//! let comparator = Comparator::new(CompareConfig::default().with_testdata_dir("testdata"))?;
//! let rendered = b"status: \"OK\"\ncreatedAt: \"2024-06-05T10:11:12Z\"\n";
//! assert!(comparator.compare("cluster.yaml", rendered));
//! # Ok::<(), yamlcheck::ConfigError>(())
//! ```

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
pub mod compare;
pub mod config;
pub mod diagnostics;
pub mod diff;
pub mod env;
pub mod normalize;
pub mod scratch;

/// Re-exported status predicates from the yamlcheck-status crate.
pub mod status {
    pub use yamlcheck_status::{
        is_modifying_status, ModifyingStatuses, DEFAULT_MODIFYING_STATUSES,
    };
}

pub use compare::{is_yaml_equal, CompareError, Comparator, Comparison};
pub use config::{CompareConfig, ConfigError};
