// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status predicates for resources that move through transitional states.
//!
//! Controllers report states such as `CREATING` or `UPDATING` while a
//! resource is being changed. Tests use these helpers to decide whether a
//! resource is still mid-transition.

mod matcher;

pub use matcher::{is_modifying_status, ModifyingStatuses, DEFAULT_MODIFYING_STATUSES};
