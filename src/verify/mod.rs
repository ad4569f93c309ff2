// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: sorted wrappers and runtime contracts.
//!
//! Two complementary approaches:
//!
//! 1. **Type-level wrappers** (`SortedSlice`, `SortedVec`) that can only hold
//!    non-decreasing data. Merge two of them and the result is sorted by type.
//!
//! 2. **Runtime contracts** that panic in debug builds when a merge breaks a
//!    post-condition. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
