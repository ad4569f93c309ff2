// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the merge post-conditions.
//!
//! Debug-mode assertions only. They compile to nothing in release builds and
//! panic in debug builds the moment a merge produces something it shouldn't.
//!
//! | Contract              | Holds for                         |
//! |-----------------------|-----------------------------------|
//! | `check_merged_length` | Every merge, sorted input or not  |
//! | `check_sorted`        | The validated path only           |
//!
//! `check_sorted` is never called from [`merge`](crate::merge): merging
//! unsorted input is allowed and must not panic.

use super::types::first_unsorted_position;

/// Output of a merge holds exactly `left_len + right_len` elements.
///
/// # Panics (debug builds only)
/// Panics if the lengths disagree.
#[inline]
pub fn check_merged_length(left_len: usize, right_len: usize, merged_len: usize) {
    debug_assert_eq!(
        merged_len,
        left_len + right_len,
        "Contract violation: merged length {} != {} + {}",
        merged_len,
        left_len,
        right_len
    );
}

/// `items` is non-decreasing.
///
/// # Panics (debug builds only)
/// Panics naming `what` and the first out-of-order index.
#[inline]
pub fn check_sorted<T: PartialOrd>(items: &[T], what: &str) {
    debug_assert!(
        first_unsorted_position(items).is_none(),
        "Contract violation: {} not sorted at position {:?}",
        what,
        first_unsorted_position(items)
    );
}
