// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-way merge of sorted sequences.
//!
//! Two cursors walk the inputs in lockstep. Whichever head is smaller goes to
//! the output; on a tie the left head goes first, so equal elements keep
//! "all of `a`, then all of `b`" order. Once one side runs dry the rest of the
//! other side is copied over without further comparisons.
//!
//! ```text
//!   a: [1, 3, 5]        i ──▶
//!   b: [2, 3, 6]        j ──▶
//!                        │
//!                        ▼
//!   out: [1, 2, 3a, 3b, 5, 6]
//! ```
//!
//! Every operation here is linear in `a.len() + b.len()` and allocates the
//! output once, up front. None of them look at whether the inputs are sorted:
//! unsorted input still yields exactly `a.len() + b.len()` elements, just not
//! in any particular order. Use [`try_merge`] or the wrappers in
//! [`verify`](crate::verify) to reject it instead.

use crate::error::{MergeError, Side};
use crate::verify::contracts::{check_merged_length, check_sorted};
use crate::verify::{first_unsorted_position, SortedSlice, SortedVec};
use tracing::debug;

/// Merge two sorted slices into a new vector.
///
/// The result holds every element of `a` and `b` in non-decreasing order.
/// Equal elements from `a` come before those from `b`.
///
/// ```
/// use sortmerge::merge;
///
/// let merged = merge(&[1, 3, 5, 7, 9], &[2, 4, 6, 8, 10]);
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn merge<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    merge_into(a, b, &mut out);
    out
}

/// Append the merge of `a` and `b` to `out`.
///
/// Whatever `out` already holds stays in front, untouched. Room for all
/// `a.len() + b.len()` elements is reserved before the first push.
pub fn merge_into<T: PartialOrd + Clone>(a: &[T], b: &[T], out: &mut Vec<T>) {
    let start = out.len();
    out.reserve(a.len() + b.len());

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        // Strict comparison: ties take the left head.
        if b[j] < a[i] {
            out.push(b[j].clone());
            j += 1;
        } else {
            out.push(a[i].clone());
            i += 1;
        }
    }

    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);

    check_merged_length(a.len(), b.len(), out.len() - start);
}

/// Merge two owned vectors, moving elements instead of cloning them.
///
/// Ordering and tie-breaking match [`merge`].
pub fn merge_owned<T: PartialOrd>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    let (left_len, right_len) = (a.len(), b.len());
    let mut out = Vec::with_capacity(left_len + right_len);

    let mut left = a.into_iter().peekable();
    let mut right = b.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    // At most one of these is non-empty.
    out.extend(left);
    out.extend(right);

    check_merged_length(left_len, right_len, out.len());
    out
}

/// Merge after checking that both inputs are sorted.
///
/// The left input is checked first. On failure nothing is merged and the
/// error names the offending side and the index of the first out-of-order
/// element.
///
/// ```
/// use sortmerge::{try_merge, MergeError, Side};
///
/// assert_eq!(try_merge(&[1, 2], &[3]), Ok(vec![1, 2, 3]));
/// assert_eq!(
///     try_merge(&[1, 2], &[5, 4]),
///     Err(MergeError::InvalidInput { side: Side::Right, position: 1 })
/// );
/// ```
pub fn try_merge<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Result<Vec<T>, MergeError> {
    for (items, side) in [(a, Side::Left), (b, Side::Right)] {
        if let Some(position) = first_unsorted_position(items) {
            debug!(%side, position, len = items.len(), "rejecting unsorted merge input");
            return Err(MergeError::InvalidInput { side, position });
        }
    }
    Ok(merge(a, b))
}

/// Merge two validated slices. The output carries the sortedness guarantee.
pub fn merge_sorted<T: PartialOrd + Clone>(
    a: &SortedSlice<'_, T>,
    b: &SortedSlice<'_, T>,
) -> SortedVec<T> {
    let merged = merge(a.as_slice(), b.as_slice());
    check_sorted(&merged, "merge_sorted output");
    SortedVec::new_unchecked(merged)
}
