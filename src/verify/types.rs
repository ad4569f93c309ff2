// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make unsorted merge inputs unrepresentable.
//!
//! [`merge`](crate::merge) trusts its caller. These wrappers don't: a
//! [`SortedSlice`] or [`SortedVec`] can only be built from data that has been
//! checked to be non-decreasing, so a merge of two of them is sorted too. The
//! cost is one linear scan at construction.
//!
//! | Type          | Guarantee                                   |
//! |---------------|---------------------------------------------|
//! | `SortedSlice` | Borrowed slice, `items[k-1] <= items[k]`    |
//! | `SortedVec`   | Owned vector, same ordering                 |
//!
//! # Example
//!
//! ```
//! use sortmerge::{merge_sorted, Side, SortedSlice};
//!
//! let a = SortedSlice::new(&[1, 3, 5], Side::Left)?;
//! let b = SortedSlice::new(&[2, 4], Side::Right)?;
//! assert_eq!(merge_sorted(&a, &b).as_slice(), &[1, 2, 3, 4, 5]);
//! # Ok::<(), sortmerge::MergeError>(())
//! ```

use super::contracts::check_sorted;
use crate::error::{MergeError, Side};
use crate::merge::merge_sorted;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// Index of the first element that breaks non-decreasing order.
///
/// Returns `Some(k)` for the first `k` where `items[k - 1] <= items[k]` does
/// not hold, or where `items[k]` does not compare equal to itself (NaN). The
/// latter check also covers `k = 0`, so `[NaN]` is rejected at position 0.
/// Returns `None` for sorted input, which includes the empty slice.
pub fn first_unsorted_position<T: PartialOrd>(items: &[T]) -> Option<usize> {
    items.iter().enumerate().position(|(k, item)| {
        let unordered = item.partial_cmp(item) != Some(Ordering::Equal);
        unordered
            || (k > 0
                && !matches!(
                    items[k - 1].partial_cmp(item),
                    Some(Ordering::Less | Ordering::Equal)
                ))
    })
}

/// A borrowed slice known to be sorted in non-decreasing order.
#[derive(Debug)]
pub struct SortedSlice<'a, T> {
    items: &'a [T],
}

impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<'a, T: PartialOrd> SortedSlice<'a, T> {
    /// Validate `items`. `side` is reported in the error if validation fails.
    pub fn new(items: &'a [T], side: Side) -> Result<Self, MergeError> {
        match first_unsorted_position(items) {
            Some(position) => Err(MergeError::InvalidInput { side, position }),
            None => Ok(Self { items }),
        }
    }

    /// Wrap `items` without validating them.
    ///
    /// For data that is sorted by construction. Debug builds still assert it.
    pub fn new_unchecked(items: &'a [T]) -> Self {
        check_sorted(items, "SortedSlice::new_unchecked");
        Self { items }
    }
}

impl<'a, T> SortedSlice<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge with another sorted slice. Same as [`merge_sorted`].
    pub fn merge(&self, other: &SortedSlice<'_, T>) -> SortedVec<T>
    where
        T: PartialOrd + Clone,
    {
        merge_sorted(self, other)
    }
}

impl<T> AsRef<[T]> for SortedSlice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.items
    }
}

/// An owned vector known to be sorted in non-decreasing order.
///
/// Serializes as a plain sequence. Deserializing validates the order and fails
/// on unsorted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedVec<T> {
    items: Vec<T>,
}

impl<T: PartialOrd> SortedVec<T> {
    /// Validate an owned vector. Errors report [`Side::Left`].
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, MergeError> {
        match first_unsorted_position(&items) {
            Some(position) => Err(MergeError::InvalidInput {
                side: Side::Left,
                position,
            }),
            None => Ok(Self { items }),
        }
    }

    /// Wrap `items` without validating them. Debug builds still assert order.
    pub fn new_unchecked(items: Vec<T>) -> Self {
        check_sorted(&items, "SortedVec::new_unchecked");
        Self { items }
    }

    /// Borrow as a [`SortedSlice`] for further merging.
    pub fn as_sorted_slice(&self) -> SortedSlice<'_, T> {
        SortedSlice { items: &self.items }
    }
}

impl<T> SortedVec<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for SortedVec<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> AsRef<[T]> for SortedVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<SortedVec<T>> for Vec<T> {
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.items
    }
}

impl<T: PartialOrd> TryFrom<Vec<T>> for SortedVec<T> {
    type Error = MergeError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items)
    }
}

impl<'de, T> Deserialize<'de> for SortedVec<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_vec(items).map_err(serde::de::Error::custom)
    }
}
