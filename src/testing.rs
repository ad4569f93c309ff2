//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::error::Side;
use std::cmp::Ordering;

/// An element labelled with where it came from.
///
/// Equality and ordering look at `value` only, so two `Tagged` with the same
/// value but different origins compare equal. That is exactly what the
/// tie-break checks need: the merge sees a tie, the test sees who won.
#[derive(Debug, Clone)]
pub struct Tagged<T> {
    pub value: T,
    pub origin: Side,
    /// Position within the originating input.
    pub index: usize,
}

impl<T: PartialEq> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for Tagged<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// Label every element of `items` with `side` and its index.
pub fn tag<T: Clone>(items: &[T], side: Side) -> Vec<Tagged<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, value)| Tagged {
            value: value.clone(),
            origin: side,
            index,
        })
        .collect()
}

/// The origin of each tagged element, in order.
pub fn origins<T>(items: &[Tagged<T>]) -> Vec<Side> {
    items.iter().map(|t| t.origin).collect()
}

/// The values of tagged elements, in order.
pub fn untag<T: Clone>(items: &[Tagged<T>]) -> Vec<T> {
    items.iter().map(|t| t.value.clone()).collect()
}
