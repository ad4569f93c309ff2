// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for rejected merge inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which of the two merge inputs something refers to.
///
/// `Left` is the first argument (`a`), `Right` the second (`b`). On equal
/// heads the left element is emitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Error returned by the validating entry points.
///
/// The plain [`merge`](crate::merge) never fails. Only `try_merge` and the
/// validated wrappers in [`verify`](crate::verify) check their preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// An input sequence is not non-decreasing.
    ///
    /// `position` is the index of the first element that is smaller than
    /// (or unordered with) its predecessor. It is always at least 1.
    #[error("invalid input: {side} sequence is not sorted at position {position}")]
    InvalidInput { side: Side, position: usize },
}

impl MergeError {
    /// The input the error refers to.
    pub fn side(&self) -> Side {
        match self {
            MergeError::InvalidInput { side, .. } => *side,
        }
    }
}
