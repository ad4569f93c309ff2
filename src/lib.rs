//! Linear-time two-way merge of sorted sequences.
//!
//! Given two sequences that are each sorted in non-decreasing order, produce
//! one sorted sequence holding every element of both. This is the merge step
//! of merge sort: two cursors, one pass, one allocation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐
//! │  error.rs   │◀────│      merge.rs        │
//! │ (MergeError,│     │ (merge, merge_into,  │
//! │  Side)      │     │  merge_owned,        │
//! └─────────────┘     │  try_merge)          │
//!                     └──────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (SortedSlice, SortedVec, merge_sorted - type-level  │
//! │   sortedness; contracts - debug post-conditions)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Ordering guarantees
//!
//! | Property        | Holds when                    |
//! |-----------------|-------------------------------|
//! | Length `m + n`  | Always                        |
//! | Same multiset   | Always                        |
//! | Non-decreasing  | Both inputs sorted            |
//! | Left wins ties  | Always                        |
//!
//! Unsorted input is not an error for [`merge`]: the output has the right
//! length and elements, in no particular order. [`try_merge`] rejects it
//! with [`MergeError::InvalidInput`] instead.
//!
//! # Usage
//!
//! ```
//! use sortmerge::merge;
//!
//! let merged = merge(&[1, 3, 5, 7, 9], &[2, 4, 6, 8, 10]);
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! ```

// Module declarations
mod error;
mod merge;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use error::{MergeError, Side};
pub use merge::{merge, merge_into, merge_owned, merge_sorted, try_merge};
pub use verify::{first_unsorted_position, SortedSlice, SortedVec};
