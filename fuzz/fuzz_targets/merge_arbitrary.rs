// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for merging arbitrary (possibly unsorted) sequences.
//!
//! INVARIANT 1: output length is always `a.len() + b.len()`, sorted or not.
//! INVARIANT 2: no element is lost or invented.
//! INVARIANT 3: when both inputs are sorted the output is sorted, and
//!              `try_merge` agrees with `merge`.
//! INVARIANT 4: when either input is unsorted `try_merge` names the first
//!              offending side.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortmerge::{first_unsorted_position, merge, merge_owned, try_merge, MergeError, Side};

#[derive(Debug, Clone)]
struct MergeInput {
    a: Vec<i16>,
    b: Vec<i16>,
}

impl<'a> arbitrary::Arbitrary<'a> for MergeInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut a: Vec<i16> = u.arbitrary()?;
        let mut b: Vec<i16> = u.arbitrary()?;

        // Mostly sorted inputs, otherwise the sorted path is almost never hit
        match u.int_in_range(0..=3)? {
            0 => {}
            1 => a.sort_unstable(),
            2 => b.sort_unstable(),
            _ => {
                a.sort_unstable();
                b.sort_unstable();
            }
        }

        Ok(Self { a, b })
    }
}

fuzz_target!(|input: MergeInput| {
    let MergeInput { a, b } = input;
    let merged = merge(&a, &b);

    // INVARIANT 1
    assert_eq!(merged.len(), a.len() + b.len());

    // INVARIANT 2
    let mut expected = [a.as_slice(), b.as_slice()].concat();
    expected.sort_unstable();
    let mut actual = merged.clone();
    actual.sort_unstable();
    assert_eq!(actual, expected);

    assert_eq!(merge_owned(a.clone(), b.clone()), merged);

    match (first_unsorted_position(&a), first_unsorted_position(&b)) {
        (None, None) => {
            // INVARIANT 3
            assert_eq!(merged, expected);
            assert_eq!(try_merge(&a, &b), Ok(merged));
        }
        (Some(position), _) => {
            // INVARIANT 4
            assert_eq!(
                try_merge(&a, &b),
                Err(MergeError::InvalidInput { side: Side::Left, position })
            );
        }
        (None, Some(position)) => {
            assert_eq!(
                try_merge(&a, &b),
                Err(MergeError::InvalidInput { side: Side::Right, position })
            );
        }
    }
});
