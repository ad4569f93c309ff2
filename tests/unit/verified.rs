//! Validated wrappers and the sorted-by-type merge path.

use sortmerge::{merge_sorted, MergeError, Side, SortedSlice, SortedVec};

#[test]
fn merge_sorted_returns_sorted_vec() {
    let a = SortedSlice::new(&[1, 3, 5, 7, 9], Side::Left).unwrap();
    let b = SortedSlice::new(&[2, 4, 6, 8, 10], Side::Right).unwrap();
    let merged: SortedVec<i32> = merge_sorted(&a, &b);
    assert_eq!(merged.len(), 10);
    assert_eq!(merged.into_vec(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn sorted_slice_rejects_unsorted() {
    let data = [1, 2, 0];
    assert_eq!(
        SortedSlice::new(&data, Side::Left).unwrap_err(),
        MergeError::InvalidInput {
            side: Side::Left,
            position: 2
        }
    );
}

#[test]
fn sorted_vec_round_trips_through_json() {
    let sorted = SortedVec::try_from_vec(vec![-1, 0, 0, 4]).unwrap();
    let json = serde_json::to_string(&sorted).unwrap();
    assert_eq!(json, "[-1,0,0,4]");
    let back: SortedVec<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sorted);
}

#[test]
fn sorted_vec_rejects_unsorted_json() {
    assert!(serde_json::from_str::<SortedVec<i32>>("[5,4]").is_err());
}

#[test]
fn repeated_merges_stay_sorted() {
    let mut acc: SortedVec<i32> = SortedVec::default();
    for chunk in [[5, 9], [1, 2], [3, 10], [2, 2]] {
        let next = SortedSlice::new(&chunk, Side::Right).unwrap();
        acc = acc.as_sorted_slice().merge(&next);
    }
    assert_eq!(acc.as_slice(), &[1, 2, 2, 2, 3, 5, 9, 10]);
}

#[test]
fn lone_nan_is_not_sorted() {
    assert_eq!(
        SortedSlice::new(&[f64::NAN], Side::Left).unwrap_err(),
        MergeError::InvalidInput {
            side: Side::Left,
            position: 0
        }
    );
    assert!(SortedVec::try_from_vec(vec![0.5, f64::NAN]).is_err());
}

#[test]
fn float_merge_through_wrappers_never_panics() {
    let right = SortedSlice::new(&[1.0], Side::Right).unwrap();
    for left in [&[f64::NAN][..], &[0.0, f64::NAN][..], &[2.0, 3.0][..]] {
        if let Ok(left) = SortedSlice::new(left, Side::Left) {
            let merged = merge_sorted(&left, &right);
            assert!(SortedVec::try_from_vec(merged.into_vec()).is_ok());
        }
    }
}

#[test]
fn new_unchecked_wraps_known_sorted_data() {
    let data: Vec<i32> = (0..5).collect();
    let a = SortedSlice::new_unchecked(&data);
    let b = SortedSlice::new(&[2, 2], Side::Right).unwrap();
    let merged = merge_sorted(&a, &b);
    assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 2, 2, 3, 4]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "SortedSlice::new_unchecked")]
fn new_unchecked_rejects_unsorted_in_debug() {
    let _ = SortedSlice::new_unchecked(&[5, 4, 3]);
}

#[test]
fn sorted_vec_iter_matches_slice() {
    let sorted = SortedVec::try_from_vec(vec!["a", "b", "b", "z"]).unwrap();
    assert!(sorted.iter().eq(sorted.as_slice().iter()));
    assert_eq!(sorted.iter().count(), sorted.len());
}
