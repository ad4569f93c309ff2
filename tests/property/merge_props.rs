//! Core merge properties.

use super::common::{
    any_vec, assert_sorted, left_before_right_in_ties, multiset, multiset_union, sorted_vec,
    sorted_words, tag, untag, wide_sorted_vec,
};
use proptest::prelude::*;
use sortmerge::{merge, merge_into, merge_owned, Side};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: output length is the sum of input lengths.
    #[test]
    fn prop_length_is_sum(a in sorted_vec(40), b in sorted_vec(40)) {
        prop_assert_eq!(merge(&a, &b).len(), a.len() + b.len());
    }

    /// Property: every element survives, duplicates included.
    #[test]
    fn prop_multiset_preserved(a in sorted_vec(40), b in sorted_vec(40)) {
        prop_assert_eq!(multiset(&merge(&a, &b)), multiset_union(&a, &b));
    }

    /// Property: sorted inputs give sorted output.
    #[test]
    fn prop_output_sorted(a in wide_sorted_vec(60), b in wide_sorted_vec(60)) {
        assert_sorted(&merge(&a, &b));
    }

    /// Property: strings merge the same way as integers.
    #[test]
    fn prop_words_sorted(a in sorted_words(20), b in sorted_words(20)) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        assert_sorted(&merged);
    }

    /// Property: merging with an empty sequence is the identity.
    #[test]
    fn prop_empty_identity(a in sorted_vec(40)) {
        let empty: Vec<i32> = Vec::new();
        prop_assert_eq!(merge(&empty, &a), a.clone());
        prop_assert_eq!(merge(&a, &empty), a);
    }

    /// Property: equal elements from the left come first.
    #[test]
    fn prop_left_wins_ties(a in sorted_vec(30), b in sorted_vec(30)) {
        let merged = merge(&tag(&a, Side::Left), &tag(&b, Side::Right));
        prop_assert!(left_before_right_in_ties(&merged));
        prop_assert_eq!(untag(&merged), merge(&a, &b));
    }

    /// Property: self-merge holds every element exactly twice, in order.
    #[test]
    fn prop_self_merge_doubles(a in sorted_vec(40)) {
        let merged = merge(&a, &a);
        prop_assert_eq!(merged.len(), 2 * a.len());
        assert_sorted(&merged);

        let expected: Vec<i32> = a.iter().flat_map(|&x| [x, x]).collect();
        prop_assert_eq!(merged, expected);
    }

    /// Property: owned, borrowed and appending merges agree.
    #[test]
    fn prop_variants_agree(a in sorted_vec(40), b in sorted_vec(40), prefix in any_vec(5)) {
        let borrowed = merge(&a, &b);
        prop_assert_eq!(merge_owned(a.clone(), b.clone()), borrowed.clone());

        let mut out = prefix.clone();
        merge_into(&a, &b, &mut out);
        prop_assert_eq!(&out[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&out[prefix.len()..], &borrowed[..]);
    }

    /// Property: unsorted input still yields every element exactly once.
    #[test]
    fn prop_unsorted_input_is_safe(a in any_vec(40), b in any_vec(40)) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert_eq!(multiset(&merged), multiset_union(&a, &b));

        let owned = merge_owned(a.clone(), b.clone());
        prop_assert_eq!(owned, merged);
    }

    /// Property: floats with NaN never panic and keep their length.
    #[test]
    fn prop_nan_is_safe(
        a in prop::collection::vec(prop_oneof![Just(f64::NAN), -10.0f64..10.0], 0..20),
        b in prop::collection::vec(prop_oneof![Just(f64::NAN), -10.0f64..10.0], 0..20),
    ) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        let nans = |v: &[f64]| v.iter().filter(|x| x.is_nan()).count();
        prop_assert_eq!(nans(&merged), nans(&a) + nans(&b));
    }
}
