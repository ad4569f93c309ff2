//! Equal elements from the left input come out before those from the right.

use super::common::{left_before_right_in_ties, origins, tag, untag};
use sortmerge::{merge, merge_owned, Side};

#[test]
fn single_tie() {
    let merged = merge(&tag(&[7], Side::Left), &tag(&[7], Side::Right));
    assert_eq!(origins(&merged), vec![Side::Left, Side::Right]);
}

#[test]
fn tie_when_right_is_longer() {
    let merged = merge(&tag(&[3], Side::Left), &tag(&[3, 3, 3], Side::Right));
    assert_eq!(
        origins(&merged),
        vec![Side::Left, Side::Right, Side::Right, Side::Right]
    );
}

#[test]
fn tie_when_left_is_longer() {
    let merged = merge(&tag(&[3, 3, 3], Side::Left), &tag(&[3], Side::Right));
    assert_eq!(
        origins(&merged),
        vec![Side::Left, Side::Left, Side::Left, Side::Right]
    );
}

#[test]
fn ties_inside_interleaving() {
    let a = tag(&[1, 4, 4, 6], Side::Left);
    let b = tag(&[4, 5, 6], Side::Right);
    let merged = merge(&a, &b);

    assert_eq!(untag(&merged), vec![1, 4, 4, 4, 5, 6, 6]);
    assert_eq!(
        origins(&merged),
        vec![
            Side::Left,
            Side::Left,
            Side::Left,
            Side::Right,
            Side::Right,
            Side::Left,
            Side::Right
        ]
    );
    assert!(left_before_right_in_ties(&merged));
}

#[test]
fn order_within_each_side_is_kept() {
    let merged = merge(&tag(&[2, 2], Side::Left), &tag(&[2, 2], Side::Right));
    let indices: Vec<usize> = merged.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![0, 1, 0, 1]);
}

#[test]
fn owned_merge_uses_same_rule() {
    let merged = merge_owned(tag(&[1, 2], Side::Left), tag(&[1, 2], Side::Right));
    assert_eq!(
        origins(&merged),
        vec![Side::Left, Side::Right, Side::Left, Side::Right]
    );
}
