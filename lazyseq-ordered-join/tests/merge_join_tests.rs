// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_ordered_join::{merge_join_by, JoinKind};

fn join(
    left: Vec<(i32, &'static str)>,
    right: Vec<(i32, &'static str)>,
    kind: JoinKind,
) -> Vec<(Option<(i32, &'static str)>, Option<(i32, &'static str)>)> {
    merge_join_by(left, right, |l| l.0, |r| r.0, kind).collect()
}

#[test]
fn full_outer_matches_the_mathematical_join() {
    let result = join(
        vec![(1, "a"), (2, "b")],
        vec![(2, "x"), (3, "y")],
        JoinKind::FullOuter,
    );
    assert_eq!(
        result,
        vec![
            (Some((1, "a")), None),
            (Some((2, "b")), Some((2, "x"))),
            (None, Some((3, "y"))),
        ]
    );
}

#[test]
fn inner_drops_both_unmatched_sides() {
    let result = join(
        vec![(1, "a"), (2, "b"), (4, "c")],
        vec![(2, "x"), (3, "y"), (4, "z")],
        JoinKind::Inner,
    );
    assert_eq!(
        result,
        vec![
            (Some((2, "b")), Some((2, "x"))),
            (Some((4, "c")), Some((4, "z"))),
        ]
    );
}

#[test]
fn left_outer_keeps_unmatched_left_only() {
    let result = join(
        vec![(1, "a"), (2, "b")],
        vec![(2, "x"), (3, "y")],
        JoinKind::LeftOuter,
    );
    assert_eq!(
        result,
        vec![(Some((1, "a")), None), (Some((2, "b")), Some((2, "x")))]
    );
}

#[test]
fn right_outer_keeps_unmatched_right_only() {
    let result = join(
        vec![(1, "a"), (2, "b")],
        vec![(2, "x"), (3, "y")],
        JoinKind::RightOuter,
    );
    assert_eq!(
        result,
        vec![(Some((2, "b")), Some((2, "x"))), (None, Some((3, "y")))]
    );
}

#[test]
fn equal_key_runs_produce_the_cross_product() {
    let result = join(
        vec![(1, "l1"), (1, "l2"), (2, "l3")],
        vec![(1, "r1"), (1, "r2")],
        JoinKind::Inner,
    );
    assert_eq!(
        result,
        vec![
            (Some((1, "l1")), Some((1, "r1"))),
            (Some((1, "l1")), Some((1, "r2"))),
            (Some((1, "l2")), Some((1, "r1"))),
            (Some((1, "l2")), Some((1, "r2"))),
        ]
    );
}

#[test]
fn exhausted_side_tail_follows_the_kind() {
    let left = vec![(1, "a")];
    let right = vec![(2, "x"), (3, "y"), (4, "z")];

    let full = join(left.clone(), right.clone(), JoinKind::FullOuter);
    assert_eq!(full.len(), 4);
    assert_eq!(full[0], (Some((1, "a")), None));
    assert_eq!(&full[1..], &[
        (None, Some((2, "x"))),
        (None, Some((3, "y"))),
        (None, Some((4, "z"))),
    ]);

    // For Inner the tail is dropped entirely.
    assert!(join(left, right, JoinKind::Inner).is_empty());
}

#[test]
fn empty_inputs() {
    assert!(join(vec![], vec![], JoinKind::FullOuter).is_empty());
    assert_eq!(
        join(vec![(1, "a")], vec![], JoinKind::LeftOuter),
        vec![(Some((1, "a")), None)]
    );
    assert!(join(vec![(1, "a")], vec![], JoinKind::RightOuter).is_empty());
}

#[test]
fn custom_comparer_controls_the_order() {
    use lazyseq_ordered_join::merge_join;

    // Descending inputs joined with a reversed comparer.
    let left = vec![(3, "a"), (1, "b")];
    let right = vec![(2, "x"), (1, "y")];

    let result: Vec<_> = merge_join(
        left,
        right,
        |l: &(i32, &str)| l.0,
        |r: &(i32, &str)| r.0,
        |a: &i32, b: &i32| b.cmp(a),
        JoinKind::FullOuter,
    )
    .collect();

    assert_eq!(
        result,
        vec![
            (Some((3, "a")), None),
            (None, Some((2, "x"))),
            (Some((1, "b")), Some((1, "y"))),
        ]
    );
}

#[test]
fn construction_is_deferred() {
    use std::cell::Cell;

    let pulled = Cell::new(0usize);
    let left = (0..3).inspect(|_| pulled.set(pulled.get() + 1));
    let joined = merge_join_by(left, 0..3, |l: &i32| *l, |r: &i32| *r, JoinKind::Inner);

    assert_eq!(pulled.get(), 0);
    let _: Vec<_> = joined.collect();
    assert_eq!(pulled.get(), 3);
}
