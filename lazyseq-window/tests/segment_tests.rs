// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_window::{segment, WindowingExt};

#[test]
fn boundaries_split_contiguous_runs() {
    let runs: Vec<_> =
        segment(vec![1, 2, 10, 11, 3, 4], |prev, curr, _| curr < prev).collect();
    assert_eq!(runs, vec![vec![1, 2, 10, 11], vec![3, 4]]);
}

#[test]
fn predicate_never_sees_the_first_element() {
    // A single-element source yields one segment regardless of the
    // predicate, which must not be consulted at all.
    let runs: Vec<_> = segment(vec![5], |_: &i32, _: &i32, _| {
        panic!("predicate must not run for a single-element source")
    })
    .collect();
    assert_eq!(runs, vec![vec![5]]);
}

#[test]
fn empty_source_yields_no_segments() {
    let runs: Vec<_> = segment(Vec::<i32>::new(), |_, _, _| true).collect();
    assert!(runs.is_empty());
}

#[test]
fn always_true_predicate_makes_singletons() {
    let runs: Vec<_> = segment(vec![1, 2, 3], |_, _, _| true).collect();
    assert_eq!(runs, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn never_true_predicate_keeps_one_segment() {
    let runs: Vec<_> = segment(vec![1, 2, 3], |_, _, _| false).collect();
    assert_eq!(runs, vec![vec![1, 2, 3]]);
}

#[test]
fn predicate_receives_source_indices() {
    let mut seen = Vec::new();
    let runs: Vec<_> = segment(vec![10, 20, 30], |_, _, index| {
        seen.push(index);
        false
    })
    .collect();

    assert_eq!(runs, vec![vec![10, 20, 30]]);
    // Decisions begin at the second element.
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn index_based_boundaries() {
    // New segment every three elements, driven purely by the index.
    let runs: Vec<_> = (0..8).segment(|_, _, index| index % 3 == 0).collect();
    assert_eq!(runs, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7]]);
}

#[test]
fn moves_non_clone_items() {
    #[derive(Debug, PartialEq)]
    struct Opaque(i32);

    let runs: Vec<_> = segment(
        vec![Opaque(1), Opaque(7), Opaque(2)],
        |prev: &Opaque, curr: &Opaque, _| curr.0 < prev.0,
    )
    .collect();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0], vec![Opaque(1), Opaque(7)]);
    assert_eq!(runs[1], vec![Opaque(2)]);
}
