// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::SeqError;
use lazyseq_window::{window_left, window_right, WindowingExt};

#[test]
fn window_left_slides_then_shrinks() {
    let windows: Vec<_> = window_left(1..=5, 3).unwrap().collect();
    assert_eq!(
        windows,
        vec![
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 5],
            vec![4, 5],
            vec![5],
        ]
    );
}

#[test]
fn window_right_grows_then_slides() {
    let windows: Vec<_> = window_right(1..=5, 3).unwrap().collect();
    assert_eq!(
        windows,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 5],
        ]
    );
}

#[test]
fn source_shorter_than_the_window() {
    let windows: Vec<_> = window_left(1..=2, 5).unwrap().collect();
    assert_eq!(windows, vec![vec![1, 2], vec![2]]);

    let windows: Vec<_> = window_right(1..=2, 5).unwrap().collect();
    assert_eq!(windows, vec![vec![1], vec![1, 2]]);
}

#[test]
fn empty_source_yields_no_windows() {
    assert!(window_left(std::iter::empty::<i32>(), 3)
        .unwrap()
        .next()
        .is_none());
    assert!(window_right(std::iter::empty::<i32>(), 3)
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn zero_size_is_rejected_eagerly() {
    assert!(matches!(
        window_left(1..=3, 0),
        Err(SeqError::InvalidArgument { .. })
    ));
    assert!(matches!(
        window_right(1..=3, 0),
        Err(SeqError::InvalidArgument { .. })
    ));
}

#[test]
fn windows_are_independent_snapshots() {
    let mut iter = window_left(1..=4, 2).unwrap();

    let mut first = iter.next().unwrap();
    let second = iter.next().unwrap();

    // Mutating one emitted window must not be observable in any other.
    first[0] = 999;
    first[1] = 999;

    assert_eq!(second, vec![2, 3]);
    assert_eq!(iter.next().unwrap(), vec![3, 4]);
}

#[test]
fn size_one_degenerates_to_singletons() {
    let windows: Vec<_> = window_left(1..=3, 1).unwrap().collect();
    assert_eq!(windows, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn extension_trait_mirrors_the_free_functions() {
    let windows: Vec<_> = (1..=3).window_right(2).unwrap().collect();
    assert_eq!(windows, vec![vec![1], vec![1, 2], vec![2, 3]]);
}
