// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::SeqError;
use lazyseq_window::{batch, WindowingExt};

#[test]
fn batches_with_trailing_partial() {
    let batches: Vec<_> = batch(1..=7, 3).unwrap().collect();
    assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}

#[test]
fn exact_multiple_has_no_partial() {
    let batches: Vec<_> = batch(1..=6, 3).unwrap().collect();
    assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn empty_source_yields_no_batches() {
    assert!(batch(std::iter::empty::<i32>(), 3).unwrap().next().is_none());
}

#[test]
fn zero_size_is_rejected_eagerly() {
    assert!(matches!(
        batch(1..=3, 0),
        Err(SeqError::InvalidArgument { .. })
    ));
}

#[test]
fn batch_of_one_wraps_every_element() {
    let batches: Vec<_> = (1..=3).batch(1).unwrap().collect();
    assert_eq!(batches, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn consumption_is_lazy() {
    use std::cell::Cell;

    let pulled = Cell::new(0usize);
    let mut batches = batch((1..=6).inspect(|_| pulled.set(pulled.get() + 1)), 2).unwrap();

    assert_eq!(pulled.get(), 0);
    batches.next();
    assert_eq!(pulled.get(), 2);
}
