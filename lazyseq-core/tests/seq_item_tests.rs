// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::{SeqError, SeqItem};

#[test]
fn value_accessors() {
    let item = SeqItem::Value(42);
    assert!(item.is_value());
    assert!(!item.is_error());
    assert_eq!(item.ok(), Some(42));
}

#[test]
fn error_accessors() {
    let item: SeqItem<i32> = SeqItem::Error(SeqError::invalid_operation("boom"));
    assert!(item.is_error());
    assert!(item.ok().is_none());
}

#[test]
fn map_transforms_values_and_passes_errors() {
    let doubled = SeqItem::Value(21).map(|v| v * 2);
    assert_eq!(doubled, SeqItem::Value(42));

    let err: SeqItem<i32> = SeqItem::Error(SeqError::invalid_operation("boom"));
    assert!(err.map(|v| v * 2).is_error());
}

#[test]
fn and_then_chains() {
    let item = SeqItem::Value(10).and_then(|v| {
        if v > 5 {
            SeqItem::Value(v + 1)
        } else {
            SeqItem::Error(SeqError::invalid_argument("too small"))
        }
    });
    assert_eq!(item, SeqItem::Value(11));
}

#[test]
fn errors_never_compare_equal() {
    let a: SeqItem<i32> = SeqItem::Error(SeqError::invalid_operation("x"));
    let b: SeqItem<i32> = SeqItem::Error(SeqError::invalid_operation("x"));
    assert_ne!(a, b);
}

#[test]
fn round_trips_through_result() {
    let ok: SeqItem<i32> = Ok(5).into();
    assert_eq!(ok, SeqItem::Value(5));

    let res: Result<i32, SeqError> = SeqItem::Value(5).into();
    assert_eq!(res.unwrap(), 5);

    let err: Result<i32, SeqError> = SeqItem::Error(SeqError::disposed("reader")).into();
    assert!(err.unwrap_err().is_disposed());
}

#[test]
#[should_panic(expected = "called `SeqItem::unwrap()`")]
fn unwrap_panics_on_error() {
    let item: SeqItem<i32> = SeqItem::Error(SeqError::invalid_operation("x"));
    let _ = item.unwrap();
}
