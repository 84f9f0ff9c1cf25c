// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use lazyseq_core::SeqItem;
use lazyseq_test_utils::{ErrorInjectingIter, ErrorInjectingStream};

#[test]
fn injects_error_at_position() {
    let mut iter = ErrorInjectingIter::new(vec![1, 2, 3].into_iter(), 1);

    assert!(matches!(iter.next(), Some(SeqItem::Value(1))));
    match iter.next() {
        Some(SeqItem::Error(e)) => assert!(e.is_source_fault()),
        other => panic!("expected injected error, got {other:?}"),
    }
    assert!(matches!(iter.next(), Some(SeqItem::Value(2))));
    assert!(matches!(iter.next(), Some(SeqItem::Value(3))));
    assert!(iter.next().is_none());
}

#[test]
fn injects_error_at_start() {
    let mut iter = ErrorInjectingIter::new(vec![1].into_iter(), 0);

    assert!(matches!(iter.next(), Some(SeqItem::Error(_))));
    assert!(matches!(iter.next(), Some(SeqItem::Value(1))));
    assert!(iter.next().is_none());
}

#[tokio::test]
async fn stream_injection_matches_iterator_behavior() {
    let base = stream::iter(vec![1, 2]);
    let mut wrapped = ErrorInjectingStream::new(base, 1);

    assert!(matches!(wrapped.next().await, Some(SeqItem::Value(1))));
    assert!(matches!(wrapped.next().await, Some(SeqItem::Error(_))));
    assert!(matches!(wrapped.next().await, Some(SeqItem::Value(2))));
    assert!(wrapped.next().await.is_none());
}
