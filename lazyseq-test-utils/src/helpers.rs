// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use lazyseq_core::{SeqError, SeqItem};

/// Wraps plain values as in-band sequence items.
pub fn seq_values<T, I>(items: I) -> impl Iterator<Item = SeqItem<T>>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(SeqItem::Value)
}

/// Drains an in-band iterator, splitting values from the first error.
///
/// Iteration stops at the first error, mirroring the
/// error-terminates-the-sequence convention.
pub fn collect_values<I, T>(iter: I) -> (Vec<T>, Option<SeqError>)
where
    I: IntoIterator<Item = SeqItem<T>>,
{
    let mut values = Vec::new();
    for item in iter {
        match item {
            SeqItem::Value(v) => values.push(v),
            SeqItem::Error(e) => return (values, Some(e)),
        }
    }
    (values, None)
}

/// Async counterpart of [`collect_values`].
pub async fn collect_stream<S, T>(stream: S) -> (Vec<T>, Option<SeqError>)
where
    S: Stream<Item = SeqItem<T>>,
{
    let mut values = Vec::new();
    let mut stream = std::pin::pin!(stream);
    while let Some(item) = stream.next().await {
        match item {
            SeqItem::Value(v) => values.push(v),
            SeqItem::Error(e) => return (values, Some(e)),
        }
    }
    (values, None)
}

/// Asserts that the iterator yields exactly `expected` and then ends,
/// with no in-band errors.
pub fn expect_values<I, T>(iter: I, expected: &[T])
where
    I: IntoIterator<Item = SeqItem<T>>,
    T: PartialEq + std::fmt::Debug,
{
    let (values, error) = collect_values(iter);
    assert!(error.is_none(), "unexpected in-band error: {error:?}");
    assert_eq!(values, expected);
}
