// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in lazy sequences.
//!
//! These wrappers take a base iterator/stream of plain values, wrap them in
//! [`SeqItem::Value`] and inject a [`SeqItem::Error`] at a chosen position,
//! for testing fault capture and replay in sequence operators.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use lazyseq_core::{SeqError, SeqItem};

/// The error type injected by these wrappers.
#[derive(Debug, thiserror::Error)]
#[error("injected test error at index {index}")]
pub struct InjectedError {
    /// Position the error was injected at
    pub index: usize,
}

fn injected(index: usize) -> SeqError {
    SeqError::source_fault(InjectedError { index })
}

/// An iterator wrapper that injects one error at a specified position.
///
/// # Examples
///
/// ```
/// use lazyseq_test_utils::ErrorInjectingIter;
/// use lazyseq_core::SeqItem;
///
/// let mut iter = ErrorInjectingIter::new(vec![1, 2].into_iter(), 1);
/// assert!(matches!(iter.next(), Some(SeqItem::Value(1))));
/// assert!(matches!(iter.next(), Some(SeqItem::Error(_))));
/// assert!(matches!(iter.next(), Some(SeqItem::Value(2))));
/// ```
pub struct ErrorInjectingIter<I> {
    inner: I,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<I> ErrorInjectingIter<I> {
    /// Wraps `inner`, injecting an error at 0-indexed `inject_error_at`.
    pub fn new(inner: I, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<I: Iterator> Iterator for ErrorInjectingIter<I> {
    type Item = SeqItem<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Some(SeqItem::Error(injected(error_pos)));
            }
        }
        match self.inner.next() {
            Some(item) => {
                self.count += 1;
                Some(SeqItem::Value(item))
            }
            None => None,
        }
    }
}

/// A stream wrapper that injects one error at a specified position.
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Wraps `inner`, injecting an error at 0-indexed `inject_error_at`.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = SeqItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Poll::Ready(Some(SeqItem::Error(injected(error_pos))));
            }
        }
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(SeqItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
