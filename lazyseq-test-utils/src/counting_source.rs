// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented restartable sources.
//!
//! [`CountingSource`] hands out iterator/stream factories over a fixed
//! element list while counting how many enumerations were started and how
//! many elements were actually pulled, so tests can assert the
//! at-most-one-advance and reset-restarts properties.

use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use lazyseq_core::SeqItem;

/// A restartable in-memory source that counts starts and advances.
///
/// `advances` counts value-producing pulls only; the final pull that
/// observes end-of-sequence is not an advance of the source.
#[derive(Clone)]
pub struct CountingSource<T> {
    items: Arc<Vec<T>>,
    starts: Arc<AtomicUsize>,
    advances: Arc<AtomicUsize>,
}

impl<T: Clone + Send + Sync + 'static> CountingSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            starts: Arc::new(AtomicUsize::new(0)),
            advances: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many enumerations have been started so far.
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// How many elements have been pulled across all enumerations.
    pub fn advances(&self) -> usize {
        self.advances.load(Ordering::SeqCst)
    }

    /// A restartable iterator factory suitable for the sync buffer.
    pub fn factory(&self) -> impl FnMut() -> CountingIter<T> + Send + 'static {
        let source = self.clone();
        move || {
            source.starts.fetch_add(1, Ordering::SeqCst);
            CountingIter {
                items: source.items.clone(),
                index: 0,
                advances: source.advances.clone(),
            }
        }
    }

    /// A restartable stream factory suitable for the async buffer.
    ///
    /// With `pend_before_each`, every element is preceded by one
    /// `Poll::Pending` (with an immediate wake), forcing task interleaving
    /// in concurrency tests.
    pub fn stream_factory(
        &self,
        pend_before_each: bool,
    ) -> impl FnMut() -> CountingStream<T> + Send + 'static {
        let source = self.clone();
        move || {
            source.starts.fetch_add(1, Ordering::SeqCst);
            CountingStream {
                items: source.items.clone(),
                index: 0,
                advances: source.advances.clone(),
                pend_before_each,
                pended: false,
            }
        }
    }
}

/// One enumeration of a [`CountingSource`].
pub struct CountingIter<T> {
    items: Arc<Vec<T>>,
    index: usize,
    advances: Arc<AtomicUsize>,
}

impl<T: Clone> Iterator for CountingIter<T> {
    type Item = SeqItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.items.get(self.index)?.clone();
        self.index += 1;
        self.advances.fetch_add(1, Ordering::SeqCst);
        Some(SeqItem::Value(value))
    }
}

/// One async enumeration of a [`CountingSource`].
pub struct CountingStream<T> {
    items: Arc<Vec<T>>,
    index: usize,
    advances: Arc<AtomicUsize>,
    pend_before_each: bool,
    pended: bool,
}

impl<T: Clone> Stream for CountingStream<T> {
    type Item = SeqItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.pend_before_each && !this.pended && this.index < this.items.len() {
            this.pended = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        this.pended = false;
        match this.items.get(this.index) {
            Some(value) => {
                let value = value.clone();
                this.index += 1;
                this.advances.fetch_add(1, Ordering::SeqCst);
                Poll::Ready(Some(SeqItem::Value(value)))
            }
            None => Poll::Ready(None),
        }
    }
}

/// A stream that stays pending forever, for cancellation tests.
pub struct NeverStream<T> {
    _marker: std::marker::PhantomData<T>,
}

impl<T> NeverStream<T> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Stream for NeverStream<T> {
    type Item = SeqItem<T>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Pending
    }
}
