// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous shared memoizing buffer.
//!
//! Same contract as the synchronous [`SharedBuffer`](crate::SharedBuffer),
//! with "at most one advance in flight" expressed as a single async mutex
//! around the source slot: concurrent readers that both miss the cache
//! queue on the slot, and whoever acquires it second finds the cache
//! already grown and serves from it instead of pulling again.

use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use lazyseq_core::{Result, SeqError, SeqItem};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::shared_buffer::Terminal;

/// Boxed item stream as produced by an async source factory.
pub type BoxSeqStream<T> = Pin<Box<dyn Stream<Item = SeqItem<T>> + Send + 'static>>;

type AsyncSourceFactory<T> = Box<dyn FnMut() -> BoxSeqStream<T> + Send>;

/// Owns the source factory and the live stream handle. Guarded by an async
/// mutex: holding the lock *is* the in-flight advance.
struct SourceSlot<T> {
    factory: AsyncSourceFactory<T>,
    stream: Option<BoxSeqStream<T>>,
    /// Generation the live stream was started under. A stale handle is
    /// dropped by the next slot holder instead of being resumed.
    stream_generation: u64,
}

struct AsyncState<T> {
    cache: Vec<T>,
    generation: u64,
    terminal: Terminal,
    readers: usize,
}

struct AsyncShared<T> {
    state: Mutex<AsyncState<T>>,
    slot: tokio::sync::Mutex<SourceSlot<T>>,
}

/// Where new async readers start; mirrors the sync buffer's two modes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ReadFrom {
    Start,
    Frontier,
}

/// Outcome of consulting the shared state without touching the source.
enum Step<T> {
    Value(T),
    End,
    NeedsAdvance,
}

/// Outcome of racing a source pull against a cancellation token.
enum Pulled<T> {
    Item(Option<SeqItem<T>>),
    Cancelled,
}

/// A multi-reader memoizing wrapper around one single-pass async source.
///
/// # Examples
///
/// ```
/// use futures::stream;
/// use lazyseq_buffer::AsyncSharedBuffer;
/// use lazyseq_core::SeqItem;
///
/// # async fn example() {
/// let buffer = AsyncSharedBuffer::memoize(|| stream::iter((0..3).map(SeqItem::Value)));
/// let mut a = buffer.new_reader().unwrap();
/// let mut b = buffer.new_reader().unwrap();
///
/// assert_eq!(a.next().await.unwrap(), Some(0));
/// assert_eq!(b.next().await.unwrap(), Some(0)); // cache hit, no second pull
/// # }
/// ```
pub struct AsyncSharedBuffer<T> {
    shared: Arc<AsyncShared<T>>,
    mode: ReadFrom,
}

impl<T> Clone for AsyncSharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            mode: self.mode,
        }
    }
}

impl<T: Clone + Send + 'static> AsyncSharedBuffer<T> {
    fn with_mode(factory: AsyncSourceFactory<T>, mode: ReadFrom) -> Self {
        Self {
            shared: Arc::new(AsyncShared {
                state: Mutex::new(AsyncState {
                    cache: Vec::new(),
                    generation: 0,
                    terminal: Terminal::Open,
                    readers: 0,
                }),
                slot: tokio::sync::Mutex::new(SourceSlot {
                    factory,
                    stream: None,
                    stream_generation: 0,
                }),
            }),
            mode,
        }
    }

    /// Memoizes `factory`'s stream: every reader replays the shared cache
    /// from the beginning. The factory runs lazily on first read and again
    /// after each [`reset`](Self::reset).
    pub fn memoize<F, S>(mut factory: F) -> Self
    where
        F: FnMut() -> S + Send + 'static,
        S: Stream<Item = SeqItem<T>> + Send + 'static,
    {
        Self::with_mode(
            Box::new(move || Box::pin(factory()) as BoxSeqStream<T>),
            ReadFrom::Start,
        )
    }

    /// Like [`memoize`](Self::memoize), but late readers join at the cache
    /// frontier and only observe elements pulled after their creation.
    pub fn publish<F, S>(mut factory: F) -> Self
    where
        F: FnMut() -> S + Send + 'static,
        S: Stream<Item = SeqItem<T>> + Send + 'static,
    {
        Self::with_mode(
            Box::new(move || Box::pin(factory()) as BoxSeqStream<T>),
            ReadFrom::Frontier,
        )
    }

    /// Creates an independent cursor; never advances the source.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::Disposed`] after [`dispose`](Self::dispose).
    pub fn new_reader(&self) -> Result<AsyncReader<T>> {
        let mut state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return Err(SeqError::disposed("shared buffer"));
        }
        state.readers += 1;
        let position = match self.mode {
            ReadFrom::Start => 0,
            ReadFrom::Frontier => state.cache.len(),
        };
        Ok(AsyncReader {
            shared: Arc::clone(&self.shared),
            position,
            generation: state.generation,
        })
    }

    /// Clears the cache and increments the generation; the next read
    /// restarts the source from scratch. A reader whose advance is in
    /// flight when the reset lands fails with
    /// `invalid operation: buffer reset during iteration`.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::Disposed`] after [`dispose`](Self::dispose).
    pub fn reset(&self) -> Result<()> {
        let mut state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return Err(SeqError::disposed("shared buffer"));
        }
        state.cache.clear();
        state.generation += 1;
        state.terminal = Terminal::Open;
        debug!(generation = state.generation, "async buffer reset");
        // The live stream handle (if any) is stale now; the next slot
        // holder compares stream_generation and drops it.
        Ok(())
    }

    /// Permanently tears the buffer down. Idempotent. Every subsequent
    /// reader call fails with [`SeqError::Disposed`].
    pub fn dispose(&self) {
        {
            let mut state = self.shared.state.lock();
            if matches!(state.terminal, Terminal::Disposed) {
                return;
            }
            state.cache.clear();
            state.terminal = Terminal::Disposed;
            debug!("async buffer disposed");
        }
        // Release the source handle eagerly when nobody is advancing;
        // otherwise the in-flight holder drops it on its disposed check.
        if let Ok(mut slot) = self.shared.slot.try_lock() {
            slot.stream = None;
        }
    }

    /// Number of elements cached in the current generation.
    #[must_use]
    pub fn count(&self) -> usize {
        self.shared.state.lock().cache.len()
    }

    /// Number of currently live readers.
    #[must_use]
    pub fn reader_count(&self) -> usize {
        self.shared.state.lock().readers
    }
}

/// An independent cursor into an [`AsyncSharedBuffer`].
pub struct AsyncReader<T> {
    shared: Arc<AsyncShared<T>>,
    position: usize,
    generation: u64,
}

impl<T> std::fmt::Debug for AsyncReader<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncReader")
            .field("position", &self.position)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<T> AsyncReader<T> {
    /// The next cache index this reader will ask for.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: Clone + Send + 'static> AsyncReader<T> {
    /// Pulls the next element, advancing the shared source if this reader
    /// is at the cache frontier. Suspends exactly where the source's own
    /// advance suspends.
    ///
    /// # Errors
    ///
    /// Same contract as the sync [`Reader::next`](crate::Reader::next).
    pub async fn next(&mut self) -> Result<Option<T>> {
        self.next_inner(None).await
    }

    /// Like [`next`](Self::next), racing the advance against `token`.
    ///
    /// A cancellation that interrupts a pending advance is captured as a
    /// [`SeqError::Cancelled`] fault at the current frontier: the source
    /// handle is released exactly as on a source fault, and every reader
    /// reaching that index observes the cancellation until the buffer is
    /// reset. Resuming the half-abandoned pull is not possible without
    /// risking a duplicated source advance, so the outcome is terminal for
    /// the generation.
    ///
    /// # Errors
    ///
    /// [`SeqError::Cancelled`] on cancellation, otherwise as
    /// [`next`](Self::next).
    pub async fn next_with_cancellation(
        &mut self,
        token: &CancellationToken,
    ) -> Result<Option<T>> {
        self.next_inner(Some(token)).await
    }

    async fn next_inner(&mut self, token: Option<&CancellationToken>) -> Result<Option<T>> {
        match self.step()? {
            Step::Value(value) => return Ok(Some(value)),
            Step::End => return Ok(None),
            Step::NeedsAdvance => {}
        }

        // Single-advance-in-flight: holding the slot lock is the advance.
        let shared = Arc::clone(&self.shared);
        let mut slot = shared.slot.lock().await;

        // Another reader may have advanced while this one queued.
        match self.step()? {
            Step::Value(value) => return Ok(Some(value)),
            Step::End => return Ok(None),
            Step::NeedsAdvance => {}
        }

        let generation = self.generation;
        if slot.stream.is_none() || slot.stream_generation != generation {
            trace!(generation, "starting source enumeration");
            slot.stream = Some((slot.factory)());
            slot.stream_generation = generation;
        }
        let stream = slot
            .stream
            .as_mut()
            .ok_or_else(|| SeqError::invalid_operation("source handle missing"))?;

        let pulled = match token {
            Some(token) => {
                tokio::select! {
                    item = stream.next() => Pulled::Item(item),
                    () = token.cancelled() => Pulled::Cancelled,
                }
            }
            None => Pulled::Item(stream.next().await),
        };
        let item = match pulled {
            Pulled::Item(item) => item,
            Pulled::Cancelled => {
                slot.stream = None;
                return Err(self.capture_cancellation(generation));
            }
        };

        let mut state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            slot.stream = None;
            return Err(SeqError::disposed("shared buffer"));
        }
        if state.generation != generation {
            // A reset landed mid-pull; the handle belongs to the dead
            // generation.
            slot.stream = None;
            return Err(SeqError::invalid_operation("buffer reset during iteration"));
        }

        match item {
            Some(SeqItem::Value(value)) => {
                state.cache.push(value.clone());
                self.position += 1;
                Ok(Some(value))
            }
            Some(SeqItem::Error(error)) => {
                let index = state.cache.len();
                state.terminal = Terminal::Faulted {
                    index,
                    error: error.clone(),
                };
                debug!(index, "source fault captured");
                drop(state);
                slot.stream = None;
                Err(error)
            }
            None => {
                state.terminal = Terminal::Exhausted;
                debug!(cached = state.cache.len(), "source exhausted");
                drop(state);
                slot.stream = None;
                Ok(None)
            }
        }
    }

    /// Records a cancellation as a replayable fault at the frontier, unless
    /// the buffer was disposed or reset in the meantime.
    fn capture_cancellation(&self, generation: u64) -> SeqError {
        let error = SeqError::cancelled("advance interrupted by cancellation");
        let mut state = self.shared.state.lock();
        if state.generation == generation && matches!(state.terminal, Terminal::Open) {
            let index = state.cache.len();
            state.terminal = Terminal::Faulted {
                index,
                error: error.clone(),
            };
            debug!(index, "cancellation captured as fault");
        }
        error
    }

    /// Serves whatever the shared state alone can answer.
    fn step(&mut self) -> Result<Step<T>> {
        let state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return Err(SeqError::disposed("shared buffer"));
        }
        if state.generation != self.generation {
            return Err(SeqError::invalid_operation(
                "buffer was reset underneath this reader",
            ));
        }
        if self.position < state.cache.len() {
            let value = state.cache[self.position].clone();
            drop(state);
            self.position += 1;
            return Ok(Step::Value(value));
        }
        match &state.terminal {
            Terminal::Exhausted => Ok(Step::End),
            Terminal::Faulted { error, .. } => Err(error.clone()),
            Terminal::Open => Ok(Step::NeedsAdvance),
            Terminal::Disposed => Err(SeqError::disposed("shared buffer")),
        }
    }

    /// Adapts this reader into a `Stream` of in-band items. An error is
    /// yielded once and then the stream ends; use [`next`](Self::next)
    /// directly to observe fault replay.
    pub fn into_stream(self) -> impl Stream<Item = SeqItem<T>> + Send {
        futures::stream::unfold((self, false), |(mut reader, errored)| async move {
            if errored {
                return None;
            }
            match reader.next().await {
                Ok(Some(value)) => Some((SeqItem::Value(value), (reader, false))),
                Ok(None) => None,
                Err(error) => Some((SeqItem::Error(error), (reader, true))),
            }
        })
    }
}

impl<T> Drop for AsyncReader<T> {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.readers = state.readers.saturating_sub(1);
    }
}
