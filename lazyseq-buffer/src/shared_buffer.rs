// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous shared memoizing buffer.
//!
//! [`SharedBuffer`] wraps one restartable, possibly side-effecting source
//! and lets any number of independent [`Reader`](crate::Reader) cursors pull
//! from the same cached history, driving at most one advance of the
//! underlying source at a time. The source is never pulled twice for the
//! same logical index, and one slow reader can never force a second
//! concurrent advance (which could corrupt unseekable sources such as file
//! or network streams).

use std::sync::Arc;

use lazyseq_core::{Result, SeqError, SeqItem};
use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

use crate::reader::Reader;

pub(crate) type SourceIter<T> = Box<dyn Iterator<Item = SeqItem<T>> + Send>;
pub(crate) type SourceFactory<T> = Box<dyn FnMut() -> SourceIter<T> + Send>;

/// Where a newly created reader starts in the cached history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadFrom {
    /// Memoize mode: readers replay the cache from index 0.
    Start,
    /// Publish mode: readers join at the current cache frontier and only
    /// observe elements pulled after their creation.
    Frontier,
}

/// Terminal condition of a buffer generation.
#[derive(Debug)]
pub(crate) enum Terminal {
    /// Still pulling from the source.
    Open,
    /// Source fully drained; the cache is complete until the next reset.
    Exhausted,
    /// The source faulted at `index`; the captured error is replayed to
    /// every reader reaching that index until the buffer is reset.
    Faulted { index: usize, error: SeqError },
    /// Permanently torn down; every subsequent operation fails.
    Disposed,
}

pub(crate) struct BufferState<T> {
    pub(crate) cache: Vec<T>,
    pub(crate) generation: u64,
    pub(crate) factory: SourceFactory<T>,
    pub(crate) source: Option<SourceIter<T>>,
    pub(crate) terminal: Terminal,
    /// One reader is mid-advance on the source, outside the state lock.
    pub(crate) advancing: bool,
    pub(crate) readers: usize,
}

pub(crate) struct BufferShared<T> {
    pub(crate) state: Mutex<BufferState<T>>,
    /// Signalled after every advance commit, reset and dispose, so readers
    /// parked behind a concurrent advance re-check the cache.
    pub(crate) advanced: Condvar,
}

/// A multi-reader memoizing wrapper around one lazy, single-pass source.
///
/// Cloning the handle shares the same buffer; [`SharedBuffer::dispose`]
/// through any clone poisons them all.
///
/// # Examples
///
/// ```
/// use lazyseq_buffer::SharedBuffer;
/// use lazyseq_core::SeqItem;
///
/// let buffer = SharedBuffer::memoize(|| (0..3).map(SeqItem::Value));
/// let mut a = buffer.new_reader().unwrap();
/// let mut b = buffer.new_reader().unwrap();
///
/// assert_eq!(a.next().unwrap(), Some(0));
/// assert_eq!(b.next().unwrap(), Some(0)); // served from cache, not the source
/// ```
pub struct SharedBuffer<T> {
    pub(crate) shared: Arc<BufferShared<T>>,
    pub(crate) mode: ReadFrom,
}

impl<T> Clone for SharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            mode: self.mode,
        }
    }
}

impl<T: Clone + Send + 'static> SharedBuffer<T> {
    fn with_mode(factory: SourceFactory<T>, mode: ReadFrom) -> Self {
        Self {
            shared: Arc::new(BufferShared {
                state: Mutex::new(BufferState {
                    cache: Vec::new(),
                    generation: 0,
                    factory,
                    source: None,
                    terminal: Terminal::Open,
                    advancing: false,
                    readers: 0,
                }),
                advanced: Condvar::new(),
            }),
            mode,
        }
    }

    /// Memoizes `factory`'s sequence: every reader replays the shared cache
    /// from the beginning, and the source is advanced at most once per
    /// logical index across all readers.
    ///
    /// The factory is invoked lazily on the first read, and again after
    /// each [`reset`](Self::reset) to restart enumeration from scratch.
    pub fn memoize<F, I>(mut factory: F) -> Self
    where
        F: FnMut() -> I + Send + 'static,
        I: Iterator<Item = SeqItem<T>> + Send + 'static,
    {
        Self::with_mode(
            Box::new(move || Box::new(factory()) as SourceIter<T>),
            ReadFrom::Start,
        )
    }

    /// Like [`memoize`](Self::memoize), but readers created after iteration
    /// has begun join at the current cache frontier instead of replaying
    /// from index 0.
    pub fn publish<F, I>(mut factory: F) -> Self
    where
        F: FnMut() -> I + Send + 'static,
        I: Iterator<Item = SeqItem<T>> + Send + 'static,
    {
        Self::with_mode(
            Box::new(move || Box::new(factory()) as SourceIter<T>),
            ReadFrom::Frontier,
        )
    }

    /// Memoizes a single-pass iterator that cannot be restarted.
    ///
    /// The first enumeration proceeds normally; after a
    /// [`reset`](Self::reset), the next read faults with
    /// [`SeqError::InvalidOperation`] since the source cannot be enumerated
    /// a second time.
    pub fn memoize_once<I>(iter: I) -> Self
    where
        I: Iterator<Item = SeqItem<T>> + Send + 'static,
    {
        let mut slot = Some(iter);
        Self::with_mode(
            Box::new(move || match slot.take() {
                Some(iter) => Box::new(iter) as SourceIter<T>,
                None => Box::new(std::iter::once(SeqItem::Error(
                    SeqError::invalid_operation("single-pass source cannot be restarted"),
                ))),
            }),
            ReadFrom::Start,
        )
    }

    /// Wraps an already materialized collection.
    ///
    /// No shared buffering is needed for a collection whose full contents
    /// are known up front, so the cache is seeded eagerly and the buffer
    /// starts exhausted. Observable behavior is identical to memoizing an
    /// iterator over `items`.
    pub fn preloaded(items: Vec<T>) -> Self {
        let buffer = Self::with_mode(
            Box::new(|| Box::new(std::iter::empty()) as SourceIter<T>),
            ReadFrom::Start,
        );
        {
            let mut state = buffer.shared.state.lock();
            state.cache = items;
            state.terminal = Terminal::Exhausted;
        }
        buffer
    }

    /// Creates an independent cursor over the shared cache.
    ///
    /// Creation never advances the source.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::Disposed`] after [`dispose`](Self::dispose).
    pub fn new_reader(&self) -> Result<Reader<T>> {
        let mut state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return Err(SeqError::disposed("shared buffer"));
        }
        state.readers += 1;
        let position = match self.mode {
            ReadFrom::Start => 0,
            ReadFrom::Frontier => state.cache.len(),
        };
        Ok(Reader::new(
            Arc::clone(&self.shared),
            position,
            state.generation,
        ))
    }

    /// Clears the cache, increments the generation and drops the source
    /// handle, so the next read restarts enumeration from scratch.
    ///
    /// A reader mid-`next()` when the reset lands fails with
    /// `invalid operation: buffer reset during iteration`; readers created
    /// under the old generation fail on their next call rather than
    /// silently observing the new cache.
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
        // If an advance is in flight the handle was taken out of the slot;
        // its holder observes the generation bump and drops it.
        state.source = None;
        debug!(generation = state.generation, "buffer reset");
        self.shared.advanced.notify_all();
        Ok(())
    }

    /// Permanently tears the buffer down. Idempotent.
    ///
    /// The cache and source handle are released; every subsequent reader
    /// call, including on readers positioned mid-cache, fails with
    /// [`SeqError::Disposed`].
    pub fn dispose(&self) {
        let mut state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return;
        }
        state.cache.clear();
        state.source = None;
        state.terminal = Terminal::Disposed;
        debug!("buffer disposed");
        self.shared.advanced.notify_all();
    }

    /// Number of elements cached in the current generation.
    ///
    /// Zero immediately after construction, reset or dispose.
    #[must_use]
    pub fn count(&self) -> usize {
        self.shared.state.lock().cache.len()
    }

    /// Number of currently live readers.
    #[must_use]
    pub fn reader_count(&self) -> usize {
        self.shared.state.lock().readers
    }

    /// Random access into the cached history without advancing anything.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::OutOfRange`] for an index at or beyond the
    /// cache frontier, and with [`SeqError::Disposed`] after
    /// [`dispose`](Self::dispose).
    pub fn at(&self, index: usize) -> Result<T> {
        let state = self.shared.state.lock();
        if matches!(state.terminal, Terminal::Disposed) {
            return Err(SeqError::disposed("shared buffer"));
        }
        state.cache.get(index).cloned().ok_or_else(|| {
            SeqError::out_of_range(index, format!("cache holds {} elements", state.cache.len()))
        })
    }
}

/// Advances the source by one step on behalf of `reader_generation`.
///
/// Called with the state lock held and `position == cache.len()`; the
/// actual pull happens outside the lock so reset and dispose stay
/// observable while the source is working. Returns the served value,
/// end-of-sequence as `Ok(None)`, or the captured/raced error.
pub(crate) fn advance_source<T: Clone>(
    shared: &BufferShared<T>,
    mut state: parking_lot::MutexGuard<'_, BufferState<T>>,
    reader_generation: u64,
) -> Result<Option<T>> {
    state.advancing = true;
    let mut source = match state.source.take() {
        Some(source) => source,
        None => {
            trace!("starting source enumeration");
            (state.factory)()
        }
    };
    drop(state);

    let item = source.next();

    let mut state = shared.state.lock();
    state.advancing = false;
    shared.advanced.notify_all();

    if matches!(state.terminal, Terminal::Disposed) {
        return Err(SeqError::disposed("shared buffer"));
    }
    if state.generation != reader_generation {
        // reset() landed while the pull was in flight; the handle belongs
        // to the dead generation and must not be resumed.
        drop(state);
        drop(source);
        return Err(SeqError::invalid_operation("buffer reset during iteration"));
    }

    match item {
        Some(SeqItem::Value(value)) => {
            state.cache.push(value.clone());
            state.source = Some(source);
            Ok(Some(value))
        }
        Some(SeqItem::Error(error)) => {
            let index = state.cache.len();
            state.terminal = Terminal::Faulted {
                index,
                error: error.clone(),
            };
            debug!(index, "source fault captured");
            Err(error)
        }
        None => {
            state.terminal = Terminal::Exhausted;
            debug!(cached = state.cache.len(), "source exhausted");
            Ok(None)
        }
    }
}
