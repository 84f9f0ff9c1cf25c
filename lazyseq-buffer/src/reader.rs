// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use lazyseq_core::{Result, SeqError, SeqItem};

use crate::shared_buffer::{advance_source, BufferShared, Terminal};

/// An independent cursor into a [`SharedBuffer`](crate::SharedBuffer).
///
/// A reader is a plain `(position, generation)` pair holding a handle to
/// the buffer; it never borrows into the cache, so buffer growth and reset
/// cannot invalidate it from under safe code. Values are cloned out of the
/// cache on every read.
pub struct Reader<T> {
    shared: Arc<BufferShared<T>>,
    position: usize,
    generation: u64,
    /// Set once the `Iterator` impl has yielded an in-band error, so
    /// for-loops terminate instead of replaying the fault forever.
    fused: bool,
}

impl<T> std::fmt::Debug for Reader<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("position", &self.position)
            .field("generation", &self.generation)
            .field("fused", &self.fused)
            .finish_non_exhaustive()
    }
}

impl<T> Reader<T> {
    pub(crate) fn new(shared: Arc<BufferShared<T>>, position: usize, generation: u64) -> Self {
        Self {
            shared,
            position,
            generation,
            fused: false,
        }
    }

    /// The next cache index this reader will ask for.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: Clone + Send + 'static> Reader<T> {
    /// Pulls the next element, advancing the shared buffer if this reader
    /// is at the cache frontier.
    ///
    /// Returns `Ok(None)` at end of sequence. If another reader is already
    /// advancing the source, the call waits for that advance and then
    /// serves from the cache; the source is never advanced twice for the
    /// same index.
    ///
    /// # Errors
    ///
    /// - [`SeqError::Disposed`] after the buffer is disposed.
    /// - [`SeqError::InvalidOperation`] when the buffer was reset under
    ///   this reader, or when a reset lands while this call is mid-advance.
    /// - The captured source fault, replayed on every call that reaches the
    ///   faulted index until the buffer is reset.
    pub fn next(&mut self) -> Result<Option<T>> {
        loop {
            let mut state = self.shared.state.lock();
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
                self.position += 1;
                return Ok(Some(value));
            }
            match &state.terminal {
                Terminal::Exhausted => return Ok(None),
                // position >= cache.len() == fault index, so every reader
                // landing here observes the same captured error.
                Terminal::Faulted { error, .. } => return Err(error.clone()),
                Terminal::Open => {}
                Terminal::Disposed => return Err(SeqError::disposed("shared buffer")),
            }
            if state.advancing {
                // Another reader owns the in-flight advance; wait for its
                // commit and re-check the cache.
                self.shared.advanced.wait(&mut state);
                continue;
            }
            return match advance_source(&self.shared, state, self.generation) {
                Ok(Some(value)) => {
                    self.position += 1;
                    Ok(Some(value))
                }
                other => other,
            };
        }
    }
}

impl<T: Clone + Send + 'static> Iterator for Reader<T> {
    type Item = SeqItem<T>;

    /// In-band rendition of [`Reader::next`]: errors are yielded once as
    /// [`SeqItem::Error`] and then the iterator ends, matching the
    /// error-terminates-the-sequence convention. Call [`Reader::next`]
    /// directly to observe fault replay.
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match Reader::next(self) {
            Ok(Some(value)) => Some(SeqItem::Value(value)),
            Ok(None) => None,
            Err(error) => {
                self.fused = true;
                Some(SeqItem::Error(error))
            }
        }
    }
}

impl<T> Drop for Reader<T> {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.readers = state.readers.saturating_sub(1);
    }
}
