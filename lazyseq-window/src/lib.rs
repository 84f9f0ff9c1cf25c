// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Windowing, batching and segmenting operators over lazy sequences.
//!
//! Windows and batches are independently owned snapshots, never views into
//! shared state; segments are maximal contiguous runs between boundaries
//! detected by a caller-supplied predicate.

pub mod batch;
pub mod segment;
pub mod window;

pub use self::batch::{batch, Batch};
pub use self::segment::{segment, Segment};
pub use self::window::{window_left, window_right, WindowLeft, WindowRight};

use lazyseq_core::Result;

/// Extension methods bringing the windowing operators onto any iterator.
pub trait WindowingExt: Iterator + Sized {
    /// See [`window_left`].
    ///
    /// # Errors
    ///
    /// Fails with [`lazyseq_core::SeqError::InvalidArgument`] if `size`
    /// is 0.
    fn window_left(self, size: usize) -> Result<WindowLeft<Self>>
    where
        Self::Item: Clone,
    {
        window_left(self, size)
    }

    /// See [`window_right`].
    ///
    /// # Errors
    ///
    /// Fails with [`lazyseq_core::SeqError::InvalidArgument`] if `size`
    /// is 0.
    fn window_right(self, size: usize) -> Result<WindowRight<Self>>
    where
        Self::Item: Clone,
    {
        window_right(self, size)
    }

    /// See [`batch`].
    ///
    /// # Errors
    ///
    /// Fails with [`lazyseq_core::SeqError::InvalidArgument`] if `size`
    /// is 0.
    fn batch(self, size: usize) -> Result<Batch<Self>> {
        batch(self, size)
    }

    /// See [`segment`].
    fn segment<P>(self, is_new_segment: P) -> Segment<Self, P>
    where
        P: FnMut(&Self::Item, &Self::Item, usize) -> bool,
    {
        segment(self, is_new_segment)
    }
}

impl<I: Iterator> WindowingExt for I {}
