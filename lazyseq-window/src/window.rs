// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding-window operators.
//!
//! Every emitted window is a freshly allocated, independently owned
//! snapshot of up to `size` consecutive elements; mutating one window is
//! never observable in any other, previously or subsequently yielded.

use std::collections::VecDeque;

use lazyseq_core::{Result, SeqError};

/// Fixed-size sliding windows with the left edge advancing.
///
/// Windows keep length `size` through the body of the sequence and shrink
/// down to length 1 as the source runs out. The size is validated eagerly
/// even though iteration itself is deferred.
///
/// # Errors
///
/// Fails with [`SeqError::InvalidArgument`] if `size` is 0.
///
/// # Examples
///
/// ```
/// use lazyseq_window::window_left;
///
/// let windows: Vec<_> = window_left(1..=4, 3).unwrap().collect();
/// assert_eq!(windows, vec![
///     vec![1, 2, 3],
///     vec![2, 3, 4],
///     vec![3, 4],
///     vec![4],
/// ]);
/// ```
pub fn window_left<I>(source: I, size: usize) -> Result<WindowLeft<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if size == 0 {
        return Err(SeqError::invalid_argument(
            "window size must be at least 1",
        ));
    }
    Ok(WindowLeft {
        source: Some(source.into_iter()),
        size,
        buffer: VecDeque::with_capacity(size),
    })
}

/// Sliding windows with the right edge advancing: they grow from length 1
/// up to `size` and then stay at `size`.
///
/// # Errors
///
/// Fails with [`SeqError::InvalidArgument`] if `size` is 0.
///
/// # Examples
///
/// ```
/// use lazyseq_window::window_right;
///
/// let windows: Vec<_> = window_right(1..=4, 3).unwrap().collect();
/// assert_eq!(windows, vec![
///     vec![1],
///     vec![1, 2],
///     vec![1, 2, 3],
///     vec![2, 3, 4],
/// ]);
/// ```
pub fn window_right<I>(source: I, size: usize) -> Result<WindowRight<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if size == 0 {
        return Err(SeqError::invalid_argument(
            "window size must be at least 1",
        ));
    }
    Ok(WindowRight {
        source: source.into_iter(),
        size,
        buffer: VecDeque::with_capacity(size),
    })
}

/// Iterator state for [`window_left`].
pub struct WindowLeft<I: Iterator> {
    /// Dropped once exhausted; the remaining windows drain the buffer.
    source: Option<I>,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for WindowLeft<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = &mut self.source {
            while self.buffer.len() < self.size {
                match source.next() {
                    Some(item) => self.buffer.push_back(item),
                    None => {
                        self.source = None;
                        break;
                    }
                }
            }
        }
        if self.buffer.is_empty() {
            return None;
        }
        let window: Vec<I::Item> = self.buffer.iter().cloned().collect();
        self.buffer.pop_front();
        Some(window)
    }
}

/// Iterator state for [`window_right`].
pub struct WindowRight<I: Iterator> {
    source: I,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for WindowRight<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        self.buffer.push_back(item);
        if self.buffer.len() > self.size {
            self.buffer.pop_front();
        }
        Some(self.buffer.iter().cloned().collect())
    }
}
