// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::{Result, SeqError};

/// Groups consecutive elements into non-overlapping batches of up to
/// `size`; a trailing partial batch is emitted at exhaustion.
///
/// The size is validated eagerly even though iteration is deferred.
///
/// # Errors
///
/// Fails with [`SeqError::InvalidArgument`] if `size` is 0.
///
/// # Examples
///
/// ```
/// use lazyseq_window::batch;
///
/// let batches: Vec<_> = batch(1..=5, 2).unwrap().collect();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn batch<I>(source: I, size: usize) -> Result<Batch<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(SeqError::invalid_argument("batch size must be at least 1"));
    }
    Ok(Batch {
        source: source.into_iter(),
        size,
    })
}

/// Iterator state for [`batch`].
pub struct Batch<I> {
    source: I,
    size: usize,
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.source.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
