// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Partitions a sequence into contiguous runs at predicate-detected
/// boundaries.
///
/// `is_new_segment` receives `(previous, current, index)` where `index` is
/// the current element's 0-based position in the source; it is never
/// consulted for the very first element, which always starts the first
/// segment. A `true` result finalizes the in-progress segment and starts a
/// new one with the current element. The final non-empty segment is
/// emitted at exhaustion; an empty source yields no segments.
///
/// Each segment is materialized eagerly as an independent `Vec` once its
/// boundary is detected, because the boundary decision is only knowable
/// one element late.
///
/// # Examples
///
/// ```
/// use lazyseq_window::segment;
///
/// let runs: Vec<_> =
///     segment(vec![1, 2, 10, 11, 3], |prev, curr, _| curr < prev).collect();
/// assert_eq!(runs, vec![vec![1, 2, 10, 11], vec![3]]);
/// ```
pub fn segment<I, P>(source: I, is_new_segment: P) -> Segment<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, &I::Item, usize) -> bool,
{
    Segment {
        source: source.into_iter(),
        is_new_segment,
        current: Vec::new(),
        next_index: 0,
        done: false,
    }
}

/// Iterator state for [`segment`].
pub struct Segment<I: Iterator, P> {
    source: I,
    is_new_segment: P,
    current: Vec<I::Item>,
    next_index: usize,
    done: bool,
}

impl<I, P> Iterator for Segment<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item, usize) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(item) => {
                    let index = self.next_index;
                    self.next_index += 1;
                    match self.current.last() {
                        Some(prev) if (self.is_new_segment)(prev, &item, index) => {
                            let finished = std::mem::replace(&mut self.current, vec![item]);
                            return Some(finished);
                        }
                        _ => self.current.push(item),
                    }
                }
                None => {
                    self.done = true;
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(std::mem::take(&mut self.current));
                }
            }
        }
    }
}
