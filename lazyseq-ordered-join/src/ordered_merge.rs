// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

/// N-way ordered merge over pre-sorted pull-based sequences.
/// Items are emitted smallest-first according to the caller's comparer.
///
/// One element per source is buffered; each step picks the minimum among
/// the buffered heads and refills that slot, so the merge runs in one pass
/// over every input.
pub struct OrderedMerge<I, C>
where
    I: Iterator,
{
    sources: Vec<I>,
    buffered: Vec<Option<I::Item>>,
    done: Vec<bool>,
    comparer: C,
}

impl<I, C> OrderedMerge<I, C>
where
    I: Iterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    #[must_use]
    pub fn new(sources: Vec<I>, comparer: C) -> Self {
        let count = sources.len();
        Self {
            sources,
            buffered: (0..count).map(|_| None).collect(),
            done: vec![false; count],
            comparer,
        }
    }
}

impl<I, C> Iterator for OrderedMerge<I, C>
where
    I: Iterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // Fill empty buffer slots from sources that are still live.
        for i in 0..self.sources.len() {
            if self.buffered[i].is_none() && !self.done[i] {
                match self.sources[i].next() {
                    Some(item) => self.buffered[i] = Some(item),
                    None => self.done[i] = true,
                }
            }
        }

        // Find the minimum among the buffered heads; ties go to the
        // earliest source, keeping the merge stable.
        let mut min: Option<(usize, &I::Item)> = None;
        for (i, slot) in self.buffered.iter().enumerate() {
            if let Some(val) = slot {
                let is_smaller = match &min {
                    None => true,
                    Some((_, current)) => (self.comparer)(val, current) == Ordering::Less,
                };
                if is_smaller {
                    min = Some((i, val));
                }
            }
        }

        min.map(|(idx, _)| idx)
            .and_then(|idx| self.buffered[idx].take())
    }
}

/// Extension trait for merging a vector of sorted iterators in order.
pub trait OrderedMergeExt: Sized {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    /// Merges the sources by the given comparer, smallest items first.
    fn ordered_merge_by<C>(self, comparer: C) -> OrderedMerge<Self::Iter, C>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering;

    /// Merges the sources by the items' natural ordering.
    fn ordered_merge(self) -> OrderedMerge<Self::Iter, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self::Item: Ord,
    {
        self.ordered_merge_by(Self::Item::cmp)
    }
}

impl<I> OrderedMergeExt for Vec<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Iter = I;

    fn ordered_merge_by<C>(self, comparer: C) -> OrderedMerge<I, C>
    where
        C: Fn(&I::Item, &I::Item) -> Ordering,
    {
        OrderedMerge::new(self, comparer)
    }
}
