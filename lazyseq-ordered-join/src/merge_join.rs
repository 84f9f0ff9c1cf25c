// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streaming sorted merge-join.
//!
//! Classic merge-join over two key-sorted inputs: one lookahead element per
//! side, synchronized advancement in O(n+m), equal-key runs buffered so the
//! cross product within a key group can be emitted. Behavior is specified
//! only for inputs already ordered by the caller's comparer; unordered
//! input yields undefined pairing, not an error.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Which unmatched sides of a merge-join are included in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Only key-matched pairs.
    Inner,
    /// Matched pairs plus unmatched left elements as `(left, None)`.
    LeftOuter,
    /// Matched pairs plus unmatched right elements as `(None, right)`.
    RightOuter,
    /// Matched pairs plus unmatched elements of both sides.
    FullOuter,
}

impl JoinKind {
    /// `true` if unmatched left elements appear in the output.
    #[must_use]
    pub const fn includes_left(self) -> bool {
        matches!(self, Self::LeftOuter | Self::FullOuter)
    }

    /// `true` if unmatched right elements appear in the output.
    #[must_use]
    pub const fn includes_right(self) -> bool {
        matches!(self, Self::RightOuter | Self::FullOuter)
    }
}

/// Joins two key-sorted sequences in key order.
///
/// Construction does not consume either input; pairing begins when the
/// returned iterator is first advanced.
///
/// # Examples
///
/// ```
/// use lazyseq_ordered_join::{merge_join, JoinKind};
///
/// let left = vec![(1, "a"), (2, "b")];
/// let right = vec![(2, "x"), (3, "y")];
///
/// let joined: Vec<_> = merge_join(
///     left,
///     right,
///     |l: &(i32, &str)| l.0,
///     |r: &(i32, &str)| r.0,
///     |a, b| a.cmp(b),
///     JoinKind::FullOuter,
/// )
/// .collect();
///
/// assert_eq!(joined, vec![
///     (Some((1, "a")), None),
///     (Some((2, "b")), Some((2, "x"))),
///     (None, Some((3, "y"))),
/// ]);
/// ```
pub fn merge_join<IL, IR, L, R, K, FL, FR, C>(
    left: IL,
    right: IR,
    left_key: FL,
    right_key: FR,
    comparer: C,
    kind: JoinKind,
) -> MergeJoin<IL::IntoIter, IR::IntoIter, FL, FR, C>
where
    IL: IntoIterator<Item = L>,
    IR: IntoIterator<Item = R>,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    C: Fn(&K, &K) -> Ordering,
    L: Clone,
    R: Clone,
{
    MergeJoin {
        left: Some(left.into_iter()),
        right: Some(right.into_iter()),
        left_key,
        right_key,
        comparer,
        kind,
        left_head: None,
        right_head: None,
        started: false,
        pending: VecDeque::new(),
    }
}

/// [`merge_join`] with the natural ordering of `K`.
pub fn merge_join_by<IL, IR, L, R, K, FL, FR>(
    left: IL,
    right: IR,
    left_key: FL,
    right_key: FR,
    kind: JoinKind,
) -> MergeJoin<IL::IntoIter, IR::IntoIter, FL, FR, fn(&K, &K) -> Ordering>
where
    IL: IntoIterator<Item = L>,
    IR: IntoIterator<Item = R>,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    K: Ord,
    L: Clone,
    R: Clone,
{
    merge_join(left, right, left_key, right_key, K::cmp, kind)
}

/// Iterator state for [`merge_join`].
pub struct MergeJoin<IL, IR, FL, FR, C>
where
    IL: Iterator,
    IR: Iterator,
{
    /// Dropped (not just exhausted) as soon as its side ends.
    left: Option<IL>,
    right: Option<IR>,
    left_key: FL,
    right_key: FR,
    comparer: C,
    kind: JoinKind,
    left_head: Option<IL::Item>,
    right_head: Option<IR::Item>,
    started: bool,
    /// Cross-product pairs of the current equal-key group, plus nothing
    /// else: all other pairs stream straight through.
    pending: VecDeque<(Option<IL::Item>, Option<IR::Item>)>,
}

/// Outcome of comparing the two lookahead heads.
enum Step<K> {
    /// Left head is unmatched (smaller key, or right side exhausted).
    EmitLeft,
    /// Right head is unmatched.
    EmitRight,
    /// Keys matched; both equal-key runs must be gathered.
    EqualRuns(K, K),
    Done,
}

impl<IL, IR, FL, FR, C> MergeJoin<IL, IR, FL, FR, C>
where
    IL: Iterator,
    IR: Iterator,
{
    fn pull_left(&mut self) {
        if let Some(iter) = &mut self.left {
            match iter.next() {
                Some(item) => self.left_head = Some(item),
                None => self.left = None,
            }
        }
    }

    fn pull_right(&mut self) {
        if let Some(iter) = &mut self.right {
            match iter.next() {
                Some(item) => self.right_head = Some(item),
                None => self.right = None,
            }
        }
    }
}

impl<IL, IR, K, FL, FR, C> Iterator for MergeJoin<IL, IR, FL, FR, C>
where
    IL: Iterator,
    IR: Iterator,
    IL::Item: Clone,
    IR::Item: Clone,
    FL: Fn(&IL::Item) -> K,
    FR: Fn(&IR::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (Option<IL::Item>, Option<IR::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.pop_front() {
                return Some(pair);
            }
            if !self.started {
                self.started = true;
                self.pull_left();
                self.pull_right();
            }
            let step = match (&self.left_head, &self.right_head) {
                (None, None) => Step::Done,
                (Some(_), None) => Step::EmitLeft,
                (None, Some(_)) => Step::EmitRight,
                (Some(l), Some(r)) => {
                    let lk = (self.left_key)(l);
                    let rk = (self.right_key)(r);
                    match (self.comparer)(&lk, &rk) {
                        Ordering::Less => Step::EmitLeft,
                        Ordering::Greater => Step::EmitRight,
                        Ordering::Equal => Step::EqualRuns(lk, rk),
                    }
                }
            };

            match step {
                Step::Done => return None,
                Step::EmitLeft => {
                    let l = self.left_head.take();
                    self.pull_left();
                    if self.kind.includes_left() {
                        return Some((l, None));
                    }
                }
                Step::EmitRight => {
                    let r = self.right_head.take();
                    self.pull_right();
                    if self.kind.includes_right() {
                        return Some((None, r));
                    }
                }
                Step::EqualRuns(lk, rk) => {
                    // Matching is a cross product within the key group, so
                    // both runs must be buffered.
                    let mut left_run = Vec::new();
                    while let Some(l) = self.left_head.take() {
                        left_run.push(l);
                        self.pull_left();
                        let run_continues = self
                            .left_head
                            .as_ref()
                            .is_some_and(|next| {
                                (self.comparer)(&(self.left_key)(next), &lk) == Ordering::Equal
                            });
                        if !run_continues {
                            break;
                        }
                    }

                    let mut right_run = Vec::new();
                    while let Some(r) = self.right_head.take() {
                        right_run.push(r);
                        self.pull_right();
                        let run_continues = self
                            .right_head
                            .as_ref()
                            .is_some_and(|next| {
                                (self.comparer)(&(self.right_key)(next), &rk) == Ordering::Equal
                            });
                        if !run_continues {
                            break;
                        }
                    }

                    for l in &left_run {
                        for r in &right_run {
                            self.pending.push_back((Some(l.clone()), Some(r.clone())));
                        }
                    }
                }
            }
        }
    }
}
