// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered-merge algorithms over key-sorted lazy sequences: the binary
//! [`merge_join`] family (inner/left/right/full outer) and an N-way
//! [`OrderedMerge`].
//!
//! Both assume their inputs are already sorted by the configured comparer;
//! neither is responsible for sorting.

pub mod merge_join;
pub mod ordered_merge;

pub use self::merge_join::{merge_join, merge_join_by, JoinKind, MergeJoin};
pub use self::ordered_merge::{OrderedMerge, OrderedMergeExt};
