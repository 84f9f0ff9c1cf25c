// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy pull-based sequence operators.
//!
//! This facade re-exports the lazyseq workspace surface:
//!
//! - [`SharedBuffer`] / [`AsyncSharedBuffer`] — multi-reader memoizing
//!   buffers over single-pass sources, with publish mode, fault replay and
//!   explicit reset/dispose lifecycles;
//! - [`merge_join`] and [`OrderedMergeExt`] — sorted merge-join and N-way
//!   ordered merge over key-sorted inputs;
//! - [`window_left`] / [`window_right`] / [`batch`] / [`segment`] —
//!   snapshot windowing, size-bounded batching and predicate segmenting.
//!
//! All operators defer consumption: constructing one never pulls from its
//! source; iteration does.

pub use lazyseq_buffer::{AsyncReader, AsyncSharedBuffer, BoxSeqStream, Reader, SharedBuffer};
pub use lazyseq_core::{IntoSeqError, Result, SeqError, SeqItem};
pub use lazyseq_ordered_join::{
    merge_join, merge_join_by, JoinKind, MergeJoin, OrderedMerge, OrderedMergeExt,
};
pub use lazyseq_window::{
    batch, segment, window_left, window_right, Batch, Segment, WindowLeft, WindowRight,
    WindowingExt,
};

/// Commonly used imports.
pub mod prelude {
    pub use lazyseq_buffer::{AsyncSharedBuffer, SharedBuffer};
    pub use lazyseq_core::{Result, SeqError, SeqItem};
    pub use lazyseq_ordered_join::{merge_join, merge_join_by, JoinKind, OrderedMergeExt};
    pub use lazyseq_window::WindowingExt;
}
