// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared memoizing buffers for multi-reader iteration over single-pass
//! sources, in synchronous ([`SharedBuffer`]) and asynchronous
//! ([`AsyncSharedBuffer`]) renditions.
//!
//! Both share one design: an append-only cache per generation, a single
//! serialized advance of the wrapped source, fault capture with
//! identity-preserving replay, and explicit reset/dispose lifecycles.

pub mod async_shared_buffer;
pub mod reader;
pub mod shared_buffer;

pub use self::async_shared_buffer::{AsyncReader, AsyncSharedBuffer, BoxSeqStream};
pub use self::reader::Reader;
pub use self::shared_buffer::SharedBuffer;
