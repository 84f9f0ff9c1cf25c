// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the lazyseq workspace: instrumented restartable
//! sources, error injection wrappers and assertion helpers.

pub mod counting_source;
pub mod error_injection;
pub mod helpers;

pub use self::counting_source::{CountingIter, CountingSource, CountingStream, NeverStream};
pub use self::error_injection::{ErrorInjectingIter, ErrorInjectingStream, InjectedError};
pub use self::helpers::{collect_stream, collect_values, expect_values, seq_values};
