// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lazyseq sequence-processing library.
//!
//! This module provides the error taxonomy shared by every lazyseq
//! operator. It defines a root [`SeqError`] type with specific variants for
//! different failure modes, allowing library users to handle errors
//! appropriately.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::{Result, SeqError};
//!
//! fn validate(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(SeqError::invalid_argument("size must be at least 1"));
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

/// Root error type for all lazyseq operations.
///
/// Faults captured from a wrapped source are replayed to every reader that
/// reaches the failing index, so the whole enum is cheaply cloneable; the
/// wrapped source error sits behind an [`Arc`], which keeps the replayed
/// error identical to the one captured first.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeqError {
    /// An invalid construction parameter, detected eagerly at call time
    /// even though sequence execution is otherwise deferred.
    #[error("invalid argument: {context}")]
    InvalidArgument {
        /// Which parameter was rejected and why
        context: String,
    },

    /// An operation was attempted on a buffer (or one of its readers)
    /// after `dispose()`.
    #[error("{resource} has been disposed")]
    Disposed {
        /// The disposed resource, e.g. `"shared buffer"`
        resource: &'static str,
    },

    /// The operation is not valid in the current state, e.g. a reset
    /// racing an in-progress reader call.
    #[error("invalid operation: {context}")]
    InvalidOperation {
        /// Description of the state conflict
        context: String,
    },

    /// An error raised by a wrapped source during advance, captured once
    /// and replayed verbatim to every reader reaching the failing index.
    #[error("source fault: {fault}")]
    SourceFault {
        /// The captured source error
        fault: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The advance was interrupted by a cancellation signal.
    #[error("cancelled: {context}")]
    Cancelled {
        /// Where the cancellation was observed
        context: String,
    },

    /// Index-based access beyond the valid bounds.
    #[error("index {index} out of range: {context}")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// The valid bounds at the time of the call
        context: String,
    },

    /// A time-bounded advance exceeded its allowed duration.
    #[error("timeout: {context}")]
    Timeout {
        /// Context about the timeout (e.g. duration)
        context: String,
    },
}

impl SeqError {
    /// Create an invalid-argument error with the given context.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create a disposed error naming the dead resource.
    pub const fn disposed(resource: &'static str) -> Self {
        Self::Disposed { resource }
    }

    /// Create an invalid-operation error with the given context.
    pub fn invalid_operation(context: impl Into<String>) -> Self {
        Self::InvalidOperation {
            context: context.into(),
        }
    }

    /// Capture a source error for later replay.
    pub fn source_fault(fault: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SourceFault {
            fault: Arc::new(fault),
        }
    }

    /// Create a cancellation error with the given context.
    pub fn cancelled(context: impl Into<String>) -> Self {
        Self::Cancelled {
            context: context.into(),
        }
    }

    /// Create an out-of-range error for the given index.
    pub fn out_of_range(index: usize, context: impl Into<String>) -> Self {
        Self::OutOfRange {
            index,
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context.
    pub fn timeout_error(context: impl Into<String>) -> Self {
        Self::Timeout {
            context: context.into(),
        }
    }

    /// `true` if this error is a captured source fault.
    #[must_use]
    pub const fn is_source_fault(&self) -> bool {
        matches!(self, Self::SourceFault { .. })
    }

    /// `true` if this error marks a disposed buffer or reader.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed { .. })
    }

    /// `true` if this error is a cancellation outcome.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns `true` when `other` is a replay of the same captured fault.
    ///
    /// Captured faults are shared behind an `Arc`, so replays compare by
    /// pointer identity rather than by message.
    #[must_use]
    pub fn same_fault(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SourceFault { fault: a }, Self::SourceFault { fault: b }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

/// Specialized `Result` type for lazyseq operations.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Extension trait for converting arbitrary errors into [`SeqError`].
///
/// Automatically implemented for all `std::error::Error + Send + Sync`
/// types, so sources can surface their own error types as captured faults.
pub trait IntoSeqError {
    /// Convert this error into a replayable [`SeqError::SourceFault`].
    fn into_seq_error(self) -> SeqError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoSeqError for E {
    fn into_seq_error(self) -> SeqError {
        SeqError::source_fault(self)
    }
}
