// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SeqError;

/// A sequence item that is either a value or an in-band error.
///
/// Lazy pull-based sequences carry errors in band: a source that fails
/// mid-iteration yields `SeqItem::Error` instead of a value, and operators
/// propagate it without consuming further items. Both the synchronous
/// (`Iterator`) and asynchronous (`Stream`) renditions of a lazy sequence
/// use this as their item type.
#[derive(Debug, Clone)]
pub enum SeqItem<T> {
    /// A successful value
    Value(T),
    /// An error raised while producing the next value
    Error(SeqError),
}

impl<T: PartialEq> PartialEq for SeqItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SeqItem::Value(a), SeqItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> SeqItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, SeqItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, SeqItem::Error(_))
    }

    /// Converts from `SeqItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            SeqItem::Value(v) => Some(v),
            SeqItem::Error(_) => None,
        }
    }

    /// Converts from `SeqItem<T>` to `Option<SeqError>`, discarding values.
    pub fn err(self) -> Option<SeqError> {
        match self {
            SeqItem::Value(_) => None,
            SeqItem::Error(e) => Some(e),
        }
    }

    /// Maps a `SeqItem<T>` to `SeqItem<U>` by applying a function to the
    /// contained value. Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> SeqItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            SeqItem::Value(v) => SeqItem::Value(f(v)),
            SeqItem::Error(e) => SeqItem::Error(e),
        }
    }

    /// Maps a `SeqItem<T>` to `SeqItem<U>` by applying a function that can
    /// itself fail. Errors are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> SeqItem<U>
    where
        F: FnOnce(T) -> SeqItem<U>,
    {
        match self {
            SeqItem::Value(v) => f(v),
            SeqItem::Error(e) => SeqItem::Error(e),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            SeqItem::Value(v) => v,
            SeqItem::Error(e) => {
                panic!("called `SeqItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained value, panicking with a custom message if the
    /// item is an `Error`.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the item is an `Error`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            SeqItem::Value(v) => v,
            SeqItem::Error(e) => panic!("{msg}: {e:?}"),
        }
    }
}

impl<T> From<Result<T, SeqError>> for SeqItem<T> {
    fn from(result: Result<T, SeqError>) -> Self {
        match result {
            Ok(v) => SeqItem::Value(v),
            Err(e) => SeqItem::Error(e),
        }
    }
}

impl<T> From<SeqItem<T>> for Result<T, SeqError> {
    fn from(item: SeqItem<T>) -> Self {
        match item {
            SeqItem::Value(v) => Ok(v),
            SeqItem::Error(e) => Err(e),
        }
    }
}
