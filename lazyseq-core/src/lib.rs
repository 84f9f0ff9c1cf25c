// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core vocabulary for the lazyseq workspace: the error taxonomy shared by
//! every operator and the in-band [`SeqItem`] item type carried by both the
//! synchronous (`Iterator`) and asynchronous (`Stream`) sequence renditions.

pub mod error;
pub mod seq_item;

pub use self::error::{IntoSeqError, Result, SeqError};
pub use self::seq_item::SeqItem;
