// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::{IntoSeqError, SeqError};

#[derive(Debug, thiserror::Error)]
#[error("disk read failed: {path}")]
struct DiskError {
    path: String,
}

#[test]
fn invalid_argument_carries_context() {
    let err = SeqError::invalid_argument("size must be at least 1");
    assert!(matches!(err, SeqError::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "invalid argument: size must be at least 1");
}

#[test]
fn disposed_names_the_resource() {
    let err = SeqError::disposed("shared buffer");
    assert!(err.is_disposed());
    assert_eq!(err.to_string(), "shared buffer has been disposed");
}

#[test]
fn source_fault_clone_preserves_identity() {
    let err = SeqError::source_fault(DiskError {
        path: "/tmp/data".into(),
    });
    let replay = err.clone();

    assert!(replay.is_source_fault());
    assert!(err.same_fault(&replay));
    assert_eq!(replay.to_string(), "source fault: disk read failed: /tmp/data");
}

#[test]
fn distinct_faults_are_not_the_same() {
    let a = SeqError::source_fault(DiskError { path: "a".into() });
    let b = SeqError::source_fault(DiskError { path: "a".into() });
    // Same message, different capture.
    assert!(!a.same_fault(&b));
}

#[test]
fn into_seq_error_wraps_as_source_fault() {
    let err = DiskError { path: "x".into() }.into_seq_error();
    assert!(err.is_source_fault());
}

#[test]
fn out_of_range_reports_index() {
    let err = SeqError::out_of_range(7, "cache holds 3 elements");
    assert_eq!(err.to_string(), "index 7 out of range: cache holds 3 elements");
}

#[test]
fn timeout_carries_context() {
    let err = SeqError::timeout_error("advance exceeded 5s");
    assert_eq!(err.to_string(), "timeout: advance exceeded 5s");
}

#[test]
fn cancelled_is_distinguished() {
    let err = SeqError::cancelled("advance interrupted");
    assert!(err.is_cancelled());
    assert!(!err.is_source_fault());
}
