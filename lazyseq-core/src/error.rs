// lazyseq-core - Error types for lazy sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for lazy sequence operations.

use thiserror::Error;

/// Result type for lazy sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accessing or transforming a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `head` or `tail` requested on an empty sequence
    #[error("{operation} called on an empty sequence")]
    EmptySequence { operation: &'static str },
    /// Slice bounds where the end precedes the start
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: usize, end: usize },
    /// Index past the end of a finite sequence
    #[error("index {index} out of bounds for sequence of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
    /// Argument outside the domain of an operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Operation with no lazy, single-pass implementation
    #[error("not implemented: {operation}")]
    Unsupported { operation: &'static str },
}

impl Error {
    /// Create an empty-sequence error for the named accessor.
    pub fn empty(operation: &'static str) -> Self {
        Error::EmptySequence { operation }
    }

    /// Create an invalid-range error.
    pub fn range(start: usize, end: usize) -> Self {
        Error::InvalidRange { start, end }
    }

    /// Create an invalid-argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(operation: &'static str) -> Self {
        Error::Unsupported { operation }
    }

    /// True for errors raised by rejecting an operation outright.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}
