// lazyseq-stream - Stream adapter for lazy sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lazyseq-stream
//!
//! A stream-shaped facade over [`LazySeq`].
//!
//! [`LazySeqStream`] exposes the familiar pipeline vocabulary (`filter`,
//! `map`, `limit`, `reduce`, `collect`, ...) on top of a lazy sequence.
//! Structural operations rewrap a new lazy sequence, so a chain of them
//! stays lazy end to end. Terminal operations delegate to the sequence and
//! return plain values.
//!
//! Operations that need eager or parallel evaluation (sorting, peeking,
//! numeric specializations, three-argument collection) are rejected with
//! [`Error::Unsupported`] instead of being emulated.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyseq_stream::{IntoStream, LazySeq, collector};
//!
//! let evens = LazySeq::numbers(1u32)
//!     .stream()
//!     .filter(|n| n % 2 == 0)
//!     .limit(4);
//! assert_eq!(evens.collect(collector::joining(", ")), "2, 4, 6, 8");
//! ```
//!
//! ## Returning to the lazy domain
//!
//! ```rust
//! use lazyseq_stream::{IntoStream, LazySeq, collector};
//!
//! let seq = LazySeq::numbers(0u64).stream().map(|n| n * 10).collect(collector::to_lazy_seq());
//! assert_eq!(seq.limit(3).to_vec(), vec![0, 10, 20]);
//! ```

pub mod collector;
mod stream;

pub use collector::Collector;
pub use stream::{IntoStream, LazySeqStream};

// Re-export core types for convenience
pub use lazyseq_core::{Error, Iter, LazySeq, Result};
