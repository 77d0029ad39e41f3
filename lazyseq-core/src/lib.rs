// lazyseq-core - Persistent lazy sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lazyseq-core
//!
//! A persistent, lazily evaluated singly-linked sequence.
//!
//! [`LazySeq`] is a cons-list whose tail is computed on first access and
//! then memoized. Transformations (`map`, `filter`, `flat_map`, `limit`,
//! `distinct`, ...) build new cells around the source's cells without
//! forcing more of the source than their first element needs, so they work
//! on infinite sequences as well as finite ones.
//!
//! ```rust
//! use lazyseq_core::LazySeq;
//!
//! let squares = LazySeq::numbers(1u64).map(|n| n * n);
//! let odd = squares.filter(|n| n % 2 == 1);
//! assert_eq!(odd.limit(4).to_vec(), vec![1, 9, 25, 49]);
//! ```
//!
//! Tails are forced synchronously by whoever asks for them; there is no
//! background evaluation. Strict operations such as `size`, `reduce` or
//! `for_each` never return on an infinite sequence.

mod construct;
pub mod display;
pub mod error;
mod fold;
pub mod iter;
pub mod seq;
mod tail;
mod transform;

pub use display::{get_print_length, set_print_length};
pub use error::{Error, Result};
pub use iter::Iter;
pub use seq::LazySeq;
