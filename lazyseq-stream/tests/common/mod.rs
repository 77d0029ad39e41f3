// lazyseq-stream - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for lazyseq-stream integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

pub use lazyseq_stream::{Error, IntoStream, LazySeq, LazySeqStream, collector};

/// Install `env_logger` in test mode. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A stream of naturals from `start`, plus a counter of how many elements
/// the underlying generator has produced so far.
pub fn counted_stream(start: u64) -> (LazySeqStream<u64>, Rc<Cell<usize>>) {
    let produced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&produced);
    let seq = LazySeq::from_iterator((start..).inspect(move |_| counter.set(counter.get() + 1)));
    (seq.stream(), produced)
}
