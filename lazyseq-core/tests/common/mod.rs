// lazyseq-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for lazyseq integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`init_logging`] - Route `log` output through the test harness
//! - [`counted_from`] - Infinite naturals that count how many were produced
//! - [`counted_thunk_seq`] - A one-element-plus-tail sequence whose tail thunk counts calls

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

pub use lazyseq_core::{Error, LazySeq};

/// Install `env_logger` in test mode. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Naturals from `start`, plus a counter of how many elements the
/// underlying generator has produced so far.
pub fn counted_from(start: u64) -> (LazySeq<u64>, Rc<Cell<usize>>) {
    let produced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&produced);
    let seq = LazySeq::from_iterator((start..).inspect(move |_| counter.set(counter.get() + 1)));
    (seq, produced)
}

/// `head` followed by a tail computed by a thunk that counts its calls.
pub fn counted_thunk_seq(head: i32, rest: Vec<i32>) -> (LazySeq<i32>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let seq = LazySeq::cons(head, move || {
        counter.set(counter.get() + 1);
        LazySeq::of(rest)
    });
    (seq, calls)
}
