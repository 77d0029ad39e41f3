// lazyseq-core - Rendering of lazy sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `Display` and `Debug` for [`LazySeq`].
//!
//! Rendering never forces a tail: only the already computed prefix is shown,
//! followed by `?` if the rest has not been evaluated yet.

use std::cell::Cell;
use std::fmt;

use crate::seq::LazySeq;

// Thread-local print settings (can be configured by the embedding program)
thread_local! {
    /// Maximum number of elements to print in a sequence.
    /// None means unlimited, Some(n) means print at most n elements.
    /// Default: None (unlimited)
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}

impl<T> LazySeq<T> {
    fn render<F>(&self, f: &mut fmt::Formatter<'_>, mut item: F) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let limit = get_print_length();
        f.write_str("[")?;
        let mut current = self.clone();
        let mut count = 0;
        while let Some(cell) = current.cell.take() {
            if count > 0 {
                f.write_str(", ")?;
            }
            if limit.is_some_and(|max| count >= max) {
                return f.write_str("...]");
            }
            item(&cell.head, f)?;
            count += 1;
            current = match cell.tail.peek() {
                Some(tail) => tail,
                None => return f.write_str(", ?]"),
            };
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Display for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |head, f| write!(f, "{}", head))
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |head, f| write!(f, "{:?}", head))
    }
}
