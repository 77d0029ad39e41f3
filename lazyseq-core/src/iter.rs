// lazyseq-core - Iteration over lazy sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pull-based cursors over a [`LazySeq`].
//!
//! A cursor forces the tail of the cell it last yielded only when the next
//! element is requested, so it never looks further ahead than one cell.
//! Forcing goes through the same memoized tails as [`LazySeq::tail`].

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::seq::{Cons, LazySeq};

/// Cursor yielding the cells of a sequence.
pub(crate) struct Cells<T> {
    /// The next cell to yield, once `previous` has been advanced past.
    next: LazySeq<T>,
    /// Last cell yielded, whose tail has not been forced yet.
    previous: Option<Rc<Cons<T>>>,
}

impl<T> Cells<T> {
    pub(crate) fn new(seq: LazySeq<T>) -> Self {
        Cells {
            next: seq,
            previous: None,
        }
    }

    /// The unvisited remainder of the sequence, forcing the pending tail.
    pub(crate) fn remainder(&mut self) -> LazySeq<T> {
        if let Some(previous) = self.previous.take() {
            self.next = previous.tail.force();
        }
        self.next.clone()
    }
}

impl<T> Iterator for Cells<T> {
    type Item = Rc<Cons<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.previous.take() {
            self.next = previous.tail.force();
        }
        let cell = self.next.cell.take()?;
        self.previous = Some(Rc::clone(&cell));
        Some(cell)
    }
}

impl<T> FusedIterator for Cells<T> {}

/// Iterator over the elements of a [`LazySeq`], cloning each head.
pub struct Iter<T> {
    cells: Cells<T>,
}

impl<T> Iter<T> {
    /// The part of the sequence this iterator has not yielded yet.
    pub fn as_seq(&mut self) -> LazySeq<T> {
        self.cells.remainder()
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.cells.next().map(|cell| cell.head.clone())
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}

impl<T> LazySeq<T> {
    /// Iterate over the elements, forcing one cell per step.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            cells: Cells::new(self.clone()),
        }
    }

    pub(crate) fn cells(&self) -> Cells<T> {
        Cells::new(self.clone())
    }
}

impl<T: Clone> IntoIterator for LazySeq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter {
            cells: Cells::new(self),
        }
    }
}

impl<T: Clone> IntoIterator for &LazySeq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
