// lazyseq-core - The lazy sequence type
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `LazySeq` - a persistent cons-list with memoized, lazily computed tails.
//!
//! A sequence is either empty or a cons cell holding an eagerly known head
//! and a [`LazyTail`] that produces the rest of the sequence on first access.
//! Cloning a sequence is cheap: cells are reference counted and shared by
//! every sequence that reaches them.
//!
//! # Thread Safety
//!
//! **`LazySeq` is NOT thread-safe.** Cells are shared through `Rc` and the
//! memoization state lives in a `RefCell`, so the type is neither `Send` nor
//! `Sync`. A tail is therefore evaluated at most once without any locking.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::tail::LazyTail;

/// A lazily evaluated, memoized, immutable sequence.
pub struct LazySeq<T> {
    /// `None` is the empty sequence.
    pub(crate) cell: Option<Rc<Cons<T>>>,
}

/// A cons cell: an eager head and a memoized tail.
pub(crate) struct Cons<T> {
    pub(crate) head: T,
    pub(crate) tail: LazyTail<T>,
}

impl<T> LazySeq<T> {
    /// The empty sequence.
    pub const fn empty() -> Self {
        LazySeq { cell: None }
    }

    /// Prepend `head` to an already computed sequence.
    pub fn cons_with(head: T, tail: LazySeq<T>) -> Self {
        LazySeq::from_cell(Cons {
            head,
            tail: LazyTail::forced(tail),
        })
    }

    pub(crate) fn from_cell(cell: Cons<T>) -> Self {
        LazySeq {
            cell: Some(Rc::new(cell)),
        }
    }

    pub(crate) fn cell(&self) -> Option<&Rc<Cons<T>>> {
        self.cell.as_ref()
    }

    /// Check if this is the empty sequence. Never forces anything.
    pub fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] if the sequence is empty.
    pub fn head(&self) -> Result<&T> {
        self.head_option().ok_or_else(|| Error::empty("head"))
    }

    /// The first element, or `None` if the sequence is empty.
    pub fn head_option(&self) -> Option<&T> {
        self.cell.as_ref().map(|cell| &cell.head)
    }

    /// The rest of the sequence, forcing (and caching) it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] if the sequence is empty.
    pub fn tail(&self) -> Result<LazySeq<T>> {
        match &self.cell {
            Some(cell) => Ok(cell.tail.force()),
            None => Err(Error::empty("tail")),
        }
    }

    /// Split into head and tail, or `None` if empty.
    pub fn uncons(&self) -> Option<(&T, LazySeq<T>)> {
        self.cell
            .as_ref()
            .map(|cell| (&cell.head, cell.tail.force()))
    }

    /// Check if the tail has already been computed.
    ///
    /// An empty sequence has no tail to compute and reports `true`.
    pub fn is_tail_defined(&self) -> bool {
        self.cell.as_ref().is_none_or(|cell| cell.tail.is_forced())
    }

    /// Number of leading cells that are already available without forcing.
    pub fn forced_len(&self) -> usize {
        let mut count = 0;
        let mut current = self.clone();
        while let Some(cell) = current.cell.take() {
            count += 1;
            match cell.tail.peek() {
                Some(tail) => current = tail,
                None => break,
            }
        }
        count
    }

    /// Check if two sequences are the very same cell (or both empty).
    pub fn ptr_eq(&self, other: &LazySeq<T>) -> bool {
        match (&self.cell, &other.cell) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> LazySeq<T> {
    /// The element at `index`, walking (and forcing) `index` cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the sequence is shorter.
    pub fn get(&self, index: usize) -> Result<T> {
        let mut current = self.clone();
        for walked in 0..index {
            current = match current.cell.take() {
                Some(cell) => cell.tail.force(),
                None => {
                    return Err(Error::IndexOutOfBounds {
                        index,
                        length: walked,
                    });
                }
            };
        }
        current
            .head_option()
            .cloned()
            .ok_or(Error::IndexOutOfBounds {
                index,
                length: index,
            })
    }
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Default for LazySeq<T> {
    fn default() -> Self {
        LazySeq::empty()
    }
}

// A fully forced chain dropped recursively would use one stack frame per
// cell. Unlink uniquely owned cells in a loop instead.
impl<T> Drop for LazySeq<T> {
    fn drop(&mut self) {
        let mut next = self.cell.take();
        while let Some(rc) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(cell) => cell.tail.into_forced().and_then(|mut tail| tail.cell.take()),
                Err(_) => None,
            };
        }
    }
}

/// Element-wise equality. Forces both sequences as far as needed to find a
/// difference, so comparing two equal infinite sequences never returns.
impl<T: PartialEq> PartialEq for LazySeq<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        loop {
            if left.ptr_eq(&right) {
                return true;
            }
            match (left.cell.take(), right.cell.take()) {
                (Some(a), Some(b)) => {
                    if a.head != b.head {
                        return false;
                    }
                    left = a.tail.force();
                    right = b.tail.force();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for LazySeq<T> {}
