// lazyseq-core - Memoized tail cell
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The suspended tail of a cons cell.
//!
//! A tail starts `Unforced`, holding a thunk. The first access runs the thunk
//! and stores the result; every later access returns the cached sequence.
//! The transition is one-directional. A thunk that panics leaves the tail
//! `Poisoned`, and every later access panics instead of retrying.

use std::cell::RefCell;
use std::fmt;

use crate::seq::LazySeq;

/// A deferred producer of the rest of a sequence.
pub(crate) type Thunk<T> = Box<dyn FnOnce() -> LazySeq<T>>;

/// Internal state of a tail cell.
pub(crate) enum TailState<T> {
    /// Not yet evaluated - holds the thunk to run
    Unforced(Thunk<T>),
    /// Thunk taken out and currently running
    Forcing,
    /// Already evaluated - holds the cached result
    Forced(LazySeq<T>),
    /// The thunk panicked; the tail can never be produced
    Poisoned,
}

/// Marks the tail poisoned if dropped while the thunk is still running.
struct PoisonOnUnwind<'a, T> {
    state: &'a RefCell<TailState<T>>,
}

impl<T> Drop for PoisonOnUnwind<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            *state = TailState::Poisoned;
        }
    }
}

/// Single-assignment cell for the tail of a cons node.
pub(crate) struct LazyTail<T> {
    state: RefCell<TailState<T>>,
}

impl<T> LazyTail<T> {
    /// A tail that runs `thunk` on first access.
    pub(crate) fn new(thunk: Thunk<T>) -> Self {
        LazyTail {
            state: RefCell::new(TailState::Unforced(thunk)),
        }
    }

    /// A tail that is already known.
    pub(crate) fn forced(tail: LazySeq<T>) -> Self {
        LazyTail {
            state: RefCell::new(TailState::Forced(tail)),
        }
    }

    /// Check if the tail has been evaluated.
    pub(crate) fn is_forced(&self) -> bool {
        matches!(*self.state.borrow(), TailState::Forced(_))
    }

    /// The cached tail, or `None` while unforced. Never runs the thunk.
    pub(crate) fn peek(&self) -> Option<LazySeq<T>> {
        match &*self.state.borrow() {
            TailState::Forced(tail) => Some(tail.clone()),
            _ => None,
        }
    }

    /// Return the tail, running the thunk if this is the first access.
    ///
    /// The borrow is released while the thunk runs, so the thunk is free to
    /// force other cells (including ones that share this suffix).
    ///
    /// # Panics
    ///
    /// Panics if the thunk, directly or indirectly, forces this same tail.
    /// Such a sequence can never produce its next cell. Also panics if an
    /// earlier attempt to run the thunk panicked.
    pub(crate) fn force(&self) -> LazySeq<T> {
        if let Some(tail) = self.peek() {
            return tail;
        }

        let thunk = match self.state.replace(TailState::Forcing) {
            TailState::Unforced(thunk) => thunk,
            TailState::Forcing => panic!(
                "lazy tail forced while it was already being forced: \
                 the sequence definition is not productive"
            ),
            TailState::Forced(tail) => {
                self.state.replace(TailState::Forced(tail.clone()));
                return tail;
            }
            TailState::Poisoned => {
                self.state.replace(TailState::Poisoned);
                panic!("lazy tail forced after its producer panicked")
            }
        };

        let guard = PoisonOnUnwind { state: &self.state };
        let tail = thunk();
        std::mem::forget(guard);
        log::trace!("forced lazy tail (empty: {})", tail.is_empty());
        *self.state.borrow_mut() = TailState::Forced(tail.clone());
        tail
    }

    /// Consume the cell, yielding the cached tail if there is one.
    pub(crate) fn into_forced(self) -> Option<LazySeq<T>> {
        match self.state.into_inner() {
            TailState::Forced(tail) => Some(tail),
            _ => None,
        }
    }
}

impl<T> fmt::Debug for LazyTail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            TailState::Unforced(_) => write!(f, "#<tail: unforced>"),
            TailState::Forcing => write!(f, "#<tail: forcing>"),
            TailState::Forced(_) => write!(f, "#<tail: forced>"),
            TailState::Poisoned => write!(f, "#<tail: poisoned>"),
        }
    }
}
