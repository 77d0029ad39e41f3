// lazyseq-core - Strict sequence operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Terminal operations: fold, reduce, min/max, size, matching predicates,
//! for_each, to_vec, force, starts_with, mk_string
//!
//! All of these walk the sequence from the head. The full traversals never
//! return on an infinite sequence; bound it first with `limit` or
//! `take_while`. The matching predicates stop as soon as the answer is known.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::seq::LazySeq;

impl<T> LazySeq<T> {
    /// Number of elements. Forces the whole sequence.
    pub fn size(&self) -> usize {
        self.cells().count()
    }

    /// Apply `action` to every element in order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for cell in self.cells() {
            action(&cell.head);
        }
    }

    /// Strict left fold with an accumulator of any type.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.cells().fold(init, |acc, cell| f(acc, &cell.head))
    }

    /// True if any element matches. Stops at the first match.
    pub fn any_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cells().any(|cell| predicate(&cell.head))
    }

    /// True if every element matches. Stops at the first mismatch.
    pub fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cells().all(|cell| predicate(&cell.head))
    }

    /// True if no element matches. Stops at the first match.
    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Force every tail, leaving the sequence fully memoized.
    pub fn force(&self) -> &Self {
        self.cells().for_each(drop);
        self
    }
}

impl<T: Clone> LazySeq<T> {
    /// Strict left fold starting from `identity`.
    ///
    /// Returns `identity` for the empty sequence.
    pub fn reduce<F>(&self, identity: T, op: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().fold(identity, op)
    }

    /// Strict left fold seeded with the first element.
    ///
    /// Returns `None` for the empty sequence.
    pub fn reduce_opt<F>(&self, op: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().reduce(op)
    }

    /// The smallest element according to `compare`.
    ///
    /// Among equal elements the first one encountered wins.
    pub fn min_by<F>(&self, mut compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.select(|candidate, best| compare(candidate, best) == Ordering::Less)
    }

    /// The largest element according to `compare`.
    ///
    /// Among equal elements the first one encountered wins.
    pub fn max_by<F>(&self, mut compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.select(|candidate, best| compare(candidate, best) == Ordering::Greater)
    }

    /// The element with the smallest key; first wins on ties.
    pub fn min_by_key<K, F>(&self, mut key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.min_by(|a, b| key(a).cmp(&key(b)))
    }

    /// The element with the largest key; first wins on ties.
    pub fn max_by_key<K, F>(&self, mut key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.max_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Copy every element into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Keep the running best, replacing it only when `better` says so.
    fn select<F>(&self, mut better: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut cells = self.cells();
        let first = cells.next()?;
        let best = cells.fold(first, |best, cell| {
            if better(&cell.head, &best.head) {
                cell
            } else {
                best
            }
        });
        Some(best.head.clone())
    }
}

impl<T: Ord + Clone> LazySeq<T> {
    /// The smallest element; first wins on ties.
    pub fn min(&self) -> Option<T> {
        self.min_by(Ord::cmp)
    }

    /// The largest element; first wins on ties.
    pub fn max(&self) -> Option<T> {
        self.max_by(Ord::cmp)
    }
}

impl<T: PartialEq> LazySeq<T> {
    /// Check if the sequence begins with `prefix`.
    ///
    /// Forces only as many cells as the prefix has elements.
    pub fn starts_with<I>(&self, prefix: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut cells = self.cells();
        prefix
            .into_iter()
            .all(|expected| cells.next().is_some_and(|cell| cell.head == expected))
    }
}

impl<T: Display> LazySeq<T> {
    /// Render every element separated by `sep`. Forces the whole sequence.
    pub fn mk_string(&self, sep: &str) -> String {
        self.mk_string_with("", sep, "")
    }

    /// Render every element between `start` and `end`, separated by `sep`.
    pub fn mk_string_with(&self, start: &str, sep: &str, end: &str) -> String {
        let mut out = String::from(start);
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(&cell.head.to_string());
        }
        out.push_str(end);
        out
    }
}
