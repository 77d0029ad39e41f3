// lazyseq-core - Lazy sequence transformations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lazy transformations: map, filter, flat_map, limit, drop, slice,
//! take_while, drop_while, distinct, zip, scan, append, grouped, sliding
//!
//! Each transformation computes at most the first cell of its result and
//! defers the rest behind a thunk that wraps the source's cells. Skipping
//! (filter, flat_map, distinct) loops instead of recursing, so long runs of
//! rejected elements do not grow the stack.

use std::hash::Hash;
use std::rc::Rc;

use crate::construct::prepend;
use crate::error::{Error, Result};
use crate::seq::LazySeq;
use crate::tail::Thunk;

// ============================================================================
// Mapping
// ============================================================================

impl<T: 'static> LazySeq<T> {
    /// Apply `f` to every element.
    ///
    /// The first element is mapped immediately; the rest on demand.
    pub fn map<R, F>(&self, f: F) -> LazySeq<R>
    where
        R: 'static,
        F: Fn(&T) -> R + 'static,
    {
        map_from(self.clone(), Rc::new(f))
    }

    /// Map every element to a finite collection and concatenate the results.
    ///
    /// Each collection is materialized when its source element is reached;
    /// empty collections are skipped.
    pub fn flat_map<R, I, F>(&self, f: F) -> LazySeq<R>
    where
        R: 'static,
        I: IntoIterator<Item = R>,
        F: Fn(&T) -> I + 'static,
    {
        flat_map_from(self.clone(), Rc::new(f))
    }

    /// Combine elements pairwise, stopping at the end of the shorter sequence.
    pub fn zip_with<U, R, F>(&self, other: &LazySeq<U>, f: F) -> LazySeq<R>
    where
        U: 'static,
        R: 'static,
        F: Fn(&T, &U) -> R + 'static,
    {
        zip_with_from(self.clone(), other.clone(), Rc::new(f))
    }

    /// Force and discard the first `n` elements, returning the shared suffix.
    ///
    /// Returns the empty sequence if there are fewer than `n` elements.
    pub fn drop(&self, n: usize) -> LazySeq<T> {
        let mut current = self.clone();
        for _ in 0..n {
            current = match current.cell.take() {
                Some(cell) => cell.tail.force(),
                None => break,
            };
        }
        current
    }

    /// Force and discard leading elements while `predicate` holds.
    pub fn drop_while<P>(&self, mut predicate: P) -> LazySeq<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.clone();
        while let Some(cell) = current.cell() {
            if !predicate(&cell.head) {
                break;
            }
            let next = cell.tail.force();
            current = next;
        }
        current
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// Keep only the elements matching `predicate`.
    ///
    /// Finding each match forces every rejected element before it. On an
    /// infinite sequence with no further matches this never returns.
    pub fn filter<P>(&self, predicate: P) -> LazySeq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_from(self.clone(), Rc::new(predicate))
    }

    /// At most the first `n` elements.
    ///
    /// The source cell after the `n`-th is never forced.
    pub fn limit(&self, n: usize) -> LazySeq<T> {
        take_from(self.clone(), n)
    }

    /// Alias for [`LazySeq::limit`].
    pub fn take(&self, n: usize) -> LazySeq<T> {
        self.limit(n)
    }

    /// Elements from index `start` (inclusive) to `end` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `end < start`.
    pub fn slice(&self, start: usize, end: usize) -> Result<LazySeq<T>> {
        if end < start {
            return Err(Error::range(start, end));
        }
        Ok(self.drop(start).limit(end - start))
    }

    /// Leading elements while `predicate` holds.
    pub fn take_while<P>(&self, predicate: P) -> LazySeq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        take_while_from(self.clone(), Rc::new(predicate))
    }

    /// Pair up elements with another sequence.
    pub fn zip<U>(&self, other: &LazySeq<U>) -> LazySeq<(T, U)>
    where
        U: Clone + 'static,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    /// Running accumulation: `init, f(init, x0), f(f(init, x0), x1), ...`
    ///
    /// The result has one more element than the source.
    pub fn scan<A, F>(&self, init: A, f: F) -> LazySeq<A>
    where
        A: Clone + 'static,
        F: Fn(&A, &T) -> A + 'static,
    {
        let source = self.clone();
        scan_from(init, Box::new(move || source), Rc::new(f))
    }

    /// This sequence followed by `other`.
    pub fn append(&self, other: &LazySeq<T>) -> LazySeq<T> {
        append_from(self.clone(), other.clone())
    }

    /// Consecutive chunks of `size` elements; the last may be shorter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is zero.
    pub fn grouped(&self, size: usize) -> Result<LazySeq<Vec<T>>> {
        if size == 0 {
            return Err(Error::invalid("grouped: size must be positive"));
        }
        Ok(grouped_from(self.clone(), size))
    }

    /// Overlapping windows of `size` elements, advancing by one.
    ///
    /// A sequence shorter than `size` yields a single partial window; an
    /// empty sequence yields no windows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is zero.
    pub fn sliding(&self, size: usize) -> Result<LazySeq<Vec<T>>> {
        if size == 0 {
            return Err(Error::invalid("sliding: size must be positive"));
        }
        Ok(sliding_from(self.clone(), size, true))
    }
}

impl<T: Clone + Hash + Eq + 'static> LazySeq<T> {
    /// Drop elements equal to an earlier one, keeping first occurrences.
    ///
    /// Every call starts from an empty set of seen elements. Each produced
    /// cell captures an immutable snapshot of that set, so the resulting
    /// sequence can be shared and re-traversed like any other.
    pub fn distinct(&self) -> LazySeq<T> {
        distinct_from(self.clone(), im::HashSet::new())
    }
}

// ============================================================================
// Implementations
// ============================================================================

fn map_from<T, R, F>(seq: LazySeq<T>, f: Rc<F>) -> LazySeq<R>
where
    T: 'static,
    R: 'static,
    F: Fn(&T) -> R + 'static,
{
    match seq.cell() {
        None => LazySeq::empty(),
        Some(cell) => {
            let head = f(&cell.head);
            let cell = Rc::clone(cell);
            LazySeq::cons(head, move || map_from(cell.tail.force(), f))
        }
    }
}

fn filter_from<T, P>(mut seq: LazySeq<T>, predicate: Rc<P>) -> LazySeq<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    loop {
        let Some(cell) = seq.cell.take() else {
            return LazySeq::empty();
        };
        if predicate(&cell.head) {
            let head = cell.head.clone();
            return LazySeq::cons(head, move || filter_from(cell.tail.force(), predicate));
        }
        seq = cell.tail.force();
    }
}

fn flat_map_from<T, R, I, F>(mut seq: LazySeq<T>, f: Rc<F>) -> LazySeq<R>
where
    T: 'static,
    R: 'static,
    I: IntoIterator<Item = R>,
    F: Fn(&T) -> I + 'static,
{
    loop {
        let Some(cell) = seq.cell.take() else {
            return LazySeq::empty();
        };
        let items: Vec<R> = f(&cell.head).into_iter().collect();
        if !items.is_empty() {
            return prepend(
                items.into_iter(),
                Box::new(move || flat_map_from(cell.tail.force(), f)),
            );
        }
        seq = cell.tail.force();
    }
}

fn take_from<T: Clone + 'static>(seq: LazySeq<T>, n: usize) -> LazySeq<T> {
    if n == 0 {
        return LazySeq::empty();
    }
    match seq.cell() {
        None => LazySeq::empty(),
        Some(cell) if n == 1 => LazySeq::cons_with(cell.head.clone(), LazySeq::empty()),
        Some(cell) => {
            let head = cell.head.clone();
            let cell = Rc::clone(cell);
            LazySeq::cons(head, move || take_from(cell.tail.force(), n - 1))
        }
    }
}

fn take_while_from<T, P>(seq: LazySeq<T>, predicate: Rc<P>) -> LazySeq<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    match seq.cell() {
        Some(cell) if predicate(&cell.head) => {
            let head = cell.head.clone();
            let cell = Rc::clone(cell);
            LazySeq::cons(head, move || take_while_from(cell.tail.force(), predicate))
        }
        _ => LazySeq::empty(),
    }
}

fn distinct_from<T>(mut seq: LazySeq<T>, seen: im::HashSet<T>) -> LazySeq<T>
where
    T: Clone + Hash + Eq + 'static,
{
    loop {
        let Some(cell) = seq.cell.take() else {
            return LazySeq::empty();
        };
        if !seen.contains(&cell.head) {
            let seen = seen.update(cell.head.clone());
            let head = cell.head.clone();
            return LazySeq::cons(head, move || distinct_from(cell.tail.force(), seen));
        }
        seq = cell.tail.force();
    }
}

fn zip_with_from<T, U, R, F>(left: LazySeq<T>, right: LazySeq<U>, f: Rc<F>) -> LazySeq<R>
where
    T: 'static,
    U: 'static,
    R: 'static,
    F: Fn(&T, &U) -> R + 'static,
{
    match (left.cell(), right.cell()) {
        (Some(a), Some(b)) => {
            let head = f(&a.head, &b.head);
            let (a, b) = (Rc::clone(a), Rc::clone(b));
            LazySeq::cons(head, move || {
                zip_with_from(a.tail.force(), b.tail.force(), f)
            })
        }
        _ => LazySeq::empty(),
    }
}

// The source is passed as a thunk so that emitting an accumulator never
// forces the source cell it will be combined with next.
fn scan_from<T, A, F>(acc: A, source: Thunk<T>, f: Rc<F>) -> LazySeq<A>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(&A, &T) -> A + 'static,
{
    let previous = acc.clone();
    LazySeq::cons(acc, move || {
        let source = source();
        match source.cell() {
            None => LazySeq::empty(),
            Some(cell) => {
                let next = f(&previous, &cell.head);
                let cell = Rc::clone(cell);
                scan_from(next, Box::new(move || cell.tail.force()), f)
            }
        }
    })
}

fn append_from<T: Clone + 'static>(seq: LazySeq<T>, other: LazySeq<T>) -> LazySeq<T> {
    match seq.cell() {
        None => other,
        Some(cell) => {
            let head = cell.head.clone();
            let cell = Rc::clone(cell);
            LazySeq::cons(head, move || append_from(cell.tail.force(), other))
        }
    }
}

fn grouped_from<T: Clone + 'static>(seq: LazySeq<T>, size: usize) -> LazySeq<Vec<T>> {
    if seq.is_empty() {
        return LazySeq::empty();
    }
    let mut cells = seq.cells();
    let chunk: Vec<T> = cells
        .by_ref()
        .take(size)
        .map(|cell| cell.head.clone())
        .collect();
    LazySeq::cons(chunk, move || grouped_from(cells.remainder(), size))
}

fn sliding_from<T: Clone + 'static>(seq: LazySeq<T>, size: usize, first: bool) -> LazySeq<Vec<T>> {
    let window: Vec<T> = seq.iter().take(size).collect();
    if window.is_empty() || (!first && window.len() < size) {
        return LazySeq::empty();
    }
    LazySeq::cons(window, move || {
        seq.tail()
            .map(|rest| sliding_from(rest, size, false))
            .unwrap_or_default()
    })
}
