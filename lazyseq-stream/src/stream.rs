// lazyseq-stream - Stream facade over LazySeq
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The [`LazySeqStream`] adapter.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use lazyseq_core::{Error, Iter, LazySeq, Result};

use crate::collector::Collector;

/// Log and reject an operation with no lazy single-pass counterpart.
fn unsupported<R>(operation: &'static str) -> Result<R> {
    log::debug!("rejecting unsupported stream operation: {}", operation);
    Err(Error::unsupported(operation))
}

/// A stream view of a [`LazySeq`].
///
/// Structural operations return a new stream over a new lazy sequence and
/// force no more of the source than the sequence operation itself would.
/// Terminal operations traverse the sequence and return a plain value; the
/// stream can still be used afterwards, since the sequence is persistent and
/// every forced tail is memoized.
///
/// # Thread Safety
///
/// **`LazySeqStream` is NOT thread-safe**, for the same reason `LazySeq` is
/// not. It is always sequential: the parallel mode switches are accepted and
/// ignored.
pub struct LazySeqStream<T> {
    seq: LazySeq<T>,
}

/// Adds `.stream()` to [`LazySeq`].
pub trait IntoStream<T> {
    /// View this sequence as a stream.
    fn stream(&self) -> LazySeqStream<T>;
}

impl<T> IntoStream<T> for LazySeq<T> {
    fn stream(&self) -> LazySeqStream<T> {
        LazySeqStream::new(self.clone())
    }
}

// ============================================================================
// Construction and mode switches
// ============================================================================

impl<T> LazySeqStream<T> {
    /// Wrap a sequence.
    pub fn new(seq: LazySeq<T>) -> Self {
        LazySeqStream { seq }
    }

    /// The wrapped sequence.
    pub fn as_seq(&self) -> &LazySeq<T> {
        &self.seq
    }

    /// Unwrap into the underlying sequence.
    pub fn into_inner(self) -> LazySeq<T> {
        self.seq
    }

    /// Always `false`.
    pub fn is_parallel(&self) -> bool {
        false
    }

    pub fn sequential(self) -> Self {
        self
    }

    /// Accepted for compatibility; evaluation stays sequential.
    pub fn parallel(self) -> Self {
        self
    }

    /// Accepted for compatibility; encounter order is kept.
    pub fn unordered(self) -> Self {
        self
    }
}

// ============================================================================
// Structural operations
// ============================================================================

impl<T: 'static> LazySeqStream<T> {
    /// Apply `f` to every element.
    pub fn map<R, F>(&self, f: F) -> LazySeqStream<R>
    where
        R: 'static,
        F: Fn(&T) -> R + 'static,
    {
        LazySeqStream::new(self.seq.map(f))
    }

    /// Skip the first `start` elements.
    ///
    /// Forces the skipped elements now; the suffix is shared with the source.
    pub fn substream(&self, start: usize) -> LazySeqStream<T> {
        LazySeqStream::new(self.seq.drop(start))
    }

    /// Map every element to a stream and concatenate the results.
    ///
    /// Each inner stream is materialized when its source element is reached,
    /// so inner streams must be finite.
    pub fn flat_map<R, F>(&self, f: F) -> LazySeqStream<R>
    where
        R: Clone + 'static,
        F: Fn(&T) -> LazySeqStream<R> + 'static,
    {
        LazySeqStream::new(self.seq.flat_map(move |item| f(item).seq.to_vec()))
    }
}

impl<T: Clone + 'static> LazySeqStream<T> {
    pub fn filter<P>(&self, predicate: P) -> LazySeqStream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        LazySeqStream::new(self.seq.filter(predicate))
    }

    /// At most the first `max_size` elements.
    pub fn limit(&self, max_size: usize) -> LazySeqStream<T> {
        LazySeqStream::new(self.seq.limit(max_size))
    }

    /// Elements from `start` (inclusive) to `end` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `end < start`.
    pub fn substream_range(&self, start: usize, end: usize) -> Result<LazySeqStream<T>> {
        self.seq.slice(start, end).map(LazySeqStream::new)
    }
}

impl<T: Clone + Hash + Eq + 'static> LazySeqStream<T> {
    /// First occurrence of each element, in encounter order.
    pub fn distinct(&self) -> LazySeqStream<T> {
        LazySeqStream::new(self.seq.distinct())
    }
}

// ============================================================================
// Terminal operations
// ============================================================================

impl<T> LazySeqStream<T> {
    /// Run `action` on every element in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.seq.for_each(action)
    }

    /// Same as [`LazySeqStream::for_each`]; a sequential stream is always
    /// ordered.
    pub fn for_each_ordered<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.seq.for_each(action)
    }

    /// Number of elements. Forces the whole sequence.
    pub fn count(&self) -> usize {
        self.seq.size()
    }

    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.seq.any_match(predicate)
    }

    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.seq.all_match(predicate)
    }

    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.seq.none_match(predicate)
    }

    /// Strict left fold from `identity`.
    ///
    /// `combiner` merges partial results of a parallel reduction and is
    /// never called here.
    pub fn reduce_with<U, A, C>(&self, identity: U, accumulator: A, _combiner: C) -> U
    where
        A: FnMut(U, &T) -> U,
        C: Fn(U, U) -> U,
    {
        self.seq.fold(identity, accumulator)
    }

    /// Reduce with a [`Collector`].
    ///
    /// See [`crate::collector::to_lazy_seq`] for the one collector that does
    /// not traverse the stream.
    pub fn collect<C>(&self, collector: C) -> C::Output
    where
        C: Collector<T>,
    {
        collector.collect_seq(&self.seq)
    }
}

impl<T: Clone> LazySeqStream<T> {
    /// All elements in order, in a slice sized by a strict count.
    pub fn to_array(&self) -> Box<[T]> {
        self.to_array_with(Vec::<T>::with_capacity).into_boxed_slice()
    }

    /// All elements in order, in a container built by `generator`.
    ///
    /// `generator` receives the element count, which is computed before any
    /// element is copied.
    pub fn to_array_with<C, G>(&self, generator: G) -> C
    where
        G: FnOnce(usize) -> C,
        C: Extend<T>,
    {
        let mut out = generator(self.seq.size());
        out.extend(self.seq.iter());
        out
    }

    /// Strict left fold starting from `identity`.
    pub fn reduce<F>(&self, identity: T, op: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.seq.reduce(identity, op)
    }

    /// Strict left fold of the elements; `None` if the stream is empty.
    pub fn reduce_opt<F>(&self, op: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.seq.reduce_opt(op)
    }

    /// Least element under `compare`; the first one wins ties.
    pub fn min<F>(&self, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.seq.min_by(compare)
    }

    /// Greatest element under `compare`; the first one wins ties.
    pub fn max<F>(&self, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.seq.max_by(compare)
    }

    /// The first element, forcing nothing beyond it.
    pub fn find_first(&self) -> Option<T> {
        self.seq.head_option().cloned()
    }

    /// Any element. A sequential stream always answers with the first.
    pub fn find_any(&self) -> Option<T> {
        self.find_first()
    }

    /// A cursor that forces one cell per advance.
    pub fn iterator(&self) -> Iter<T> {
        self.seq.iter()
    }
}

// ============================================================================
// Unsupported operations
// ============================================================================

// There is no splitting cursor for parallel traversal; `iterator` is the only
// way to pull elements one at a time.
impl<T> LazySeqStream<T> {
    /// Not supported: sorting needs the whole stream up front.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn sorted(&self) -> Result<LazySeqStream<T>> {
        unsupported("sorted")
    }

    /// Not supported: sorting needs the whole stream up front.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn sorted_by<F>(&self, _compare: F) -> Result<LazySeqStream<T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        unsupported("sorted_by")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn peek<F>(&self, _action: F) -> Result<LazySeqStream<T>>
    where
        F: FnMut(&T),
    {
        unsupported("peek")
    }

    /// Not supported: numeric streams have no lazy sequence counterpart.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn map_to_i32<F>(&self, _f: F) -> Result<LazySeqStream<i32>>
    where
        F: Fn(&T) -> i32,
    {
        unsupported("map_to_i32")
    }

    /// Not supported: numeric streams have no lazy sequence counterpart.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn map_to_i64<F>(&self, _f: F) -> Result<LazySeqStream<i64>>
    where
        F: Fn(&T) -> i64,
    {
        unsupported("map_to_i64")
    }

    /// Not supported: numeric streams have no lazy sequence counterpart.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn map_to_f64<F>(&self, _f: F) -> Result<LazySeqStream<f64>>
    where
        F: Fn(&T) -> f64,
    {
        unsupported("map_to_f64")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn flat_map_to_i32<I, F>(&self, _f: F) -> Result<LazySeqStream<i32>>
    where
        I: IntoIterator<Item = i32>,
        F: Fn(&T) -> I,
    {
        unsupported("flat_map_to_i32")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn flat_map_to_i64<I, F>(&self, _f: F) -> Result<LazySeqStream<i64>>
    where
        I: IntoIterator<Item = i64>,
        F: Fn(&T) -> I,
    {
        unsupported("flat_map_to_i64")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn flat_map_to_f64<I, F>(&self, _f: F) -> Result<LazySeqStream<f64>>
    where
        I: IntoIterator<Item = f64>,
        F: Fn(&T) -> I,
    {
        unsupported("flat_map_to_f64")
    }

    /// Not supported: use [`LazySeqStream::collect`] with
    /// [`crate::collector::from_fn`] instead.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn collect_with<R, S, A, C>(&self, _supplier: S, _accumulator: A, _combiner: C) -> Result<R>
    where
        S: Fn() -> R,
        A: Fn(&mut R, &T),
        C: Fn(&mut R, R),
    {
        unsupported("collect_with")
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<T> Clone for LazySeqStream<T> {
    fn clone(&self) -> Self {
        LazySeqStream::new(self.seq.clone())
    }
}

impl<T> From<LazySeq<T>> for LazySeqStream<T> {
    fn from(seq: LazySeq<T>) -> Self {
        LazySeqStream::new(seq)
    }
}

impl<T> From<LazySeqStream<T>> for LazySeq<T> {
    fn from(stream: LazySeqStream<T>) -> Self {
        stream.seq
    }
}

impl<T: Clone> IntoIterator for LazySeqStream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.seq.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySeqStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<stream {:?}>", self.seq)
    }
}
