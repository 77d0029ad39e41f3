// lazyseq-stream - Collectors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Reduction of a whole stream into a single container.
//!
//! A [`Collector`] supplies an empty container and folds each element into
//! it. The [`to_lazy_seq`] collector is special: it hands back the wrapped
//! sequence itself without traversing anything.

use std::fmt::Display;
use std::marker::PhantomData;

use lazyseq_core::LazySeq;

/// A mutable reduction over the elements of a sequence.
///
/// Elements are folded into a [`Collector::Container`], which
/// [`Collector::finish`] turns into the final output.
pub trait Collector<T> {
    /// Intermediate state while elements are being folded in.
    type Container;

    /// The value produced by this collector.
    type Output;

    /// Create a fresh, empty container.
    fn supply(&self) -> Self::Container;

    /// Fold one element into the container.
    fn accumulate(&self, container: &mut Self::Container, item: &T);

    /// Turn a filled container into the output.
    fn finish(&self, container: Self::Container) -> Self::Output;

    /// Collect every element of `seq` in order.
    ///
    /// Forces the entire sequence unless overridden.
    fn collect_seq(&self, seq: &LazySeq<T>) -> Self::Output {
        let mut container = self.supply();
        seq.for_each(|item| self.accumulate(&mut container, item));
        self.finish(container)
    }
}

/// Collect elements into a `Vec`.
pub fn to_vec() -> ToVec {
    ToVec
}

/// Join the `Display` form of each element with `separator`.
pub fn joining(separator: impl Into<String>) -> Joining {
    Joining {
        separator: separator.into(),
    }
}

/// Count the elements.
pub fn counting() -> Counting {
    Counting
}

/// Build a collector from a supplier and an accumulator.
pub fn from_fn<R, S, A>(supplier: S, accumulator: A) -> FromFn<R, S, A> {
    FromFn {
        supplier,
        accumulator,
        output: PhantomData,
    }
}

/// Return the underlying lazy sequence unchanged.
///
/// Through [`Collector::collect_seq`] this forces nothing. Folding element
/// by element buffers the items and builds a new sequence in `finish`.
pub fn to_lazy_seq() -> ToLazySeq {
    ToLazySeq
}

/// See [`to_vec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVec;

impl<T: Clone> Collector<T> for ToVec {
    type Container = Vec<T>;
    type Output = Vec<T>;

    fn supply(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, container: &mut Vec<T>, item: &T) {
        container.push(item.clone());
    }

    fn finish(&self, container: Vec<T>) -> Vec<T> {
        container
    }
}

/// See [`joining`].
#[derive(Debug, Clone, Default)]
pub struct Joining {
    separator: String,
}

impl<T: Display> Collector<T> for Joining {
    /// `None` until the first element, which may itself render as `""`.
    type Container = Option<String>;
    type Output = String;

    fn supply(&self) -> Option<String> {
        None
    }

    fn accumulate(&self, container: &mut Option<String>, item: &T) {
        match container {
            Some(text) => {
                text.push_str(&self.separator);
                text.push_str(&item.to_string());
            }
            None => *container = Some(item.to_string()),
        }
    }

    fn finish(&self, container: Option<String>) -> String {
        container.unwrap_or_default()
    }
}

/// See [`counting`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Counting;

impl<T> Collector<T> for Counting {
    type Container = usize;
    type Output = usize;

    fn supply(&self) -> usize {
        0
    }

    fn accumulate(&self, container: &mut usize, _item: &T) {
        *container += 1;
    }

    fn finish(&self, container: usize) -> usize {
        container
    }
}

/// See [`from_fn`].
pub struct FromFn<R, S, A> {
    supplier: S,
    accumulator: A,
    output: PhantomData<fn() -> R>,
}

impl<T, R, S, A> Collector<T> for FromFn<R, S, A>
where
    S: Fn() -> R,
    A: Fn(&mut R, &T),
{
    type Container = R;
    type Output = R;

    fn supply(&self) -> R {
        (self.supplier)()
    }

    fn accumulate(&self, container: &mut R, item: &T) {
        (self.accumulator)(container, item)
    }

    fn finish(&self, container: R) -> R {
        container
    }
}

/// See [`to_lazy_seq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToLazySeq;

impl<T: Clone + 'static> Collector<T> for ToLazySeq {
    type Container = Vec<T>;
    type Output = LazySeq<T>;

    fn supply(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, container: &mut Vec<T>, item: &T) {
        container.push(item.clone());
    }

    fn finish(&self, container: Vec<T>) -> LazySeq<T> {
        LazySeq::of(container)
    }

    fn collect_seq(&self, seq: &LazySeq<T>) -> LazySeq<T> {
        log::debug!("collect passthrough: returning the wrapped sequence");
        seq.clone()
    }
}
