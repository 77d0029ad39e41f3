// lazyseq-core - Sequence constructors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Constructors: cons, of, from_iterator, concat, iterate, continually,
//! repeat, tabulate, numbers

use std::rc::Rc;

use num_traits::Num;

use crate::seq::{Cons, LazySeq};
use crate::tail::{LazyTail, Thunk};

impl<T: 'static> LazySeq<T> {
    /// Prepend `head` to a tail that is computed on first access.
    ///
    /// ```
    /// use lazyseq_core::LazySeq;
    ///
    /// let seq = LazySeq::cons(1, || LazySeq::cons(2, LazySeq::empty));
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// ```
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> LazySeq<T> + 'static,
    {
        LazySeq::from_cell(Cons {
            head,
            tail: LazyTail::new(Box::new(tail)),
        })
    }

    /// A finite sequence of the given items.
    ///
    /// The items are buffered up front but cells are built one at a time as
    /// the sequence is traversed.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let buffered: Vec<T> = items.into_iter().collect();
        LazySeq::from_iterator(buffered.into_iter())
    }

    /// A sequence that pulls from `iter` one element per forced cell.
    ///
    /// The first element is pulled immediately to become the head.
    pub fn from_iterator<I>(mut iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        match iter.next() {
            Some(head) => LazySeq::cons(head, move || LazySeq::from_iterator(iter)),
            None => LazySeq::empty(),
        }
    }

    /// The given items followed by a lazily supplied tail.
    pub fn concat<I, F>(items: I, tail: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnOnce() -> LazySeq<T> + 'static,
    {
        let buffered: Vec<T> = items.into_iter().collect();
        prepend(buffered.into_iter(), Box::new(tail))
    }

    /// An infinite sequence of successive results of `generator`.
    pub fn continually<F>(generator: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        LazySeq::from_iterator(std::iter::repeat_with(generator))
    }

    /// `f(start), f(start + 1), f(start + 2), ...`
    pub fn tabulate<F>(start: usize, f: F) -> Self
    where
        F: Fn(usize) -> T + 'static,
    {
        LazySeq::from_iterator((start..).map(f))
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// `seed, f(seed), f(f(seed)), ...`
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        iterate_from(seed, Rc::new(f))
    }

    /// An infinite sequence repeating `value`.
    pub fn repeat(value: T) -> Self {
        LazySeq::from_iterator(std::iter::repeat(value))
    }
}

impl<T: Num + Clone + 'static> LazySeq<T> {
    /// `start, start + 1, start + 2, ...`
    pub fn numbers(start: T) -> Self {
        LazySeq::numbers_by(start, T::one())
    }

    /// `start, start + step, start + 2 * step, ...`
    pub fn numbers_by(start: T, step: T) -> Self {
        LazySeq::iterate(start, move |n| n.clone() + step.clone())
    }
}

fn iterate_from<T, F>(seed: T, f: Rc<F>) -> LazySeq<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    let previous = seed.clone();
    LazySeq::cons(seed, move || iterate_from(f(&previous), f))
}

/// Lazily hand out `items`, then continue with `tail`.
pub(crate) fn prepend<T: 'static>(mut items: std::vec::IntoIter<T>, tail: Thunk<T>) -> LazySeq<T> {
    match items.next() {
        Some(head) => LazySeq::cons(head, move || prepend(items, tail)),
        None => tail(),
    }
}

impl<T: 'static> From<Vec<T>> for LazySeq<T> {
    fn from(items: Vec<T>) -> Self {
        LazySeq::from_iterator(items.into_iter())
    }
}

impl<T: 'static> FromIterator<T> for LazySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazySeq::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_cons_defers_tail() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let seq = LazySeq::cons(1, move || {
            counter.set(counter.get() + 1);
            LazySeq::empty()
        });
        assert_eq!(seq.head(), Ok(&1));
        assert_eq!(calls.get(), 0);
        assert!(seq.tail().unwrap().is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_of() {
        assert_eq!(LazySeq::of(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
        assert!(LazySeq::<i32>::of(Vec::new()).is_empty());
    }

    #[test]
    fn test_from_iterator_pulls_head_only() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let seq = LazySeq::from_iterator((0..10).inspect(move |_| counter.set(counter.get() + 1)));
        assert_eq!(pulled.get(), 1);
        assert_eq!(seq.get(3), Ok(3));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_concat() {
        let seq = LazySeq::concat(vec![1, 2], || LazySeq::of(vec![3, 4]));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);

        let only_tail = LazySeq::concat(Vec::new(), || LazySeq::of(vec![9]));
        assert_eq!(only_tail.to_vec(), vec![9]);
    }

    #[test]
    fn test_iterate() {
        let powers = LazySeq::iterate(1u64, |n| n * 2);
        assert_eq!(powers.limit(6).to_vec(), vec![1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_continually() {
        let mut n = 0;
        let seq = LazySeq::continually(move || {
            n += 3;
            n
        });
        assert_eq!(seq.limit(3).to_vec(), vec![3, 6, 9]);
    }

    #[test]
    fn test_repeat_and_tabulate() {
        assert_eq!(LazySeq::repeat('x').limit(3).to_vec(), vec!['x', 'x', 'x']);
        assert_eq!(
            LazySeq::tabulate(2, |i| i * i).limit(3).to_vec(),
            vec![4, 9, 16]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(LazySeq::numbers(5i32).limit(3).to_vec(), vec![5, 6, 7]);
        assert_eq!(
            LazySeq::numbers_by(0.0f64, 0.5).limit(3).to_vec(),
            vec![0.0, 0.5, 1.0]
        );
    }

    #[test]
    fn test_from_conversions() {
        let from_vec: LazySeq<i32> = vec![1, 2].into();
        assert_eq!(from_vec.to_vec(), vec![1, 2]);
        let collected: LazySeq<i32> = (1..=3).collect();
        assert_eq!(collected.to_vec(), vec![1, 2, 3]);
    }
}
