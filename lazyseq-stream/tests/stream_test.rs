// lazyseq-stream integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tests for the stream adapter: laziness through chained structural
//! operations, terminal results, collectors and rejected operations.

mod common;

use common::*;

// =============================================================================
// Structural operations
// =============================================================================

mod structural {
    use super::*;

    #[test]
    fn chain_stays_lazy() {
        init_logging();
        let (naturals, produced) = counted_stream(0);
        let chained = naturals.map(|n| n * 2).filter(|n| n % 3 == 0).limit(3);
        assert!(produced.get() <= 4);
        assert_eq!(chained.to_array().to_vec(), vec![0, 6, 12]);
        assert_eq!(produced.get(), 7);
    }

    #[test]
    fn flat_map_materializes_inner_streams() {
        let words = LazySeq::of(vec!["ab", "", "c"]).stream();
        let chars = words.flat_map(|w| LazySeq::of(w.chars().collect::<Vec<_>>()).stream());
        assert_eq!(chars.collect(collector::to_vec()), vec!['a', 'b', 'c']);
    }

    #[test]
    fn substream_skips_and_shares() {
        let seq = LazySeq::of(vec![1, 2, 3, 4, 5]);
        let rest = seq.stream().substream(2);
        assert!(rest.as_seq().ptr_eq(&seq.drop(2)));
        assert_eq!(rest.count(), 3);
        assert_eq!(seq.stream().substream(9).count(), 0);
    }

    #[test]
    fn substream_range() {
        let stream = LazySeq::numbers(0u32).stream();
        let window = stream.substream_range(3, 6).unwrap();
        assert_eq!(window.to_array().to_vec(), vec![3, 4, 5]);
        assert_eq!(
            stream.substream_range(6, 3).unwrap_err(),
            Error::InvalidRange { start: 6, end: 3 }
        );
    }

    #[test]
    fn distinct_keeps_first_occurrences() {
        let stream = LazySeq::of(vec![3, 1, 3, 2, 1]).stream().distinct();
        assert_eq!(stream.collect(collector::joining(" ")), "3 1 2");
    }
}

// =============================================================================
// Terminal operations
// =============================================================================

mod terminal {
    use super::*;

    #[test]
    fn to_array_with_receives_size() {
        let stream = LazySeq::of(vec![1, 2, 3]).stream();
        let mut requested = None;
        let out: Vec<i32> = stream.to_array_with(|size| {
            requested = Some(size);
            Vec::with_capacity(size)
        });
        assert_eq!(requested, Some(3));
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn reductions() {
        let stream = LazySeq::of(vec![1, 2, 3, 4]).stream();
        assert_eq!(stream.reduce(0, |a, b| a + b), 10);
        assert_eq!(stream.reduce_opt(|a, b| a * b), Some(24));
        let total_len = LazySeq::of(vec!["ab", "cde"])
            .stream()
            .reduce_with(0, |acc, s| acc + s.len(), |a, b| a + b);
        assert_eq!(total_len, 5);
        let empty = LazySeq::<i32>::empty().stream();
        assert_eq!(empty.reduce_opt(|a, b| a + b), None);
    }

    #[test]
    fn min_and_max_with_comparator() {
        let stream = LazySeq::of(vec!["pear", "fig", "apple", "kiwi"]).stream();
        assert_eq!(stream.min(|a, b| a.len().cmp(&b.len())), Some("fig"));
        assert_eq!(stream.max(|a, b| a.len().cmp(&b.len())), Some("apple"));
        assert_eq!(LazySeq::<i32>::empty().stream().min(Ord::cmp), None);
    }

    #[test]
    fn matching_short_circuits_on_infinite() {
        let (naturals, produced) = counted_stream(1);
        assert!(naturals.any_match(|n| *n == 5));
        assert!(!naturals.all_match(|n| *n < 3));
        assert!(!naturals.none_match(|n| n % 4 == 0));
        assert_eq!(produced.get(), 5);
    }

    #[test]
    fn find_first_forces_only_the_head() {
        let (naturals, produced) = counted_stream(10);
        assert_eq!(naturals.find_first(), Some(10));
        assert_eq!(naturals.find_any(), Some(10));
        assert_eq!(produced.get(), 1);
        assert_eq!(LazySeq::<u8>::empty().stream().find_first(), None);
    }

    #[test]
    fn for_each_visits_in_order() {
        let stream = LazySeq::of(vec![1, 2, 3]).stream();
        let mut seen = Vec::new();
        stream.for_each(|n| seen.push(*n));
        stream.for_each_ordered(|n| seen.push(n * 10));
        assert_eq!(seen, vec![1, 2, 3, 10, 20, 30]);
    }

    #[test]
    fn iterator_shares_memoized_cells() {
        let (naturals, produced) = counted_stream(0);
        let first: Vec<u64> = naturals.iterator().take(3).collect();
        let again: Vec<u64> = naturals.clone().into_iter().take(3).collect();
        assert_eq!(first, again);
        assert_eq!(produced.get(), 3);
    }
}

// =============================================================================
// Collectors
// =============================================================================

mod collect {
    use super::*;

    #[test]
    fn to_lazy_seq_returns_the_wrapped_sequence() {
        init_logging();
        let (naturals, produced) = counted_stream(0);
        let seq = naturals.collect(collector::to_lazy_seq());
        assert!(seq.ptr_eq(naturals.as_seq()));
        assert_eq!(produced.get(), 1);
    }

    #[test]
    fn builtin_collectors() {
        let stream = LazySeq::of(vec![2, 4, 6]).stream();
        assert_eq!(stream.collect(collector::counting()), 3);
        assert_eq!(stream.collect(collector::joining(", ")), "2, 4, 6");
        let set = stream.collect(collector::from_fn(
            std::collections::BTreeSet::new,
            |set: &mut std::collections::BTreeSet<i32>, n: &i32| {
                set.insert(n / 4);
            },
        ));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }
}

// =============================================================================
// Rejected operations
// =============================================================================

mod unsupported {
    use super::*;

    fn assert_unsupported<R: std::fmt::Debug>(result: lazyseq_stream::Result<R>, name: &str) {
        match result {
            Err(Error::Unsupported { operation }) => assert_eq!(operation, name),
            other => panic!("expected {} to be unsupported, got {:?}", name, other),
        }
    }

    #[test]
    fn every_eager_operation_is_rejected() {
        init_logging();
        let stream = LazySeq::of(vec![3, 1, 2]).stream();
        assert_unsupported(stream.sorted(), "sorted");
        assert_unsupported(stream.sorted_by(|a, b| b.cmp(a)), "sorted_by");
        assert_unsupported(stream.peek(|_| {}), "peek");
        assert_unsupported(stream.map_to_i32(|n| *n), "map_to_i32");
        assert_unsupported(stream.map_to_i64(|n| i64::from(*n)), "map_to_i64");
        assert_unsupported(stream.map_to_f64(|n| f64::from(*n)), "map_to_f64");
        assert_unsupported(stream.flat_map_to_i32(|n| vec![*n]), "flat_map_to_i32");
        assert_unsupported(stream.flat_map_to_i64(|n| vec![i64::from(*n)]), "flat_map_to_i64");
        assert_unsupported(stream.flat_map_to_f64(|n| vec![f64::from(*n)]), "flat_map_to_f64");
        assert_unsupported(
            stream.collect_with(
                Vec::new,
                |v: &mut Vec<i32>, n: &i32| v.push(*n),
                |a: &mut Vec<i32>, b| a.extend(b),
            ),
            "collect_with",
        );
    }

    #[test]
    fn rejection_leaves_the_stream_usable() {
        let stream = LazySeq::of(vec![3, 1, 2]).stream();
        assert!(stream.sorted().is_err());
        assert_eq!(stream.to_array().to_vec(), vec![3, 1, 2]);
    }
}
