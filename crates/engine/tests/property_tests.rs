use std::cell::Cell;

use lazyq_engine::{from_vec, generate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn order_by_matches_a_stable_sort(
        rows in proptest::collection::vec((0u8..8, any::<u16>()), 0..200)
    ) {
        let ours = from_vec(rows.clone()).order_by(|r| r.0).to_list();
        let mut expected = rows;
        expected.sort_by_key(|r| r.0);
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn filter_map_agrees_with_iterators(
        values in proptest::collection::vec(any::<i32>(), 0..300),
        modulus in 1i32..10,
    ) {
        let ours = from_vec(values.clone())
            .filter(|v| v % modulus == 0)
            .map(|v| i64::from(v) * 3)
            .to_list();
        let expected: Vec<i64> = values
            .into_iter()
            .filter(|v| v % modulus == 0)
            .map(|v| i64::from(v) * 3)
            .collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn take_pulls_exactly_what_it_yields(len in 0usize..100, n in 0usize..120) {
        let pulled = Cell::new(0usize);
        let pulls = &pulled;
        let query = generate(move || (0..len).inspect(move |_| pulls.set(pulls.get() + 1))).take(n);
        let out = query.to_list();
        prop_assert_eq!(out.len(), len.min(n));
        prop_assert_eq!(pulled.get(), len.min(n));
    }

    #[test]
    fn distinct_keeps_first_occurrences(values in proptest::collection::vec(0u8..16, 0..100)) {
        let ours = from_vec(values.clone()).distinct().to_list();
        let mut seen = std::collections::HashSet::new();
        let expected: Vec<u8> = values.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(ours, expected);
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn parallel_sum_and_max_equal_sequential(
        values in proptest::collection::vec(-1_000i64..1_000, 0..2_000),
        workers in 1usize..16,
    ) {
        use lazyq_engine::{ParallelOptions, ParallelQuery};

        let sequential = from_vec(values.clone());
        let options = ParallelOptions::with_parallelism(workers);
        prop_assert_eq!(
            ParallelQuery::new(values.clone(), options.clone()).sum().unwrap(),
            sequential.sum()
        );
        prop_assert_eq!(
            ParallelQuery::new(values, options).max().ok(),
            sequential.max().ok()
        );
    }
}
