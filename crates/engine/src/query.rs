// crates/engine/src/query.rs
//! Fluent composition over a [`Sequence`].
//!
//! Every method here is deferred: it consumes the query, wraps its sequence in
//! one more stage and returns the new query without pulling a single element.
//! Callables are moved into the stage when the method is called, so whatever
//! a closure captured by value is fixed at composition time. Terminal methods
//! live in `aggregate` and `materialize` and take `&self`, so a query can be
//! run as many times as needed, each run starting from the root again.
use std::cmp::Ordering;
use std::convert::identity;
use std::hash::Hash;

use lazyq_shared_kernel::SortOrder;

use crate::pipeline::{
    ByComparison, ByKey, Comparer, Distinct, DistinctWith, Filter, GroupBy, Map, OrderBy, Skip,
    Take, ThenBy, Zip,
};
use crate::sequence::Sequence;

#[derive(Clone)]
#[must_use = "queries are lazy and do nothing unless consumed"]
pub struct Query<S> {
    source: S,
}

impl<S> Query<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Query<S> {
    /// Starts a fresh pass over the pipeline.
    pub fn iter(&self) -> S::Cursor<'_> {
        self.source.cursor()
    }

    pub fn filter<P>(self, predicate: P) -> Query<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        Query::new(Filter::new(self.source, predicate))
    }

    pub fn map<U, F>(self, project: F) -> Query<Map<S, F>>
    where
        F: Fn(S::Item) -> U,
    {
        Query::new(Map::new(self.source, project))
    }

    pub fn take(self, count: usize) -> Query<Take<S>> {
        Query::new(Take::new(self.source, count))
    }

    pub fn skip(self, count: usize) -> Query<Skip<S>> {
        Query::new(Skip::new(self.source, count))
    }

    pub fn distinct(self) -> Query<Distinct<S>>
    where
        S::Item: Eq + Hash + Clone,
    {
        Query::new(Distinct::new(self.source))
    }

    pub fn distinct_with<E>(self, equality: E) -> Query<DistinctWith<S, E>>
    where
        S::Item: Clone,
        E: Fn(&S::Item, &S::Item) -> bool,
    {
        Query::new(DistinctWith::new(self.source, equality))
    }

    pub fn zip<B, F, U>(self, other: B, combine: F) -> Query<Zip<S, B, F>>
    where
        B: Sequence,
        F: Fn(S::Item, B::Item) -> U,
    {
        Query::new(Zip::new(self.source, other, combine))
    }

    pub fn order_by<K, F>(self, key: F) -> Query<OrderBy<S, ByKey<F, K>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K,
    {
        Query::new(OrderBy::new(self.source, ByKey::new(key, SortOrder::Ascending)))
    }

    pub fn order_by_descending<K, F>(self, key: F) -> Query<OrderBy<S, ByKey<F, K>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K,
    {
        Query::new(OrderBy::new(self.source, ByKey::new(key, SortOrder::Descending)))
    }

    /// Orders with a custom comparison instead of a key.
    pub fn order_by_with<F>(self, compare: F) -> Query<OrderBy<S, ByComparison<F>>>
    where
        F: Fn(&S::Item, &S::Item) -> Ordering,
    {
        Query::new(OrderBy::new(self.source, ByComparison::new(compare, SortOrder::Ascending)))
    }

    pub fn group_by<K, F>(self, key: F) -> Query<GroupBy<S, F, fn(S::Item) -> S::Item>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&S::Item) -> K,
    {
        Query::new(GroupBy::new(self.source, key, identity as fn(S::Item) -> S::Item))
    }

    pub fn group_by_with<K, V, F, E>(self, key: F, element: E) -> Query<GroupBy<S, F, E>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&S::Item) -> K,
        E: Fn(S::Item) -> V,
    {
        Query::new(GroupBy::new(self.source, key, element))
    }
}

impl<S, C> Query<OrderBy<S, C>>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    pub fn then_by<K, F>(self, key: F) -> Query<OrderBy<S, ThenBy<C, ByKey<F, K>>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K,
    {
        self.refine(ByKey::new(key, SortOrder::Ascending))
    }

    pub fn then_by_descending<K, F>(self, key: F) -> Query<OrderBy<S, ThenBy<C, ByKey<F, K>>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K,
    {
        self.refine(ByKey::new(key, SortOrder::Descending))
    }

    pub fn then_by_with<F>(self, compare: F) -> Query<OrderBy<S, ThenBy<C, ByComparison<F>>>>
    where
        F: Fn(&S::Item, &S::Item) -> Ordering,
    {
        self.refine(ByComparison::new(compare, SortOrder::Ascending))
    }

    fn refine<N>(self, next: N) -> Query<OrderBy<S, ThenBy<C, N>>>
    where
        N: Comparer<S::Item>,
    {
        let (upstream, comparer) = self.source.into_parts();
        Query::new(OrderBy::new(upstream, ThenBy::new(comparer, next)))
    }
}

impl<S: Sequence> Sequence for Query<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor()
    }
}

impl<'q, S: Sequence> IntoIterator for &'q Query<S> {
    type Item = S::Item;
    type IntoIter = S::Cursor<'q>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.cursor()
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from_vec, generate};
    use std::cell::Cell;

    #[test]
    fn composing_stages_pulls_nothing() {
        let counter = Cell::new(0);
        let pulls = &counter;
        let query = generate(move || (1..=5).inspect(move |_| pulls.set(pulls.get() + 1)))
            .filter(|v| v % 2 == 1)
            .map(|v| v * 10)
            .order_by_descending(|v| *v)
            .distinct();
        assert_eq!(counter.get(), 0);
        assert_eq!(query.to_list(), vec![50, 30, 10]);
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn query_is_re_enumerable() {
        let query = from_vec(vec![3, 1, 2]).map(|v| v + 1);
        assert_eq!(query.to_list(), query.to_list());
        let mut seen = Vec::new();
        for v in &query {
            seen.push(v);
        }
        assert_eq!(seen, vec![4, 2, 3]);
    }
}
