// crates/engine/src/aggregate.rs
//! Terminal reductions. Each call runs the pipeline exactly once, left to
//! right over the final element order.
use std::ops::Add;

use lazyq_shared_kernel::{QueryError, Result};
use num_traits::{ToPrimitive, Zero};

use crate::query::Query;
use crate::reducer::{AverageReducer, CountReducer, MaxReducer, MinReducer, Reducer, SumReducer};
use crate::sequence::Sequence;

impl<S: Sequence> Query<S> {
    /// Strict left fold: `combine(...combine(combine(seed, e1), e2)..., en)`.
    ///
    /// Order-sensitive; the seed may be of a different type than the elements.
    pub fn fold<A, F>(&self, seed: A, combine: F) -> A
    where
        F: Fn(A, S::Item) -> A,
    {
        self.iter().fold(seed, combine)
    }

    pub fn count(&self) -> usize {
        CountReducer.fold_all(self.iter())
    }

    /// Stops pulling at the first match.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&S::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// Stops pulling at the first mismatch; vacuously true when empty.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&S::Item) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Additive total. Empty input yields zero.
    pub fn sum(&self) -> S::Item
    where
        S::Item: Zero + Add<Output = S::Item>,
    {
        SumReducer.fold_all(self.iter())
    }

    pub fn sum_of<N, F>(&self, project: F) -> N
    where
        N: Zero + Add<Output = N>,
        F: Fn(S::Item) -> N,
    {
        SumReducer.fold_all(self.iter().map(project))
    }

    /// Mean as `f64`. Fails with `EmptySequence` on zero elements.
    pub fn average(&self) -> Result<f64>
    where
        S::Item: ToPrimitive,
    {
        AverageReducer.reduce(self.iter())
    }

    pub fn average_of<N, F>(&self, project: F) -> Result<f64>
    where
        N: ToPrimitive,
        F: Fn(S::Item) -> N,
    {
        AverageReducer.reduce(self.iter().map(project))
    }

    pub fn max(&self) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        MaxReducer.reduce(self.iter())
    }

    pub fn max_of<N, F>(&self, project: F) -> Result<N>
    where
        N: PartialOrd,
        F: Fn(S::Item) -> N,
    {
        MaxReducer.reduce(self.iter().map(project))
    }

    pub fn min(&self) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        MinReducer.reduce(self.iter())
    }

    pub fn min_of<N, F>(&self, project: F) -> Result<N>
    where
        N: PartialOrd,
        F: Fn(S::Item) -> N,
    {
        MinReducer.reduce(self.iter().map(project))
    }

    pub fn first(&self) -> Result<S::Item> {
        self.iter()
            .next()
            .ok_or(QueryError::NoMatchingElement { operation: "first" })
    }

    pub fn first_where<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: Fn(&S::Item) -> bool,
    {
        self.iter()
            .find(|item| predicate(item))
            .ok_or(QueryError::NoMatchingElement { operation: "first" })
    }

    /// Like [`first`](Self::first) but falls back to `Default::default()`.
    pub fn first_or_default(&self) -> S::Item
    where
        S::Item: Default,
    {
        self.iter().next().unwrap_or_default()
    }

    pub fn first_or_default_where<P>(&self, predicate: P) -> S::Item
    where
        S::Item: Default,
        P: Fn(&S::Item) -> bool,
    {
        self.iter().find(|item| predicate(item)).unwrap_or_default()
    }

    pub fn last(&self) -> Result<S::Item> {
        self.iter()
            .last()
            .ok_or(QueryError::NoMatchingElement { operation: "last" })
    }
}
