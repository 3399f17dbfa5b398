// crates/engine/src/parallel/mod.rs
//! Partitioned execution of filter/map stages feeding an associative
//! reduction.
//!
//! Only reductions whose combine step is associative and commutative are
//! offered (`sum`, `average`, `max`, `min`, `count`, and `reduce` with a
//! caller-supplied operation). Results match sequential evaluation exactly
//! when that property holds; the engine cannot check it, so it is a
//! precondition on the caller. Order-sensitive operators report
//! `UnsupportedParallelOperation`.
use std::ops::Add;

use lazyq_shared_kernel::{QueryError, Result};
use num_traits::{ToPrimitive, Zero};

mod cancel;
mod executor;
mod partition;
mod pool;
mod stage;

pub use cancel::CancellationToken;
pub use partition::{Partition, plan_partition_count, split};
pub use pool::worker_capacity;
pub use stage::{Filtered, Identity, Mapped, Stage};

use crate::options::ParallelOptions;
use crate::query::Query;
use crate::reducer::{
    AssociativeReducer, AverageReducer, CountReducer, MaxReducer, MinReducer, Reducer, SumReducer,
};
use crate::sequence::Sequence;

/// Input plus a chain of per-element stages, evaluated on the shared pool by
/// a terminal reduction.
#[must_use = "parallel queries do nothing until a reduction is called"]
pub struct ParallelQuery<T, S = Identity> {
    input: Vec<T>,
    stage: S,
    options: ParallelOptions,
}

impl<T: Send> ParallelQuery<T> {
    pub const fn new(input: Vec<T>, options: ParallelOptions) -> Self {
        Self { input, stage: Identity, options }
    }
}

impl<T, S> ParallelQuery<T, S>
where
    T: Send,
    S: Stage<T>,
{
    pub const fn options(&self) -> &ParallelOptions {
        &self.options
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.options.cancellation = Some(token);
        self
    }

    pub fn filter<P>(self, predicate: P) -> ParallelQuery<T, Filtered<S, P>>
    where
        P: Fn(&S::Output) -> bool + Sync,
    {
        ParallelQuery {
            input: self.input,
            stage: Filtered::new(self.stage, predicate),
            options: self.options,
        }
    }

    pub fn map<U, F>(self, project: F) -> ParallelQuery<T, Mapped<S, F>>
    where
        F: Fn(S::Output) -> U + Sync,
        U: Send,
    {
        ParallelQuery {
            input: self.input,
            stage: Mapped::new(self.stage, project),
            options: self.options,
        }
    }

    pub fn sum(self) -> Result<S::Output>
    where
        S::Output: Zero + Add<Output = S::Output>,
    {
        self.run("sum", &SumReducer)
    }

    /// Partials carry `(sum, count)`; the division happens once after merging.
    /// Floating-point sums may differ from sequential evaluation in the last
    /// bits because partition boundaries change the addition order.
    pub fn average(self) -> Result<f64>
    where
        S::Output: ToPrimitive,
    {
        self.run("average", &AverageReducer)
    }

    pub fn max(self) -> Result<S::Output>
    where
        S::Output: PartialOrd,
    {
        self.run("max", &MaxReducer)
    }

    pub fn min(self) -> Result<S::Output>
    where
        S::Output: PartialOrd,
    {
        self.run("min", &MinReducer)
    }

    pub fn count(self) -> Result<usize> {
        self.run("count", &CountReducer)
    }

    /// Explicitly requested parallel fold.
    ///
    /// `op` must be associative (and commutative if the result should not
    /// depend on partition boundaries) and `identity()` must be its neutral
    /// element. Neither is verified.
    pub fn reduce<I, F>(self, identity: I, op: F) -> Result<S::Output>
    where
        I: Fn() -> S::Output + Sync,
        F: Fn(S::Output, S::Output) -> S::Output + Sync,
    {
        self.run("reduce", &AssociativeReducer::new(identity, op))
    }

    /// Arbitrary left folds are order-sensitive; use [`reduce`](Self::reduce)
    /// or a sequential query.
    pub fn fold<A, F>(self, _seed: A, _combine: F) -> Result<A>
    where
        F: Fn(A, S::Output) -> A,
    {
        Err(QueryError::UnsupportedParallelOperation { operation: "fold" })
    }

    pub fn order_by<K, F>(self, _key: F) -> Result<Self>
    where
        K: Ord,
        F: Fn(&S::Output) -> K,
    {
        Err(QueryError::UnsupportedParallelOperation { operation: "order_by" })
    }

    pub fn take(self, _count: usize) -> Result<Self> {
        Err(QueryError::UnsupportedParallelOperation { operation: "take" })
    }

    fn run<R>(self, operation: &'static str, reducer: &R) -> Result<R::Output>
    where
        R: Reducer<S::Output> + Sync,
        R::Acc: Send,
    {
        executor::execute(operation, self.input, &self.stage, reducer, &self.options)
    }
}

impl<S: Sequence> Query<S>
where
    S::Item: Send,
{
    /// Runs the sequential pipeline once and hands the materialized elements
    /// to the parallel engine.
    pub fn as_parallel(&self, options: ParallelOptions) -> ParallelQuery<S::Item> {
        ParallelQuery::new(self.to_list(), options)
    }
}
