// crates/engine/src/reducer.rs
//! Reductions shared by sequential and parallel execution.
//!
//! A [`Reducer`] splits a terminal aggregate into `init`/`accumulate`/
//! `combine`/`finish`. Sequential mode folds one accumulator over the whole
//! pass; parallel mode folds one per partition and merges the partials with
//! `combine`. Merging is only partition-independent when `combine` is
//! associative and commutative, which is the caller's obligation.
use std::cmp::Ordering;
use std::ops::Add;

use lazyq_shared_kernel::{Mean, QueryError, Result};
use num_traits::{ToPrimitive, Zero};

pub trait Reducer<T> {
    type Acc;
    type Output;

    fn init(&self) -> Self::Acc;
    fn accumulate(&self, acc: Self::Acc, item: T) -> Self::Acc;
    fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;
    fn finish(&self, acc: Self::Acc) -> Result<Self::Output>;

    /// Folds a whole pass into one accumulator without finishing it.
    fn fold_all<I>(&self, items: I) -> Self::Acc
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        items
            .into_iter()
            .fold(self.init(), |acc, item| self.accumulate(acc, item))
    }

    /// Sequential evaluation over a single pass.
    fn reduce<I>(&self, items: I) -> Result<Self::Output>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        self.finish(self.fold_all(items))
    }
}

/// Additive total; an empty input yields zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumReducer;

impl<T> Reducer<T> for SumReducer
where
    T: Zero + Add<Output = T>,
{
    type Acc = T;
    type Output = T;

    fn init(&self) -> T {
        T::zero()
    }

    fn accumulate(&self, acc: T, item: T) -> T {
        acc + item
    }

    fn combine(&self, left: T, right: T) -> T {
        left + right
    }

    fn finish(&self, acc: T) -> Result<T> {
        Ok(acc)
    }
}

/// Arithmetic mean as `f64`, merged as `(sum, count)` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageReducer;

impl<T: ToPrimitive> Reducer<T> for AverageReducer {
    type Acc = Mean;
    type Output = f64;

    fn init(&self) -> Mean {
        Mean::new()
    }

    fn accumulate(&self, acc: Mean, item: T) -> Mean {
        acc.with(item)
    }

    fn combine(&self, left: Mean, right: Mean) -> Mean {
        left + right
    }

    fn finish(&self, acc: Mean) -> Result<f64> {
        acc.value()
            .ok_or(QueryError::EmptySequence { operation: "average" })
    }
}

/// Keeps `right` only if it compares `wins` against `left`, so the earlier
/// element survives ties.
///
/// A value that is not comparable with itself (NaN) loses to every
/// comparable value and is returned only when nothing else was seen. The
/// merge stays associative: partition boundaries never change the result.
#[inline]
fn pick<T: PartialOrd>(left: Option<T>, right: Option<T>, wins: Ordering) -> Option<T> {
    match (left, right) {
        (Some(l), Some(r)) => {
            let replaces = (is_unordered(&l) && !is_unordered(&r))
                || r.partial_cmp(&l) == Some(wins);
            Some(if replaces { r } else { l })
        }
        (l, r) => l.or(r),
    }
}

fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

/// Largest element; among equal maxima the earliest wins. NaN-like values
/// lose to every comparable one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxReducer;

impl<T: PartialOrd> Reducer<T> for MaxReducer {
    type Acc = Option<T>;
    type Output = T;

    fn init(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: Option<T>, item: T) -> Option<T> {
        self.combine(acc, Some(item))
    }

    fn combine(&self, left: Option<T>, right: Option<T>) -> Option<T> {
        pick(left, right, Ordering::Greater)
    }

    fn finish(&self, acc: Option<T>) -> Result<T> {
        acc.ok_or(QueryError::EmptySequence { operation: "max" })
    }
}

/// Smallest element; among equal minima the earliest wins. NaN-like values
/// lose to every comparable one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinReducer;

impl<T: PartialOrd> Reducer<T> for MinReducer {
    type Acc = Option<T>;
    type Output = T;

    fn init(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: Option<T>, item: T) -> Option<T> {
        self.combine(acc, Some(item))
    }

    fn combine(&self, left: Option<T>, right: Option<T>) -> Option<T> {
        pick(left, right, Ordering::Less)
    }

    fn finish(&self, acc: Option<T>) -> Result<T> {
        acc.ok_or(QueryError::EmptySequence { operation: "min" })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountReducer;

impl<T> Reducer<T> for CountReducer {
    type Acc = usize;
    type Output = usize;

    fn init(&self) -> usize {
        0
    }

    fn accumulate(&self, acc: usize, _item: T) -> usize {
        acc + 1
    }

    fn combine(&self, left: usize, right: usize) -> usize {
        left + right
    }

    fn finish(&self, acc: usize) -> Result<usize> {
        Ok(acc)
    }
}

/// Caller-supplied associative operation with an identity element.
///
/// `identity` is called once per partition, so it must return the same
/// neutral value every time.
pub struct AssociativeReducer<I, F> {
    identity: I,
    op: F,
}

impl<I, F> AssociativeReducer<I, F> {
    pub const fn new(identity: I, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T, I, F> Reducer<T> for AssociativeReducer<I, F>
where
    I: Fn() -> T,
    F: Fn(T, T) -> T,
{
    type Acc = T;
    type Output = T;

    fn init(&self) -> T {
        (self.identity)()
    }

    fn accumulate(&self, acc: T, item: T) -> T {
        (self.op)(acc, item)
    }

    fn combine(&self, left: T, right: T) -> T {
        (self.op)(left, right)
    }

    fn finish(&self, acc: T) -> Result<T> {
        Ok(acc)
    }
}
