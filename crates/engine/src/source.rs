// crates/engine/src/source.rs
//! Root sequences a pipeline can start from.
use std::iter::Cloned;
use std::ops::Range;
use std::slice;

use crate::query::Query;
use crate::sequence::Sequence;

/// Owned elements, cloned out on every pass.
#[derive(Debug, Clone, Default)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T: Clone> Sequence for VecSource<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }
}

/// Borrowed elements, cloned out on every pass.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'s, T> {
    items: &'s [T],
}

impl<'s, T: Clone> Sequence for SliceSource<'s, T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<slice::Iter<'s, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }
}

/// Half-open numeric range.
#[derive(Debug, Clone)]
pub struct RangeSource<A> {
    range: Range<A>,
}

impl<A> Sequence for RangeSource<A>
where
    A: Clone,
    Range<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor<'a>
        = Range<A>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.range.clone()
    }
}

/// A closure invoked once per pass to produce that pass's elements.
#[derive(Clone)]
pub struct Generate<F> {
    produce: F,
}

impl<F, I> Sequence for Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = I::IntoIter
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.produce)().into_iter()
    }
}

pub fn from_vec<T: Clone>(items: Vec<T>) -> Query<VecSource<T>> {
    Query::new(VecSource { items })
}

pub fn from_slice<T: Clone>(items: &[T]) -> Query<SliceSource<'_, T>> {
    Query::new(SliceSource { items })
}

pub fn range<A>(range: Range<A>) -> Query<RangeSource<A>>
where
    A: Clone,
    Range<A>: Iterator<Item = A>,
{
    Query::new(RangeSource { range })
}

/// Wraps a producer closure. The closure runs again for every pass, so an
/// infinite iterator is fine as long as the pipeline bounds it (e.g. `take`).
pub fn generate<F, I>(produce: F) -> Query<Generate<F>>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Query::new(Generate { produce })
}
