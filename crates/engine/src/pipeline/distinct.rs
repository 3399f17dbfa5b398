// crates/engine/src/pipeline/distinct.rs
use std::hash::Hash;

use hashbrown::HashSet;

use crate::sequence::Sequence;

/// First occurrence of every value, by `Eq + Hash`.
#[derive(Clone)]
pub struct Distinct<S> {
    upstream: S,
}

impl<S> Distinct<S> {
    pub(crate) const fn new(upstream: S) -> Self {
        Self { upstream }
    }
}

pub struct DistinctCursor<I: Iterator> {
    inner: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for DistinctCursor<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.inner.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctCursor {
            inner: self.upstream.cursor(),
            seen: HashSet::new(),
        }
    }
}

/// First occurrence of every value under a caller-supplied equality.
///
/// Equality functions carry no hash, so each element is checked against every
/// kept element.
#[derive(Clone)]
pub struct DistinctWith<S, E> {
    upstream: S,
    equality: E,
}

impl<S, E> DistinctWith<S, E> {
    pub(crate) const fn new(upstream: S, equality: E) -> Self {
        Self { upstream, equality }
    }
}

pub struct DistinctWithCursor<'a, I: Iterator, E> {
    inner: I,
    equality: &'a E,
    kept: Vec<I::Item>,
}

impl<I, E> Iterator for DistinctWithCursor<'_, I, E>
where
    I: Iterator,
    I::Item: Clone,
    E: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.inner.next()?;
            if !self.kept.iter().any(|k| (self.equality)(k, &item)) {
                self.kept.push(item.clone());
                return Some(item);
            }
        }
    }
}

impl<S, E> Sequence for DistinctWith<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctWithCursor<'a, S::Cursor<'a>, E>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctWithCursor {
            inner: self.upstream.cursor(),
            equality: &self.equality,
            kept: Vec::new(),
        }
    }
}
