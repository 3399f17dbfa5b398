// crates/engine/src/pipeline/zip.rs
use crate::sequence::Sequence;

/// Pairs two sequences element by element, stopping at the shorter one.
#[derive(Clone)]
pub struct Zip<A, B, F> {
    first: A,
    second: B,
    combine: F,
}

impl<A, B, F> Zip<A, B, F> {
    pub(crate) const fn new(first: A, second: B, combine: F) -> Self {
        Self { first, second, combine }
    }
}

pub struct ZipCursor<'a, I, J, F> {
    first: I,
    second: J,
    combine: &'a F,
}

impl<I, J, F, U> Iterator for ZipCursor<'_, I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: Fn(I::Item, J::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let left = self.first.next()?;
        let right = self.second.next()?;
        Some((self.combine)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.size_hint();
        let (b_lo, b_hi) = self.second.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A, B, F, U> Sequence for Zip<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = ZipCursor<'a, A::Cursor<'a>, B::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            combine: &self.combine,
        }
    }
}
