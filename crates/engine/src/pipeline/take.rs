// crates/engine/src/pipeline/take.rs
use crate::sequence::Sequence;

/// At most `count` elements. Once the quota is met the upstream cursor is
/// never pulled again, so unbounded sources are safe behind a `Take`.
#[derive(Clone)]
pub struct Take<S> {
    upstream: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) const fn new(upstream: S, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Take<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.upstream.cursor().take(self.count)
    }
}

/// Drops the first `count` elements, then yields the rest.
#[derive(Clone)]
pub struct Skip<S> {
    upstream: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) const fn new(upstream: S, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Skip<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.upstream.cursor().skip(self.count)
    }
}
