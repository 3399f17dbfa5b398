// crates/engine/src/pipeline/filter.rs
use crate::sequence::Sequence;

/// Yields only the upstream elements the predicate accepts, in upstream order.
#[derive(Clone)]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Filter<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.upstream.cursor().filter(&self.predicate)
    }
}
