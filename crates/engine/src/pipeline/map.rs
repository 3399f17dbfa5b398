// crates/engine/src/pipeline/map.rs
use crate::sequence::Sequence;

/// One projected element per upstream element.
#[derive(Clone)]
pub struct Map<S, F> {
    upstream: S,
    project: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(upstream: S, project: F) -> Self {
        Self { upstream, project }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = std::iter::Map<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.upstream.cursor().map(&self.project)
    }
}
