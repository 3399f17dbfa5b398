// crates/engine/src/parallel/stage.rs
/// A per-element filter/map step applied inside a worker.
///
/// Stages are shared by reference across workers, hence the `Sync` bound.
pub trait Stage<T>: Sync {
    type Output: Send;

    /// `None` drops the element.
    fn apply(&self, item: T) -> Option<Self::Output>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: Send> Stage<T> for Identity {
    type Output = T;

    #[inline]
    fn apply(&self, item: T) -> Option<T> {
        Some(item)
    }
}

pub struct Filtered<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    pub(crate) const fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<T, S, P> Stage<T> for Filtered<S, P>
where
    S: Stage<T>,
    P: Fn(&S::Output) -> bool + Sync,
{
    type Output = S::Output;

    #[inline]
    fn apply(&self, item: T) -> Option<S::Output> {
        self.inner.apply(item).filter(|v| (self.predicate)(v))
    }
}

pub struct Mapped<S, F> {
    inner: S,
    project: F,
}

impl<S, F> Mapped<S, F> {
    pub(crate) const fn new(inner: S, project: F) -> Self {
        Self { inner, project }
    }
}

impl<T, U, S, F> Stage<T> for Mapped<S, F>
where
    S: Stage<T>,
    F: Fn(S::Output) -> U + Sync,
    U: Send,
{
    type Output = U;

    #[inline]
    fn apply(&self, item: T) -> Option<U> {
        self.inner.apply(item).map(&self.project)
    }
}
