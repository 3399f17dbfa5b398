// crates/engine/src/pipeline/order.rs
use std::cmp::Ordering;
use std::marker::PhantomData;

use lazyq_shared_kernel::SortOrder;
use log::trace;

use crate::sequence::Sequence;

/// Total ordering over elements used by [`OrderBy`].
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders by a derived key.
pub struct ByKey<F, K> {
    key: F,
    order: SortOrder,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub const fn new(key: F, order: SortOrder) -> Self {
        Self { key, order, _key: PhantomData }
    }
}

impl<T, F, K> Comparer<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order.apply((self.key)(a).cmp(&(self.key)(b)))
    }
}

/// Orders with a caller-supplied comparison function.
pub struct ByComparison<F> {
    compare: F,
    order: SortOrder,
}

impl<F> ByComparison<F> {
    pub const fn new(compare: F, order: SortOrder) -> Self {
        Self { compare, order }
    }
}

impl<T, F> Comparer<T> for ByComparison<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order.apply((self.compare)(a, b))
    }
}

/// Refines ties of `primary` with `secondary`, in declaration order.
pub struct ThenBy<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenBy<A, B> {
    pub const fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T, A, B> Comparer<T> for ThenBy<A, B>
where
    A: Comparer<T>,
    B: Comparer<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.primary
            .compare(a, b)
            .then_with(|| self.secondary.compare(a, b))
    }
}

/// Stable sort stage.
///
/// Not deferred per element: the first pull drains the whole upstream, sorts
/// it (equal elements keep their upstream order) and then yields from the
/// buffer.
pub struct OrderBy<S, C> {
    upstream: S,
    comparer: C,
}

impl<S, C> OrderBy<S, C> {
    pub(crate) const fn new(upstream: S, comparer: C) -> Self {
        Self { upstream, comparer }
    }

    pub(crate) fn into_parts(self) -> (S, C) {
        (self.upstream, self.comparer)
    }
}

pub struct OrderByCursor<'a, I: Iterator, C> {
    pending: Option<I>,
    comparer: &'a C,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I, C> Iterator for OrderByCursor<'_, I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(upstream) = self.pending.take() {
            let mut buffer: Vec<I::Item> = upstream.collect();
            buffer.sort_by(|a, b| self.comparer.compare(a, b));
            trace!("order_by buffered {} elements", buffer.len());
            self.sorted = buffer.into_iter();
        }
        self.sorted.next()
    }
}

impl<S, C> Sequence for OrderBy<S, C>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a>
        = OrderByCursor<'a, S::Cursor<'a>, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OrderByCursor {
            pending: Some(self.upstream.cursor()),
            comparer: &self.comparer,
            sorted: Vec::new().into_iter(),
        }
    }
}
