// crates/engine/src/pipeline/group.rs
use std::hash::Hash;

use crate::materialize::{Grouping, group_in_first_seen_order};
use crate::sequence::Sequence;

/// Groups by derived key. Built in one full upstream pass on first pull;
/// groups come out in first-seen key order and keep upstream order inside.
#[derive(Clone)]
pub struct GroupBy<S, K, E> {
    upstream: S,
    key: K,
    element: E,
}

impl<S, K, E> GroupBy<S, K, E> {
    pub(crate) const fn new(upstream: S, key: K, element: E) -> Self {
        Self { upstream, key, element }
    }
}

pub struct GroupByCursor<'a, I, K, E, Key, V> {
    pending: Option<I>,
    key: &'a K,
    element: &'a E,
    groups: std::vec::IntoIter<Grouping<Key, V>>,
}

impl<I, K, E, Key, V> Iterator for GroupByCursor<'_, I, K, E, Key, V>
where
    I: Iterator,
    K: Fn(&I::Item) -> Key,
    E: Fn(I::Item) -> V,
    Key: Eq + Hash + Clone,
{
    type Item = Grouping<Key, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.pending.take() {
            self.groups = group_in_first_seen_order(upstream, self.key, self.element).into_iter();
        }
        self.groups.next()
    }
}

impl<S, K, E, Key, V> Sequence for GroupBy<S, K, E>
where
    S: Sequence,
    K: Fn(&S::Item) -> Key,
    E: Fn(S::Item) -> V,
    Key: Eq + Hash + Clone,
{
    type Item = Grouping<Key, V>;
    type Cursor<'a>
        = GroupByCursor<'a, S::Cursor<'a>, K, E, Key, V>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        GroupByCursor {
            pending: Some(self.upstream.cursor()),
            key: &self.key,
            element: &self.element,
            groups: Vec::new().into_iter(),
        }
    }
}
