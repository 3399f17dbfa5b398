// crates/engine/src/materialize.rs
//! Terminal materializations: lists, dictionaries, lookups and groupings.
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use lazyq_shared_kernel::{QueryError, Result};

use crate::query::Query;
use crate::sequence::Sequence;

/// A key and the elements that mapped to it, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    elements: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub const fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[V] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.elements)
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'g, K, V> IntoIterator for &'g Grouping<K, V> {
    type Item = &'g V;
    type IntoIter = std::slice::Iter<'g, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// One pass over `items`, bucketing by key. Group order is first-seen key
/// order; element order inside a group is upstream order.
pub(crate) fn group_in_first_seen_order<I, K, E, Key, V>(
    items: I,
    key: &K,
    element: &E,
) -> Vec<Grouping<Key, V>>
where
    I: Iterator,
    K: Fn(&I::Item) -> Key,
    E: Fn(I::Item) -> V,
    Key: Eq + Hash + Clone,
{
    let mut index: HashMap<Key, usize> = HashMap::new();
    let mut groups: Vec<Grouping<Key, V>> = Vec::new();
    for item in items {
        let k = key(&item);
        let value = element(item);
        match index.entry(k) {
            Entry::Occupied(slot) => groups[*slot.get()].elements.push(value),
            Entry::Vacant(slot) => {
                groups.push(Grouping {
                    key: slot.key().clone(),
                    elements: vec![value],
                });
                slot.insert(groups.len() - 1);
            }
        }
    }
    groups
}

/// Key to many values. Unlike a dictionary, duplicate keys are expected and
/// simply grow the group.
#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<Grouping<K, V>>,
}

impl<K, V> Lookup<K, V>
where
    K: Eq + Hash,
{
    /// Values stored under `key`; an absent key yields an empty slice.
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index
            .get(key)
            .map_or(&[][..], |&i| self.groups[i].elements())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-seen key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, V>> {
        self.groups.iter()
    }
}

impl<K, V> IntoIterator for Lookup<K, V> {
    type Item = Grouping<K, V>;
    type IntoIter = std::vec::IntoIter<Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<S: Sequence> Query<S> {
    /// Runs the pipeline and collects every element in final order.
    pub fn to_list(&self) -> Vec<S::Item> {
        self.iter().collect()
    }

    /// Unique-key map. Fails on the first key produced twice.
    pub fn to_dictionary<K, V, KF, VF>(&self, key: KF, value: VF) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        KF: Fn(&S::Item) -> K,
        VF: Fn(S::Item) -> V,
    {
        let mut map = HashMap::new();
        for item in self.iter() {
            match map.entry(key(&item)) {
                Entry::Occupied(slot) => return Err(QueryError::duplicate_key(slot.key())),
                Entry::Vacant(slot) => {
                    slot.insert(value(item));
                }
            }
        }
        Ok(map)
    }

    /// Key-to-many materialization; never fails on duplicate keys.
    pub fn to_lookup<K, V, KF, VF>(&self, key: KF, value: VF) -> Lookup<K, V>
    where
        K: Eq + Hash + Clone,
        KF: Fn(&S::Item) -> K,
        VF: Fn(S::Item) -> V,
    {
        let groups = group_in_first_seen_order(self.iter(), &key, &value);
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.key.clone(), i))
            .collect();
        Lookup { index, groups }
    }
}
