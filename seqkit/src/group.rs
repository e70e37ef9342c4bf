use std::hash::Hash;

use ahash::HashMap;

use crate::sequence::Sequence;

/// Partition `input` by the key `key` assigns to each item.
///
/// Each group keeps its items in their original order. Every item ends up in
/// exactly one group. An empty or absent input gives an empty map.
pub fn group_by<T, K, S>(input: &S, mut key: impl FnMut(&T) -> K) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    S: Sequence<T> + ?Sized,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::default();
    for item in input.items() {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}
