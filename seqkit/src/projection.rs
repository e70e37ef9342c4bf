//! Projecting maps into vectors.
//!
//! Apart from [`sorted_keys`] the order of the output is the iteration order
//! of the map, which for hash maps is unspecified.

use crate::mapping::Mapping;

/// The keys of `input`, in the map's iteration order (unspecified for hash
/// maps).
pub fn keys<K, V, M>(input: &M) -> Vec<K>
where
    K: Clone,
    M: Mapping<K, V> + ?Sized,
{
    let mut keys = Vec::with_capacity(input.len());
    keys.extend(input.entries().map(|(key, _)| key.clone()));
    keys
}

/// The keys of `input`, sorted ascending.
pub fn sorted_keys<K, V, M>(input: &M) -> Vec<K>
where
    K: Ord + Clone,
    M: Mapping<K, V> + ?Sized,
{
    let mut keys = keys(input);
    keys.sort_unstable();
    keys
}

/// The values of `input`, in the map's iteration order (unspecified for hash
/// maps).
pub fn values<K, V, M>(input: &M) -> Vec<V>
where
    V: Clone,
    M: Mapping<K, V> + ?Sized,
{
    let mut values = Vec::with_capacity(input.len());
    values.extend(input.entries().map(|(_, value)| value.clone()));
    values
}

/// Apply `f` to every entry of `input`, collecting the results.
pub fn map_to_vec<K, V, R, M>(input: &M, mut f: impl FnMut(&K, &V) -> R) -> Vec<R>
where
    M: Mapping<K, V> + ?Sized,
{
    let mut result = Vec::with_capacity(input.len());
    result.extend(input.entries().map(|(key, value)| f(key, value)));
    result
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    fn fruit() -> HashMap<&'static str, u32> {
        HashMap::from([("banana", 2), ("apple", 5), ("cherry", 1)])
    }

    #[test]
    fn test_sorted_keys() {
        assert_eq!(sorted_keys(&fruit()), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_keys_unordered() {
        let mut keys = keys(&fruit());
        keys.sort();
        assert_eq!(keys, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_values_unordered() {
        let mut values = values(&fruit());
        values.sort();
        assert_eq!(values, vec![1, 2, 5]);
    }

    #[test]
    fn test_map_to_vec() {
        let map = BTreeMap::from([(1, "one"), (2, "two")]);
        assert_eq!(
            map_to_vec(&map, |k, v| format!("{k}={v}")),
            vec!["1=one".to_string(), "2=two".to_string()]
        );
    }

    #[test]
    fn test_absent_and_empty_maps() {
        let absent: Option<HashMap<String, i32>> = None;
        assert!(keys(&absent).is_empty());
        assert!(sorted_keys(&absent).is_empty());
        assert!(values(&absent).is_empty());
        assert!(map_to_vec(&absent, |_, v| *v).is_empty());
        let empty: ahash::HashMap<i32, i32> = ahash::HashMap::default();
        assert!(keys(&empty).is_empty());
        assert!(values(&empty).is_empty());
    }
}
