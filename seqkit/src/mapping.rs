use std::collections::{BTreeMap, HashMap};

/// An associative map that may be absent.
///
/// Implemented for `HashMap` with any hasher (including `ahash::HashMap`),
/// `BTreeMap`, references to any mapping, and `Option` of any mapping. `None`
/// is an absent map, which has no entries.
///
/// Entry order is whatever the underlying map iterates in.
pub trait Mapping<K, V> {
    /// The number of entries.
    fn len(&self) -> usize;

    /// Iterate over the entries.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Whether the mapping has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether no map was given at all, as opposed to an empty one.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<K, V, H> Mapping<K, V> for HashMap<K, V, H> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> Mapping<K, V> for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V, M> Mapping<K, V> for &M
where
    M: Mapping<K, V> + ?Sized,
{
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        (**self).entries()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<K, V, M> Mapping<K, V> for Option<M>
where
    M: Mapping<K, V>,
{
    #[inline]
    fn len(&self) -> usize {
        self.as_ref().map_or(0, Mapping::len)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().flat_map(|mapping| mapping.entries())
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Mapping::is_absent)
    }
}
