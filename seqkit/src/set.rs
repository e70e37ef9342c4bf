//! Deduplication and set algebra over sequences.
//!
//! All functions return each distinct element once. Ordering follows
//! [`unique`]: elements appear in the order they are first seen while walking
//! the sequence that determines output order (the left-hand input, then the
//! right-hand one for [`union`]). [`union_sorted`] is the one exception and
//! sorts its output instead.
//!
//! Membership tests use hash sets of references into the inputs, so only
//! emitted elements are cloned. Each function makes a single pass over each
//! input.

use std::hash::Hash;

use ahash::{HashSet, RandomState};

use crate::sequence::Sequence;

/// Walk `items`, emitting every element accepted by `keep` the first time it
/// is seen.
fn first_appearances<'a, T, I>(
    items: I,
    capacity: usize,
    mut keep: impl FnMut(&T) -> bool,
) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut emitted: HashSet<&'a T> =
        HashSet::with_capacity_and_hasher(capacity, RandomState::new());
    items
        .filter(|item| keep(*item) && emitted.insert(*item))
        .cloned()
        .collect()
}

fn membership<T>(items: &[T]) -> HashSet<&T>
where
    T: Eq + Hash,
{
    let mut set: HashSet<&T> = HashSet::with_capacity_and_hasher(items.len(), RandomState::new());
    set.extend(items);
    set
}

/// The distinct elements of `input`, in order of first appearance.
pub fn unique<T, S>(input: &S) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: Sequence<T> + ?Sized,
{
    let items = input.items();
    first_appearances(items.iter(), items.len(), |_| true)
}

/// The distinct elements present in both `a` and `b`, in order of first
/// appearance in `a`.
///
/// The membership set is built from whichever side is smaller.
pub fn intersection<T, A, B>(a: &A, b: &B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let (a, b) = (a.items(), b.items());
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let common = if a.len() <= b.len() {
        let candidates = membership(a);
        let mut common: HashSet<&T> =
            HashSet::with_capacity_and_hasher(a.len(), RandomState::new());
        common.extend(b.iter().filter(|item| candidates.contains(item)));
        common
    } else {
        membership(b)
    };
    first_appearances(a.iter(), common.len(), |item| common.contains(item))
}

/// The distinct elements of `a` that do not occur in `b`, in order of first
/// appearance in `a`.
pub fn difference<T, A, B>(a: &A, b: &B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let (a, b) = (a.items(), b.items());
    if a.is_empty() {
        return Vec::new();
    }
    let excluded = membership(b);
    first_appearances(a.iter(), a.len(), |item| !excluded.contains(item))
}

/// The distinct elements of `a` and `b`: first those of `a` in order of first
/// appearance, then those only in `b` in order of first appearance.
pub fn union<T, A, B>(a: &A, b: &B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let (a, b) = (a.items(), b.items());
    first_appearances(a.iter().chain(b), a.len() + b.len(), |_| true)
}

/// The distinct elements of `a` and `b`, sorted ascending.
///
/// Unlike [`union`] the result does not depend on the order of the inputs.
pub fn union_sorted<T, A, B>(a: &A, b: &B) -> Vec<T>
where
    T: Ord + Hash + Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let mut result = union(a, b);
    // elements are distinct, so stability doesn't matter
    result.sort_unstable();
    result
}
