use crate::sequence::Sequence;

/// Apply `f` to every item, in order.
///
/// The result has exactly as many items as the input. An absent input gives
/// an empty vector.
pub fn map<T, U, S>(input: &S, f: impl FnMut(&T) -> U) -> Vec<U>
where
    S: Sequence<T> + ?Sized,
{
    input.items().iter().map(f).collect()
}

/// Keep the items for which `predicate` holds, in their original order.
pub fn filter<T, S>(input: &S, mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    input
        .items()
        .iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// Left fold over the items, starting from `initial`.
///
/// An empty or absent input returns `initial` unchanged.
pub fn reduce<T, A, S>(input: &S, initial: A, mut f: impl FnMut(A, &T) -> A) -> A
where
    S: Sequence<T> + ?Sized,
{
    input
        .items()
        .iter()
        .fold(initial, |accumulator, item| f(accumulator, item))
}
