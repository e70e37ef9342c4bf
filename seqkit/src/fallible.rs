//! Fail-fast variants of map, filter and reduce.
//!
//! The callbacks here may fail. The traversal stops at the first `Err`: no
//! later element is visited, nothing is retried or skipped. The caller gets
//! back the error exactly as the callback returned it, together with the work
//! completed for the elements before the failing one (see [`Partial`]).
//!
//! An empty or absent input succeeds without calling the callback.

use tracing::trace;

use crate::error::{Partial, PartialResult};
use crate::sequence::Sequence;

/// Apply a fallible `f` to every item, in order.
///
/// On failure the partial result holds `f` applied to every item before the
/// failing one.
pub fn try_map<T, U, E, S>(
    input: &S,
    mut f: impl FnMut(&T) -> Result<U, E>,
) -> PartialResult<Vec<U>, E>
where
    S: Sequence<T> + ?Sized,
{
    let items = input.items();
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match f(item) {
            Ok(value) => result.push(value),
            Err(error) => {
                trace!(
                    index,
                    completed = result.len(),
                    "try_map stopped at failing item"
                );
                return Err(Partial::new(result, error));
            }
        }
    }
    Ok(result)
}

/// Keep the items for which a fallible `predicate` holds.
///
/// On failure the partial result holds the items kept before the failing one.
pub fn try_filter<T, E, S>(
    input: &S,
    mut predicate: impl FnMut(&T) -> Result<bool, E>,
) -> PartialResult<Vec<T>, E>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    let mut result = Vec::new();
    for (index, item) in input.items().iter().enumerate() {
        match predicate(item) {
            Ok(true) => result.push(item.clone()),
            Ok(false) => {}
            Err(error) => {
                trace!(
                    index,
                    kept = result.len(),
                    "try_filter stopped at failing item"
                );
                return Err(Partial::new(result, error));
            }
        }
    }
    Ok(result)
}

/// Left fold with a fallible reducer, starting from `initial`.
///
/// The reducer borrows the accumulator and returns the next one, so a failing
/// call leaves it untouched: on failure the partial result is the accumulator
/// as it stood right before the failing call.
///
/// The price is that a reducer building up an owned accumulator, such as a
/// `Vec` or `String`, has to clone it on every step, which makes collecting
/// folds quadratic. Prefer [`try_map`] or [`try_filter`] for those.
pub fn try_reduce<T, A, E, S>(
    input: &S,
    initial: A,
    mut f: impl FnMut(&A, &T) -> Result<A, E>,
) -> PartialResult<A, E>
where
    S: Sequence<T> + ?Sized,
{
    let mut accumulator = initial;
    for (index, item) in input.items().iter().enumerate() {
        match f(&accumulator, item) {
            Ok(next) => accumulator = next,
            Err(error) => {
                trace!(index, "try_reduce stopped at failing item");
                return Err(Partial::new(accumulator, error));
            }
        }
    }
    Ok(accumulator)
}
