use std::fmt::Display;

use tracing::debug;

use crate::error::{self, Error};
use crate::sequence::Sequence;

/// Split `input` into consecutive sub-slices of `size` items.
///
/// The last chunk holds whatever remains and may be shorter. The chunks are
/// views into `input`, not copies.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `size` is zero, negative or does not fit in
/// a `usize`.
pub fn chunk<T, S, N>(input: &S, size: N) -> error::Result<Vec<&[T]>>
where
    S: Sequence<T> + ?Sized,
    N: TryInto<usize> + Copy + Display,
{
    let chunk_size = match size.try_into() {
        Ok(chunk_size) if chunk_size > 0 => chunk_size,
        _ => {
            debug!(%size, "rejected chunk size");
            return Err(Error::invalid_argument(format!(
                "chunk size must be positive, got {size}"
            )));
        }
    };
    Ok(input.items().chunks(chunk_size).collect())
}

/// Concatenate the inner sequences of `input`, in order.
///
/// Empty and absent inner sequences contribute nothing.
pub fn flatten<T, I, S>(input: &S) -> Vec<T>
where
    T: Clone,
    I: Sequence<T>,
    S: Sequence<I> + ?Sized,
{
    let outer = input.items();
    let total = outer.iter().map(|inner| inner.items().len()).sum();
    let mut result = Vec::with_capacity(total);
    for inner in outer {
        result.extend_from_slice(inner.items());
    }
    result
}

/// A new vector with the items of `input` in reverse order.
pub fn reverse<T, S>(input: &S) -> Vec<T>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    input.items().iter().rev().cloned().collect()
}

/// Reverse `input` in place.
///
/// This mutates the caller's sequence; it is the only function in the crate
/// that does.
pub fn reverse_in_place<T>(input: &mut [T]) {
    input.reverse()
}
