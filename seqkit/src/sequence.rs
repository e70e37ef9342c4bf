/// An ordered list of items that may be absent.
///
/// This is the input interface of the crate: implement it and every sequence
/// function accepts your type. It is implemented for slices, vectors, arrays,
/// references to any sequence, and `Option` of any sequence. `None` is an
/// absent sequence, which has no items.
pub trait Sequence<T> {
    /// The items of the sequence, in order.
    ///
    /// An absent sequence yields the empty slice.
    fn items(&self) -> &[T];

    /// Whether no sequence was given at all, as opposed to an empty one.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Sequence<T> for [T] {
    #[inline]
    fn items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn items(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    #[inline]
    fn items(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S> Sequence<T> for &S
where
    S: Sequence<T> + ?Sized,
{
    #[inline]
    fn items(&self) -> &[T] {
        (**self).items()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T, S> Sequence<T> for Option<S>
where
    S: Sequence<T>,
{
    #[inline]
    fn items(&self) -> &[T] {
        match self {
            Some(sequence) => sequence.items(),
            None => &[],
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        match self {
            Some(sequence) => sequence.is_absent(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_has_no_items() {
        let absent: Option<Vec<i32>> = None;
        assert!(absent.is_absent());
        assert!(absent.items().is_empty());
    }

    #[test]
    fn test_present_empty_is_not_absent() {
        let empty: Option<Vec<i32>> = Some(Vec::new());
        assert!(!empty.is_absent());
        assert!(empty.items().is_empty());
        assert!(!Vec::<i32>::new().is_absent());
    }

    #[test]
    fn test_nested_absent() {
        let absent: Option<Option<&[u8]>> = Some(None);
        assert!(absent.is_absent());
        assert_eq!(absent.items(), &[] as &[u8]);
    }

    #[test]
    fn test_items_through_reference() {
        let v = vec![1, 2, 3];
        let r = &v;
        assert_eq!(Sequence::items(&r), &[1, 2, 3]);
        assert_eq!([4, 5].items(), &[4, 5]);
        assert_eq!(v[1..].items(), &[2, 3]);
    }
}
