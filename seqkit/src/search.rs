use crate::sequence::Sequence;

/// Whether any item satisfies `predicate`. Stops at the first one that does.
///
/// `false` for an empty or absent input.
pub fn any<T, S>(input: &S, predicate: impl FnMut(&T) -> bool) -> bool
where
    S: Sequence<T> + ?Sized,
{
    input.items().iter().any(predicate)
}

/// Whether every item satisfies `predicate`. Stops at the first one that
/// doesn't.
///
/// Vacuously `true` for an empty or absent input.
pub fn all<T, S>(input: &S, predicate: impl FnMut(&T) -> bool) -> bool
where
    S: Sequence<T> + ?Sized,
{
    input.items().iter().all(predicate)
}

/// The first item satisfying `predicate`.
///
/// `None` means nothing matched; a matching item that happens to be a zero
/// value is still `Some`. The returned reference borrows from `input`.
pub fn find<'a, T, S>(input: &'a S, mut predicate: impl FnMut(&T) -> bool) -> Option<&'a T>
where
    S: Sequence<T> + ?Sized,
{
    input.items().iter().find(|item| predicate(*item))
}

/// The index of the first item satisfying `predicate`.
pub fn position<T, S>(input: &S, predicate: impl FnMut(&T) -> bool) -> Option<usize>
where
    S: Sequence<T> + ?Sized,
{
    input.items().iter().position(predicate)
}

/// Whether `value` occurs in the input.
pub fn contains<T, S>(input: &S, value: &T) -> bool
where
    T: PartialEq,
    S: Sequence<T> + ?Sized,
{
    input.items().iter().any(|item| item == value)
}

/// The first item, or `None` for an empty or absent input.
pub fn first<T, S>(input: &S) -> Option<&T>
where
    S: Sequence<T> + ?Sized,
{
    input.items().first()
}

/// The last item, or `None` for an empty or absent input.
pub fn last<T, S>(input: &S) -> Option<&T>
where
    S: Sequence<T> + ?Sized,
{
    input.items().last()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[1, 3, 4, 5], true)]
    #[case(&[1, 3, 5, 7], false)]
    #[case(&[], false)]
    fn test_any_even(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(any(input, |n| n % 2 == 0), expected);
    }

    #[rstest]
    #[case(&[2, 4, 6, 8], true)]
    #[case(&[2, 4, 5, 6], false)]
    #[case(&[], true)]
    fn test_all_even(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(all(input, |n| n % 2 == 0), expected);
    }

    #[test]
    fn test_any_all_absent() {
        let absent: Option<Vec<String>> = None;
        assert!(!any(&absent, |_| true));
        assert!(all(&absent, |_| false));
    }

    #[test]
    fn test_any_short_circuits() {
        let mut visited = 0;
        assert!(any(&[1, 2, 3, 4], |n| {
            visited += 1;
            *n == 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_all_short_circuits() {
        let mut visited = 0;
        assert!(!all(&[1, 2, 3, 4], |n| {
            visited += 1;
            *n < 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_find_zero_value_is_found() {
        let input = [3, 0, 5];
        assert_eq!(find(&input, |n| *n == 0), Some(&0));
        assert_eq!(find(&input, |n| *n == 9), None);
    }

    #[test]
    fn test_find_first_match() {
        let words = vec!["apple", "banana", "avocado"];
        assert_eq!(find(&words, |w| w.starts_with('a')), Some(&"apple"));
    }

    #[test]
    fn test_find_absent() {
        let absent: Option<Vec<i32>> = None;
        assert_eq!(find(&absent, |_| true), None);
    }

    #[test]
    fn test_position() {
        assert_eq!(position(&[5, 6, 7], |n| *n == 7), Some(2));
        assert_eq!(position(&[5, 6, 7], |n| *n == 8), None);
    }

    #[rstest]
    #[case(&["a", "b", "c"], "b", true)]
    #[case(&["a", "b", "c"], "d", false)]
    #[case(&["a", "B", "c"], "b", false)]
    #[case(&[], "a", false)]
    fn test_contains(#[case] input: &[&str], #[case] value: &str, #[case] expected: bool) {
        assert_eq!(contains(input, &value), expected);
    }

    #[test]
    fn test_contains_struct() {
        #[derive(PartialEq)]
        struct Person {
            id: u32,
            name: &'static str,
        }
        let people = vec![Person { id: 1, name: "A" }, Person { id: 2, name: "B" }];
        assert!(contains(&people, &Person { id: 2, name: "B" }));
        assert!(!contains(&people, &Person { id: 3, name: "C" }));
    }

    #[test]
    fn test_first_last() {
        let input = vec![10, 20, 30];
        assert_eq!(first(&input), Some(&10));
        assert_eq!(last(&input), Some(&30));
        let empty: Vec<i32> = Vec::new();
        assert_eq!(first(&empty), None);
        assert_eq!(last(&None::<Vec<i32>>), None);
    }
}
