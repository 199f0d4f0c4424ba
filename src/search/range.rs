use core::ops::Range;

use crate::{
    key::KeyExtractor,
    search::boundary::{find_leftmost_index, find_rightmost_index},
};

/// Returns the leftmost and rightmost indices of `value`.
#[must_use]
pub fn find_boundaries<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<(usize, usize)>
where
    E: KeyExtractor<T> + ?Sized,
{
    let left = find_leftmost_index(sequence, value, key)?;
    let right = find_rightmost_index(sequence, value, key)?;
    Some((left, right))
}

/// Returns every index whose key equals `value`.
///
/// The range is empty if `value` is absent.
#[must_use]
pub fn find_all_indices<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Range<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    match find_boundaries(sequence, value, key) {
        Some((left, right)) => left..right + 1,
        None => 0..0,
    }
}

#[must_use]
pub fn find_leftmost<'a, T, E>(sequence: &'a [T], value: &E::Key, key: &E) -> Option<&'a T>
where
    E: KeyExtractor<T> + ?Sized,
{
    find_leftmost_index(sequence, value, key).map(|i| &sequence[i])
}

#[must_use]
pub fn find_rightmost<'a, T, E>(sequence: &'a [T], value: &E::Key, key: &E) -> Option<&'a T>
where
    E: KeyExtractor<T> + ?Sized,
{
    find_rightmost_index(sequence, value, key).map(|i| &sequence[i])
}

/// Returns the run of elements whose key equals `value`.
#[must_use]
pub fn find_all<'a, T, E>(sequence: &'a [T], value: &E::Key, key: &E) -> &'a [T]
where
    E: KeyExtractor<T> + ?Sized,
{
    &sequence[find_all_indices(sequence, value, key)]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::key::Identity;

    use super::*;

    #[test]
    fn test_duplicates() {
        let s = [1, 2, 2, 2, 5, 9];
        assert_eq!(find_boundaries(&s, &2, &Identity), Some((1, 3)));
        assert_eq!(find_all_indices(&s, &2, &Identity), 1..4);
        assert_eq!(find_all(&s, &2, &Identity), &[2, 2, 2]);
        let values: BTreeSet<_> = find_all(&s, &2, &Identity).iter().copied().collect();
        assert_eq!(values, BTreeSet::from([2]));
    }

    #[test]
    fn test_empty() {
        let s: [u32; 0] = [];
        assert_eq!(find_boundaries(&s, &7, &Identity), None);
        assert!(find_all_indices(&s, &7, &Identity).is_empty());
        assert_eq!(find_leftmost(&s, &7, &Identity), None);
        assert_eq!(find_rightmost(&s, &7, &Identity), None);
        assert!(find_all(&s, &7, &Identity).is_empty());
    }

    #[test]
    fn test_leftmost_at_zero() {
        let s = [4, 4, 4, 4];
        assert_eq!(find_boundaries(&s, &4, &Identity), Some((0, 3)));
        let indices: Vec<_> = find_all_indices(&s, &4, &Identity).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
        assert_eq!(find_all(&s, &4, &Identity).len(), 4);

        let s = [3, 8];
        assert_eq!(find_all_indices(&s, &3, &Identity), 0..1);
    }

    #[test]
    fn test_absent() {
        let s = [1, 3, 5, 7];
        assert_eq!(find_boundaries(&s, &6, &Identity), None);
        assert!(find_all_indices(&s, &6, &Identity).is_empty());
        assert_eq!(find_leftmost(&s, &6, &Identity), None);
        assert_eq!(find_rightmost(&s, &6, &Identity), None);
        assert!(find_all(&s, &6, &Identity).is_empty());
    }

    #[test]
    fn test_single() {
        assert_eq!(find_boundaries(&[5], &5, &Identity), Some((0, 0)));
        assert_eq!(find_all_indices(&[5], &5, &Identity), 0..1);
    }

    #[test]
    fn test_extract_by_key() {
        let entries = [(1, 'a'), (2, 'b'), (2, 'c'), (2, 'd'), (5, 'e')];
        let id = |e: &(u32, char)| e.0;
        assert_eq!(find_leftmost(&entries, &2, &id), Some(&(2, 'b')));
        assert_eq!(find_rightmost(&entries, &2, &id), Some(&(2, 'd')));
        let tags: String = find_all(&entries, &2, &id).iter().map(|e| e.1).collect();
        assert_eq!(tags, "bcd");
    }

    proptest! {
        #[test]
        fn test_indices_are_exact_run(mut s in prop::collection::vec(0..8_i32, 0..64), v in 0..8_i32) {
            s.sort_unstable();
            let expected: Vec<usize> = (0..s.len()).filter(|&i| s[i] == v).collect();
            let found: Vec<usize> = find_all_indices(&s, &v, &Identity).collect();
            prop_assert_eq!(found, expected);
        }
    }
}
