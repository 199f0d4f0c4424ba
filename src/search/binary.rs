use core::cmp::Ordering;

use crate::key::KeyExtractor;

/// Returns the index of an element whose key equals `value`.
///
/// Halves the candidate interval until the midpoint matches or the interval
/// is exhausted. If several elements share the key, any one of them may be
/// returned; use [`find_leftmost_index`](super::boundary::find_leftmost_index)
/// or [`find_rightmost_index`](super::boundary::find_rightmost_index) for a
/// specific occurrence.
///
/// If the slice is not sorted by `key`, the result is unspecified.
///
/// *O*(log *n*) time, *O*(1) space.
#[must_use]
pub fn find_index<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    // `[left, right)`; the midpoint is the floor of the inclusive bounds
    let mut left = 0;
    let mut right = sequence.len();
    while left < right {
        let middle = left + (right - 1 - left) / 2;
        match key.compare(&sequence[middle], value) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => left = middle + 1,
            Ordering::Greater => right = middle,
        }
    }
    None
}

#[must_use]
pub fn contains<T, E>(sequence: &[T], value: &E::Key, key: &E) -> bool
where
    E: KeyExtractor<T> + ?Sized,
{
    find_index(sequence, value, key).is_some()
}

/// Returns the element found by [`find_index`].
#[must_use]
pub fn find<'a, T, E>(sequence: &'a [T], value: &E::Key, key: &E) -> Option<&'a T>
where
    E: KeyExtractor<T> + ?Sized,
{
    find_index(sequence, value, key).map(|i| &sequence[i])
}
