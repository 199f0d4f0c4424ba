//! First and last occurrence of a key.
//!
//! Two formulations are offered:
//!
//! - [`find_leftmost_index`] and [`find_rightmost_index`] find any match with
//!   [`find_index`] and then walk one step at a time to the edge of the run.
//!   They cost *O*(log *n* + *k*) where *k* is the run-length of the key, so a
//!   slice of *n* equal keys costs *O*(*n*).
//! - the `_bisect` variants run dedicated lower/upper bound searches and
//!   cost *O*(log *n*) regardless of duplicates.
//!
//! Both return the same indices on sorted input.

use crate::{
    key::{Identity, KeyExtractor},
    search::binary::find_index,
};

#[must_use]
pub fn find_leftmost_index<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    let mut index = find_index(sequence, value, key)?;
    while let Some(prev) = index.checked_sub(1) {
        if key.compare(&sequence[prev], value).is_ne() {
            break;
        }
        index = prev;
    }
    Some(index)
}

#[must_use]
pub fn find_rightmost_index<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    let mut index = find_index(sequence, value, key)?;
    while let Some(next) = sequence.get(index + 1) {
        if key.compare(next, value).is_ne() {
            break;
        }
        index += 1;
    }
    Some(index)
}

/// Returns the first index whose key is not less than `value`, or the length
/// of the slice if there is none.
#[must_use]
pub fn lower_bound<T, E>(sequence: &[T], value: &E::Key, key: &E) -> usize
where
    E: KeyExtractor<T> + ?Sized,
{
    sequence.partition_point(|element| key.compare(element, value).is_lt())
}

/// Returns the first index whose key is greater than `value`, or the length
/// of the slice if there is none.
#[must_use]
pub fn upper_bound<T, E>(sequence: &[T], value: &E::Key, key: &E) -> usize
where
    E: KeyExtractor<T> + ?Sized,
{
    sequence.partition_point(|element| key.compare(element, value).is_le())
}

#[must_use]
pub fn find_leftmost_index_bisect<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    let index = lower_bound(sequence, value, key);
    let element = sequence.get(index)?;
    key.compare(element, value).is_eq().then_some(index)
}

#[must_use]
pub fn find_rightmost_index_bisect<T, E>(sequence: &[T], value: &E::Key, key: &E) -> Option<usize>
where
    E: KeyExtractor<T> + ?Sized,
{
    let index = upper_bound(sequence, value, key).checked_sub(1)?;
    key.compare(&sequence[index], value).is_eq().then_some(index)
}

/// Lower bound of `value`, kept only if the element there actually is `value`
/// rather than the position `value` would be inserted at.
#[must_use]
pub fn bisect_left<T: Ord>(sequence: &[T], value: &T) -> Option<usize> {
    find_leftmost_index_bisect(sequence, value, &Identity)
}
