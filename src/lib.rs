#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

use core::ops::Range;

pub mod bench;
pub mod data;
pub mod key;
pub mod search;
pub mod time;

pub use key::{Identity, KeyExtractor};
pub use search::{
    SearchError,
    baseline::{linear_search, random_search, random_search_default},
    binary::{contains, find, find_index},
    boundary::{
        bisect_left, find_leftmost_index, find_leftmost_index_bisect, find_rightmost_index,
        find_rightmost_index_bisect, lower_bound, upper_bound,
    },
    range::{find_all, find_all_indices, find_boundaries, find_leftmost, find_rightmost},
    recursive::contains_recursive,
};

/// Binary searches as methods on anything viewable as a slice.
///
/// If the slice is not sorted by `key`, the results are unspecified and
/// meaningless.
pub trait SortedSearch<T> {
    /// The elements, sorted by the key of each call
    #[must_use]
    fn sorted_slice(&self) -> &[T];

    /// Refer to [`find_index`]
    fn find_index_by<E>(&self, value: &E::Key, key: &E) -> Option<usize>
    where
        E: KeyExtractor<T> + ?Sized,
    {
        find_index(self.sorted_slice(), value, key)
    }
    /// Refer to [`find_leftmost_index`]
    fn find_leftmost_index_by<E>(&self, value: &E::Key, key: &E) -> Option<usize>
    where
        E: KeyExtractor<T> + ?Sized,
    {
        find_leftmost_index(self.sorted_slice(), value, key)
    }
    /// Refer to [`find_rightmost_index`]
    fn find_rightmost_index_by<E>(&self, value: &E::Key, key: &E) -> Option<usize>
    where
        E: KeyExtractor<T> + ?Sized,
    {
        find_rightmost_index(self.sorted_slice(), value, key)
    }
    /// Refer to [`find_all_indices`]
    fn find_all_indices_by<E>(&self, value: &E::Key, key: &E) -> Range<usize>
    where
        E: KeyExtractor<T> + ?Sized,
    {
        find_all_indices(self.sorted_slice(), value, key)
    }
    /// Refer to [`find_all`]
    fn find_all_by<E>(&self, value: &E::Key, key: &E) -> &[T]
    where
        E: KeyExtractor<T> + ?Sized,
    {
        find_all(self.sorted_slice(), value, key)
    }
}
impl<T> SortedSearch<T> for [T] {
    fn sorted_slice(&self) -> &[T] {
        self
    }
}
impl<T, const N: usize> SortedSearch<T> for [T; N] {
    fn sorted_slice(&self) -> &[T] {
        self
    }
}
impl<T> SortedSearch<T> for Vec<T> {
    fn sorted_slice(&self) -> &[T] {
        self
    }
}
