use core::cmp::Ordering;

/// Maps an element to the key it is ordered by.
///
/// The ordering of the keys must agree with the order the searched slice is
/// sorted in. This is never checked; a mismatch makes the search results
/// unspecified and meaningless.
///
/// Implemented by [`Identity`] and by every `Fn(&T) -> K` where `K: Ord`.
pub trait KeyExtractor<T> {
    type Key: Ord;

    /// Compares the key of `element` against `value`.
    #[must_use]
    fn compare(&self, element: &T, value: &Self::Key) -> Ordering;
}

/// The element is its own key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;
impl<T: Ord> KeyExtractor<T> for Identity {
    type Key = T;
    fn compare(&self, element: &T, value: &T) -> Ordering {
        element.cmp(value)
    }
}

impl<T, K, F> KeyExtractor<T> for F
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Key = K;
    fn compare(&self, element: &T, value: &K) -> Ordering {
        self(element).cmp(value)
    }
}
