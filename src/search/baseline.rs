//! Comparison points for the binary searches. Neither needs a sorted slice.

use rand::{Rng, seq::IndexedRandom};
use tracing::debug;

use crate::search::SearchError;

/// Draws allowed per element by [`random_search_default`]
pub const ATTEMPTS_PER_ELEMENT: usize = 64;
/// Lower limit on the draws allowed by [`random_search_default`]
pub const MIN_ATTEMPTS: usize = 1024;

/// Returns the index of the first element equal to `value`.
#[must_use]
pub fn linear_search<T: PartialEq>(sequence: &[T], value: &T) -> Option<usize> {
    sequence.iter().position(|element| element == value)
}

/// Draws uniformly random elements until one equals `value`.
///
/// Gives up with [`SearchError::AttemptsExhausted`] after `max_attempts`
/// draws, which is the only way out if `value` is absent.
pub fn random_search<'a, T, R>(
    sequence: &'a [T],
    value: &T,
    rng: &mut R,
    max_attempts: usize,
) -> Result<&'a T, SearchError>
where
    T: PartialEq,
    R: Rng + ?Sized,
{
    for _ in 0..max_attempts {
        let element = sequence.choose(rng).ok_or(SearchError::EmptySequence)?;
        if element == value {
            return Ok(element);
        }
    }
    if sequence.is_empty() {
        return Err(SearchError::EmptySequence);
    }
    debug!(
        len = sequence.len(),
        attempts = max_attempts,
        "random search gave up"
    );
    Err(SearchError::AttemptsExhausted {
        attempts: max_attempts,
    })
}

/// [`random_search`] on the thread-local generator with a draw limit scaled to
/// the length of the slice.
pub fn random_search_default<'a, T: PartialEq>(
    sequence: &'a [T],
    value: &T,
) -> Result<&'a T, SearchError> {
    let max_attempts = sequence
        .len()
        .saturating_mul(ATTEMPTS_PER_ELEMENT)
        .max(MIN_ATTEMPTS);
    random_search(sequence, value, &mut rand::rng(), max_attempts)
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{key::Identity, search::boundary::find_leftmost_index};

    use super::*;

    /// Counts every equality check made against it
    #[derive(Debug)]
    struct Tallied<'a> {
        value: u32,
        checks: &'a Cell<usize>,
    }
    impl PartialEq for Tallied<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.value == other.value
        }
    }

    #[test]
    fn test_linear_search() {
        let s = [4, 1, 9, 1, 3];
        assert_eq!(linear_search(&s, &1), Some(1));
        assert_eq!(linear_search(&s, &4), Some(0));
        assert_eq!(linear_search(&s, &3), Some(4));
        assert_eq!(linear_search(&s, &7), None);
        assert_eq!(linear_search::<u8>(&[], &7), None);
    }

    #[test]
    fn test_random_search() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = [1, 2, 2, 2, 5, 9];
        for v in s {
            assert_eq!(random_search(&s, &v, &mut rng, 10_000), Ok(&v));
        }
        assert_eq!(random_search_default(&s, &9), Ok(&9));
    }

    #[test]
    fn test_random_search_absent() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = [1, 3, 5, 7];
        assert_eq!(
            random_search(&s, &6, &mut rng, 100),
            Err(SearchError::AttemptsExhausted { attempts: 100 })
        );
        assert_eq!(
            random_search_default(&s, &6),
            Err(SearchError::AttemptsExhausted {
                attempts: MIN_ATTEMPTS
            })
        );
        assert_eq!(
            random_search(&s, &1, &mut rng, 0),
            Err(SearchError::AttemptsExhausted { attempts: 0 })
        );
    }

    #[test]
    fn test_random_search_draw_count() {
        let checks = Cell::new(0);
        let s: Vec<_> = [1, 3, 5, 7]
            .into_iter()
            .map(|value| Tallied {
                value,
                checks: &checks,
            })
            .collect();
        let absent = Tallied {
            value: 6,
            checks: &checks,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for max_attempts in [0, 1, 37, 500] {
            checks.set(0);
            assert_eq!(
                random_search(&s, &absent, &mut rng, max_attempts),
                Err(SearchError::AttemptsExhausted {
                    attempts: max_attempts
                })
            );
            assert_eq!(checks.get(), max_attempts);
        }

        checks.set(0);
        let present = Tallied {
            value: 5,
            checks: &checks,
        };
        let found = random_search(&s, &present, &mut rng, 10_000).unwrap();
        assert_eq!(found.value, 5);
        assert!((1..=10_000).contains(&checks.get()));
    }

    #[test]
    fn test_random_search_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let s: [u8; 0] = [];
        assert_eq!(
            random_search(&s, &7, &mut rng, 100),
            Err(SearchError::EmptySequence)
        );
        assert_eq!(
            random_search(&s, &7, &mut rng, 0),
            Err(SearchError::EmptySequence)
        );
    }

    proptest! {
        #[test]
        fn test_linear_matches_leftmost(mut s in prop::collection::vec(0..8_u8, 0..64), v in 0..8_u8) {
            s.sort_unstable();
            prop_assert_eq!(linear_search(&s, &v), find_leftmost_index(&s, &v, &Identity));
        }
    }
}
