use num_traits::PrimInt;
use rand::{Rng, distr::uniform::SampleUniform, seq::IndexedRandom};

/// `len` integers drawn uniformly from `[0, max]`, sorted ascending.
///
/// # Panics
///
/// If `max` is negative
#[must_use]
pub fn sorted_random<N, R>(len: usize, max: N, rng: &mut R) -> Vec<N>
where
    N: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    let mut values: Vec<N> = (0..len).map(|_| rng.random_range(N::zero()..=max)).collect();
    values.sort_unstable();
    values
}

/// A uniformly random element of `sequence`.
#[must_use]
pub fn pick<'a, T, R>(sequence: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    sequence.choose(rng)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_sorted_random() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = sorted_random(1000, 50_u16, &mut rng);
        assert_eq!(values.len(), 1000);
        assert!(values.is_sorted());
        assert!(values.iter().all(|v| *v <= 50));
        // 1000 draws over 51 values leave duplicates
        assert!(values.windows(2).any(|w| w[0] == w[1]));

        assert!(sorted_random(0, 10_u8, &mut rng).is_empty());
        assert_eq!(sorted_random(3, 0_i64, &mut rng), [0, 0, 0]);
    }

    #[test]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = [3, 1, 4];
        for _ in 0..32 {
            let v = pick(&values, &mut rng).unwrap();
            assert!(values.contains(v));
        }
        assert_eq!(pick::<u8, _>(&[], &mut rng), None);
    }
}
