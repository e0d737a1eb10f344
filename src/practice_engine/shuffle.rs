use rand::Rng;

/// Uniform in-place permutation of `items` (Fisher-Yates).
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(rng, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values: Vec<u32> = (1..=12).collect();
        shuffle(&mut rng, &mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled(&mut rng, &(1..=12).collect::<Vec<_>>())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u32; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut one = [7u32];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, [7]);
    }
}
