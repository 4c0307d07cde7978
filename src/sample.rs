//! Synthetic input for the demo and the benchmarks.
//!
//! Produces uniformly distributed values over the whole 1..=50 domain.

use crate::core::types::{Value, MAX_VALUE, MIN_VALUE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `len` uniform values in 1..=50 from the given generator.
pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Value> {
    (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

/// Reproducible variant of `generate`.
pub fn generate_seeded(len: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(len, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::in_domain;

    #[test]
    fn values_stay_in_domain() {
        let sample = generate_seeded(10_000, 7);
        assert_eq!(sample.len(), 10_000);
        assert!(sample.iter().all(|&v| in_domain(v)));
    }

    #[test]
    fn same_seed_same_sample() {
        assert_eq!(generate_seeded(500, 42), generate_seeded(500, 42));
    }

    #[test]
    fn large_sample_hits_both_bounds() {
        let sample = generate_seeded(20_000, 1);
        assert!(sample.contains(&MIN_VALUE));
        assert!(sample.contains(&MAX_VALUE));
    }
}
