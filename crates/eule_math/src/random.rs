//! Injectable random number generator
//!
//! Each [`Random`] owns its generator state. Seed it for reproducible
//! sequences (tests, replays) or draw the seed from OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random number source
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator: equal seeds yield equal sequences
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded if `seed` is set, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::debug!("Random generator seeded with {}", seed);
                Self::from_seed(seed)
            }
            None => Self::from_entropy(),
        }
    }

    /// Uniform real in `[0, 1]`, both ends inclusive
    pub fn random_float(&mut self) -> f64 {
        self.rng.gen_range(0.0..=1.0)
    }

    /// Any `u32`
    pub fn random_uint(&mut self) -> u32 {
        self.rng.gen()
    }

    /// Any `i32`
    pub fn random_int(&mut self) -> i32 {
        self.rng.gen()
    }

    /// Real in `[min, max]`. The bounds may come in either order.
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.random_float() * (max - min)
    }

    /// Integer in `[min, max]`, both inclusive, bounds in either order
    pub fn random_int_range(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// True with probability `chance`; `chance >= 1` is always true
    pub fn random_chance(&mut self, chance: f64) -> bool {
        self.random_float() <= chance
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = Random::from_seed(1234);
        let mut b = Random::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.random_int(), b.random_int());
            assert_eq!(a.random_float(), b.random_float());
        }
    }

    #[test]
    fn test_random_float_in_unit_interval() {
        let mut rng = Random::from_seed(7);
        for _ in 0..1000 {
            let f = rng.random_float();
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn test_random_float_is_spread_out() {
        let mut rng = Random::from_seed(42);
        let mean: f64 = (0..10_000).map(|_| rng.random_float()).sum::<f64>() / 10_000.0;
        assert!((mean - 0.5).abs() < 0.05, "mean {}", mean);
    }

    #[test]
    fn test_int_range_inclusive_and_swapped() {
        let mut rng = Random::from_seed(3);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = rng.random_int_range(2, -2);
            assert!((-2..=2).contains(&v));
            seen[(v + 2) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));

        assert_eq!(rng.random_int_range(5, 5), 5);
    }

    #[test]
    fn test_real_range() {
        let mut rng = Random::from_seed(9);
        for _ in 0..1000 {
            let v = rng.random_range(-3.0, 3.0);
            assert!((-3.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = Random::from_seed(11);
        assert!((0..100).all(|_| rng.random_chance(1.0)));
        assert!((0..100).all(|_| !rng.random_chance(-0.1)));
    }
}
