//! Random noise added to move scores.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the jitter term.
pub const JITTER_RANGE: f64 = 10.0;

/// Source of the per-move random term in `[0, JITTER_RANGE)`.
///
/// Injected into the selector so tests can pin it down.
pub trait JitterSource {
    fn jitter(&mut self) -> f64;
}

/// Uniform jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        RandomJitter { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomJitter::new(StdRng::seed_from_u64(seed))
    }

    /// Jitter seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        RandomJitter::new(StdRng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..JITTER_RANGE)
    }
}

/// Always returns the same value. Deterministic tests use `FixedJitter(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&mut self) -> f64 {
        self.0
    }
}

/// Replays a scripted sequence of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedJitter {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedJitter { values, next: 0 }
    }
}

impl JitterSource for ScriptedJitter {
    fn jitter(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn jitter(&mut self) -> f64 {
        (**self).jitter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_in_range() {
        let mut jitter = RandomJitter::seeded(7);
        for _ in 0..1000 {
            let value = jitter.jitter();
            assert!((0.0..JITTER_RANGE).contains(&value));
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.jitter(), b.jitter());
        }
    }

    #[test]
    fn test_scripted_jitter_cycles() {
        let mut jitter = ScriptedJitter::new(vec![1.0, 2.0]);
        assert_eq!(jitter.jitter(), 1.0);
        assert_eq!(jitter.jitter(), 2.0);
        assert_eq!(jitter.jitter(), 1.0);
        assert_eq!(ScriptedJitter::new(Vec::new()).jitter(), 0.0);
    }
}
