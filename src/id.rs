//! Identifier generation.
//!
//! Records get identifiers of the form `<prefix><number>`. The number comes
//! from an [`IdGenerator`]; the [`Directory`](crate::Directory) owns one and
//! retries until the identifier is free in the target collection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of generated suffixes (same range as a C `rand()`).
pub const MAX_SUFFIX: u64 = i32::MAX as u64;

/// Source of numeric identifier suffixes.
pub trait IdGenerator {
    fn next_suffix(&mut self) -> u64;
}

/// Pseudo-random suffixes in `0..=MAX_SUFFIX`.
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_suffix(&mut self) -> u64 {
        self.rng.random_range(0..=MAX_SUFFIX)
    }
}

/// Counts up from 1. Handy when identifiers need to be predictable.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_suffix(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}
