//! Problem instance generation.

use crate::seed::SimSeed;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sortscope_core::{VALUE_MAX, VALUE_MIN};

/// Layout of a generated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputShape {
    /// Uniform values in the display range
    Random,
    /// Ascending
    Sorted,
    /// Descending
    Reversed,
    /// Drawn from a handful of values, so ties are common
    FewUnique,
}

impl InputShape {
    /// Every shape
    pub const ALL: [InputShape; 4] = [
        InputShape::Random,
        InputShape::Sorted,
        InputShape::Reversed,
        InputShape::FewUnique,
    ];
}

/// Seeded source of sequences
///
/// Successive calls draw fresh sequences from the same stream, so a seeded
/// generator yields the same series of problem instances every run.
#[derive(Debug, Clone)]
pub struct InputGenerator {
    rng: ChaCha8Rng,
}

impl InputGenerator {
    /// Create from a seed
    #[must_use]
    pub fn new(seed: &SimSeed) -> Self {
        Self { rng: seed.rng() }
    }

    /// Uniformly random sequence of `len` values in `VALUE_MIN..=VALUE_MAX`
    pub fn random(&mut self, len: usize) -> Vec<u32> {
        (0..len)
            .map(|_| self.rng.gen_range(VALUE_MIN..=VALUE_MAX))
            .collect()
    }

    /// Sequence of the given shape
    pub fn shaped(&mut self, shape: InputShape, len: usize) -> Vec<u32> {
        match shape {
            InputShape::Random => self.random(len),
            InputShape::Sorted => {
                let mut values = self.random(len);
                values.sort_unstable();
                values
            }
            InputShape::Reversed => {
                let mut values = self.random(len);
                values.sort_unstable_by(|a, b| b.cmp(a));
                values
            }
            InputShape::FewUnique => {
                let pool = self.random(4);
                (0..len)
                    .map(|_| pool[self.rng.gen_range(0..pool.len())])
                    .collect()
            }
        }
    }
}

impl Default for InputGenerator {
    fn default() -> Self {
        Self::new(&SimSeed::default())
    }
}
