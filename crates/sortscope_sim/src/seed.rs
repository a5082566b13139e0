//! Seeds for reproducible problem instances.
//!
//! A [`SimSeed`] is either given explicitly or taken from the wall clock when
//! playback runs without `--seed`. Per-algorithm streams come from
//! [`SimSeed::derive`], so adding an algorithm never shifts the inputs the
//! others see.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::Hasher;
use std::time::SystemTime;

/// Seed used when none is configured for verification
pub const DEFAULT_SEED: u64 = 42;

/// Root of a deterministic input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimSeed(u64);

impl SimSeed {
    /// Fixed seed
    #[must_use]
    pub const fn from_literal(seed: u64) -> Self {
        Self(seed)
    }

    /// Seed from the wall clock's nanoseconds
    #[must_use]
    pub fn random() -> Self {
        let nanos = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self(nanos)
    }

    /// Literal seed if given, wall clock otherwise
    #[must_use]
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::from_literal)
    }

    /// Raw value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Independent seed for one named stream, e.g. an algorithm name
    #[must_use]
    pub fn derive(self, context: &str) -> Self {
        let mut hasher = fnv::FnvHasher::default();
        hasher.write_u64(self.0);
        hasher.write(context.as_bytes());
        Self(hasher.finish())
    }

    /// Fresh generator positioned at the start of this seed's stream
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for SimSeed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}
