//! Playback configuration.
//!
//! Size and speed come from the presentation layer. Size is validated per
//! algorithm; speed is clamped, never rejected.

use crate::algorithm::Algorithm;
use crate::error::{SortError, SortResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Slowest speed setting
pub const MIN_SPEED: u32 = 1;

/// Fastest speed setting
pub const MAX_SPEED: u32 = 1000;

/// Per-tick delay is this many milliseconds minus the speed
pub const DELAY_CEILING_MS: u64 = 1100;

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Algorithm to trace
    pub algorithm: Algorithm,
    /// Problem size
    pub size: usize,
    /// Speed setting, higher is faster
    pub speed: u32,
    /// Seed for input generation (random when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Partially specified configuration document
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    algorithm: Option<Algorithm>,
    size: Option<usize>,
    speed: Option<u32>,
    seed: Option<u64>,
}

impl PlaybackConfig {
    /// Defaults for an algorithm
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            size: algorithm.default_size(),
            speed: algorithm.default_speed(),
            seed: None,
        }
    }

    /// Set problem size
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set speed (clamped into range)
    #[must_use]
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = clamp_speed(speed);
        self
    }

    /// Set input seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the size against the algorithm's bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the size is out of bounds
    pub fn validate(&self) -> SortResult<()> {
        let bounds = self.algorithm.size_bounds();
        if bounds.contains(self.size) {
            Ok(())
        } else {
            Err(SortError::invalid_input(
                self.algorithm,
                self.size,
                bounds.min,
                bounds.max,
            ))
        }
    }

    /// Delay between ticks
    #[must_use]
    pub fn delay(&self) -> Duration {
        delay_for_speed(self.speed)
    }

    /// Parse a JSON document; missing fields take the algorithm's defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed JSON or unknown fields
    pub fn from_json(json: &str) -> SortResult<Self> {
        let doc: ConfigDocument = serde_json::from_str(json)?;
        let mut config = Self::new(doc.algorithm.unwrap_or(Algorithm::Bubble));
        if let Some(size) = doc.size {
            config.size = size;
        }
        if let Some(speed) = doc.speed {
            config = config.with_speed(speed);
        }
        config.seed = doc.seed;
        Ok(config)
    }

    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::new(Algorithm::Bubble)
    }
}

/// Clamp a speed into `MIN_SPEED..=MAX_SPEED`
#[must_use]
pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Tick delay for a speed setting
#[must_use]
pub fn delay_for_speed(speed: u32) -> Duration {
    Duration::from_millis(DELAY_CEILING_MS - u64::from(clamp_speed(speed)))
}
