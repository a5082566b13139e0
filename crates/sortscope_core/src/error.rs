//! Core error types for SORTSCOPE.

use crate::algorithm::Algorithm;
use crate::status::PlaybackStatus;

/// Core result type
pub type SortResult<T> = Result<T, SortError>;

/// Core error type
///
/// Every variant is deterministic and caller-correctable: nothing here is
/// retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Input length outside what the algorithm accepts
    #[error("Invalid input for {algorithm}: size {size} outside {min}..={max}")]
    InvalidInput {
        /// Algorithm the input was meant for
        algorithm: Algorithm,
        /// Requested length
        size: usize,
        /// Smallest accepted length
        min: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Control invoked in a state that forbids it
    #[error("Invalid transition: cannot {action} while {status}")]
    InvalidTransition {
        /// The rejected action
        action: &'static str,
        /// Status at the time of the call
        status: PlaybackStatus,
    },

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SortError {
    /// Build an `InvalidInput` error for the given algorithm and bounds
    #[must_use]
    pub fn invalid_input(algorithm: Algorithm, size: usize, min: usize, max: usize) -> Self {
        Self::InvalidInput {
            algorithm,
            size,
            min,
            max,
        }
    }

    /// Whether the error is a rejected transition
    #[must_use]
    pub const fn is_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
