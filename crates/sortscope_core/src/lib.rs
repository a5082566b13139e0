//! SORTSCOPE Core Types
//!
//! This crate contains pure types and logic with no I/O.
//! Everything the trace generators and the playback controller share lives
//! here: the algorithm catalogue, the step record, highlight vocabulary,
//! playback configuration and the error taxonomy.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod status;
pub mod step;
pub mod time;

// Re-exports
pub use algorithm::{Algorithm, Complexity, SizeBounds, MIN_TRACE_LEN, VALUE_MAX, VALUE_MIN};
pub use config::{clamp_speed, delay_for_speed, PlaybackConfig, DELAY_CEILING_MS, MAX_SPEED, MIN_SPEED};
pub use error::{SortError, SortResult};
pub use status::PlaybackStatus;
pub use step::{Counters, Highlight, Step, StepKind};
pub use time::LogicalTime;
