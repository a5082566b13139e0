//! SORTSCOPE Deterministic Simulation
//!
//! Seeded generation of problem instances and a harness that checks every
//! generated trace against the properties a replay depends on. All runs are
//! reproducible from a seed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod harness;
pub mod input;
pub mod seed;

pub use harness::{Harness, HarnessConfig, VerifyReport, Violation};
pub use input::{InputGenerator, InputShape};
pub use seed::{SimSeed, DEFAULT_SEED};
