//! Verification harness for generated traces.
//!
//! Runs every generator over seeded inputs of every accepted size and checks
//! the properties playback relies on: constant snapshot length, in-range
//! highlights, monotone counters, a closing `complete` step, a sorted
//! permutation at the end, determinism, and stability where promised.

use crate::input::{InputGenerator, InputShape};
use crate::seed::SimSeed;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, Counters, StepKind};
use sortscope_trace::{generate, generate_with, tie_order_kept, Tagged, Trace};
use tracing::{debug, warn};

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Seed for input generation
    pub seed: SimSeed,
    /// Inputs per (size, shape) pair
    pub runs_per_size: usize,
    /// Input shapes to exercise
    pub shapes: Vec<InputShape>,
}

impl HarnessConfig {
    /// Create a new harness config
    #[must_use]
    pub fn new(seed: SimSeed) -> Self {
        Self {
            seed,
            runs_per_size: 3,
            shapes: InputShape::ALL.to_vec(),
        }
    }

    /// Set inputs per (size, shape) pair
    #[must_use]
    pub fn with_runs_per_size(mut self, runs: usize) -> Self {
        self.runs_per_size = runs;
        self
    }

    /// Restrict the shapes exercised
    #[must_use]
    pub fn with_shapes(mut self, shapes: Vec<InputShape>) -> Self {
        self.shapes = shapes;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(SimSeed::default())
    }
}

/// A broken trace property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    /// Generator refused an input inside its bounds
    #[error("generation rejected valid input: {reason}")]
    Rejected {
        /// Error text
        reason: String,
    },

    /// Trace has no steps
    #[error("trace is empty")]
    Empty,

    /// A snapshot changed length
    #[error("step {step}: snapshot length {actual}, expected {expected}")]
    LengthDrift {
        /// Step index
        step: usize,
        /// Input length
        expected: usize,
        /// Snapshot length
        actual: usize,
    },

    /// A highlight points past the end of the sequence
    #[error("step {step}: highlight index {index} out of range")]
    HighlightOutOfRange {
        /// Step index
        step: usize,
        /// Offending index
        index: usize,
    },

    /// A counter decreased
    #[error("step {step}: counters went backwards")]
    CountersDecreased {
        /// Step index
        step: usize,
    },

    /// Last step is not `complete`
    #[error("trace does not end with a complete step")]
    MissingComplete,

    /// Final snapshot out of order
    #[error("final snapshot is not sorted")]
    Unsorted,

    /// Final snapshot lost or gained values
    #[error("final snapshot is not a permutation of the input")]
    NotPermutation,

    /// Same input, different trace
    #[error("regenerating the same input produced a different trace")]
    NonDeterministic,

    /// A stable algorithm reordered equal values
    #[error("equal values changed relative order")]
    Unstable,
}

/// A violation together with the input that exposed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Input shape
    pub shape: InputShape,
    /// Offending input
    pub input: Vec<u32>,
    /// What broke
    pub violation: Violation,
}

/// Outcome of verifying one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Algorithm verified
    pub algorithm: Algorithm,
    /// Traces generated and checked
    pub traces_checked: usize,
    /// Steps walked across all traces
    pub steps_checked: usize,
    /// Everything that failed
    pub findings: Vec<Finding>,
}

impl VerifyReport {
    /// Create an empty report
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            traces_checked: 0,
            steps_checked: 0,
            findings: Vec::new(),
        }
    }

    /// Whether every check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Get summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {}: {} traces, {} steps, {} violations",
            self.algorithm.display_name(),
            if self.passed() { "PASSED" } else { "FAILED" },
            self.traces_checked,
            self.steps_checked,
            self.findings.len()
        )
    }
}

/// Verification harness
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create a new harness
    #[must_use]
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Check the structural properties of one trace
    #[must_use]
    pub fn check_trace(trace: &Trace) -> Vec<Violation> {
        let mut violations = Vec::new();
        let expected = trace.input().len();
        let mut previous = Counters::zero();

        for (index, step) in trace.reader().enumerate() {
            if step.snapshot.len() != expected {
                violations.push(Violation::LengthDrift {
                    step: index,
                    expected,
                    actual: step.snapshot.len(),
                });
            }
            if let Some(&bad) = step.highlight.iter().find(|&&i| i >= expected) {
                violations.push(Violation::HighlightOutOfRange {
                    step: index,
                    index: bad,
                });
            }
            if !step.counters.dominates(&previous) {
                violations.push(Violation::CountersDecreased { step: index });
            }
            previous = step.counters;
        }

        let Some(last) = trace.last() else {
            violations.push(Violation::Empty);
            return violations;
        };
        if last.kind != StepKind::Complete {
            violations.push(Violation::MissingComplete);
        }
        if !last.snapshot.windows(2).all(|w| w[0] <= w[1]) {
            violations.push(Violation::Unsorted);
        }
        let mut input_sorted = trace.input().to_vec();
        input_sorted.sort_unstable();
        let mut output_sorted = last.snapshot.clone();
        output_sorted.sort_unstable();
        if input_sorted != output_sorted {
            violations.push(Violation::NotPermutation);
        }

        violations
    }

    /// Check that equal values keep their input order
    ///
    /// Returns `None` when the order is kept or the input is rejected.
    #[must_use]
    pub fn check_stability(algorithm: Algorithm, input: &[u32]) -> Option<Violation> {
        let trace = generate_with(algorithm, &Tagged::tag_keys(input)).ok()?;
        let reordered = !tie_order_kept(trace.final_values());
        reordered.then_some(Violation::Unstable)
    }

    /// Generate a trace for one input and check everything
    #[must_use]
    pub fn verify_input(algorithm: Algorithm, input: &[u32]) -> (usize, Vec<Violation>) {
        let trace = match generate(algorithm, input) {
            Ok(trace) => trace,
            Err(err) => {
                return (
                    0,
                    vec![Violation::Rejected {
                        reason: err.to_string(),
                    }],
                );
            }
        };

        let mut violations = Self::check_trace(&trace);
        match generate(algorithm, input) {
            Ok(again) if again == trace => {}
            _ => violations.push(Violation::NonDeterministic),
        }
        if algorithm.is_stable() {
            violations.extend(Self::check_stability(algorithm, input));
        }
        (trace.len(), violations)
    }

    /// Number of traces `run` will generate for an algorithm
    #[must_use]
    pub fn planned_traces(&self, algorithm: Algorithm) -> usize {
        let bounds = algorithm.trace_bounds();
        (bounds.max - bounds.min + 1) * self.config.shapes.len() * self.config.runs_per_size
    }

    /// Verify one algorithm across its whole size range
    #[must_use]
    pub fn run(&self, algorithm: Algorithm) -> VerifyReport {
        self.run_with_progress(algorithm, |_| {})
    }

    /// Verify one algorithm, calling `on_trace` after every trace
    pub fn run_with_progress<F>(&self, algorithm: Algorithm, mut on_trace: F) -> VerifyReport
    where
        F: FnMut(&VerifyReport),
    {
        let mut report = VerifyReport::new(algorithm);
        let mut inputs = InputGenerator::new(&self.config.seed.derive(algorithm.name()));
        let bounds = algorithm.trace_bounds();

        for size in bounds.min..=bounds.max {
            for &shape in &self.config.shapes {
                for _ in 0..self.config.runs_per_size {
                    let input = inputs.shaped(shape, size);
                    let (steps, violations) = Self::verify_input(algorithm, &input);
                    report.traces_checked += 1;
                    report.steps_checked += steps;
                    for violation in violations {
                        warn!(%algorithm, size, ?shape, %violation, "trace violation");
                        report.findings.push(Finding {
                            shape,
                            input: input.clone(),
                            violation,
                        });
                    }
                    on_trace(&report);
                }
            }
        }

        debug!(
            %algorithm,
            traces = report.traces_checked,
            steps = report.steps_checked,
            violations = report.findings.len(),
            "verification finished"
        );
        report
    }

    /// Verify every algorithm
    #[must_use]
    pub fn run_all(&self) -> IndexMap<Algorithm, VerifyReport> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| (algorithm, self.run(algorithm)))
            .collect()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}
