//! Immutable traces and a forward cursor over them.

use sortscope_core::{Algorithm, Counters, Step, StepKind};
use serde::Serialize;

/// Complete, ordered step sequence for one input
///
/// Fields are private: once built a trace is only read, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace<V = u32> {
    algorithm: Algorithm,
    input: Vec<V>,
    steps: Vec<Step<V>>,
}

impl<V> Trace<V> {
    pub(crate) fn new(algorithm: Algorithm, input: Vec<V>, steps: Vec<Step<V>>) -> Self {
        Self {
            algorithm,
            input,
            steps,
        }
    }

    /// Algorithm that produced the trace
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Input the trace was generated from
    #[must_use]
    pub fn input(&self) -> &[V] {
        &self.input
    }

    /// All steps in order
    #[must_use]
    pub fn steps(&self) -> &[Step<V>] {
        &self.steps
    }

    /// Step at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<V>> {
        self.steps.get(index)
    }

    /// Number of steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Final step
    #[must_use]
    pub fn last(&self) -> Option<&Step<V>> {
        self.steps.last()
    }

    /// Values after the final step
    #[must_use]
    pub fn final_values(&self) -> &[V] {
        self.last().map_or(&self.input, |step| step.snapshot.as_slice())
    }

    /// Counter totals at the end of the trace
    #[must_use]
    pub fn totals(&self) -> Counters {
        self.last().map_or(Counters::zero(), |step| step.counters)
    }

    /// Number of steps of a given kind
    #[must_use]
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// Cursor from the first step
    #[must_use]
    pub fn reader(&self) -> TraceReader<'_, V> {
        TraceReader::new(self)
    }
}

impl<V: Serialize> Trace<V> {
    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serialize to indented JSON
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Forward-only cursor over a trace
pub struct TraceReader<'a, V = u32> {
    trace: &'a Trace<V>,
    position: usize,
}

impl<'a, V> TraceReader<'a, V> {
    /// Create a reader at the first step
    #[must_use]
    pub fn new(trace: &'a Trace<V>) -> Self {
        Self { trace, position: 0 }
    }

    /// Read the next step
    pub fn next_step(&mut self) -> Option<&'a Step<V>> {
        let step = self.trace.get(self.position)?;
        self.position += 1;
        Some(step)
    }

    /// Peek at the next step without consuming it
    #[must_use]
    pub fn peek_step(&self) -> Option<&'a Step<V>> {
        self.trace.get(self.position)
    }

    /// Check if there are more steps
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.position < self.trace.len()
    }

    /// Get remaining step count
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.position
    }

    /// Get current position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get total step count
    #[must_use]
    pub fn total(&self) -> usize {
        self.trace.len()
    }

    /// Reset to beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a, V> Iterator for TraceReader<'a, V> {
    type Item = &'a Step<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for TraceReader<'_, V> {}
