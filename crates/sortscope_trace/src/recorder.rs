//! Step recorder shared by all generators.
//!
//! The recorder owns the running counters, so a generator can only bump a
//! counter by recording the step that caused it.

use sortscope_core::{Counters, Step, StepKind};

/// Accumulates steps while an algorithm runs
#[derive(Debug, Clone)]
pub struct Recorder<V = u32> {
    steps: Vec<Step<V>>,
    counters: Counters,
}

impl<V: Clone> Recorder<V> {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a recorder with room for `capacity` steps
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
            counters: Counters::zero(),
        }
    }

    /// Record a comparison, bumping the comparison counter first
    pub fn compare(&mut self, data: &[V], highlight: &[usize], focus: Option<usize>) {
        self.counters.comparisons += 1;
        self.push(StepKind::Compare, data, highlight, focus);
    }

    /// Record a swap, shift or write, bumping the mutation counter first
    pub fn mutate(&mut self, kind: StepKind, data: &[V], highlight: &[usize], focus: Option<usize>) {
        self.counters.mutations += 1;
        self.push(kind, data, highlight, focus);
    }

    /// Record a milestone without touching the counters
    pub fn mark(&mut self, kind: StepKind, data: &[V], highlight: &[usize], focus: Option<usize>) {
        self.push(kind, data, highlight, focus);
    }

    /// Record the closing `complete` step covering every index
    pub fn complete(&mut self, data: &[V]) {
        let all: Vec<usize> = (0..data.len()).collect();
        self.push(StepKind::Complete, data, &all, None);
    }

    fn push(&mut self, kind: StepKind, data: &[V], highlight: &[usize], focus: Option<usize>) {
        self.steps.push(Step {
            kind,
            snapshot: data.to_vec(),
            highlight: highlight.to_vec(),
            focus,
            counters: self.counters,
        });
    }

    /// Totals so far
    #[must_use]
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// Steps recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the recorder
    #[must_use]
    pub fn into_steps(self) -> Vec<Step<V>> {
        self.steps
    }
}

impl<V: Clone> Default for Recorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_new() {
        let rec: Recorder = Recorder::new();
        assert!(rec.is_empty());
        assert_eq!(rec.counters(), Counters::zero());
    }

    #[test]
    fn test_compare_counts_before_recording() {
        let mut rec = Recorder::new();
        rec.compare(&[3, 1], &[0, 1], None);
        let steps = rec.into_steps();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].counters.comparisons, 1);
        assert_eq!(steps[0].counters.mutations, 0);
    }

    #[test]
    fn test_mutate_and_mark() {
        let mut rec = Recorder::new();
        rec.mutate(StepKind::Swap, &[1, 3], &[0, 1], Some(1));
        rec.mark(StepKind::BoundaryReached, &[1, 3], &[1], None);
        assert_eq!(rec.counters().mutations, 1);
        let steps = rec.into_steps();
        assert_eq!(steps[0].focus, Some(1));
        assert_eq!(steps[1].counters.mutations, 1);
        assert_eq!(steps[1].highlight, vec![1]);
    }

    #[test]
    fn test_complete_covers_all_indices() {
        let mut rec = Recorder::new();
        rec.complete(&[1, 2, 3, 4]);
        let steps = rec.into_steps();
        assert_eq!(steps[0].kind, StepKind::Complete);
        assert_eq!(steps[0].highlight, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut data = vec![2, 1];
        let mut rec = Recorder::new();
        rec.mark(StepKind::PassStart, &data, &[0], Some(0));
        data.swap(0, 1);
        let steps = rec.into_steps();
        assert_eq!(steps[0].snapshot, vec![2, 1]);
    }
}
