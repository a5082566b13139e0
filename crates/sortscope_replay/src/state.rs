//! Playback state rebuilt step by step.

use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, Counters, Highlight, PlaybackStatus, Step, StepKind};
use std::collections::{BTreeMap, BTreeSet};

/// Everything presentation needs, owned by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Playback status
    pub status: PlaybackStatus,
    /// Index of the next step to apply
    pub cursor: usize,
    /// Sequence as of the last applied step
    pub values: Vec<u32>,
    /// Counters as of the last applied step
    pub counters: Counters,
    /// Positions known to hold their final value
    pub sorted: BTreeSet<usize>,
    /// Highlights of the last applied step only
    pub transient: BTreeMap<Highlight, BTreeSet<usize>>,
}

impl PlaybackState {
    /// Fresh state showing the unsorted input
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            cursor: 0,
            values: input.to_vec(),
            counters: Counters::zero(),
            sorted: BTreeSet::new(),
            transient: BTreeMap::new(),
        }
    }

    /// Apply one step and move the cursor past it
    pub fn apply(&mut self, step: &Step, algorithm: Algorithm) {
        self.values.clone_from(&step.snapshot);
        self.counters = step.counters;
        self.transient.clear();

        if step.kind == StepKind::Complete {
            self.sorted = (0..self.values.len()).collect();
        } else if step.kind.accumulates() {
            self.sorted.extend(step.highlight.iter().copied());
        } else if let Some(highlight) = step.kind.highlight() {
            self.transient
                .entry(highlight)
                .or_default()
                .extend(step.highlight.iter().copied());
        }

        if let (Some(index), Some(highlight)) = (step.focus, algorithm.focus_highlight()) {
            self.transient.entry(highlight).or_default().insert(index);
        }

        self.cursor += 1;
    }

    /// All highlight sets, `sorted` included, as ordered index lists
    #[must_use]
    pub fn highlights(&self) -> BTreeMap<Highlight, Vec<usize>> {
        let mut sets: BTreeMap<Highlight, Vec<usize>> = self
            .transient
            .iter()
            .filter(|(_, indices)| !indices.is_empty())
            .map(|(highlight, indices)| (*highlight, indices.iter().copied().collect()))
            .collect();
        if !self.sorted.is_empty() {
            sets.insert(Highlight::Sorted, self.sorted.iter().copied().collect());
        }
        sets
    }

    /// Whether `index` is in the given set
    #[must_use]
    pub fn contains(&self, highlight: Highlight, index: usize) -> bool {
        if highlight == Highlight::Sorted {
            self.sorted.contains(&index)
        } else {
            self.transient
                .get(&highlight)
                .is_some_and(|indices| indices.contains(&index))
        }
    }
}
