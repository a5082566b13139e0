//! Presentation view of the playback state.

use crate::state::PlaybackState;
use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, Highlight, PlaybackStatus};
use std::collections::BTreeMap;

/// Everything a renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Algorithm being played
    pub algorithm: Algorithm,
    /// Current sequence
    pub values: Vec<u32>,
    /// Named highlight sets, `sorted` included
    pub highlights: BTreeMap<Highlight, Vec<usize>>,
    /// Comparisons so far
    pub comparisons: u64,
    /// Swaps, shifts or writes so far
    pub mutations: u64,
    /// Label of the mutation counter
    pub mutation_label: String,
    /// Completed fraction, `cursor / total_steps`
    pub progress: f64,
    /// Playback status
    pub status: PlaybackStatus,
    /// Steps applied so far
    pub cursor: usize,
    /// Steps in the trace
    pub total_steps: usize,
    /// Speed setting
    pub speed: u32,
}

impl ViewSnapshot {
    /// Build from the controller's state
    #[must_use]
    pub fn capture(state: &PlaybackState, algorithm: Algorithm, total_steps: usize, speed: u32) -> Self {
        let progress = if total_steps == 0 {
            0.0
        } else {
            state.cursor as f64 / total_steps as f64
        };
        Self {
            algorithm,
            values: state.values.clone(),
            highlights: state.highlights(),
            comparisons: state.counters.comparisons,
            mutations: state.counters.mutations,
            mutation_label: algorithm.mutation_label().to_string(),
            progress,
            status: state.status,
            cursor: state.cursor,
            total_steps,
            speed,
        }
    }

    /// Indices in a highlight set
    #[must_use]
    pub fn indices(&self, highlight: Highlight) -> &[usize] {
        self.highlights
            .get(&highlight)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Highlight a renderer should paint `index` with
    ///
    /// Transient sets win over `sorted`; among transient sets the first in
    /// `Highlight` order wins.
    #[must_use]
    pub fn highlight_at(&self, index: usize) -> Option<Highlight> {
        self.highlights
            .iter()
            .filter(|(highlight, _)| **highlight != Highlight::Sorted)
            .find(|(_, indices)| indices.contains(&index))
            .map(|(highlight, _)| *highlight)
            .or_else(|| {
                self.indices(Highlight::Sorted)
                    .contains(&index)
                    .then_some(Highlight::Sorted)
            })
    }

    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
