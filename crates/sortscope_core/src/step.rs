//! Step records and highlight vocabulary.
//!
//! A step is one replayable event: what happened, which indices it touched,
//! the full sequence afterwards and the running counters. Steps are produced
//! once by a generator and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Two elements compared
    Compare,
    /// Two elements exchanged
    Swap,
    /// Selection pass begins
    PassStart,
    /// Selection found a strictly smaller candidate
    NewMinimum,
    /// Insertion picked the next element
    Pick,
    /// Insertion moved an element one slot right
    Shift,
    /// Insertion dropped the picked element into place
    Insert,
    /// Merge split a range
    Divide,
    /// Merge begins combining two runs
    MergeStart,
    /// Merge wrote one element into the output range
    Overwrite,
    /// Merge finished combining a range
    MergeComplete,
    /// Heap sink begins at a node
    HeapifyStart,
    /// Heap build phase finished
    HeapBuilt,
    /// Heap root moved behind the unsorted region
    Extract,
    /// Quick sort chose its pivot
    PivotSelected,
    /// One more position holds its final value
    BoundaryReached,
    /// Trace finished
    Complete,
}

impl StepKind {
    /// Kebab-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::PassStart => "pass-start",
            Self::NewMinimum => "new-minimum",
            Self::Pick => "pick",
            Self::Shift => "shift",
            Self::Insert => "insert",
            Self::Divide => "divide",
            Self::MergeStart => "merge-start",
            Self::Overwrite => "overwrite",
            Self::MergeComplete => "merge-complete",
            Self::HeapifyStart => "heapify-start",
            Self::HeapBuilt => "heap-built",
            Self::Extract => "extract",
            Self::PivotSelected => "pivot-selected",
            Self::BoundaryReached => "boundary-reached",
            Self::Complete => "complete",
        }
    }

    /// Highlight set this kind paints its indices into
    #[must_use]
    pub const fn highlight(&self) -> Option<Highlight> {
        match self {
            Self::Compare => Some(Highlight::Comparing),
            Self::Swap => Some(Highlight::Swapping),
            Self::NewMinimum => Some(Highlight::CurrentMinimum),
            Self::Pick => Some(Highlight::Current),
            Self::Shift => Some(Highlight::Shifting),
            Self::Insert => Some(Highlight::Inserting),
            Self::Divide => Some(Highlight::Dividing),
            Self::MergeStart | Self::Overwrite => Some(Highlight::Merging),
            Self::HeapifyStart => Some(Highlight::Heapifying),
            Self::Extract => Some(Highlight::Extracting),
            Self::PivotSelected => Some(Highlight::Pivot),
            Self::BoundaryReached | Self::MergeComplete | Self::Complete => {
                Some(Highlight::Sorted)
            }
            Self::PassStart | Self::HeapBuilt => None,
        }
    }

    /// Whether the step's indices accumulate into the sorted set
    #[must_use]
    pub const fn accumulates(&self) -> bool {
        matches!(
            self,
            Self::BoundaryReached | Self::MergeComplete | Self::Complete
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named highlight sets exposed to presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    /// Finalized positions (accumulates)
    Sorted,
    /// Elements being compared
    Comparing,
    /// Elements being exchanged
    Swapping,
    /// Element being shifted right
    Shifting,
    /// Quick sort pivot
    Pivot,
    /// Heap node being sunk
    Heapifying,
    /// Heap root being extracted
    Extracting,
    /// Merge range being split
    Dividing,
    /// Merge range being combined
    Merging,
    /// Insertion landing slot
    Inserting,
    /// Insertion element in hand
    Current,
    /// Selection running minimum
    CurrentMinimum,
}

impl Highlight {
    /// Kebab-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Shifting => "shifting",
            Self::Pivot => "pivot",
            Self::Heapifying => "heapifying",
            Self::Extracting => "extracting",
            Self::Dividing => "dividing",
            Self::Merging => "merging",
            Self::Inserting => "inserting",
            Self::Current => "current",
            Self::CurrentMinimum => "current-minimum",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running totals as of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Counters {
    /// Comparisons performed so far
    pub comparisons: u64,
    /// Swaps, shifts or writes performed so far
    pub mutations: u64,
}

impl Counters {
    /// Zeroed counters
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            comparisons: 0,
            mutations: 0,
        }
    }

    /// Whether neither counter is below `earlier`
    #[must_use]
    pub const fn dominates(&self, earlier: &Counters) -> bool {
        self.comparisons >= earlier.comparisons && self.mutations >= earlier.mutations
    }
}

/// One atomic, replayable event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<V = u32> {
    /// What happened
    pub kind: StepKind,
    /// Full sequence after this step's effect
    pub snapshot: Vec<V>,
    /// Indices the step is about
    pub highlight: Vec<usize>,
    /// Marker carried across a run of steps (pivot, running minimum, picked element)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<usize>,
    /// Totals as of this step
    pub counters: Counters,
}

impl<V> Step<V> {
    /// Number of elements in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
