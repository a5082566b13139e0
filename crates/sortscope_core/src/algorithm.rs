//! Algorithm catalogue.
//!
//! Each sorting algorithm carries its own visual limits (how many bars fit
//! on screen), playback defaults, the name of its mutation counter and the
//! complexity facts shown next to the animation.

use crate::error::SortError;
use crate::step::Highlight;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest input any generator accepts
pub const MIN_TRACE_LEN: usize = 2;

/// Smallest value produced by input generation
pub const VALUE_MIN: u32 = 10;

/// Largest value produced by input generation
pub const VALUE_MAX: u32 = 309;

/// Supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Adjacent-swap passes
    Bubble,
    /// Repeated minimum selection
    Selection,
    /// Leftward shifting into a sorted prefix
    Insertion,
    /// Top-down recursive merge
    Merge,
    /// In-place max-heap
    Heap,
    /// Lomuto-partition quicksort
    Quick,
}

/// Inclusive size range for an algorithm's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeBounds {
    /// Smallest accepted size
    pub min: usize,
    /// Largest accepted size
    pub max: usize,
}

impl SizeBounds {
    /// Create new bounds
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check whether a size falls within the bounds
    #[must_use]
    pub const fn contains(&self, size: usize) -> bool {
        size >= self.min && size <= self.max
    }

    /// Clamp a size into the bounds
    #[must_use]
    pub fn clamp(&self, size: usize) -> usize {
        size.clamp(self.min, self.max)
    }
}

/// Complexity facts for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Best-case time
    pub best: &'static str,
    /// Average-case time
    pub average: &'static str,
    /// Worst-case time
    pub worst: &'static str,
    /// Auxiliary space
    pub space: &'static str,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Short machine name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Heap => "heap",
            Self::Quick => "quick",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Heap => "Heap Sort",
            Self::Quick => "Quick Sort",
        }
    }

    /// Sizes the configuration layer accepts
    #[must_use]
    pub const fn size_bounds(&self) -> SizeBounds {
        match self {
            Self::Bubble | Self::Quick => SizeBounds::new(5, 50),
            Self::Merge => SizeBounds::new(4, 32),
            Self::Heap => SizeBounds::new(5, 31),
            Self::Insertion | Self::Selection => SizeBounds::new(5, 30),
        }
    }

    /// Sizes a generator accepts: anything from two up to the visual maximum
    #[must_use]
    pub const fn trace_bounds(&self) -> SizeBounds {
        SizeBounds::new(MIN_TRACE_LEN, self.size_bounds().max)
    }

    /// Initial problem size
    #[must_use]
    pub const fn default_size(&self) -> usize {
        match self {
            Self::Bubble | Self::Quick => 20,
            Self::Merge => 16,
            Self::Heap | Self::Insertion | Self::Selection => 15,
        }
    }

    /// Initial speed setting
    #[must_use]
    pub const fn default_speed(&self) -> u32 {
        match self {
            Self::Bubble => 100,
            Self::Insertion | Self::Selection => 150,
            Self::Merge | Self::Heap | Self::Quick => 200,
        }
    }

    /// Name of the second running counter
    #[must_use]
    pub const fn mutation_label(&self) -> &'static str {
        match self {
            Self::Insertion => "shifts",
            Self::Merge => "writes",
            Self::Bubble | Self::Selection | Self::Heap | Self::Quick => "swaps",
        }
    }

    /// Whether equal elements keep their input order
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }

    /// Highlight set that a step's focus index lands in, if the algorithm uses one
    #[must_use]
    pub const fn focus_highlight(&self) -> Option<Highlight> {
        match self {
            Self::Quick => Some(Highlight::Pivot),
            Self::Selection => Some(Highlight::CurrentMinimum),
            Self::Insertion => Some(Highlight::Current),
            Self::Bubble | Self::Merge | Self::Heap => None,
        }
    }

    /// Complexity facts for the traced variant
    ///
    /// Traced bubble sort has no early exit, so sorted input still costs a
    /// full n(n-1)/2 comparisons.
    #[must_use]
    pub const fn complexity(&self) -> Complexity {
        match self {
            Self::Insertion => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Self::Bubble | Self::Selection => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Self::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Self::Heap => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
            },
            Self::Quick => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let name = normalized.strip_suffix("-sort").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| SortError::InvalidConfig(format!("unknown algorithm: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds_contains() {
        let bounds = Algorithm::Heap.size_bounds();
        assert!(bounds.contains(5));
        assert!(bounds.contains(31));
        assert!(!bounds.contains(4));
        assert!(!bounds.contains(32));
    }

    #[test]
    fn test_size_bounds_clamp() {
        let bounds = Algorithm::Merge.size_bounds();
        assert_eq!(bounds.clamp(50), 32);
        assert_eq!(bounds.clamp(1), 4);
        assert_eq!(bounds.clamp(10), 10);
    }

    #[test]
    fn test_trace_bounds_start_at_two() {
        for algorithm in Algorithm::ALL {
            let bounds = algorithm.trace_bounds();
            assert_eq!(bounds.min, MIN_TRACE_LEN);
            assert_eq!(bounds.max, algorithm.size_bounds().max);
        }
    }

    #[test]
    fn test_defaults_within_bounds() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.size_bounds().contains(algorithm.default_size()));
            assert!((1..=1000).contains(&algorithm.default_speed()));
        }
    }

    #[test]
    fn test_stability_flags() {
        assert!(Algorithm::Bubble.is_stable());
        assert!(Algorithm::Insertion.is_stable());
        assert!(Algorithm::Merge.is_stable());
        assert!(!Algorithm::Selection.is_stable());
        assert!(!Algorithm::Heap.is_stable());
        assert!(!Algorithm::Quick.is_stable());
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("Quick-Sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("heap_sort".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_serialization_kebab_case() {
        let json = serde_json::to_string(&Algorithm::Insertion).unwrap();
        assert_eq!(json, "\"insertion\"");
        let back: Algorithm = serde_json::from_str("\"merge\"").unwrap();
        assert_eq!(back, Algorithm::Merge);
    }

    #[test]
    fn test_mutation_labels() {
        assert_eq!(Algorithm::Insertion.mutation_label(), "shifts");
        assert_eq!(Algorithm::Merge.mutation_label(), "writes");
        assert_eq!(Algorithm::Quick.mutation_label(), "swaps");
    }

    #[test]
    fn test_bubble_best_case_quadratic() {
        assert_eq!(Algorithm::Bubble.complexity().best, "O(n²)");
        assert_eq!(Algorithm::Insertion.complexity().best, "O(n)");
        assert_eq!(Algorithm::Quick.complexity().worst, "O(n²)");
    }
}
