//! Quick sort with Lomuto partitioning.
//!
//! The last element of each range is the pivot. Elements strictly less than
//! the pivot move into the low partition; swapping an element with itself is
//! skipped and not counted. The final pivot placement is always recorded and
//! counted, even when the pivot is already in place. Left partitions recurse
//! before right ones.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Quick sort generator
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortTracer for QuickSort {
    const ALGORITHM: Algorithm = Algorithm::Quick;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        if let Some(last) = data.len().checked_sub(1) {
            sort_range(data, 0, last, rec);
        }
    }
}

fn sort_range<V: Ord + Clone>(data: &mut [V], low: usize, high: usize, rec: &mut Recorder<V>) {
    if low >= high {
        return;
    }
    let pivot = partition(data, low, high, rec);
    if pivot > low {
        sort_range(data, low, pivot - 1, rec);
    }
    sort_range(data, pivot + 1, high, rec);
}

fn partition<V: Ord + Clone>(data: &mut [V], low: usize, high: usize, rec: &mut Recorder<V>) -> usize {
    rec.mark(StepKind::PivotSelected, data, &[high], Some(high));

    let mut store = low;
    for j in low..high {
        rec.compare(data, &[j, high], Some(high));
        if data[j] < data[high] {
            if store != j {
                data.swap(store, j);
                rec.mutate(StepKind::Swap, data, &[store, j], Some(high));
            }
            store += 1;
        }
    }

    data.swap(store, high);
    rec.mutate(StepKind::Swap, data, &[store, high], Some(store));
    rec.mark(StepKind::BoundaryReached, data, &[store], None);
    store
}

#[cfg(test)]
mod tests {
    use crate::generate;
    use sortscope_core::{Algorithm, StepKind};

    #[test]
    fn test_quick_first_partition() {
        let trace = generate(Algorithm::Quick, &[3, 1, 2]).unwrap();
        let steps = trace.steps();
        assert_eq!(steps[0].kind, StepKind::PivotSelected);
        assert_eq!(steps[0].highlight, vec![2]);
        assert_eq!(steps[0].focus, Some(2));

        let boundary = steps
            .iter()
            .find(|s| s.kind == StepKind::BoundaryReached)
            .unwrap();
        assert_eq!(boundary.highlight, vec![1]);
        assert_eq!(boundary.snapshot, vec![1, 2, 3]);
    }

    #[test]
    fn test_quick_self_swaps_skipped() {
        // every element is below the pivot and already in its slot
        let trace = generate(Algorithm::Quick, &[1, 2, 3, 4]).unwrap();
        let swaps: Vec<Vec<usize>> = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Swap)
            .map(|s| s.highlight.clone())
            .collect();
        // only the pivot placements remain: [3,3], [2,2], [1,1]
        assert_eq!(swaps, vec![vec![3, 3], vec![2, 2], vec![1, 1]]);
        assert_eq!(trace.totals().mutations, 3);
        assert_eq!(trace.totals().comparisons, 6);
    }

    #[test]
    fn test_quick_pivot_focus_follows_placement() {
        let trace = generate(Algorithm::Quick, &[5, 1, 3]).unwrap();
        let placement = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Swap)
            .last()
            .unwrap();
        let slot = placement.highlight[0];
        assert_eq!(placement.focus, Some(slot));
    }

    #[test]
    fn test_quick_left_partition_first() {
        let trace = generate(Algorithm::Quick, &[4, 6, 5, 2, 1, 3]).unwrap();
        let pivots: Vec<usize> = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::BoundaryReached)
            .map(|s| s.highlight[0])
            .collect();
        // pivot 3 lands at 2, then the left range [0..=1], then the right range
        assert_eq!(pivots[0], 2);
        assert!(pivots[1] < 2);
        assert_eq!(trace.final_values(), &[1, 2, 3, 4, 5, 6]);
    }
}
