//! Bubble sort.
//!
//! Every adjacent pair in the unsorted region is compared; only a strictly
//! greater left element is swapped, so ties never move past each other. Each
//! pass finalizes the largest remaining value at its upper boundary. There is
//! no early exit: an already-sorted input still scans every pass.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Bubble sort generator
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortTracer for BubbleSort {
    const ALGORITHM: Algorithm = Algorithm::Bubble;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        let n = data.len();
        for pass in 0..n.saturating_sub(1) {
            let boundary = n - pass - 1;
            for j in 0..boundary {
                rec.compare(data, &[j, j + 1], None);
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                    rec.mutate(StepKind::Swap, data, &[j, j + 1], None);
                }
            }
            rec.mark(StepKind::BoundaryReached, data, &[boundary], None);
        }
        rec.mark(StepKind::BoundaryReached, data, &[0], None);
    }
}
