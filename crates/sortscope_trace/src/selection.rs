//! Selection sort.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Selection sort generator
///
/// Ties keep the earlier-found minimum, and the long-range swap can carry an
/// element past its equals, so the algorithm is unstable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortTracer for SelectionSort {
    const ALGORITHM: Algorithm = Algorithm::Selection;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        let n = data.len();
        for start in 0..n.saturating_sub(1) {
            let mut min = start;
            rec.mark(StepKind::PassStart, data, &[start], Some(start));

            for j in start + 1..n {
                rec.compare(data, &[min, j], Some(min));
                if data[j] < data[min] {
                    min = j;
                    rec.mark(StepKind::NewMinimum, data, &[j], Some(j));
                }
            }

            if min != start {
                data.swap(start, min);
                rec.mutate(StepKind::Swap, data, &[start, min], None);
            }
            rec.mark(StepKind::BoundaryReached, data, &[start], None);
        }
    }
}
