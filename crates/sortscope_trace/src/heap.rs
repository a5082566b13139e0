//! Heap sort.
//!
//! Builds a max-heap bottom-up, then repeatedly swaps the root behind the
//! unsorted region and sinks the new root. Extractions count as swaps.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Heap sort generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortTracer for HeapSort {
    const ALGORITHM: Algorithm = Algorithm::Heap;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        let n = data.len();
        for node in (0..n / 2).rev() {
            sift_down(data, n, node, rec);
        }
        rec.mark(StepKind::HeapBuilt, data, &[], None);

        for end in (1..n).rev() {
            data.swap(0, end);
            rec.mutate(StepKind::Extract, data, &[0, end], None);
            rec.mark(StepKind::BoundaryReached, data, &[end], None);
            sift_down(data, end, 0, rec);
        }
    }
}

/// Sink `root` within the first `heap_len` elements
///
/// Each visited node gets its own `heapify-start`. A child must be strictly
/// greater to displace the current largest, so the parent wins ties and the
/// left child wins over an equal right child.
fn sift_down<V: Ord + Clone>(data: &mut [V], heap_len: usize, root: usize, rec: &mut Recorder<V>) {
    let mut node = root;
    loop {
        rec.mark(StepKind::HeapifyStart, data, &[node], None);

        let mut largest = node;
        let left = 2 * node + 1;
        let right = left + 1;

        if left < heap_len {
            rec.compare(data, &[left, largest], None);
            if data[left] > data[largest] {
                largest = left;
            }
        }
        if right < heap_len {
            rec.compare(data, &[right, largest], None);
            if data[right] > data[largest] {
                largest = right;
            }
        }

        if largest == node {
            return;
        }
        data.swap(node, largest);
        rec.mutate(StepKind::Swap, data, &[node, largest], None);
        node = largest;
    }
}
