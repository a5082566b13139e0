//! Generator contract and dispatch.

use crate::recorder::Recorder;
use crate::trace::Trace;
use crate::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use sortscope_core::{Algorithm, SortError, SortResult};
use tracing::debug;

/// An algorithm that narrates itself into a recorder
///
/// Implementations sort `data` in place and record every comparison,
/// mutation and milestone. The closing `complete` step is appended by
/// [`generate_with`], not by the implementation.
pub trait SortTracer {
    /// Which algorithm this is
    const ALGORITHM: Algorithm;

    /// Sort `data`, recording each step
    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>);
}

/// Generate the trace for a numeric input
///
/// # Errors
///
/// Returns `InvalidInput` if the input is shorter than two elements or longer
/// than the algorithm's visual maximum
pub fn generate(algorithm: Algorithm, input: &[u32]) -> SortResult<Trace> {
    generate_with(algorithm, input)
}

/// Generate the trace for any totally ordered input
///
/// # Errors
///
/// Returns `InvalidInput` if the input length is outside the algorithm's
/// trace bounds. Validation happens before any step is recorded.
pub fn generate_with<V: Ord + Clone>(algorithm: Algorithm, input: &[V]) -> SortResult<Trace<V>> {
    let bounds = algorithm.trace_bounds();
    if !bounds.contains(input.len()) {
        return Err(SortError::invalid_input(
            algorithm,
            input.len(),
            bounds.min,
            bounds.max,
        ));
    }

    let mut data = input.to_vec();
    let mut rec = Recorder::with_capacity(estimated_steps(algorithm, input.len()));

    match algorithm {
        Algorithm::Bubble => BubbleSort.record(&mut data, &mut rec),
        Algorithm::Selection => SelectionSort.record(&mut data, &mut rec),
        Algorithm::Insertion => InsertionSort.record(&mut data, &mut rec),
        Algorithm::Merge => MergeSort.record(&mut data, &mut rec),
        Algorithm::Heap => HeapSort.record(&mut data, &mut rec),
        Algorithm::Quick => QuickSort.record(&mut data, &mut rec),
    }
    rec.complete(&data);

    let counters = rec.counters();
    let steps = rec.into_steps();
    debug!(
        %algorithm,
        size = input.len(),
        steps = steps.len(),
        comparisons = counters.comparisons,
        mutations = counters.mutations,
        "trace generated"
    );

    Ok(Trace::new(algorithm, input.to_vec(), steps))
}

/// Rough step count, used only to size the recorder
fn estimated_steps(algorithm: Algorithm, n: usize) -> usize {
    let log_n = usize::BITS as usize - n.leading_zeros() as usize;
    match algorithm {
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => n * n,
        Algorithm::Merge | Algorithm::Heap | Algorithm::Quick => 4 * n * log_n.max(1),
    }
}
