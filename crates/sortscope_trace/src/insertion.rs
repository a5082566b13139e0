//! Insertion sort.
//!
//! The first element is the initial sorted prefix and gets no step. Each later
//! element is picked, compared leftward, and larger elements shift one slot
//! right until an element that is not strictly greater stops the scan. While a
//! shift is in flight the snapshot shows the shifted value twice; the picked
//! value reappears at the `insert` step.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Insertion sort generator
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortTracer for InsertionSort {
    const ALGORITHM: Algorithm = Algorithm::Insertion;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        for picked in 1..data.len() {
            let key = data[picked].clone();
            rec.mark(StepKind::Pick, data, &[picked], Some(picked));

            let mut hole = picked;
            while hole > 0 {
                let left = hole - 1;
                rec.compare(data, &[left, hole], Some(picked));
                if data[left] > key {
                    data[hole] = data[left].clone();
                    rec.mutate(StepKind::Shift, data, &[left, hole], Some(picked));
                    hole = left;
                } else {
                    break;
                }
            }

            data[hole] = key;
            rec.mark(StepKind::Insert, data, &[hole], None);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate;
    use sortscope_core::{Algorithm, StepKind};

    #[test]
    fn test_insertion_no_step_for_first_element() {
        let trace = generate(Algorithm::Insertion, &[1, 2, 3]).unwrap();
        assert_eq!(trace.steps()[0].kind, StepKind::Pick);
        assert_eq!(trace.steps()[0].highlight, vec![1]);
        assert_eq!(trace.count(StepKind::Pick), 2);
        assert_eq!(trace.count(StepKind::Insert), 2);
    }

    #[test]
    fn test_insertion_shift_count_equals_inversions() {
        let trace = generate(Algorithm::Insertion, &[5, 3, 4, 1, 2]).unwrap();
        assert_eq!(trace.totals().mutations, 8);
        assert_eq!(trace.count(StepKind::Shift), 8);
    }

    #[test]
    fn test_insertion_sorted_input_compares_once_per_element() {
        let trace = generate(Algorithm::Insertion, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(trace.totals().comparisons, 4);
        assert_eq!(trace.totals().mutations, 0);
    }

    #[test]
    fn test_insertion_ties_stop_scan() {
        let trace = generate(Algorithm::Insertion, &[4, 4]).unwrap();
        assert_eq!(trace.count(StepKind::Shift), 0);
        assert_eq!(trace.totals().comparisons, 1);
    }

    #[test]
    fn test_insertion_insert_lands_at_front() {
        let trace = generate(Algorithm::Insertion, &[3, 1]).unwrap();
        let insert = trace
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::Insert)
            .unwrap();
        assert_eq!(insert.highlight, vec![0]);
        assert_eq!(insert.snapshot, vec![1, 3]);

        let shift = trace
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::Shift)
            .unwrap();
        assert_eq!(shift.snapshot, vec![3, 3]);
        assert_eq!(shift.focus, Some(1));
    }
}
