//! Merge sort.
//!
//! Top-down recursion over inclusive ranges with `mid = (left + right) / 2`.
//! Merging copies both runs aside and writes back into `left..=right`; the
//! left run wins ties, which keeps the sort stable. The mutation counter
//! counts element writes.

use crate::generator::SortTracer;
use crate::recorder::Recorder;
use sortscope_core::{Algorithm, StepKind};

/// Merge sort generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortTracer for MergeSort {
    const ALGORITHM: Algorithm = Algorithm::Merge;

    fn record<V: Ord + Clone>(&self, data: &mut [V], rec: &mut Recorder<V>) {
        if let Some(last) = data.len().checked_sub(1) {
            sort_range(data, 0, last, rec);
        }
    }
}

fn sort_range<V: Ord + Clone>(data: &mut [V], left: usize, right: usize, rec: &mut Recorder<V>) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    rec.mark(StepKind::Divide, data, &[left, mid, right], None);

    sort_range(data, left, mid, rec);
    sort_range(data, mid + 1, right, rec);
    merge(data, left, mid, right, rec);
}

fn merge<V: Ord + Clone>(
    data: &mut [V],
    left: usize,
    mid: usize,
    right: usize,
    rec: &mut Recorder<V>,
) {
    let left_run = data[left..=mid].to_vec();
    let right_run = data[mid + 1..=right].to_vec();
    rec.mark(StepKind::MergeStart, data, &[left, mid, right], None);

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        rec.compare(data, &[left + i, mid + 1 + j], None);
        if left_run[i] <= right_run[j] {
            data[k] = left_run[i].clone();
            i += 1;
        } else {
            data[k] = right_run[j].clone();
            j += 1;
        }
        rec.mutate(StepKind::Overwrite, data, &[k], None);
        k += 1;
    }

    for value in left_run[i..].iter().chain(&right_run[j..]) {
        data[k] = value.clone();
        rec.mutate(StepKind::Overwrite, data, &[k], None);
        k += 1;
    }

    let merged: Vec<usize> = (left..=right).collect();
    rec.mark(StepKind::MergeComplete, data, &merged, None);
}

#[cfg(test)]
mod tests {
    use crate::generate;
    use sortscope_core::{Algorithm, StepKind};

    #[test]
    fn test_merge_divide_midpoints() {
        let trace = generate(Algorithm::Merge, &[4, 3, 2, 1]).unwrap();
        let divides: Vec<Vec<usize>> = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Divide)
            .map(|s| s.highlight.clone())
            .collect();
        assert_eq!(divides, vec![vec![0, 1, 3], vec![0, 0, 1], vec![2, 2, 3]]);
    }

    #[test]
    fn test_merge_writes_every_element_per_level() {
        // two levels of merging over four elements
        let trace = generate(Algorithm::Merge, &[4, 3, 2, 1]).unwrap();
        assert_eq!(trace.totals().mutations, 8);
        assert_eq!(trace.count(StepKind::Overwrite), 8);
        assert_eq!(trace.count(StepKind::MergeComplete), 3);
    }

    #[test]
    fn test_merge_comparisons_reversed_input() {
        let trace = generate(Algorithm::Merge, &[4, 3, 2, 1]).unwrap();
        // [4]+[3]: 1, [2]+[1]: 1, [3,4]+[1,2]: 2
        assert_eq!(trace.totals().comparisons, 4);
        assert_eq!(trace.final_values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_complete_covers_range() {
        let trace = generate(Algorithm::Merge, &[2, 1, 3]).unwrap();
        let last_merge = trace
            .steps()
            .iter()
            .rev()
            .find(|s| s.kind == StepKind::MergeComplete)
            .unwrap();
        assert_eq!(last_merge.highlight, vec![0, 1, 2]);
    }

    #[test]
    fn test_merge_odd_length() {
        let trace = generate(Algorithm::Merge, &[5, 1, 4, 2, 3]).unwrap();
        assert_eq!(trace.final_values(), &[1, 2, 3, 4, 5]);
        assert_eq!(trace.count(StepKind::Divide), 4);
        assert_eq!(trace.count(StepKind::MergeStart), 4);
    }
}
