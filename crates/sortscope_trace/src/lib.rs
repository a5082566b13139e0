//! SORTSCOPE Trace Generators
//!
//! Each generator runs its algorithm to completion on a private copy of the
//! input and returns the full, immutable sequence of steps needed to replay
//! it. Generation is a pure function of the input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bubble;
pub mod generator;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;
pub mod stability;
pub mod trace;

pub use bubble::BubbleSort;
pub use generator::{generate, generate_with, SortTracer};
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use recorder::Recorder;
pub use selection::SelectionSort;
pub use stability::{tie_order_kept, Tagged};
pub use trace::{Trace, TraceReader};
