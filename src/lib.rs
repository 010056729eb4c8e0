//! Stable in-place sorting with a simplified TimSort.
//!
//! ```ignore
//! let mut v = [5, 1, 4, 2, 8, 0, -1, 7];
//! timsort::sort(&mut v);
//! assert_eq!(v, [-1, 0, 1, 2, 4, 5, 7, 8]);
//! ```

pub mod timsort;
pub mod verify;

pub use crate::timsort::{
    min_run_length, sort, sort_by, sort_by_key, SortStats, TimSort, MAX_RUN_STACK, MIN_MERGE,
};
