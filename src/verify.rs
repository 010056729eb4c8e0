//! Post-condition checks for sorted output.

use std::cmp::Ordering;
use std::fmt::Debug;

use log::error;

/// Returns the first index `i` for which `v[i]` compares greater than `v[i + 1]`, or `None` if `v`
/// is non-descending.
pub fn first_unsorted_index_by<T, F>(v: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).position(|w| compare(&w[0], &w[1]) == Ordering::Greater)
}

pub fn is_sorted_by<T, F>(v: &[T], compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    first_unsorted_index_by(v, compare).is_none()
}

pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Like `is_sorted`, but reports the first out of order pair via `log::error!`.
pub fn is_sorted_logged<T>(v: &[T]) -> bool
where
    T: Ord + Debug,
{
    match first_unsorted_index_by(v, |a, b| a.cmp(b)) {
        Some(i) => {
            error!("Array is not sorted at index {i}. {:?} > {:?}", v[i], v[i + 1]);
            false
        }
        None => true,
    }
}
