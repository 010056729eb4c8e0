//! Adaptive, stable, hybrid merge/insertion sort. TimSort without galloping mode.

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

mod insertion;
mod merge;
mod run;
mod stack;

pub use run::{min_run_length, MIN_MERGE};
pub use stack::{Run, RunStack, MAX_RUN_STACK};

use insertion::binary_insertion_sort;
use merge::{grow_buffer, merge_high, merge_low};
use run::make_ascending_run;

/// Upper bound for the initial size of the merge buffer.
pub const INITIAL_TMP_STORAGE_LEN: usize = 256;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    TimSort::new(v, |a, b| a.cmp(b)).sort();
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    TimSort::new(v, compare).sort();
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    TimSort::new(v, |a, b| f(a).cmp(&f(b))).sort();
}

/// Counters describing the work done by the most recent `TimSort::sort` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Runs pushed onto the run stack, after padding.
    pub runs: usize,
    /// Pairs of runs combined, including the ones that needed no element moves.
    pub merges: usize,
    /// Merges where the left run already ended before the right run started.
    pub presorted_merges: usize,
    pub merges_low: usize,
    pub merges_high: usize,
    pub max_stack_depth: usize,
}

/// Sorts a borrowed slice in place with a three-way comparison function.
///
/// The comparison must implement a total order. If it doesn't, the resulting order is unspecified,
/// but the slice still ends up as a permutation of its input. The same holds if the comparison
/// panics, the panic is propagated to the caller of `sort`.
pub struct TimSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    v: &'a mut [T],
    compare: F,
    // Only the spare capacity is used, the length is always 0.
    buf: Vec<T>,
    runs: RunStack,
    stats: SortStats,
}

impl<'a, T, F> TimSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(v: &'a mut [T], compare: F) -> Self {
        let buf_len = if mem::size_of::<T>() == 0 {
            0
        } else {
            (v.len() / 2).min(INITIAL_TMP_STORAGE_LEN)
        };

        Self {
            v,
            compare,
            buf: Vec::with_capacity(buf_len),
            runs: RunStack::new(),
            stats: SortStats::default(),
        }
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Sorts the slice. Stable, equal elements keep their relative order.
    pub fn sort(&mut self) {
        self.stats = SortStats::default();
        self.runs.clear();

        if mem::size_of::<T>() == 0 {
            // Sorting has no meaningful behavior on zero-sized types. Do nothing.
            return;
        }

        let len = self.v.len();

        if len < 2 {
            // These inputs are always sorted.
            return;
        }

        if len < MIN_MERGE {
            debug!("timsort: len={len} below merge threshold, single padded run");
            let run_len = make_ascending_run(self.v, &mut self.compare);
            binary_insertion_sort(self.v, run_len, &mut self.compare);
            self.stats.runs = 1;
            self.stats.max_stack_depth = 1;
            return;
        }

        let min_run = min_run_length(len);
        debug!("timsort: len={len} min_run={min_run}");

        let mut lo = 0;
        let mut remaining = len;

        while remaining > 0 {
            let mut run_len = make_ascending_run(&mut self.v[lo..], &mut self.compare);

            if run_len < min_run {
                let force = remaining.min(min_run);
                binary_insertion_sort(&mut self.v[lo..lo + force], run_len, &mut self.compare);
                run_len = force;
            }

            self.push_run(Run {
                start: lo,
                len: run_len,
            });
            self.merge_collapse();

            lo += run_len;
            remaining -= run_len;
        }

        self.merge_force_collapse();

        // Finally, exactly one run must remain in the stack.
        debug_assert!(self.runs.len() == 1 && self.runs.runs()[0] == Run { start: 0, len });
        debug!("timsort: done {:?}", self.stats);
    }

    fn push_run(&mut self, run: Run) {
        trace!("timsort: push run {}..{}", run.start, run.end());
        self.runs.push(run);
        self.stats.runs += 1;
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.runs.len());
    }

    // Merges adjacent runs until the run stack is balanced again.
    fn merge_collapse(&mut self) {
        while let Some(i) = self.runs.collapse_candidate() {
            self.merge_at(i);
        }
    }

    // Merges all remaining runs into one.
    fn merge_force_collapse(&mut self) {
        while let Some(i) = self.runs.force_collapse_candidate() {
            self.merge_at(i);
        }
    }

    /// Merges the runs at stack index `i` and `i + 1`.
    fn merge_at(&mut self, i: usize) {
        let (left, right) = self.runs.collapse_at(i);
        self.stats.merges += 1;

        debug_assert!(left.len > 0 && right.len > 0);

        let len = self.v.len();
        let compare = &mut self.compare;
        let v = &mut self.v[left.start..right.end()];
        let mid = left.len;

        if compare(&v[mid - 1], &v[mid]) != Ordering::Greater {
            trace!(
                "timsort: runs {}..{}..{} already in order",
                left.start,
                right.start,
                right.end()
            );
            self.stats.presorted_merges += 1;
            return;
        }

        if compare(&v[0], &v[v.len() - 1]) != Ordering::Greater {
            trace!(
                "timsort: merge low {}..{}..{}",
                left.start,
                right.start,
                right.end()
            );
            let buf = grow_buffer(&mut self.buf, left.len, len);
            // SAFETY: both runs are non-empty and `buf` has room for the left run. `buf` is a
            // separate allocation, and `T` is not a ZST, checked in `sort`.
            unsafe {
                merge_low(v, mid, buf, compare);
            }
            self.stats.merges_low += 1;
        } else {
            trace!(
                "timsort: merge high {}..{}..{}",
                left.start,
                right.start,
                right.end()
            );
            let buf = grow_buffer(&mut self.buf, right.len, len);
            // SAFETY: see above, `buf` has room for the right run.
            unsafe {
                merge_high(v, mid, buf, compare);
            }
            self.stats.merges_high += 1;
        }
    }
}
