use std::cmp::Ordering;

/// Sorts `v` assuming `v[..start]` is already sorted, by inserting every element of `v[start..]`
/// at its binary searched position.
///
/// Used to pad short runs up to the minimum run length. `v.len()` is at most `MIN_MERGE`, so the
/// quadratic number of moves is irrelevant next to the `O(n log n)` comparisons.
pub(crate) fn binary_insertion_sort<T, F>(v: &mut [T], start: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    // This is a logic but not a safety bug.
    debug_assert!(start <= len);

    for i in start.max(1)..len {
        let (sorted, tail) = v.split_at(i);
        let pos = upper_bound(sorted, &tail[0], compare);

        // All comparisons are done before anything moves. A panicking comparator leaves `v`
        // untouched for this element.
        if pos < i {
            v[pos..=i].rotate_right(1);
        }
    }
}

/// Returns the index of the first element in `sorted` that compares greater than `pivot`.
///
/// Equal elements are skipped, so the pivot ends up behind them, which is what keeps the
/// insertion stable.
fn upper_bound<T, F>(sorted: &[T], pivot: &T, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + (right - left) / 2;

        if compare(pivot, &sorted[mid]) == Ordering::Less {
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    left
}
