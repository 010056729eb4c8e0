use std::cmp::Ordering;

/// Inputs shorter than this are sorted with a single padded run and never merged.
pub const MIN_MERGE: usize = 32;

/// Computes the minimum run length for an input of `n` elements.
///
/// For `n < MIN_MERGE` this is `n` itself. Otherwise the result lies in `[MIN_MERGE / 2,
/// MIN_MERGE]` and is chosen so that `n / min_run` is a power of two or slightly less than one,
/// which keeps the final merges balanced. Concretely, it's the top bits of `n` that remain after
/// shifting it below `MIN_MERGE`, plus one if any shifted out bit was set.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }

    n + r
}

/// Finds the run starting at the beginning of `v` and makes it ascending. Returns the length of
/// said run, which is at least 1 for a non-empty `v`.
///
/// A run is either non-descending, `v[0] <= v[1] <= ...`, or strictly descending,
/// `v[0] > v[1] > ...`. Descending runs are reversed in place. They contain no equal neighbours, so
/// reversing them can't reorder equal elements.
pub(crate) fn make_ascending_run<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len < 2 {
        return len;
    }

    let mut end = 2;

    if compare(&v[1], &v[0]) == Ordering::Less {
        while end < len && compare(&v[end], &v[end - 1]) == Ordering::Less {
            end += 1;
        }

        v[..end].reverse();
    } else {
        while end < len && compare(&v[end], &v[end - 1]) != Ordering::Less {
            end += 1;
        }
    }

    end
}
