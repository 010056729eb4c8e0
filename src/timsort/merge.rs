use std::cmp::Ordering;
use std::ptr;

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` front to back, using `buf` as temporary
/// storage for a copy of the left run.
///
/// # Safety
///
/// Both runs must be non-empty. `buf` must be valid for writes of `mid` elements and must not
/// overlap `v`. `T` must not be a zero-sized type.
pub(crate) unsafe fn merge_low<T, F>(v: &mut [T], mid: usize, buf: *mut T, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();

    // Intermediate state of the process is always tracked by `hole`, the unconsumed part of the
    // left run lives in `hole.start..hole.end` and `hole.dest` is the next output slot. The
    // unconsumed part of the right run is always exactly behind the gap of
    // `hole.end - hole.start` elements starting at `hole.dest`.
    //
    // Panic safety:
    //
    // If `compare` panics, `hole` gets dropped and fills the gap with the unconsumed range in
    // `buf`, so `v` still holds every element it initially held exactly once. The same drop
    // copies the tail of the left run into place if the right run runs out first.
    unsafe {
        let v_end = arr_ptr.add(len);
        ptr::copy_nonoverlapping(arr_ptr, buf, mid);

        let mut hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: arr_ptr,
        };
        let mut right = arr_ptr.add(mid);

        while hole.start < hole.end && right < v_end {
            // If equal, prefer the left run to maintain stability.
            if compare(&*hole.start, &*right) != Ordering::Greater {
                ptr::copy_nonoverlapping(hole.start, hole.dest, 1);
                hole.start = hole.start.add(1);
            } else {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                right = right.add(1);
            }
            hole.dest = hole.dest.add(1);
        }
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` back to front, using `buf` as temporary
/// storage for a copy of the right run.
///
/// # Safety
///
/// Both runs must be non-empty. `buf` must be valid for writes of `v.len() - mid` elements and
/// must not overlap `v`. `T` must not be a zero-sized type.
pub(crate) unsafe fn merge_high<T, F>(v: &mut [T], mid: usize, buf: *mut T, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();

    // Mirror image of `merge_low`. `hole.dest` is one past the unconsumed part of the left run,
    // `hole.start..hole.end` is the unconsumed part of the copied right run, and the gap they
    // leave between them is exactly `hole.end - hole.start` elements long.
    unsafe {
        let v_mid = arr_ptr.add(mid);
        ptr::copy_nonoverlapping(v_mid, buf, len - mid);

        let mut hole = MergeHole {
            start: buf,
            end: buf.add(len - mid),
            dest: v_mid,
        };
        let mut out = arr_ptr.add(len);

        while arr_ptr < hole.dest && buf < hole.end {
            let left = hole.dest.sub(1);
            let right = hole.end.sub(1);
            out = out.sub(1);

            // Only take from the left run if it is strictly greater, equal elements of the right
            // run land further back.
            if compare(&*left, &*right) == Ordering::Greater {
                ptr::copy_nonoverlapping(left, out, 1);
                hole.dest = left;
            } else {
                ptr::copy_nonoverlapping(right, out, 1);
                hole.end = right;
            }
        }
    }
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // `T` is not a zero-sized type, and these are pointers into the merge buffer and the
        // slice that don't overlap.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}

/// Grows `buf` so it can hold at least `needed` elements. Capacity at least doubles when it grows,
/// but never beyond `max_len`. Never shrinks.
///
/// `buf` is only ever used through its spare capacity, its length stays 0 so dropping it never
/// drops any elements.
pub(crate) fn grow_buffer<T>(buf: &mut Vec<T>, needed: usize, max_len: usize) -> *mut T {
    debug_assert!(buf.is_empty());
    debug_assert!(needed <= max_len);

    let capacity = buf.capacity();
    if capacity < needed {
        let target = needed.max(capacity.saturating_mul(2)).min(max_len);
        buf.reserve_exact(target);
    }

    buf.as_mut_ptr()
}
