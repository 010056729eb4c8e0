/// Maximum number of pending runs.
///
/// Runs are at least `MIN_MERGE / 2` long and the merge policy keeps neighbouring run lengths
/// growing roughly like the Fibonacci sequence, so 40 entries cover any slice that fits in memory.
pub const MAX_RUN_STACK: usize = 40;

/// A sorted, contiguous range `start..start + len` of the slice that is waiting to be merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Fixed capacity stack of pending runs, oldest at the bottom.
///
/// Once `collapse_candidate` returns `None`, the lengths of the top three runs `a`, `b`, `c`
/// (oldest to newest) satisfy `a.len > b.len + c.len` and `b.len > c.len`.
#[derive(Clone, Debug)]
pub struct RunStack {
    runs: [Run; MAX_RUN_STACK],
    size: usize,
}

impl Default for RunStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStack {
    pub const fn new() -> Self {
        Self {
            runs: [Run { start: 0, len: 0 }; MAX_RUN_STACK],
            size: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs[..self.size]
    }

    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Pushes `run` on top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack already holds `MAX_RUN_STACK` runs. With a valid minimum run length
    /// this can't happen, so reaching it is an implementation bug.
    pub fn push(&mut self, run: Run) {
        assert!(
            self.size < MAX_RUN_STACK,
            "run stack overflow: capacity of {MAX_RUN_STACK} runs exceeded while pushing {run:?}"
        );

        if let Some(top) = self.runs().last() {
            debug_assert_eq!(top.end(), run.start, "runs must be adjacent");
        }

        self.runs[self.size] = run;
        self.size += 1;
    }

    /// Examines the top three runs and identifies the next pair to merge after a push. If
    /// `Some(i)` is returned, `runs[i]` and `runs[i + 1]` must be merged next. `None` means the
    /// stack is balanced and the next run should be built.
    ///
    /// Only the top three runs are checked, and `runs[n - 1]` is preferred over the top run only
    /// if it is strictly shorter.
    pub fn collapse_candidate(&self) -> Option<usize> {
        if self.size < 2 {
            return None;
        }

        let runs = self.runs();
        let mut n = self.size - 2;

        if n >= 1 && runs[n - 1].len <= runs[n].len + runs[n + 1].len {
            if runs[n - 1].len < runs[n + 1].len {
                n -= 1;
            }
        } else if runs[n].len > runs[n + 1].len {
            return None;
        }

        Some(n)
    }

    /// Identifies the next pair to merge once all input is consumed. Only returns `None` once a
    /// single run is left.
    pub fn force_collapse_candidate(&self) -> Option<usize> {
        if self.size < 2 {
            return None;
        }

        let runs = self.runs();
        let mut n = self.size - 2;

        if n > 0 && runs[n - 1].len < runs[n + 1].len {
            n -= 1;
        }

        Some(n)
    }

    /// Replaces `runs[i]` and `runs[i + 1]` with their union and returns the two original runs.
    /// If `runs[i + 2]` exists it slides down into the freed slot.
    ///
    /// Only updates the descriptors, the caller is responsible for merging the elements.
    pub fn collapse_at(&mut self, i: usize) -> (Run, Run) {
        assert!(
            i + 2 == self.size || i + 3 == self.size,
            "can only merge the second or third run from the top, got index {i} with {} runs",
            self.size
        );

        let left = self.runs[i];
        let right = self.runs[i + 1];
        debug_assert_eq!(left.end(), right.start);

        self.runs[i] = Run {
            start: left.start,
            len: left.len + right.len,
        };

        if i + 3 == self.size {
            self.runs[i + 1] = self.runs[i + 2];
        }

        self.size -= 1;

        (left, right)
    }
}
