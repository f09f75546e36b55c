use super::RecordStore;

impl<S> RecordStore<S> {
    /// Sort all records ascending, then collapse duplicates.
    ///
    /// Heapsort over slot indices: records are exchanged through the store's
    /// one-record scratch buffer, so sorting allocates nothing. Only needed
    /// once for unordered initial data; the mutators keep the order after
    /// that.
    ///
    /// Returns the number of duplicate records dropped.
    pub fn sort_in_place(&mut self) -> usize {
        let n = self.len();
        if n < 2 {
            return 0;
        }

        for root in (0..n / 2).rev() {
            self.sift_down(root, n);
        }
        for end in (1..n).rev() {
            self.swap_records(0, end);
            self.sift_down(0, end);
        }

        self.dedup_sorted()
    }

    /// Restore the max-heap property below `root`, considering slots `[0, end)`.
    fn sift_down(&mut self, mut root: usize, end: usize) {
        loop {
            let left = 2 * root + 1;
            if left >= end {
                return;
            }
            let right = left + 1;
            let child = if right < end && self.record(left) < self.record(right) {
                right
            } else {
                left
            };
            if self.record(root) >= self.record(child) {
                return;
            }
            self.swap_records(root, child);
            root = child;
        }
    }

    fn swap_records(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let w = self.record_size;
        let (a, b) = (i * w, j * w);
        self.scratch.copy_from_slice(&self.data[a..a + w]);
        self.data.copy_within(b..b + w, a);
        self.data[b..b + w].copy_from_slice(&self.scratch);
    }

    /// Compact runs of equal adjacent records down to one.
    fn dedup_sorted(&mut self) -> usize {
        let w = self.record_size;
        let n = self.len();
        let mut kept = 1;
        for i in 1..n {
            if self.record(i) != self.record(kept - 1) {
                if i != kept {
                    self.data.copy_within(i * w..(i + 1) * w, kept * w);
                }
                kept += 1;
            }
        }
        self.data.truncate(kept * w);
        n - kept
    }
}
