use super::RecordStore;
use crate::error::{Error, Result};
use crate::successor::{Successor, add_be};

impl<S: Successor> RecordStore<S> {
    /// Make every key in the run `[base, base + num)` present.
    ///
    /// Works on slot positions only. Because every range that went in before
    /// was written as an exact successor run, the number of records between
    /// `lower_bound(base)` and `lower_bound(base + num)` tells whether the run
    /// is already complete:
    ///
    /// ```text
    /// before:  [0 1 | 4 5 6 7 | 9]     insert_range(2, 6) → end = 8
    ///               ^start    ^end_pos
    ///          4 present, 6 requested → splice and regenerate
    /// after:   [0 1 | 2 3 4 5 6 7 | 9]
    /// ```
    ///
    /// If the count matches, nothing is written. Otherwise the overlapped
    /// slots are replaced by `num` fresh slots and the successor regenerates
    /// the whole run from `base`.
    ///
    /// # Errors
    /// - [`Error::RangeOverflow`] if `base + num` does not fit in the record
    ///   width. The store is left untouched.
    /// - [`Error::InvalidArgument`] if `num` records do not fit in memory.
    ///
    /// # Panics
    /// Panics if `base` is not exactly `record_size()` bytes.
    pub fn insert_range(&mut self, base: &[u8], num: usize) -> Result<()> {
        let start = self.lower_bound(base);
        let w = self.record_size;
        let span = num.checked_mul(w).ok_or_else(|| {
            Error::InvalidArgument(format!("range of {num} records does not fit in memory"))
        })?;

        self.scratch.copy_from_slice(base);
        if add_be(&mut self.scratch, range_delta(num)?) {
            return Err(Error::RangeOverflow);
        }

        let len = self.len();
        let end_pos = if start == len {
            len
        } else {
            let end_pos = self.lower_bound(&self.scratch);
            if end_pos - start == num {
                tracing::trace!(start, num, "insert_range: run already present");
                return Ok(());
            }
            end_pos
        };

        let (start_b, end_b) = (start * w, end_pos * w);
        let old_bytes = self.data.len();
        let need = (old_bytes - (end_b - start_b))
            .checked_add(span)
            .ok_or_else(|| Error::InvalidArgument(format!("range of {num} records overflows the store")))?;

        tracing::trace!(start, end_pos, num, "insert_range: splicing run");

        if self.data.capacity() < need {
            let mut data = Vec::with_capacity(self.options.grown_capacity(need));
            data.extend_from_slice(&self.data[..start_b]);
            data.resize(start_b + span, 0);
            data.extend_from_slice(&self.data[end_b..]);
            tracing::debug!(
                old_capacity = self.data.capacity(),
                new_capacity = data.capacity(),
                "insert_range: reallocated record buffer"
            );
            self.data = data;
        } else if need >= old_bytes {
            self.data.resize(need, 0);
            self.data.copy_within(end_b..old_bytes, start_b + span);
        } else {
            // More records sat inside the bound than the run has keys, which
            // only a successor writing repeated or skipped keys leaves behind.
            // Move the suffix left before cutting the buffer.
            self.data.copy_within(end_b..old_bytes, start_b + span);
            self.data.truncate(need);
        }

        self.successor
            .fill(base, &mut self.data[start_b..start_b + span]);
        Ok(())
    }

    /// Remove every record in `[base, base + num)`. Returns how many were
    /// removed.
    ///
    /// Unlike [`insert_range`](Self::insert_range), an overflowing
    /// `base + num` is not an error: the range is open-ended and everything
    /// from `base` to the end of the store goes.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `num` cannot be expressed as a 64-bit
    /// delta.
    ///
    /// # Panics
    /// Panics if `base` is not exactly `record_size()` bytes.
    pub fn remove_range(&mut self, base: &[u8], num: usize) -> Result<usize> {
        let start = self.lower_bound(base);
        let delta = range_delta(num)?;
        let len = self.len();
        if start == len {
            return Ok(0);
        }

        self.scratch.copy_from_slice(base);
        let end_pos = if add_be(&mut self.scratch, delta) {
            tracing::trace!(start, num, "remove_range: bound overflows, removing to end");
            len
        } else {
            self.lower_bound(&self.scratch)
        };

        if start == end_pos {
            return Ok(0);
        }

        let w = self.record_size;
        self.data.drain(start * w..end_pos * w);
        tracing::trace!(start, end_pos, "remove_range: removed run");
        Ok(end_pos - start)
    }
}

fn range_delta(num: usize) -> Result<u64> {
    u64::try_from(num)
        .map_err(|_| Error::InvalidArgument(format!("range of {num} records exceeds 64 bits")))
}
