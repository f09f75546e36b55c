/// Allocations at or below this many bytes survive `clear()`.
pub const DEFAULT_CLEAR_RETAIN_BYTES: usize = 4096;

/// Reallocation headroom is `bytes >> DEFAULT_GROWTH_SHIFT`, i.e. 1/8.
pub const DEFAULT_GROWTH_SHIFT: u32 = 3;

/// Tunables for a [`RecordStore`](crate::RecordStore).
///
/// Ranges can be large and records are often tiny, so growth adds a small
/// fixed fraction on top of the exact requirement instead of doubling.
/// ```text
/// need = 8000 bytes, growth_shift = 3  →  capacity = 8000 + 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// `clear()` keeps the allocation if its capacity is at most this many
    /// bytes and frees it otherwise.
    pub clear_retain_bytes: usize,
    /// Right shift applied to the required byte count to get the extra
    /// headroom reserved when a range insert reallocates.
    pub growth_shift: u32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            clear_retain_bytes: DEFAULT_CLEAR_RETAIN_BYTES,
            growth_shift: DEFAULT_GROWTH_SHIFT,
        }
    }
}

impl Options {
    /// Set the largest capacity, in bytes, that `clear()` keeps allocated.
    pub fn with_clear_retain_bytes(mut self, bytes: usize) -> Self {
        self.clear_retain_bytes = bytes;
        self
    }

    /// Set the reallocation headroom to `bytes >> shift`.
    pub fn with_growth_shift(mut self, shift: u32) -> Self {
        self.growth_shift = shift;
        self
    }

    /// Capacity in bytes to allocate when `need` bytes must fit.
    pub(crate) fn grown_capacity(&self, need: usize) -> usize {
        let headroom = need.checked_shr(self.growth_shift).unwrap_or(0);
        need.saturating_add(headroom)
    }
}
