pub mod maybe;
mod point;
mod range;
mod sort;

use std::fmt;
use std::slice::ChunksExact;

use crate::cursor::RecordCursor;
use crate::error::{Error, Result};
use crate::successor::BigEndianSuccessor;
use crate::types::Options;

/// A sorted set of fixed-width keys stored back to back in one buffer.
///
/// ```text
///  record_size = 4
///  data: [0 0 0 4][0 0 0 5][0 0 0 6][0 0 0 9]
///  slot:    0        1        2        3
/// ```
///
/// Records are compared as unsigned byte strings (leftmost byte most
/// significant) and kept strictly ascending by every mutator. Lookups are
/// binary searches over slot indices; point inserts and removes shift the
/// tail of the buffer. Range operations work purely on slot positions, see
/// [`insert_range`](RecordStore::insert_range).
///
/// Initial data handed to a constructor is taken as-is. Call
/// [`sort_in_place`](RecordStore::sort_in_place) once before querying if it
/// may be unordered.
#[derive(Clone)]
pub struct RecordStore<S = BigEndianSuccessor> {
    data: Vec<u8>,
    record_size: usize,
    successor: S,
    options: Options,
    /// One record of working space for swaps and range bounds.
    scratch: Vec<u8>,
}

impl RecordStore<BigEndianSuccessor> {
    /// Create a store over `data` using big-endian integer successors.
    pub fn new(data: Vec<u8>, record_size: usize) -> Result<Self> {
        Self::with_options(data, record_size, BigEndianSuccessor, Options::default())
    }
}

impl<S> RecordStore<S> {
    /// Create a store with a custom successor policy.
    pub fn with_successor(data: Vec<u8>, record_size: usize, successor: S) -> Result<Self> {
        Self::with_options(data, record_size, successor, Options::default())
    }

    pub fn with_options(
        data: Vec<u8>,
        record_size: usize,
        successor: S,
        options: Options,
    ) -> Result<Self> {
        if record_size == 0 {
            return Err(Error::InvalidArgument("record size must be at least 1".into()));
        }
        if data.len() % record_size != 0 {
            return Err(Error::InvalidBufferLength {
                len: data.len(),
                record_size,
            });
        }

        Ok(RecordStore {
            data,
            record_size,
            successor,
            options,
            scratch: vec![0u8; record_size],
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.data.len() / self.record_size
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Records that fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity() / self.record_size
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The raw buffer, `len() * record_size()` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Record at slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.len() {
            Some(self.record(index))
        } else {
            None
        }
    }

    /// Smallest record.
    pub fn first(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Largest record.
    pub fn last(&self) -> Option<&[u8]> {
        self.len().checked_sub(1).map(|i| self.record(i))
    }

    /// All records in ascending order.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.record_size)
    }

    /// A seekable cursor positioned at the first record.
    pub fn cursor(&self) -> RecordCursor<'_, S> {
        RecordCursor::new(self)
    }

    /// Smallest slot whose record is `>= key`, or `len()` if every record is
    /// smaller.
    ///
    /// # Panics
    /// Panics if `key` is not exactly `record_size()` bytes.
    pub fn lower_bound(&self, key: &[u8]) -> usize {
        self.check_key(key);

        let mut lo = 0;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.record(mid) < key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Lower bound of `key` and whether the record there equals it.
    ///
    /// # Panics
    /// Panics if `key` is not exactly `record_size()` bytes.
    pub fn find(&self, key: &[u8]) -> (usize, bool) {
        let pos = self.lower_bound(key);
        let found = pos < self.len() && self.record(pos) == key;
        (pos, found)
    }

    /// # Panics
    /// Panics if `key` is not exactly `record_size()` bytes.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.find(key).1
    }

    /// Whether every record is strictly greater than the one before it.
    pub fn is_sorted(&self) -> bool {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(prev, next)| prev < next)
    }

    /// Drop every record.
    ///
    /// Small allocations (at most `Options::clear_retain_bytes`) are kept for
    /// reuse. Anything larger is freed so a bulk clear does not pin memory.
    pub fn clear(&mut self) {
        if self.data.capacity() <= self.options.clear_retain_bytes {
            self.data.clear();
        } else {
            tracing::debug!(
                capacity = self.data.capacity(),
                "clear releasing record buffer"
            );
            self.data = Vec::new();
        }
    }

    fn record(&self, index: usize) -> &[u8] {
        let start = index * self.record_size;
        &self.data[start..start + self.record_size]
    }

    fn check_key(&self, key: &[u8]) {
        assert!(
            key.len() == self.record_size,
            "{}",
            Error::InvalidKeySize {
                expected: self.record_size,
                actual: key.len(),
            }
        );
    }
}

impl<S> fmt::Debug for RecordStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("record_size", &self.record_size)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<'a, S> IntoIterator for &'a RecordStore<S> {
    type Item = &'a [u8];
    type IntoIter = ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
