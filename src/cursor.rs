use crate::store::RecordStore;

/// Forward iteration over sorted records with seeking.
///
/// Same shape as a storage iterator in an LSM engine: position it with
/// `seek`, read `key` while `is_valid`, step with `advance`.
pub trait RecordIterator {
    /// The current record. Only valid when `is_valid()` is true.
    fn key(&self) -> &[u8];

    /// Returns true if the cursor is positioned at a record.
    fn is_valid(&self) -> bool;

    /// Moves to the next record.
    fn advance(&mut self);

    /// Positions the cursor at the first record `>= key`.
    fn seek(&mut self, key: &[u8]);

    fn seek_to_first(&mut self);
}

/// Cursor over a [`RecordStore`]. Holds a shared borrow, so the store
/// cannot change underneath it.
pub struct RecordCursor<'a, S> {
    store: &'a RecordStore<S>,
    pos: usize,
}

impl<'a, S> RecordCursor<'a, S> {
    pub(crate) fn new(store: &'a RecordStore<S>) -> Self {
        RecordCursor { store, pos: 0 }
    }

    /// Slot index the cursor points at (`store.len()` once exhausted).
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<S> RecordIterator for RecordCursor<'_, S> {
    fn key(&self) -> &[u8] {
        match self.store.get(self.pos) {
            Some(record) => record,
            None => panic!("key() called on exhausted cursor"),
        }
    }

    fn is_valid(&self) -> bool {
        self.pos < self.store.len()
    }

    fn advance(&mut self) {
        if self.is_valid() {
            self.pos += 1;
        }
    }

    /// # Panics
    /// Panics if `key` is not exactly the store's record size.
    fn seek(&mut self, key: &[u8]) {
        self.pos = self.store.lower_bound(key);
    }

    fn seek_to_first(&mut self) {
        self.pos = 0;
    }
}

/// Yields the record under the cursor, then steps past it.
impl<'a, S> Iterator for RecordCursor<'a, S> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let record = self.store.get(self.pos)?;
        self.pos += 1;
        Some(record)
    }
}
