use super::RecordStore;

impl<S> RecordStore<S> {
    /// Insert a single key. Returns false if it was already present.
    ///
    /// Shifts every record at or after the insertion slot one slot right, so
    /// this is O(len).
    ///
    /// # Panics
    /// Panics if `key` is not exactly `record_size()` bytes.
    pub fn insert(&mut self, key: &[u8]) -> bool {
        let (pos, found) = self.find(key);
        if found {
            return false;
        }

        let w = self.record_size;
        let at = pos * w;
        let old_len = self.data.len();
        self.data.resize(old_len + w, 0);
        self.data.copy_within(at..old_len, at + w);
        self.data[at..at + w].copy_from_slice(key);
        true
    }

    /// Remove a single key. Returns false if it was not present.
    ///
    /// # Panics
    /// Panics if `key` is not exactly `record_size()` bytes.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        let (pos, found) = self.find(key);
        if !found {
            return false;
        }

        let w = self.record_size;
        self.data.drain(pos * w..(pos + 1) * w);
        true
    }
}
