use std::fmt;

use super::RecordStore;
use crate::successor::BigEndianSuccessor;

/// A store that may not have been created yet.
///
/// Membership on an unset store is simply "absent", so callers holding an
/// optional store can query it without unwrapping first.
#[derive(Clone)]
pub struct MaybeStore<S = BigEndianSuccessor> {
    inner: Option<RecordStore<S>>,
}

impl<S> MaybeStore<S> {
    /// An unset store.
    pub fn none() -> Self {
        MaybeStore { inner: None }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// False when unset.
    ///
    /// # Panics
    /// Panics if a store is set and `key` is not exactly its record size.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.inner.as_ref().is_some_and(|store| store.contains(key))
    }

    /// Zero when unset.
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, RecordStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self) -> Option<&RecordStore<S>> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut RecordStore<S>> {
        self.inner.as_mut()
    }

    /// Install `store`, returning the previous one.
    pub fn set(&mut self, store: RecordStore<S>) -> Option<RecordStore<S>> {
        self.inner.replace(store)
    }

    pub fn take(&mut self) -> Option<RecordStore<S>> {
        self.inner.take()
    }
}

impl<S> fmt::Debug for MaybeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaybeStore").field(&self.inner).finish()
    }
}

impl<S> Default for MaybeStore<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S> From<RecordStore<S>> for MaybeStore<S> {
    fn from(store: RecordStore<S>) -> Self {
        MaybeStore { inner: Some(store) }
    }
}

impl<S> From<Option<RecordStore<S>>> for MaybeStore<S> {
    fn from(inner: Option<RecordStore<S>>) -> Self {
        MaybeStore { inner }
    }
}
