//! # Sorted fixed-width record store
//!
//! An ordered set of constant-length binary keys (IPv4/IPv6 addresses,
//! hashes, any fixed-size identifier) kept in one contiguous `Vec<u8>`.
//!
//! ## Core idea
//! Instead of a tree or hash table, records sit back to back in sorted
//! order. Lookups are binary searches over slot indices and single-key
//! updates shift the buffer tail. Ranges of consecutive keys are inserted
//! and removed by slot arithmetic alone: if the number of records already
//! between `base` and `base + num` equals `num`, the range is complete.
//!
//! ```
//! use record_store::RecordStore;
//!
//! let mut set = RecordStore::new(Vec::new(), 4).unwrap();
//! set.insert_range(&[10, 0, 0, 0], 256).unwrap();
//! assert!(set.contains(&[10, 0, 0, 42]));
//! assert_eq!(set.len(), 256);
//! ```

pub mod cursor;
pub mod error;
pub mod store;
pub mod successor;
pub mod types;

// Public re-exports for the top-level API
pub use cursor::{RecordCursor, RecordIterator};
pub use error::{Error, Result};
pub use store::RecordStore;
pub use store::maybe::MaybeStore;
pub use successor::{BigEndianSuccessor, Successor};
pub use types::Options;
