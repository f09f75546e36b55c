use thiserror::Error;

/// Unified error type for the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key argument was not exactly one record wide.
    ///
    /// Lookups and mutators treat this as a caller bug and panic with this
    /// message instead of returning it.
    #[error("invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    /// Initial data does not split into whole records.
    #[error("buffer length {len} is not a multiple of record size {record_size}")]
    InvalidBufferLength { len: usize, record_size: usize },

    /// Bad constructor or range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `base + num` does not fit in the record width, so a range has no
    /// representable upper bound.
    #[error("range end overflows the record width")]
    RangeOverflow,
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
