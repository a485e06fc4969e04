//! Error types for the seq crate.

use thiserror::Error;

/// Errors that can occur when reading from a sequence.
///
/// Absence is never an error in this crate: lookups that may miss return
/// `Option`. Only caller-supplied positions that cannot be valid fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Position falls outside the sequence after negative-index normalization.
    #[error("nth: {index} out of slice bounds")]
    OutOfRange { index: isize, len: usize },
}

/// Result type for seq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
