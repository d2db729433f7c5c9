//! Structured error types for gapalign.

use thiserror::Error;

/// Unified error type for all alignment operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// Invalid input (negative penalties, declared lengths that disagree with the data)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A matrix or CIGAR buffer could not be reserved
    #[error("allocation failure: could not reserve {requested} elements")]
    AllocationFailure { requested: usize },

    /// Traceback reached a cell that no recurrence term explains
    #[error("internal inconsistency: no valid predecessor at cell ({i}, {j})")]
    InternalInconsistency { i: usize, j: usize },

    /// Malformed CIGAR string
    #[error("parse error: {0}")]
    Parse(String),

    /// An alignment failed verification against its input sequences
    #[error("alignment check failed: {0}")]
    CheckFailed(String),
}

/// Convenience alias used throughout gapalign.
pub type Result<T> = std::result::Result<T, AlignError>;
