//! Error types for the calendrical foundation.

use thiserror::Error;

/// Result type for almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// Errors that can occur while parsing calendrical names.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// A stem name failed to parse.
    #[error("unknown stem: {0}")]
    UnknownStem(String),

    /// A branch name failed to parse.
    #[error("unknown branch: {0}")]
    UnknownBranch(String),

    /// A solar-term name failed to parse.
    #[error("unknown solar term: {0}")]
    UnknownSolarTerm(String),
}
