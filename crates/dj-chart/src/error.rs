//! Error types for the chart crate.

use thiserror::Error;

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors that can occur at the chart API boundary.
///
/// Chart construction itself never fails — configuration-data gaps degrade
/// to documented defaults. These errors cover caller input that cannot be
/// interpreted at all.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A palace index outside 1-9.
    #[error("invalid palace index: {0} (must be 1-9)")]
    InvalidPalaceIndex(u8),

    /// A symbol name failed to parse.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// A calendrical name failed to parse.
    #[error(transparent)]
    Almanac(#[from] dj_almanac::AlmanacError),
}
