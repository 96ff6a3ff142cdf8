//! Error types for the advisor crate.

use thiserror::Error;

/// Errors that can occur at the advisor API boundary.
///
/// The search itself never fails — an empty or inverted range yields an
/// empty result list. These errors cover caller input that cannot be
/// interpreted.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// A range selector failed to parse.
    #[error("unknown range: {0} (expected today, 3days, week, or YYYY-MM-DD)")]
    UnknownRange(String),

    /// An analysis-level name failed to parse.
    #[error(transparent)]
    Analysis(#[from] dj_analysis::AnalysisError),
}
