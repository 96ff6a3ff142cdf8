//! Error types for the analysis crate.

use thiserror::Error;

/// Errors that can occur at the analysis API boundary.
///
/// Analysis itself never fails — a symbol with no owning palace is simply
/// skipped by callers, and catalog gaps degrade to defaults. These errors
/// cover caller input that cannot be interpreted.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An affair key failed to parse.
    #[error("unknown affair: {0}")]
    UnknownAffair(String),

    /// An industry key failed to parse.
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    /// A chart-level name failed to parse.
    #[error(transparent)]
    Chart(#[from] dj_chart::ChartError),
}
