//! Palace state analysis, pattern recognition, and the symbol catalogs.
//!
//! Given a chart from `dj-chart`, this crate judges how a chosen symbol
//! fares in its palace ([`analyze`]), recognizes the named good and bad
//! configurations the palace forms ([`match_patterns`]), and owns the
//! static catalogs the whole engine consumes: the pattern catalog, the
//! affair book, and the industry priority table. Catalogs are immutable
//! process-wide data; nothing here mutates anything.

/// Affair and industry catalogs.
pub mod affair;
/// The palace state analyzer.
pub mod analyzer;
/// Error types for the crate.
pub mod error;
/// The pattern catalog and matcher.
pub mod pattern;
/// Life-cycle stages, punishment pairs, and state scoring tables.
pub mod state;

/// Re-export affair types.
pub use affair::{Affair, AffairConfig, Industry};
/// Re-export analyzer types.
pub use analyzer::{AnalysisResult, Scores, analyze, analyze_owning};
/// Re-export error types.
pub use error::AnalysisError;
/// Re-export pattern types.
pub use pattern::{Pattern, PatternClass, PatternKey, match_patterns};
/// Re-export state types.
pub use state::LifeStage;
