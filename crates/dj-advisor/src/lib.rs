//! Advice synthesis and auspicious-time search for the Dunjia engine.
//!
//! [`advise`] turns an analysis into a short structured recommendation —
//! tone, action, time window, warning. [`find_auspicious_times`] wraps the
//! chart builder, analyzer, and advice generator in a bounded search over
//! a future time range and ranks the best time/direction candidates.

/// Advice generation.
pub mod advice;
/// Error types for the crate.
pub mod error;
/// The auspicious time/direction optimizer.
pub mod optimizer;
/// Two-hour chart-validity windows.
pub mod window;

/// Re-export advice types.
pub use advice::{AdviceDetails, AdviceResult, Tone, advise};
/// Re-export error types.
pub use error::AdvisorError;
/// Re-export optimizer types.
pub use optimizer::{AuspiciousResult, RangeSelector, find_auspicious_times};
/// Re-export window types.
pub use window::TimeWindow;
