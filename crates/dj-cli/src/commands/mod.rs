//! CLI subcommand implementations.

pub mod analyze;
pub mod ask;
pub mod auspicious;
pub mod catalogs;
pub mod chart;

use chrono::{Local, NaiveDateTime};

/// The current local time, naive.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a `--at` argument, defaulting to now.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD HH:MM`.
pub fn parse_at(arg: Option<&str>) -> Result<NaiveDateTime, String> {
    let Some(raw) = arg else {
        return Ok(now());
    };
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(t);
        }
    }
    Err(format!(
        "cannot parse timestamp '{raw}' (expected e.g. 2024-02-10T12:00)"
    ))
}
