//! Calendrical foundation for the Dunjia engine.
//!
//! This crate owns the vocabulary every other crate builds on: the five
//! elements, the ten heavenly stems, the twelve earthly branches, sexagenary
//! (ganzhi) pillar arithmetic, and the 24 solar terms. Its entry point is
//! [`four_pillars`], which turns a civil timestamp into the year/month/day/
//! hour pillars, and [`SolarTerm::preceding`], which finds the solar term
//! governing a date.
//!
//! Everything here is pure table lookup and modular arithmetic — no I/O,
//! no shared state. The solar-term dates are the fixed civil-calendar
//! approximations traditionally used by charting software, not an
//! ephemeris; they can be off by a day around term boundaries.

/// Earthly branches and their fixed attributes.
pub mod branch;
/// Civil timestamp to four-pillar conversion.
pub mod calendar;
/// The five elements and their mutual relations.
pub mod element;
/// Error types for the crate.
pub mod error;
/// Stem+branch pillars and sexagenary arithmetic.
pub mod pillar;
/// The 24 solar terms: dates, seasons, and chart configuration numbers.
pub mod solar_term;
/// Heavenly stems and their fixed attributes.
pub mod stem;

/// Re-export branch types.
pub use branch::Branch;
/// Re-export the four-pillar conversion.
pub use calendar::{FourPillars, day_pillar, four_pillars, pillars_and_term};
/// Re-export element types.
pub use element::{Element, Polarity, Relation, SeasonalState};
/// Re-export error types.
pub use error::{AlmanacError, AlmanacResult};
/// Re-export pillar types.
pub use pillar::{Pillar, Yuan};
/// Re-export solar-term types.
pub use solar_term::SolarTerm;
/// Re-export stem types.
pub use stem::Stem;
