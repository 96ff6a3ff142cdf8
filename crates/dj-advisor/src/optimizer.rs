//! The auspicious time/direction optimizer.
//!
//! Steps through a bounded future range in two-hour chart windows, builds
//! a chart per window, scores the affair's symbols in their owning
//! palaces, and ranks the survivors. Work is proportional to range length:
//! the presets cap at 24/72/168 hours, at most 84 chart builds per call.
//! Every window's chart build is independent; nothing is shared across
//! slots until the final sort.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use dj_analysis::{Affair, Industry, analyze};
use dj_chart::{Direction, Ju};
use serde::Serialize;

use crate::advice::AdviceDetails;
use crate::error::AdvisorError;
use crate::window::{TimeWindow, next_bucket_start};

/// Candidates below this score are discarded.
const SCORE_THRESHOLD: i32 = 60;

/// Maximum number of ranked results returned.
const TOP_N: usize = 5;

/// The search range for an optimizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeSelector {
    /// The next 24 hours.
    Today,
    /// The next 72 hours.
    ThreeDays,
    /// The next 168 hours.
    Week,
    /// One explicit civil day.
    Date(NaiveDate),
}

impl RangeSelector {
    /// Resolve the range to concrete bounds relative to `now`.
    pub fn bounds(self, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        let hour_start = now.date().and_hms_opt(now.hour(), 0, 0).unwrap_or(now);
        match self {
            Self::Today => (hour_start, hour_start + Duration::hours(24)),
            Self::ThreeDays => (hour_start, hour_start + Duration::hours(72)),
            Self::Week => (hour_start, hour_start + Duration::hours(168)),
            Self::Date(date) => {
                let start = date.and_hms_opt(0, 0, 0).unwrap_or(hour_start);
                (start, start + Duration::hours(24))
            }
        }
    }

    /// Parse a range from `today`, `3days`, `week`, or a `YYYY-MM-DD`
    /// date.
    pub fn parse(s: &str) -> Result<Self, AdvisorError> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "3days" | "three-days" | "threedays" => Ok(Self::ThreeDays),
            "week" => Ok(Self::Week),
            other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
                .map(Self::Date)
                .map_err(|_| AdvisorError::UnknownRange(s.to_string())),
        }
    }
}

impl std::str::FromStr for RangeSelector {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One ranked candidate from the optimizer.
#[derive(Debug, Clone, Serialize)]
pub struct AuspiciousResult {
    /// The composite score of the winning symbol in this window.
    pub score: i32,
    /// The two-hour window the chart is valid for.
    pub window: TimeWindow,
    /// The compass direction of the owning palace.
    pub direction: Direction,
    /// Advice details for this candidate.
    pub details: AdviceDetails,
}

/// Search a bounded range for the best time/direction candidates.
///
/// `now` anchors the relative presets; passing it explicitly keeps the
/// search a pure function. Results are sorted by descending score, carry
/// at most one entry per distinct window, and cap at five. A zero or
/// inverted range yields an empty list, never an error.
pub fn find_auspicious_times(
    affair: Affair,
    range: RangeSelector,
    industry: Option<Industry>,
    now: NaiveDateTime,
) -> Vec<AuspiciousResult> {
    let (start, end) = range.bounds(now);
    if end <= start {
        return Vec::new();
    }

    let symbols = affair.symbols(industry);
    let mut candidates = Vec::new();

    let mut slot = next_bucket_start(start);
    while slot < end {
        let ju = Ju::build(slot);
        let window = TimeWindow::containing(slot, ju.term);
        tracing::debug!(slot = %slot, term = %ju.term, "evaluating window");

        for symbol in symbols {
            let Some(palace) = symbol.resolve(&ju).owning_palace(&ju) else {
                continue;
            };
            // The centre has no direction to recommend.
            let Some(direction) = palace.direction() else {
                continue;
            };
            let analysis = analyze(&ju, palace, *symbol, industry);
            if analysis.scores.total < SCORE_THRESHOLD {
                continue;
            }
            candidates.push(AuspiciousResult {
                score: analysis.scores.total,
                window: window.clone(),
                direction,
                details: AdviceDetails::from_analysis(&analysis, &ju),
            });
        }

        slot += Duration::hours(2);
    }

    // Rank, keep the best symbol per window, cap.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.window.label.clone()));
    candidates.truncate(TOP_N);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn results_are_capped_and_sorted() {
        let results = find_auspicious_times(Affair::Investment, RangeSelector::Today, None, now());
        assert!(results.len() <= 5);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn results_meet_the_threshold() {
        let results = find_auspicious_times(Affair::Investment, RangeSelector::Today, None, now());
        assert!(results.iter().all(|r| r.score >= 60));
    }

    #[test]
    fn windows_are_distinct() {
        let results = find_auspicious_times(Affair::Investment, RangeSelector::Week, None, now());
        let mut labels: Vec<&str> = results.iter().map(|r| r.window.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), results.len());
    }

    #[test]
    fn windows_respect_the_range() {
        let (start, end) = RangeSelector::Today.bounds(now());
        let results = find_auspicious_times(Affair::Investment, RangeSelector::Today, None, now());
        for r in results {
            assert!(r.window.start >= start, "{} < {start}", r.window.start);
            assert!(r.window.start < end, "{} >= {end}", r.window.start);
        }
    }

    #[test]
    fn directions_come_from_the_eight_point_compass() {
        let results = find_auspicious_times(Affair::Investment, RangeSelector::Week, None, now());
        for r in results {
            assert!(Direction::all().contains(&r.direction));
        }
    }

    #[test]
    fn explicit_date_covers_that_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let results =
            find_auspicious_times(Affair::Contract, RangeSelector::Date(date), None, now());
        for r in results {
            // Windows start on the chosen day (the late 子 window of the
            // previous evening is excluded by the range start).
            assert!(r.window.start.date() == date);
        }
    }

    #[test]
    fn search_is_deterministic() {
        let a = find_auspicious_times(Affair::Exam, RangeSelector::ThreeDays, None, now());
        let b = find_auspicious_times(Affair::Exam, RangeSelector::ThreeDays, None, now());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.score, y.score);
            assert_eq!(x.window.label, y.window.label);
        }
    }

    #[test]
    fn industry_changes_the_symbol_set() {
        // The technology override swaps the investment symbols; scores
        // may differ but the machinery must not error and still ranks.
        let plain = find_auspicious_times(Affair::Investment, RangeSelector::Today, None, now());
        let tech = find_auspicious_times(
            Affair::Investment,
            RangeSelector::Today,
            Some(Industry::Technology),
            now(),
        );
        assert!(plain.len() <= 5 && tech.len() <= 5);
    }

    #[test]
    fn first_slot_aligns_to_a_bucket_boundary() {
        let results = find_auspicious_times(Affair::Opening, RangeSelector::Week, None, now());
        for r in results {
            assert!(r.window.start.time().minute() == 0);
            let h = r.window.start.time().hour();
            assert!(h % 2 == 1 || h == 23, "{h}");
        }
    }
}
