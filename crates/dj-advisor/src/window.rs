//! Two-hour chart-validity windows.
//!
//! A chart is valid for the two-hour branch window its timestamp falls in.
//! The 子 window straddles midnight: it starts at 23:00 and its label
//! carries the date of that evening.

use chrono::{Duration, NaiveDateTime, Timelike};
use dj_almanac::{Branch, SolarTerm};
use serde::{Deserialize, Serialize};

/// One two-hour window a chart is valid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (a bucket boundary).
    pub start: NaiveDateTime,
    /// Window end (start + 2 hours).
    pub end: NaiveDateTime,
    /// Human label, unique per distinct window (carries the date).
    pub label: String,
    /// The branch governing the window.
    pub branch: Branch,
    /// The solar term governing the window's chart.
    pub term: SolarTerm,
}

impl TimeWindow {
    /// The window containing a timestamp.
    pub fn containing(t: NaiveDateTime, term: SolarTerm) -> Self {
        let start = bucket_start(t);
        let branch = Branch::of_hour(start.hour());
        Self {
            end: start + Duration::hours(2),
            label: format!(
                "{} {}时 ({})",
                start.format("%Y-%m-%d"),
                branch.chinese(),
                hour_span(branch)
            ),
            start,
            branch,
            term,
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The clock span of a branch's window.
pub fn hour_span(branch: Branch) -> &'static str {
    match branch {
        Branch::Zi => "23:00-01:00",
        Branch::Chou => "01:00-03:00",
        Branch::Yin => "03:00-05:00",
        Branch::Mao => "05:00-07:00",
        Branch::Chen => "07:00-09:00",
        Branch::Si => "09:00-11:00",
        Branch::Wu => "11:00-13:00",
        Branch::Wei => "13:00-15:00",
        Branch::Shen => "15:00-17:00",
        Branch::You => "17:00-19:00",
        Branch::Xu => "19:00-21:00",
        Branch::Hai => "21:00-23:00",
    }
}

/// The start of the two-hour window containing a timestamp.
pub fn bucket_start(t: NaiveDateTime) -> NaiveDateTime {
    let date = t.date();
    let hour = t.hour();
    let base = date.and_hms_opt(0, 0, 0).unwrap_or(t);
    if hour == 0 {
        // The 子 window opened at 23:00 the evening before.
        base - Duration::hours(1)
    } else if hour % 2 == 1 {
        base + Duration::hours(i64::from(hour))
    } else {
        base + Duration::hours(i64::from(hour) - 1)
    }
}

/// The first window start at or after a timestamp.
pub fn next_bucket_start(t: NaiveDateTime) -> NaiveDateTime {
    let start = bucket_start(t);
    if start == t {
        start
    } else {
        start + Duration::hours(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn bucket_starts_on_odd_hours() {
        assert_eq!(bucket_start(at(8, 30)), at(7, 0));
        assert_eq!(bucket_start(at(7, 0)), at(7, 0));
        assert_eq!(bucket_start(at(12, 59)), at(11, 0));
        assert_eq!(bucket_start(at(23, 15)), at(23, 0));
    }

    #[test]
    fn midnight_belongs_to_the_previous_evening() {
        let start = bucket_start(at(0, 30));
        assert_eq!(
            start,
            NaiveDate::from_ymd_opt(2024, 2, 9)
                .unwrap()
                .and_hms_opt(23, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn next_bucket_is_exclusive_unless_aligned() {
        assert_eq!(next_bucket_start(at(7, 0)), at(7, 0));
        assert_eq!(next_bucket_start(at(7, 1)), at(9, 0));
        assert_eq!(next_bucket_start(at(8, 0)), at(9, 0));
    }

    #[test]
    fn window_label_carries_date_and_branch() {
        let w = TimeWindow::containing(at(12, 0), SolarTerm::LiChun);
        assert_eq!(w.start, at(11, 0));
        assert_eq!(w.end, at(13, 0));
        assert!(w.label.contains("2024-02-10"));
        assert!(w.label.contains("午时"));
        assert_eq!(w.branch, Branch::Wu);
    }

    #[test]
    fn consecutive_windows_have_distinct_labels() {
        let a = TimeWindow::containing(at(11, 0), SolarTerm::LiChun);
        let b = TimeWindow::containing(at(13, 0), SolarTerm::LiChun);
        assert_ne!(a.label, b.label);
    }
}
