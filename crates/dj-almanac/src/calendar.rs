//! Civil timestamp to four-pillar conversion.
//!
//! Day pillars count sexagenary days from the epoch anchor (1970-01-01 was
//! a 辛巳 day, cycle position 17). The civil day rolls at 23:00: the late
//! 子 hour belongs to the following day, so both the day and hour pillars
//! advance there. Year and month pillars follow the solar terms — the year
//! rolls at 立春, the month at each odd term.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::solar_term::SolarTerm;
use crate::stem::Stem;

/// Sexagenary cycle position of the epoch day 1970-01-01 (辛巳).
const EPOCH_DAY_INDEX: i64 = 17;

/// The four pillars of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    /// The year pillar (rolls at 立春).
    pub year: Pillar,
    /// The month pillar (rolls at each odd solar term).
    pub month: Pillar,
    /// The day pillar (rolls at 23:00).
    pub day: Pillar,
    /// The hour pillar (two-hour windows).
    pub hour: Pillar,
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.chinese(),
            self.month.chinese(),
            self.day.chinese(),
            self.hour.chinese()
        )
    }
}

/// The sexagenary day pillar for a civil date (no 23:00 roll applied).
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(date);
    let days = (date - epoch).num_days();
    Pillar::from_sexagenary_index((EPOCH_DAY_INDEX + days).rem_euclid(60) as usize)
}

/// Compute the four pillars of a timestamp.
pub fn four_pillars(t: NaiveDateTime) -> FourPillars {
    let date = t.date();
    let hour = t.hour();

    // Day and hour: the civil day rolls at 23:00.
    let effective_date = if hour >= 23 {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    };
    let day = day_pillar(effective_date);

    let hour_branch = Branch::of_hour(hour);
    let hour_stem = Stem::from_index((day.stem.index() % 5) * 2 + hour_branch.index());
    let hour_pillar = Pillar::new(hour_stem, hour_branch);

    // Year: rolls at 立春.
    let (lichun_month, lichun_day) = SolarTerm::LiChun.approx_date();
    let solar_year = if (date.month(), date.day()) < (lichun_month, lichun_day) {
        date.year() - 1
    } else {
        date.year()
    };
    let year = Pillar::new(
        Stem::from_index((solar_year - 4).rem_euclid(10) as usize),
        Branch::from_index((solar_year - 4).rem_euclid(12) as usize),
    );

    // Month: branch from the governing term's month, stem by the
    // five-tigers rule off the year stem.
    let month_ordinal = match SolarTerm::preceding(date) {
        Some((term, _)) => term.month_ordinal(),
        None => {
            tracing::warn!(date = %date, "no solar term found; defaulting to the first month");
            1
        }
    };
    let first_month_stem = (year.stem.index() % 5) * 2 + 2;
    let month = Pillar::new(
        Stem::from_index(first_month_stem + month_ordinal - 1),
        Branch::from_index(2 + month_ordinal - 1),
    );

    FourPillars {
        year,
        month,
        day,
        hour: hour_pillar,
    }
}

/// The four pillars together with the governing solar term — the full
/// calendrical input a chart build needs.
pub fn pillars_and_term(t: NaiveDateTime) -> (FourPillars, Option<(SolarTerm, NaiveDate)>) {
    (four_pillars(t), SolarTerm::preceding(t.date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn epoch_day_is_xinsi() {
        let p = day_pillar(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(p.chinese(), "辛巳");
    }

    #[test]
    fn millennium_day_is_wuwu() {
        let p = day_pillar(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(p.chinese(), "戊午");
    }

    #[test]
    fn founding_day_pillars() {
        // 1949-10-01 noon: 己丑 year, 癸酉 month, 甲子 day, 庚午 hour.
        let fp = four_pillars(at(1949, 10, 1, 12, 0));
        assert_eq!(fp.year.chinese(), "己丑");
        assert_eq!(fp.month.chinese(), "癸酉");
        assert_eq!(fp.day.chinese(), "甲子");
        assert_eq!(fp.hour.chinese(), "庚午");
    }

    #[test]
    fn late_zi_hour_rolls_the_day() {
        let before = four_pillars(at(2000, 1, 1, 22, 30));
        let late = four_pillars(at(2000, 1, 1, 23, 30));
        assert_eq!(before.day.chinese(), "戊午");
        assert_eq!(late.day.chinese(), "己未");
        assert_eq!(late.hour.branch, Branch::Zi);
        // 己 day, 子 hour -> 甲子 hour by the five-rats rule.
        assert_eq!(late.hour.chinese(), "甲子");
    }

    #[test]
    fn year_rolls_at_lichun() {
        let before = four_pillars(at(2024, 2, 3, 12, 0));
        let after = four_pillars(at(2024, 2, 4, 12, 0));
        assert_eq!(before.year.chinese(), "癸卯");
        assert_eq!(after.year.chinese(), "甲辰");
    }

    #[test]
    fn month_stem_follows_five_tigers() {
        // 甲辰 year, first month (寅) opens with 丙.
        let fp = four_pillars(at(2024, 2, 10, 12, 0));
        assert_eq!(fp.month.chinese(), "丙寅");
    }

    #[test]
    fn pillars_are_deterministic() {
        let a = four_pillars(at(2024, 6, 1, 8, 0));
        let b = four_pillars(at(2024, 6, 1, 8, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn term_accompanies_pillars() {
        let (_, term) = pillars_and_term(at(2024, 2, 10, 12, 0));
        assert_eq!(term.map(|(t, _)| t), Some(SolarTerm::LiChun));
    }
}
