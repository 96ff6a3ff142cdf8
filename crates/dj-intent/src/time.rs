//! Timestamp extraction from free text.
//!
//! Two independent passes: a relative-day keyword (or "next week X"
//! phrase) fixes the date, and a time-of-day expression (period word +
//! hour, optionally minutes, arabic or simple Chinese numerals) refines
//! the clock time.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use regex::Regex;

/// Relative-day keywords, longest first so 大后天 wins over 后天.
const RELATIVE_DAYS: &[(&str, i64)] = &[
    ("大后天", 3),
    ("后天", 2),
    ("明天", 1),
    ("明日", 1),
    ("今天", 0),
    ("今日", 0),
];

/// Weekday characters for 下周X phrases, Monday first.
const WEEKDAYS: &[(&str, i64)] = &[
    ("一", 0),
    ("二", 1),
    ("三", 2),
    ("四", 3),
    ("五", 4),
    ("六", 5),
    ("日", 6),
    ("天", 6),
];

/// Period word + hour + optional minutes, e.g. 下午3点15分 or 晚上十点半.
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(凌晨|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜里|深夜)?\
         ([0-9]{1,2}|[一二三四五六七八九十两]{1,3})[点时]\
         (半|[0-9]{1,2}分?|[一二三四五六七八九十]{1,3}分)?",
    )
    .unwrap_or_else(|e| panic!("time-of-day regex: {e}"))
});

/// Plain clock time, e.g. 15:30.
static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("([0-9]{1,2})[:：]([0-9]{2})").unwrap_or_else(|e| panic!("clock regex: {e}"))
});

/// Parse an arabic or simple Chinese numeral (covers 0-59).
fn parse_number(s: &str) -> Option<u32> {
    if s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse().ok();
    }
    let digit = |c: char| -> Option<u32> {
        "一二三四五六七八九".find(c).map(|i| (i / 3 + 1) as u32)
    };
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['两'] => Some(2),
        ['十'] => Some(10),
        ['十', u] => digit(*u).map(|u| 10 + u),
        [t, '十'] => digit(*t).map(|t| t * 10),
        [t, '十', u] => match (digit(*t), digit(*u)) {
            (Some(t), Some(u)) => Some(t * 10 + u),
            _ => None,
        },
        [c] => digit(*c),
        _ => None,
    }
}

/// Shift an ambiguous 12-hour value into the 24-hour clock.
fn apply_period(period: &str, hour: u32) -> u32 {
    match period {
        "下午" | "午后" | "傍晚" | "晚上" if hour < 12 => hour + 12,
        "夜里" | "深夜" if (6..12).contains(&hour) => hour + 12,
        "中午" if hour <= 1 => hour + 12,
        _ => hour,
    }
}

/// Extract a date from a relative-day keyword or a 下周X phrase.
///
/// Returns the date, the matched phrase, and nothing else; absence is not
/// an error.
pub fn extract_date(text: &str, today: NaiveDate) -> Option<(NaiveDate, String)> {
    for (keyword, offset) in RELATIVE_DAYS {
        if text.contains(keyword) {
            return Some((today + Duration::days(*offset), (*keyword).to_string()));
        }
    }
    if let Some(pos) = text.find("下周").or_else(|| text.find("下星期")) {
        let after = if text[pos..].starts_with("下星期") {
            &text[pos + "下星期".len()..]
        } else {
            &text[pos + "下周".len()..]
        };
        let next = after.chars().next()?;
        for (ch, offset) in WEEKDAYS {
            if ch.chars().next() == Some(next) {
                // Monday of next week, then the named day.
                let days_to_monday =
                    7 - i64::from(today.weekday().num_days_from_monday());
                let date = today + Duration::days(days_to_monday + offset);
                return Some((date, format!("下周{next}")));
            }
        }
    }
    None
}

/// Extract a clock time from the text.
pub fn extract_time(text: &str) -> Option<(NaiveTime, String)> {
    if let Some(caps) = TIME_OF_DAY.captures(text) {
        let period = caps.get(1).map_or("", |m| m.as_str());
        let hour_raw = parse_number(caps.get(2)?.as_str())?;
        if hour_raw > 23 {
            return None;
        }
        let minute = match caps.get(3).map(|m| m.as_str()) {
            Some("半") => 30,
            Some(raw) => parse_number(raw.trim_end_matches('分')).filter(|m| *m < 60)?,
            None => 0,
        };
        let hour = apply_period(period, hour_raw);
        let time = NaiveTime::from_hms_opt(hour % 24, minute, 0)?;
        return Some((time, format!("{period}{}点", caps.get(2)?.as_str())));
    }
    if let Some(caps) = CLOCK.captures(text) {
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        return Some((time, caps.get(0)?.as_str().to_string()));
    }
    None
}
