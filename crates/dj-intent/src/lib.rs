//! Free-text intent parser for Dunjia queries.
//!
//! [`parse_intent`] extracts a timestamp, an affair key, and an industry
//! key from unstructured Chinese text, to drive the optimizer or a direct
//! single-chart query. Matching is best-effort and total: unmatched input
//! yields an empty result with confidence 0, never an error and never a
//! panic.

/// Affair and industry keyword tables.
pub mod keywords;
/// Timestamp extraction.
pub mod time;

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use dj_analysis::{Affair, Industry};

/// Confidence contribution of a matched timestamp.
const TIME_WEIGHT: f32 = 0.3;
/// Confidence contribution of a matched affair.
const AFFAIR_WEIGHT: f32 = 0.5;
/// Confidence contribution of a matched industry.
const INDUSTRY_WEIGHT: f32 = 0.2;

/// Default clock time when only a day was recognized.
const DEFAULT_HOUR: u32 = 9;

/// The parsed intent of a free-text query.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedIntent {
    /// The extracted timestamp, if any; defaults to `now` when an affair
    /// or industry matched without an explicit time.
    pub timestamp: Option<NaiveDateTime>,
    /// The matched affair, if any.
    pub affair: Option<Affair>,
    /// The matched industry, if any.
    pub industry: Option<Industry>,
    /// Accumulated confidence in [0, 1].
    pub confidence: f32,
    /// Human-readable notes on what matched.
    pub explanations: Vec<String>,
}

/// Parse a free-text query.
///
/// `now` anchors relative-day phrases and serves as the fallback
/// timestamp. The function is total: any string, including the empty
/// string, yields a result; with no recognizable vocabulary the
/// confidence is 0.
pub fn parse_intent(text: &str, now: NaiveDateTime) -> ParsedIntent {
    let mut confidence = 0.0_f32;
    let mut explanations = Vec::new();

    let date_match = time::extract_date(text, now.date());
    let time_match = time::extract_time(text);

    let timestamp = match (&date_match, &time_match) {
        (Some((date, phrase)), Some((clock, time_phrase))) => {
            explanations.push(format!("matched day '{phrase}' and time '{time_phrase}'"));
            Some(date.and_time(*clock))
        }
        (Some((date, phrase)), None) => {
            explanations.push(format!(
                "matched day '{phrase}', defaulting to {DEFAULT_HOUR:02}:00"
            ));
            Some(date.and_time(
                NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap_or_default(),
            ))
        }
        (None, Some((clock, time_phrase))) => {
            explanations.push(format!("matched time '{time_phrase}' on the current day"));
            Some(now.date().and_time(*clock))
        }
        (None, None) => None,
    };
    if timestamp.is_some() {
        confidence += TIME_WEIGHT;
    }

    let affair = keywords::match_affair(text).map(|(affair, keyword)| {
        explanations.push(format!("matched affair keyword '{keyword}' -> {affair}"));
        confidence += AFFAIR_WEIGHT;
        affair
    });

    let industry = keywords::match_industry(text).map(|(industry, keyword)| {
        explanations.push(format!("matched industry keyword '{keyword}' -> {industry}"));
        confidence += INDUSTRY_WEIGHT;
        industry
    });

    // A recognized affair or industry without a time reads as "now".
    let timestamp = match timestamp {
        Some(t) => Some(t),
        None if affair.is_some() || industry.is_some() => {
            explanations.push("no time expression; defaulting to now".to_string());
            Some(now)
        }
        None => None,
    };

    if timestamp.is_none() && affair.is_none() && industry.is_none() {
        explanations.push("no recognizable intent vocabulary".to_string());
    }

    ParsedIntent {
        timestamp,
        affair,
        industry,
        confidence: confidence.min(1.0),
        explanations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn contract_tomorrow_afternoon() {
        let intent = parse_intent("明天下午3点签合同", now());
        assert_eq!(
            intent.timestamp,
            NaiveDate::from_ymd_opt(2024, 2, 11)
                .unwrap()
                .and_hms_opt(15, 0, 0)
        );
        assert_eq!(intent.affair, Some(Affair::Contract));
        assert!(intent.confidence > 0.75);
    }

    #[test]
    fn affair_without_time_defaults_to_now() {
        let intent = parse_intent("想去面试", now());
        assert_eq!(intent.timestamp, Some(now()));
        assert_eq!(intent.affair, Some(Affair::JobInterview));
    }

    #[test]
    fn day_without_clock_defaults_to_morning() {
        let intent = parse_intent("明天出门", now());
        assert_eq!(
            intent.timestamp,
            NaiveDate::from_ymd_opt(2024, 2, 11)
                .unwrap()
                .and_hms_opt(9, 0, 0)
        );
        assert_eq!(intent.affair, Some(Affair::Travel));
    }

    #[test]
    fn industry_contributes_confidence() {
        let with = parse_intent("做金融的想投资", now());
        let without = parse_intent("想投资", now());
        assert_eq!(with.industry, Some(Industry::Finance));
        assert!(with.confidence > without.confidence);
    }

    #[test]
    fn lost_phone_disambiguation() {
        let intent = parse_intent("昨天丢了手机去哪找", now());
        assert_eq!(intent.affair, Some(Affair::LostElectronics));
    }

    #[test]
    fn empty_input_is_confidence_zero() {
        let intent = parse_intent("", now());
        assert_eq!(intent.confidence, 0.0);
        assert_eq!(intent.timestamp, None);
        assert_eq!(intent.affair, None);
        assert_eq!(intent.industry, None);
        assert!(!intent.explanations.is_empty());
    }

    #[test]
    fn vocabulary_free_input_is_confidence_zero() {
        let intent = parse_intent("the quick brown fox", now());
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn confidence_is_capped() {
        let intent = parse_intent("明天下午3点去金融公司面试", now());
        assert!(intent.confidence <= 1.0);
        assert_eq!(intent.affair, Some(Affair::JobInterview));
        assert_eq!(intent.industry, Some(Industry::Finance));
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_input(text in "\\PC*") {
            let intent = parse_intent(&text, now());
            prop_assert!(intent.confidence >= 0.0 && intent.confidence <= 1.0);
        }

        #[test]
        fn never_panics_on_chinese_soup(text in "[\\u4e00-\\u9fa5 0-9点时分半：:]{0,40}") {
            let _ = parse_intent(&text, now());
        }
    }
}
