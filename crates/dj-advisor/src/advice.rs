//! Advice generation: analysis → short structured recommendation.
//!
//! Pure template selection. The tone follows the composite score, the
//! action phrase follows the palace door, and the warning clause follows
//! the palace's deity and star. Identical inputs always yield identical
//! text.

use dj_analysis::AnalysisResult;
use dj_chart::{Deity, Door, Ju, Star};
use serde::{Deserialize, Serialize};

use crate::window::hour_span;

/// Score threshold for a positive reading.
const POSITIVE_THRESHOLD: i32 = 80;
/// Score threshold for a neutral reading.
const NEUTRAL_THRESHOLD: i32 = 60;

/// The overall tone of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// Favourable: act.
    Positive,
    /// Mixed: act with care.
    Neutral,
    /// Unfavourable: hold.
    Negative,
}

impl Tone {
    /// Tone for a composite score.
    pub fn for_score(score: i32) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score >= NEUTRAL_THRESHOLD {
            Self::Neutral
        } else {
            Self::Negative
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// A structured recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceResult {
    /// Short headline.
    pub title: String,
    /// The filled recommendation text.
    pub content: String,
    /// Overall tone.
    pub tone: Tone,
    /// Machine-readable tags (tone, direction, flags, pattern names).
    pub tags: Vec<String>,
}

/// The action each door counsels.
fn door_action(door: Door) -> &'static str {
    match door {
        Door::Open => "push formal applications and official channels",
        Door::Rest => "favour rest, recovery, and gentle negotiation",
        Door::Life => "move on livelihood matters: invest, open, expand",
        Door::Harm => "compete and collect what is owed, carefully",
        Door::Block => "seal leaks, archive, and keep out of sight",
        Door::View => "present, publish, and sit examinations",
        Door::Death => "settle closings and condolences only",
        Door::Fright => "prepare your words for disputes and hearings",
    }
}

/// The warning a malevolent deity attaches, if any.
fn deity_warning(deity: Deity) -> Option<&'static str> {
    match deity {
        Deity::BaiHu => Some("the white tiger warns of injury and force"),
        Deity::TengShe => Some("the coiling snake warns of entanglement and false alarms"),
        Deity::XuanWu => Some("the dark tortoise warns of theft and deception"),
        _ => None,
    }
}

/// The warning a fierce star attaches, if any.
fn star_warning(star: Star) -> Option<&'static str> {
    match star {
        Star::TianPeng => Some("the Peng star magnifies risk-taking"),
        Star::TianRui => Some("the Rui star drags on health and stamina"),
        _ => None,
    }
}

/// Generate a recommendation from an analysis.
///
/// No randomness: the same analysis of the same chart always renders the
/// same text.
pub fn advise(result: &AnalysisResult, ju: &Ju) -> AdviceResult {
    let tone = Tone::for_score(result.scores.total);
    let palace = ju.palace(result.palace);

    let direction = result
        .palace
        .direction()
        .map_or_else(|| "centre".to_string(), |d| d.name().to_string());
    let window = hour_span(ju.pillars.hour.branch);
    let action = door_action(palace.door);

    let pattern_descriptor = result
        .patterns
        .first()
        .map(|p| format!("{} ({})", p.chinese, p.name))
        .unwrap_or_else(|| format!("{} {}", result.seasonal_state.chinese(), result.symbol));

    let mut warnings: Vec<&str> = Vec::new();
    if let Some(w) = deity_warning(palace.deity) {
        warnings.push(w);
    }
    if let Some(w) = star_warning(palace.star) {
        warnings.push(w);
    }
    let warning_clause = if warnings.is_empty() {
        String::new()
    } else {
        format!(" Caution: {}.", warnings.join("; "))
    };

    let content = match tone {
        Tone::Positive => format!(
            "{pattern_descriptor} favours you: during {window}, face {direction} and {action}.{warning_clause}"
        ),
        Tone::Neutral => format!(
            "{pattern_descriptor} is workable: during {window} you may face {direction} and {action}, but keep commitments small.{warning_clause}"
        ),
        Tone::Negative => format!(
            "{pattern_descriptor} stands against you: avoid the {direction} direction during {window}; if you must act, {action}.{warning_clause}"
        ),
    };

    let title = format!("{} in the {} palace", result.symbol, result.palace.name());

    let mut tags = vec![tone.to_string(), direction];
    if result.is_void {
        tags.push("void".to_string());
    }
    if result.in_grave {
        tags.push("grave".to_string());
    }
    if result.punished {
        tags.push("punished".to_string());
    }
    tags.extend(result.patterns.iter().map(|p| p.chinese.to_string()));

    AdviceResult {
        title,
        content,
        tone,
        tags,
    }
}

/// The advice details attached to one optimizer candidate.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceDetails {
    /// The leading pattern's Chinese name, if any pattern matched.
    pub pattern: Option<String>,
    /// Overall tone.
    pub tone: Tone,
    /// The filled recommendation text.
    pub advice: String,
    /// Warning clauses in effect.
    pub warnings: Vec<String>,
    /// Machine-readable tags.
    pub tags: Vec<String>,
}

impl AdviceDetails {
    /// Build the details block for a candidate.
    pub fn from_analysis(result: &AnalysisResult, ju: &Ju) -> Self {
        let advice = advise(result, ju);
        let palace = ju.palace(result.palace);
        let mut warnings = Vec::new();
        if let Some(w) = deity_warning(palace.deity) {
            warnings.push(w.to_string());
        }
        if let Some(w) = star_warning(palace.star) {
            warnings.push(w.to_string());
        }
        Self {
            pattern: result.patterns.first().map(|p| p.chinese.to_string()),
            tone: advice.tone,
            advice: advice.content,
            warnings,
            tags: advice.tags,
        }
    }
}
