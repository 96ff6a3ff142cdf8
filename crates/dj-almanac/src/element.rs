//! The five elements (wu xing) and their mutual relations.
//!
//! The generating cycle runs wood → fire → earth → metal → water → wood;
//! the overcoming cycle runs wood → earth → water → fire → metal → wood.
//! Every pairwise comparison reduces to exactly one [`Relation`].

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Wood (木).
    Wood,
    /// Fire (火).
    Fire,
    /// Earth (土).
    Earth,
    /// Metal (金).
    Metal,
    /// Water (水).
    Water,
}

impl Element {
    /// All five elements in generating-cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Wood,
            Self::Fire,
            Self::Earth,
            Self::Metal,
            Self::Water,
        ]
    }

    /// The element this one generates.
    pub fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes.
    pub fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Classify the relation from `self` towards `other`.
    pub fn relation_to(self, other: Self) -> Relation {
        if self == other {
            Relation::Same
        } else if self.generates() == other {
            Relation::Generates
        } else if other.generates() == self {
            Relation::GeneratedBy
        } else if self.overcomes() == other {
            Relation::Overcomes
        } else {
            Relation::OvercomeBy
        }
    }

    /// The Chinese character for this element.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Metal => write!(f, "Metal"),
            Self::Water => write!(f, "Water"),
        }
    }
}

/// The relation of one element towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Both are the same element.
    Same,
    /// The first generates the second.
    Generates,
    /// The first is generated by the second.
    GeneratedBy,
    /// The first overcomes the second.
    Overcomes,
    /// The first is overcome by the second.
    OvercomeBy,
}

/// The seasonal strength of an element, judged against the season's
/// governing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonalState {
    /// 旺 — the element is the season's own.
    Prosperous,
    /// 相 — the season generates the element.
    Supported,
    /// 休 — the element generates the season and is spent doing so.
    Depleting,
    /// 囚 — the season overcomes the element.
    Suppressed,
    /// 死 — the element overcomes the season, ruling but unsupported.
    Dominant,
}

impl SeasonalState {
    /// Classify `element` against the season's governing element.
    pub fn classify(element: Element, season: Element) -> Self {
        match element.relation_to(season) {
            Relation::Same => Self::Prosperous,
            Relation::GeneratedBy => Self::Supported,
            Relation::Generates => Self::Depleting,
            Relation::OvercomeBy => Self::Suppressed,
            Relation::Overcomes => Self::Dominant,
        }
    }

    /// The Chinese label for this state.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Prosperous => "旺",
            Self::Supported => "相",
            Self::Depleting => "休",
            Self::Suppressed => "囚",
            Self::Dominant => "死",
        }
    }
}

impl std::fmt::Display for SeasonalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prosperous => write!(f, "Prosperous"),
            Self::Supported => write!(f, "Supported"),
            Self::Depleting => write!(f, "Depleting"),
            Self::Suppressed => write!(f, "Suppressed"),
            Self::Dominant => write!(f, "Dominant"),
        }
    }
}

/// Yin/yang polarity, shared by stems, branches, and the chart escapement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Yang (阳).
    Yang,
    /// Yin (阴).
    Yin,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "Yang"),
            Self::Yin => write!(f, "Yin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn overcoming_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.overcomes();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn relation_covers_all_pairs() {
        for a in Element::all() {
            let mut seen = vec![];
            for b in Element::all() {
                seen.push(a.relation_to(*b));
            }
            // One of each relation per row: same, generates, generated-by,
            // overcomes, overcome-by.
            assert!(seen.contains(&Relation::Same));
            assert!(seen.contains(&Relation::Generates));
            assert!(seen.contains(&Relation::GeneratedBy));
            assert!(seen.contains(&Relation::Overcomes));
            assert!(seen.contains(&Relation::OvercomeBy));
        }
    }

    #[test]
    fn seasonal_state_classification() {
        // Wood in spring is prosperous; fire in spring is supported.
        assert_eq!(
            SeasonalState::classify(Element::Wood, Element::Wood),
            SeasonalState::Prosperous
        );
        assert_eq!(
            SeasonalState::classify(Element::Fire, Element::Wood),
            SeasonalState::Supported
        );
        // Water feeds spring wood and is spent; metal is suppressed by it;
        // earth is overcome by it but rules nothing in return.
        assert_eq!(
            SeasonalState::classify(Element::Water, Element::Wood),
            SeasonalState::Depleting
        );
        assert_eq!(
            SeasonalState::classify(Element::Metal, Element::Wood),
            SeasonalState::Dominant
        );
        assert_eq!(
            SeasonalState::classify(Element::Earth, Element::Wood),
            SeasonalState::Suppressed
        );
    }

    #[test]
    fn relation_examples() {
        assert_eq!(Element::Water.relation_to(Element::Wood), Relation::Generates);
        assert_eq!(Element::Wood.relation_to(Element::Water), Relation::GeneratedBy);
        assert_eq!(Element::Metal.relation_to(Element::Wood), Relation::Overcomes);
        assert_eq!(Element::Wood.relation_to(Element::Metal), Relation::OvercomeBy);
        assert_eq!(Element::Fire.relation_to(Element::Fire), Relation::Same);
    }
}
