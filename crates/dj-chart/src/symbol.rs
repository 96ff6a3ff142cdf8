//! The symbol union the analyzer and optimizer operate on.
//!
//! A [`Symbol`] names any stem, star, door, or deity, or one of the two
//! dynamic markers that resolve against the chart's own pillars. All
//! dynamic resolution happens in one place — [`Symbol::resolve`] — so the
//! analyzer and optimizer only ever see a [`ConcreteSymbol`].

use dj_almanac::{Element, Stem};
use serde::{Deserialize, Serialize};

use crate::chart::Ju;
use crate::deity::Deity;
use crate::door::Door;
use crate::error::ChartError;
use crate::palace::PalaceIndex;
use crate::star::Star;

/// A symbol to locate and analyze within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// A heavenly stem.
    Stem(Stem),
    /// One of the nine stars.
    Star(Star),
    /// One of the eight doors.
    Door(Door),
    /// One of the eight deities.
    Deity(Deity),
    /// The chart's day-pillar stem, resolved at analysis time.
    DayStem,
    /// The chart's hour-pillar stem, resolved at analysis time.
    HourStem,
}

impl Symbol {
    /// Resolve the symbol against a chart, replacing the dynamic markers
    /// with the chart's own day/hour stems.
    pub fn resolve(self, ju: &Ju) -> ConcreteSymbol {
        match self {
            Self::Stem(s) => ConcreteSymbol::Stem(s),
            Self::Star(s) => ConcreteSymbol::Star(s),
            Self::Door(d) => ConcreteSymbol::Door(d),
            Self::Deity(d) => ConcreteSymbol::Deity(d),
            Self::DayStem => ConcreteSymbol::Stem(ju.day_stem()),
            Self::HourStem => ConcreteSymbol::Stem(ju.hour_stem()),
        }
    }

    /// Parse a symbol from a name: `day-stem`, `hour-stem`, or any stem,
    /// star, door, or deity name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "daystem" | "日干" => return Some(Self::DayStem),
            "hourstem" | "时干" => return Some(Self::HourStem),
            _ => {}
        }
        if let Some(stem) = Stem::parse(s) {
            return Some(Self::Stem(stem));
        }
        if let Some(star) = Star::parse(s) {
            return Some(Self::Star(star));
        }
        if let Some(door) = Door::parse(s) {
            return Some(Self::Door(door));
        }
        Deity::parse(s).map(Self::Deity)
    }
}

impl std::str::FromStr for Symbol {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ChartError::UnknownSymbol(s.to_string()))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem(s) => write!(f, "{s}"),
            Self::Star(s) => write!(f, "{s}"),
            Self::Door(d) => write!(f, "{d} door"),
            Self::Deity(d) => write!(f, "{d}"),
            Self::DayStem => write!(f, "day-stem"),
            Self::HourStem => write!(f, "hour-stem"),
        }
    }
}

/// A symbol with all dynamic markers resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteSymbol {
    /// A heavenly stem.
    Stem(Stem),
    /// One of the nine stars.
    Star(Star),
    /// One of the eight doors.
    Door(Door),
    /// One of the eight deities.
    Deity(Deity),
}

impl ConcreteSymbol {
    /// The symbol's governing element.
    pub fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Star(s) => s.element(),
            Self::Door(d) => d.element(),
            Self::Deity(d) => d.element(),
        }
    }

    /// The palace owning this symbol in a chart, if any.
    ///
    /// Stems match against heaven stems (all nine are distinct); stars
    /// match all nine palaces. Doors and deities match the outer ring
    /// only — the centre merely hosts a lodged copy of the duty door and
    /// 值符, and lodging is not ownership. The result is always zero or
    /// one palace.
    pub fn owning_palace(self, ju: &Ju) -> Option<PalaceIndex> {
        match self {
            Self::Stem(stem) => ju
                .palaces
                .iter()
                .find(|p| p.heaven_stem == stem)
                .map(|p| p.index),
            Self::Star(star) => ju.palaces.iter().find(|p| p.star == star).map(|p| p.index),
            Self::Door(door) => ju
                .palaces
                .iter()
                .filter(|p| p.index != PalaceIndex::CENTER)
                .find(|p| p.door == door)
                .map(|p| p.index),
            Self::Deity(deity) => ju
                .palaces
                .iter()
                .filter(|p| p.index != PalaceIndex::CENTER)
                .find(|p| p.deity == deity)
                .map(|p| p.index),
        }
    }

    /// The Chinese name of the symbol.
    pub fn chinese(self) -> String {
        match self {
            Self::Stem(s) => s.chinese().to_string(),
            Self::Star(s) => s.chinese().to_string(),
            Self::Door(d) => d.chinese().to_string(),
            Self::Deity(d) => d.chinese().to_string(),
        }
    }
}

impl From<ConcreteSymbol> for Symbol {
    fn from(value: ConcreteSymbol) -> Self {
        match value {
            ConcreteSymbol::Stem(s) => Self::Stem(s),
            ConcreteSymbol::Star(s) => Self::Star(s),
            ConcreteSymbol::Door(d) => Self::Door(d),
            ConcreteSymbol::Deity(d) => Self::Deity(d),
        }
    }
}

impl std::fmt::Display for ConcreteSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem(s) => write!(f, "{s}"),
            Self::Star(s) => write!(f, "{s}"),
            Self::Door(d) => write!(f, "{d} door"),
            Self::Deity(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ju() -> Ju {
        Ju::build(
            NaiveDate::from_ymd_opt(2024, 2, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn day_stem_resolves_dynamically() {
        let ju = ju();
        assert_eq!(
            Symbol::DayStem.resolve(&ju),
            ConcreteSymbol::Stem(ju.day_stem())
        );
        assert_eq!(
            Symbol::HourStem.resolve(&ju),
            ConcreteSymbol::Stem(ju.hour_stem())
        );
    }

    #[test]
    fn every_chart_stem_has_exactly_one_owner() {
        let ju = ju();
        for p in &ju.palaces {
            let owner = ConcreteSymbol::Stem(p.heaven_stem).owning_palace(&ju);
            assert_eq!(owner, Some(p.index));
        }
    }

    #[test]
    fn jia_owns_no_palace() {
        // 甲 hides behind the six yi and never surfaces on the plates.
        let ju = ju();
        assert_eq!(ConcreteSymbol::Stem(Stem::Jia).owning_palace(&ju), None);
    }

    #[test]
    fn doors_resolve_to_the_outer_ring() {
        let ju = ju();
        for door in Door::all() {
            let owner = ConcreteSymbol::Door(*door).owning_palace(&ju);
            assert!(owner.is_some_and(|p| p != PalaceIndex::CENTER), "{door}");
        }
    }

    #[test]
    fn qin_star_owns_the_centre() {
        let ju = ju();
        assert_eq!(
            ConcreteSymbol::Star(Star::TianQin).owning_palace(&ju),
            Some(PalaceIndex::CENTER)
        );
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Symbol::parse("day-stem"), Some(Symbol::DayStem));
        assert_eq!(Symbol::parse("wu"), Some(Symbol::Stem(Stem::Wu)));
        assert_eq!(Symbol::parse("open"), Some(Symbol::Door(Door::Open)));
        assert_eq!(Symbol::parse("tianxin"), Some(Symbol::Star(Star::TianXin)));
        assert_eq!(Symbol::parse("白虎"), Some(Symbol::Deity(Deity::BaiHu)));
        assert_eq!(Symbol::parse("gibberish"), None);
    }
}
