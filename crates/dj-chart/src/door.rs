//! The eight doors (八门).

use dj_almanac::Element;
use serde::{Deserialize, Serialize};

use crate::palace::PalaceIndex;
use crate::star::Auspice;

/// One of the eight doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    /// 休门 — rest; water, auspicious.
    Rest,
    /// 生门 — life; earth, auspicious.
    Life,
    /// 伤门 — harm; wood, inauspicious.
    Harm,
    /// 杜门 — block; wood, neutral.
    Block,
    /// 景门 — view; fire, neutral.
    View,
    /// 死门 — death; earth, inauspicious.
    Death,
    /// 惊门 — fright; metal, inauspicious.
    Fright,
    /// 开门 — open; metal, auspicious.
    Open,
}

impl Door {
    /// All eight doors in origin-ring order (palaces 1,8,3,4,9,2,7,6).
    pub fn all() -> &'static [Self] {
        &[
            Self::Rest,
            Self::Life,
            Self::Harm,
            Self::Block,
            Self::View,
            Self::Death,
            Self::Fright,
            Self::Open,
        ]
    }

    /// The door's elemental affinity.
    pub fn element(self) -> Element {
        match self {
            Self::Rest => Element::Water,
            Self::Life | Self::Death => Element::Earth,
            Self::Harm | Self::Block => Element::Wood,
            Self::View => Element::Fire,
            Self::Fright | Self::Open => Element::Metal,
        }
    }

    /// The door's auspiciousness classification.
    pub fn auspice(self) -> Auspice {
        match self {
            Self::Rest | Self::Life | Self::Open => Auspice::Auspicious,
            Self::Harm | Self::Death | Self::Fright => Auspice::Inauspicious,
            Self::Block | Self::View => Auspice::Neutral,
        }
    }

    /// The palace this door originates from before any rotation.
    pub fn origin_palace(self) -> PalaceIndex {
        let index = match self {
            Self::Rest => 1,
            Self::Life => 8,
            Self::Harm => 3,
            Self::Block => 4,
            Self::View => 9,
            Self::Death => 2,
            Self::Fright => 7,
            Self::Open => 6,
        };
        PalaceIndex::new(index).unwrap_or(PalaceIndex::CENTER)
    }

    /// The door originating from a palace, if any (the centre has none).
    pub fn of_origin(palace: PalaceIndex) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.origin_palace() == palace)
    }

    /// The Chinese name of this door.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Rest => "休门",
            Self::Life => "生门",
            Self::Harm => "伤门",
            Self::Block => "杜门",
            Self::View => "景门",
            Self::Death => "死门",
            Self::Fright => "惊门",
            Self::Open => "开门",
        }
    }

    /// Parse a door from its English name, pinyin, or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rest" | "xiu" | "休" | "休门" => Some(Self::Rest),
            "life" | "sheng" | "生" | "生门" => Some(Self::Life),
            "harm" | "shang" | "伤" | "伤门" => Some(Self::Harm),
            "block" | "du" | "杜" | "杜门" => Some(Self::Block),
            "view" | "jing" | "景" | "景门" => Some(Self::View),
            "death" | "si" | "死" | "死门" => Some(Self::Death),
            "fright" | "惊" | "惊门" => Some(Self::Fright),
            "open" | "kai" | "开" | "开门" => Some(Self::Open),
            _ => None,
        }
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rest => write!(f, "Rest"),
            Self::Life => write!(f, "Life"),
            Self::Harm => write!(f, "Harm"),
            Self::Block => write!(f, "Block"),
            Self::View => write!(f, "View"),
            Self::Death => write!(f, "Death"),
            Self::Fright => write!(f, "Fright"),
            Self::Open => write!(f, "Open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_cover_outer_palaces() {
        let mut seen = vec![];
        for d in Door::all() {
            seen.push(d.origin_palace().get());
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn centre_has_no_door() {
        assert_eq!(Door::of_origin(PalaceIndex::CENTER), None);
    }

    #[test]
    fn three_lucky_doors() {
        assert_eq!(Door::Open.auspice(), Auspice::Auspicious);
        assert_eq!(Door::Rest.auspice(), Auspice::Auspicious);
        assert_eq!(Door::Life.auspice(), Auspice::Auspicious);
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Door::parse("open"), Some(Door::Open));
        assert_eq!(Door::parse("sheng"), Some(Door::Life));
        assert_eq!(Door::parse("死门"), Some(Door::Death));
        assert_eq!(Door::parse("nope"), None);
    }
}
