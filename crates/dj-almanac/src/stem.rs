//! The ten heavenly stems (tian gan).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::AlmanacError;

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    /// 甲 — yang wood.
    Jia,
    /// 乙 — yin wood.
    Yi,
    /// 丙 — yang fire.
    Bing,
    /// 丁 — yin fire.
    Ding,
    /// 戊 — yang earth.
    Wu,
    /// 己 — yin earth.
    Ji,
    /// 庚 — yang metal.
    Geng,
    /// 辛 — yin metal.
    Xin,
    /// 壬 — yang water.
    Ren,
    /// 癸 — yin water.
    Gui,
}

impl Stem {
    /// All ten stems in cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Jia,
            Self::Yi,
            Self::Bing,
            Self::Ding,
            Self::Wu,
            Self::Ji,
            Self::Geng,
            Self::Xin,
            Self::Ren,
            Self::Gui,
        ]
    }

    /// Position in the ten-stem cycle (0-9).
    pub fn index(self) -> usize {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position; indices wrap modulo 10.
    pub fn from_index(i: usize) -> Self {
        Self::all()[i % 10]
    }

    /// The stem's elemental affinity.
    pub fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// The stem's polarity: even cycle positions are yang.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// The Chinese character for this stem.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Parse a stem from its pinyin name or Chinese character.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "jia" | "甲" => Some(Self::Jia),
            "yi" | "乙" => Some(Self::Yi),
            "bing" | "丙" => Some(Self::Bing),
            "ding" | "丁" => Some(Self::Ding),
            "wu" | "戊" => Some(Self::Wu),
            "ji" | "己" => Some(Self::Ji),
            "geng" | "庚" => Some(Self::Geng),
            "xin" | "辛" => Some(Self::Xin),
            "ren" | "壬" => Some(Self::Ren),
            "gui" | "癸" => Some(Self::Gui),
            _ => None,
        }
    }
}

impl std::str::FromStr for Stem {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AlmanacError::UnknownStem(s.to_string()))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jia => write!(f, "Jia"),
            Self::Yi => write!(f, "Yi"),
            Self::Bing => write!(f, "Bing"),
            Self::Ding => write!(f, "Ding"),
            Self::Wu => write!(f, "Wu"),
            Self::Ji => write!(f, "Ji"),
            Self::Geng => write!(f, "Geng"),
            Self::Xin => write!(f, "Xin"),
            Self::Ren => write!(f, "Ren"),
            Self::Gui => write!(f, "Gui"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for s in Stem::all() {
            assert_eq!(Stem::from_index(s.index()), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(23), Stem::Ding);
    }

    #[test]
    fn elements_follow_pairs() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Ren.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Stem::parse("wu"), Some(Stem::Wu));
        assert_eq!(Stem::parse("戊"), Some(Stem::Wu));
        assert_eq!(Stem::parse("GENG"), Some(Stem::Geng));
        assert_eq!(Stem::parse("nope"), None);
    }
}
