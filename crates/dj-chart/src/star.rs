//! The nine stars (九星) and the auspiciousness classification shared by
//! all symbolic overlays.

use dj_almanac::Element;
use serde::{Deserialize, Serialize};

use crate::palace::PalaceIndex;

/// Auspiciousness classification, shared by stars, doors, deities, and
/// catalog patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Auspice {
    /// Favourable.
    Auspicious,
    /// Unfavourable.
    Inauspicious,
    /// Neither.
    Neutral,
}

impl std::fmt::Display for Auspice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auspicious => write!(f, "auspicious"),
            Self::Inauspicious => write!(f, "inauspicious"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// One of the nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    /// 天蓬 — water, the fierce greater-inauspicious star.
    TianPeng,
    /// 天芮 — earth, the sickness star.
    TianRui,
    /// 天冲 — wood, the martial neutral star.
    TianChong,
    /// 天辅 — wood, the scholarly auspicious star.
    TianFu,
    /// 天禽 — earth, the central regulating star.
    TianQin,
    /// 天心 — metal, the healing auspicious star.
    TianXin,
    /// 天柱 — metal, the destructive star.
    TianZhu,
    /// 天任 — earth, the steady auspicious star.
    TianRen,
    /// 天英 — fire, the brilliant neutral star.
    TianYing,
}

impl Star {
    /// All nine stars in origin-palace order (1-9).
    pub fn all() -> &'static [Self] {
        &[
            Self::TianPeng,
            Self::TianRui,
            Self::TianChong,
            Self::TianFu,
            Self::TianQin,
            Self::TianXin,
            Self::TianZhu,
            Self::TianRen,
            Self::TianYing,
        ]
    }

    /// The star's elemental affinity.
    pub fn element(self) -> Element {
        match self {
            Self::TianPeng => Element::Water,
            Self::TianRui | Self::TianQin | Self::TianRen => Element::Earth,
            Self::TianChong | Self::TianFu => Element::Wood,
            Self::TianXin | Self::TianZhu => Element::Metal,
            Self::TianYing => Element::Fire,
        }
    }

    /// The star's auspiciousness classification.
    pub fn auspice(self) -> Auspice {
        match self {
            Self::TianXin | Self::TianRen | Self::TianFu | Self::TianQin => Auspice::Auspicious,
            Self::TianPeng | Self::TianRui | Self::TianZhu => Auspice::Inauspicious,
            Self::TianChong | Self::TianYing => Auspice::Neutral,
        }
    }

    /// The palace this star originates from before any rotation.
    pub fn origin_palace(self) -> PalaceIndex {
        let index = match self {
            Self::TianPeng => 1,
            Self::TianRui => 2,
            Self::TianChong => 3,
            Self::TianFu => 4,
            Self::TianQin => 5,
            Self::TianXin => 6,
            Self::TianZhu => 7,
            Self::TianRen => 8,
            Self::TianYing => 9,
        };
        PalaceIndex::new(index).unwrap_or(PalaceIndex::CENTER)
    }

    /// The star originating from a palace.
    pub fn of_origin(palace: PalaceIndex) -> Self {
        Self::all()[usize::from(palace.get()) - 1]
    }

    /// The Chinese name of this star.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::TianPeng => "天蓬",
            Self::TianRui => "天芮",
            Self::TianChong => "天冲",
            Self::TianFu => "天辅",
            Self::TianQin => "天禽",
            Self::TianXin => "天心",
            Self::TianZhu => "天柱",
            Self::TianRen => "天任",
            Self::TianYing => "天英",
        }
    }

    /// Parse a star from its pinyin name or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Self::all()
            .iter()
            .copied()
            .find(|star| star.chinese() == needle || format!("{star}").to_lowercase() == needle)
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TianPeng => "TianPeng",
            Self::TianRui => "TianRui",
            Self::TianChong => "TianChong",
            Self::TianFu => "TianFu",
            Self::TianQin => "TianQin",
            Self::TianXin => "TianXin",
            Self::TianZhu => "TianZhu",
            Self::TianRen => "TianRen",
            Self::TianYing => "TianYing",
        };
        write!(f, "{name}")
    }
}
