//! The eight deities (八神).

use dj_almanac::Element;
use serde::{Deserialize, Serialize};

use crate::palace::PalaceIndex;
use crate::star::Auspice;

/// One of the eight deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deity {
    /// 值符 — the chief protector; earth, auspicious.
    ZhiFu,
    /// 螣蛇 — the coiling snake; fire, inauspicious.
    TengShe,
    /// 太阴 — the refined yin; metal, auspicious.
    TaiYin,
    /// 六合 — the harmoniser; wood, auspicious.
    LiuHe,
    /// 白虎 — the white tiger; metal, inauspicious.
    BaiHu,
    /// 玄武 — the dark tortoise; water, inauspicious.
    XuanWu,
    /// 九地 — the nine earths; earth, auspicious.
    JiuDi,
    /// 九天 — the nine heavens; metal, auspicious.
    JiuTian,
}

impl Deity {
    /// All eight deities in their yang-escapement marching order.
    pub fn all() -> &'static [Self] {
        &[
            Self::ZhiFu,
            Self::TengShe,
            Self::TaiYin,
            Self::LiuHe,
            Self::BaiHu,
            Self::XuanWu,
            Self::JiuDi,
            Self::JiuTian,
        ]
    }

    /// The deity's elemental affinity.
    pub fn element(self) -> Element {
        match self {
            Self::ZhiFu | Self::JiuDi => Element::Earth,
            Self::TengShe => Element::Fire,
            Self::TaiYin | Self::BaiHu | Self::JiuTian => Element::Metal,
            Self::LiuHe => Element::Wood,
            Self::XuanWu => Element::Water,
        }
    }

    /// The deity's auspiciousness classification.
    pub fn auspice(self) -> Auspice {
        match self {
            Self::ZhiFu | Self::TaiYin | Self::LiuHe | Self::JiuDi | Self::JiuTian => {
                Auspice::Auspicious
            }
            Self::TengShe | Self::BaiHu | Self::XuanWu => Auspice::Inauspicious,
        }
    }

    /// The ring palace this deity occupies before any rotation (marching
    /// order laid onto the outer ring 1,8,3,4,9,2,7,6).
    pub fn origin_palace(self) -> PalaceIndex {
        let index = match self {
            Self::ZhiFu => 1,
            Self::TengShe => 8,
            Self::TaiYin => 3,
            Self::LiuHe => 4,
            Self::BaiHu => 9,
            Self::XuanWu => 2,
            Self::JiuDi => 7,
            Self::JiuTian => 6,
        };
        PalaceIndex::new(index).unwrap_or(PalaceIndex::CENTER)
    }

    /// The Chinese name of this deity.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::ZhiFu => "值符",
            Self::TengShe => "螣蛇",
            Self::TaiYin => "太阴",
            Self::LiuHe => "六合",
            Self::BaiHu => "白虎",
            Self::XuanWu => "玄武",
            Self::JiuDi => "九地",
            Self::JiuTian => "九天",
        }
    }

    /// Parse a deity from its pinyin name or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Self::all()
            .iter()
            .copied()
            .find(|d| d.chinese() == needle || format!("{d}").to_lowercase() == needle)
    }
}

impl std::fmt::Display for Deity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ZhiFu => "ZhiFu",
            Self::TengShe => "TengShe",
            Self::TaiYin => "TaiYin",
            Self::LiuHe => "LiuHe",
            Self::BaiHu => "BaiHu",
            Self::XuanWu => "XuanWu",
            Self::JiuDi => "JiuDi",
            Self::JiuTian => "JiuTian",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_cover_outer_palaces() {
        let mut seen: Vec<u8> = Deity::all().iter().map(|d| d.origin_palace().get()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn three_malevolent_deities() {
        assert_eq!(Deity::BaiHu.auspice(), Auspice::Inauspicious);
        assert_eq!(Deity::TengShe.auspice(), Auspice::Inauspicious);
        assert_eq!(Deity::XuanWu.auspice(), Auspice::Inauspicious);
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Deity::parse("zhifu"), Some(Deity::ZhiFu));
        assert_eq!(Deity::parse("白虎"), Some(Deity::BaiHu));
        assert_eq!(Deity::parse("jiu-tian"), Some(Deity::JiuTian));
        assert_eq!(Deity::parse("nope"), None);
    }
}
