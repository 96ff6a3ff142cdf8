//! The twelve earthly branches (di zhi).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::AlmanacError;
use crate::stem::Stem;

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// 子 — water, the rat double-hour (23:00-01:00).
    Zi,
    /// 丑 — earth (01:00-03:00).
    Chou,
    /// 寅 — wood (03:00-05:00).
    Yin,
    /// 卯 — wood (05:00-07:00).
    Mao,
    /// 辰 — earth (07:00-09:00).
    Chen,
    /// 巳 — fire (09:00-11:00).
    Si,
    /// 午 — fire (11:00-13:00).
    Wu,
    /// 未 — earth (13:00-15:00).
    Wei,
    /// 申 — metal (15:00-17:00).
    Shen,
    /// 酉 — metal (17:00-19:00).
    You,
    /// 戌 — earth (19:00-21:00).
    Xu,
    /// 亥 — water (21:00-23:00).
    Hai,
}

impl Branch {
    /// All twelve branches in cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Zi,
            Self::Chou,
            Self::Yin,
            Self::Mao,
            Self::Chen,
            Self::Si,
            Self::Wu,
            Self::Wei,
            Self::Shen,
            Self::You,
            Self::Xu,
            Self::Hai,
        ]
    }

    /// Position in the twelve-branch cycle (0-11).
    pub fn index(self) -> usize {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position; indices wrap modulo 12.
    pub fn from_index(i: usize) -> Self {
        Self::all()[i % 12]
    }

    /// The branch's elemental affinity.
    pub fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// The branch's polarity: even cycle positions are yang.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// The stems hidden inside this branch, principal first.
    pub fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Zi => &[Stem::Gui],
            Self::Chou => &[Stem::Ji, Stem::Gui, Stem::Xin],
            Self::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Self::Mao => &[Stem::Yi],
            Self::Chen => &[Stem::Wu, Stem::Yi, Stem::Gui],
            Self::Si => &[Stem::Bing, Stem::Wu, Stem::Geng],
            Self::Wu => &[Stem::Ding, Stem::Ji],
            Self::Wei => &[Stem::Ji, Stem::Ding, Stem::Yi],
            Self::Shen => &[Stem::Geng, Stem::Ren, Stem::Wu],
            Self::You => &[Stem::Xin],
            Self::Xu => &[Stem::Wu, Stem::Xin, Stem::Ding],
            Self::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    /// The branch governing a civil hour: each branch owns a two-hour
    /// window, with 子 straddling midnight (23:00-01:00).
    pub fn of_hour(hour: u32) -> Self {
        Self::from_index((((hour % 24) + 1) / 2) as usize)
    }

    /// The "post horse" branch of this branch's trine group.
    ///
    /// 申子辰→寅, 寅午戌→申, 巳酉丑→亥, 亥卯未→巳.
    pub fn horse(self) -> Self {
        match self {
            Self::Shen | Self::Zi | Self::Chen => Self::Yin,
            Self::Yin | Self::Wu | Self::Xu => Self::Shen,
            Self::Si | Self::You | Self::Chou => Self::Hai,
            Self::Hai | Self::Mao | Self::Wei => Self::Si,
        }
    }

    /// The Chinese character for this branch.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Parse a branch from its pinyin name or Chinese character.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zi" | "子" => Some(Self::Zi),
            "chou" | "丑" => Some(Self::Chou),
            "yin" | "寅" => Some(Self::Yin),
            "mao" | "卯" => Some(Self::Mao),
            "chen" | "辰" => Some(Self::Chen),
            "si" | "巳" => Some(Self::Si),
            "wu" | "午" => Some(Self::Wu),
            "wei" | "未" => Some(Self::Wei),
            "shen" | "申" => Some(Self::Shen),
            "you" | "酉" => Some(Self::You),
            "xu" | "戌" => Some(Self::Xu),
            "hai" | "亥" => Some(Self::Hai),
            _ => None,
        }
    }
}

impl std::str::FromStr for Branch {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AlmanacError::UnknownBranch(s.to_string()))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zi => write!(f, "Zi"),
            Self::Chou => write!(f, "Chou"),
            Self::Yin => write!(f, "Yin"),
            Self::Mao => write!(f, "Mao"),
            Self::Chen => write!(f, "Chen"),
            Self::Si => write!(f, "Si"),
            Self::Wu => write!(f, "Wu"),
            Self::Wei => write!(f, "Wei"),
            Self::Shen => write!(f, "Shen"),
            Self::You => write!(f, "You"),
            Self::Xu => write!(f, "Xu"),
            Self::Hai => write!(f, "Hai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for b in Branch::all() {
            assert_eq!(Branch::from_index(b.index()), *b);
        }
    }

    #[test]
    fn hour_windows() {
        assert_eq!(Branch::of_hour(23), Branch::Zi);
        assert_eq!(Branch::of_hour(0), Branch::Zi);
        assert_eq!(Branch::of_hour(1), Branch::Chou);
        assert_eq!(Branch::of_hour(2), Branch::Chou);
        assert_eq!(Branch::of_hour(11), Branch::Wu);
        assert_eq!(Branch::of_hour(12), Branch::Wu);
        assert_eq!(Branch::of_hour(15), Branch::Shen);
        assert_eq!(Branch::of_hour(22), Branch::Hai);
    }

    #[test]
    fn horse_trines() {
        assert_eq!(Branch::Zi.horse(), Branch::Yin);
        assert_eq!(Branch::Shen.horse(), Branch::Yin);
        assert_eq!(Branch::Wu.horse(), Branch::Shen);
        assert_eq!(Branch::You.horse(), Branch::Hai);
        assert_eq!(Branch::Mao.horse(), Branch::Si);
    }

    #[test]
    fn hidden_stems_principal_matches_element() {
        // The principal hidden stem shares the branch's element.
        for b in Branch::all() {
            assert_eq!(b.hidden_stems()[0].element(), b.element(), "{b}");
        }
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Branch::parse("zi"), Some(Branch::Zi));
        assert_eq!(Branch::parse("午"), Some(Branch::Wu));
        assert_eq!(Branch::parse("HAI"), Some(Branch::Hai));
        assert_eq!(Branch::parse("nope"), None);
    }
}
