//! The 24 solar terms: civil dates, season elements, and the chart
//! configuration table.
//!
//! Term dates use the fixed month/day approximations common in charting
//! software. The configuration table maps each term to its escapement
//! polarity and the three configuration numbers of its upper/middle/lower
//! sub-periods.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::AlmanacError;
use crate::pillar::Yuan;

/// One of the 24 solar terms, ordered from 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    /// 立春 — start of spring (≈ Feb 4).
    LiChun,
    /// 雨水 — rain water (≈ Feb 19).
    YuShui,
    /// 惊蛰 — insects awaken (≈ Mar 6).
    JingZhe,
    /// 春分 — spring equinox (≈ Mar 21).
    ChunFen,
    /// 清明 — clear and bright (≈ Apr 5).
    QingMing,
    /// 谷雨 — grain rain (≈ Apr 20).
    GuYu,
    /// 立夏 — start of summer (≈ May 6).
    LiXia,
    /// 小满 — grain buds (≈ May 21).
    XiaoMan,
    /// 芒种 — grain in ear (≈ Jun 6).
    MangZhong,
    /// 夏至 — summer solstice (≈ Jun 21).
    XiaZhi,
    /// 小暑 — minor heat (≈ Jul 7).
    XiaoShu,
    /// 大暑 — major heat (≈ Jul 23).
    DaShu,
    /// 立秋 — start of autumn (≈ Aug 8).
    LiQiu,
    /// 处暑 — end of heat (≈ Aug 23).
    ChuShu,
    /// 白露 — white dew (≈ Sep 8).
    BaiLu,
    /// 秋分 — autumn equinox (≈ Sep 23).
    QiuFen,
    /// 寒露 — cold dew (≈ Oct 8).
    HanLu,
    /// 霜降 — frost descends (≈ Oct 23).
    ShuangJiang,
    /// 立冬 — start of winter (≈ Nov 7).
    LiDong,
    /// 小雪 — minor snow (≈ Nov 22).
    XiaoXue,
    /// 大雪 — major snow (≈ Dec 7).
    DaXue,
    /// 冬至 — winter solstice (≈ Dec 22).
    DongZhi,
    /// 小寒 — minor cold (≈ Jan 6).
    XiaoHan,
    /// 大寒 — major cold (≈ Jan 20).
    DaHan,
}

/// Approximate (month, day) of each term, in declaration order.
const TERM_DATES: [(u32, u32); 24] = [
    (2, 4),
    (2, 19),
    (3, 6),
    (3, 21),
    (4, 5),
    (4, 20),
    (5, 6),
    (5, 21),
    (6, 6),
    (6, 21),
    (7, 7),
    (7, 23),
    (8, 8),
    (8, 23),
    (9, 8),
    (9, 23),
    (10, 8),
    (10, 23),
    (11, 7),
    (11, 22),
    (12, 7),
    (12, 22),
    (1, 6),
    (1, 20),
];

impl SolarTerm {
    /// All 24 terms in declaration order (from 立春).
    pub fn all() -> &'static [Self] {
        &[
            Self::LiChun,
            Self::YuShui,
            Self::JingZhe,
            Self::ChunFen,
            Self::QingMing,
            Self::GuYu,
            Self::LiXia,
            Self::XiaoMan,
            Self::MangZhong,
            Self::XiaZhi,
            Self::XiaoShu,
            Self::DaShu,
            Self::LiQiu,
            Self::ChuShu,
            Self::BaiLu,
            Self::QiuFen,
            Self::HanLu,
            Self::ShuangJiang,
            Self::LiDong,
            Self::XiaoXue,
            Self::DaXue,
            Self::DongZhi,
            Self::XiaoHan,
            Self::DaHan,
        ]
    }

    /// Position in declaration order (0-23, from 立春).
    pub fn index(self) -> usize {
        Self::all()
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }

    /// The approximate (month, day) this term falls on every year.
    pub fn approx_date(self) -> (u32, u32) {
        TERM_DATES[self.index()]
    }

    /// The lunar-solar month this term belongs to (1 = the 寅 month opened
    /// by 立春, through 12 = the 丑 month opened by 小寒).
    pub fn month_ordinal(self) -> usize {
        self.index() / 2 + 1
    }

    /// The element of the season this term sits in. The final month of
    /// each season (清明/谷雨, 小暑/大暑, 寒露/霜降, 小寒/大寒) counts as
    /// earth.
    pub fn season_element(self) -> Element {
        match self {
            Self::LiChun | Self::YuShui | Self::JingZhe | Self::ChunFen => Element::Wood,
            Self::QingMing | Self::GuYu => Element::Earth,
            Self::LiXia | Self::XiaoMan | Self::MangZhong | Self::XiaZhi => Element::Fire,
            Self::XiaoShu | Self::DaShu => Element::Earth,
            Self::LiQiu | Self::ChuShu | Self::BaiLu | Self::QiuFen => Element::Metal,
            Self::HanLu | Self::ShuangJiang => Element::Earth,
            Self::LiDong | Self::XiaoXue | Self::DaXue | Self::DongZhi => Element::Water,
            Self::XiaoHan | Self::DaHan => Element::Earth,
        }
    }

    /// The escapement polarity and the configuration numbers of the three
    /// sub-periods (upper, middle, lower) for a chart anchored in this
    /// term. Yang escapements run from 冬至 up to 夏至, yin from 夏至 up
    /// to 冬至.
    pub fn configuration(self) -> (Polarity, [u8; 3]) {
        match self {
            Self::DongZhi => (Polarity::Yang, [1, 7, 4]),
            Self::XiaoHan => (Polarity::Yang, [2, 8, 5]),
            Self::DaHan => (Polarity::Yang, [3, 9, 6]),
            Self::LiChun => (Polarity::Yang, [8, 5, 2]),
            Self::YuShui => (Polarity::Yang, [9, 6, 3]),
            Self::JingZhe => (Polarity::Yang, [1, 7, 4]),
            Self::ChunFen => (Polarity::Yang, [3, 9, 6]),
            Self::QingMing => (Polarity::Yang, [4, 1, 7]),
            Self::GuYu => (Polarity::Yang, [5, 2, 8]),
            Self::LiXia => (Polarity::Yang, [4, 1, 7]),
            Self::XiaoMan => (Polarity::Yang, [5, 2, 8]),
            Self::MangZhong => (Polarity::Yang, [6, 3, 9]),
            Self::XiaZhi => (Polarity::Yin, [9, 3, 6]),
            Self::XiaoShu => (Polarity::Yin, [8, 2, 5]),
            Self::DaShu => (Polarity::Yin, [7, 1, 4]),
            Self::LiQiu => (Polarity::Yin, [2, 5, 8]),
            Self::ChuShu => (Polarity::Yin, [1, 4, 7]),
            Self::BaiLu => (Polarity::Yin, [9, 3, 6]),
            Self::QiuFen => (Polarity::Yin, [7, 1, 4]),
            Self::HanLu => (Polarity::Yin, [6, 9, 3]),
            Self::ShuangJiang => (Polarity::Yin, [5, 8, 2]),
            Self::LiDong => (Polarity::Yin, [6, 9, 3]),
            Self::XiaoXue => (Polarity::Yin, [5, 8, 2]),
            Self::DaXue => (Polarity::Yin, [4, 7, 1]),
        }
    }

    /// The configuration number for one sub-period of this term.
    pub fn configuration_for(self, yuan: Yuan) -> u8 {
        let (_, numbers) = self.configuration();
        match yuan {
            Yuan::Upper => numbers[0],
            Yuan::Middle => numbers[1],
            Yuan::Lower => numbers[2],
        }
    }

    /// The nearest term at or before `date`, with the date it began.
    ///
    /// Returns `None` only if the civil dates of the table cannot be
    /// represented for the given year — a data gap the caller degrades
    /// from, never an error.
    pub fn preceding(date: NaiveDate) -> Option<(Self, NaiveDate)> {
        let mut best: Option<(Self, NaiveDate)> = None;
        for year in [date.year() - 1, date.year()] {
            for term in Self::all() {
                let (m, d) = term.approx_date();
                let Some(start) = NaiveDate::from_ymd_opt(year, m, d) else {
                    continue;
                };
                if start <= date && best.is_none_or(|(_, b)| start > b) {
                    best = Some((*term, start));
                }
            }
        }
        best
    }

    /// The Chinese name of this term.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    /// Parse a term from its pinyin name or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::all().iter().copied().find(|t| {
            t.chinese() == needle || format!("{t}").to_lowercase() == needle
        })
    }
}

impl std::str::FromStr for SolarTerm {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AlmanacError::UnknownSolarTerm(s.to_string()))
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LiChun => "LiChun",
            Self::YuShui => "YuShui",
            Self::JingZhe => "JingZhe",
            Self::ChunFen => "ChunFen",
            Self::QingMing => "QingMing",
            Self::GuYu => "GuYu",
            Self::LiXia => "LiXia",
            Self::XiaoMan => "XiaoMan",
            Self::MangZhong => "MangZhong",
            Self::XiaZhi => "XiaZhi",
            Self::XiaoShu => "XiaoShu",
            Self::DaShu => "DaShu",
            Self::LiQiu => "LiQiu",
            Self::ChuShu => "ChuShu",
            Self::BaiLu => "BaiLu",
            Self::QiuFen => "QiuFen",
            Self::HanLu => "HanLu",
            Self::ShuangJiang => "ShuangJiang",
            Self::LiDong => "LiDong",
            Self::XiaoXue => "XiaoXue",
            Self::DaXue => "DaXue",
            Self::DongZhi => "DongZhi",
            Self::XiaoHan => "XiaoHan",
            Self::DaHan => "DaHan",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn preceding_mid_month() {
        let (term, start) = SolarTerm::preceding(date(2024, 2, 10)).unwrap();
        assert_eq!(term, SolarTerm::LiChun);
        assert_eq!(start, date(2024, 2, 4));
    }

    #[test]
    fn preceding_on_boundary() {
        let (term, _) = SolarTerm::preceding(date(2024, 6, 21)).unwrap();
        assert_eq!(term, SolarTerm::XiaZhi);
    }

    #[test]
    fn preceding_early_january_reaches_back_a_year() {
        // Before 小寒 (Jan 6), the governing term is last year's 冬至.
        let (term, start) = SolarTerm::preceding(date(2024, 1, 3)).unwrap();
        assert_eq!(term, SolarTerm::DongZhi);
        assert_eq!(start, date(2023, 12, 22));
    }

    #[test]
    fn configuration_polarity_split() {
        // Yang escapement from the winter solstice, yin from the summer.
        assert_eq!(SolarTerm::DongZhi.configuration().0, Polarity::Yang);
        assert_eq!(SolarTerm::MangZhong.configuration().0, Polarity::Yang);
        assert_eq!(SolarTerm::XiaZhi.configuration().0, Polarity::Yin);
        assert_eq!(SolarTerm::DaXue.configuration().0, Polarity::Yin);
    }

    #[test]
    fn configuration_numbers_in_range() {
        for term in SolarTerm::all() {
            let (_, numbers) = term.configuration();
            for n in numbers {
                assert!((1..=9).contains(&n), "{term}: {n}");
            }
        }
    }

    #[test]
    fn winter_solstice_numbers() {
        assert_eq!(SolarTerm::DongZhi.configuration_for(Yuan::Upper), 1);
        assert_eq!(SolarTerm::DongZhi.configuration_for(Yuan::Middle), 7);
        assert_eq!(SolarTerm::DongZhi.configuration_for(Yuan::Lower), 4);
    }

    #[test]
    fn month_ordinals() {
        assert_eq!(SolarTerm::LiChun.month_ordinal(), 1);
        assert_eq!(SolarTerm::YuShui.month_ordinal(), 1);
        assert_eq!(SolarTerm::JingZhe.month_ordinal(), 2);
        assert_eq!(SolarTerm::DaHan.month_ordinal(), 12);
    }

    #[test]
    fn season_elements() {
        assert_eq!(SolarTerm::ChunFen.season_element(), Element::Wood);
        assert_eq!(SolarTerm::GuYu.season_element(), Element::Earth);
        assert_eq!(SolarTerm::XiaZhi.season_element(), Element::Fire);
        assert_eq!(SolarTerm::DongZhi.season_element(), Element::Water);
    }

    #[test]
    fn parse_variants() {
        assert_eq!(SolarTerm::parse("lichun"), Some(SolarTerm::LiChun));
        assert_eq!(SolarTerm::parse("冬至"), Some(SolarTerm::DongZhi));
        assert_eq!(SolarTerm::parse("nope"), None);
    }
}
