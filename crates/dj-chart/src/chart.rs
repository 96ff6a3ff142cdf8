//! Chart construction: timestamp → [`Ju`].
//!
//! The escapement and configuration number come from the governing solar
//! term and the day pillar's sub-period. The earth plate lays the nine
//! chart stems from the configuration palace; the rotating overlays
//! (heaven stems, stars, doors, deities) travel the outer ring by a shift
//! derived from the two-hour bucket and the configuration number.

use chrono::NaiveDateTime;
use dj_almanac::{
    Branch, Element, FourPillars, Pillar, Polarity, SeasonalState, SolarTerm, Stem, Yuan,
    pillars_and_term,
};
use serde::{Deserialize, Serialize};

use crate::deity::Deity;
use crate::door::Door;
use crate::palace::{Palace, PalaceIndex};
use crate::star::Star;

/// The nine chart stems in earth-plate laying order (the six yi followed
/// by the three qi).
const EARTH_SEQUENCE: [Stem; 9] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
    Stem::Yi,
];

/// Stars of the outer ring palaces, in ring order (天禽 stays centred).
const STAR_RING: [Star; 8] = [
    Star::TianPeng,
    Star::TianRen,
    Star::TianChong,
    Star::TianFu,
    Star::TianYing,
    Star::TianRui,
    Star::TianZhu,
    Star::TianXin,
];

/// Doors in ring order.
const DOOR_RING: [Door; 8] = [
    Door::Rest,
    Door::Life,
    Door::Harm,
    Door::Block,
    Door::View,
    Door::Death,
    Door::Fright,
    Door::Open,
];

/// Deities in yang marching order along the ring.
const DEITY_RING: [Deity; 8] = [
    Deity::ZhiFu,
    Deity::TengShe,
    Deity::TaiYin,
    Deity::LiuHe,
    Deity::BaiHu,
    Deity::XuanWu,
    Deity::JiuDi,
    Deity::JiuTian,
];

/// The hidden stem (六仪) concealing each decade head.
fn six_yi(head_branch: Branch) -> Option<Stem> {
    match head_branch {
        Branch::Zi => Some(Stem::Wu),
        Branch::Xu => Some(Stem::Ji),
        Branch::Shen => Some(Stem::Geng),
        Branch::Wu => Some(Stem::Xin),
        Branch::Chen => Some(Stem::Ren),
        Branch::Yin => Some(Stem::Gui),
        _ => None,
    }
}

/// A fully computed chart for a moment in time.
///
/// Immutable once constructed and owned solely by the caller that
/// requested it. Building the same timestamp twice yields structurally
/// identical charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ju {
    /// The configuration number (1-9).
    pub configuration: u8,
    /// The escapement polarity (yang or yin dun).
    pub polarity: Polarity,
    /// The governing solar term.
    pub term: SolarTerm,
    /// The sub-period within the term.
    pub yuan: Yuan,
    /// The four pillars of the build timestamp.
    pub pillars: FourPillars,
    /// The duty star for this configuration.
    pub duty_star: Star,
    /// The duty door for this configuration.
    pub duty_door: Door,
    /// The nine palaces, ordered by index 1-9.
    pub palaces: [Palace; 9],
    /// The timestamp the chart was built for.
    pub built_at: NaiveDateTime,
}

impl Ju {
    /// Build the chart for a timestamp.
    ///
    /// Never fails: a solar-term table miss degrades to configuration 1 /
    /// yang escapement (anchored at 冬至, whose upper sub-period is
    /// exactly that) and is logged as a data gap.
    pub fn build(t: NaiveDateTime) -> Self {
        let (pillars, term_lookup) = pillars_and_term(t);

        let term = match term_lookup {
            Some((term, _)) => term,
            None => {
                tracing::warn!(timestamp = %t, "solar term lookup missed; defaulting to 冬至 upper");
                SolarTerm::DongZhi
            }
        };
        let yuan = pillars.day.yuan();
        let (polarity, _) = term.configuration();
        let configuration = term.configuration_for(yuan);

        // Earth plate: lay the nine stems from the configuration palace,
        // forward for yang, backward for yin.
        let start = usize::from(configuration - 1);
        let mut earth = [Stem::Wu; 9];
        for (i, stem) in EARTH_SEQUENCE.iter().enumerate() {
            let slot = match polarity {
                Polarity::Yang => (start + i) % 9,
                Polarity::Yin => (start + 9 - i) % 9,
            };
            earth[slot] = *stem;
        }

        // Duty star and door: the hour decade's hidden stem locates the
        // duty palace on the earth plate.
        let duty_palace = six_yi(pillars.hour.decade_head().branch)
            .and_then(|stem| {
                PalaceIndex::all()
                    .into_iter()
                    .find(|p| earth[usize::from(p.get()) - 1] == stem)
            })
            .unwrap_or_else(|| {
                tracing::warn!("duty stem not found on the earth plate; defaulting to palace 1");
                PalaceIndex::all()[0]
            });
        let duty_star = Star::of_origin(duty_palace);
        // 天禽 lodges at 坤 when the duty palace is the centre.
        let duty_door = Door::of_origin(duty_palace).unwrap_or(Door::Death);

        // Ring rotation for the hour: heaven stems, stars, doors, and
        // deities travel together, forward for yang and reversed for yin.
        let rotation = (pillars.hour.branch.index() + usize::from(configuration)) % 8;

        let season = term.season_element();
        let day_voids = pillars.day.void_branches();
        let horse = pillars.day.branch.horse();

        let palaces = PalaceIndex::all().map(|index| {
            let slot = usize::from(index.get()) - 1;
            let earth_stem = earth[slot];
            let (heaven_stem, star, door, deity) = match index.ring_position() {
                Some(pos) => {
                    let source = match polarity {
                        Polarity::Yang => (pos + rotation) % 8,
                        Polarity::Yin => (pos + 8 - rotation) % 8,
                    };
                    let source_palace = PalaceIndex::ring()[source];
                    (
                        earth[usize::from(source_palace.get()) - 1],
                        STAR_RING[source],
                        DOOR_RING[source],
                        DEITY_RING[source],
                    )
                }
                // Centre: 天禽 presides, the duty door and 值符 lodge here.
                None => (earth_stem, Star::TianQin, duty_door, Deity::ZhiFu),
            };

            Palace {
                index,
                heaven_stem,
                earth_stem,
                star,
                door,
                deity,
                state: SeasonalState::classify(index.element(), season),
                is_void: index.branches().iter().any(|b| day_voids.contains(b)),
                is_horse: index.branches().contains(&horse),
            }
        });

        Self {
            configuration,
            polarity,
            term,
            yuan,
            pillars,
            duty_star,
            duty_door,
            palaces,
            built_at: t,
        }
    }

    /// The palace at an index.
    pub fn palace(&self, index: PalaceIndex) -> &Palace {
        &self.palaces[usize::from(index.get()) - 1]
    }

    /// The day pillar's stem.
    pub fn day_stem(&self) -> Stem {
        self.pillars.day.stem
    }

    /// The hour pillar's stem.
    pub fn hour_stem(&self) -> Stem {
        self.pillars.hour.stem
    }

    /// The element of the chart's season.
    pub fn season_element(&self) -> Element {
        self.term.season_element()
    }

    /// The day decade's void branches.
    pub fn void_branches(&self) -> [Branch; 2] {
        self.pillars.day.void_branches()
    }

    /// The day pillar used for dynamic symbol resolution.
    pub fn day_pillar(&self) -> Pillar {
        self.pillars.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn build_is_deterministic() {
        let a = Ju::build(at(2024, 2, 10, 12));
        let b = Ju::build(at(2024, 2, 10, 12));
        assert_eq!(a, b);
    }

    #[test]
    fn palace_indices_cover_one_through_nine() {
        let ju = Ju::build(at(2024, 6, 1, 8));
        let mut indices: Vec<u8> = ju.palaces.iter().map(|p| p.index.get()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn reference_chart_fixture() {
        // 2024-02-10 noon: 甲辰 year, 丙寅 month, 甲辰 day, 庚午 hour;
        // 立春 yang escapement, lower sub-period, configuration 2.
        let ju = Ju::build(at(2024, 2, 10, 12));
        assert_eq!(ju.configuration, 2);
        assert_eq!(ju.polarity, Polarity::Yang);
        assert_eq!(ju.term, SolarTerm::LiChun);
        assert_eq!(ju.yuan, Yuan::Lower);
        assert_eq!(ju.pillars.year.chinese(), "甲辰");
        assert_eq!(ju.pillars.month.chinese(), "丙寅");
        assert_eq!(ju.pillars.day.chinese(), "甲辰");
        assert_eq!(ju.pillars.hour.chinese(), "庚午");
        // 庚午 hour belongs to the 甲子 decade, concealed by 戊, which the
        // configuration-2 earth plate puts in palace 2.
        assert_eq!(ju.duty_star, Star::TianRui);
        assert_eq!(ju.duty_door, Door::Death);
    }

    #[test]
    fn reference_chart_earth_plate() {
        // Configuration 2, yang: 戊 starts at palace 2 and walks forward.
        let ju = Ju::build(at(2024, 2, 10, 12));
        let earth: Vec<Stem> = ju.palaces.iter().map(|p| p.earth_stem).collect();
        assert_eq!(
            earth,
            vec![
                Stem::Yi,
                Stem::Wu,
                Stem::Ji,
                Stem::Geng,
                Stem::Xin,
                Stem::Ren,
                Stem::Gui,
                Stem::Ding,
                Stem::Bing,
            ]
        );
    }

    #[test]
    fn zero_rotation_leaves_overlays_at_origin() {
        // 午 hour (bucket 6) with configuration 2 gives rotation 0: every
        // outer palace keeps its original star and door.
        let ju = Ju::build(at(2024, 2, 10, 12));
        for p in &ju.palaces {
            if p.index.ring_position().is_some() {
                assert_eq!(p.star, Star::of_origin(p.index), "{}", p.index);
                assert_eq!(Some(p.door), Door::of_origin(p.index), "{}", p.index);
                assert_eq!(p.heaven_stem, p.earth_stem, "{}", p.index);
            }
        }
    }

    #[test]
    fn centre_palace_composition() {
        let ju = Ju::build(at(2024, 2, 10, 12));
        let centre = ju.palace(PalaceIndex::CENTER);
        assert_eq!(centre.star, Star::TianQin);
        assert_eq!(centre.door, ju.duty_door);
        assert_eq!(centre.deity, Deity::ZhiFu);
    }

    #[test]
    fn void_and_horse_flags() {
        // 甲辰 day: voids 寅卯 touch palaces 8 (丑寅) and 3 (卯); the
        // 申子辰 trine sends the horse to 寅, also palace 8.
        let ju = Ju::build(at(2024, 2, 10, 12));
        let void_indices: Vec<u8> = ju
            .palaces
            .iter()
            .filter(|p| p.is_void)
            .map(|p| p.index.get())
            .collect();
        assert_eq!(void_indices, vec![3, 8]);
        let horse_indices: Vec<u8> = ju
            .palaces
            .iter()
            .filter(|p| p.is_horse)
            .map(|p| p.index.get())
            .collect();
        assert_eq!(horse_indices, vec![8]);
    }

    #[test]
    fn yin_escapement_after_summer_solstice() {
        let ju = Ju::build(at(2024, 7, 1, 10));
        assert_eq!(ju.polarity, Polarity::Yin);
        assert_eq!(ju.term, SolarTerm::XiaZhi);
    }

    #[test]
    fn heaven_stems_are_distinct() {
        for ts in [
            at(2024, 2, 10, 12),
            at(2024, 7, 1, 10),
            at(2023, 11, 15, 3),
            at(2025, 1, 1, 23),
        ] {
            let ju = Ju::build(ts);
            let mut stems: Vec<Stem> = ju.palaces.iter().map(|p| p.heaven_stem).collect();
            stems.sort_by_key(|s| s.index());
            stems.dedup();
            assert_eq!(stems.len(), 9, "{ts}");
        }
    }
}
