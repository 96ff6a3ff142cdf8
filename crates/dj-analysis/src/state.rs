//! Life-cycle stages, punishment pairs, and the state scoring table.

use dj_almanac::{Branch, Polarity, SeasonalState, Stem};
use dj_chart::{Palace, PalaceIndex};
use serde::{Deserialize, Serialize};

/// One of the twelve life-cycle stages an element moves through across
/// the branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStage {
    /// 长生 — birth.
    Birth,
    /// 沐浴 — bath.
    Bath,
    /// 冠带 — capping.
    Capping,
    /// 临官 — taking office.
    Office,
    /// 帝旺 — peak.
    Peak,
    /// 衰 — decline.
    Decline,
    /// 病 — sickness.
    Sickness,
    /// 死 — death.
    Death,
    /// 墓 — the grave: energy buried and suppressed.
    Grave,
    /// 绝 — severance.
    Severed,
    /// 胎 — gestation.
    Gestation,
    /// 养 — nurture.
    Nurture,
}

/// The twelve stages in travel order from birth.
const STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bath,
    LifeStage::Capping,
    LifeStage::Office,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Grave,
    LifeStage::Severed,
    LifeStage::Gestation,
    LifeStage::Nurture,
];

impl LifeStage {
    /// The Chinese label for this stage.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Birth => "长生",
            Self::Bath => "沐浴",
            Self::Capping => "冠带",
            Self::Office => "临官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Grave => "墓",
            Self::Severed => "绝",
            Self::Gestation => "胎",
            Self::Nurture => "养",
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Birth => "Birth",
            Self::Bath => "Bath",
            Self::Capping => "Capping",
            Self::Office => "Office",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Grave => "Grave",
            Self::Severed => "Severed",
            Self::Gestation => "Gestation",
            Self::Nurture => "Nurture",
        };
        write!(f, "{name}")
    }
}

/// The branch where each stem is born; yang stems travel forward from it,
/// yin stems backward.
fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Geng => Branch::Si,
        Stem::Ren => Branch::Shen,
        Stem::Yi => Branch::Wu,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Xin => Branch::Zi,
        Stem::Gui => Branch::Mao,
    }
}

/// The life-cycle stage of a stem at a branch.
pub fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    let start = birth_branch(stem).index();
    let steps = match stem.polarity() {
        Polarity::Yang => (branch.index() + 12 - start) % 12,
        Polarity::Yin => (start + 12 - branch.index()) % 12,
    };
    STAGES[steps]
}

/// The life-cycle stage of a stem within a palace's branch set.
///
/// Pinned behaviour: the first branch found decides the stage, unless a
/// later branch lands in the grave, which overrides. The centre palace
/// owns no branches and yields no stage.
pub fn life_stage_in_palace(stem: Stem, palace: &Palace) -> Option<LifeStage> {
    let mut stage = None;
    for branch in palace.index.branches() {
        let s = life_stage(stem, *branch);
        if stage.is_none() || s == LifeStage::Grave {
            stage = Some(s);
        }
    }
    stage
}

/// The palace where a chart stem suffers punishment (击刑), if any.
pub fn punishment_palace(stem: Stem) -> Option<PalaceIndex> {
    let index = match stem {
        Stem::Wu => 3,
        Stem::Ji => 2,
        Stem::Geng => 8,
        Stem::Xin => 9,
        Stem::Ren | Stem::Gui => 4,
        _ => return None,
    };
    PalaceIndex::new(index)
}

/// Base score for a seasonal state, on the fixed five-level table.
pub fn state_base_score(state: SeasonalState) -> i32 {
    match state {
        SeasonalState::Prosperous => 100,
        SeasonalState::Supported => 80,
        SeasonalState::Dominant => 60,
        SeasonalState::Depleting => 40,
        SeasonalState::Suppressed => 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jia_is_born_at_hai_and_peaks_at_mao() {
        assert_eq!(life_stage(Stem::Jia, Branch::Hai), LifeStage::Birth);
        assert_eq!(life_stage(Stem::Jia, Branch::Mao), LifeStage::Peak);
        assert_eq!(life_stage(Stem::Jia, Branch::Wei), LifeStage::Grave);
    }

    #[test]
    fn yin_stems_travel_backward() {
        // 乙 is born at 午 and moves against the branch order.
        assert_eq!(life_stage(Stem::Yi, Branch::Wu), LifeStage::Birth);
        assert_eq!(life_stage(Stem::Yi, Branch::Si), LifeStage::Bath);
        assert_eq!(life_stage(Stem::Yi, Branch::Xu), LifeStage::Grave);
    }

    #[test]
    fn water_stems_grave_in_chen_or_wei() {
        assert_eq!(life_stage(Stem::Ren, Branch::Chen), LifeStage::Grave);
        assert_eq!(life_stage(Stem::Gui, Branch::Wei), LifeStage::Grave);
    }

    #[test]
    fn punishment_table() {
        assert_eq!(punishment_palace(Stem::Wu).map(PalaceIndex::get), Some(3));
        assert_eq!(punishment_palace(Stem::Ji).map(PalaceIndex::get), Some(2));
        assert_eq!(punishment_palace(Stem::Geng).map(PalaceIndex::get), Some(8));
        assert_eq!(punishment_palace(Stem::Xin).map(PalaceIndex::get), Some(9));
        assert_eq!(punishment_palace(Stem::Ren).map(PalaceIndex::get), Some(4));
        assert_eq!(punishment_palace(Stem::Gui).map(PalaceIndex::get), Some(4));
        assert_eq!(punishment_palace(Stem::Jia), None);
        assert_eq!(punishment_palace(Stem::Bing), None);
    }

    #[test]
    fn base_scores_are_the_fixed_ladder() {
        assert_eq!(state_base_score(SeasonalState::Prosperous), 100);
        assert_eq!(state_base_score(SeasonalState::Supported), 80);
        assert_eq!(state_base_score(SeasonalState::Dominant), 60);
        assert_eq!(state_base_score(SeasonalState::Depleting), 40);
        assert_eq!(state_base_score(SeasonalState::Suppressed), 20);
    }
}
