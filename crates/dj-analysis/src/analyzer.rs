//! The palace state analyzer.
//!
//! [`analyze`] judges how one symbol fares in one palace of one chart:
//! its seasonal strength, whether it stands void, buried, or punished, how
//! the day stem relates to it, which patterns its palace forms, and the
//! composite score all of that adds up to. Pure data in, pure data out;
//! the chart is never touched.

use dj_almanac::{Relation, SeasonalState};
use dj_chart::{ConcreteSymbol, Ju, PalaceIndex, Symbol};
use serde::Serialize;

use crate::affair::Industry;
use crate::pattern::{Pattern, PatternClass, match_patterns};
use crate::state::{LifeStage, life_stage_in_palace, punishment_palace, state_base_score};

/// Score bonus for a symbol on its industry's priority list.
const INDUSTRY_BONUS: i32 = 20;

/// Deductions for the three affliction flags.
const VOID_PENALTY: i32 = 25;
const GRAVE_PENALTY: i32 = 20;
const PUNISHMENT_PENALTY: i32 = 15;

/// Contributions of each matched pattern by classification.
const PATTERN_AUSPICIOUS: i32 = 30;
const PATTERN_INAUSPICIOUS: i32 = -40;

/// The score breakdown of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    /// Base score from the seasonal state table.
    pub state: i32,
    /// Contribution of the day-stem relation.
    pub relation: i32,
    /// Summed contribution of matched patterns.
    pub pattern: i32,
    /// Industry priority bonus, if any.
    pub industry: i32,
    /// Void/grave/punishment deductions (zero or negative).
    pub deductions: i32,
    /// The composite total.
    pub total: i32,
}

/// The result of analyzing one symbol in one palace.
///
/// Derived data only — nothing here is stored anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The symbol after dynamic resolution.
    pub symbol: ConcreteSymbol,
    /// The palace analyzed.
    pub palace: PalaceIndex,
    /// Seasonal strength of the symbol's element.
    pub seasonal_state: SeasonalState,
    /// Life-cycle stage of the governing stem here, if the palace owns
    /// any branch.
    pub life_stage: Option<LifeStage>,
    /// Whether the palace stands void for the chart's day.
    pub is_void: bool,
    /// Whether the governing stem lies in its grave here.
    pub in_grave: bool,
    /// Whether the governing stem is punished in this palace.
    pub punished: bool,
    /// Relation of the day stem's element towards the symbol's element.
    pub day_relation: Relation,
    /// Patterns the palace forms, in catalog order.
    pub patterns: Vec<Pattern>,
    /// The score breakdown.
    pub scores: Scores,
}

/// Score contribution of the day-stem relation towards the symbol.
fn relation_score(relation: Relation) -> i32 {
    match relation {
        // The day stem feeds the symbol: the strongest support.
        Relation::Generates => 20,
        Relation::Same => 10,
        // The symbol controls the day stem.
        Relation::OvercomeBy => 5,
        // The symbol spends itself feeding the day stem.
        Relation::GeneratedBy => -5,
        // The day stem overcomes the symbol.
        Relation::Overcomes => -20,
    }
}

/// Analyze a symbol in a palace of a chart.
///
/// The symbol's dynamic markers resolve against the chart first; all
/// judgements then use the resolved symbol. For stars, doors, and deities
/// the palace's heaven stem stands in as the governing stem for the
/// life-cycle and punishment checks.
pub fn analyze(
    ju: &Ju,
    palace: PalaceIndex,
    symbol: Symbol,
    industry: Option<Industry>,
) -> AnalysisResult {
    let resolved = symbol.resolve(ju);
    let target = ju.palace(palace);

    let element = resolved.element();
    let seasonal_state = SeasonalState::classify(element, ju.season_element());

    let governing = match resolved {
        ConcreteSymbol::Stem(s) => s,
        _ => target.heaven_stem,
    };
    let life_stage = life_stage_in_palace(governing, target);
    let in_grave = life_stage == Some(LifeStage::Grave);
    let punished = punishment_palace(governing) == Some(palace);
    let is_void = target.is_void;

    let day_relation = ju.day_stem().element().relation_to(element);

    let patterns = match_patterns(target, ju);
    let pattern_score: i32 = patterns
        .iter()
        .map(|p| match p.class {
            PatternClass::Auspicious => PATTERN_AUSPICIOUS,
            PatternClass::Inauspicious => PATTERN_INAUSPICIOUS,
            PatternClass::Neutral | PatternClass::Special => 0,
        })
        .sum();

    let industry_score = industry
        .filter(|i| i.priority_symbols().contains(&Symbol::from(resolved)))
        .map_or(0, |_| INDUSTRY_BONUS);

    let mut deductions = 0;
    if is_void {
        deductions -= VOID_PENALTY;
    }
    if in_grave {
        deductions -= GRAVE_PENALTY;
    }
    if punished {
        deductions -= PUNISHMENT_PENALTY;
    }

    let state_score = state_base_score(seasonal_state);
    let rel_score = relation_score(day_relation);
    let scores = Scores {
        state: state_score,
        relation: rel_score,
        pattern: pattern_score,
        industry: industry_score,
        deductions,
        total: state_score + rel_score + pattern_score + industry_score + deductions,
    };

    AnalysisResult {
        symbol: resolved,
        palace,
        seasonal_state,
        life_stage,
        is_void,
        in_grave,
        punished,
        day_relation,
        patterns: patterns.into_iter().copied().collect(),
        scores,
    }
}

/// Analyze a symbol in its own owning palace, if it has one.
///
/// Symbols absent from the chart (such as 甲, which never surfaces on the
/// plates) yield `None` and are simply skipped by callers.
pub fn analyze_owning(
    ju: &Ju,
    symbol: Symbol,
    industry: Option<Industry>,
) -> Option<AnalysisResult> {
    let palace = symbol.resolve(ju).owning_palace(ju)?;
    Some(analyze(ju, palace, symbol, industry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dj_almanac::Stem;
    use dj_chart::Star;
    use proptest::prelude::*;

    fn fixture() -> Ju {
        Ju::build(
            NaiveDate::from_ymd_opt(2024, 2, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn day_stem_in_own_palace_is_prosperous_in_season() {
        // 2024-02-11 is an 乙巳 day in the 立春 chart: a wood day stem in
        // the wood season, analyzed in its own owning palace.
        let ju = Ju::build(
            NaiveDate::from_ymd_opt(2024, 2, 11)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        assert_eq!(ju.day_stem(), Stem::Yi);
        assert_eq!(ju.season_element(), dj_almanac::Element::Wood);
        let result = analyze_owning(&ju, Symbol::DayStem, None).unwrap();
        assert_eq!(result.seasonal_state, SeasonalState::Prosperous);
        assert_eq!(result.scores.state, 100);
    }

    #[test]
    fn totals_add_up() {
        let ju = fixture();
        for palace in PalaceIndex::all() {
            let r = analyze(&ju, palace, Symbol::HourStem, Some(Industry::Finance));
            assert_eq!(
                r.scores.total,
                r.scores.state
                    + r.scores.relation
                    + r.scores.pattern
                    + r.scores.industry
                    + r.scores.deductions
            );
        }
    }

    #[test]
    fn void_palace_is_deducted() {
        let ju = fixture();
        // Palace 3 stands void in this chart.
        let r = analyze(&ju, PalaceIndex::new(3).unwrap(), Symbol::HourStem, None);
        assert!(r.is_void);
        assert!(r.scores.deductions <= -25);
    }

    #[test]
    fn industry_bonus_applies_to_priority_symbols() {
        let ju = fixture();
        // 戊 is on the finance priority list; find its owning palace.
        let symbol = Symbol::Stem(Stem::Wu);
        let with = analyze_owning(&ju, symbol, Some(Industry::Finance)).unwrap();
        let without = analyze_owning(&ju, symbol, None).unwrap();
        assert_eq!(with.scores.industry, 20);
        assert_eq!(without.scores.industry, 0);
        assert_eq!(with.scores.total, without.scores.total + 20);
    }

    #[test]
    fn jia_has_no_owning_palace() {
        let ju = fixture();
        assert!(analyze_owning(&ju, Symbol::Stem(Stem::Jia), None).is_none());
    }

    #[test]
    fn grave_detection_uses_governing_stem() {
        // 壬 is buried at 辰; palace 4 owns 辰巳. Plant 壬 as the symbol
        // and analyze palace 4 directly.
        let ju = fixture();
        let r = analyze(&ju, PalaceIndex::new(4).unwrap(), Symbol::Stem(Stem::Ren), None);
        assert_eq!(r.life_stage, Some(LifeStage::Grave));
        assert!(r.in_grave);
    }

    #[test]
    fn grave_override_is_pinned_not_derived() {
        // Palace 4 owns 辰 then 巳. For 壬 the first branch 辰 is already
        // the grave; for 戊 the first branch gives a non-grave stage and
        // no later branch overrides. This pins the documented first-found,
        // grave-overrides tie-break.
        let ju = fixture();
        let wu = analyze(&ju, PalaceIndex::new(4).unwrap(), Symbol::Stem(Stem::Wu), None);
        assert_eq!(
            wu.life_stage,
            Some(crate::state::life_stage(Stem::Wu, dj_almanac::Branch::Chen))
        );
        assert!(!wu.in_grave);
    }

    #[test]
    fn centre_palace_has_no_life_stage() {
        let ju = fixture();
        let r = analyze(&ju, PalaceIndex::CENTER, Symbol::HourStem, None);
        assert_eq!(r.life_stage, None);
        assert!(!r.in_grave);
    }

    #[test]
    fn analyzing_a_star_judges_its_own_element() {
        let ju = fixture();
        let r = analyze_owning(&ju, Symbol::Star(Star::TianXin), None).unwrap();
        // 天心 is metal; in the wood season metal rules but is unsupported.
        assert_eq!(r.seasonal_state, SeasonalState::Dominant);
    }

    proptest! {
        #[test]
        fn score_is_always_finite_and_bounded(
            day in 1u32..=28,
            month in 1u32..=12,
            hour in 0u32..=23,
            palace_idx in 1u8..=9,
            symbol_pick in 0usize..6,
        ) {
            let ju = Ju::build(
                NaiveDate::from_ymd_opt(2024, month, day)
                    .unwrap()
                    .and_hms_opt(hour, 0, 0)
                    .unwrap(),
            );
            let symbol = match symbol_pick {
                0 => Symbol::DayStem,
                1 => Symbol::HourStem,
                2 => Symbol::Stem(Stem::Wu),
                3 => Symbol::Star(Star::TianPeng),
                4 => Symbol::Door(dj_chart::Door::Open),
                _ => Symbol::Deity(dj_chart::Deity::BaiHu),
            };
            let palace = PalaceIndex::new(palace_idx).unwrap();
            let r = analyze(&ju, palace, symbol, Some(Industry::Finance));
            // Even with every affliction at once the total stays inside
            // a small fixed envelope.
            prop_assert!(r.scores.total > -1000 && r.scores.total < 1000);
        }
    }
}
