//! The pattern catalog and matcher.
//!
//! A pattern is a named two- or three-element configuration a palace can
//! form: the classic heaven-over-earth stem pairs, stem+star, stem+deity,
//! and door+deity combinations, plus a few structural conditions that read
//! the chart as a whole. The catalog is fixed process-wide data; matching
//! returns entries in catalog-declaration order and never mutates.

use dj_almanac::Stem;
use dj_chart::{Deity, Door, Ju, Palace, PalaceIndex, Star};
use serde::{Deserialize, Serialize};

use crate::affair::Industry;

/// Classification of a pattern's influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternClass {
    /// Favourable; adds to the palace score.
    Auspicious,
    /// Unfavourable; subtracts from the palace score.
    Inauspicious,
    /// Neither; advisory only.
    Neutral,
    /// Structural condition reported without a score contribution.
    Special,
}

impl std::fmt::Display for PatternClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auspicious => write!(f, "auspicious"),
            Self::Inauspicious => write!(f, "inauspicious"),
            Self::Neutral => write!(f, "neutral"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// The typed lookup key of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKey {
    /// Heaven-plate stem over earth-plate stem.
    StemPair(Stem, Stem),
    /// Heaven-plate stem together with the palace star.
    StemStar(Stem, Star),
    /// Heaven-plate stem together with the palace deity.
    StemDeity(Stem, Deity),
    /// Palace door together with the palace deity.
    DoorDeity(Door, Deity),
    /// A structural condition on the palace within its chart.
    Structural(Structural),
}

/// Structural conditions not expressible as a symbol pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Structural {
    /// The palace door is the chart's duty door and 丁 sits on the earth
    /// plate: the jade maiden guards the gate.
    JadeMaiden,
    /// The day or hour stem stands in its own void palace.
    StemIntoVoid,
    /// The door has returned to its origin palace (伏吟).
    DoorStillness,
    /// The door faces its origin palace across the grid (反吟).
    DoorReversal,
}

/// A static catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pattern {
    /// The typed key this entry matches on.
    pub key: PatternKey,
    /// English display name.
    pub name: &'static str,
    /// The traditional Chinese name.
    pub chinese: &'static str,
    /// Influence classification.
    pub class: PatternClass,
    /// One-line reading of the configuration.
    pub description: &'static str,
    /// Optional action advice quoted by the advice generator.
    pub advice: Option<&'static str>,
    /// Optional per-industry annotations.
    pub industry_notes: &'static [(Industry, &'static str)],
}

const fn pair(
    heaven: Stem,
    earth: Stem,
    chinese: &'static str,
    name: &'static str,
    class: PatternClass,
    description: &'static str,
) -> Pattern {
    Pattern {
        key: PatternKey::StemPair(heaven, earth),
        name,
        chinese,
        class,
        description,
        advice: None,
        industry_notes: &[],
    }
}

const fn star(
    stem: Stem,
    star: Star,
    chinese: &'static str,
    name: &'static str,
    class: PatternClass,
    description: &'static str,
) -> Pattern {
    Pattern {
        key: PatternKey::StemStar(stem, star),
        name,
        chinese,
        class,
        description,
        advice: None,
        industry_notes: &[],
    }
}

const fn deity(
    stem: Stem,
    deity: Deity,
    chinese: &'static str,
    name: &'static str,
    class: PatternClass,
    description: &'static str,
) -> Pattern {
    Pattern {
        key: PatternKey::StemDeity(stem, deity),
        name,
        chinese,
        class,
        description,
        advice: None,
        industry_notes: &[],
    }
}

const fn door(
    door: Door,
    deity: Deity,
    chinese: &'static str,
    name: &'static str,
    class: PatternClass,
    description: &'static str,
) -> Pattern {
    Pattern {
        key: PatternKey::DoorDeity(door, deity),
        name,
        chinese,
        class,
        description,
        advice: None,
        industry_notes: &[],
    }
}

const fn advised(mut p: Pattern, advice: &'static str) -> Pattern {
    p.advice = Some(advice);
    p
}

use PatternClass::{Auspicious as A, Inauspicious as X, Neutral as N};
use Stem::{Bing, Ding, Geng, Gui, Ji, Ren, Wu, Xin, Yi};

/// The full pattern catalog, in declaration order.
///
/// The first block is the classic heaven-over-earth table for the nine
/// chart stems, row by heaven stem.
static CATALOG: &[Pattern] = &[
    // 乙 heaven row.
    pair(Yi, Yi, "日奇伏吟", "Sun radiance doubled", N,
        "The radiance sits on itself, unmoving; no day for audiences or launches."),
    pair(Yi, Bing, "奇仪顺遂", "Radiances in step", A,
        "The lesser light rides the greater; ventures move smoothly."),
    pair(Yi, Ding, "奇仪相佐", "Radiances assisting", A,
        "The two lights assist each other; plans gain quiet help."),
    pair(Yi, Wu, "利阴害阳", "Gain for the quiet", N,
        "The quiet party gains, the bold one pays; act through intermediaries."),
    pair(Yi, Ji, "日奇入雾", "Radiance in fog", X,
        "The light sinks into fog; clarity is lost and advice misleads."),
    pair(Yi, Geng, "日奇被刑", "Radiance wounded", X,
        "The light is cut; disputes flare over what was promised."),
    pair(Yi, Xin, "青龙逃走", "Dragon takes flight", X,
        "The azure dragon flees; people and property slip away."),
    pair(Yi, Ren, "日奇入泉", "Radiance under water", N,
        "Hidden but not extinguished; keep intentions submerged."),
    pair(Yi, Gui, "华盖逢星", "Canopy over radiance", N,
        "The canopy shades the light; better for retreat and study."),
    // 丙 heaven row.
    pair(Bing, Yi, "日月并行", "Sun and moon together", A,
        "Both lights travel together; public matters prosper."),
    pair(Bing, Bing, "月奇悖师", "Doubled fire rebels", X,
        "Fire on fire turns chaotic; documents and credentials suffer."),
    pair(Bing, Ding, "星随月转", "Star follows the moon", A,
        "Favour flows from influential people; present yourself."),
    advised(
        pair(Bing, Wu, "飞鸟跌穴", "Bird falls into the nest", A,
            "A rare opening lands in your lap; the strongest sign after the turning dragon."),
        "Act decisively while the opening lasts.",
    ),
    pair(Bing, Ji, "大悖入刑", "Great rebellion punished", X,
        "Defiance meets punishment; keep far from contested ground."),
    pair(Bing, Geng, "荧入太白", "Mars enters Venus", X,
        "Breakage and upheaval on the road; postpone movement."),
    pair(Bing, Xin, "谋事就成", "Plans conclude", A,
        "Quiet plans reach their end; sign and seal."),
    pair(Bing, Ren, "火入天罗", "Fire in the sky net", X,
        "The flame is netted; ambition burns against a ceiling."),
    pair(Bing, Gui, "华盖悖师", "Canopy rebellion", X,
        "Cover and chaos together; withdraw from public view."),
    // 丁 heaven row.
    pair(Ding, Yi, "玉女奇生", "Jade maiden bears light", A,
        "Noble help arrives through a gentle hand."),
    pair(Ding, Bing, "星奇朱雀", "Starlight vermilion bird", N,
        "Bright but talkative; good for pitching, risky for secrets."),
    pair(Ding, Ding, "奇入太阴", "Starlight doubled", A,
        "Documents and messages arrive; correspondence succeeds."),
    pair(Ding, Wu, "青龙转光", "Dragon turns its light", A,
        "Stalled matters revive; a second attempt succeeds."),
    pair(Ding, Ji, "火入勾陈", "Fire in the hook", X,
        "Entanglements multiply; quarrels over trifles."),
    pair(Ding, Geng, "文书阻隔", "Papers obstructed", X,
        "Paperwork stalls; the messenger is held at the gate."),
    pair(Ding, Xin, "朱雀入狱", "Vermilion bird jailed", X,
        "Words are confined; appeals and applications fail."),
    pair(Ding, Ren, "五神互合", "Five spirits accord", A,
        "Deep accord; alliances and pledges hold."),
    pair(Ding, Gui, "朱雀投江", "Bird drowns in the river", X,
        "Letters go astray; cases go against you."),
    // 戊 heaven row.
    pair(Wu, Yi, "青龙合灵", "Dragon joins grace", A,
        "Wealth joins grace; steady gains through alliances."),
    advised(
        pair(Wu, Bing, "青龙返首", "Dragon turns its head", A,
            "The strongest sign for wealth and backing; patrons look your way."),
        "Press the advantage: ask for the bigger commitment.",
    ),
    pair(Wu, Ding, "青龙耀明", "Dragon shines", A,
        "Wealth shines openly; seek recognition and promotion."),
    pair(Wu, Wu, "伏吟天武", "Capital motionless", N,
        "Capital sits on capital, unmoving; hold rather than push."),
    pair(Wu, Ji, "贵人入狱", "Patron confined", X,
        "The patron is confined; favours cannot reach you."),
    pair(Wu, Geng, "值符飞宫", "Wealth flies the palace", X,
        "Wealth leaves its seat; guard against loss and default."),
    pair(Wu, Xin, "青龙折足", "Dragon breaks a leg", X,
        "A venture stumbles mid-stride; reinforce before extending."),
    pair(Wu, Ren, "青龙入天牢", "Dragon in the sky jail", X,
        "Assets frozen; liquidity is the first casualty."),
    pair(Wu, Gui, "青龙华盖", "Dragon under canopy", N,
        "Quiet accumulation without display."),
    // 己 heaven row.
    pair(Ji, Yi, "墓神不明", "Murky ground", N,
        "The ground is murky; survey before you dig."),
    pair(Ji, Bing, "火悖地户", "Fire rebels at the door", X,
        "Heat under the threshold; household and premises suffer."),
    pair(Ji, Ding, "朱雀入墓", "Bird enters the grave", X,
        "Words are buried; petitions go unheard."),
    pair(Ji, Wu, "犬遇青龙", "Dog meets the dragon", A,
        "The humble meets the mighty; unexpected promotion."),
    pair(Ji, Ji, "地户逢鬼", "Ghosts at the door", X,
        "Double earth breeds suspicion; rumours in the household."),
    pair(Ji, Geng, "刑格返名", "Accusation rebounds", X,
        "Accusations rebound on the accuser; avoid litigation."),
    pair(Ji, Xin, "游魂入墓", "Wandering soul buried", X,
        "Restless plans sink into sand; close the old before the new."),
    pair(Ji, Ren, "地网高张", "Ground net spread", X,
        "Movement invites entanglement; stay where you stand."),
    pair(Ji, Gui, "地刑玄武", "Earth punishes the tortoise", X,
        "Hidden dealings surface badly; come clean first."),
    // 庚 heaven row.
    pair(Geng, Yi, "太白逢星", "Blade meets radiance", N,
        "Rivals circle but hold; parley is still possible."),
    pair(Geng, Bing, "太白入荧", "Venus enters Mars", X,
        "Theft and clashes; double the locks."),
    pair(Geng, Ding, "亭亭之格", "The standoff", N,
        "A standoff that favours patience over force."),
    pair(Geng, Wu, "天乙伏宫", "Force presses the seat", X,
        "Force presses on wealth; costs outrun gains."),
    pair(Geng, Ji, "官符刑格", "Official writ", X,
        "Official trouble; keep the papers in order."),
    pair(Geng, Geng, "太白同宫", "Two blades one palace", X,
        "Open conflict; nothing is settled by talk today."),
    pair(Geng, Xin, "白虎干格", "Tiger blocks the way", X,
        "The road is barred by force; turn back early."),
    pair(Geng, Ren, "移荡小格", "Drifting block", X,
        "Drifting and blocked; journeys stall mid-way."),
    pair(Geng, Gui, "大格", "The great block", X,
        "Nothing passes; the day defeats all pushing."),
    // 辛 heaven row.
    advised(
        pair(Xin, Yi, "白虎猖狂", "Tiger runs wild", X,
            "The white tiger runs loose; injuries on the road and in the word."),
        "Keep to known routes and written agreements.",
    ),
    pair(Xin, Bing, "干合悖师", "Forced pairing", N,
        "A forced pairing; agreements made now need redoing."),
    pair(Xin, Ding, "狱神得奇", "Light reaches the cell", A,
        "Grievances find redress; reopen the closed case."),
    pair(Xin, Wu, "困龙被伤", "Trapped dragon wounded", X,
        "The trapped dragon is wounded; cut losses cleanly."),
    pair(Xin, Ji, "入狱自刑", "Self-inflicted jail", X,
        "Errors compound by concealment."),
    pair(Xin, Geng, "白虎出力", "Tiger strains", X,
        "Harsh words turn physical; de-escalate in person."),
    pair(Xin, Xin, "伏吟天庭", "Error doubled", X,
        "The fault repeats itself; confession beats concealment."),
    pair(Xin, Ren, "凶蛇入狱", "Serpent jailed", X,
        "A schemer is cornered and bites; settle quietly."),
    pair(Xin, Gui, "天牢华盖", "Jail under canopy", X,
        "Dark and shut; postpone everything public."),
    // 壬 heaven row.
    pair(Ren, Yi, "小蛇得势", "Small serpent rises", A,
        "The junior gains power; back the newcomer."),
    pair(Ren, Bing, "水蛇入火", "Serpent into fire", X,
        "Water meets fire badly; emotions flood the plan."),
    pair(Ren, Ding, "干合星奇", "Water pledges starlight", A,
        "Hearts align; engagements and accords succeed."),
    pair(Ren, Wu, "小蛇化龙", "Serpent becomes dragon", A,
        "A breakout from obscurity; the small stake multiplies."),
    pair(Ren, Ji, "凶蛇入狱", "Serpent in the pit", X,
        "Schemes sink into mud; withdraw the clever plan."),
    pair(Ren, Geng, "太白擒蛇", "Blade pins the serpent", N,
        "Judged strictly but fairly; accept the ruling."),
    pair(Ren, Xin, "腾蛇相缠", "Coil upon coil", X,
        "Rumours bind you; move nothing in the dark."),
    pair(Ren, Ren, "蛇入地罗", "Serpent in the ground net", X,
        "Doubled water dissolves plans; fix one bank first."),
    pair(Ren, Gui, "幼女奸淫", "Sordid entanglement", X,
        "Reputations at stake; refuse the improper shortcut."),
    // 癸 heaven row.
    pair(Gui, Yi, "华盖逢星", "Shade meets radiance", N,
        "Retreat is fruitful; study beats striving."),
    pair(Gui, Bing, "华盖悖师", "Cover blown", N,
        "Concealment fails at the wrong hour; prepare a public answer."),
    pair(Gui, Ding, "腾蛇夭矫", "Serpent rears", X,
        "Documents spark disputes; read before sealing."),
    pair(Gui, Wu, "天乙会合", "Patrons convene", A,
        "A meeting of patrons; introductions succeed."),
    pair(Gui, Ji, "华盖地户", "Stillness under cover", N,
        "Convalescence and study; the world can wait."),
    pair(Gui, Geng, "太白入网", "Blade in the net", X,
        "Force backfires; the harder the pull, the tighter the knot."),
    pair(Gui, Xin, "网盖天牢", "Net over the jail", X,
        "Double confinement; wait for the term to pass."),
    pair(Gui, Ren, "复见腾蛇", "Serpent returns", X,
        "Old troubles resurface; answer them this time."),
    advised(
        pair(Gui, Gui, "天网四张", "Net on every side", X,
            "The net is spread on every side; nothing escapes today."),
        "Wait it out; schedule nothing that can be postponed.",
    ),
    // Stem + star combinations.
    star(Yi, Star::TianFu, "奇辅同宫", "Radiance joins the scholar", A,
        "Studies, appointments, and examinations flourish."),
    star(Bing, Star::TianYing, "火明星旺", "Twin flames", A,
        "Visibility peaks; manage the heat it draws."),
    star(Ding, Star::TianXin, "星奇天医", "Starlight heals", A,
        "The healing star is lit; treatments and remedies take."),
    star(Wu, Star::TianRen, "财星得土", "Wealth finds ground", A,
        "Steady assets; buy land, not rumours."),
    star(Geng, Star::TianZhu, "刃柱相并", "Blade meets pillar", X,
        "Breakage doubled; structures and deals crack."),
    star(Ren, Star::TianPeng, "蓬星涨水", "Flood tide", X,
        "The gambling star swells; risk compounds unseen."),
    star(Xin, Star::TianRui, "芮金带疾", "Illness lingers", X,
        "Old ailments return; rest before they insist."),
    star(Gui, Star::TianQin, "禽藏于渊", "Regulator hidden", N,
        "The quiet centre holds; coordinate, do not lead."),
    // Stem + deity combinations.
    deity(Ding, Deity::TaiYin, "玉女藏形", "Jade maiden veiled", A,
        "Protection through discretion; the quiet channel works."),
    deity(Wu, Deity::ZhiFu, "符护其财", "Chief guards the wealth", A,
        "Assets under the chief's seal; collateral is safe."),
    deity(Yi, Deity::LiuHe, "奇合姻缘", "Radiance weds harmony", A,
        "Bonds form easily; propose, introduce, reconcile."),
    deity(Bing, Deity::JiuTian, "火腾九天", "Fire mounts the heavens", A,
        "Announce boldly; the message carries far."),
    deity(Geng, Deity::BaiHu, "虎啸金风", "Tiger howls on metal wind", X,
        "Force stacked on force; accidents seek the hasty."),
    deity(Gui, Deity::XuanWu, "武潜深水", "Tortoise in deep water", X,
        "Theft and deception thrive; verify every hand you shake."),
    // Door + deity combinations.
    advised(
        door(Door::Open, Deity::ZhiFu, "开门值符", "Open gate, chief presiding", A,
            "The front door with the chief above it; the straight path wins."),
        "Go through the front door: apply, pitch, file officially.",
    ),
    door(Door::Life, Deity::JiuTian, "生门九天", "Growth to the heavens", A,
        "Growth amplified; expand and publicise."),
    door(Door::Rest, Deity::TaiYin, "休门太阴", "Rest in the moon's shade", A,
        "Recovery and quiet negotiation prosper."),
    door(Door::View, Deity::JiuTian, "景门九天", "Beacon to the heavens", A,
        "Documents, fame, and examinations carry far."),
    door(Door::Life, Deity::LiuHe, "生门六合", "Growth in harmony", A,
        "Partnerships take root; share the equity."),
    advised(
        door(Door::Death, Deity::BaiHu, "死门白虎", "Death gate, white tiger", X,
            "The worst gate under the worst guard; mourning and injury attend it."),
        "Do not break ground, operate, or travel toward this direction.",
    ),
    door(Door::Fright, Deity::TengShe, "惊门螣蛇", "Fright and coiling snake", X,
        "Panic feeds on phantoms; most alarms are false, one is not."),
    door(Door::Harm, Deity::XuanWu, "伤门玄武", "Harm and the tortoise", X,
        "Injury and theft together; carry less, insure more."),
    door(Door::Block, Deity::JiuDi, "杜门九地", "Blocked into the earth", N,
        "Seal, archive, and hide; nothing started here leaks."),
    door(Door::Death, Deity::XuanWu, "死门玄武", "Death gate, dark water", X,
        "Losses vanish without trace; write everything down."),
    // Structural conditions.
    Pattern {
        key: PatternKey::Structural(Structural::JadeMaiden),
        name: "Jade maiden guards the gate",
        chinese: "玉女守门",
        class: PatternClass::Special,
        description: "The duty door stands over 丁: a trusted hand holds the gate open.",
        advice: Some("Favourable for meetings, courtship, and discreet requests."),
        industry_notes: &[],
    },
    Pattern {
        key: PatternKey::Structural(Structural::StemIntoVoid),
        name: "Favoured stem in a void palace",
        chinese: "日时落空",
        class: PatternClass::Special,
        description: "The day or hour stem stands in its own void palace; promises evaporate.",
        advice: Some("Confirm commitments twice; what is agreed today may not hold."),
        industry_notes: &[],
    },
    Pattern {
        key: PatternKey::Structural(Structural::DoorStillness),
        name: "Door stillness",
        chinese: "门户伏吟",
        class: PatternClass::Inauspicious,
        description: "The door has returned to its origin palace; events repeat without advancing.",
        advice: None,
        industry_notes: &[],
    },
    Pattern {
        key: PatternKey::Structural(Structural::DoorReversal),
        name: "Door reversal",
        chinese: "门户反吟",
        class: PatternClass::Inauspicious,
        description: "The door faces its origin across the grid; matters reverse mid-course.",
        advice: None,
        industry_notes: &[],
    },
];

/// The full pattern catalog, in declaration order.
pub fn catalog() -> &'static [Pattern] {
    CATALOG
}

/// Whether a catalog key matches a palace within its chart.
fn key_matches(key: PatternKey, palace: &Palace, ju: &Ju) -> bool {
    match key {
        PatternKey::StemPair(heaven, earth) => {
            palace.heaven_stem == heaven && palace.earth_stem == earth
        }
        PatternKey::StemStar(stem, star) => palace.heaven_stem == stem && palace.star == star,
        PatternKey::StemDeity(stem, deity) => palace.heaven_stem == stem && palace.deity == deity,
        PatternKey::DoorDeity(door, deity) => palace.door == door && palace.deity == deity,
        PatternKey::Structural(s) => match s {
            Structural::JadeMaiden => {
                palace.door == ju.duty_door && palace.earth_stem == Stem::Ding
            }
            Structural::StemIntoVoid => {
                palace.is_void
                    && (palace.heaven_stem == ju.day_stem()
                        || palace.heaven_stem == ju.hour_stem())
            }
            Structural::DoorStillness => {
                palace.index != PalaceIndex::CENTER
                    && palace.door.origin_palace() == palace.index
            }
            Structural::DoorReversal => {
                palace.index != PalaceIndex::CENTER
                    && palace.door.origin_palace().get() + palace.index.get() == 10
            }
        },
    }
}

/// Match a palace against the catalog.
///
/// Returns every entry whose key the palace satisfies, in declaration
/// order. Several patterns may apply at once; the analyzer sums their
/// contributions.
pub fn match_patterns(palace: &Palace, ju: &Ju) -> Vec<&'static Pattern> {
    CATALOG
        .iter()
        .filter(|p| key_matches(p.key, palace, ju))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture() -> Ju {
        Ju::build(
            NaiveDate::from_ymd_opt(2024, 2, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn catalog_is_substantial() {
        // The stem table alone contributes 81 entries.
        assert!(CATALOG.len() > 100, "{}", CATALOG.len());
    }

    #[test]
    fn stem_table_is_complete() {
        let chart_stems = [Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui];
        for h in chart_stems {
            for e in chart_stems {
                assert!(
                    CATALOG
                        .iter()
                        .any(|p| p.key == PatternKey::StemPair(h, e)),
                    "missing {h}{e}"
                );
            }
        }
    }

    #[test]
    fn fixture_palace_two_forms_motionless_capital() {
        // Zero rotation puts 戊 over 戊 in palace 2 and every door home.
        let ju = fixture();
        let palace = *ju.palace(PalaceIndex::new(2).unwrap());
        let names: Vec<&str> = match_patterns(&palace, &ju).iter().map(|p| p.chinese).collect();
        assert!(names.contains(&"伏吟天武"), "{names:?}");
        assert!(names.contains(&"门户伏吟"), "{names:?}");
    }

    #[test]
    fn matches_preserve_catalog_order() {
        let ju = fixture();
        let palace = *ju.palace(PalaceIndex::new(2).unwrap());
        let matched = match_patterns(&palace, &ju);
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| {
                CATALOG
                    .iter()
                    .position(|p| std::ptr::eq(p, *m))
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn jade_maiden_requires_duty_door_over_ding() {
        let ju = fixture();
        let mut palace = *ju.palace(PalaceIndex::new(8).unwrap());
        palace.door = ju.duty_door;
        palace.earth_stem = Stem::Ding;
        let names: Vec<&str> = match_patterns(&palace, &ju).iter().map(|p| p.chinese).collect();
        assert!(names.contains(&"玉女守门"), "{names:?}");
    }

    #[test]
    fn hour_stem_in_void_palace_is_flagged() {
        let ju = fixture();
        // Palace 3 is void in this chart; plant the hour stem there.
        let mut palace = *ju.palace(PalaceIndex::new(3).unwrap());
        assert!(palace.is_void);
        palace.heaven_stem = ju.hour_stem();
        let names: Vec<&str> = match_patterns(&palace, &ju).iter().map(|p| p.chinese).collect();
        assert!(names.contains(&"日时落空"), "{names:?}");
    }

    #[test]
    fn door_reversal_across_the_grid() {
        let ju = fixture();
        // Rest door (origin 1) standing in palace 9 faces its origin.
        let mut palace = *ju.palace(PalaceIndex::new(9).unwrap());
        palace.door = Door::Rest;
        let names: Vec<&str> = match_patterns(&palace, &ju).iter().map(|p| p.chinese).collect();
        assert!(names.contains(&"门户反吟"), "{names:?}");
    }

    #[test]
    fn centre_palace_skips_door_structurals() {
        let ju = fixture();
        let centre = *ju.palace(PalaceIndex::CENTER);
        for p in match_patterns(&centre, &ju) {
            assert!(!matches!(
                p.key,
                PatternKey::Structural(Structural::DoorStillness)
                    | PatternKey::Structural(Structural::DoorReversal)
            ));
        }
    }
}
