//! Stem+branch pillars and sexagenary-cycle arithmetic.
//!
//! A pillar pairs one stem with one branch. The sixty valid pairs form the
//! sexagenary cycle; stem and branch always share polarity. The decade-head
//! computations here drive the chart's sub-period selection and void
//! detection.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// A stem+branch pair, one of the four pillars of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    /// The heavenly stem.
    pub stem: Stem,
    /// The earthly branch.
    pub branch: Branch,
}

impl Pillar {
    /// Create a pillar from a stem and branch.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// The pillar at a sexagenary cycle position; wraps modulo 60.
    pub fn from_sexagenary_index(i: usize) -> Self {
        Self {
            stem: Stem::from_index(i % 60),
            branch: Branch::from_index(i % 60),
        }
    }

    /// Position in the sexagenary cycle (0-59), or `None` if the stem and
    /// branch differ in polarity (such a pair never occurs in the cycle).
    pub fn sexagenary_index(self) -> Option<usize> {
        (0..6)
            .map(|k| self.stem.index() + 10 * k)
            .find(|n| n % 12 == self.branch.index())
    }

    /// The pillar's governing element (the stem's element).
    pub fn element(self) -> Element {
        self.stem.element()
    }

    /// The stems hidden inside the pillar's branch.
    pub fn hidden_stems(self) -> &'static [Stem] {
        self.branch.hidden_stems()
    }

    /// The head of this pillar's ten-day decade: the 甲-stem pillar that
    /// opens it. The head branch sits the stem's full cycle offset behind
    /// this pillar's branch.
    pub fn decade_head(self) -> Self {
        let offset = self.stem.index();
        Self {
            stem: Stem::Jia,
            branch: Branch::from_index(self.branch.index() + 12 - offset % 12),
        }
    }

    /// The half-decade ("fu tou") head: stems 甲-戊 lead back to a 甲 head,
    /// stems 己-癸 to a 己 head, each shifted by the stem's offset within
    /// its half-decade.
    pub fn half_decade_head(self) -> Self {
        let offset = self.stem.index() % 5;
        let stem = if self.stem.index() < 5 {
            Stem::Jia
        } else {
            Stem::Ji
        };
        Self {
            stem,
            branch: Branch::from_index(self.branch.index() + 12 - offset),
        }
    }

    /// The two void branches of this pillar's decade: the branches left
    /// uncovered by the ten days starting at the head.
    pub fn void_branches(self) -> [Branch; 2] {
        let head = self.half_decade_head().branch.index();
        [
            Branch::from_index(head + 10),
            Branch::from_index(head + 11),
        ]
    }

    /// The sub-period this pillar's half-decade head selects.
    pub fn yuan(self) -> Yuan {
        match self.half_decade_head().branch {
            Branch::Zi | Branch::Wu | Branch::Mao | Branch::You => Yuan::Upper,
            Branch::Yin | Branch::Shen | Branch::Si | Branch::Hai => Yuan::Middle,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Yuan::Lower,
        }
    }

    /// The two Chinese characters for this pillar.
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// One of the three sub-periods (yuan) a solar term divides into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Yuan {
    /// Upper sub-period (上元).
    Upper,
    /// Middle sub-period (中元).
    Middle,
    /// Lower sub-period (下元).
    Lower,
}

impl std::fmt::Display for Yuan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "Upper"),
            Self::Middle => write!(f, "Middle"),
            Self::Lower => write!(f, "Lower"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagenary_round_trips() {
        for i in 0..60 {
            let p = Pillar::from_sexagenary_index(i);
            assert_eq!(p.sexagenary_index(), Some(i));
        }
    }

    #[test]
    fn mismatched_polarity_has_no_index() {
        // 甲丑 never occurs in the cycle.
        let p = Pillar::new(Stem::Jia, Branch::Chou);
        assert_eq!(p.sexagenary_index(), None);
    }

    #[test]
    fn decade_head_of_jiazi_decade() {
        // 戊辰 sits in the 甲子 decade.
        let p = Pillar::new(Stem::Wu, Branch::Chen);
        let head = p.decade_head();
        assert_eq!(head.stem, Stem::Jia);
        assert_eq!(head.branch, Branch::Zi);
    }

    #[test]
    fn half_decade_heads() {
        // 丙寅: offset 2 within the 甲 half-decade, head 甲子.
        let p = Pillar::new(Stem::Bing, Branch::Yin);
        assert_eq!(p.half_decade_head(), Pillar::new(Stem::Jia, Branch::Zi));

        // 辛巳: offset 2 within the 己 half-decade, head 己卯.
        let p = Pillar::new(Stem::Xin, Branch::Si);
        assert_eq!(p.half_decade_head(), Pillar::new(Stem::Ji, Branch::Mao));
    }

    #[test]
    fn void_branches_of_jiazi_decade() {
        // The 甲子 decade covers 子-酉, leaving 戌亥 void.
        let p = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(p.void_branches(), [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn yuan_classification() {
        // Head 甲子 -> upper.
        assert_eq!(Pillar::new(Stem::Jia, Branch::Zi).yuan(), Yuan::Upper);
        // 丙寅 -> head 甲子 -> upper.
        assert_eq!(Pillar::new(Stem::Bing, Branch::Yin).yuan(), Yuan::Upper);
        // 己卯 is its own head -> upper.
        assert_eq!(Pillar::new(Stem::Ji, Branch::Mao).yuan(), Yuan::Upper);
        // 甲寅 is its own head -> middle.
        assert_eq!(Pillar::new(Stem::Jia, Branch::Yin).yuan(), Yuan::Middle);
        // 甲辰 is its own head -> lower.
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chen).yuan(), Yuan::Lower);
    }

    #[test]
    fn display_and_chinese() {
        let p = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(p.to_string(), "JiaZi");
        assert_eq!(p.chinese(), "甲子");
    }
}
