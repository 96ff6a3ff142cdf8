//! The affair book and the industry priority table.
//!
//! An affair is a named life-question ("investment", "job interview", …)
//! mapped to the symbols that govern it. An industry adapts an affair's
//! symbol list and grants a score bonus to its own priority symbols.
//! Both catalogs are fixed process-wide data.

use dj_almanac::Stem;
use dj_chart::{Deity, Door, Star, Symbol};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A named life-question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affair {
    /// Committing money: investments, trading, funding.
    Investment,
    /// Job interviews and applications.
    JobInterview,
    /// Signing contracts and agreements.
    Contract,
    /// Marriage and courtship.
    Marriage,
    /// Travel and departures.
    Travel,
    /// Lawsuits and disputes.
    Lawsuit,
    /// Examinations and qualifications.
    Exam,
    /// Opening a business or venture.
    Opening,
    /// Seeking treatment or surgery.
    Medical,
    /// Recovering something lost.
    LostItem,
    /// Recovering a lost phone, laptop, or other device.
    LostElectronics,
    /// Negotiations and partnership talks.
    Negotiation,
}

impl Affair {
    /// All affairs in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Investment,
            Self::JobInterview,
            Self::Contract,
            Self::Marriage,
            Self::Travel,
            Self::Lawsuit,
            Self::Exam,
            Self::Opening,
            Self::Medical,
            Self::LostItem,
            Self::LostElectronics,
            Self::Negotiation,
        ]
    }

    /// The stable key used at the API boundary.
    pub fn key(self) -> &'static str {
        match self {
            Self::Investment => "investment",
            Self::JobInterview => "job-interview",
            Self::Contract => "contract",
            Self::Marriage => "marriage",
            Self::Travel => "travel",
            Self::Lawsuit => "lawsuit",
            Self::Exam => "exam",
            Self::Opening => "opening",
            Self::Medical => "medical",
            Self::LostItem => "lost-item",
            Self::LostElectronics => "lost-electronics",
            Self::Negotiation => "negotiation",
        }
    }

    /// The catalog entry for this affair.
    pub fn config(self) -> &'static AffairConfig {
        &AFFAIR_BOOK[Self::all()
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default()]
    }

    /// The symbols to evaluate for this affair, honouring an industry's
    /// override when one exists.
    pub fn symbols(self, industry: Option<Industry>) -> &'static [Symbol] {
        let config = self.config();
        if let Some(industry) = industry {
            for (i, symbols) in config.industry_overrides {
                if *i == industry {
                    return symbols;
                }
            }
        }
        config.primary
    }

    /// The affair's full symbol set: primary (industry-adapted) plus
    /// secondary.
    pub fn all_symbols(self, industry: Option<Industry>) -> Vec<Symbol> {
        let config = self.config();
        let mut symbols: Vec<Symbol> = self.symbols(industry).to_vec();
        symbols.extend_from_slice(config.secondary);
        symbols
    }

    /// Parse an affair from its key.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::all().iter().copied().find(|a| a.key() == needle)
    }
}

impl std::str::FromStr for Affair {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AnalysisError::UnknownAffair(s.to_string()))
    }
}

impl std::fmt::Display for Affair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A catalog entry mapping an affair to its governing symbols.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AffairConfig {
    /// The affair this entry describes.
    pub affair: Affair,
    /// Human-readable display name.
    pub name: &'static str,
    /// The Chinese name.
    pub chinese: &'static str,
    /// The symbols evaluated for this affair, in priority order.
    pub primary: &'static [Symbol],
    /// Supporting symbols reported but not required.
    pub secondary: &'static [Symbol],
    /// Per-industry replacements for the primary list.
    pub industry_overrides: &'static [(Industry, &'static [Symbol])],
}

/// The affair book, in catalog order.
static AFFAIR_BOOK: &[AffairConfig] = &[
    AffairConfig {
        affair: Affair::Investment,
        name: "Investment",
        chinese: "投资",
        primary: &[
            Symbol::Door(Door::Life),
            Symbol::Stem(Stem::Wu),
            Symbol::Star(Star::TianXin),
        ],
        secondary: &[Symbol::Deity(Deity::LiuHe)],
        industry_overrides: &[(
            Industry::Technology,
            &[
                Symbol::Door(Door::Open),
                Symbol::Stem(Stem::Ding),
                Symbol::Star(Star::TianYing),
            ],
        )],
    },
    AffairConfig {
        affair: Affair::JobInterview,
        name: "Job interview",
        chinese: "面试",
        primary: &[
            Symbol::Door(Door::Open),
            Symbol::Star(Star::TianFu),
            Symbol::DayStem,
        ],
        secondary: &[Symbol::Deity(Deity::ZhiFu)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Contract,
        name: "Contract signing",
        chinese: "签约",
        primary: &[
            Symbol::Deity(Deity::LiuHe),
            Symbol::Door(Door::Open),
            Symbol::Stem(Stem::Ding),
        ],
        secondary: &[Symbol::Star(Star::TianFu)],
        industry_overrides: &[(
            Industry::Legal,
            &[
                Symbol::Deity(Deity::LiuHe),
                Symbol::Door(Door::Fright),
                Symbol::Stem(Stem::Ding),
            ],
        )],
    },
    AffairConfig {
        affair: Affair::Marriage,
        name: "Marriage",
        chinese: "婚姻",
        primary: &[
            Symbol::Deity(Deity::LiuHe),
            Symbol::Stem(Stem::Yi),
            Symbol::Stem(Stem::Geng),
        ],
        secondary: &[Symbol::Door(Door::Rest)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Travel,
        name: "Travel",
        chinese: "出行",
        primary: &[
            Symbol::Door(Door::Open),
            Symbol::HourStem,
            Symbol::Deity(Deity::JiuTian),
        ],
        secondary: &[Symbol::Star(Star::TianChong)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Lawsuit,
        name: "Lawsuit",
        chinese: "官司",
        primary: &[
            Symbol::Door(Door::Fright),
            Symbol::Deity(Deity::ZhiFu),
            Symbol::DayStem,
        ],
        secondary: &[Symbol::Star(Star::TianZhu)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Exam,
        name: "Examination",
        chinese: "考试",
        primary: &[
            Symbol::Star(Star::TianFu),
            Symbol::Stem(Stem::Ding),
            Symbol::Door(Door::View),
        ],
        secondary: &[Symbol::Deity(Deity::TaiYin)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Opening,
        name: "Business opening",
        chinese: "开业",
        primary: &[
            Symbol::Door(Door::Open),
            Symbol::Door(Door::Life),
            Symbol::Stem(Stem::Bing),
        ],
        secondary: &[Symbol::Deity(Deity::JiuTian)],
        industry_overrides: &[(
            Industry::Retail,
            &[
                Symbol::Door(Door::Life),
                Symbol::Deity(Deity::LiuHe),
                Symbol::Stem(Stem::Bing),
            ],
        )],
    },
    AffairConfig {
        affair: Affair::Medical,
        name: "Medical treatment",
        chinese: "就医",
        primary: &[
            Symbol::Star(Star::TianXin),
            Symbol::Door(Door::Life),
            Symbol::Stem(Stem::Yi),
        ],
        secondary: &[Symbol::Deity(Deity::JiuDi)],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::LostItem,
        name: "Lost item",
        chinese: "寻物",
        primary: &[
            Symbol::Deity(Deity::XuanWu),
            Symbol::DayStem,
            Symbol::Door(Door::Block),
        ],
        secondary: &[],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::LostElectronics,
        name: "Lost device",
        chinese: "寻找电子设备",
        primary: &[
            Symbol::Deity(Deity::XuanWu),
            Symbol::Stem(Stem::Ding),
            Symbol::Door(Door::View),
        ],
        secondary: &[],
        industry_overrides: &[],
    },
    AffairConfig {
        affair: Affair::Negotiation,
        name: "Negotiation",
        chinese: "谈判",
        primary: &[
            Symbol::Deity(Deity::LiuHe),
            Symbol::Door(Door::Rest),
            Symbol::DayStem,
        ],
        secondary: &[Symbol::Star(Star::TianFu)],
        industry_overrides: &[],
    },
];

/// The full affair book in catalog order.
pub fn affair_book() -> &'static [AffairConfig] {
    AFFAIR_BOOK
}

/// An industry context adapting analysis and affair symbol lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    /// Finance, banking, and trading.
    Finance,
    /// Technology and software.
    Technology,
    /// Education and training.
    Education,
    /// Healthcare and medicine.
    Healthcare,
    /// Law and compliance.
    Legal,
    /// Retail and commerce.
    Retail,
    /// Construction and real estate.
    Construction,
    /// Media and publicity.
    Media,
}

impl Industry {
    /// All industries in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Finance,
            Self::Technology,
            Self::Education,
            Self::Healthcare,
            Self::Legal,
            Self::Retail,
            Self::Construction,
            Self::Media,
        ]
    }

    /// The stable key used at the API boundary.
    pub fn key(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Technology => "technology",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Legal => "legal",
            Self::Retail => "retail",
            Self::Construction => "construction",
            Self::Media => "media",
        }
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Finance => "金融",
            Self::Technology => "科技",
            Self::Education => "教育",
            Self::Healthcare => "医疗",
            Self::Legal => "法律",
            Self::Retail => "零售",
            Self::Construction => "建筑",
            Self::Media => "传媒",
        }
    }

    /// The symbols this industry favours; owning one earns the industry
    /// bonus during analysis.
    pub fn priority_symbols(self) -> &'static [Symbol] {
        match self {
            Self::Finance => &[
                Symbol::Stem(Stem::Wu),
                Symbol::Door(Door::Life),
                Symbol::Star(Star::TianXin),
            ],
            Self::Technology => &[
                Symbol::Stem(Stem::Ding),
                Symbol::Star(Star::TianYing),
                Symbol::Door(Door::Open),
            ],
            Self::Education => &[
                Symbol::Star(Star::TianFu),
                Symbol::Stem(Stem::Ding),
                Symbol::Door(Door::View),
            ],
            Self::Healthcare => &[
                Symbol::Star(Star::TianXin),
                Symbol::Stem(Stem::Yi),
                Symbol::Door(Door::Life),
            ],
            Self::Legal => &[
                Symbol::Door(Door::Fright),
                Symbol::Deity(Deity::ZhiFu),
                Symbol::Star(Star::TianZhu),
            ],
            Self::Retail => &[
                Symbol::Door(Door::Life),
                Symbol::Deity(Deity::LiuHe),
                Symbol::Stem(Stem::Ji),
            ],
            Self::Construction => &[
                Symbol::Star(Star::TianRen),
                Symbol::Stem(Stem::Ji),
                Symbol::Door(Door::Life),
            ],
            Self::Media => &[
                Symbol::Door(Door::View),
                Symbol::Star(Star::TianYing),
                Symbol::Stem(Stem::Bing),
            ],
        }
    }

    /// Parse an industry from its key or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|i| i.key() == needle || i.chinese() == needle)
    }
}

impl std::str::FromStr for Industry {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AnalysisError::UnknownIndustry(s.to_string()))
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
