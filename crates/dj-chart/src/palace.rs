//! Palace indices, the nine-palace grid, and compass directions.
//!
//! Palaces follow the Luoshu arrangement: index 1 (坎) sits north, the
//! indices wind through the eight compass points, and index 5 is the
//! directionless centre. Rotating overlays travel the fixed outer ring
//! 1→8→3→4→9→2→7→6.

use dj_almanac::{Branch, Element, SeasonalState, Stem};
use serde::{Deserialize, Serialize};

use crate::deity::Deity;
use crate::door::Door;
use crate::error::ChartError;
use crate::star::Star;

/// A palace position, 1-9; index 5 is the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalaceIndex(u8);

/// The outer-ring rotation order.
const RING: [u8; 8] = [1, 8, 3, 4, 9, 2, 7, 6];

impl PalaceIndex {
    /// The centre palace.
    pub const CENTER: Self = Self(5);

    /// Create a palace index; `None` outside 1-9.
    pub fn new(index: u8) -> Option<Self> {
        (1..=9).contains(&index).then_some(Self(index))
    }

    /// All nine palace indices in numeric order.
    pub fn all() -> [Self; 9] {
        [
            Self(1),
            Self(2),
            Self(3),
            Self(4),
            Self(5),
            Self(6),
            Self(7),
            Self(8),
            Self(9),
        ]
    }

    /// The eight outer palaces in ring-rotation order.
    pub fn ring() -> [Self; 8] {
        RING.map(Self)
    }

    /// The numeric index (1-9).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of this palace on the outer ring; `None` for the centre.
    pub fn ring_position(self) -> Option<usize> {
        RING.iter().position(|p| *p == self.0)
    }

    /// The trigram name of this palace.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Kan",
            2 => "Kun",
            3 => "Zhen",
            4 => "Xun",
            5 => "Zhong",
            6 => "Qian",
            7 => "Dui",
            8 => "Gen",
            _ => "Li",
        }
    }

    /// The Chinese trigram name of this palace.
    pub fn chinese(self) -> &'static str {
        match self.0 {
            1 => "坎",
            2 => "坤",
            3 => "震",
            4 => "巽",
            5 => "中",
            6 => "乾",
            7 => "兑",
            8 => "艮",
            _ => "离",
        }
    }

    /// The palace's base element.
    pub fn element(self) -> Element {
        match self.0 {
            1 => Element::Water,
            2 | 5 | 8 => Element::Earth,
            3 | 4 => Element::Wood,
            6 | 7 => Element::Metal,
            _ => Element::Fire,
        }
    }

    /// The compass direction of this palace; `None` for the centre.
    pub fn direction(self) -> Option<Direction> {
        match self.0 {
            1 => Some(Direction::North),
            2 => Some(Direction::Southwest),
            3 => Some(Direction::East),
            4 => Some(Direction::Southeast),
            6 => Some(Direction::Northwest),
            7 => Some(Direction::West),
            8 => Some(Direction::Northeast),
            9 => Some(Direction::South),
            _ => None,
        }
    }

    /// The branches this palace owns on the terrestrial compass. The
    /// centre owns none.
    pub fn branches(self) -> &'static [Branch] {
        match self.0 {
            1 => &[Branch::Zi],
            2 => &[Branch::Wei, Branch::Shen],
            3 => &[Branch::Mao],
            4 => &[Branch::Chen, Branch::Si],
            6 => &[Branch::Xu, Branch::Hai],
            7 => &[Branch::You],
            8 => &[Branch::Chou, Branch::Yin],
            9 => &[Branch::Wu],
            _ => &[],
        }
    }
}

impl TryFrom<u8> for PalaceIndex {
    type Error = ChartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ChartError::InvalidPalaceIndex(value))
    }
}

impl std::fmt::Display for PalaceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

/// One of the eight compass directions a palace can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// Northeast.
    Northeast,
    /// East.
    East,
    /// Southeast.
    Southeast,
    /// South.
    South,
    /// Southwest.
    Southwest,
    /// West.
    West,
    /// Northwest.
    Northwest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub fn all() -> &'static [Self] {
        &[
            Self::North,
            Self::Northeast,
            Self::East,
            Self::Southeast,
            Self::South,
            Self::Southwest,
            Self::West,
            Self::Northwest,
        ]
    }

    /// The lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::Northeast => "东北",
            Self::East => "东",
            Self::Southeast => "东南",
            Self::South => "南",
            Self::Southwest => "西南",
            Self::West => "西",
            Self::Northwest => "西北",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One compartment of a chart: the palace and its five overlays.
///
/// Palaces are owned exclusively by their parent [`crate::Ju`] and never
/// outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    /// The palace position.
    pub index: PalaceIndex,
    /// The heaven-plate stem.
    pub heaven_stem: Stem,
    /// The earth-plate stem.
    pub earth_stem: Stem,
    /// The star lodged here.
    pub star: Star,
    /// The door lodged here.
    pub door: Door,
    /// The deity lodged here.
    pub deity: Deity,
    /// Seasonal state of the palace's base element.
    pub state: SeasonalState,
    /// Whether a void branch of the day decade falls here.
    pub is_void: bool,
    /// Whether the day's post horse falls here.
    pub is_horse: bool,
}
