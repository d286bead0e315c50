//! The 9 grahas and their canonical ordering.
//!
//! KP questionnaires name planets by their English names (Sun .. Ketu) and
//! list them in the traditional order. That order is the only ranking used
//! when planets are sorted for display.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// English planet names in traditional order, as offered by planet pickers.
pub const GRAHA_NAMES: [&str; 9] = [
    "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu",
];

impl Graha {
    /// English name of the graha. This is the label stored in answers.
    pub const fn name(self) -> &'static str {
        GRAHA_NAMES[self.index() as usize]
    }

    /// Sanskrit name of the graha.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Look up a graha by English or Sanskrit name, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Graha> {
        let name = name.trim();
        ALL_GRAHAS.into_iter().find(|g| {
            g.name().eq_ignore_ascii_case(name) || g.sanskrit_name().eq_ignore_ascii_case(name)
        })
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Graha {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graha::from_name(s).ok_or_else(|| ParseError::UnknownGraha(s.to_string()))
    }
}

/// Rank of a planet label in the traditional order.
///
/// Only exact English names rank; anything else (blank, misspelt, Sanskrit)
/// gets `ALL_GRAHAS.len()` so it sorts after every known planet.
pub fn graha_order(name: &str) -> usize {
    GRAHA_NAMES
        .iter()
        .position(|&n| n == name)
        .unwrap_or(ALL_GRAHAS.len())
}
