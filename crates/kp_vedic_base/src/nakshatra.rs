//! The 27 nakshatras and their star lords.
//!
//! Star lordship follows the Vimshottari sequence: starting from Ashwini the
//! lords run Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh
//! and the cycle repeats three times across the 27 stars.
//!
//! Names returned by [`Nakshatra::name`] are the labels KP star pickers use
//! (`Purva Falguni`, `Jyestha`, `Moola`, `Shrovona`, ...). Parsing also
//! accepts the common alternate transliterations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;
use crate::graha::Graha;

/// Label of the star-picker entry meaning "the star is not known but its
/// lord is".
pub const STAR_NA_OPTION: &str = "Star is NA but Star Lord is available";

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lord sequence, repeated every 9 nakshatras.
const STAR_LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    /// Picker label of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Falguni",
            Self::UttaraPhalguni => "Uttara Falguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyestha",
            Self::Mula => "Moola",
            Self::PurvaAshadha => "Purva Shadha",
            Self::UttaraAshadha => "Uttara Shadha",
            Self::Shravana => "Shrovona",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Alternate transliteration, where one is in common use.
    const fn alias(self) -> Option<&'static str> {
        match self {
            Self::PurvaPhalguni => Some("Purva Phalguni"),
            Self::UttaraPhalguni => Some("Uttara Phalguni"),
            Self::Jyeshtha => Some("Jyeshtha"),
            Self::Mula => Some("Mula"),
            Self::PurvaAshadha => Some("Purva Ashadha"),
            Self::UttaraAshadha => Some("Uttara Ashadha"),
            Self::Shravana => Some("Shravana"),
            _ => None,
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// The planet ruling this nakshatra.
    pub fn lord(self) -> Graha {
        nakshatra_lord(self)
    }

    /// Look up a nakshatra by picker label or alternate transliteration,
    /// ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Nakshatra> {
        let name = name.trim();
        ALL_NAKSHATRAS.into_iter().find(|n| {
            n.name().eq_ignore_ascii_case(name)
                || n.alias().is_some_and(|a| a.eq_ignore_ascii_case(name))
        })
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nakshatra::from_name(s).ok_or_else(|| ParseError::UnknownNakshatra(s.to_string()))
    }
}

/// Get the star lord of a nakshatra.
pub fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    STAR_LORD_CYCLE[nakshatra.index() as usize % STAR_LORD_CYCLE.len()]
}

/// One entry of the star picker: a concrete nakshatra, or the sentinel
/// saying the lord will be supplied by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarChoice {
    Star(Nakshatra),
    NotAvailable,
}

impl StarChoice {
    /// Parse a picker label. Returns None for blank or unrecognized text.
    pub fn parse(label: &str) -> Option<StarChoice> {
        if label.trim() == STAR_NA_OPTION {
            return Some(StarChoice::NotAvailable);
        }
        Nakshatra::from_name(label).map(StarChoice::Star)
    }

    /// Picker label of this choice.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Star(n) => n.name(),
            Self::NotAvailable => STAR_NA_OPTION,
        }
    }

    /// Lord implied by the choice; None when it must be entered manually.
    pub fn star_lord(self) -> Option<Graha> {
        match self {
            Self::Star(n) => Some(nakshatra_lord(n)),
            Self::NotAvailable => None,
        }
    }
}

/// Star picker entries: the NA sentinel first, then the 27 stars.
pub fn star_choices() -> impl Iterator<Item = StarChoice> {
    std::iter::once(StarChoice::NotAvailable)
        .chain(ALL_NAKSHATRAS.into_iter().map(StarChoice::Star))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn lords_cycle_every_nine() {
        assert_eq!(nakshatra_lord(Nakshatra::Ashwini), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Magha), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Mula), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Revati), Graha::Buddh);
    }

    #[test]
    fn each_graha_rules_three_stars() {
        for g in crate::graha::ALL_GRAHAS {
            let count = ALL_NAKSHATRAS.iter().filter(|n| n.lord() == g).count();
            assert_eq!(count, 3, "{} should rule 3 nakshatras", g.name());
        }
    }

    #[test]
    fn picker_labels_and_aliases() {
        assert_eq!(Nakshatra::from_name("Shrovona"), Some(Nakshatra::Shravana));
        assert_eq!(Nakshatra::from_name("Shravana"), Some(Nakshatra::Shravana));
        assert_eq!(Nakshatra::from_name("moola"), Some(Nakshatra::Mula));
        assert_eq!(Nakshatra::from_name("Purva Phalguni"), Some(Nakshatra::PurvaPhalguni));
        assert_eq!(Nakshatra::from_name("Abhijit"), None);
    }

    #[test]
    fn star_choice_sentinel() {
        assert_eq!(StarChoice::parse(STAR_NA_OPTION), Some(StarChoice::NotAvailable));
        assert_eq!(StarChoice::NotAvailable.star_lord(), None);
        assert_eq!(StarChoice::NotAvailable.label(), STAR_NA_OPTION);
    }

    #[test]
    fn star_choice_concrete() {
        let choice = StarChoice::parse("Ashwini").unwrap();
        assert_eq!(choice, StarChoice::Star(Nakshatra::Ashwini));
        assert_eq!(choice.star_lord(), Some(Graha::Ketu));
        assert_eq!(StarChoice::parse(""), None);
    }

    #[test]
    fn star_choices_lists_sentinel_first() {
        let choices: Vec<_> = star_choices().collect();
        assert_eq!(choices.len(), 28);
        assert_eq!(choices[0], StarChoice::NotAvailable);
        assert_eq!(choices[1], StarChoice::Star(Nakshatra::Ashwini));
    }
}
