//! Answer vocabularies for motion status (gati) and yes/no questions.
//!
//! Both are matched on exact labels: anything other than the listed words,
//! including blank text, is "not answered".

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

/// Apparent motion of a planet as reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gati {
    Retrograde,
    Direct,
}

/// Status labels in picker order.
pub const GATI_LABELS: [&str; 2] = ["Retrograde", "Direct"];

impl Gati {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retrograde => "Retrograde",
            Self::Direct => "Direct",
        }
    }

    /// Exact-label match; `"direct"` or `" Direct"` are not statuses.
    pub fn from_answer(text: &str) -> Option<Gati> {
        match text {
            "Retrograde" => Some(Self::Retrograde),
            "Direct" => Some(Self::Direct),
            _ => None,
        }
    }
}

impl Display for Gati {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gati {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gati::from_answer(s).ok_or_else(|| ParseError::UnknownGati(s.to_string()))
    }
}

/// Yes/No answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

/// Yes/No labels in picker order.
pub const YES_NO_LABELS: [&str; 2] = ["Yes", "No"];

impl YesNo {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn from_answer(text: &str) -> Option<YesNo> {
        match text {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }
}

impl Display for YesNo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for YesNo {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YesNo::from_answer(s).ok_or_else(|| ParseError::UnknownYesNo(s.to_string()))
    }
}
