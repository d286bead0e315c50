//! Error types for vocabulary parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A label did not match any entry of the expected vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    UnknownGraha(String),
    UnknownNakshatra(String),
    UnknownGati(String),
    UnknownYesNo(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGraha(s) => write!(f, "unknown planet: {s:?}"),
            Self::UnknownNakshatra(s) => write!(f, "unknown star: {s:?}"),
            Self::UnknownGati(s) => write!(f, "expected Retrograde or Direct, got {s:?}"),
            Self::UnknownYesNo(s) => write!(f, "expected Yes or No, got {s:?}"),
        }
    }
}

impl Error for ParseError {}
