//! Error types for answer-set editing and loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kp_vedic_base::ParseError;

/// Errors from writing to a form session or loading answers/config.
///
/// Derivations themselves never fail; these only guard edits and I/O.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormError {
    /// Key is not one of the 105 question keys.
    UnknownQuestion(String),
    /// Field is computed by derivation and cannot be written.
    ReadOnly(&'static str),
    /// Star lord is derived from the chosen star and cannot be edited.
    AutoFilled(&'static str),
    /// Text written to a multi-select question, or a list to a single one.
    KindMismatch(&'static str),
    /// Value is outside the question's vocabulary.
    InvalidValue { key: &'static str, reason: String },
    /// Configuration is internally inconsistent.
    InvalidConfig(&'static str),
    /// JSON (de)serialization failed.
    Json(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownQuestion(key) => write!(f, "unknown question key: {key}"),
            Self::ReadOnly(key) => write!(f, "{key} is derived and read-only"),
            Self::AutoFilled(key) => {
                write!(f, "{key} is filled from the chosen star and cannot be edited")
            }
            Self::KindMismatch(key) => write!(f, "wrong value kind for {key}"),
            Self::InvalidValue { key, reason } => write!(f, "invalid value for {key}: {reason}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl Error for FormError {}

impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl FormError {
    pub(crate) fn invalid(key: &'static str, e: ParseError) -> Self {
        Self::InvalidValue {
            key,
            reason: e.to_string(),
        }
    }
}
