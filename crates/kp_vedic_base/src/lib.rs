//! Static reference data for KP (Krishnamurti Paddhati) chart questionnaires.
//!
//! This crate provides:
//! - The 9 grahas in their canonical order, with English and Sanskrit names
//! - The 27 nakshatras and the star lord ruling each of them
//! - The "star not available" picker sentinel
//! - Retrograde/Direct and Yes/No answer vocabularies
//!
//! Everything here is constant data; nothing is computed from ephemerides.

pub mod error;
pub mod gati;
pub mod graha;
pub mod nakshatra;

pub use error::ParseError;
pub use gati::{GATI_LABELS, Gati, YES_NO_LABELS, YesNo};
pub use graha::{ALL_GRAHAS, GRAHA_NAMES, Graha, graha_order};
pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, STAR_NA_OPTION, StarChoice, nakshatra_lord, star_choices,
};
