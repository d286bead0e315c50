//! Core of the KP house-analysis questionnaire.
//!
//! This crate provides:
//! - The 105-question catalog with its stable field keys and dynamic prompts
//! - Answer-driven visibility of every question
//! - Signification aggregation (`"1, 5, [2]"` style house lists)
//! - Totals, summary and Direct/Retrograde planet lists derived from answers
//! - An editing session that keeps derived fields and the star lord current
//!
//! Nothing here talks to a UI or a store; callers hand in an [`AnswerSet`]
//! and read derived values back.

pub mod answers;
pub mod catalog;
pub mod config;
pub mod derive;
pub mod error;
pub mod layout;
pub mod planet_status;
pub mod session;
pub mod signification;
pub mod structured;
pub mod visibility;

pub use answers::{AnswerSet, AnswerValue};
pub use catalog::{Card, InputKind, Question, Role, by_number, lookup, questions};
pub use config::{FormConfig, StalePolicy};
pub use derive::{Derivation, derive, derive_structured};
pub use error::FormError;
pub use layout::{ALL_RELATIONS, Anchor, Aspect, Relation, RelationLayout};
pub use planet_status::{PlanetStatusEntry, PlanetStatusLists, derive_planet_status};
pub use session::{Change, FormSession};
pub use signification::{Signification, aggregate};
pub use structured::{RelationAnswers, SlotAnswers, StructuredAnswers};
pub use visibility::{is_visible, mask_hidden, star_lord_auto_filled, visible_questions};
