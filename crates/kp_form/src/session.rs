//! Interactive form session.
//!
//! A session owns the answer set, applies edits one field at a time, keeps
//! the star lord in step with the chosen star, and after every successful
//! edit recomputes all derived fields and notifies subscribers.

use kp_vedic_base::{Gati, Graha, StarChoice, YesNo, graha_order};
use tracing::{debug, trace, warn};

use crate::answers::{AnswerSet, AnswerValue};
use crate::catalog::{self, InputKind, Question, Role};
use crate::config::FormConfig;
use crate::derive::{Derivation, derive};
use crate::error::FormError;
use crate::layout;
use crate::structured::StructuredAnswers;
use crate::visibility::{star_lord_auto_filled, visible_questions};

/// Describes one applied edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Key the caller wrote or cleared.
    pub key: &'static str,
    /// Field the session rewrote as a side effect, if any.
    pub auto_filled: Option<&'static str>,
}

type Subscriber = Box<dyn FnMut(&Change, &Derivation)>;

pub struct FormSession {
    answers: AnswerSet,
    config: FormConfig,
    derived: Derivation,
    subscribers: Vec<Subscriber>,
}

impl FormSession {
    /// Blank session.
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        Self::with_answers(AnswerSet::new(), config)
    }

    /// Session over previously saved answers.
    ///
    /// Every key must be a question key. Derived fields in the input are
    /// ignored and recomputed; with `strict_vocabulary` every stored value is
    /// validated as if it had been typed in.
    pub fn with_answers(answers: AnswerSet, config: FormConfig) -> Result<Self, FormError> {
        config.validate()?;
        let mut session = Self {
            answers: AnswerSet::new(),
            config,
            derived: Derivation::default(),
            subscribers: Vec::new(),
        };
        for key in answers.keys() {
            let question = resolve(key)?;
            if question.kind() == InputKind::Derived {
                continue;
            }
            let value = match answers.get(key) {
                Some(AnswerValue::Text(s)) => AnswerValue::Text(session.check_text(question, s)?),
                Some(AnswerValue::List(v)) => AnswerValue::List(session.check_list(question, v)?),
                None => continue,
            };
            session.answers.set(question.key, value);
        }
        session.reconcile_star_lord();
        session.recompute();
        Ok(session)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Current derived values.
    pub fn derivation(&self) -> &Derivation {
        &self.derived
    }

    /// Owned copy of the current derived values.
    pub fn snapshot(&self) -> Derivation {
        self.derived.clone()
    }

    pub fn structured(&self) -> StructuredAnswers {
        StructuredAnswers::from_answer_set(&self.answers)
    }

    pub fn visible_questions(&self) -> Vec<&'static Question> {
        visible_questions(&self.structured())
    }

    /// Register a callback run after every successful edit.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Change, &Derivation) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Write a single-valued answer.
    pub fn set_text(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let question = self.writable(key)?;
        let value = self.check_text(question, value).inspect_err(|e| {
            warn!(key = question.key, error = %e, "rejected answer");
        })?;
        self.answers.set(question.key, value);
        let auto_filled = self.sync_star_lord(question);
        self.commit(question.key, auto_filled);
        Ok(())
    }

    /// Write a multi-select answer. Duplicates and blanks are dropped and the
    /// selection is kept in traditional planet order.
    pub fn set_list<I, S>(&mut self, key: &str, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = self.writable(key)?;
        let values: Vec<String> = values.into_iter().map(|s| s.as_ref().to_string()).collect();
        let values = self.check_list(question, &values).inspect_err(|e| {
            warn!(key = question.key, error = %e, "rejected selection");
        })?;
        self.answers.set(question.key, values);
        self.commit(question.key, None);
        Ok(())
    }

    /// Remove an answer. Dependent answers are kept; see `StalePolicy`.
    pub fn clear(&mut self, key: &str) -> Result<(), FormError> {
        let question = self.writable(key)?;
        self.answers.remove(question.key);
        let auto_filled = self.sync_star_lord(question);
        self.commit(question.key, auto_filled);
        Ok(())
    }

    fn writable(&self, key: &str) -> Result<&'static Question, FormError> {
        let question = resolve(key)?;
        if question.kind() == InputKind::Derived {
            warn!(key = question.key, "write to derived field");
            return Err(FormError::ReadOnly(question.key));
        }
        if question.role == Role::StarLord && star_lord_auto_filled(&self.structured()) {
            warn!(key = question.key, "write to auto-filled star lord");
            return Err(FormError::AutoFilled(question.key));
        }
        Ok(question)
    }

    /// Star changed: fill its lord, or clear it so the user can pick one.
    fn sync_star_lord(&mut self, question: &Question) -> Option<&'static str> {
        if question.role != Role::Star {
            return None;
        }
        let choice = self.answers.answered_text(layout::STAR).and_then(StarChoice::parse);
        match choice.and_then(StarChoice::star_lord) {
            Some(lord) => {
                trace!(lord = lord.name(), "star lord filled from star");
                self.answers.set(layout::STAR_LORD, lord.name());
            }
            None => {
                trace!("star lord cleared for manual entry");
                self.answers.remove(layout::STAR_LORD);
            }
        }
        Some(layout::STAR_LORD)
    }

    /// Loaded star lord must agree with the loaded star. A hand-entered lord
    /// survives only behind the NA sentinel.
    fn reconcile_star_lord(&mut self) {
        let choice = self.answers.answered_text(layout::STAR).and_then(StarChoice::parse);
        match choice {
            Some(StarChoice::Star(n)) => {
                let lord = n.lord().name();
                if self.answers.text(layout::STAR_LORD) != lord {
                    debug!(star = n.name(), lord, "saved star lord replaced");
                    self.answers.set(layout::STAR_LORD, lord);
                }
            }
            Some(StarChoice::NotAvailable) => {}
            None => {
                if self.answers.remove(layout::STAR_LORD).is_some() {
                    debug!("saved star lord dropped without a star");
                }
            }
        }
    }

    fn commit(&mut self, key: &'static str, auto_filled: Option<&'static str>) {
        self.recompute();
        let change = Change { key, auto_filled };
        for subscriber in &mut self.subscribers {
            subscriber(&change, &self.derived);
        }
    }

    fn recompute(&mut self) {
        self.derived = derive(&self.answers, &self.config);
        self.derived.write_into(&mut self.answers);
        debug!(
            direct = self.derived.planet_status.direct.len(),
            retrograde = self.derived.planet_status.retrograde.len(),
            summary = %self.derived.summary,
            "derived fields recomputed"
        );
    }

    fn check_text(&self, question: &'static Question, value: &str) -> Result<String, FormError> {
        let key = question.key;
        if question.kind() == InputKind::PlanetList {
            return Err(FormError::KindMismatch(key));
        }
        if !self.config.strict_vocabulary || value.trim().is_empty() {
            return Ok(value.to_string());
        }
        let normalized = match question.kind() {
            InputKind::HouseNumber => {
                let house: u8 = value.trim().parse().map_err(|_| FormError::InvalidValue {
                    key,
                    reason: format!("{value:?} is not a house number"),
                })?;
                if !(1..=12).contains(&house) {
                    return Err(FormError::InvalidValue {
                        key,
                        reason: format!("house {house} is outside 1-12"),
                    });
                }
                house.to_string()
            }
            InputKind::Planet => value
                .parse::<Graha>()
                .map_err(|e| FormError::invalid(key, e))?
                .name()
                .to_string(),
            InputKind::Star => StarChoice::parse(value)
                .ok_or_else(|| FormError::InvalidValue {
                    key,
                    reason: format!("unknown star: {value:?}"),
                })?
                .label()
                .to_string(),
            InputKind::Gati => value
                .parse::<Gati>()
                .map_err(|e| FormError::invalid(key, e))?
                .label()
                .to_string(),
            InputKind::YesNo => value
                .parse::<YesNo>()
                .map_err(|e| FormError::invalid(key, e))?
                .label()
                .to_string(),
            _ => value.to_string(),
        };
        Ok(normalized)
    }

    fn check_list(&self, question: &'static Question, values: &[String]) -> Result<Vec<String>, FormError> {
        let key = question.key;
        if question.kind() != InputKind::PlanetList {
            return Err(FormError::KindMismatch(key));
        }
        let mut out: Vec<String> = Vec::with_capacity(values.len());
        for value in values.iter().filter(|v| !v.trim().is_empty()) {
            let name = if self.config.strict_vocabulary {
                value
                    .parse::<Graha>()
                    .map_err(|e| FormError::invalid(key, e))?
                    .name()
                    .to_string()
            } else {
                value.clone()
            };
            if !out.contains(&name) {
                out.push(name);
            }
        }
        let max = self.config.max_related_planets;
        if max > 0 && out.len() > max {
            return Err(FormError::InvalidValue {
                key,
                reason: format!("{} planets selected, at most {max} allowed", out.len()),
            });
        }
        out.sort_by_key(|p| graha_order(p));
        Ok(out)
    }
}

fn resolve(key: &str) -> Result<&'static Question, FormError> {
    catalog::lookup(key).ok_or_else(|| FormError::UnknownQuestion(key.to_string()))
}
