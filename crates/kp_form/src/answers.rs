//! The answer set: current value of every question, keyed by question key.
//!
//! Values are either free text (single pickers, numbers, signification
//! strings) or an ordered list (multi-select planet pickers). Blank text is
//! treated as unanswered everywhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Value stored for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// True when the value carries a real answer.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::List(v) => !v.is_empty(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// Mapping from question key to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    /// Text value of `key`; blank when missing or when the value is a list.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(AnswerValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Text value of `key` as stored, or None when blank.
    pub fn answered_text(&self, key: &str) -> Option<&str> {
        let s = self.text(key);
        if s.trim().is_empty() { None } else { Some(s) }
    }

    /// List value of `key`; empty when missing or when the value is text.
    pub fn list(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(AnswerValue::List(v)) => v,
            _ => &[],
        }
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(AnswerValue::is_answered)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse an answer set from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
