//! Signification aggregation.
//!
//! A signification entry is free text such as `"1, 5, 10, [2, 7]"`: plain
//! house numbers plus at most one bracketed group of secondary houses.
//! Aggregation merges any number of entries into one canonical string,
//! numbers de-duplicated and sorted ascending on both sides of the bracket.
//!
//! Parsing never fails. Text that holds no digits contributes nothing, and an
//! unbalanced `[` is scanned as plain text.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any bracketed group, shortest match.
    static ref BRACKET_GROUP: Regex = Regex::new(r"\[.*?\]").unwrap();
    /// First bracketed group, capturing its contents.
    static ref FIRST_BRACKET: Regex = Regex::new(r"\[(.*?)\]").unwrap();
    /// ASCII digits only; other scripts' digits are separators.
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// House numbers split into main and bracketed sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signification {
    pub main: BTreeSet<u64>,
    pub bracketed: BTreeSet<u64>,
}

impl Signification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single entry.
    pub fn parse(input: &str) -> Self {
        let mut sig = Self::new();
        sig.absorb(input);
        sig
    }

    /// Merge the numbers of one more entry into this set.
    ///
    /// Everything outside bracket groups feeds `main`; only the first bracket
    /// group feeds `bracketed`. Later groups are dropped entirely.
    pub fn absorb(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }
        let outside = BRACKET_GROUP.replace_all(input, "");
        self.main.extend(digit_runs(&outside));

        if let Some(inner) = FIRST_BRACKET.captures(input).and_then(|c| c.get(1)) {
            self.bracketed.extend(digit_runs(inner.as_str()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.bracketed.is_empty()
    }
}

/// Integers of every maximal digit run. Runs that overflow `u64` are skipped.
fn digit_runs(text: &str) -> impl Iterator<Item = u64> + '_ {
    DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
}

fn join(numbers: &BTreeSet<u64>) -> String {
    numbers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for Signification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let main = join(&self.main);
        let bracket = if self.bracketed.is_empty() {
            String::new()
        } else {
            format!("[{}]", join(&self.bracketed))
        };
        let parts: Vec<&str> = [main.as_str(), bracket.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Signification {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut sig = Self::new();
        for input in iter {
            sig.absorb(input.as_ref());
        }
        sig
    }
}

/// Merge signification entries into one canonical summary string.
///
/// `aggregate(["3, 1, [9, 2]"])` is `"1, 3, [2, 9]"`; no input yields `""`.
pub fn aggregate<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs.into_iter().collect::<Signification>().to_string()
}
