//! Full derivation of every computed field from an answer set.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::answers::AnswerSet;
use crate::config::{FormConfig, StalePolicy};
use crate::error::FormError;
use crate::layout::{self, ALL_RELATIONS, Relation};
use crate::planet_status::{PlanetStatusLists, derive_planet_status};
use crate::signification::aggregate;
use crate::structured::StructuredAnswers;
use crate::visibility::mask_hidden;

/// Every value the questionnaire computes rather than asks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Derivation {
    /// Aggregated signification per relation category, in ALL_RELATIONS order.
    pub totals: [String; 4],
    /// Aggregate of the star lord's houses and the four totals.
    pub summary: String,
    pub planet_status: PlanetStatusLists,
}

impl Derivation {
    pub fn total(&self, relation: Relation) -> &str {
        &self.totals[relation.index()]
    }

    /// Store totals and summary into their read-only fields. Empty values
    /// remove the field.
    pub fn write_into(&self, answers: &mut AnswerSet) {
        for relation in ALL_RELATIONS {
            put(answers, relation.layout().total, self.total(relation));
        }
        put(answers, layout::SUMMARY, &self.summary);
    }

    /// JSON object keyed by the derived question keys plus the two lists.
    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        let mut obj = Map::new();
        for relation in ALL_RELATIONS {
            obj.insert(
                relation.layout().total.to_string(),
                Value::String(self.total(relation).to_string()),
            );
        }
        obj.insert(layout::SUMMARY.to_string(), Value::String(self.summary.clone()));
        obj.insert("direct".to_string(), serde_json::to_value(&self.planet_status.direct)?);
        obj.insert(
            "retrograde".to_string(),
            serde_json::to_value(&self.planet_status.retrograde)?,
        );
        Ok(serde_json::to_string_pretty(&Value::Object(obj))?)
    }
}

fn put(answers: &mut AnswerSet, key: &'static str, value: &str) {
    if value.is_empty() {
        answers.remove(key);
    } else {
        answers.set(key, value);
    }
}

/// Recompute every derived value from scratch.
pub fn derive(answers: &AnswerSet, config: &FormConfig) -> Derivation {
    let structured = StructuredAnswers::from_answer_set(answers);
    match config.stale_policy {
        StalePolicy::Retain => derive_structured(&structured),
        StalePolicy::Mask => derive_structured(&mask_hidden(&structured)),
    }
}

/// Derive from an already-built structured view.
///
/// Totals read all five slot significations of a category. Under the
/// retain policy this includes slots no longer selected, as the answer set
/// still holds them.
pub fn derive_structured(a: &StructuredAnswers) -> Derivation {
    let totals = ALL_RELATIONS.map(|r| aggregate(a.relation(r).all_significations()));
    let summary = aggregate(
        a.star_lord_houses
            .as_deref()
            .into_iter()
            .chain(totals.iter().map(String::as_str)),
    );
    Derivation {
        planet_status: derive_planet_status(a),
        totals,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AnswerSet {
        let mut set: AnswerSet = [
            ("q1_houseNo", "5"),
            ("q2_subLord", "Venus"),
            ("q3_subLordRetro", "Direct"),
            ("q4_star", "Ashwini"),
            ("q5_starLord", "Ketu"),
            ("q7_starLordHouses", "3, 8, [11]"),
            ("q9_isSubLordConjunct", "Yes"),
            ("q14_sig", "1, 5, [2]"),
            ("q18_sig", "5, 10"),
            ("q57_isSubLordOpposed", "Yes"),
            ("q62_sig", "12, [6]"),
        ]
        .into_iter()
        .collect();
        set.set("q10_conjunctPlanets", vec!["Sun".to_string(), "Moon".to_string()]);
        set.set("q58_opposedPlanets", vec!["Saturn".to_string()]);
        set
    }

    #[test]
    fn totals_and_summary() {
        let d = derive(&base(), &FormConfig::default());
        assert_eq!(d.total(Relation::SubLordConjunct), "1, 5, 10, [2]");
        assert_eq!(d.total(Relation::StarLordConjunct), "");
        assert_eq!(d.total(Relation::SubLordOpposed), "12, [6]");
        assert_eq!(d.summary, "1, 3, 5, 8, 10, 12, [2, 6, 11]");
    }

    #[test]
    fn retain_counts_deselected_slot() {
        let mut set = base();
        set.set("q10_conjunctPlanets", vec!["Sun".to_string()]);
        let d = derive(&set, &FormConfig::default());
        assert_eq!(d.total(Relation::SubLordConjunct), "1, 5, 10, [2]");
    }

    #[test]
    fn mask_ignores_hidden_answers() {
        let mut set = base();
        set.set("q10_conjunctPlanets", vec!["Sun".to_string()]);
        set.set("q57_isSubLordOpposed", "No");
        let d = derive(&set, &FormConfig::with_policy(StalePolicy::Mask));
        // q18 belongs to the deselected second slot and has no star lord
        assert_eq!(d.total(Relation::SubLordConjunct), "");
        assert_eq!(d.total(Relation::SubLordOpposed), "");
        assert_eq!(d.summary, "3, 8, [11]");
    }

    #[test]
    fn mask_keeps_visible_slot_significations() {
        let mut set = base();
        set.set("q12_starLord", "Rahu");
        let d = derive(&set, &FormConfig::with_policy(StalePolicy::Mask));
        assert_eq!(d.total(Relation::SubLordConjunct), "1, 5, [2]");
    }

    #[test]
    fn write_into_sets_and_clears_read_only_fields() {
        let mut set = base();
        set.set("q55_totalSig", "stale");
        let d = derive(&set, &FormConfig::default());
        d.write_into(&mut set);
        assert_eq!(set.text("q31_totalSig"), "1, 5, 10, [2]");
        assert!(set.get("q55_totalSig").is_none());
        assert_eq!(set.text("q105_summary"), d.summary);
    }

    #[test]
    fn summary_is_stable_after_write_back() {
        let mut set = base();
        let first = derive(&set, &FormConfig::default());
        first.write_into(&mut set);
        assert_eq!(derive(&set, &FormConfig::default()), first);
    }

    #[test]
    fn json_output_has_derived_keys() {
        let d = derive(&base(), &FormConfig::default());
        let v: Value = serde_json::from_str(&d.to_json_pretty().unwrap()).unwrap();
        assert_eq!(v["q31_totalSig"], "1, 5, 10, [2]");
        assert_eq!(v["direct"][0]["planet"], "Venus");
        assert_eq!(v["direct"][0]["designation"], "Sub Lord");
    }
}
