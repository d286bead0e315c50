//! Typed view over an answer set.
//!
//! Instead of addressing per-planet questions by key, derivations walk this
//! structure: the core lord chain, then one [`RelationAnswers`] per relation
//! category holding its five slot records.

use kp_vedic_base::{Gati, StarChoice};

use crate::answers::AnswerSet;
use crate::layout::{self, ALL_RELATIONS, Anchor, MAX_SLOTS, Relation, SlotKeys};

/// Answers about one related planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAnswers {
    /// Retrograde/Direct answer for the related planet.
    pub gati: Option<String>,
    /// Star lord of the related planet.
    pub star_lord: Option<String>,
    /// Retrograde/Direct answer for that star lord.
    pub star_lord_gati: Option<String>,
    /// Signification entry for the planet together with its star lord.
    pub signification: Option<String>,
}

impl SlotAnswers {
    fn read(answers: &AnswerSet, keys: &SlotKeys) -> Self {
        Self {
            gati: owned(answers, keys.retro),
            star_lord: owned(answers, keys.star_lord),
            star_lord_gati: owned(answers, keys.star_lord_retro),
            signification: owned(answers, keys.signification),
        }
    }
}

/// Answers of one relation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationAnswers {
    pub relation: Relation,
    /// "Is the lord conjunct/opposed with any planet?"
    pub gate: Option<String>,
    /// Selected planets, in selection order. Only the first five get slots.
    pub planets: Vec<String>,
    pub slots: [SlotAnswers; MAX_SLOTS],
    pub favorable: Option<String>,
}

impl RelationAnswers {
    pub fn empty(relation: Relation) -> Self {
        Self {
            relation,
            gate: None,
            planets: Vec::new(),
            slots: Default::default(),
            favorable: None,
        }
    }

    fn read(answers: &AnswerSet, relation: Relation) -> Self {
        let layout = relation.layout();
        Self {
            relation,
            gate: owned(answers, layout.gate),
            planets: answers
                .list(layout.planets)
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            slots: layout.slots.each_ref().map(|keys| SlotAnswers::read(answers, keys)),
            favorable: owned(answers, layout.favorable),
        }
    }

    /// Selected planets paired with their slot records, at most five.
    pub fn active_slots(&self) -> impl Iterator<Item = (&str, &SlotAnswers)> {
        self.planets.iter().map(String::as_str).zip(self.slots.iter())
    }

    /// Number of slots currently in use.
    pub fn active_count(&self) -> usize {
        self.planets.len().min(MAX_SLOTS)
    }

    /// Signification entries of the active slots, in slot order.
    pub fn significations(&self) -> impl Iterator<Item = &str> {
        self.active_slots()
            .filter_map(|(_, slot)| slot.signification.as_deref())
    }

    /// Signification entries of all five slots, active or not.
    pub fn all_significations(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|s| s.signification.as_deref())
    }
}

/// Whole questionnaire as typed records. Blank answers read as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredAnswers {
    pub house: Option<String>,
    pub sub_lord: Option<String>,
    pub sub_lord_gati: Option<String>,
    pub star: Option<String>,
    pub star_lord: Option<String>,
    pub star_lord_gati: Option<String>,
    pub star_lord_houses: Option<String>,
    pub star_lord_connecting: Option<String>,
    pub relations: [RelationAnswers; 4],
}

impl Default for StructuredAnswers {
    fn default() -> Self {
        Self {
            house: None,
            sub_lord: None,
            sub_lord_gati: None,
            star: None,
            star_lord: None,
            star_lord_gati: None,
            star_lord_houses: None,
            star_lord_connecting: None,
            relations: ALL_RELATIONS.map(RelationAnswers::empty),
        }
    }
}

impl StructuredAnswers {
    pub fn from_answer_set(answers: &AnswerSet) -> Self {
        Self {
            house: owned(answers, layout::HOUSE),
            sub_lord: owned(answers, layout::SUB_LORD),
            sub_lord_gati: owned(answers, layout::SUB_LORD_RETRO),
            star: owned(answers, layout::STAR),
            star_lord: owned(answers, layout::STAR_LORD),
            star_lord_gati: owned(answers, layout::STAR_LORD_RETRO),
            star_lord_houses: owned(answers, layout::STAR_LORD_HOUSES),
            star_lord_connecting: owned(answers, layout::STAR_LORD_CONNECTING),
            relations: ALL_RELATIONS.map(|r| RelationAnswers::read(answers, r)),
        }
    }

    pub fn relation(&self, relation: Relation) -> &RelationAnswers {
        &self.relations[relation.index()]
    }

    pub fn relation_mut(&mut self, relation: Relation) -> &mut RelationAnswers {
        &mut self.relations[relation.index()]
    }

    /// Parsed star picker answer.
    pub fn star_choice(&self) -> Option<StarChoice> {
        self.star.as_deref().and_then(StarChoice::parse)
    }

    /// Name of the lord a relation category hangs off.
    pub fn anchor_name(&self, anchor: Anchor) -> Option<&str> {
        match anchor {
            Anchor::SubLord => self.sub_lord.as_deref(),
            Anchor::StarLord => self.star_lord.as_deref(),
        }
    }

    pub fn sub_lord_status(&self) -> Option<Gati> {
        self.sub_lord_gati.as_deref().and_then(Gati::from_answer)
    }

    pub fn star_lord_status(&self) -> Option<Gati> {
        self.star_lord_gati.as_deref().and_then(Gati::from_answer)
    }
}

fn owned(answers: &AnswerSet, key: &str) -> Option<String> {
    answers.answered_text(key).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_reads_all_none() {
        let s = StructuredAnswers::from_answer_set(&AnswerSet::new());
        assert_eq!(s, StructuredAnswers::default());
    }

    #[test]
    fn slots_follow_planet_list() {
        let mut a = AnswerSet::new();
        a.set("q10_conjunctPlanets", vec!["Sun".to_string(), "Moon".to_string()]);
        a.set("q11_retro", "Direct");
        a.set("q16_starLord", "Rahu");
        a.set("q22_sig", "4");
        let s = StructuredAnswers::from_answer_set(&a);
        let rel = s.relation(Relation::SubLordConjunct);
        let active: Vec<_> = rel.active_slots().map(|(p, _)| p).collect();
        assert_eq!(active, ["Sun", "Moon"]);
        assert_eq!(rel.slots[0].gati.as_deref(), Some("Direct"));
        assert_eq!(rel.slots[1].star_lord.as_deref(), Some("Rahu"));
        // slot 3 holds an answer but no planet selects it
        assert_eq!(rel.significations().count(), 0);
        assert_eq!(rel.all_significations().collect::<Vec<_>>(), ["4"]);
    }

    #[test]
    fn more_than_five_planets_cap_at_five_slots() {
        let mut a = AnswerSet::new();
        let planets: Vec<String> = kp_vedic_base::GRAHA_NAMES.iter().map(|s| s.to_string()).collect();
        a.set("q58_opposedPlanets", planets);
        let s = StructuredAnswers::from_answer_set(&a);
        let rel = s.relation(Relation::SubLordOpposed);
        assert_eq!(rel.planets.len(), 9);
        assert_eq!(rel.active_count(), 5);
        assert_eq!(rel.active_slots().count(), 5);
    }

    #[test]
    fn star_choice_and_status() {
        let a: AnswerSet = [
            ("q4_star", "Ashwini"),
            ("q3_subLordRetro", "Retrograde"),
            ("q6_starLordRetro", "Maybe"),
        ]
        .into_iter()
        .collect();
        let s = StructuredAnswers::from_answer_set(&a);
        assert_eq!(
            s.star_choice(),
            Some(StarChoice::Star(kp_vedic_base::Nakshatra::Ashwini))
        );
        assert_eq!(s.sub_lord_status(), Some(Gati::Retrograde));
        assert_eq!(s.star_lord_status(), None);
    }
}
