//! Direct/Retrograde planet lists with role designations.
//!
//! The deriver walks the lord chain rooted at the house sub-lord: the
//! sub-lord, its star lord, then for each relation category every selected
//! planet and that planet's own star lord. Each planet whose status answer is
//! exactly "Direct" or "Retrograde" lands in the matching list, labelled with
//! its role in the chain.
//!
//! Designations embed other answers (the sub-lord's name, the star lord's
//! name), so the lists are always rebuilt from scratch.

use kp_vedic_base::{Gati, graha_order};
use serde::Serialize;

use crate::layout::{Anchor, Aspect, Relation};
use crate::structured::StructuredAnswers;

/// A planet and its role in the lord chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetStatusEntry {
    pub planet: String,
    pub designation: String,
}

impl PlanetStatusEntry {
    pub fn new(planet: impl Into<String>, designation: impl Into<String>) -> Self {
        Self {
            planet: planet.into(),
            designation: designation.into(),
        }
    }
}

/// Planets split by motion status, each list in traditional planet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanetStatusLists {
    pub direct: Vec<PlanetStatusEntry>,
    pub retrograde: Vec<PlanetStatusEntry>,
}

impl PlanetStatusLists {
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.retrograde.is_empty()
    }

    /// File `planet` under its status. Entries missing either the planet or
    /// a recognised status are dropped.
    fn push(&mut self, planet: Option<&str>, status: Option<&str>, designation: impl FnOnce() -> String) {
        let Some(planet) = planet.filter(|p| !p.is_empty()) else {
            return;
        };
        let list = match status.and_then(Gati::from_answer) {
            Some(Gati::Direct) => &mut self.direct,
            Some(Gati::Retrograde) => &mut self.retrograde,
            None => return,
        };
        list.push(PlanetStatusEntry::new(planet, designation()));
    }

    fn sort(&mut self) {
        // stable: entries for the same planet keep discovery order
        self.direct.sort_by_key(|e| graha_order(&e.planet));
        self.retrograde.sort_by_key(|e| graha_order(&e.planet));
    }
}

/// Derive both planet lists from the current answers.
pub fn derive_planet_status(a: &StructuredAnswers) -> PlanetStatusLists {
    let mut lists = PlanetStatusLists::default();
    let sub_lord = a.sub_lord.as_deref().unwrap_or_default();
    let star_lord = a.star_lord.as_deref().unwrap_or_default();

    lists.push(a.sub_lord.as_deref(), a.sub_lord_gati.as_deref(), || {
        "Sub Lord".to_string()
    });
    lists.push(a.star_lord.as_deref(), a.star_lord_gati.as_deref(), || {
        format!("Star Lord of Sub Lord {sub_lord}")
    });

    for relation in &a.relations {
        let chain = anchor_chain(relation.relation, sub_lord, star_lord);
        let aspect = aspect_label(relation.relation.aspect());
        for (planet, slot) in relation.active_slots() {
            lists.push(Some(planet), slot.gati.as_deref(), || {
                format!("{aspect} Planet of {chain}")
            });
            lists.push(slot.star_lord.as_deref(), slot.star_lord_gati.as_deref(), || {
                format!("Star Lord of {aspect} Planet {planet} of {chain}")
            });
        }
    }

    lists.sort();
    lists
}

fn aspect_label(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Conjunct => "Conjunct",
        Aspect::Opposed => "Opposed",
    }
}

/// "Sub Lord S" or "Star Lord L of Sub Lord S".
fn anchor_chain(relation: Relation, sub_lord: &str, star_lord: &str) -> String {
    match relation.anchor() {
        Anchor::SubLord => format!("Sub Lord {sub_lord}"),
        Anchor::StarLord => format!("Star Lord {star_lord} of Sub Lord {sub_lord}"),
    }
}
