//! Which questions are shown for the current answers.
//!
//! Each predicate looks only at a few earlier answers. Predicates are not
//! transitive: a stale sub-lord keeps Q3 visible even when the house answer
//! that revealed Q2 has been cleared. [`mask_hidden`] computes the transitive
//! closure for derivations that must ignore hidden answers.

use kp_vedic_base::{StarChoice, YesNo};

use crate::catalog::{self, Question, Role};
use crate::layout::Relation;
use crate::structured::{SlotAnswers, StructuredAnswers};

/// True when the question is currently shown.
pub fn is_visible(question: &Question, a: &StructuredAnswers) -> bool {
    match question.role {
        Role::House | Role::Summary => true,
        Role::SubLord => a.house.is_some(),
        Role::SubLordGati | Role::Star => a.sub_lord.is_some(),
        Role::StarLord => star_lord_visible(a),
        Role::StarLordGati | Role::StarLordHouses | Role::StarLordConnecting => {
            a.star_lord.is_some()
        }
        Role::Gate(r) => card_visible(a, r),
        Role::Planets(r) => {
            card_visible(a, r)
                && a.relation(r).gate.as_deref().and_then(YesNo::from_answer) == Some(YesNo::Yes)
        }
        Role::SlotGati(r, i) | Role::SlotStarLord(r, i) => slot_visible(a, r, i),
        Role::SlotStarLordGati(r, i) | Role::SlotSignification(r, i) => {
            slot_visible(a, r, i) && a.relation(r).slots[i].star_lord.is_some()
        }
        Role::Total(r) | Role::Favorable(r) => {
            card_visible(a, r) && !a.relation(r).planets.is_empty()
        }
    }
}

/// All questions currently shown, in number order.
pub fn visible_questions(a: &StructuredAnswers) -> Vec<&'static Question> {
    catalog::questions()
        .iter()
        .filter(|q| is_visible(q, a))
        .collect()
}

/// True when Q5 holds the lord derived from the chosen star and the user
/// cannot edit it.
pub fn star_lord_auto_filled(a: &StructuredAnswers) -> bool {
    matches!(a.star_choice(), Some(StarChoice::Star(_)))
}

/// Q5 is shown read-only for a chosen star once its lord is filled, and as a
/// planet picker when the star is marked not available.
fn star_lord_visible(a: &StructuredAnswers) -> bool {
    if a.star_choice() == Some(StarChoice::NotAvailable) {
        return true;
    }
    a.star.is_some() && a.star_lord.is_some()
}

fn card_visible(a: &StructuredAnswers, relation: Relation) -> bool {
    a.anchor_name(relation.anchor()).is_some()
}

fn slot_visible(a: &StructuredAnswers, relation: Relation, slot: usize) -> bool {
    card_visible(a, relation) && a.relation(relation).planets.len() > slot
}

/// Copy of `a` with every hidden answer removed.
///
/// Questions are visited in number order and each only depends on earlier
/// (or its own) answers, so one pass hides whole dependent chains: clearing
/// the house hides the sub-lord, which hides the star, and so on.
pub fn mask_hidden(a: &StructuredAnswers) -> StructuredAnswers {
    let mut masked = a.clone();
    for question in catalog::questions() {
        if !is_visible(question, &masked) {
            clear_role(&mut masked, question.role);
        }
    }
    masked
}

fn slot(a: &mut StructuredAnswers, relation: Relation, index: usize) -> &mut SlotAnswers {
    &mut a.relation_mut(relation).slots[index]
}

fn clear_role(a: &mut StructuredAnswers, role: Role) {
    match role {
        Role::House => a.house = None,
        Role::SubLord => a.sub_lord = None,
        Role::SubLordGati => a.sub_lord_gati = None,
        Role::Star => a.star = None,
        Role::StarLord => a.star_lord = None,
        Role::StarLordGati => a.star_lord_gati = None,
        Role::StarLordHouses => a.star_lord_houses = None,
        Role::StarLordConnecting => a.star_lord_connecting = None,
        Role::Gate(r) => a.relation_mut(r).gate = None,
        Role::Planets(r) => a.relation_mut(r).planets.clear(),
        Role::SlotGati(r, i) => slot(a, r, i).gati = None,
        Role::SlotStarLord(r, i) => slot(a, r, i).star_lord = None,
        Role::SlotStarLordGati(r, i) => slot(a, r, i).star_lord_gati = None,
        Role::SlotSignification(r, i) => slot(a, r, i).signification = None,
        Role::Favorable(r) => a.relation_mut(r).favorable = None,
        // derived values are recomputed, never masked
        Role::Total(_) | Role::Summary => {}
    }
}
