//! The 105 questions: numbering, keys, input kinds and prompt text.

use lazy_static::lazy_static;

use crate::layout::{self, ALL_RELATIONS, Aspect, MAX_SLOTS, Relation};
use crate::structured::StructuredAnswers;

/// Questionnaire card a question is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Core,
    Relation(Relation),
    Summary,
}

impl Card {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Core => "Core Astrological Details",
            Self::Relation(r) => r.title(),
            Self::Summary => "Summary",
        }
    }
}

/// What kind of answer a question takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// House number 1-12.
    HouseNumber,
    /// One of the 9 planets.
    Planet,
    /// One of the 27 stars or the NA sentinel.
    Star,
    /// Retrograde or Direct.
    Gati,
    YesNo,
    /// Multi-select over the 9 planets.
    PlanetList,
    FreeText,
    /// Free text holding house numbers, e.g. "1, 5, [2, 7]".
    Signification,
    /// Read-only, written by derivation.
    Derived,
}

/// Role of a question in the lord chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    House,
    SubLord,
    SubLordGati,
    Star,
    StarLord,
    StarLordGati,
    StarLordHouses,
    StarLordConnecting,
    Gate(Relation),
    Planets(Relation),
    SlotGati(Relation, usize),
    SlotStarLord(Relation, usize),
    SlotStarLordGati(Relation, usize),
    SlotSignification(Relation, usize),
    Total(Relation),
    Favorable(Relation),
    Summary,
}

/// One questionnaire entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub number: u8,
    pub key: &'static str,
    pub role: Role,
}

impl Question {
    pub const fn kind(&self) -> InputKind {
        match self.role {
            Role::House => InputKind::HouseNumber,
            Role::SubLord | Role::StarLord | Role::SlotStarLord(..) => InputKind::Planet,
            Role::Star => InputKind::Star,
            Role::SubLordGati
            | Role::StarLordGati
            | Role::SlotGati(..)
            | Role::SlotStarLordGati(..) => InputKind::Gati,
            Role::StarLordConnecting | Role::Gate(_) | Role::Favorable(_) => InputKind::YesNo,
            Role::Planets(_) => InputKind::PlanetList,
            Role::StarLordHouses => InputKind::FreeText,
            Role::SlotSignification(..) => InputKind::Signification,
            Role::Total(_) | Role::Summary => InputKind::Derived,
        }
    }

    pub const fn card(&self) -> Card {
        match self.role {
            Role::House
            | Role::SubLord
            | Role::SubLordGati
            | Role::Star
            | Role::StarLord
            | Role::StarLordGati
            | Role::StarLordHouses
            | Role::StarLordConnecting => Card::Core,
            Role::Gate(r)
            | Role::Planets(r)
            | Role::SlotGati(r, _)
            | Role::SlotStarLord(r, _)
            | Role::SlotStarLordGati(r, _)
            | Role::SlotSignification(r, _)
            | Role::Total(r)
            | Role::Favorable(r) => Card::Relation(r),
            Role::Summary => Card::Summary,
        }
    }

    /// Question text with the current answers substituted.
    pub fn prompt(&self, answers: &StructuredAnswers) -> String {
        format!("{}. {}", self.number, prompt_body(self.role, answers))
    }
}

const fn q(number: u8, key: &'static str, role: Role) -> Question {
    Question { number, key, role }
}

fn build_catalog() -> Vec<Question> {
    let mut out = vec![
        q(1, layout::HOUSE, Role::House),
        q(2, layout::SUB_LORD, Role::SubLord),
        q(3, layout::SUB_LORD_RETRO, Role::SubLordGati),
        q(4, layout::STAR, Role::Star),
        q(5, layout::STAR_LORD, Role::StarLord),
        q(6, layout::STAR_LORD_RETRO, Role::StarLordGati),
        q(7, layout::STAR_LORD_HOUSES, Role::StarLordHouses),
        q(8, layout::STAR_LORD_CONNECTING, Role::StarLordConnecting),
    ];
    for relation in ALL_RELATIONS {
        let l = relation.layout();
        out.push(q(l.first_number, l.gate, Role::Gate(relation)));
        out.push(q(l.first_number + 1, l.planets, Role::Planets(relation)));
        for (i, s) in l.slots.iter().enumerate() {
            let n = s.first_number;
            out.push(q(n, s.retro, Role::SlotGati(relation, i)));
            out.push(q(n + 1, s.star_lord, Role::SlotStarLord(relation, i)));
            out.push(q(n + 2, s.star_lord_retro, Role::SlotStarLordGati(relation, i)));
            out.push(q(n + 3, s.signification, Role::SlotSignification(relation, i)));
        }
        out.push(q(l.first_number + 2 + 4 * MAX_SLOTS as u8, l.total, Role::Total(relation)));
        out.push(q(l.first_number + 3 + 4 * MAX_SLOTS as u8, l.favorable, Role::Favorable(relation)));
    }
    out.push(q(105, layout::SUMMARY, Role::Summary));
    out
}

lazy_static! {
    static ref CATALOG: Vec<Question> = build_catalog();
}

/// All questions in number order.
pub fn questions() -> &'static [Question] {
    &CATALOG
}

pub fn by_number(number: u8) -> Option<&'static Question> {
    CATALOG.get(usize::from(number).checked_sub(1)?)
}

pub fn lookup(key: &str) -> Option<&'static Question> {
    CATALOG.iter().find(|q| q.key == key)
}

fn planet_in_slot(a: &StructuredAnswers, r: Relation, i: usize) -> &str {
    a.relation(r).planets.get(i).map_or("", String::as_str)
}

fn star_lord_in_slot(a: &StructuredAnswers, r: Relation, i: usize) -> &str {
    a.relation(r).slots[i].star_lord.as_deref().unwrap_or_default()
}

fn prompt_body(role: Role, a: &StructuredAnswers) -> String {
    let sub_lord = a.sub_lord.as_deref().unwrap_or_default();
    let star_lord = a.star_lord.as_deref().unwrap_or_default();
    let slot_planet = |r: Relation, i: usize| planet_in_slot(a, r, i);
    let slot_star_lord = |r: Relation, i: usize| star_lord_in_slot(a, r, i);

    match role {
        Role::House => "Primary House of Matter in Question (1-12)".to_string(),
        Role::SubLord => format!(
            "Sub Lord of the Primary House No.: {}",
            a.house.as_deref().unwrap_or_default()
        ),
        Role::SubLordGati => format!("Is Sub-Lord {sub_lord} Retrograde or Direct?"),
        Role::Star => format!("Sub-Lord {sub_lord} is deposited in which Star?"),
        Role::StarLord => match a.star_choice() {
            Some(kp_vedic_base::StarChoice::NotAvailable) => format!(
                "Star Lord of the Star in which the Sub Lord {sub_lord} is deposited?"
            ),
            _ => format!(
                "Star lord of the star {}?",
                a.star.as_deref().unwrap_or_default()
            ),
        },
        Role::StarLordGati => format!("Is Star-Lord {star_lord} retrograde?"),
        Role::StarLordHouses => format!("Star-Lord {star_lord} deposited in and owning houses?"),
        Role::StarLordConnecting => format!("Is Star-Lord {star_lord} connecting to 6, 8, 12?"),
        Role::Gate(r) => match r {
            Relation::SubLordConjunct => format!("Is Sub-Lord {sub_lord} Conjunct with any planet?"),
            Relation::StarLordConjunct => format!("Is Star Lord {star_lord} Conjunct with any planet?"),
            Relation::SubLordOpposed => format!("Is the Sub Lord {sub_lord} Opposed by any planet?"),
            Relation::StarLordOpposed => format!("Is Star Lord {star_lord} Opposed by any planet?"),
        },
        Role::Planets(r) => match r {
            Relation::SubLordConjunct => format!(
                "What is/are the planet/planets that the Sub-Lord {sub_lord} conjunct with?"
            ),
            Relation::StarLordConjunct => format!("Star Lord {star_lord} conjunct with which planets?"),
            Relation::SubLordOpposed => format!("Sub Lord {sub_lord} opposed by which planets?"),
            Relation::StarLordOpposed => format!("Star Lord {star_lord} opposed by which planets?"),
        },
        Role::SlotGati(r, i) => {
            let planet = slot_planet(r, i);
            match r.aspect() {
                Aspect::Conjunct => format!("Is the Conjunct planet {planet} retrograde?"),
                Aspect::Opposed => format!("Is the opposed planet {planet} retrograde?"),
            }
        }
        Role::SlotStarLord(r, i) => {
            let planet = slot_planet(r, i);
            match r.aspect() {
                Aspect::Conjunct => format!("What is the Star-Lord of the Conjunct planet {planet}?"),
                Aspect::Opposed => format!("Star Lord of the opposed planet {planet}?"),
            }
        }
        Role::SlotStarLordGati(r, i) => {
            let sl = slot_star_lord(r, i);
            match r.aspect() {
                Aspect::Conjunct => format!("Is the Star Lord {sl} retrograde?"),
                Aspect::Opposed => format!(
                    "Is the Star Lord {sl} of the opposed planet {} retrograde?",
                    slot_planet(r, i)
                ),
            }
        }
        Role::SlotSignification(r, i) => {
            let planet = slot_planet(r, i);
            let sl = slot_star_lord(r, i);
            match r.aspect() {
                Aspect::Conjunct => format!(
                    "Signification of the Conjunct Planet {planet} along with its Star Lord {sl}"
                ),
                Aspect::Opposed => format!(
                    "Signification of the Opposed Planet {planet} and its Star Lord {sl}?"
                ),
            }
        }
        Role::Total(r) => match r.aspect() {
            Aspect::Conjunct => {
                "Total signification of all the conjunct planets with all their Star Lords"
                    .to_string()
            }
            Aspect::Opposed => {
                "Total Signification of the Opposed planet/planets and their Star Lords".to_string()
            }
        },
        Role::Favorable(r) => match r.aspect() {
            Aspect::Conjunct => {
                "Is/Are the Conjunct planet/planets signifying favorable houses to the matter?"
                    .to_string()
            }
            Aspect::Opposed => {
                "Is the signification of the opposed planet and its star lord favorable?"
                    .to_string()
            }
        },
        Role::Summary => "SUMMARY of the Significators".to_string(),
    }
}
