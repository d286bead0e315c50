//! Fixed answer-set keys of the questionnaire.
//!
//! The four relation categories (planets conjunct with or opposed to the
//! sub-lord or its star lord) share one shape: a yes/no gate, a multi-select
//! planet list, five per-planet slots of four questions each, a total and a
//! favorability question. Each category's keys live in a constant
//! [`RelationLayout`] so no key is ever assembled at runtime.

pub const HOUSE: &str = "q1_houseNo";
pub const SUB_LORD: &str = "q2_subLord";
pub const SUB_LORD_RETRO: &str = "q3_subLordRetro";
pub const STAR: &str = "q4_star";
pub const STAR_LORD: &str = "q5_starLord";
pub const STAR_LORD_RETRO: &str = "q6_starLordRetro";
pub const STAR_LORD_HOUSES: &str = "q7_starLordHouses";
pub const STAR_LORD_CONNECTING: &str = "q8_starLordConnecting";
pub const SUMMARY: &str = "q105_summary";

/// Number of per-planet slots in each relation category.
pub const MAX_SLOTS: usize = 5;

/// Keys of the four questions asked about one related planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotKeys {
    /// Question number of the first question in the slot.
    pub first_number: u8,
    pub retro: &'static str,
    pub star_lord: &'static str,
    pub star_lord_retro: &'static str,
    pub signification: &'static str,
}

/// Keys of one relation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationLayout {
    /// Question number of the gate question.
    pub first_number: u8,
    pub gate: &'static str,
    pub planets: &'static str,
    pub slots: [SlotKeys; MAX_SLOTS],
    pub total: &'static str,
    pub favorable: &'static str,
}

const fn slot(
    first_number: u8,
    retro: &'static str,
    star_lord: &'static str,
    star_lord_retro: &'static str,
    signification: &'static str,
) -> SlotKeys {
    SlotKeys {
        first_number,
        retro,
        star_lord,
        star_lord_retro,
        signification,
    }
}

pub const SUB_LORD_CONJUNCT: RelationLayout = RelationLayout {
    first_number: 9,
    gate: "q9_isSubLordConjunct",
    planets: "q10_conjunctPlanets",
    slots: [
        slot(11, "q11_retro", "q12_starLord", "q13_retro", "q14_sig"),
        slot(15, "q15_retro", "q16_starLord", "q17_retro", "q18_sig"),
        slot(19, "q19_retro", "q20_starLord", "q21_retro", "q22_sig"),
        slot(23, "q23_retro", "q24_starLord", "q25_retro", "q26_sig"),
        slot(27, "q27_retro", "q28_starLord", "q29_retro", "q30_sig"),
    ],
    total: "q31_totalSig",
    favorable: "q32_favorable",
};

pub const STAR_LORD_CONJUNCT: RelationLayout = RelationLayout {
    first_number: 33,
    gate: "q33_isStarLordConjunct",
    planets: "q34_starLordConjunctPlanets",
    slots: [
        slot(35, "q35_retro", "q36_starLord", "q37_retro", "q38_sig"),
        slot(39, "q39_retro", "q40_starLord", "q41_retro", "q42_sig"),
        slot(43, "q43_retro", "q44_starLord", "q45_retro", "q46_sig"),
        slot(47, "q47_retro", "q48_starLord", "q49_retro", "q50_sig"),
        slot(51, "q51_retro", "q52_starLord", "q53_retro", "q54_sig"),
    ],
    total: "q55_totalSig",
    favorable: "q56_favorable",
};

pub const SUB_LORD_OPPOSED: RelationLayout = RelationLayout {
    first_number: 57,
    gate: "q57_isSubLordOpposed",
    planets: "q58_opposedPlanets",
    slots: [
        slot(59, "q59_retro", "q60_starLord", "q61_retro", "q62_sig"),
        slot(63, "q63_retro", "q64_starLord", "q65_retro", "q66_sig"),
        slot(67, "q67_retro", "q68_starLord", "q69_retro", "q70_sig"),
        slot(71, "q71_retro", "q72_starLord", "q73_retro", "q74_sig"),
        slot(75, "q75_retro", "q76_starLord", "q77_retro", "q78_sig"),
    ],
    total: "q79_totalSig",
    favorable: "q80_favorable",
};

pub const STAR_LORD_OPPOSED: RelationLayout = RelationLayout {
    first_number: 81,
    gate: "q81_isStarLordOpposed",
    planets: "q82_starLordOpposedPlanets",
    slots: [
        slot(83, "q83_retro", "q84_starLord", "q85_retro", "q86_sig"),
        slot(87, "q87_retro", "q88_starLord", "q89_retro", "q90_sig"),
        slot(91, "q91_retro", "q92_starLord", "q93_retro", "q94_sig"),
        slot(95, "q95_retro", "q96_starLord", "q97_retro", "q98_sig"),
        slot(99, "q99_retro", "q100_starLord", "q101_retro", "q102_sig"),
    ],
    total: "q103_totalSig",
    favorable: "q104_favorable",
};

/// Which lord a relation category hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    SubLord,
    StarLord,
}

/// Kind of relation asserted between a lord and another planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunct,
    Opposed,
}

/// The four relation categories, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    SubLordConjunct,
    StarLordConjunct,
    SubLordOpposed,
    StarLordOpposed,
}

pub const ALL_RELATIONS: [Relation; 4] = [
    Relation::SubLordConjunct,
    Relation::StarLordConjunct,
    Relation::SubLordOpposed,
    Relation::StarLordOpposed,
];

impl Relation {
    pub const fn layout(self) -> &'static RelationLayout {
        match self {
            Self::SubLordConjunct => &SUB_LORD_CONJUNCT,
            Self::StarLordConjunct => &STAR_LORD_CONJUNCT,
            Self::SubLordOpposed => &SUB_LORD_OPPOSED,
            Self::StarLordOpposed => &STAR_LORD_OPPOSED,
        }
    }

    pub const fn anchor(self) -> Anchor {
        match self {
            Self::SubLordConjunct | Self::SubLordOpposed => Anchor::SubLord,
            Self::StarLordConjunct | Self::StarLordOpposed => Anchor::StarLord,
        }
    }

    pub const fn aspect(self) -> Aspect {
        match self {
            Self::SubLordConjunct | Self::StarLordConjunct => Aspect::Conjunct,
            Self::SubLordOpposed | Self::StarLordOpposed => Aspect::Opposed,
        }
    }

    /// 0-based position in ALL_RELATIONS.
    pub const fn index(self) -> usize {
        match self {
            Self::SubLordConjunct => 0,
            Self::StarLordConjunct => 1,
            Self::SubLordOpposed => 2,
            Self::StarLordOpposed => 3,
        }
    }

    /// Title of the questionnaire card holding this category.
    pub const fn title(self) -> &'static str {
        match self {
            Self::SubLordConjunct => "Sub-Lord Conjunction Details",
            Self::StarLordConjunct => "Star-Lord Conjunction Details",
            Self::SubLordOpposed => "Sub-Lord Opposition Details",
            Self::StarLordOpposed => "Star-Lord Opposition Details",
        }
    }
}

/// Keys written by derivation, never by the user.
pub fn is_derived_key(key: &str) -> bool {
    key == SUMMARY || ALL_RELATIONS.iter().any(|r| r.layout().total == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_of(key: &str) -> u8 {
        key[1..key.find('_').unwrap()].parse().unwrap()
    }

    #[test]
    fn slot_keys_are_consecutive_questions() {
        for relation in ALL_RELATIONS {
            let layout = relation.layout();
            assert_eq!(number_of(layout.gate), layout.first_number);
            assert_eq!(number_of(layout.planets), layout.first_number + 1);
            for (i, s) in layout.slots.iter().enumerate() {
                let n = layout.first_number + 2 + 4 * i as u8;
                assert_eq!(s.first_number, n);
                assert_eq!(number_of(s.retro), n);
                assert_eq!(number_of(s.star_lord), n + 1);
                assert_eq!(number_of(s.star_lord_retro), n + 2);
                assert_eq!(number_of(s.signification), n + 3);
            }
            assert_eq!(number_of(layout.total), layout.first_number + 22);
            assert_eq!(number_of(layout.favorable), layout.first_number + 23);
        }
    }

    #[test]
    fn relation_index_matches_table() {
        for (i, r) in ALL_RELATIONS.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }

    #[test]
    fn derived_keys() {
        assert!(is_derived_key("q31_totalSig"));
        assert!(is_derived_key("q103_totalSig"));
        assert!(is_derived_key(SUMMARY));
        assert!(!is_derived_key("q30_sig"));
        assert!(!is_derived_key(STAR_LORD));
    }
}
