//! The six abilities that every other skill trickles down from.

use super::id::StatId;

/// Core abilities.
///
/// Abilities are trained like skills but receive no trickle-down themselves.
/// Their totals feed every other skill through the catalogue weight vectors,
/// in the fixed order of [`Ability::ALL`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Ability {
    Strength,
    Agility,
    Stamina,
    Intelligence,
    Sense,
    Psychic,
}

impl Ability {
    /// Abilities in weight-vector order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Agility,
        Ability::Stamina,
        Ability::Intelligence,
        Ability::Sense,
        Ability::Psychic,
    ];

    /// Position of this ability inside a weight vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn stat(self) -> StatId {
        match self {
            Ability::Strength => StatId::STRENGTH,
            Ability::Agility => StatId::AGILITY,
            Ability::Stamina => StatId::STAMINA,
            Ability::Intelligence => StatId::INTELLIGENCE,
            Ability::Sense => StatId::SENSE,
            Ability::Psychic => StatId::PSYCHIC,
        }
    }

    pub const fn from_stat(stat: StatId) -> Option<Self> {
        match stat {
            StatId::STRENGTH => Some(Ability::Strength),
            StatId::AGILITY => Some(Ability::Agility),
            StatId::STAMINA => Some(Ability::Stamina),
            StatId::INTELLIGENCE => Some(Ability::Intelligence),
            StatId::SENSE => Some(Ability::Sense),
            StatId::PSYCHIC => Some(Ability::Psychic),
            _ => None,
        }
    }
}
