//! Static stat catalogue.
//!
//! Every profile materialises the full stat universe listed here when it is
//! created. Trainable skills carry a trickle-down weight vector (in tenths,
//! summing to 10) over [`Ability::ALL`] and a [`SkillCategory`] used for
//! cost lookups. Bonus-only stats have neither.

use super::ability::Ability;
use super::id::StatId;

/// Trickle-down weights in tenths, indexed by [`Ability::index`].
pub type Weights = [u8; 6];

/// Skill groupings used for profession cost factors.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillCategory {
    Body,
    Melee,
    MeleeSpecials,
    Ranged,
    RangedSpecials,
    Speed,
    NanoCasting,
    TradeRepair,
    Exploring,
    Combat,
}

impl SkillCategory {
    pub const COUNT: usize = 10;

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How a stat participates in derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    /// One of the six abilities.
    Ability(Ability),
    /// Trainable with IP; receives trickle-down and is capped.
    Trainable {
        category: SkillCategory,
        weights: Weights,
    },
    /// Sum of bonus sources only; no base, no cap.
    BonusOnly,
}

impl StatKind {
    pub const fn is_bonus_only(&self) -> bool {
        matches!(self, StatKind::BonusOnly)
    }
}

/// Catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatDef {
    pub id: StatId,
    pub name: &'static str,
    pub kind: StatKind,
}

const fn ability(ability: Ability, name: &'static str) -> StatDef {
    StatDef {
        id: ability.stat(),
        name,
        kind: StatKind::Ability(ability),
    }
}

const fn skill(id: u16, name: &'static str, category: SkillCategory, weights: Weights) -> StatDef {
    StatDef {
        id: StatId(id),
        name,
        kind: StatKind::Trainable { category, weights },
    }
}

const fn bonus(id: u16, name: &'static str) -> StatDef {
    StatDef {
        id: StatId(id),
        name,
        kind: StatKind::BonusOnly,
    }
}

use SkillCategory::*;

//                                                         Str Agi Sta Int Sen Psy
pub static CATALOG: &[StatDef] = &[
    ability(Ability::Strength, "Strength"),
    ability(Ability::Agility, "Agility"),
    ability(Ability::Stamina, "Stamina"),
    ability(Ability::Intelligence, "Intelligence"),
    ability(Ability::Sense, "Sense"),
    ability(Ability::Psychic, "Psychic"),
    // Body
    skill(152, "Body Development", Body, [0, 0, 10, 0, 0, 0]),
    skill(132, "Nano Pool", Body, [0, 0, 1, 1, 1, 7]),
    skill(100, "Martial Arts", Body, [2, 5, 0, 0, 0, 3]),
    skill(142, "Brawl", Body, [6, 0, 4, 0, 0, 0]),
    skill(144, "Dimach", Body, [0, 0, 0, 0, 8, 2]),
    skill(143, "Riposte", Body, [0, 5, 0, 0, 5, 0]),
    skill(137, "Adventuring", Body, [2, 5, 3, 0, 0, 0]),
    skill(138, "Swimming", Body, [2, 2, 6, 0, 0, 0]),
    // Melee
    skill(102, "1h Blunt", Melee, [5, 1, 4, 0, 0, 0]),
    skill(103, "1h Edged", Melee, [3, 4, 3, 0, 0, 0]),
    skill(106, "Piercing", Melee, [2, 5, 3, 0, 0, 0]),
    skill(107, "2h Blunt", Melee, [5, 0, 5, 0, 0, 0]),
    skill(105, "2h Edged", Melee, [6, 0, 4, 0, 0, 0]),
    skill(104, "Melee Energy", Melee, [0, 0, 5, 5, 0, 0]),
    skill(101, "Multi Melee", Melee, [3, 6, 1, 0, 0, 0]),
    // Melee specials
    skill(147, "Fast Attack", MeleeSpecials, [0, 6, 0, 0, 4, 0]),
    skill(145, "Parry", MeleeSpecials, [5, 5, 0, 0, 0, 0]),
    skill(146, "Sneak Attack", MeleeSpecials, [0, 0, 0, 0, 8, 2]),
    // Ranged
    skill(112, "Pistol", Ranged, [0, 6, 0, 0, 4, 0]),
    skill(116, "Assault Rifle", Ranged, [0, 3, 4, 0, 1, 2]),
    skill(113, "Rifle", Ranged, [0, 6, 0, 1, 3, 0]),
    skill(114, "SMG", Ranged, [1, 6, 3, 0, 0, 0]),
    skill(115, "Shotgun", Ranged, [4, 6, 0, 0, 0, 0]),
    skill(111, "Bow", Ranged, [1, 4, 0, 0, 5, 0]),
    skill(109, "Grenade", Ranged, [0, 4, 0, 2, 4, 0]),
    skill(110, "Heavy Weapons", Ranged, [4, 6, 0, 0, 0, 0]),
    skill(108, "Sharp Objects", Ranged, [0, 6, 0, 0, 2, 2]),
    skill(133, "Ranged Energy", Ranged, [0, 0, 0, 2, 4, 4]),
    skill(134, "Multi Ranged", Ranged, [0, 6, 0, 4, 0, 0]),
    // Ranged specials
    skill(150, "Fling Shot", RangedSpecials, [0, 10, 0, 0, 0, 0]),
    skill(151, "Aimed Shot", RangedSpecials, [0, 0, 0, 0, 10, 0]),
    skill(148, "Burst", RangedSpecials, [0, 5, 3, 0, 2, 0]),
    skill(167, "Full Auto", RangedSpecials, [0, 0, 4, 0, 0, 6]),
    skill(121, "Bow Special Attack", RangedSpecials, [0, 5, 0, 0, 5, 0]),
    // Speed
    skill(118, "Melee Init", Speed, [0, 1, 0, 0, 1, 8]),
    skill(119, "Ranged Init", Speed, [0, 1, 0, 0, 1, 8]),
    skill(120, "Physical Init", Speed, [0, 1, 0, 0, 1, 8]),
    skill(149, "Nano Init", Speed, [0, 8, 0, 0, 2, 0]),
    skill(155, "Dodge Ranged", Speed, [0, 5, 0, 2, 3, 0]),
    skill(154, "Evade Close", Speed, [0, 5, 0, 2, 3, 0]),
    skill(153, "Duck Explosions", Speed, [0, 5, 0, 2, 3, 0]),
    skill(156, "Run Speed", Speed, [2, 4, 4, 0, 0, 0]),
    // Nano casting
    skill(130, "Matter Creation", NanoCasting, [0, 0, 5, 5, 0, 0]),
    skill(127, "Matter Metamorphosis", NanoCasting, [0, 0, 0, 5, 0, 5]),
    skill(128, "Biological Metamorphosis", NanoCasting, [0, 0, 0, 5, 0, 5]),
    skill(129, "Psychological Modifications", NanoCasting, [0, 0, 0, 5, 5, 0]),
    skill(122, "Sensory Improvement", NanoCasting, [0, 0, 0, 2, 2, 6]),
    skill(131, "Time and Space", NanoCasting, [0, 2, 0, 5, 0, 3]),
    skill(168, "Nano Resist", NanoCasting, [0, 0, 0, 2, 0, 8]),
    // Trade & repair
    skill(125, "Mechanical Engineering", TradeRepair, [0, 5, 0, 5, 0, 0]),
    skill(126, "Electrical Engineering", TradeRepair, [0, 3, 2, 5, 0, 0]),
    skill(157, "Quantum FT", TradeRepair, [0, 0, 0, 5, 0, 5]),
    skill(158, "Weapon Smithing", TradeRepair, [5, 0, 0, 5, 0, 0]),
    skill(159, "Pharma Tech", TradeRepair, [0, 3, 0, 5, 2, 0]),
    skill(160, "Nano Programming", TradeRepair, [0, 0, 0, 10, 0, 0]),
    skill(161, "Computer Literacy", TradeRepair, [0, 0, 0, 10, 0, 0]),
    skill(162, "Psychology", TradeRepair, [0, 0, 0, 5, 5, 0]),
    skill(163, "Chemistry", TradeRepair, [0, 0, 5, 5, 0, 0]),
    skill(141, "Tutoring", TradeRepair, [0, 0, 0, 7, 2, 1]),
    // Exploring
    skill(139, "Vehicle Air", Exploring, [0, 2, 0, 2, 6, 0]),
    skill(166, "Vehicle Ground", Exploring, [0, 5, 0, 2, 3, 0]),
    skill(117, "Vehicle Water", Exploring, [0, 4, 0, 2, 4, 0]),
    skill(140, "Map Navigation", Exploring, [0, 0, 0, 4, 5, 1]),
    // Combat & healing
    skill(124, "Treatment", Combat, [0, 3, 0, 5, 2, 0]),
    skill(123, "First Aid", Combat, [0, 3, 0, 3, 4, 0]),
    skill(136, "Perception", Combat, [0, 0, 0, 3, 7, 0]),
    skill(164, "Concealment", Combat, [0, 3, 0, 0, 7, 0]),
    skill(165, "Break and Entry", Combat, [0, 4, 0, 0, 3, 3]),
    skill(135, "Trap Disarm", Combat, [0, 2, 0, 2, 6, 0]),
    // Bonus-only
    bonus(181, "Max NCU"),
    bonus(1, "Max Health"),
    bonus(221, "Max Nano"),
    bonus(343, "Heal Delta"),
    bonus(364, "Nano Delta"),
    bonus(276, "Add All Offense"),
    bonus(277, "Add All Defense"),
    bonus(278, "Projectile Damage Modifier"),
    bonus(279, "Melee Damage Modifier"),
    bonus(280, "Energy Damage Modifier"),
    bonus(281, "Chemical Damage Modifier"),
    bonus(282, "Radiation Damage Modifier"),
    bonus(311, "Cold Damage Modifier"),
    bonus(315, "Nano Damage Modifier"),
    bonus(316, "Fire Damage Modifier"),
    bonus(317, "Poison Damage Modifier"),
    bonus(318, "Nano Cost Modifier"),
    bonus(379, "Critical Increase"),
    bonus(382, "Skill Lock Modifier"),
    bonus(383, "Nano Interrupt Modifier"),
    bonus(90, "Projectile AC"),
    bonus(91, "Melee AC"),
    bonus(92, "Energy AC"),
    bonus(93, "Chemical AC"),
    bonus(94, "Radiation AC"),
    bonus(95, "Cold AC"),
    bonus(96, "Poison AC"),
    bonus(97, "Fire AC"),
];

/// Looks up a catalogue entry.
pub fn lookup(stat: StatId) -> Option<&'static StatDef> {
    CATALOG.iter().find(|def| def.id == stat)
}

/// Derivation kind for any id; ids outside the catalogue are bonus-only.
pub fn kind_of(stat: StatId) -> StatKind {
    lookup(stat).map_or(StatKind::BonusOnly, |def| def.kind)
}

pub fn name_of(stat: StatId) -> Option<&'static str> {
    lookup(stat).map(|def| def.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<_> = CATALOG.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn weights_sum_to_ten() {
        for def in CATALOG {
            if let StatKind::Trainable { weights, .. } = def.kind {
                let sum: u32 = weights.iter().map(|w| u32::from(*w)).sum();
                assert_eq!(sum, 10, "{} weights sum to {}", def.name, sum);
            }
        }
    }

    #[test]
    fn descriptors_are_not_catalogued_as_skills() {
        for def in CATALOG {
            assert!(!def.id.is_descriptor(), "{} is a descriptor", def.name);
        }
    }

    #[test]
    fn universe_covers_abilities_and_capacity() {
        for ability in Ability::ALL {
            assert_eq!(kind_of(ability.stat()), StatKind::Ability(ability));
        }
        assert!(kind_of(StatId::MAX_NCU).is_bonus_only());
        assert!(kind_of(StatId(60_000)).is_bonus_only());
        assert!(CATALOG.len() >= 90);
    }
}
