//! Breed and profession identity.
//!
//! Breed seeds the six abilities, bounds how far they can be trained and
//! prices ability IP. Profession prices skill IP per [`SkillCategory`].

use crate::stats::{Ability, SkillCategory};

/// Character breed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Breed {
    #[default]
    Solitus,
    Opifex,
    Nanomage,
    Atrox,
}

impl Breed {
    /// Numeric id used as a requirement fact.
    pub const fn id(self) -> i32 {
        match self {
            Breed::Solitus => 1,
            Breed::Opifex => 2,
            Breed::Nanomage => 3,
            Breed::Atrox => 4,
        }
    }

    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Breed::Solitus),
            2 => Some(Breed::Opifex),
            3 => Some(Breed::Nanomage),
            4 => Some(Breed::Atrox),
            _ => None,
        }
    }

    //                     Str Agi Sta Int Sen Psy
    const BASES: [[i32; 6]; 4] = [
        [6, 6, 6, 6, 6, 6],
        [3, 15, 6, 6, 10, 6],
        [3, 3, 3, 15, 6, 10],
        [15, 6, 10, 3, 3, 3],
    ];

    const CEILINGS: [[i32; 6]; 4] = [
        [472, 472, 472, 472, 472, 472],
        [464, 480, 464, 472, 480, 472],
        [464, 464, 448, 480, 480, 480],
        [512, 480, 512, 400, 400, 400],
    ];

    /// Ability cost factors in tenths.
    const COSTS: [[u16; 6]; 4] = [
        [20, 20, 20, 20, 20, 20],
        [24, 16, 24, 20, 16, 22],
        [28, 22, 28, 16, 20, 16],
        [16, 20, 16, 28, 24, 26],
    ];

    const fn row(self) -> usize {
        self as usize
    }

    /// Starting value of an ability.
    pub const fn base_ability(self, ability: Ability) -> i32 {
        Self::BASES[self.row()][ability.index()]
    }

    /// Highest trained (pre-bonus) value of an ability.
    pub const fn ability_ceiling(self, ability: Ability) -> i32 {
        Self::CEILINGS[self.row()][ability.index()]
    }

    pub const fn ability_cost_factor(self, ability: Ability) -> u16 {
        Self::COSTS[self.row()][ability.index()]
    }
}

/// Character profession.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Profession {
    #[default]
    Soldier,
    MartialArtist,
    Engineer,
    Fixer,
    Agent,
    Adventurer,
    Trader,
    Bureaucrat,
    Enforcer,
    Doctor,
    NanoTechnician,
    MetaPhysicist,
    Keeper,
    Shade,
}

impl Profession {
    /// Numeric id used as a requirement fact.
    pub const fn id(self) -> i32 {
        match self {
            Profession::Soldier => 1,
            Profession::MartialArtist => 2,
            Profession::Engineer => 3,
            Profession::Fixer => 4,
            Profession::Agent => 5,
            Profession::Adventurer => 6,
            Profession::Trader => 7,
            Profession::Bureaucrat => 8,
            Profession::Enforcer => 9,
            Profession::Doctor => 10,
            Profession::NanoTechnician => 11,
            Profession::MetaPhysicist => 12,
            Profession::Keeper => 14,
            Profession::Shade => 15,
        }
    }

    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Profession::Soldier),
            2 => Some(Profession::MartialArtist),
            3 => Some(Profession::Engineer),
            4 => Some(Profession::Fixer),
            5 => Some(Profession::Agent),
            6 => Some(Profession::Adventurer),
            7 => Some(Profession::Trader),
            8 => Some(Profession::Bureaucrat),
            9 => Some(Profession::Enforcer),
            10 => Some(Profession::Doctor),
            11 => Some(Profession::NanoTechnician),
            12 => Some(Profession::MetaPhysicist),
            14 => Some(Profession::Keeper),
            15 => Some(Profession::Shade),
            _ => None,
        }
    }

    // Body Mel MSp Rng RSp Spd Nano Trd Exp Cmb
    const COSTS: [[u16; SkillCategory::COUNT]; 14] = [
        [12, 18, 20, 10, 12, 14, 30, 20, 16, 16], // Soldier
        [10, 12, 10, 25, 25, 12, 25, 24, 16, 14], // MartialArtist
        [20, 24, 28, 18, 22, 18, 20, 10, 14, 18], // Engineer
        [16, 20, 22, 14, 14, 10, 18, 14, 10, 16], // Fixer
        [18, 22, 20, 12, 10, 14, 20, 18, 14, 12], // Agent
        [12, 16, 18, 14, 16, 12, 18, 18, 10, 16], // Adventurer
        [18, 20, 26, 16, 20, 16, 16, 12, 14, 16], // Trader
        [20, 24, 30, 18, 26, 18, 14, 16, 16, 16], // Bureaucrat
        [10, 10, 14, 24, 28, 16, 26, 22, 18, 18], // Enforcer
        [16, 24, 30, 18, 26, 18, 12, 16, 16, 10], // Doctor
        [24, 30, 40, 22, 30, 20, 10, 16, 18, 18], // NanoTechnician
        [20, 26, 32, 20, 28, 18, 11, 16, 16, 16], // MetaPhysicist
        [12, 12, 14, 26, 28, 14, 18, 22, 16, 14], // Keeper
        [12, 10, 10, 28, 30, 10, 20, 22, 14, 14], // Shade
    ];

    /// Skill cost factor in tenths for a category.
    pub const fn cost_factor(self, category: SkillCategory) -> u16 {
        Self::COSTS[self as usize][category.index()]
    }
}
