//! Character profile aggregate.
//!
//! A profile exclusively owns its skill map, equipment, perks and buffs; no
//! two profiles share any of these. Derived fields are only written by the
//! engine, so callers reading a profile returned from the engine always see a
//! fully recomputed state.

use crate::config::RulesConfig;
use crate::criteria::FactLookup;
use crate::item::Item;
use crate::stats::{CATALOG, Skill, SkillMap, StatId, StatKind};

use super::buffs::ActiveBuffs;
use super::equipment::Equipment;
use super::identity::{Breed, Profession};

/// Profile identifier, unique within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProfileId(pub u32);

impl core::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "profile#{}", self.0)
    }
}

/// IP accounting snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IpLedger {
    pub available: u64,
    pub spent: u64,
}

impl IpLedger {
    /// Unspent IP; negative when the allocation exceeds what the level grants.
    pub fn remaining(&self) -> i64 {
        let available = i64::try_from(self.available).unwrap_or(i64::MAX);
        let spent = i64::try_from(self.spent).unwrap_or(i64::MAX);
        available.saturating_sub(spent)
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.available
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterProfile {
    id: ProfileId,
    name: String,
    level: u16,
    breed: Breed,
    profession: Profession,
    skills: SkillMap,
    equipment: Equipment,
    perks: Vec<Item>,
    buffs: ActiveBuffs,
    ip: IpLedger,
}

impl CharacterProfile {
    /// Builds a profile with the full stat universe materialised and seeded,
    /// but not yet derived. The engine recomputes it before handing it out.
    pub(crate) fn seeded(
        rules: &RulesConfig,
        id: ProfileId,
        name: impl Into<String>,
        breed: Breed,
        profession: Profession,
        level: u16,
    ) -> Self {
        let mut skills = SkillMap::new();
        for def in CATALOG {
            let base = match def.kind {
                StatKind::Ability(ability) => breed.base_ability(ability),
                StatKind::Trainable { .. } => rules.skill_base,
                StatKind::BonusOnly => 0,
            };
            skills.insert(def.id, Skill::with_base(base));
        }

        Self {
            id,
            name: name.into(),
            level: RulesConfig::clamp_level(level),
            breed,
            profession,
            skills,
            equipment: Equipment::new(),
            perks: Vec::new(),
            buffs: ActiveBuffs::new(),
            ip: IpLedger::default(),
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn skills(&self) -> &SkillMap {
        &self.skills
    }

    pub fn skill(&self, stat: StatId) -> Option<&Skill> {
        self.skills.get(stat)
    }

    /// Derived total of `stat` (0 if not materialised).
    pub fn total(&self, stat: StatId) -> i32 {
        self.skills.total(stat)
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn perks(&self) -> &[Item] {
        &self.perks
    }

    pub fn buffs(&self) -> &ActiveBuffs {
        &self.buffs
    }

    pub fn ip(&self) -> IpLedger {
        self.ip
    }

    /// NCU consumed by the active buffs.
    pub fn ncu_usage(&self) -> i64 {
        self.buffs.usage()
    }

    /// Derived NCU capacity.
    pub fn ncu_capacity(&self) -> i32 {
        self.total(StatId::MAX_NCU)
    }

    pub(crate) fn set_level(&mut self, level: u16) {
        self.level = RulesConfig::clamp_level(level);
    }

    pub(crate) fn skills_mut(&mut self) -> &mut SkillMap {
        &mut self.skills
    }

    pub(crate) fn equipment_mut(&mut self) -> &mut Equipment {
        &mut self.equipment
    }

    pub(crate) fn perks_mut(&mut self) -> &mut Vec<Item> {
        &mut self.perks
    }

    pub(crate) fn buffs_mut(&mut self) -> &mut ActiveBuffs {
        &mut self.buffs
    }

    pub(crate) fn set_ip(&mut self, ip: IpLedger) {
        self.ip = ip;
    }
}

/// Profiles answer requirement checks with their derived totals plus the
/// identity facts (level, breed, profession).
impl FactLookup for CharacterProfile {
    fn fact(&self, stat: StatId) -> Option<i32> {
        match stat {
            StatId::LEVEL => Some(i32::from(self.level)),
            StatId::BREED => Some(self.breed.id()),
            StatId::PROFESSION => Some(self.profession.id()),
            _ => self.skills.get(stat).map(|skill| skill.total),
        }
    }
}
