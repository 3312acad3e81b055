//! Per-profile skill records.

use std::collections::BTreeMap;

use super::id::StatId;

/// One stat entry of a profile.
///
/// Every bonus source is kept in its own field so the UI can attribute a
/// total to its sources and undo any one of them. Only the derivation engine
/// writes `trickle_down`, the bonus fields, `ip_spent`, `cap` and `total`;
/// `base` and `points_from_ip` are inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    /// Breed/profession seed.
    pub base: i32,
    /// Passive share of the ability totals.
    pub trickle_down: i32,
    /// Points bought with IP.
    pub points_from_ip: u32,
    pub equipment_bonus: i32,
    pub perk_bonus: i32,
    pub buff_bonus: i32,
    /// IP paid for `points_from_ip`.
    pub ip_spent: u64,
    /// Ceiling for `total`; `None` for bonus-only stats.
    pub cap: Option<i32>,
    pub total: i32,
}

impl Skill {
    pub fn with_base(base: i32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Sum of the three bonus sources.
    pub fn bonus_sum(&self) -> i64 {
        i64::from(self.equipment_bonus) + i64::from(self.perk_bonus) + i64::from(self.buff_bonus)
    }

    /// Uncapped sum of every source.
    pub fn raw_sum(&self) -> i64 {
        i64::from(self.base)
            + i64::from(self.trickle_down)
            + i64::from(self.points_from_ip)
            + self.bonus_sum()
    }

    /// Points bought with IP that are above the current cap and therefore
    /// have no effect on `total`.
    pub fn wasted_points(&self) -> i64 {
        match self.cap {
            Some(cap) => (self.raw_sum() - i64::from(cap)).clamp(0, i64::from(self.points_from_ip)),
            None => 0,
        }
    }
}

/// All stats of one profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillMap {
    skills: BTreeMap<StatId, Skill>,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatId) -> Option<&Skill> {
        self.skills.get(&stat)
    }

    /// Derived total, or 0 for a stat that is not materialised.
    pub fn total(&self, stat: StatId) -> i32 {
        self.skills.get(&stat).map_or(0, |skill| skill.total)
    }

    pub fn contains(&self, stat: StatId) -> bool {
        self.skills.contains_key(&stat)
    }

    pub fn insert(&mut self, stat: StatId, skill: Skill) -> Option<Skill> {
        self.skills.insert(stat, skill)
    }

    /// Returns the entry for `stat`, creating a zero-valued one if absent.
    /// The flag is true when the entry had to be created.
    pub fn entry_or_repair(&mut self, stat: StatId) -> (&mut Skill, bool) {
        let missing = !self.skills.contains_key(&stat);
        (self.skills.entry(stat).or_default(), missing)
    }

    pub(crate) fn get_mut(&mut self, stat: StatId) -> Option<&mut Skill> {
        self.skills.get_mut(&stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatId, &Skill)> {
        self.skills.iter().map(|(id, skill)| (*id, skill))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (StatId, &mut Skill)> {
        self.skills.iter_mut().map(|(id, skill)| (*id, skill))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
