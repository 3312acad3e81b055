mod mutation;
mod report;

use crate::admission::{AdmissionController, AdmissionError};
use crate::character::{ActiveBuff, Breed, CharacterProfile, EquipSlot, Profession, ProfileId};
use crate::config::RulesConfig;
use crate::criteria::{CriteriaError, Eligibility, evaluate};
use crate::item::{Item, ItemId};
use crate::stats::{self, StatId};

pub use mutation::ProfileMutation;
pub use report::{CastOutcome, RecomputeReport};

/// Creates a fully derived profile with every catalogue stat seeded.
pub fn create_profile(
    rules: &RulesConfig,
    id: ProfileId,
    name: impl Into<String>,
    breed: Breed,
    profession: Profession,
    level: u16,
) -> CharacterProfile {
    let mut profile = CharacterProfile::seeded(rules, id, name, breed, profession, level);
    ProfileEngine::new(&mut profile, rules).recompute();
    profile
}

/// Recomputes every derived field of `profile`, evicting buffs the resulting
/// capacity can no longer hold.
pub fn recompute_profile(rules: &RulesConfig, profile: &mut CharacterProfile) -> RecomputeReport {
    ProfileEngine::new(profile, rules).recompute()
}

/// Checks `item`'s requirements against `profile`'s current totals.
pub fn can_use(item: &Item, profile: &CharacterProfile) -> Result<Eligibility, CriteriaError> {
    evaluate(&item.requirements, profile)
}

/// Profile engine that applies mutations and buff casts to one profile.
///
/// Every public operation leaves the profile fully derived: inputs are
/// edited, then bonuses are re-aggregated and every stat recomputed from
/// scratch. Failed operations leave the profile exactly as it was.
pub struct ProfileEngine<'a> {
    profile: &'a mut CharacterProfile,
    rules: &'a RulesConfig,
}

impl<'a> ProfileEngine<'a> {
    pub fn new(profile: &'a mut CharacterProfile, rules: &'a RulesConfig) -> Self {
        Self { profile, rules }
    }

    pub fn profile(&self) -> &CharacterProfile {
        self.profile
    }

    pub fn ncu_usage(&self) -> i64 {
        self.profile.ncu_usage()
    }

    pub fn ncu_capacity(&self) -> i32 {
        self.profile.ncu_capacity()
    }

    /// Admission preview over the current active set.
    pub fn admission(&self) -> AdmissionController<'_> {
        AdmissionController::for_profile(self.profile)
    }

    pub fn can_use(&self, item: &Item) -> Result<Eligibility, CriteriaError> {
        can_use(item, self.profile)
    }

    pub fn recompute(&mut self) -> RecomputeReport {
        self.settle(RecomputeReport::default())
    }

    /// Casts `item` as a buff.
    ///
    /// A cast whose own bonuses would drop capacity below the new usage is
    /// rolled back and rejected as [`AdmissionError::InsufficientCapacity`].
    pub fn cast_buff(&mut self, item: &Item) -> Result<CastOutcome, AdmissionError> {
        let plan = self.admission().check(item).inspect_err(|error| {
            tracing::debug!(
                profile = %self.profile.id(),
                item = %item.id,
                %error,
                "buff rejected"
            );
        })?;

        let snapshot = self.profile.clone();
        let replaced = self
            .profile
            .buffs_mut()
            .insert(ActiveBuff::new(item.clone(), plan.descriptor));
        let derivation = stats::recompute(self.rules, self.profile);

        let capacity = self.ncu_capacity();
        if self.ncu_usage() > i64::from(capacity) {
            let used = snapshot.ncu_usage();
            *self.profile = snapshot;
            tracing::debug!(
                profile = %self.profile.id(),
                item = %item.id,
                capacity,
                "buff would shrink capacity below its own usage; rolled back"
            );
            return Err(AdmissionError::InsufficientCapacity {
                requested: plan.descriptor.cost,
                used,
                capacity,
            });
        }

        tracing::debug!(
            profile = %self.profile.id(),
            item = %item.id,
            replaced = ?replaced.as_ref().map(ActiveBuff::id),
            usage = self.ncu_usage(),
            capacity,
            "buff admitted"
        );

        let mut report = RecomputeReport::default();
        report.note_repaired(derivation.repaired);
        Ok(CastOutcome { replaced, report })
    }

    /// Removes the buff running `id`. Removing an inactive buff changes nothing.
    pub fn remove_buff(&mut self, id: ItemId) -> RecomputeReport {
        self.apply([ProfileMutation::RemoveBuff(id)])
    }

    pub fn remove_all_buffs(&mut self) -> RecomputeReport {
        self.apply([ProfileMutation::RemoveAllBuffs])
    }

    /// Puts `item` into `slot`; a previously equipped item is reported as
    /// displaced.
    pub fn equip(&mut self, slot: EquipSlot, item: Item) -> RecomputeReport {
        self.apply([ProfileMutation::Equip { slot, item }])
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> RecomputeReport {
        self.apply([ProfileMutation::Unequip(slot)])
    }

    pub fn add_perk(&mut self, perk: Item) -> RecomputeReport {
        self.apply([ProfileMutation::AddPerk(perk)])
    }

    pub fn remove_perk(&mut self, id: ItemId) -> RecomputeReport {
        self.apply([ProfileMutation::RemovePerk(id)])
    }

    pub fn set_level(&mut self, level: u16) -> RecomputeReport {
        self.apply([ProfileMutation::SetLevel(level)])
    }

    pub fn set_ip_points(&mut self, stat: StatId, points: u32) -> RecomputeReport {
        self.apply([ProfileMutation::SetIpPoints { stat, points }])
    }

    /// Applies `mutations` in order, then recomputes once.
    ///
    /// A batch in which no mutation changed anything skips the recompute.
    pub fn apply(&mut self, mutations: impl IntoIterator<Item = ProfileMutation>) -> RecomputeReport {
        let mut report = RecomputeReport::default();
        let mut changed = false;
        for mutation in mutations {
            changed |= mutation.apply_to(self.profile, &mut report);
        }
        if changed {
            self.settle(report)
        } else {
            report
        }
    }

    /// Recomputes, then drops the newest buffs until usage fits capacity.
    fn settle(&mut self, mut report: RecomputeReport) -> RecomputeReport {
        report.note_repaired(stats::recompute(self.rules, self.profile).repaired);

        loop {
            let capacity = self.ncu_capacity();
            let usage = self.ncu_usage();
            if usage <= i64::from(capacity) {
                break;
            }
            let Some(buff) = self.profile.buffs_mut().pop_newest() else {
                break;
            };
            tracing::warn!(
                profile = %self.profile.id(),
                buff = %buff.id(),
                cost = buff.cost,
                usage,
                capacity,
                "NCU capacity exceeded; evicted newest buff"
            );
            report.evicted.push(buff);
            report.note_repaired(stats::recompute(self.rules, self.profile).repaired);
        }

        report
    }
}
