//! Derivation engine.
//!
//! Recomputes every derived field of a profile from its inputs (bases, IP
//! allocations, level, breed, profession) and freshly aggregated bonuses.
//! The pass order is an invariant:
//!
//! 1. aggregate bonuses and write them onto every skill
//! 2. ability totals (abilities receive no trickle-down)
//! 3. trickle-down, cap and total of every other skill
//! 4. IP accounting
//!
//! Skills are never patched incrementally: bonus fields of stats no source
//! touches any more are reset to zero on the next pass.

use crate::character::CharacterProfile;
use crate::config::RulesConfig;

use super::ability::Ability;
use super::bonus::{ProfileBonuses, aggregate};
use super::catalog::{CATALOG, StatKind, kind_of};
use super::cost;
use super::id::StatId;
use super::skill::Skill;

/// Summary of one derivation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Derivation {
    /// Stats that were missing from the profile and were created with zero
    /// values before deriving.
    pub repaired: Vec<StatId>,
}

/// Recomputes `profile` in place.
///
/// Never fails: missing skill entries are materialised (catalogue skills with
/// their seed base, unknown ids as zero-valued bonus-only stats) and every
/// formula clamps instead of overflowing.
pub fn recompute(rules: &RulesConfig, profile: &mut CharacterProfile) -> Derivation {
    let bonuses = aggregate(
        profile.equipment().worn(),
        profile.perks(),
        profile.buffs().items(),
    );
    let repaired = repair_missing(rules, profile, &bonuses);
    if !repaired.is_empty() {
        tracing::warn!(
            profile = %profile.id(),
            stats = ?repaired,
            "auto-repaired missing skill entries"
        );
    }

    let level = profile.level();
    let breed = profile.breed();
    let profession = profile.profession();
    let skills = profile.skills_mut();

    // Step 1: bonus attribution
    for (stat, skill) in skills.iter_mut() {
        skill.equipment_bonus = bonuses.equipment.get(stat);
        skill.perk_bonus = bonuses.perk.get(stat);
        skill.buff_bonus = bonuses.buff.get(stat);
    }

    // Step 2: abilities
    let mut ability_totals = [0i32; 6];
    for ability in Ability::ALL {
        if let Some(skill) = skills.get_mut(ability.stat()) {
            skill.trickle_down = 0;
            let cap = cost::ability_cap(
                rules,
                skill.base,
                level,
                breed.ability_ceiling(ability),
                skill.bonus_sum(),
            );
            skill.cap = Some(cap);
            skill.total = cost::capped_total(skill.raw_sum(), cap);
            skill.ip_spent = cost::ip_cost(
                rules,
                skill.points_from_ip,
                breed.ability_cost_factor(ability),
            );
            ability_totals[ability.index()] = skill.total;
        }
    }

    // Step 3: trickle-down, caps and totals
    for (stat, skill) in skills.iter_mut() {
        match kind_of(stat) {
            StatKind::Ability(_) => {}
            StatKind::Trainable { category, weights } => {
                let cost_factor = profession.cost_factor(category);
                skill.trickle_down = cost::trickle_down(rules, &weights, &ability_totals);
                let limit =
                    cost::training_limit(rules, level, cost_factor, &weights, &ability_totals);
                let cap = cost::skill_cap(skill.base, skill.trickle_down, limit, skill.bonus_sum());
                skill.cap = Some(cap);
                skill.total = cost::capped_total(skill.raw_sum(), cap);
                skill.ip_spent = cost::ip_cost(rules, skill.points_from_ip, cost_factor);
            }
            StatKind::BonusOnly => derive_bonus_only(skill),
        }
    }

    // Step 4: IP accounting
    let spent = skills
        .iter()
        .fold(0u64, |acc, (_, skill)| acc.saturating_add(skill.ip_spent));
    profile.set_ip(crate::character::IpLedger {
        available: cost::available_ip(rules, level),
        spent,
    });

    tracing::debug!(
        profile = %profile.id(),
        level,
        ncu = profile.total(StatId::MAX_NCU),
        ip_remaining = profile.ip().remaining(),
        "profile recomputed"
    );

    Derivation { repaired }
}

fn derive_bonus_only(skill: &mut Skill) {
    skill.trickle_down = 0;
    skill.cap = None;
    skill.ip_spent = 0;
    skill.total = skill
        .bonus_sum()
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
}

fn repair_missing(
    rules: &RulesConfig,
    profile: &mut CharacterProfile,
    bonuses: &ProfileBonuses,
) -> Vec<StatId> {
    let breed = profile.breed();
    let touched: Vec<StatId> = bonuses.touched().collect();
    let skills = profile.skills_mut();
    let mut repaired = Vec::new();

    for def in CATALOG {
        if !skills.contains(def.id) {
            let base = match def.kind {
                StatKind::Ability(ability) => breed.base_ability(ability),
                StatKind::Trainable { .. } => rules.skill_base,
                StatKind::BonusOnly => 0,
            };
            skills.insert(def.id, Skill::with_base(base));
            repaired.push(def.id);
        }
    }
    for stat in touched {
        let (_, created) = skills.entry_or_repair(stat);
        if created {
            repaired.push(stat);
        }
    }
    repaired.sort_unstable();
    repaired.dedup();
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Breed, EquipSlot, Profession, ProfileId};
    use crate::item::{Item, ItemId, TriggerEvent};

    const BODY_DEV: StatId = StatId(152);
    const COMP_LIT: StatId = StatId(161);

    fn profile(level: u16) -> CharacterProfile {
        let rules = RulesConfig::default();
        let mut profile = CharacterProfile::seeded(
            &rules,
            ProfileId(1),
            "Derive",
            Breed::Solitus,
            Profession::Soldier,
            level,
        );
        recompute(&rules, &mut profile);
        profile
    }

    #[test]
    fn fresh_profile_derives_from_seeds() {
        let p = profile(1);
        // Solitus stamina 6 → body dev trickle floor(6 / 4) = 1
        let body = p.skill(BODY_DEV).unwrap();
        assert_eq!(body.trickle_down, 1);
        assert_eq!(body.total, 5 + 1);
        assert_eq!(p.total(StatId::STAMINA), 6);
        assert_eq!(p.ip().spent, 0);
        assert_eq!(p.ip().available, 1_500);
    }

    #[test]
    fn bonus_only_stat_is_sum_of_bonuses() {
        let rules = RulesConfig::default();
        let mut p = profile(10);
        p.equipment_mut().equip(
            EquipSlot::Belt,
            Item::new(ItemId(1), "NCU Belt").with_effect(TriggerEvent::Wield, StatId::MAX_NCU, 1206),
        );
        recompute(&rules, &mut p);
        let ncu = p.skill(StatId::MAX_NCU).unwrap();
        assert_eq!(ncu.total, 1206);
        assert_eq!(ncu.cap, None);
    }

    #[test]
    fn ability_buff_raises_dependent_trickle() {
        let rules = RulesConfig::default();
        let mut p = profile(50);
        let before = p.skill(COMP_LIT).unwrap().trickle_down;

        p.perks_mut().push(
            Item::new(ItemId(2), "Brainy").with_effect(TriggerEvent::Wear, StatId::INTELLIGENCE, 40),
        );
        recompute(&rules, &mut p);

        assert_eq!(p.total(StatId::INTELLIGENCE), 6 + 40);
        assert_eq!(p.skill(COMP_LIT).unwrap().trickle_down, before + 10);
    }

    #[test]
    fn stale_bonuses_are_cleared() {
        let rules = RulesConfig::default();
        let mut p = profile(10);
        p.equipment_mut().equip(
            EquipSlot::Chest,
            Item::new(ItemId(3), "Vest").with_effect(TriggerEvent::Wear, BODY_DEV, 30),
        );
        recompute(&rules, &mut p);
        assert_eq!(p.skill(BODY_DEV).unwrap().equipment_bonus, 30);

        p.equipment_mut().unequip(EquipSlot::Chest);
        recompute(&rules, &mut p);
        assert_eq!(p.skill(BODY_DEV).unwrap().equipment_bonus, 0);
    }

    #[test]
    fn ip_above_cap_is_clamped_but_paid_for() {
        let rules = RulesConfig::default();
        let mut p = profile(1);
        p.skills_mut().get_mut(BODY_DEV).unwrap().points_from_ip = 500;
        recompute(&rules, &mut p);

        let body = p.skill(BODY_DEV).unwrap();
        // level 1 at Soldier body cost 1.2 allows 5 points; abilities allow 12
        assert_eq!(body.cap, Some(5 + 1 + 5));
        assert_eq!(body.total, 11);
        assert!(body.ip_spent > 0);
        assert!(p.ip().is_overspent());
    }

    #[test]
    fn unknown_bonus_stat_is_repaired() {
        let rules = RulesConfig::default();
        let mut p = profile(10);
        p.perks_mut().push(
            Item::new(ItemId(4), "Odd").with_effect(TriggerEvent::Wear, StatId(4242), 3),
        );
        let derivation = recompute(&rules, &mut p);
        assert_eq!(derivation.repaired, vec![StatId(4242)]);
        assert_eq!(p.total(StatId(4242)), 3);
    }

    #[test]
    fn heavy_debuffs_floor_at_zero() {
        let rules = RulesConfig::default();
        let mut p = profile(1);
        p.perks_mut().push(
            Item::new(ItemId(5), "Curse")
                .with_effect(TriggerEvent::Wear, StatId::STAMINA, -1000)
                .with_effect(TriggerEvent::Wear, BODY_DEV, -1000),
        );
        recompute(&rules, &mut p);
        assert_eq!(p.total(StatId::STAMINA), 0);
        assert_eq!(p.skill(BODY_DEV).unwrap().cap, Some(0));
        assert_eq!(p.total(BODY_DEV), 0);
    }
}
