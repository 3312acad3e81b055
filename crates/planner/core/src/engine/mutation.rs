use crate::character::{CharacterProfile, EquipSlot};
use crate::item::{Item, ItemId};
use crate::stats::StatId;
use crate::stats::catalog::kind_of;

use super::report::RecomputeReport;

/// A single edit to a profile's inputs.
///
/// Mutations never touch derived fields; the engine recomputes once after a
/// batch has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileMutation {
    SetLevel(u16),
    /// Sets the IP-bought points of a skill or ability.
    SetIpPoints {
        stat: StatId,
        points: u32,
    },
    Equip {
        slot: EquipSlot,
        item: Item,
    },
    Unequip(EquipSlot),
    /// Activates a perk; a perk with the same id is replaced.
    AddPerk(Item),
    RemovePerk(ItemId),
    RemoveBuff(ItemId),
    RemoveAllBuffs,
}

impl ProfileMutation {
    /// Applies the edit. Returns `false` when nothing changed.
    pub(crate) fn apply_to(self, profile: &mut CharacterProfile, report: &mut RecomputeReport) -> bool {
        match self {
            ProfileMutation::SetLevel(level) => {
                let before = profile.level();
                profile.set_level(level);
                profile.level() != before
            }
            ProfileMutation::SetIpPoints { stat, points } => {
                let (skill, created) = profile.skills_mut().entry_or_repair(stat);
                let trainable = !kind_of(stat).is_bonus_only();
                let changed = created || (trainable && skill.points_from_ip != points);
                if trainable {
                    skill.points_from_ip = points;
                }
                if created {
                    tracing::warn!(
                        profile = %profile.id(),
                        %stat,
                        "IP assigned to unknown stat; entry created"
                    );
                    report.note_repaired([stat]);
                }
                if !trainable {
                    tracing::warn!(
                        profile = %profile.id(),
                        %stat,
                        points,
                        "bonus-only stat cannot be trained; IP ignored"
                    );
                }
                changed
            }
            ProfileMutation::Equip { slot, item } => {
                if let Some(previous) = profile.equipment_mut().equip(slot, item) {
                    report.displaced.push(previous);
                }
                true
            }
            ProfileMutation::Unequip(slot) => profile.equipment_mut().unequip(slot).is_some(),
            ProfileMutation::AddPerk(perk) => {
                let perks = profile.perks_mut();
                match perks.iter_mut().find(|p| p.id == perk.id) {
                    Some(existing) => *existing = perk,
                    None => perks.push(perk),
                }
                true
            }
            ProfileMutation::RemovePerk(id) => {
                let perks = profile.perks_mut();
                let before = perks.len();
                perks.retain(|p| p.id != id);
                perks.len() != before
            }
            ProfileMutation::RemoveBuff(id) => profile.buffs_mut().remove(id).is_some(),
            ProfileMutation::RemoveAllBuffs => !profile.buffs_mut().clear().is_empty(),
        }
    }
}
