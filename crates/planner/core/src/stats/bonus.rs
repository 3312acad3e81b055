//! Bonus aggregation.
//!
//! Scans equipped items, active perks and active buffs and produces one
//! [`BonusMap`] per source. The maps are ephemeral: they are rebuilt from
//! scratch on every recompute and never patched incrementally.
//!
//! ```text
//! equipment ──(Wear/Wield)──▶ equipment map ─┐
//! perks ───────(Wear)───────▶ perk map ──────┼──▶ derivation
//! buffs ───────(Cast)───────▶ buff map ──────┘
//! ```

use std::collections::BTreeMap;

use super::id::StatId;
use crate::item::{Item, TriggerEvent};

/// Per-stat bonus sums for one source.
///
/// Sums accumulate in `i64` so the result does not depend on the order in
/// which contributions arrive; reads clamp to the `i32` range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusMap {
    sums: BTreeMap<StatId, i64>,
}

impl BonusMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stat: StatId, amount: i32) {
        *self.sums.entry(stat).or_insert(0) += i64::from(amount);
    }

    /// Sum for `stat`; absent stats read as 0.
    pub fn get(&self, stat: StatId) -> i32 {
        self.sums
            .get(&stat)
            .map_or(0, |sum| (*sum).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    pub fn stats(&self) -> impl Iterator<Item = StatId> + '_ {
        self.sums.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    fn absorb(&mut self, item: &Item, event: TriggerEvent) {
        for (stat, amount) in item.bonuses_for(event) {
            self.add(stat, amount);
        }
    }
}

/// The three bonus maps of one profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileBonuses {
    pub equipment: BonusMap,
    pub perk: BonusMap,
    pub buff: BonusMap,
}

impl ProfileBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stat any source touches.
    pub fn touched(&self) -> impl Iterator<Item = StatId> + '_ {
        self.equipment
            .stats()
            .chain(self.perk.stats())
            .chain(self.buff.stats())
    }
}

/// Compute bonus maps from the current equipment, perks and buffs (pure function).
///
/// `equipped` pairs each item with the event its slot fires (`Wield` for
/// weapon slots, `Wear` otherwise). Perks fire `Wear`; buffs fire `Cast`.
/// Raw stats and event-gated effects both contribute, and contributions to
/// the same stat add.
pub fn aggregate<'a>(
    equipped: impl IntoIterator<Item = (TriggerEvent, &'a Item)>,
    perks: impl IntoIterator<Item = &'a Item>,
    buffs: impl IntoIterator<Item = &'a Item>,
) -> ProfileBonuses {
    let mut bonuses = ProfileBonuses::new();
    for (event, item) in equipped {
        bonuses.equipment.absorb(item, event);
    }
    for perk in perks {
        bonuses.perk.absorb(perk, TriggerEvent::Wear);
    }
    for buff in buffs {
        bonuses.buff.absorb(buff, TriggerEvent::Cast);
    }
    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn ring(id: u32, stamina: i32) -> Item {
        Item::new(ItemId(id), "Ring").with_effect(TriggerEvent::Wear, StatId::STAMINA, stamina)
    }

    #[test]
    fn equipment_bonuses_add_across_items() {
        let items = [ring(1, 10), ring(2, 15), ring(3, -5)];
        let bonuses = aggregate(
            items.iter().map(|i| (TriggerEvent::Wear, i)),
            [],
            [],
        );
        assert_eq!(bonuses.equipment.get(StatId::STAMINA), 20);
        assert!(bonuses.perk.is_empty());
        assert!(bonuses.buff.is_empty());
    }

    #[test]
    fn aggregation_is_order_independent() {
        let items = [ring(1, 10), ring(2, 15), ring(3, 40)];
        let forward = aggregate(items.iter().map(|i| (TriggerEvent::Wear, i)), [], []);
        let backward = aggregate(items.iter().rev().map(|i| (TriggerEvent::Wear, i)), [], []);
        assert_eq!(forward, backward);
    }

    #[test]
    fn raw_stats_and_gated_effects_both_count() {
        let item = Item::new(ItemId(9), "Belt")
            .with_stat(StatId::MAX_NCU, 100)
            .with_effect(TriggerEvent::Wear, StatId::MAX_NCU, 50);
        let bonuses = aggregate([(TriggerEvent::Wear, &item)], [], []);
        assert_eq!(bonuses.equipment.get(StatId::MAX_NCU), 150);
    }

    #[test]
    fn wield_effects_ignored_when_worn() {
        let gun = Item::new(ItemId(10), "Pistol").with_effect(TriggerEvent::Wield, StatId(112), 20);
        let worn = aggregate([(TriggerEvent::Wear, &gun)], [], []);
        let wielded = aggregate([(TriggerEvent::Wield, &gun)], [], []);
        assert_eq!(worn.equipment.get(StatId(112)), 0);
        assert_eq!(wielded.equipment.get(StatId(112)), 20);
    }

    #[test]
    fn sources_are_kept_apart() {
        let perk = Item::new(ItemId(20), "Perk").with_effect(TriggerEvent::Wear, StatId::AGILITY, 4);
        let buff = Item::new(ItemId(21), "Buff").with_effect(TriggerEvent::Cast, StatId::AGILITY, 7);
        let bonuses = aggregate([], [&perk], [&buff]);
        assert_eq!(bonuses.equipment.get(StatId::AGILITY), 0);
        assert_eq!(bonuses.perk.get(StatId::AGILITY), 4);
        assert_eq!(bonuses.buff.get(StatId::AGILITY), 7);
    }

    #[test]
    fn extreme_sums_clamp_on_read() {
        let mut map = BonusMap::new();
        map.add(StatId::STAMINA, i32::MAX);
        map.add(StatId::STAMINA, i32::MAX);
        assert_eq!(map.get(StatId::STAMINA), i32::MAX);
    }
}
