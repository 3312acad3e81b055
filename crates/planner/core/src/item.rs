//! Item descriptors consumed from the external catalogue.
//!
//! Equipment, nano buffs and perks share one shape: unconditional `stats`,
//! event-gated `spell_data`, and a flat `requirements` list. The engine never
//! mutates an item; profiles hold their own clones.

use crate::criteria::Criterion;
use crate::stats::StatId;

/// Catalogue identifier of an item, nano or perk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A `(stat, value)` pair from an item's raw stat list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatValue {
    pub stat: StatId,
    pub value: i32,
}

impl StatValue {
    pub const fn new(stat: StatId, value: i32) -> Self {
        Self { stat, value }
    }
}

/// Event that fires an item's spell data.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TriggerEvent {
    /// Activated from the inventory; never contributes to persistent bonuses.
    Use,
    /// Held in a weapon slot.
    Wield,
    /// Worn in an armour or implant slot, or trained as a perk.
    Wear,
    /// Running as a nano buff.
    Cast,
}

/// A single spell function attached to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    /// Adds `amount` to `stat` while the event holds.
    Modify { stat: StatId, amount: i32 },
    /// Any other spell function; contributes nothing to bonuses.
    Other { function: u32 },
}

/// Spell effects fired by one event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellData {
    pub event: TriggerEvent,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<SpellEffect>,
}

impl SpellData {
    pub fn new(event: TriggerEvent, effects: Vec<SpellEffect>) -> Self {
        Self { event, effects }
    }
}

/// Catalogue item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_data: Vec<SpellData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Vec<Criterion>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stats: Vec::new(),
            spell_data: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Adds a raw stat (builder pattern).
    pub fn with_stat(mut self, stat: StatId, value: i32) -> Self {
        self.stats.push(StatValue::new(stat, value));
        self
    }

    /// Adds a `Modify` effect under `event`, merging into an existing event block.
    pub fn with_effect(mut self, event: TriggerEvent, stat: StatId, amount: i32) -> Self {
        let effect = SpellEffect::Modify { stat, amount };
        match self.spell_data.iter_mut().find(|data| data.event == event) {
            Some(data) => data.effects.push(effect),
            None => self.spell_data.push(SpellData::new(event, vec![effect])),
        }
        self
    }

    /// Replaces the requirement list (builder pattern).
    pub fn with_requirements(mut self, requirements: Vec<Criterion>) -> Self {
        self.requirements = requirements;
        self
    }

    /// First value of `stat` in the raw stat list.
    pub fn stat(&self, stat: StatId) -> Option<i32> {
        self.stats.iter().find(|s| s.stat == stat).map(|s| s.value)
    }

    /// Buff properties read off the item, or `None` when the item has no strain
    /// and therefore cannot run as a buff.
    pub fn buff_descriptor(&self) -> Option<BuffDescriptor> {
        let strain = self.stat(StatId::NANO_STRAIN)?;
        Some(BuffDescriptor {
            item: self.id,
            cost: self.stat(StatId::NCU_COST).unwrap_or(0).max(0),
            strain,
            priority: self.stat(StatId::STACKING_ORDER).unwrap_or(0),
        })
    }

    /// Bonuses this item grants under `event`: every non-descriptor raw stat,
    /// plus every `Modify` effect of the matching spell-data blocks.
    pub fn bonuses_for(&self, event: TriggerEvent) -> impl Iterator<Item = (StatId, i32)> + '_ {
        let raw = self
            .stats
            .iter()
            .filter(|s| !s.stat.is_descriptor())
            .map(|s| (s.stat, s.value));
        let gated = self
            .spell_data
            .iter()
            .filter(move |data| data.event == event)
            .flat_map(|data| data.effects.iter())
            .filter_map(|effect| match effect {
                SpellEffect::Modify { stat, amount } => Some((*stat, *amount)),
                SpellEffect::Other { .. } => None,
            });
        raw.chain(gated)
    }
}

/// NCU cost, strain and stacking order of a castable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffDescriptor {
    pub item: ItemId,
    pub cost: i32,
    pub strain: i32,
    pub priority: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_reads_buff_stats() {
        let nano = Item::new(ItemId(1), "Essence of Behemoth")
            .with_stat(StatId::NANO_STRAIN, 1000)
            .with_stat(StatId::STACKING_ORDER, 100)
            .with_stat(StatId::NCU_COST, 25);
        let desc = nano.buff_descriptor().expect("castable");
        assert_eq!(desc.strain, 1000);
        assert_eq!(desc.priority, 100);
        assert_eq!(desc.cost, 25);
    }

    #[test]
    fn missing_cost_and_priority_read_as_zero() {
        let nano = Item::new(ItemId(2), "Bare").with_stat(StatId::NANO_STRAIN, 7);
        let desc = nano.buff_descriptor().expect("castable");
        assert_eq!((desc.cost, desc.priority), (0, 0));
    }

    #[test]
    fn item_without_strain_is_not_castable() {
        assert!(Item::new(ItemId(3), "Rock").buff_descriptor().is_none());
    }

    #[test]
    fn bonuses_skip_descriptors_and_other_events() {
        let item = Item::new(ItemId(4), "Ring")
            .with_stat(StatId::LEVEL, 200)
            .with_stat(StatId::STAMINA, 5)
            .with_effect(TriggerEvent::Wear, StatId::STAMINA, 10)
            .with_effect(TriggerEvent::Wield, StatId::AGILITY, 99);

        let worn: Vec<_> = item.bonuses_for(TriggerEvent::Wear).collect();
        assert_eq!(worn, vec![(StatId::STAMINA, 5), (StatId::STAMINA, 10)]);
    }

    #[test]
    fn other_spell_functions_contribute_nothing() {
        let mut item = Item::new(ItemId(5), "Odd");
        item.spell_data.push(SpellData::new(
            TriggerEvent::Wear,
            vec![SpellEffect::Other { function: 53012 }],
        ));
        assert_eq!(item.bonuses_for(TriggerEvent::Wear).count(), 0);
    }
}
