//! Active buff set of one profile.
//!
//! Buffs are kept in admission order (oldest first). The set enforces at most
//! one buff per strain; capacity is enforced by the admission controller,
//! which knows the derived NCU total.

use crate::item::{BuffDescriptor, Item, ItemId};

/// A running buff.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuff {
    pub item: Item,
    pub cost: i32,
    pub strain: i32,
    pub priority: i32,
}

impl ActiveBuff {
    pub fn new(item: Item, descriptor: BuffDescriptor) -> Self {
        Self {
            item,
            cost: descriptor.cost,
            strain: descriptor.strain,
            priority: descriptor.priority,
        }
    }

    /// Buffs are identified by the nano they run.
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuffs {
    buffs: Vec<ActiveBuff>,
}

impl ActiveBuffs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total NCU consumed.
    pub fn usage(&self) -> i64 {
        self.buffs.iter().map(|b| i64::from(b.cost)).sum()
    }

    pub fn get(&self, id: ItemId) -> Option<&ActiveBuff> {
        self.buffs.iter().find(|b| b.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn by_strain(&self, strain: i32) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter().filter(move |b| b.strain == strain)
    }

    /// Appends `buff`, displacing any buff of the same strain. Returns the
    /// displaced buff.
    pub(crate) fn insert(&mut self, buff: ActiveBuff) -> Option<ActiveBuff> {
        let displaced = self
            .buffs
            .iter()
            .position(|b| b.strain == buff.strain)
            .map(|index| self.buffs.remove(index));
        self.buffs.push(buff);
        displaced
    }

    /// Removes the buff running `id`. Absent ids are a no-op.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<ActiveBuff> {
        let index = self.buffs.iter().position(|b| b.id() == id)?;
        Some(self.buffs.remove(index))
    }

    /// Removes and returns the most recently admitted buff.
    pub(crate) fn pop_newest(&mut self) -> Option<ActiveBuff> {
        self.buffs.pop()
    }

    pub(crate) fn clear(&mut self) -> Vec<ActiveBuff> {
        std::mem::take(&mut self.buffs)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.buffs.iter().map(|b| &b.item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}
