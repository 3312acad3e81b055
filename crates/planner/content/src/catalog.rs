//! Id-indexed item and perk lookup.

use std::collections::BTreeMap;

use planner_core::{Item, ItemId};

/// Items and perks keyed by id. Later inserts with the same id win.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalog {
    items: BTreeMap<ItemId, Item>,
    perks: BTreeMap<ItemId, Item>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(items: Vec<Item>, perks: Vec<Item>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert_item(item);
        }
        for perk in perks {
            catalog.insert_perk(perk);
        }
        catalog
    }

    pub fn insert_item(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id, item)
    }

    pub fn insert_perk(&mut self, perk: Item) -> Option<Item> {
        self.perks.insert(perk.id, perk)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn perk(&self, id: ItemId) -> Option<&Item> {
        self.perks.get(&id)
    }

    /// Items that can run as buffs (they carry a nano strain).
    pub fn nanos(&self) -> impl Iterator<Item = &Item> {
        self.items
            .values()
            .filter(|item| item.buff_descriptor().is_some())
    }

    /// Case-insensitive substring search over item names.
    pub fn search<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = needle.to_lowercase();
        self.items
            .values()
            .filter(move |item| item.name.to_lowercase().contains(&needle))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn perk_count(&self) -> usize {
        self.perks.len()
    }
}
