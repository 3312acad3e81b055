//! Equipment slots.
//!
//! Weapon slots fire the `Wield` event; armour and implant slots fire `Wear`.

use std::collections::BTreeMap;

use crate::item::{Item, TriggerEvent};

/// Slot family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    Weapon,
    Armor,
    Implant,
}

impl SlotKind {
    /// Event an item in this slot fires.
    pub const fn event(self) -> TriggerEvent {
        match self {
            SlotKind::Weapon => TriggerEvent::Wield,
            SlotKind::Armor | SlotKind::Implant => TriggerEvent::Wear,
        }
    }
}

/// Every equipment slot of a character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    // ========================================================================
    // Weapons
    // ========================================================================
    Hud1,
    Hud2,
    Hud3,
    Util1,
    Util2,
    Util3,
    RightHand,
    LeftHand,
    Belt,
    Deck1,
    Deck2,
    Deck3,
    Deck4,
    Deck5,
    Deck6,

    // ========================================================================
    // Armour
    // ========================================================================
    Neck,
    Head,
    Back,
    RightShoulder,
    Chest,
    LeftShoulder,
    RightArm,
    Hands,
    LeftArm,
    RightWrist,
    Legs,
    LeftWrist,
    RightFinger,
    Feet,
    LeftFinger,

    // ========================================================================
    // Implants
    // ========================================================================
    ImplantEyes,
    ImplantHead,
    ImplantEars,
    ImplantRightArm,
    ImplantChest,
    ImplantLeftArm,
    ImplantRightWrist,
    ImplantWaist,
    ImplantLeftWrist,
    ImplantRightHand,
    ImplantLegs,
    ImplantLeftHand,
    ImplantFeet,
}

impl EquipSlot {
    pub const fn kind(self) -> SlotKind {
        use EquipSlot::*;
        match self {
            Hud1 | Hud2 | Hud3 | Util1 | Util2 | Util3 | RightHand | LeftHand | Belt | Deck1
            | Deck2 | Deck3 | Deck4 | Deck5 | Deck6 => SlotKind::Weapon,
            Neck | Head | Back | RightShoulder | Chest | LeftShoulder | RightArm | Hands
            | LeftArm | RightWrist | Legs | LeftWrist | RightFinger | Feet | LeftFinger => {
                SlotKind::Armor
            }
            ImplantEyes | ImplantHead | ImplantEars | ImplantRightArm | ImplantChest
            | ImplantLeftArm | ImplantRightWrist | ImplantWaist | ImplantLeftWrist
            | ImplantRightHand | ImplantLegs | ImplantLeftHand | ImplantFeet => SlotKind::Implant,
        }
    }
}

/// Items currently equipped, one per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: BTreeMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Places `item` in `slot`, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slots.insert(slot, item)
    }

    /// Empties `slot`; an empty slot stays empty.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// Equipped items paired with the event their slot fires.
    pub fn worn(&self) -> impl Iterator<Item = (TriggerEvent, &Item)> {
        self.slots
            .iter()
            .map(|(slot, item)| (slot.kind().event(), item))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    #[test]
    fn equip_returns_displaced_item() {
        let mut equipment = Equipment::new();
        assert!(equipment.equip(EquipSlot::Head, Item::new(ItemId(1), "Cap")).is_none());
        let displaced = equipment.equip(EquipSlot::Head, Item::new(ItemId(2), "Helmet"));
        assert_eq!(displaced.map(|i| i.id), Some(ItemId(1)));
        assert_eq!(equipment.len(), 1);
    }

    #[test]
    fn unequip_empty_slot_is_noop() {
        let mut equipment = Equipment::new();
        assert!(equipment.unequip(EquipSlot::Feet).is_none());
        assert!(equipment.is_empty());
    }

    #[test]
    fn slot_kind_selects_event() {
        assert_eq!(EquipSlot::RightHand.kind().event(), TriggerEvent::Wield);
        assert_eq!(EquipSlot::Belt.kind(), SlotKind::Weapon);
        assert_eq!(EquipSlot::Chest.kind().event(), TriggerEvent::Wear);
        assert_eq!(EquipSlot::ImplantEyes.kind(), SlotKind::Implant);
    }

    #[test]
    fn slot_names_parse() {
        assert_eq!("right_hand".parse::<EquipSlot>().ok(), Some(EquipSlot::RightHand));
        assert_eq!(EquipSlot::ImplantWaist.as_ref(), "implant_waist");
    }
}
