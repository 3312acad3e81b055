//! Character profiles and the state each one owns.

pub mod buffs;
pub mod equipment;
pub mod identity;
pub mod profile;
pub mod roster;

pub use buffs::{ActiveBuff, ActiveBuffs};
pub use equipment::{EquipSlot, Equipment, SlotKind};
pub use identity::{Breed, Profession};
pub use profile::{CharacterProfile, IpLedger, ProfileId};
pub use roster::{Roster, RosterError};
