//! Resource admission for buffs.
//!
//! Decides whether a buff may join a profile's active set given the derived
//! NCU capacity and the strain rules:
//!
//! 1. current usage plus the new cost above capacity → [`AdmissionError::InsufficientCapacity`]
//! 2. same strain held at strictly higher priority → [`AdmissionError::StrainConflict`]
//! 3. same strain held at lower or equal priority → replace it
//! 4. otherwise → admit
//!
//! The capacity test never credits a buff the cast would replace; the
//! replaced cost only comes back in the plan's projected usage. The
//! controller is a pure view; committing a plan and recomputing the profile
//! is the engine's job.

pub mod error;

pub use error::AdmissionError;

use crate::character::{ActiveBuff, ActiveBuffs, CharacterProfile};
use crate::item::{BuffDescriptor, Item, ItemId};

/// Accepted cast, ready to commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmissionPlan {
    pub descriptor: BuffDescriptor,
    /// Active buff of the same strain that the cast displaces.
    pub replaces: Option<ItemId>,
    /// NCU usage after the cast.
    pub projected_usage: i64,
}

/// Read-only admission view over one profile's active buffs.
#[derive(Clone, Copy, Debug)]
pub struct AdmissionController<'a> {
    buffs: &'a ActiveBuffs,
    capacity: i32,
}

impl<'a> AdmissionController<'a> {
    pub fn new(buffs: &'a ActiveBuffs, capacity: i32) -> Self {
        Self { buffs, capacity }
    }

    /// Controller over `profile`, using its derived NCU total as capacity.
    pub fn for_profile(profile: &'a CharacterProfile) -> Self {
        Self::new(profile.buffs(), profile.ncu_capacity())
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn usage(&self) -> i64 {
        self.buffs.usage()
    }

    /// Active buffs sharing the strain of `item`.
    pub fn conflicts_with(&self, item: &Item) -> Vec<&'a ActiveBuff> {
        match item.buff_descriptor() {
            Some(descriptor) => self.buffs.by_strain(descriptor.strain).collect(),
            None => Vec::new(),
        }
    }

    pub fn can_admit(&self, item: &Item) -> bool {
        self.check(item).is_ok()
    }

    /// Plans a cast of `item` without changing anything.
    pub fn check(&self, item: &Item) -> Result<AdmissionPlan, AdmissionError> {
        let descriptor = item
            .buff_descriptor()
            .ok_or(AdmissionError::NotCastable(item.id))?;

        let rival = self
            .buffs
            .by_strain(descriptor.strain)
            .max_by_key(|buff| buff.priority);
        let replaceable = rival.filter(|buff| buff.priority <= descriptor.priority);

        let used = self.usage();
        if used + i64::from(descriptor.cost) > i64::from(self.capacity) {
            return Err(AdmissionError::InsufficientCapacity {
                requested: descriptor.cost,
                used,
                capacity: self.capacity,
            });
        }

        if let Some(active) = rival.filter(|buff| buff.priority > descriptor.priority) {
            return Err(AdmissionError::StrainConflict {
                strain: descriptor.strain,
                active: active.id(),
                active_priority: active.priority,
                requested_priority: descriptor.priority,
            });
        }

        let credit = replaceable.map_or(0, |buff| i64::from(buff.cost));
        Ok(AdmissionPlan {
            descriptor,
            replaces: replaceable.map(ActiveBuff::id),
            projected_usage: used - credit + i64::from(descriptor.cost),
        })
    }
}
