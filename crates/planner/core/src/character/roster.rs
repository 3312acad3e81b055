//! Set of profiles with exactly one active at a time.
//!
//! Switching the active profile only swaps the active id. Each profile keeps
//! its own skills, equipment and buffs, so nothing derived on one profile can
//! leak into another.

use std::collections::BTreeMap;

use crate::error::{ErrorSeverity, PlannerError};

use super::profile::{CharacterProfile, ProfileId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("no profile with id {0}")]
    UnknownProfile(ProfileId),

    #[error("a profile with id {0} already exists")]
    DuplicateProfile(ProfileId),
}

impl PlannerError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownProfile(_) => "ROSTER_UNKNOWN_PROFILE",
            Self::DuplicateProfile(_) => "ROSTER_DUPLICATE_PROFILE",
        }
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    profiles: BTreeMap<ProfileId, CharacterProfile>,
    active: Option<ProfileId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile. The first profile added becomes active.
    pub fn insert(&mut self, profile: CharacterProfile) -> Result<(), RosterError> {
        let id = profile.id();
        if self.profiles.contains_key(&id) {
            return Err(RosterError::DuplicateProfile(id));
        }
        self.profiles.insert(id, profile);
        if self.active.is_none() {
            self.active = Some(id);
        }
        Ok(())
    }

    /// Deletes a profile together with its buffs and equipment. If it was
    /// active, the lowest remaining id becomes active.
    pub fn remove(&mut self, id: ProfileId) -> Result<CharacterProfile, RosterError> {
        let profile = self
            .profiles
            .remove(&id)
            .ok_or(RosterError::UnknownProfile(id))?;
        if self.active == Some(id) {
            self.active = self.profiles.keys().next().copied();
        }
        Ok(profile)
    }

    pub fn switch_to(&mut self, id: ProfileId) -> Result<(), RosterError> {
        if !self.profiles.contains_key(&id) {
            return Err(RosterError::UnknownProfile(id));
        }
        tracing::debug!(from = ?self.active, to = %id, "switching active profile");
        self.active = Some(id);
        Ok(())
    }

    pub fn active_id(&self) -> Option<ProfileId> {
        self.active
    }

    pub fn active(&self) -> Option<&CharacterProfile> {
        self.active.and_then(|id| self.profiles.get(&id))
    }

    pub fn active_mut(&mut self) -> Option<&mut CharacterProfile> {
        let id = self.active?;
        self.profiles.get_mut(&id)
    }

    pub fn get(&self, id: ProfileId) -> Option<&CharacterProfile> {
        self.profiles.get(&id)
    }

    pub fn get_mut(&mut self, id: ProfileId) -> Option<&mut CharacterProfile> {
        self.profiles.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::character::{Breed, Profession};

    fn profile(id: u32) -> CharacterProfile {
        CharacterProfile::seeded(
            &RulesConfig::default(),
            ProfileId(id),
            format!("p{id}"),
            Breed::Solitus,
            Profession::Soldier,
            100,
        )
    }

    #[test]
    fn first_insert_becomes_active() {
        let mut roster = Roster::new();
        roster.insert(profile(2)).unwrap();
        roster.insert(profile(1)).unwrap();
        assert_eq!(roster.active_id(), Some(ProfileId(2)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut roster = Roster::new();
        roster.insert(profile(1)).unwrap();
        assert_eq!(
            roster.insert(profile(1)),
            Err(RosterError::DuplicateProfile(ProfileId(1)))
        );
    }

    #[test]
    fn switching_to_unknown_keeps_active() {
        let mut roster = Roster::new();
        roster.insert(profile(1)).unwrap();
        assert!(roster.switch_to(ProfileId(9)).is_err());
        assert_eq!(roster.active_id(), Some(ProfileId(1)));
    }

    #[test]
    fn removing_active_falls_back() {
        let mut roster = Roster::new();
        roster.insert(profile(1)).unwrap();
        roster.insert(profile(3)).unwrap();
        roster.remove(ProfileId(1)).unwrap();
        assert_eq!(roster.active_id(), Some(ProfileId(3)));
        roster.remove(ProfileId(3)).unwrap();
        assert_eq!(roster.active_id(), None);
        assert!(roster.active().is_none());
    }
}
