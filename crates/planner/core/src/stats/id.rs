//! Stat identifiers.
//!
//! Every value a profile exposes (abilities, skills, capacity pools, identity
//! facts) and every value an item carries is addressed by a numeric [`StatId`].
//! The numbering follows the game's own catalogue so that item data and
//! requirement lists can be consumed without translation.

/// Numeric stat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatId(pub u16);

impl StatId {
    // ===== identity facts =====
    pub const BREED: Self = Self(4);
    /// Character level on profiles, quality level on items.
    pub const LEVEL: Self = Self(54);
    pub const PROFESSION: Self = Self(60);

    // ===== abilities =====
    pub const STRENGTH: Self = Self(16);
    pub const AGILITY: Self = Self(17);
    pub const STAMINA: Self = Self(18);
    pub const INTELLIGENCE: Self = Self(19);
    pub const SENSE: Self = Self(20);
    pub const PSYCHIC: Self = Self(21);

    // ===== capacity pool =====
    /// Capacity consumed by active buffs.
    pub const MAX_NCU: Self = Self(181);

    // ===== buff descriptors (read off nano items) =====
    pub const NANO_STRAIN: Self = Self(75);
    pub const NCU_COST: Self = Self(180);
    pub const NANO_COST: Self = Self(407);
    pub const STACKING_ORDER: Self = Self(551);

    /// Raw numeric value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns true for stats that describe an item itself rather than a bonus
    /// it grants. These are never summed into bonus maps.
    pub const fn is_descriptor(self) -> bool {
        matches!(
            self,
            Self::LEVEL | Self::NANO_STRAIN | Self::NCU_COST | Self::NANO_COST | Self::STACKING_ORDER
        )
    }
}

impl From<u16> for StatId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for StatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match super::catalog::name_of(*self) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "stat#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_not_bonuses() {
        assert!(StatId::NCU_COST.is_descriptor());
        assert!(StatId::STACKING_ORDER.is_descriptor());
        assert!(StatId::LEVEL.is_descriptor());
        assert!(!StatId::MAX_NCU.is_descriptor());
        assert!(!StatId::STAMINA.is_descriptor());
    }

    #[test]
    fn display_uses_catalogue_name() {
        assert_eq!(StatId::STAMINA.to_string(), "Stamina");
        assert_eq!(StatId(9999).to_string(), "stat#9999");
    }
}
