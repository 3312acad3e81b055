//! Common error infrastructure for planner-core.
//!
//! Domain-specific errors (`AdmissionError`, `CriteriaError`, `RosterError`)
//! live next to the operations that produce them. Expected gameplay outcomes
//! (a buff that does not fit, an item the character cannot use) are returned
//! as values; only corrupt catalogue data is classified as internal.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Normal feedback; the user can change something and retry.
    ///
    /// Examples: not enough NCU, strain already running at higher priority
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: unknown profile id, item without a strain cast as a buff
    Validation,

    /// External data violated its contract.
    ///
    /// Examples: requirement list that does not reduce to one result
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error points at bad data or a bug rather than a
    /// user decision.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all planner-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act, not by impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, for UI mapping and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::admission::AdmissionError;
    use crate::character::{ProfileId, RosterError};
    use crate::criteria::CriteriaError;
    use crate::item::ItemId;

    #[test]
    fn severity_helpers() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn every_severity_has_a_producer() {
        let produced = [
            AdmissionError::InsufficientCapacity {
                requested: 1,
                used: 0,
                capacity: 0,
            }
            .severity(),
            AdmissionError::NotCastable(ItemId(1)).severity(),
            RosterError::UnknownProfile(ProfileId(1)).severity(),
            CriteriaError::UnknownOperator(9).severity(),
        ];
        for severity in [
            ErrorSeverity::Recoverable,
            ErrorSeverity::Validation,
            ErrorSeverity::Internal,
        ] {
            assert!(produced.contains(&severity), "{}", severity.as_str());
        }
    }
}
