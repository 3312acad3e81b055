use crate::error::{ErrorSeverity, PlannerError};
use crate::item::ItemId;

/// Why a buff cast was rejected. The profile is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("not enough NCU: {used} used + {requested} requested exceeds capacity {capacity}")]
    InsufficientCapacity {
        requested: i32,
        used: i64,
        capacity: i32,
    },

    #[error(
        "strain {strain} is held by {active} at priority {active_priority}, above requested {requested_priority}"
    )]
    StrainConflict {
        strain: i32,
        active: ItemId,
        active_priority: i32,
        requested_priority: i32,
    },

    #[error("item {0} has no nano strain and cannot run as a buff")]
    NotCastable(ItemId),
}

impl PlannerError for AdmissionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientCapacity { .. } | Self::StrainConflict { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::NotCastable(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientCapacity { .. } => "ADMISSION_INSUFFICIENT_CAPACITY",
            Self::StrainConflict { .. } => "ADMISSION_STRAIN_CONFLICT",
            Self::NotCastable(_) => "ADMISSION_NOT_CASTABLE",
        }
    }
}
