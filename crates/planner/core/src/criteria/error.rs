use crate::error::{ErrorSeverity, PlannerError};

/// Why a requirement list failed to reduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Malformed {
    #[error("operator at position {position} has fewer than two operands")]
    OperatorUnderflow { position: usize },

    #[error("{remaining} results left on the stack instead of one")]
    Unreduced { remaining: usize },
}

/// Requirement data that violates the catalogue contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CriteriaError {
    #[error("malformed requirement list: {0}")]
    MalformedExpression(Malformed),

    #[error("unknown requirement operator code {0}")]
    UnknownOperator(u32),
}

impl PlannerError for CriteriaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedExpression(_) => "CRITERIA_MALFORMED",
            Self::UnknownOperator(_) => "CRITERIA_UNKNOWN_OPERATOR",
        }
    }
}
