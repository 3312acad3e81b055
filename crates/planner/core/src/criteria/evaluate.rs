//! Stack evaluation of postfix requirement lists.
//!
//! Each stack entry carries its boolean result and the requirements that
//! would have to change to make it true:
//!
//! - leaf: empty when satisfied, otherwise one [`Unmet::Stat`]
//! - AND: both operands' unmet lists, concatenated
//! - OR: empty when either side holds, otherwise exactly one
//!   [`Unmet::Choice`], however many alternatives were offered

use crate::stats::StatId;

use super::error::{CriteriaError, Malformed};
use super::{CompareOp, Criterion, FactLookup};

/// A leaf requirement that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortfall {
    pub stat: StatId,
    pub op: CompareOp,
    pub required: i32,
    pub actual: i32,
}

/// One requirement the character does not meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unmet {
    Stat(Shortfall),
    /// None of several alternatives holds; counts as a single requirement.
    Choice { alternatives: u32 },
}

/// Result of checking a requirement list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eligibility {
    pub satisfied: bool,
    pub unmet: Vec<Unmet>,
}

impl Eligibility {
    pub fn satisfied() -> Self {
        Self {
            satisfied: true,
            unmet: Vec::new(),
        }
    }
}

struct Partial {
    satisfied: bool,
    unmet: Vec<Unmet>,
    /// Alternatives folded into this entry when it is itself a failed OR.
    choice: Option<u32>,
}

impl Partial {
    fn leaf<F: FactLookup + ?Sized>(facts: &F, stat: StatId, op: CompareOp, required: i32) -> Self {
        let actual = facts.fact(stat).unwrap_or(0);
        let satisfied = op.compare(actual, required);
        let unmet = if satisfied {
            Vec::new()
        } else {
            vec![Unmet::Stat(Shortfall {
                stat,
                op,
                required,
                actual,
            })]
        };
        Self {
            satisfied,
            unmet,
            choice: None,
        }
    }

    fn and(mut a: Self, b: Self) -> Self {
        a.unmet.extend(b.unmet);
        Self {
            satisfied: a.satisfied && b.satisfied,
            unmet: a.unmet,
            choice: None,
        }
    }

    fn or(a: Self, b: Self) -> Self {
        if a.satisfied || b.satisfied {
            return Self {
                satisfied: true,
                unmet: Vec::new(),
                choice: None,
            };
        }
        let alternatives = a.width().saturating_add(b.width());
        Self {
            satisfied: false,
            unmet: vec![Unmet::Choice { alternatives }],
            choice: Some(alternatives),
        }
    }

    fn width(&self) -> u32 {
        self.choice.unwrap_or(1)
    }
}

/// Evaluates `expression` against `facts`.
///
/// An empty list is satisfied. Missing facts read as 0 and `facts` is never
/// modified. A list that does not reduce to exactly one result is corrupt
/// catalogue data and is reported as [`CriteriaError::MalformedExpression`].
pub fn evaluate<F: FactLookup + ?Sized>(
    expression: &[Criterion],
    facts: &F,
) -> Result<Eligibility, CriteriaError> {
    if expression.is_empty() {
        return Ok(Eligibility::satisfied());
    }

    let mut stack: Vec<Partial> = Vec::with_capacity(expression.len());
    for (position, node) in expression.iter().enumerate() {
        match *node {
            Criterion::Stat { stat, op, value } => stack.push(Partial::leaf(facts, stat, op, value)),
            Criterion::And | Criterion::Or => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(malformed(Malformed::OperatorUnderflow { position }));
                };
                stack.push(if *node == Criterion::And {
                    Partial::and(a, b)
                } else {
                    Partial::or(a, b)
                });
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(Eligibility {
            satisfied: result.satisfied,
            unmet: result.unmet,
        }),
        (_, _) => Err(malformed(Malformed::Unreduced {
            remaining: stack.len() + 1,
        })),
    }
}

fn malformed(reason: Malformed) -> CriteriaError {
    tracing::error!(%reason, "catalogue requirement list is malformed");
    CriteriaError::MalformedExpression(reason)
}
