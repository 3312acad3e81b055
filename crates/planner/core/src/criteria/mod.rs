//! Requirement expressions.
//!
//! Items carry their requirements as a flat postfix list: stat leaves push a
//! result, `And`/`Or` nodes combine the two most recent results. The list is
//! folded with an explicit stack (see [`evaluate`]) instead of being parsed
//! into a tree.
//!
//! ```text
//! [prof = Soldier, prof = Enforcer, OR, stamina >= 300, AND]
//!   ≡ (prof = Soldier ∨ prof = Enforcer) ∧ stamina >= 300
//! ```

pub mod error;
pub mod evaluate;

use std::collections::{BTreeMap, HashMap};

use crate::stats::StatId;

pub use error::{CriteriaError, Malformed};
pub use evaluate::{Eligibility, Shortfall, Unmet, evaluate};

/// Leaf comparison operator.
///
/// Equality-style operators test identity facts (profession, breed, flags);
/// ordering operators test thresholds. Evaluation dispatches on the operator,
/// never assumes a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareOp {
    #[strum(to_string = "=")]
    Equal,
    #[strum(to_string = "!=")]
    NotEqual,
    #[strum(to_string = "<")]
    LessThan,
    #[strum(to_string = ">")]
    GreaterThan,
    #[strum(to_string = ">=")]
    AtLeast,
    #[strum(to_string = "<=")]
    AtMost,
    /// Any of the threshold's bits set.
    #[strum(to_string = "&")]
    BitAnd,
    /// None of the threshold's bits set.
    #[strum(to_string = "!&")]
    NotBitAnd,
}

impl CompareOp {
    pub const fn compare(self, actual: i32, threshold: i32) -> bool {
        match self {
            CompareOp::Equal => actual == threshold,
            CompareOp::NotEqual => actual != threshold,
            CompareOp::LessThan => actual < threshold,
            CompareOp::GreaterThan => actual > threshold,
            CompareOp::AtLeast => actual >= threshold,
            CompareOp::AtMost => actual <= threshold,
            CompareOp::BitAnd => actual & threshold != 0,
            CompareOp::NotBitAnd => actual & threshold == 0,
        }
    }
}

/// One node of a postfix requirement list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// Compares a fact against a threshold and pushes the result.
    Stat {
        stat: StatId,
        op: CompareOp,
        value: i32,
    },
    /// Pops two results, pushes their conjunction.
    And,
    /// Pops two results, pushes their disjunction.
    Or,
}

impl Criterion {
    pub const fn stat(stat: StatId, op: CompareOp, value: i32) -> Self {
        Criterion::Stat { stat, op, value }
    }

    pub const fn equals(stat: StatId, value: i32) -> Self {
        Self::stat(stat, CompareOp::Equal, value)
    }

    pub const fn at_least(stat: StatId, value: i32) -> Self {
        Self::stat(stat, CompareOp::AtLeast, value)
    }

    /// Decodes a node from the game's raw `(stat, operator, value)` triple.
    ///
    /// Operator codes: 0 equal, 1 less-than, 2 greater-than, 3 OR, 4 AND,
    /// 22 bit-and, 24 not-equal, 107 not-bit-and. Stat and value are ignored
    /// for OR/AND.
    pub fn from_raw(stat: u16, code: u32, value: i32) -> Result<Self, CriteriaError> {
        let op = match code {
            0 => CompareOp::Equal,
            1 => CompareOp::LessThan,
            2 => CompareOp::GreaterThan,
            3 => return Ok(Criterion::Or),
            4 => return Ok(Criterion::And),
            22 => CompareOp::BitAnd,
            24 => CompareOp::NotEqual,
            107 => CompareOp::NotBitAnd,
            other => return Err(CriteriaError::UnknownOperator(other)),
        };
        Ok(Criterion::stat(StatId(stat), op, value))
    }
}

/// Source of facts a requirement list is checked against.
///
/// Missing facts read as 0 during evaluation.
pub trait FactLookup {
    fn fact(&self, stat: StatId) -> Option<i32>;
}

impl FactLookup for BTreeMap<StatId, i32> {
    fn fact(&self, stat: StatId) -> Option<i32> {
        self.get(&stat).copied()
    }
}

impl FactLookup for HashMap<StatId, i32> {
    fn fact(&self, stat: StatId) -> Option<i32> {
        self.get(&stat).copied()
    }
}

impl<T: FactLookup + ?Sized> FactLookup for &T {
    fn fact(&self, stat: StatId) -> Option<i32> {
        (**self).fact(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_dispatch_on_kind() {
        assert!(CompareOp::Equal.compare(11, 11));
        assert!(!CompareOp::Equal.compare(12, 11));
        assert!(CompareOp::NotEqual.compare(12, 11));
        assert!(CompareOp::GreaterThan.compare(300, 299));
        assert!(!CompareOp::GreaterThan.compare(299, 299));
        assert!(CompareOp::AtLeast.compare(300, 300));
        assert!(CompareOp::AtMost.compare(5, 5));
        assert!(CompareOp::LessThan.compare(4, 5));
        assert!(CompareOp::BitAnd.compare(0b0110, 0b0010));
        assert!(!CompareOp::BitAnd.compare(0b0100, 0b0010));
        assert!(CompareOp::NotBitAnd.compare(0b0100, 0b0010));
    }

    #[test]
    fn raw_codes_decode() {
        assert_eq!(Criterion::from_raw(0, 3, 0), Ok(Criterion::Or));
        assert_eq!(Criterion::from_raw(0, 4, 0), Ok(Criterion::And));
        assert_eq!(
            Criterion::from_raw(18, 2, 299),
            Ok(Criterion::stat(StatId::STAMINA, CompareOp::GreaterThan, 299))
        );
        assert_eq!(
            Criterion::from_raw(60, 24, 11),
            Ok(Criterion::stat(StatId::PROFESSION, CompareOp::NotEqual, 11))
        );
        assert_eq!(
            Criterion::from_raw(0, 999, 0),
            Err(CriteriaError::UnknownOperator(999))
        );
    }

    #[test]
    fn op_symbols() {
        assert_eq!(CompareOp::AtLeast.to_string(), ">=");
        assert_eq!(CompareOp::Equal.as_ref(), "=");
    }
}
