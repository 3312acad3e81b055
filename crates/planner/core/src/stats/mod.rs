//! Stat system.
//!
//! # Pipeline
//!
//! ```text
//! [ Bonus aggregation ]   equipment / perks / buffs → three bonus maps
//!      ↓
//! [ Abilities ]           base + IP + bonuses, capped by level and breed
//!      ↓
//! [ Trickle-down ]        floor(Σ weight × ability / 4)
//!      ↓
//! [ Caps ]                min(level limit, ability limit) + bonuses
//!      ↓
//! [ Totals ]              clamp(raw, 0, cap); bonus-only stats uncapped
//!      ↓
//! [ IP accounting ]       quadratic point cost per profession/breed factor
//! ```
//!
//! The order is fixed; every step reads only values produced by the steps
//! above it, and every recompute starts from freshly aggregated bonuses.

pub mod ability;
pub mod bonus;
pub mod catalog;
pub mod cost;
pub mod derive;
pub mod id;
pub mod skill;

pub use ability::Ability;
pub use bonus::{BonusMap, ProfileBonuses, aggregate};
pub use catalog::{CATALOG, SkillCategory, StatDef, StatKind, Weights};
pub use derive::{Derivation, recompute};
pub use id::StatId;
pub use skill::{Skill, SkillMap};
