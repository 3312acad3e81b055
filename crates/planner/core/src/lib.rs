//! Character build planner core.
//!
//! Pure, deterministic stat engine: aggregates bonuses from equipment, perks
//! and buffs, derives every skill total, admits buffs against the derived NCU
//! capacity and evaluates item requirement lists. Nothing here performs I/O;
//! callers own persistence of the profiles they get back.
pub mod admission;
pub mod character;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod item;
pub mod stats;

pub use admission::{AdmissionController, AdmissionError, AdmissionPlan};
pub use character::{
    ActiveBuff, ActiveBuffs, Breed, CharacterProfile, EquipSlot, Equipment, IpLedger, Profession,
    ProfileId, Roster, RosterError, SlotKind,
};
pub use config::RulesConfig;
pub use criteria::{
    CompareOp, CriteriaError, Criterion, Eligibility, FactLookup, Malformed, Shortfall, Unmet,
    evaluate,
};
pub use engine::{
    CastOutcome, ProfileEngine, ProfileMutation, RecomputeReport, can_use, create_profile,
    recompute_profile,
};
pub use error::{ErrorSeverity, PlannerError};
pub use item::{BuffDescriptor, Item, ItemId, SpellData, SpellEffect, StatValue, TriggerEvent};
pub use stats::{
    Ability, BonusMap, CATALOG, ProfileBonuses, Skill, SkillCategory, SkillMap, StatDef, StatId,
    StatKind, aggregate,
};
