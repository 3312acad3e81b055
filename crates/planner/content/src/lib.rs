//! Data-driven planner content.
//!
//! Provides the in-memory item/perk catalogue the planner looks items up in,
//! and loaders that build it from data files:
//! - Item and nano catalogues (RON)
//! - Perk catalogues (RON)
//! - Rules configuration (TOML)
//!
//! Content is looked up by callers and cloned into profiles; profiles never
//! refer back into the catalogue.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ContentCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, ItemCatalog, ItemLoader, ItemRecord, PerkCatalog, PerkLoader, RawRequirement,
    RulesLoader,
};
