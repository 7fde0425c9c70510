//! Data-driven combat content and loaders.
//!
//! This crate houses the bundled combat content and provides loaders for
//! RON/TOML data files:
//! - Attack catalogs (data-driven via RON)
//! - Battle scenarios: terrain rows and starting units (RON)
//! - Combat configuration (TOML)
//!
//! All loaders use tactics-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttackCatalog, AttackLoader, AttackSpec, AttackTemplate, ConfigLoader, EffectSpec, RosterEntry,
    Scenario, ScenarioLoader, ScenarioSpec, UnitSpec,
};
