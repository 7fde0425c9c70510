//! Content loaders for reading combat data from files.
//!
//! Attack catalogs and scenarios are RON; combat tuning is TOML. Bundled
//! copies of each ship with the crate under `data/`.

pub mod attacks;
pub mod config;
pub mod scenario;

pub use attacks::{AttackCatalog, AttackLoader, AttackSpec, AttackTemplate, EffectSpec};
pub use config::ConfigLoader;
pub use scenario::{RosterEntry, Scenario, ScenarioLoader, ScenarioSpec, UnitSpec};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
