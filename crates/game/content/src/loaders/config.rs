//! Combat configuration loader.

use std::path::Path;

use tactics_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// The configuration bundled with the crate.
    pub fn bundled() -> LoadResult<CombatConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = ConfigLoader::bundled().unwrap();
        assert_eq!(config.move_budget, 4);
        assert_eq!(config.max_path_expansions, 4096);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("move_budget = 7\n").unwrap();
        assert_eq!(
            config,
            CombatConfig::default().with_move_budget(7)
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("move_budget = \"far\"\n").is_err());
    }
}
