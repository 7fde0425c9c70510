//! Battle scenario loader.
//!
//! A scenario is a terrain layout drawn as rows of glyphs plus the units that
//! start on it. Loading builds a ready-to-use [`Battlefield`].

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tactics_core::{Battlefield, EntityId, Position, StatBlock, TileGrid, Unit};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// One unit entry of a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: u32,
    pub name: String,
    pub position: (i32, i32),
    pub hp: u32,
    /// Units on the same team never target each other in automated play.
    #[serde(default)]
    pub team: u8,
    #[serde(default)]
    pub stats: StatBlock,
    /// Attack names looked up in the catalog, in slot order.
    #[serde(default)]
    pub attacks: Vec<String>,
}

/// Scenario file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub width: u32,
    pub height: u32,
    /// `.` floor, `#` wall, `~` water, ` ` void. Short rows are padded with
    /// void.
    pub rows: Vec<String>,
    pub units: Vec<UnitSpec>,
}

/// Per-unit data that does not live on the battlefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: EntityId,
    pub team: u8,
    pub attacks: Vec<String>,
}

/// A loaded scenario: the battlefield plus each unit's team and attack names.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub battlefield: Battlefield,
    pub roster: Vec<RosterEntry>,
}

impl Scenario {
    pub fn entry(&self, id: EntityId) -> Option<&RosterEntry> {
        self.roster.iter().find(|entry| entry.id == id)
    }

    /// Attack names of `id`, empty for unknown units.
    pub fn loadout(&self, id: EntityId) -> &[String] {
        self.entry(id)
            .map(|entry| entry.attacks.as_slice())
            .unwrap_or_default()
    }

    pub fn team(&self, id: EntityId) -> Option<u8> {
        self.entry(id).map(|entry| entry.team)
    }
}

impl ScenarioSpec {
    fn grid(&self) -> LoadResult<TileGrid> {
        if self.rows.len() != self.height as usize {
            anyhow::bail!(
                "Scenario declares height {} but has {} rows",
                self.height,
                self.rows.len()
            );
        }
        let width = self.width as usize;
        let mut rows = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let len = row.chars().count();
            if len > width {
                anyhow::bail!("Row {} is {} cells wide, expected {}", index, len, width);
            }
            rows.push(format!("{row:<width$}"));
        }
        Ok(TileGrid::from_rows(&rows)?)
    }

    pub fn build(self) -> LoadResult<Scenario> {
        let mut battlefield = Battlefield::new(self.grid()?);
        let mut roster = Vec::with_capacity(self.units.len());

        for spec in self.units {
            let id = EntityId(spec.id);
            let position = Position::new(spec.position.0, spec.position.1);
            let unit = Unit::new(id, position, spec.hp, spec.stats).with_name(spec.name.clone());
            battlefield
                .spawn(unit)
                .with_context(|| format!("Failed to place unit {:?}", spec.name))?;
            roster.push(RosterEntry {
                id,
                team: spec.team,
                attacks: spec.attacks,
            });
        }

        debug!(units = roster.len(), "scenario built");
        Ok(Scenario { battlefield, roster })
    }
}

/// Loader for battle scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let spec: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        spec.build()
    }

    /// The scenario bundled with the crate.
    pub fn bundled() -> LoadResult<Scenario> {
        Self::parse(include_str!("../../data/scenario.ron"))
    }
}
