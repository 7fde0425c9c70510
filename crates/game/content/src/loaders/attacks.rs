//! Attack catalog loader.
//!
//! A catalog is a RON list of [`AttackSpec`]s. Specs are validated when the
//! catalog is built, so a catalog only ever hands out executable templates.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::combat::{BurnEffect, DamageEffect, HealEffect, PushEffect, StatBuffEffect};
use tactics_core::{
    Attack, AttackDefinition, AttackEffect, AttackError, AttackType, Battlefield, EntityId,
    GridOracle, Stat,
};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Effect as written in catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectSpec {
    Damage(u32),
    Heal(u32),
    /// `(damage, ticks, infinite)`
    Burn(u32, u32, bool),
    /// `(stat, percent, ticks, infinite)`
    StatBuff(Stat, f32, u32, bool),
    /// Push distance in cells.
    Push(i32),
}

impl From<EffectSpec> for AttackEffect {
    fn from(spec: EffectSpec) -> Self {
        match spec {
            EffectSpec::Damage(amount) => AttackEffect::Damage(DamageEffect::new(amount)),
            EffectSpec::Heal(amount) => AttackEffect::Heal(HealEffect::new(amount)),
            EffectSpec::Burn(damage, ticks, infinite) => {
                AttackEffect::Burn(BurnEffect::new(damage, ticks, infinite))
            }
            EffectSpec::StatBuff(stat, percent, ticks, infinite) => {
                AttackEffect::StatBuff(StatBuffEffect::new(stat, percent, ticks, infinite))
            }
            EffectSpec::Push(distance) => AttackEffect::Push(PushEffect::by(distance)),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackSpec {
    pub name: String,
    pub kind: AttackType,
    #[serde(default)]
    pub range: u32,
    #[serde(default)]
    pub aoe: u32,
    #[serde(default)]
    pub affect_self: bool,
    pub effect: EffectSpec,
    /// `(stat, multiplier)` pairs, applied in order.
    #[serde(default)]
    pub modifiers: Vec<(Stat, f32)>,
}

impl AttackSpec {
    pub fn to_definition(&self) -> AttackDefinition {
        let base = AttackDefinition::new(self.name.clone(), self.kind, self.effect.into())
            .with_range(self.range)
            .with_aoe(self.aoe)
            .affecting_self(self.affect_self);
        self.modifiers
            .iter()
            .fold(base, |def, &(stat, multiplier)| def.with_modifier(stat, multiplier))
    }
}

/// A validated, unbound attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackTemplate {
    definition: AttackDefinition,
}

impl AttackTemplate {
    pub fn definition(&self) -> &AttackDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Binds the template to a unit standing on `battlefield`.
    pub fn bind<G: GridOracle>(
        &self,
        source: EntityId,
        battlefield: &Battlefield<G>,
    ) -> Result<Attack, AttackError> {
        Attack::bind(self.definition.clone(), source, battlefield)
    }
}

impl TryFrom<AttackSpec> for AttackTemplate {
    type Error = AttackError;

    fn try_from(spec: AttackSpec) -> Result<Self, Self::Error> {
        let definition = spec.to_definition();
        definition.validate()?;
        Ok(Self { definition })
    }
}

/// Attack templates indexed by name, in file order.
#[derive(Debug, Clone, Default)]
pub struct AttackCatalog {
    templates: Vec<AttackTemplate>,
    by_name: HashMap<String, usize>,
}

impl AttackCatalog {
    pub fn from_specs(specs: Vec<AttackSpec>) -> LoadResult<Self> {
        let mut catalog = Self::default();
        for spec in specs {
            let name = spec.name.clone();
            if catalog.by_name.contains_key(&name) {
                anyhow::bail!("Duplicate attack name {:?} in catalog", name);
            }
            let template = AttackTemplate::try_from(spec)
                .map_err(|e| anyhow::anyhow!("Invalid attack {:?}: {}", name, e))?;
            catalog.by_name.insert(name, catalog.templates.len());
            catalog.templates.push(template);
        }
        debug!(attacks = catalog.len(), "attack catalog built");
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&AttackTemplate> {
        self.by_name.get(name).map(|&index| &self.templates[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Binds the named attacks to `source`, in the order given.
    pub fn loadout<G, S>(
        &self,
        names: &[S],
        source: EntityId,
        battlefield: &Battlefield<G>,
    ) -> LoadResult<Vec<Attack>>
    where
        G: GridOracle,
        S: AsRef<str>,
    {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let template = self
                    .get(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown attack {:?} for unit {}", name, source))?;
                Ok(template.bind(source, battlefield)?)
            })
            .collect()
    }
}

/// Loader for attack catalogs from RON files.
pub struct AttackLoader;

impl AttackLoader {
    pub fn load(path: &Path) -> LoadResult<AttackCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load attacks from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<AttackCatalog> {
        let specs: Vec<AttackSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attack RON: {}", e))?;
        AttackCatalog::from_specs(specs)
    }

    /// The catalog bundled with the crate.
    pub fn bundled() -> LoadResult<AttackCatalog> {
        Self::parse(include_str!("../../data/attacks.ron"))
    }
}
