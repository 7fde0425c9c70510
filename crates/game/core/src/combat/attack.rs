//! Attack definitions and their resolution against a battlefield.

use tracing::{debug, trace};

use crate::config::CombatConfig;
use crate::env::GridOracle;
use crate::state::{Battlefield, EntityId, Position, Unit};
use crate::stats::Stat;

use super::aoe;
use super::context::EffectContext;
use super::effect::AttackEffect;
use super::error::AttackError;
use super::kind::AttackType;
use super::modifier::EffectModifier;
use super::result::{AttackReport, CellImpact};

/// Source-independent description of an attack, as authored in content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub name: String,
    pub kind: AttackType,
    /// Reach of RANGED attacks; ignored by every other type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: u32,
    /// Radius of the diamond ring around the impact center.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aoe: u32,
    /// SELF attacks only: whether the source's own cell is hit too.
    #[cfg_attr(feature = "serde", serde(default))]
    pub affect_self: bool,
    pub effect: AttackEffect,
    /// Applied in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<EffectModifier>,
}

impl AttackDefinition {
    pub fn new(name: impl Into<String>, kind: AttackType, effect: AttackEffect) -> Self {
        Self {
            name: name.into(),
            kind,
            range: 0,
            aoe: 0,
            affect_self: false,
            effect,
            modifiers: Vec::new(),
        }
    }

    /// Builder: set the RANGED reach.
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    /// Builder: set the AoE radius.
    pub fn with_aoe(mut self, aoe: u32) -> Self {
        self.aoe = aoe;
        self
    }

    /// Builder: include the source cell in SELF attacks.
    pub fn affecting_self(mut self, affect_self: bool) -> Self {
        self.affect_self = affect_self;
        self
    }

    /// Builder: append a modifier.
    pub fn with_modifier(mut self, stat: Stat, multiplier: f32) -> Self {
        self.modifiers.push(EffectModifier::new(stat, multiplier));
        self
    }

    /// Checks the definition can be bound: an executable type and a reach
    /// within [`CombatConfig::MAX_ATTACK_REACH`].
    pub fn validate(&self) -> Result<(), AttackError> {
        let max = CombatConfig::MAX_ATTACK_REACH;
        if !self.kind.is_executable() {
            return Err(AttackError::InvalidType {
                name: self.name.clone(),
            });
        }
        if self.range > max {
            return Err(AttackError::RangeTooLarge {
                name: self.name.clone(),
                range: self.range,
                max,
            });
        }
        if self.aoe > max {
            return Err(AttackError::AoeTooLarge {
                name: self.name.clone(),
                aoe: self.aoe,
                max,
            });
        }
        Ok(())
    }
}

impl Default for AttackDefinition {
    fn default() -> Self {
        Self::new("INVALID", AttackType::Invalid, AttackEffect::damage(0))
    }
}

/// An attack definition bound to the unit that performs it.
///
/// `Attack::default()` is an unbound INVALID sentinel: it is never valid and
/// executing it does nothing. Bound attacks are only obtainable through
/// [`Attack::new`] or [`Attack::bind`], which refuse the INVALID type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attack {
    definition: AttackDefinition,
    source: Option<EntityId>,
}

impl Attack {
    /// Binds `definition` to `source`.
    pub fn new(definition: AttackDefinition, source: EntityId) -> Result<Self, AttackError> {
        definition.validate()?;
        Ok(Self {
            definition,
            source: Some(source),
        })
    }

    /// Binds `definition` to `source`, also checking the source is on the field.
    pub fn bind<G: GridOracle>(
        definition: AttackDefinition,
        source: EntityId,
        battlefield: &Battlefield<G>,
    ) -> Result<Self, AttackError> {
        if battlefield.unit(source).is_none() {
            return Err(AttackError::UnknownSource(source));
        }
        Self::new(definition, source)
    }

    /// The same attack, owned by another unit.
    pub fn rebind(&self, source: EntityId) -> Self {
        Self {
            definition: self.definition.clone(),
            source: Some(source),
        }
    }

    pub fn definition(&self) -> &AttackDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn kind(&self) -> AttackType {
        self.definition.kind
    }

    pub fn range(&self) -> u32 {
        self.definition.range
    }

    pub fn aoe(&self) -> u32 {
        self.definition.aoe
    }

    pub fn affect_self(&self) -> bool {
        self.definition.affect_self
    }

    pub fn effect(&self) -> &AttackEffect {
        &self.definition.effect
    }

    pub fn modifiers(&self) -> &[EffectModifier] {
        &self.definition.modifiers
    }

    pub fn source(&self) -> Option<EntityId> {
        self.source
    }

    /// Whether `target` is a legal aim point right now.
    ///
    /// False for the sentinel, for a source that is missing or defeated, and
    /// for any cell the type's targeting rule rejects.
    pub fn is_valid<G: GridOracle>(&self, target: Position, battlefield: &Battlefield<G>) -> bool {
        self.source_unit(battlefield)
            .is_some_and(|source| self.admits(source.position, target, battlefield))
    }

    /// Resolves the attack at `target`.
    ///
    /// An invalid target is ignored: the battlefield is left untouched and an
    /// empty, non-accepted report is returned.
    pub fn execute<G: GridOracle>(
        &self,
        target: Position,
        battlefield: &mut Battlefield<G>,
    ) -> AttackReport {
        let Some(source) = self.source_unit(battlefield) else {
            debug!(attack = self.name(), "attack has no standing source");
            return AttackReport::rejected();
        };
        if !self.admits(source.position, target, battlefield) {
            debug!(
                attack = self.name(),
                kind = %self.kind(),
                source = %source.position,
                target = %target,
                "target rejected"
            );
            return AttackReport::rejected();
        }

        let source = source.clone();
        let cells = self.footprint(source.position, target);
        let effect = self.effect();
        let mut ctx = EffectContext::new(battlefield, &source, self.modifiers(), target);

        let impacts = cells
            .into_iter()
            .map(|cell| {
                let applied = effect.apply(ctx.at(cell));
                trace!(
                    attack = self.name(),
                    effect = effect.label(),
                    cell = %cell,
                    hit = applied.is_some(),
                    "effect dispatched"
                );
                CellImpact { cell, applied }
            })
            .collect();

        debug!(
            attack = self.name(),
            source = %source.id,
            target = %target,
            "attack resolved"
        );
        AttackReport {
            accepted: true,
            impacts,
        }
    }

    /// Cells an attack on `target` would affect, empty if it is not valid.
    pub fn preview<G: GridOracle>(&self, target: Position, battlefield: &Battlefield<G>) -> Vec<Position> {
        match self.source_unit(battlefield) {
            Some(source) if self.admits(source.position, target, battlefield) => {
                self.footprint(source.position, target)
            }
            _ => Vec::new(),
        }
    }

    /// Every cell the attack may currently be aimed at.
    pub fn targetable_cells<G: GridOracle>(&self, battlefield: &Battlefield<G>) -> Vec<Position> {
        let Some(source) = self.source_unit(battlefield) else {
            return Vec::new();
        };
        let Some(reach) = self.kind().policy().rule.reach(self.range()) else {
            return Vec::new();
        };

        std::iter::once(source.position)
            .chain(aoe::ring(source.position, reach))
            .filter(|cell| self.admits(source.position, *cell, battlefield))
            .collect()
    }

    fn source_unit<'b, G: GridOracle>(&self, battlefield: &'b Battlefield<G>) -> Option<&'b Unit> {
        let id = self.source?;
        battlefield.unit(id).filter(|unit| !unit.is_defeated())
    }

    fn admits<G: GridOracle>(
        &self,
        source: Position,
        target: Position,
        battlefield: &Battlefield<G>,
    ) -> bool {
        self.kind()
            .policy()
            .rule
            .admits(source, target, self.range(), battlefield.grid())
    }

    fn footprint(&self, source: Position, target: Position) -> Vec<Position> {
        self.kind()
            .policy()
            .shape
            .cells(source, target, self.aoe(), self.affect_self())
    }
}
