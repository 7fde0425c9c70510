//! Units: the occupants that attacks resolve against.

use super::common::{EntityId, Position, ResourceMeter};
use super::status::{StatusEffect, StatusEffects};
use crate::stats::{Stat, StatBlock};

/// A combatant placed on the battlefield.
///
/// # Invariants
///
/// - `hp.current <= hp.maximum`
/// - a unit with `hp.current == 0` is defeated; it stays in the roster until
///   the owner removes it, but no longer occupies its cell
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub hp: ResourceMeter,
    pub stats: StatBlock,
    pub status_effects: StatusEffects,
}

impl Unit {
    pub fn new(id: EntityId, position: Position, max_hp: u32, stats: StatBlock) -> Self {
        Self {
            id,
            name: format!("unit{}", id.0),
            position,
            hp: ResourceMeter::full(max_hp),
            stats,
            status_effects: StatusEffects::empty(),
        }
    }

    /// Builder: set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Effective value of `stat`: the base value scaled by active buffs.
    pub fn stat(&self, stat: Stat) -> f32 {
        let percent = self.status_effects.stat_percent(stat);
        self.stats.get(stat) * (1.0 + percent / 100.0)
    }

    /// Applies damage, returning the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Restores HP up to the maximum, returning the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Takes ownership of a freshly created status.
    ///
    /// Returns false if the unit's status set is full.
    pub fn add_status(&mut self, status: StatusEffect) -> bool {
        self.status_effects.add(status)
    }

    /// Orients a push away from `reference`.
    ///
    /// The push length is the Manhattan norm of `displacement`, applied
    /// along the axis that separates the unit from `reference` (horizontal
    /// on a diagonal tie). A unit pushed from its own cell does not move.
    pub fn push_offset(&self, displacement: Position, reference: Position) -> Position {
        let delta = self.position - reference;
        let away = if delta.x.abs() >= delta.y.abs() {
            Position::new(delta.x.signum(), 0)
        } else {
            Position::new(0, delta.y.signum())
        };
        let distance = i32::try_from(displacement.norm()).unwrap_or(i32::MAX);
        away * distance
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }
}
