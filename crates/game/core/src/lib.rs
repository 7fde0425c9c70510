//! Deterministic combat rules for grid tactics.
//!
//! `tactics-core` resolves attacks and plans movement on a shared
//! [`Battlefield`]: a read-only grid (through [`GridOracle`]) plus the roster
//! of units standing on it. Everything here is synchronous and in-memory;
//! content loading and presentation live in other crates.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod movement;
pub mod state;
pub mod stats;
pub mod turn;

pub use combat::{
    AppliedEffect, Attack, AttackDefinition, AttackEffect, AttackError, AttackReport, AttackType,
    CellImpact, EffectModifier,
};
pub use config::CombatConfig;
pub use env::{GridError, GridOracle, MapDimensions, StaticTile, TerrainKind, TileGrid};
pub use error::{ErrorSeverity, GameError};
pub use movement::{CardinalDirection, Pathfinder};
pub use state::{
    Battlefield, BattlefieldError, EntityId, Position, ResourceMeter, StatusDuration,
    StatusEffect, StatusEffects, StatusKind, Unit,
};
pub use stats::{Stat, StatBlock};
pub use turn::{PlayerAction, PlayerTurn, TurnError, TurnOutcome};
