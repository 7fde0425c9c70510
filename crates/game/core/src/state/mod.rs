//! Combat state: positions, units, their statuses, and the battlefield that
//! ties them to a grid.
//!
//! Attack resolution reads and mutates units exclusively through
//! [`Battlefield`], which keeps occupancy consistent with unit positions.
mod battlefield;
mod error;
pub mod types;

pub use battlefield::Battlefield;
pub use error::BattlefieldError;
pub use types::{
    EntityId, Position, ResourceMeter, StatusDuration, StatusEffect, StatusEffects, StatusKind,
    Unit,
};
