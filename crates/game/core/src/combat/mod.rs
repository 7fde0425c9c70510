//! Attack resolution.
//!
//! An [`Attack`] is an [`AttackDefinition`] bound to the unit that performs
//! it. Resolution is driven by [`AttackType::policy`]:
//!
//! - the targeting rule decides whether a cell may be aimed at
//! - the impact shape lists the cells that receive the effect
//! - the [`AttackEffect`] is applied once per listed cell, scaled by the
//!   attack's [`EffectModifier`]s
//!
//! Invalid targets are silent no-ops; only binding can fail.

pub mod aoe;
mod attack;
mod context;
pub mod effect;
mod error;
mod kind;
mod modifier;
mod result;

pub use attack::{Attack, AttackDefinition};
pub use context::EffectContext;
pub use effect::{
    AttackEffect, BurnEffect, DamageEffect, HealEffect, PushEffect, StatBuffEffect,
};
pub use error::AttackError;
pub use kind::{AttackPolicy, AttackType, ImpactShape, TargetRule};
pub use modifier::{EffectModifier, modified_magnitude};
pub use result::{AppliedEffect, AttackReport, CellImpact};
