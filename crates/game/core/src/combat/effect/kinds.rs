//! Effect enum and dispatcher.
//!
//! [`AttackEffect`] wraps every concrete effect type. The set is closed;
//! dispatch is a plain `match`.

use crate::combat::context::EffectContext;
use crate::combat::result::AppliedEffect;
use crate::env::GridOracle;
use crate::state::Position;
use crate::stats::Stat;

use super::damage::DamageEffect;
use super::heal::HealEffect;
use super::push::PushEffect;
use super::status::{BurnEffect, StatBuffEffect};

/// The per-cell consequence of an attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackEffect {
    // ========================================================================
    // Hit points
    // ========================================================================
    Damage(DamageEffect),
    Heal(HealEffect),

    // ========================================================================
    // Status effects
    // ========================================================================
    Burn(BurnEffect),
    StatBuff(StatBuffEffect),

    // ========================================================================
    // Movement
    // ========================================================================
    Push(PushEffect),
}

impl AttackEffect {
    pub fn damage(base_damage: u32) -> Self {
        Self::Damage(DamageEffect::new(base_damage))
    }

    pub fn heal(heal_amount: u32) -> Self {
        Self::Heal(HealEffect::new(heal_amount))
    }

    pub fn burn(burn_damage: u32, ticks: u32, infinite: bool) -> Self {
        Self::Burn(BurnEffect::new(burn_damage, ticks, infinite))
    }

    pub fn stat_buff(stat: Stat, percent: f32, ticks: u32, infinite: bool) -> Self {
        Self::StatBuff(StatBuffEffect::new(stat, percent, ticks, infinite))
    }

    pub fn push(displacement: Position) -> Self {
        Self::Push(PushEffect::new(displacement))
    }

    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Damage(_) => "damage",
            Self::Heal(_) => "heal",
            Self::Burn(_) => "burn",
            Self::StatBuff(_) => "stat_buff",
            Self::Push(_) => "push",
        }
    }

    /// Resolve the effect at `ctx.cell`.
    ///
    /// Returns `None` when the cell holds no standing unit; that is not an
    /// error, attacks are free to land on empty ground.
    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        match self {
            Self::Damage(e) => e.apply(ctx),
            Self::Heal(e) => e.apply(ctx),
            Self::Burn(e) => e.apply(ctx),
            Self::StatBuff(e) => e.apply(ctx),
            Self::Push(e) => e.apply(ctx),
        }
    }
}
