//! Status-applying effects.
//!
//! These ignore attack modifiers: the status is created exactly as defined
//! and handed to the target, which ticks it on its own schedule.

use crate::combat::context::EffectContext;
use crate::combat::result::AppliedEffect;
use crate::env::GridOracle;
use crate::state::{StatusDuration, StatusEffect};
use crate::stats::Stat;

/// Set the unit in the cell on fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurnEffect {
    pub burn_damage: u32,
    pub ticks: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub infinite: bool,
}

impl BurnEffect {
    pub fn new(burn_damage: u32, ticks: u32, infinite: bool) -> Self {
        Self {
            burn_damage,
            ticks,
            infinite,
        }
    }

    pub fn status(&self) -> StatusEffect {
        StatusEffect::burn(
            self.burn_damage,
            StatusDuration::from_parts(self.ticks, self.infinite),
        )
    }

    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        attach(ctx, self.status())
    }
}

/// Scale one stat of the unit in the cell by a percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBuffEffect {
    pub stat: Stat,
    pub percent: f32,
    pub ticks: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub infinite: bool,
}

impl StatBuffEffect {
    pub fn new(stat: Stat, percent: f32, ticks: u32, infinite: bool) -> Self {
        Self {
            stat,
            percent,
            ticks,
            infinite,
        }
    }

    pub fn status(&self) -> StatusEffect {
        StatusEffect::stat_buff(
            self.stat,
            self.percent,
            StatusDuration::from_parts(self.ticks, self.infinite),
        )
    }

    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        attach(ctx, self.status())
    }
}

fn attach<G: GridOracle>(
    ctx: &mut EffectContext<'_, G>,
    status: StatusEffect,
) -> Option<AppliedEffect> {
    let unit = ctx.battlefield.unit_at_mut(ctx.cell)?;
    let stored = unit.add_status(status);

    Some(AppliedEffect::Status {
        target: unit.id,
        status,
        stored,
    })
}
