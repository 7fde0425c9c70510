//! Displacement effect implementation.

use crate::combat::context::EffectContext;
use crate::combat::result::AppliedEffect;
use crate::env::GridOracle;
use crate::state::Position;

/// Shove the unit in the cell away from the attacker.
///
/// Only the Manhattan length of `displacement` matters; the direction comes
/// from the attacker's position relative to the target (see
/// [`crate::state::Unit::push_offset`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushEffect {
    pub displacement: Position,
}

impl PushEffect {
    pub fn new(displacement: Position) -> Self {
        Self { displacement }
    }

    /// Push `distance` cells along whichever axis separates the units.
    pub fn by(distance: i32) -> Self {
        Self::new(Position::new(distance, 0))
    }

    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        let target = ctx.battlefield.unit_at(ctx.cell)?.id;
        let to = ctx
            .battlefield
            .push_unit(target, self.displacement, ctx.source.position)?;

        Some(AppliedEffect::Push {
            target,
            from: ctx.cell,
            to,
        })
    }
}
