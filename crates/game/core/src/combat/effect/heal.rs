//! Healing effect implementation.

use crate::combat::context::EffectContext;
use crate::combat::modifier::modified_magnitude;
use crate::combat::result::AppliedEffect;
use crate::env::GridOracle;

/// Restore HP to the unit in the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealEffect {
    pub heal_amount: u32,
}

impl HealEffect {
    pub fn new(heal_amount: u32) -> Self {
        Self { heal_amount }
    }

    /// Apply modified healing to the occupant, if any.
    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        let unit = ctx.battlefield.unit_at_mut(ctx.cell)?;
        let planned = modified_magnitude(self.heal_amount, ctx.modifiers, ctx.source);
        let actual = unit.heal(planned);

        Some(AppliedEffect::Heal {
            target: unit.id,
            planned,
            actual,
        })
    }
}
