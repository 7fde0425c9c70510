//! Damage effect implementation.

use crate::combat::context::EffectContext;
use crate::combat::modifier::modified_magnitude;
use crate::combat::result::AppliedEffect;
use crate::env::GridOracle;

/// Deal damage to the unit in the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEffect {
    pub base_damage: u32,
}

impl DamageEffect {
    pub fn new(base_damage: u32) -> Self {
        Self { base_damage }
    }

    /// Apply modified damage to the occupant, if any.
    pub fn apply<G: GridOracle>(&self, ctx: &mut EffectContext<'_, G>) -> Option<AppliedEffect> {
        let unit = ctx.battlefield.unit_at_mut(ctx.cell)?;
        let planned = modified_magnitude(self.base_damage, ctx.modifiers, ctx.source);
        let actual = unit.take_damage(planned);

        Some(AppliedEffect::Damage {
            target: unit.id,
            planned,
            actual,
        })
    }
}
