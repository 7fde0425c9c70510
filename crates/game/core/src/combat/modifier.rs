//! Effect modifier pipeline.
//!
//! A modifier scales an effect's base magnitude with one of the attacker's
//! stats: `magnitude += source.stat(stat) * multiplier`. Modifiers are
//! accumulated in declaration order; each term is truncated toward zero
//! before it is added, and the total is clamped to `0..=u32::MAX`.

use crate::state::Unit;
use crate::stats::Stat;

/// One `(stat, multiplier)` term.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectModifier {
    pub stat: Stat,
    pub multiplier: f32,
}

impl EffectModifier {
    pub const fn new(stat: Stat, multiplier: f32) -> Self {
        Self { stat, multiplier }
    }

    /// Contribution of this modifier for the given attacker.
    pub fn term(&self, source: &Unit) -> i64 {
        (source.stat(self.stat) * self.multiplier) as i64
    }
}

/// Scales `base` by every modifier, in order, using `source`'s stats.
pub fn modified_magnitude(base: u32, modifiers: &[EffectModifier], source: &Unit) -> u32 {
    let total = modifiers
        .iter()
        .fold(i64::from(base), |acc, modifier| acc + modifier.term(source));
    total.clamp(0, i64::from(u32::MAX)) as u32
}
