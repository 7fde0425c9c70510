//! Effect execution context.

use crate::env::GridOracle;
use crate::state::{Battlefield, Position, Unit};

use super::modifier::EffectModifier;

/// Everything an effect needs to resolve at one cell.
pub struct EffectContext<'a, G: GridOracle> {
    /// Battlefield the effect mutates.
    pub battlefield: &'a mut Battlefield<G>,

    /// The attacker as it was when the attack started resolving.
    ///
    /// Every cell of one attack scales off the same stats, even if an
    /// earlier cell buffed or displaced the attacker.
    pub source: &'a Unit,

    /// Modifiers of the attack being resolved.
    pub modifiers: &'a [EffectModifier],

    /// The cell being resolved.
    pub cell: Position,
}

impl<'a, G: GridOracle> EffectContext<'a, G> {
    pub fn new(
        battlefield: &'a mut Battlefield<G>,
        source: &'a Unit,
        modifiers: &'a [EffectModifier],
        cell: Position,
    ) -> Self {
        Self {
            battlefield,
            source,
            modifiers,
            cell,
        }
    }

    /// Moves the context to another cell of the same attack.
    pub fn at(&mut self, cell: Position) -> &mut Self {
        self.cell = cell;
        self
    }
}
