//! Attack outcome types.

use crate::state::{EntityId, Position, StatusEffect};

/// What an effect did to the unit at one cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedEffect {
    /// HP removed. `planned` is the modified magnitude, `actual` what the
    /// target could lose.
    Damage {
        target: EntityId,
        planned: u32,
        actual: u32,
    },

    /// HP restored, capped by the target's maximum.
    Heal {
        target: EntityId,
        planned: u32,
        actual: u32,
    },

    /// Status handed to the target. `stored` is false when the target's
    /// status set was full.
    Status {
        target: EntityId,
        status: StatusEffect,
        stored: bool,
    },

    /// Target displaced; `from == to` when it could not move.
    Push {
        target: EntityId,
        from: Position,
        to: Position,
    },
}

impl AppliedEffect {
    pub fn target(&self) -> EntityId {
        match self {
            Self::Damage { target, .. }
            | Self::Heal { target, .. }
            | Self::Status { target, .. }
            | Self::Push { target, .. } => *target,
        }
    }
}

/// Effect dispatch at a single cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellImpact {
    pub cell: Position,
    /// `None` when the cell was empty.
    pub applied: Option<AppliedEffect>,
}

/// Result of [`crate::combat::Attack::execute`].
///
/// A rejected attack produces an empty report with `accepted == false`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub accepted: bool,
    pub impacts: Vec<CellImpact>,
}

impl AttackReport {
    pub fn rejected() -> Self {
        Self::default()
    }

    /// Every cell the effect was dispatched to, in order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.impacts.iter().map(|impact| impact.cell)
    }

    /// Effects that actually landed on a unit.
    pub fn applied(&self) -> impl Iterator<Item = &AppliedEffect> {
        self.impacts.iter().filter_map(|impact| impact.applied.as_ref())
    }

    /// Sum of HP actually removed across all cells.
    pub fn total_damage(&self) -> u32 {
        self.applied()
            .map(|effect| match effect {
                AppliedEffect::Damage { actual, .. } => *actual,
                _ => 0,
            })
            .sum()
    }
}
