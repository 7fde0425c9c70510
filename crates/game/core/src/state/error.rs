//! Battlefield errors.
//!
//! Raised when a caller places or moves a unit somewhere the board does not
//! allow. Attack resolution itself never produces these.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlefieldError {
    /// Position is outside the board or a void cell.
    #[error("position {position} is out of bounds")]
    OutOfBounds { position: Position },

    /// Terrain at the position cannot be stood on.
    #[error("position {position} is blocked by terrain")]
    Blocked { position: Position },

    /// Position is already occupied by another unit.
    #[error("position {position} is already occupied by unit {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    /// A unit with this id is already on the roster.
    #[error("unit {0} is already on the battlefield")]
    DuplicateUnit(EntityId),

    /// No unit with this id is on the roster.
    #[error("unit {0} not found")]
    UnitNotFound(EntityId),
}

impl GameError for BattlefieldError {
    fn severity(&self) -> ErrorSeverity {
        use BattlefieldError::*;
        match self {
            // The cell may free up later
            Occupied { .. } => ErrorSeverity::Recoverable,

            OutOfBounds { .. } | Blocked { .. } | DuplicateUnit(_) => ErrorSeverity::Validation,

            UnitNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use BattlefieldError::*;
        match self {
            OutOfBounds { .. } => "BATTLEFIELD_OUT_OF_BOUNDS",
            Blocked { .. } => "BATTLEFIELD_BLOCKED",
            Occupied { .. } => "BATTLEFIELD_OCCUPIED",
            DuplicateUnit(_) => "BATTLEFIELD_DUPLICATE_UNIT",
            UnitNotFound(_) => "BATTLEFIELD_UNIT_NOT_FOUND",
        }
    }
}
