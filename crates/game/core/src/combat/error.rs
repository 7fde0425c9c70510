use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors raised while binding an attack definition to a unit.
///
/// Executing an attack never errors; a malformed attack is refused here,
/// before it can reach the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("attack {name:?} has the INVALID type and cannot be executed")]
    InvalidType { name: String },

    #[error("attack source {0} is not on the battlefield")]
    UnknownSource(EntityId),

    #[error("attack {name:?} has range {range}, above the limit of {max}")]
    RangeTooLarge { name: String, range: u32, max: u32 },

    #[error("attack {name:?} has aoe {aoe}, above the limit of {max}")]
    AoeTooLarge { name: String, aoe: u32, max: u32 },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidType { .. } => "ATTACK_INVALID_TYPE",
            Self::UnknownSource(_) => "ATTACK_UNKNOWN_SOURCE",
            Self::RangeTooLarge { .. } => "ATTACK_RANGE_TOO_LARGE",
            Self::AoeTooLarge { .. } => "ATTACK_AOE_TOO_LARGE",
        }
    }
}
