use crate::error::{ErrorSeverity, GameError};
use crate::state::{BattlefieldError, EntityId, Position};

/// Errors raised while driving a [`super::PlayerTurn`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("no action selected")]
    NoActionSelected,

    #[error("turn of {0} is already over")]
    TurnOver(EntityId),

    #[error("unit has already moved this turn")]
    AlreadyMoved,

    #[error("unit has already attacked this turn")]
    AlreadyAttacked,

    #[error("no attack in slot {slot}")]
    UnknownAttack { slot: usize },

    #[error("{target} is not a valid target for {attack:?}")]
    InvalidTarget { attack: String, target: Position },

    #[error("no walkable path to {target}")]
    NoPath { target: Position },

    #[error("{target} is {steps} steps away, move budget is {budget}")]
    OutOfMoveBudget {
        target: Position,
        steps: u32,
        budget: u32,
    },

    #[error("acting unit {0} is not on the battlefield")]
    ActorMissing(EntityId),

    #[error(transparent)]
    Battlefield(#[from] BattlefieldError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        use TurnError::*;
        match self {
            NoActionSelected | InvalidTarget { .. } | NoPath { .. } | OutOfMoveBudget { .. } => {
                ErrorSeverity::Recoverable
            }

            TurnOver(_) | AlreadyMoved | AlreadyAttacked | UnknownAttack { .. } => {
                ErrorSeverity::Validation
            }

            ActorMissing(_) => ErrorSeverity::Internal,

            Battlefield(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use TurnError::*;
        match self {
            NoActionSelected => "TURN_NO_ACTION_SELECTED",
            TurnOver(_) => "TURN_OVER",
            AlreadyMoved => "TURN_ALREADY_MOVED",
            AlreadyAttacked => "TURN_ALREADY_ATTACKED",
            UnknownAttack { .. } => "TURN_UNKNOWN_ATTACK",
            InvalidTarget { .. } => "TURN_INVALID_TARGET",
            NoPath { .. } => "TURN_NO_PATH",
            OutOfMoveBudget { .. } => "TURN_OUT_OF_MOVE_BUDGET",
            ActorMissing(_) => "TURN_ACTOR_MISSING",
            Battlefield(inner) => inner.error_code(),
        }
    }
}
