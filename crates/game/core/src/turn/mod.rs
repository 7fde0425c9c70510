//! Turn control for a single acting unit.

mod error;
mod player;

pub use error::TurnError;
pub use player::{PlayerAction, PlayerTurn, TurnOutcome};
