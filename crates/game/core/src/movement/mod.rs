//! Grid movement: directions and route planning.

mod direction;
mod pathfinder;

pub use direction::CardinalDirection;
pub use pathfinder::Pathfinder;
