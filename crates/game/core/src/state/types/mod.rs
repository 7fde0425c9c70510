pub mod common;
pub mod status;
pub mod unit;

// Re-export common types
pub use common::{EntityId, Position, ResourceMeter};

// Re-export status types
pub use status::{StatusDuration, StatusEffect, StatusEffects, StatusKind};

// Re-export unit
pub use unit::Unit;
