//! Read-only board data.
//!
//! The combat engine never inspects board internals; it asks a
//! [`GridOracle`] whether cells exist and can be walked on. [`TileGrid`] is
//! the dense in-memory implementation used by the battlefield and loaders.
mod map;

pub use map::{GridError, GridOracle, MapDimensions, StaticTile, TerrainKind, TileGrid};
