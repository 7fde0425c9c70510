use crate::state::Position;

/// Read-only grid oracle: the only view attack resolution and pathfinding
/// have of the board layout.
pub trait GridOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Whether a cell exists on the board and may be targeted.
    fn is_position_valid(&self, position: Position) -> bool {
        self.contains(position)
            && self
                .tile(position)
                .is_some_and(|tile| tile.terrain() != TerrainKind::Void)
    }

    /// Whether a unit may stand on the cell's terrain.
    fn is_passable(&self, position: Position) -> bool {
        self.contains(position) && self.tile(position).is_some_and(StaticTile::is_passable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
///
/// Walls and water block movement but can still be targeted; void cells are
/// holes in the board and are neither walkable nor targetable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    Water,
    Void,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    /// Parses the single-character layout notation used by scenario files.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '~' => Some(Self::Water),
            ' ' => Some(Self::Void),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Water => '~',
            Self::Void => ' ',
        }
    }
}

/// Errors raised while building a grid from a text layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown terrain glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

impl crate::error::GameError for GridError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "GRID_EMPTY",
            Self::RaggedRow { .. } => "GRID_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
        }
    }
}

/// Dense in-memory grid; the bundled [`GridOracle`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
}

impl TileGrid {
    /// Creates an open grid where every cell is floor.
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            terrain: vec![TerrainKind::Floor; dimensions.area()],
        }
    }

    /// Builds a grid from text rows; row 0 is `y == 0`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().ok_or(GridError::Empty)?.as_ref().chars().count();
        let mut terrain = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = TerrainKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    position: Position::new(x as i32, y as i32),
                })?;
                terrain.push(kind);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            terrain,
        })
    }

    pub fn set_terrain(&mut self, position: Position, kind: TerrainKind) {
        if let Some(idx) = self.idx(position) {
            self.terrain[idx] = kind;
        }
    }

    fn idx(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl GridOracle for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.idx(position)
            .map(|idx| StaticTile::new(self.terrain[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layout_rows() {
        let grid = TileGrid::from_rows(&["..#", "~. "]).unwrap();
        assert_eq!(grid.dimensions(), MapDimensions::new(3, 2));
        assert!(grid.is_passable(Position::new(0, 0)));
        assert!(!grid.is_passable(Position::new(2, 0)));
        assert!(grid.is_position_valid(Position::new(2, 0)));
        assert!(!grid.is_passable(Position::new(0, 1)));
        assert!(!grid.is_position_valid(Position::new(2, 1)));
    }

    #[test]
    fn rejects_malformed_layouts() {
        let empty: [&str; 0] = [];
        assert_eq!(TileGrid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(
            TileGrid::from_rows(&["...", ".."]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert!(matches!(
            TileGrid::from_rows(&[".x."]),
            Err(GridError::UnknownGlyph { glyph: 'x', .. })
        ));
    }

    #[test]
    fn out_of_bounds_is_never_valid() {
        let grid = TileGrid::new(4, 4);
        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(4, 0),
            Position::new(0, 4),
        ] {
            assert!(!grid.is_position_valid(position));
            assert!(!grid.is_passable(position));
            assert!(grid.tile(position).is_none());
        }
    }
}
