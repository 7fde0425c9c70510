use crate::state::Position;

/// One orthogonal grid step. `y` grows downwards, matching map row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// Neighbor expansion order used by every search.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> Position {
        match self {
            CardinalDirection::North => Position::new(0, -1),
            CardinalDirection::East => Position::new(1, 0),
            CardinalDirection::South => Position::new(0, 1),
            CardinalDirection::West => Position::new(-1, 0),
        }
    }

    /// The four neighbors of `position`, in expansion order.
    pub fn neighbors(position: Position) -> [Position; 4] {
        Self::ALL.map(|dir| position + dir.delta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_expansion_order() {
        let around = CardinalDirection::neighbors(Position::new(2, 2));
        assert_eq!(
            around,
            [
                Position::new(2, 1),
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(1, 2),
            ]
        );
    }
}
