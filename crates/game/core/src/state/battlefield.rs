//! The combat context: a grid plus the roster of units standing on it.

use tracing::{debug, trace};

use super::error::BattlefieldError;
use super::types::{EntityId, Position, Unit};
use crate::env::{GridOracle, TileGrid};

/// Grid and roster that attacks and paths resolve against.
///
/// Occupancy is derived from unit positions, so moving or pushing a unit
/// through the battlefield keeps the two in sync. Defeated units stay on the
/// roster (their owner decides when to remove them) but no longer occupy
/// their cell.
#[derive(Clone, Debug)]
pub struct Battlefield<G: GridOracle = TileGrid> {
    grid: G,
    units: Vec<Unit>,
}

impl<G: GridOracle> Battlefield<G> {
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            units: Vec::new(),
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Places a unit on the board.
    pub fn spawn(&mut self, unit: Unit) -> Result<(), BattlefieldError> {
        if self.unit(unit.id).is_some() {
            return Err(BattlefieldError::DuplicateUnit(unit.id));
        }
        self.check_standable(unit.position, None)?;

        debug!(unit = %unit.id, position = %unit.position, "unit spawned");
        self.units.push(unit);
        Ok(())
    }

    pub fn unit(&self, id: EntityId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// All units on the roster, defeated ones included, in spawn order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// The standing unit occupying `position`, if any.
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.position == position && !u.is_defeated())
    }

    pub fn unit_at_mut(&mut self, position: Position) -> Option<&mut Unit> {
        self.units
            .iter_mut()
            .find(|u| u.position == position && !u.is_defeated())
    }

    /// Whether a standing unit other than `mover` occupies `position`.
    pub fn is_blocked_by_unit(&self, position: Position, mover: Option<EntityId>) -> bool {
        self.unit_at(position)
            .is_some_and(|occupant| Some(occupant.id) != mover)
    }

    /// Whether `mover` could stand on `position`.
    pub fn can_enter(&self, position: Position, mover: Option<EntityId>) -> bool {
        self.grid.is_passable(position) && !self.is_blocked_by_unit(position, mover)
    }

    /// Relocates a unit to a free, walkable cell.
    pub fn move_unit(&mut self, id: EntityId, to: Position) -> Result<(), BattlefieldError> {
        self.check_standable(to, Some(id))?;
        let unit = self
            .unit_mut(id)
            .ok_or(BattlefieldError::UnitNotFound(id))?;
        trace!(unit = %id, from = %unit.position, to = %to, "unit moved");
        unit.position = to;
        Ok(())
    }

    /// Displaces a unit away from `reference`.
    ///
    /// The push is resolved one cell at a time, horizontal component first,
    /// and stops before the first cell the unit cannot enter. Returns the
    /// unit's final position, or `None` if no such unit exists.
    pub fn push_unit(
        &mut self,
        id: EntityId,
        displacement: Position,
        reference: Position,
    ) -> Option<Position> {
        let unit = self.unit(id)?;
        let start = unit.position;
        let offset = unit.push_offset(displacement, reference);

        let horizontal = std::iter::repeat_n(
            Position::new(offset.x.signum(), 0),
            offset.x.unsigned_abs() as usize,
        );
        let vertical = std::iter::repeat_n(
            Position::new(0, offset.y.signum()),
            offset.y.unsigned_abs() as usize,
        );

        let mut current = start;
        for step in horizontal.chain(vertical) {
            let next = current + step;
            if !self.can_enter(next, Some(id)) {
                trace!(unit = %id, blocked_at = %next, "push stopped");
                break;
            }
            current = next;
        }

        if let Some(unit) = self.unit_mut(id) {
            unit.position = current;
        }
        debug!(unit = %id, from = %start, to = %current, "unit pushed");
        Some(current)
    }

    /// Drops defeated units from the roster, returning their ids.
    pub fn remove_defeated(&mut self) -> Vec<EntityId> {
        let defeated: Vec<EntityId> = self
            .units
            .iter()
            .filter(|u| u.is_defeated())
            .map(|u| u.id)
            .collect();
        self.units.retain(|u| !u.is_defeated());
        defeated
    }

    fn check_standable(
        &self,
        position: Position,
        mover: Option<EntityId>,
    ) -> Result<(), BattlefieldError> {
        if !self.grid.is_position_valid(position) {
            return Err(BattlefieldError::OutOfBounds { position });
        }
        if !self.grid.is_passable(position) {
            return Err(BattlefieldError::Blocked { position });
        }
        if let Some(occupant) = self.unit_at(position) {
            if Some(occupant.id) != mover {
                return Err(BattlefieldError::Occupied {
                    position,
                    occupant: occupant.id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TerrainKind;
    use crate::stats::StatBlock;

    fn unit(id: u32, x: i32, y: i32) -> Unit {
        Unit::new(EntityId(id), Position::new(x, y), 10, StatBlock::default())
    }

    fn open_field() -> Battlefield {
        Battlefield::new(TileGrid::new(6, 6))
    }

    #[test]
    fn spawn_rejects_bad_cells() {
        let mut grid = TileGrid::new(4, 4);
        grid.set_terrain(Position::new(1, 1), TerrainKind::Wall);
        let mut field = Battlefield::new(grid);

        field.spawn(unit(1, 0, 0)).unwrap();
        assert_eq!(
            field.spawn(unit(1, 2, 2)),
            Err(BattlefieldError::DuplicateUnit(EntityId(1)))
        );
        assert_eq!(
            field.spawn(unit(2, 0, 0)),
            Err(BattlefieldError::Occupied {
                position: Position::new(0, 0),
                occupant: EntityId(1)
            })
        );
        assert_eq!(
            field.spawn(unit(2, 1, 1)),
            Err(BattlefieldError::Blocked {
                position: Position::new(1, 1)
            })
        );
        assert_eq!(
            field.spawn(unit(2, 9, 0)),
            Err(BattlefieldError::OutOfBounds {
                position: Position::new(9, 0)
            })
        );
    }

    #[test]
    fn defeated_units_free_their_cell() {
        let mut field = open_field();
        field.spawn(unit(1, 2, 2)).unwrap();
        assert!(field.unit_at(Position::new(2, 2)).is_some());

        field.unit_mut(EntityId(1)).unwrap().take_damage(10);
        assert!(field.unit_at(Position::new(2, 2)).is_none());
        assert!(field.can_enter(Position::new(2, 2), None));

        assert_eq!(field.remove_defeated(), vec![EntityId(1)]);
        assert_eq!(field.units().count(), 0);
    }

    #[test]
    fn push_stops_before_obstacles() {
        let mut grid = TileGrid::new(6, 1);
        grid.set_terrain(Position::new(4, 0), TerrainKind::Wall);
        let mut field = Battlefield::new(grid);
        field.spawn(unit(1, 1, 0)).unwrap();

        let landed = field.push_unit(EntityId(1), Position::new(5, 5), Position::new(0, 0));
        assert_eq!(landed, Some(Position::new(3, 0)));
        assert_eq!(field.unit(EntityId(1)).unwrap().position, Position::new(3, 0));
    }

    #[test]
    fn push_does_not_pass_through_units() {
        let mut field = open_field();
        field.spawn(unit(1, 1, 2)).unwrap();
        field.spawn(unit(2, 3, 2)).unwrap();

        let landed = field.push_unit(EntityId(1), Position::new(3, 0), Position::new(0, 2));
        assert_eq!(landed, Some(Position::new(2, 2)));
    }

    #[test]
    fn move_unit_validates_destination() {
        let mut field = open_field();
        field.spawn(unit(1, 0, 0)).unwrap();
        field.spawn(unit(2, 1, 0)).unwrap();

        assert!(field.move_unit(EntityId(1), Position::new(1, 0)).is_err());
        field.move_unit(EntityId(1), Position::new(0, 1)).unwrap();
        assert_eq!(field.unit(EntityId(1)).unwrap().position, Position::new(0, 1));
        assert_eq!(
            field.move_unit(EntityId(9), Position::new(3, 3)),
            Err(BattlefieldError::UnitNotFound(EntityId(9)))
        );
    }
}
