//! A* route planning over the battlefield.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use tracing::{trace, warn};

use super::direction::CardinalDirection;
use crate::config::CombatConfig;
use crate::env::GridOracle;
use crate::state::{Battlefield, EntityId, Position};

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    position: Position,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Position, u64) {
        (self.f, self.g, self.position, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

/// Plans 4-directional walks across a battlefield.
///
/// A cell is walkable when its terrain is passable and no standing unit other
/// than the mover occupies it. Steps cost 1 and the heuristic is Manhattan
/// distance, so returned paths are shortest.
pub struct Pathfinder<'a, G: GridOracle> {
    battlefield: &'a Battlefield<G>,
    mover: Option<EntityId>,
    max_expansions: u32,
}

impl<'a, G: GridOracle> Pathfinder<'a, G> {
    pub fn new(battlefield: &'a Battlefield<G>, config: &CombatConfig) -> Self {
        Self {
            battlefield,
            mover: None,
            max_expansions: config.max_path_expansions,
        }
    }

    /// Treats `mover`'s own cell as free.
    pub fn for_unit(mut self, mover: EntityId) -> Self {
        self.mover = Some(mover);
        self
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.battlefield.can_enter(position, self.mover)
    }

    /// Shortest walk from `start` to `goal`, both included.
    ///
    /// Returns `[start]` when the two coincide on the board and an empty vec
    /// when the goal cannot be reached (or the search exceeds its expansion
    /// bound). An off-board start never has a path.
    pub fn find_path(&self, start: Position, goal: Position) -> Vec<Position> {
        if !self.battlefield.grid().dimensions().contains(start) {
            return Vec::new();
        }
        if start == goal {
            return vec![start];
        }
        if !self.is_walkable(goal) {
            return Vec::new();
        }

        let mut open = BinaryHeap::new();
        let mut tie: u64 = 0;
        let mut g_score: HashMap<Position, u32> = HashMap::from([(start, 0)]);
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut expansions: u32 = 0;

        open.push(OpenNode {
            f: start.manhattan(goal),
            g: 0,
            position: start,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.position == goal {
                let path = reconstruct_path(&came_from, goal);
                trace!(start = %start, goal = %goal, len = path.len(), expansions, "path found");
                return path;
            }
            if g_score.get(&node.position) != Some(&node.g) {
                // Stale heap entry.
                continue;
            }

            expansions += 1;
            if expansions > self.max_expansions {
                warn!(
                    start = %start,
                    goal = %goal,
                    limit = self.max_expansions,
                    "path search exhausted its expansion budget"
                );
                return Vec::new();
            }

            for next in CardinalDirection::neighbors(node.position) {
                if !self.is_walkable(next) {
                    continue;
                }
                let tentative_g = node.g.saturating_add(1);
                if g_score.get(&next).is_some_and(|&g| tentative_g >= g) {
                    continue;
                }

                came_from.insert(next, node.position);
                g_score.insert(next, tentative_g);
                open.push(OpenNode {
                    f: tentative_g.saturating_add(next.manhattan(goal)),
                    g: tentative_g,
                    position: next,
                    tie,
                });
                tie += 1;
            }
        }

        trace!(start = %start, goal = %goal, "goal unreachable");
        Vec::new()
    }

    /// Every cell a walk of at most `max_steps` can end on, start excluded.
    ///
    /// Cells are listed in breadth-first order, nearest first.
    pub fn reachable(&self, start: Position, max_steps: u32) -> Vec<Position> {
        let mut distance: HashMap<Position, u32> = HashMap::from([(start, 0)]);
        let mut frontier = VecDeque::from([start]);
        let mut cells = Vec::new();

        while let Some(current) = frontier.pop_front() {
            let steps = distance[&current];
            if steps == max_steps {
                continue;
            }
            for next in CardinalDirection::neighbors(current) {
                if distance.contains_key(&next) || !self.is_walkable(next) {
                    continue;
                }
                distance.insert(next, steps + 1);
                frontier.push_back(next);
                cells.push(next);
            }
        }
        cells
    }
}

fn reconstruct_path(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{TerrainKind, TileGrid};
    use crate::state::Unit;
    use crate::stats::StatBlock;

    fn open_field(width: u32, height: u32) -> Battlefield {
        Battlefield::new(TileGrid::new(width, height))
    }

    fn is_orthogonal_walk(path: &[Position]) -> bool {
        path.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1)
    }

    #[test]
    fn corner_to_corner_on_open_grid() {
        let field = open_field(5, 5);
        let config = CombatConfig::default();
        let path = Pathfinder::new(&field, &config).find_path(Position::new(0, 0), Position::new(4, 4));

        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(4, 4)));
        assert!(is_orthogonal_walk(&path));
    }

    #[test]
    fn start_equals_goal() {
        let field = open_field(3, 3);
        let config = CombatConfig::default();
        let at = Position::new(1, 1);
        assert_eq!(Pathfinder::new(&field, &config).find_path(at, at), vec![at]);
    }

    #[test]
    fn off_board_start_has_no_path() {
        let field = open_field(3, 3);
        let config = CombatConfig::default();
        let finder = Pathfinder::new(&field, &config);
        let outside = Position::new(-1, 5);
        assert!(finder.find_path(outside, outside).is_empty());
        assert!(finder.find_path(outside, Position::new(1, 1)).is_empty());
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let mut grid = TileGrid::new(5, 5);
        for cell in CardinalDirection::neighbors(Position::new(2, 2)) {
            grid.set_terrain(cell, TerrainKind::Wall);
        }
        let field = Battlefield::new(grid);
        let config = CombatConfig::default();

        let path = Pathfinder::new(&field, &config).find_path(Position::new(0, 0), Position::new(2, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn routes_around_walls_and_units() {
        let field = {
            let grid = TileGrid::from_rows(&["..#..", "..#..", ".....", "....."]).unwrap();
            let mut field = Battlefield::new(grid);
            field
                .spawn(Unit::new(EntityId(9), Position::new(2, 2), 5, StatBlock::default()))
                .unwrap();
            field
        };
        let config = CombatConfig::default();
        let path = Pathfinder::new(&field, &config).find_path(Position::new(0, 0), Position::new(4, 0));

        assert_eq!(path.len(), 11);
        assert!(is_orthogonal_walk(&path));
        assert!(!path.contains(&Position::new(2, 0)));
        assert!(!path.contains(&Position::new(2, 2)));
    }

    #[test]
    fn mover_does_not_block_itself() {
        let mut field = open_field(3, 1);
        field
            .spawn(Unit::new(EntityId(1), Position::new(0, 0), 5, StatBlock::default()))
            .unwrap();
        let config = CombatConfig::default();

        let path = Pathfinder::new(&field, &config)
            .for_unit(EntityId(1))
            .find_path(Position::new(2, 0), Position::new(0, 0));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn defeated_units_do_not_block() {
        let mut field = open_field(3, 1);
        field
            .spawn(Unit::new(EntityId(2), Position::new(1, 0), 5, StatBlock::default()))
            .unwrap();
        let config = CombatConfig::default();
        let start = Position::new(0, 0);
        let goal = Position::new(2, 0);

        assert!(Pathfinder::new(&field, &config).find_path(start, goal).is_empty());
        field.unit_mut(EntityId(2)).unwrap().take_damage(5);
        assert_eq!(Pathfinder::new(&field, &config).find_path(start, goal).len(), 3);
    }

    #[test]
    fn expansion_bound_reports_unreachable() {
        let field = open_field(10, 10);
        let config = CombatConfig::default().with_max_path_expansions(3);

        let path = Pathfinder::new(&field, &config).find_path(Position::new(0, 0), Position::new(9, 9));
        assert!(path.is_empty());
    }

    #[test]
    fn reachable_is_a_diamond_on_open_ground() {
        let field = open_field(9, 9);
        let config = CombatConfig::default();
        let cells = Pathfinder::new(&field, &config).reachable(Position::new(4, 4), 2);

        assert_eq!(cells.len(), 12);
        assert!(!cells.contains(&Position::new(4, 4)));
        assert!(cells.iter().all(|c| c.manhattan(Position::new(4, 4)) <= 2));
    }

    #[test]
    fn reachable_respects_walls() {
        let grid = TileGrid::from_rows(&[".#.", ".#.", "..."]).unwrap();
        let field = Battlefield::new(grid);
        let config = CombatConfig::default();
        let cells = Pathfinder::new(&field, &config).reachable(Position::new(0, 0), 3);

        assert_eq!(
            cells,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 2)]
        );
    }
}
