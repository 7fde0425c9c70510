//! Attack types and the policy table that drives them.
//!
//! Validation, execution and target enumeration all read the same
//! [`AttackPolicy`], so an attack type's reach and footprint are defined in
//! exactly one place.

use crate::config::CombatConfig;
use crate::env::GridOracle;
use crate::state::Position;

use super::aoe;

/// Geometric family of an attack.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    /// Centered on the attacker (buffs, novas).
    #[strum(to_string = "self", serialize = "self_only")]
    SelfOnly,
    /// One orthogonally adjacent cell, plus AoE ring.
    Melee,
    /// Any cell within `range`, plus AoE ring.
    Ranged,
    /// Adjacent cell and the cell directly behind it.
    Pierce,
    /// Adjacent cell only; meant for displacement effects.
    Push,
    /// Uninitialized sentinel. Never valid, never executed.
    #[default]
    Invalid,
}

/// Which cells an attack may be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRule {
    /// Only the source's own cell.
    Source,
    /// Cells at Manhattan distance exactly 1 that the grid accepts.
    Adjacent,
    /// Cells within the attack's range that the grid accepts.
    WithinRange,
    /// Nothing.
    Never,
}

impl TargetRule {
    /// Whether `target` satisfies this rule for an attack from `source`.
    pub fn admits<G>(self, source: Position, target: Position, range: u32, grid: &G) -> bool
    where
        G: GridOracle + ?Sized,
    {
        let distance = source.manhattan(target);
        match self {
            Self::Source => target == source,
            Self::Adjacent => distance == 1 && grid.is_position_valid(target),
            Self::WithinRange => distance <= range && grid.is_position_valid(target),
            Self::Never => false,
        }
    }

    /// Largest Manhattan distance this rule can admit, `None` if it admits nothing.
    pub fn reach(self, range: u32) -> Option<u32> {
        match self {
            Self::Source => Some(0),
            Self::Adjacent => Some(1),
            Self::WithinRange => Some(range),
            Self::Never => None,
        }
    }
}

/// Which cells receive the effect once a target is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactShape {
    /// The source (only when `affect_self`) and the AoE ring around it.
    SourceCentered,
    /// The target and the AoE ring around it.
    PrimaryWithRing,
    /// The target and its reflection away from the source; no ring.
    PrimaryAndReflection,
    /// The target alone; no ring.
    PrimaryOnly,
    /// Nothing.
    Empty,
}

impl ImpactShape {
    /// Cells affected, in application order.
    pub fn cells(
        self,
        source: Position,
        target: Position,
        aoe_radius: u32,
        affect_self: bool,
    ) -> Vec<Position> {
        match self {
            Self::SourceCentered => {
                let mut cells = Vec::with_capacity(capacity(aoe_radius));
                if affect_self {
                    cells.push(source);
                }
                cells.extend(aoe::ring(source, aoe_radius));
                cells
            }
            // Ring around the target, not the source
            Self::PrimaryWithRing => {
                let mut cells = Vec::with_capacity(capacity(aoe_radius));
                cells.push(target);
                cells.extend(aoe::ring(target, aoe_radius));
                cells
            }
            // The far cell is not validated against the grid
            Self::PrimaryAndReflection => vec![target, target + (target - source)],
            Self::PrimaryOnly => vec![target],
            Self::Empty => Vec::new(),
        }
    }
}

/// Preallocation for a ring plus its center, capped at the largest legal reach.
fn capacity(aoe_radius: u32) -> usize {
    aoe::ring_size(aoe_radius.min(CombatConfig::MAX_ATTACK_REACH)).unwrap_or(0) + 1
}

/// Targeting rule and impact footprint of one attack type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackPolicy {
    pub rule: TargetRule,
    pub shape: ImpactShape,
}

impl AttackType {
    /// The policy row for this type.
    pub const fn policy(self) -> AttackPolicy {
        let (rule, shape) = match self {
            Self::SelfOnly => (TargetRule::Source, ImpactShape::SourceCentered),
            Self::Melee => (TargetRule::Adjacent, ImpactShape::PrimaryWithRing),
            Self::Ranged => (TargetRule::WithinRange, ImpactShape::PrimaryWithRing),
            Self::Pierce => (TargetRule::Adjacent, ImpactShape::PrimaryAndReflection),
            Self::Push => (TargetRule::Adjacent, ImpactShape::PrimaryOnly),
            Self::Invalid => (TargetRule::Never, ImpactShape::Empty),
        };
        AttackPolicy { rule, shape }
    }

    pub fn is_executable(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TileGrid;
    use std::str::FromStr;

    #[test]
    fn adjacent_types_share_the_same_rule() {
        for kind in [AttackType::Melee, AttackType::Pierce, AttackType::Push] {
            assert_eq!(kind.policy().rule, TargetRule::Adjacent);
        }
    }

    #[test]
    fn invalid_admits_nothing() {
        let grid = TileGrid::new(3, 3);
        let rule = AttackType::Invalid.policy().rule;
        let source = Position::new(1, 1);
        for x in 0..3 {
            for y in 0..3 {
                assert!(!rule.admits(source, Position::new(x, y), 10, &grid));
            }
        }
        assert_eq!(rule.reach(10), None);
    }

    #[test]
    fn source_rule_ignores_grid() {
        let grid = TileGrid::new(1, 1);
        let outside = Position::new(-3, -3);
        assert!(TargetRule::Source.admits(outside, outside, 0, &grid));
    }

    #[test]
    fn ranged_rule_includes_own_cell_and_range_boundary() {
        let grid = TileGrid::new(9, 9);
        let source = Position::new(4, 4);
        let rule = TargetRule::WithinRange;
        assert!(rule.admits(source, source, 3, &grid));
        assert!(rule.admits(source, Position::new(6, 5), 3, &grid));
        assert!(!rule.admits(source, Position::new(6, 6), 3, &grid));
    }

    #[test]
    fn pierce_shape_reflects_away_from_source() {
        let cells = ImpactShape::PrimaryAndReflection.cells(
            Position::new(2, 2),
            Position::new(2, 1),
            3,
            true,
        );
        assert_eq!(cells, vec![Position::new(2, 1), Position::new(2, 0)]);
    }

    #[test]
    fn self_shape_only_includes_source_when_asked() {
        let source = Position::new(3, 3);
        let with = ImpactShape::SourceCentered.cells(source, source, 1, true);
        let without = ImpactShape::SourceCentered.cells(source, source, 1, false);
        assert_eq!(with.len(), 5);
        assert_eq!(with[0], source);
        assert_eq!(without.len(), 4);
        assert!(!without.contains(&source));
    }

    #[test]
    fn parses_type_names() {
        assert_eq!(AttackType::from_str("self").unwrap(), AttackType::SelfOnly);
        assert_eq!(AttackType::from_str("Pierce").unwrap(), AttackType::Pierce);
        assert_eq!(AttackType::default(), AttackType::Invalid);
    }
}
