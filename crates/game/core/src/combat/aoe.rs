//! Area-of-effect shapes.
//!
//! An AoE of radius `n` is the diamond of cells at Manhattan distance
//! `1..=n` from a center. The center itself is never part of the ring; the
//! primary impact covers it.

use crate::state::Position;

/// Offsets of a diamond ring of Manhattan radius `radius`, center excluded.
///
/// Offsets are produced column by column (`x` from `-radius` to `radius`,
/// then `y` ascending) so effect application order is reproducible.
pub fn ring_offsets(radius: u32) -> impl Iterator<Item = Position> {
    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    (-r..=r).flat_map(move |i| {
        let height = r - i.abs();
        (-height..=height)
            .map(move |j| Position::new(i, j))
            .filter(|offset| *offset != Position::ORIGIN)
    })
}

/// Cells of the ring of radius `radius` around `center`.
pub fn ring(center: Position, radius: u32) -> impl Iterator<Item = Position> {
    ring_offsets(radius).map(move |offset| center + offset)
}

/// Number of cells in a ring: `2n^2 + 2n`, `None` if that overflows.
pub fn ring_size(radius: u32) -> Option<usize> {
    let n = usize::try_from(radius).ok()?;
    n.checked_mul(n)?.checked_add(n)?.checked_mul(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn radius_zero_is_empty() {
        assert_eq!(ring_offsets(0).count(), 0);
        assert_eq!(ring_size(0), Some(0));
    }

    #[test]
    fn radius_one_is_the_four_neighbours() {
        let cells: BTreeSet<_> = ring(Position::new(5, 5), 1).collect();
        let expected: BTreeSet<_> = [
            Position::new(4, 5),
            Position::new(6, 5),
            Position::new(5, 4),
            Position::new(5, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn ring_matches_manhattan_ball_without_center() {
        for radius in 0..6u32 {
            let offsets: Vec<_> = ring_offsets(radius).collect();
            let unique: BTreeSet<_> = offsets.iter().copied().collect();
            assert_eq!(offsets.len(), unique.len(), "duplicate offsets at r={radius}");
            assert_eq!(Some(offsets.len()), ring_size(radius));

            let r = radius as i32;
            for x in -r..=r {
                for y in -r..=r {
                    let offset = Position::new(x, y);
                    let norm = offset.norm();
                    assert_eq!(
                        unique.contains(&offset),
                        (1..=radius).contains(&norm),
                        "offset {offset} at r={radius}"
                    );
                }
            }
        }
    }

    #[test]
    fn ring_size_reports_overflow() {
        assert_eq!(ring_size(64), Some(8320));
        assert_eq!(ring_size(u32::MAX), None);
    }
}
