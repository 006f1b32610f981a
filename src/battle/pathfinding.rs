//! Greedy one-step pathfinding
//!
//! No obstacle avoidance: a marcher ranks the 8 cells around it and takes
//! the best free one, which is enough to slip around a single blocker but
//! not a wall.

use crate::core::coord::Coord;
use crate::core::grid::GridMap;

/// In-bounds neighbor cells of `from`, best step toward `target` first.
///
/// Ranking keys, ascending: Chebyshev distance to the target, then the
/// horizontal offset to the target, then the vertical one. The sort is
/// stable over the fixed row-major enumeration of the 8 neighbors, so
/// mirror-image candidates that tie on all three keys still rank
/// deterministically.
pub fn candidate_steps_sorted(from: Coord, target: Coord, map: &GridMap) -> Vec<Coord> {
    let mut candidates = Vec::with_capacity(8);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let neighbor = Coord::new(from.x + dx, from.y + dy);
            if map.in_bounds(neighbor) {
                candidates.push(neighbor);
            }
        }
    }

    candidates.sort_by_key(|candidate| {
        (
            candidate.chebyshev_distance(target),
            (candidate.x - target.x).abs(),
            (candidate.y - target.y).abs(),
        )
    });
    candidates
}
