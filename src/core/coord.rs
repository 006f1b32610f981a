//! Grid coordinates and the Chebyshev distance metric
//!
//! Adjacency and weapon ranges are defined in Chebyshev distance, so the
//! 8 cells surrounding a coordinate form the distance-1 ring.

use serde::{Deserialize, Serialize};

/// 2D grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`
    pub fn chebyshev_distance(self, other: Coord) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy)
    }
}
