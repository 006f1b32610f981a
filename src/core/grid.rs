//! Fixed-size occupancy grid
//!
//! Maps each cell to the blocking unit occupying it, or nothing. This is a
//! thin layer: it does not detect conflicting writes; callers own the
//! occupancy invariant.

use crate::core::coord::Coord;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::UnitId;

/// Dense `width x height` cell index
#[derive(Debug, Clone)]
pub struct GridMap {
    width: u32,
    height: u32,
    cells: Vec<Option<UnitId>>,
}

impl GridMap {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SkirmishError::InvalidMapSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, coordinate: Coord) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as u32) < self.width
            && (coordinate.y as u32) < self.height
    }

    /// Occupant of the cell; `None` for empty and out-of-bounds cells
    pub fn occupant_id(&self, coordinate: Coord) -> Option<UnitId> {
        if !self.in_bounds(coordinate) {
            return None;
        }
        self.cells[self.index_of(coordinate)]
    }

    pub fn is_occupied(&self, coordinate: Coord) -> bool {
        self.occupant_id(coordinate).is_some()
    }

    pub fn set_occupied(&mut self, coordinate: Coord, unit_id: UnitId) -> Result<()> {
        if !self.in_bounds(coordinate) {
            return Err(SkirmishError::OutOfBounds {
                x: coordinate.x,
                y: coordinate.y,
            });
        }
        let index = self.index_of(coordinate);
        self.cells[index] = Some(unit_id);
        Ok(())
    }

    /// No-op when out of bounds
    pub fn clear(&mut self, coordinate: Coord) {
        if !self.in_bounds(coordinate) {
            return;
        }
        let index = self.index_of(coordinate);
        self.cells[index] = None;
    }

    fn index_of(&self, coordinate: Coord) -> usize {
        coordinate.y as usize * self.width as usize + coordinate.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(GridMap::new(0, 5).is_err());
        assert!(GridMap::new(5, 0).is_err());
    }

    #[test]
    fn test_in_bounds() {
        let map = GridMap::new(3, 2).unwrap();
        assert!(map.in_bounds(Coord::new(0, 0)));
        assert!(map.in_bounds(Coord::new(2, 1)));
        assert!(!map.in_bounds(Coord::new(3, 1)));
        assert!(!map.in_bounds(Coord::new(0, 2)));
        assert!(!map.in_bounds(Coord::new(-1, 0)));
    }

    #[test]
    fn test_set_and_clear_occupancy() {
        let mut map = GridMap::new(4, 4).unwrap();
        let cell = Coord::new(2, 3);
        assert!(!map.is_occupied(cell));

        map.set_occupied(cell, UnitId(9)).unwrap();
        assert_eq!(map.occupant_id(cell), Some(UnitId(9)));

        map.clear(cell);
        assert_eq!(map.occupant_id(cell), None);
    }

    #[test]
    fn test_out_of_bounds_occupant_is_none() {
        let map = GridMap::new(4, 4).unwrap();
        assert_eq!(map.occupant_id(Coord::new(-1, 2)), None);
        assert_eq!(map.occupant_id(Coord::new(4, 0)), None);
    }

    #[test]
    fn test_set_out_of_bounds_fails() {
        let mut map = GridMap::new(4, 4).unwrap();
        assert!(map.set_occupied(Coord::new(4, 4), UnitId(1)).is_err());
    }

    #[test]
    fn test_clear_out_of_bounds_is_noop() {
        let mut map = GridMap::new(4, 4).unwrap();
        map.set_occupied(Coord::new(0, 0), UnitId(1)).unwrap();
        map.clear(Coord::new(-5, -5));
        assert_eq!(map.occupant_id(Coord::new(0, 0)), Some(UnitId(1)));
    }
}
