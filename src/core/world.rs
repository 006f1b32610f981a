//! Authoritative owner of the grid and the unit population
//!
//! Units live in a creation-ordered arena of slots. Removal tombstones a
//! slot instead of compacting, so slot indices held across a removal stay
//! valid. Every mutation primitive keeps the id index and the occupancy
//! grid consistent with the arena.

use std::collections::HashMap;

use rand::RngCore;

use crate::core::coord::Coord;
use crate::core::error::{Result, SkirmishError};
use crate::core::grid::GridMap;
use crate::core::types::{Tick, UnitId};
use crate::core::unit::{TurnContext, Unit};
use crate::io::events::EventLog;

pub struct World {
    map: GridMap,
    units: Vec<Option<Unit>>,
    by_id: HashMap<UnitId, usize>,
}

impl World {
    pub fn new(map: GridMap) -> Self {
        Self {
            map,
            units: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Admit a unit into the world. All checks run before any mutation, so
    /// a rejected spawn leaves the world untouched.
    pub fn spawn(&mut self, unit: Unit) -> Result<()> {
        if unit.hp() < 0 {
            return Err(SkirmishError::NegativeHp(unit.id()));
        }
        if self.by_id.contains_key(&unit.id()) {
            return Err(SkirmishError::DuplicateUnitId(unit.id()));
        }
        let position = unit.position();
        if !self.map.in_bounds(position) {
            return Err(SkirmishError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        if unit.blocks_cell() && self.map.is_occupied(position) {
            return Err(SkirmishError::CellOccupied {
                x: position.x,
                y: position.y,
            });
        }

        if unit.blocks_cell() {
            self.map.set_occupied(position, unit.id())?;
        }
        self.by_id.insert(unit.id(), self.units.len());
        self.units.push(Some(unit));
        Ok(())
    }

    /// Ids of all units in the 8-adjacent ring, blocking or not, in
    /// creation order.
    pub fn neighboring_units(&self, center: Coord) -> Vec<UnitId> {
        self.units_in_chebyshev_ring(center, 1, 1)
    }

    /// Ids of all units whose Chebyshev distance from `center` lies in
    /// `[min_d, max_d]`, in creation order, not distance order.
    pub fn units_in_chebyshev_ring(&self, center: Coord, min_d: i32, max_d: i32) -> Vec<UnitId> {
        let mut result = Vec::new();
        for unit in self.units.iter().flatten() {
            let distance = center.chebyshev_distance(unit.position());
            if distance >= min_d && distance <= max_d {
                result.push(unit.id());
            }
        }
        result
    }

    pub fn has_adjacent_blocking_unit(&self, center: Coord) -> bool {
        self.neighboring_units(center)
            .into_iter()
            .any(|id| self.unit_blocks_cell(id))
    }

    pub fn unit_hp(&self, unit_id: UnitId) -> Option<i32> {
        self.unit(unit_id).map(Unit::hp)
    }

    pub fn unit_position(&self, unit_id: UnitId) -> Option<Coord> {
        self.unit(unit_id).map(Unit::position)
    }

    pub fn unit_blocks_cell(&self, unit_id: UnitId) -> bool {
        self.unit(unit_id).map_or(false, Unit::blocks_cell)
    }

    /// Move a unit, clearing its old cell and claiming the new one in the
    /// same operation. The move itself is unconditional; callers verify the
    /// destination is legal before calling.
    pub fn apply_move(&mut self, unit: &mut Unit, to: Coord) -> Result<()> {
        if unit.blocks_cell() {
            if !self.map.in_bounds(to) {
                return Err(SkirmishError::OutOfBounds { x: to.x, y: to.y });
            }
            self.map.clear(unit.position());
            self.map.set_occupied(to, unit.id())?;
        }
        unit.set_position(to);
        Ok(())
    }

    /// Add `delta` to a unit's hp, clamping at zero. Unknown ids are
    /// ignored: the unit may have died and been removed earlier this tick.
    pub fn change_unit_hp(&mut self, unit_id: UnitId, delta: i32) {
        if let Some(unit) = self.unit_mut(unit_id) {
            let hp = unit.hp();
            unit.set_hp(hp.saturating_add(delta));
        }
    }

    pub fn set_unit_march_target(&mut self, unit_id: UnitId, target: Coord) {
        if let Some(unit) = self.unit_mut(unit_id) {
            unit.set_march_target(target);
        }
    }

    pub fn clear_unit_march(&mut self, unit_id: UnitId) {
        if let Some(unit) = self.unit_mut(unit_id) {
            unit.clear_march();
        }
    }

    /// Remove every unit at zero hp, returning the removed ids in scan
    /// order. The return value is the authoritative source for death
    /// notifications.
    pub fn remove_dead_units(&mut self) -> Vec<UnitId> {
        let dead: Vec<UnitId> = self
            .units
            .iter()
            .flatten()
            .filter(|unit| unit.hp() <= 0)
            .map(Unit::id)
            .collect();
        for &unit_id in &dead {
            self.remove_unit(unit_id);
        }
        dead
    }

    pub fn alive_units_count(&self) -> usize {
        self.units.iter().flatten().filter(|u| u.is_alive()).count()
    }

    /// Number of slots in creation order, tombstones included.
    pub fn slot_count(&self) -> usize {
        self.units.len()
    }

    /// Run one unit's behavior chain. The unit is detached from its slot
    /// for the duration of the call so its behaviors can mutate the rest of
    /// the world, and reattached before returning. Tombstoned slots report
    /// no action.
    pub fn run_unit_turn(
        &mut self,
        slot: usize,
        events: &mut EventLog,
        tick: Tick,
        rng: &mut dyn RngCore,
    ) -> Result<bool> {
        let Some(mut unit) = self.units.get_mut(slot).and_then(|s| s.take()) else {
            return Ok(false);
        };
        let outcome = {
            let mut ctx = TurnContext {
                world: WorldView::new(self),
                events,
                tick,
                rng,
            };
            unit.take_turn(&mut ctx)
        };
        self.units[slot] = Some(unit);
        outcome
    }

    fn unit(&self, unit_id: UnitId) -> Option<&Unit> {
        self.by_id
            .get(&unit_id)
            .and_then(|&slot| self.units[slot].as_ref())
    }

    fn unit_mut(&mut self, unit_id: UnitId) -> Option<&mut Unit> {
        let slot = *self.by_id.get(&unit_id)?;
        self.units[slot].as_mut()
    }

    fn remove_unit(&mut self, unit_id: UnitId) {
        let Some(&slot) = self.by_id.get(&unit_id) else {
            return;
        };
        let Some(unit) = self.units[slot].take() else {
            return;
        };
        if unit.blocks_cell() {
            self.map.clear(unit.position());
        }
        self.by_id.remove(&unit_id);
    }
}

/// Restricted facade handed to behaviors: combat, movement, and queries,
/// but no spawn, removal, or map construction.
pub struct WorldView<'a> {
    world: &'a mut World,
}

impl<'a> WorldView<'a> {
    pub fn new(world: &'a mut World) -> Self {
        Self { world }
    }

    pub fn map(&self) -> &GridMap {
        self.world.map()
    }

    pub fn neighboring_units(&self, center: Coord) -> Vec<UnitId> {
        self.world.neighboring_units(center)
    }

    pub fn units_in_chebyshev_ring(&self, center: Coord, min_d: i32, max_d: i32) -> Vec<UnitId> {
        self.world.units_in_chebyshev_ring(center, min_d, max_d)
    }

    pub fn has_adjacent_blocking_unit(&self, center: Coord) -> bool {
        self.world.has_adjacent_blocking_unit(center)
    }

    pub fn apply_move(&mut self, unit: &mut Unit, to: Coord) -> Result<()> {
        self.world.apply_move(unit, to)
    }

    pub fn change_hp(&mut self, unit_id: UnitId, delta: i32) {
        self.world.change_unit_hp(unit_id, delta);
    }

    pub fn set_march_target(&mut self, unit_id: UnitId, target: Coord) {
        self.world.set_unit_march_target(unit_id, target);
    }

    pub fn clear_march(&mut self, unit_id: UnitId) {
        self.world.clear_unit_march(unit_id);
    }

    pub fn unit_hp(&self, unit_id: UnitId) -> Option<i32> {
        self.world.unit_hp(unit_id)
    }

    pub fn unit_position(&self, unit_id: UnitId) -> Option<Coord> {
        self.world.unit_position(unit_id)
    }

    pub fn unit_blocks_cell(&self, unit_id: UnitId) -> bool {
        self.world.unit_blocks_cell(unit_id)
    }
}
