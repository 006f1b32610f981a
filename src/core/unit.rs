//! Unit entity and the behavior chain that resolves its turn

use rand::RngCore;

use crate::core::coord::Coord;
use crate::core::error::Result;
use crate::core::types::{Tick, UnitId};
use crate::core::world::WorldView;
use crate::io::events::EventLog;

/// Everything a behavior may touch during one turn. Built fresh per unit per
/// tick and never stored beyond the call.
pub struct TurnContext<'a> {
    pub world: WorldView<'a>,
    pub events: &'a mut EventLog,
    pub tick: Tick,
    pub rng: &'a mut dyn RngCore,
}

/// One entry of a unit's priority chain
pub trait Behavior {
    /// Returns `Ok(true)` if the behavior performed an action this turn.
    fn try_act(&self, unit: &mut Unit, ctx: &mut TurnContext<'_>) -> Result<bool>;
}

/// A combat unit on the grid
///
/// Position, hp, and the march target change only through [`World`]
/// mutation primitives; the behavior chain is fixed at construction.
///
/// [`World`]: crate::core::world::World
pub struct Unit {
    id: UnitId,
    type_name: String,
    position: Coord,
    hp: i32,
    blocks_cell: bool,
    march_target: Option<Coord>,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Unit {
    pub fn new(
        id: UnitId,
        type_name: impl Into<String>,
        position: Coord,
        hp: i32,
        blocks_cell: bool,
    ) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            position,
            hp,
            blocks_cell,
            march_target: None,
            behaviors: Vec::new(),
        }
    }

    /// Append a behavior to the chain; earlier entries have priority.
    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn blocks_cell(&self) -> bool {
        self.blocks_cell
    }

    pub fn march_target(&self) -> Option<Coord> {
        self.march_target
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Try each behavior in priority order; the first that acts ends the
    /// turn. Returns whether any behavior acted.
    pub fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> Result<bool> {
        // The chain is moved out for the walk so behaviors can mutate the
        // rest of the unit; it is restored before returning.
        let behaviors = std::mem::take(&mut self.behaviors);
        let mut outcome = Ok(false);
        for behavior in &behaviors {
            match behavior.try_act(self, ctx) {
                Ok(false) => continue,
                result => {
                    outcome = result;
                    break;
                }
            }
        }
        self.behaviors = behaviors;
        outcome
    }

    pub(crate) fn set_hp(&mut self, value: i32) {
        self.hp = value.max(0);
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    pub(crate) fn set_march_target(&mut self, target: Coord) {
        self.march_target = Some(target);
    }

    pub(crate) fn clear_march(&mut self) {
        self.march_target = None;
    }
}
