//! March movement behavior

use crate::battle::pathfinding::candidate_steps_sorted;
use crate::core::error::Result;
use crate::core::unit::{Behavior, TurnContext, Unit};
use crate::io::events::Event;

/// Walks a unit one ranked step at a time toward its march target.
///
/// Acts only while a march target is set. The target is cleared on arrival,
/// so a unit that reached its destination stops consuming its turn on
/// movement and falls back to the rest of its chain.
pub struct MoveBehavior {
    steps_per_turn: u32,
}

impl MoveBehavior {
    pub const DEFAULT_STEPS_PER_TURN: u32 = 1;

    pub fn new(steps_per_turn: u32) -> Self {
        Self {
            steps_per_turn: steps_per_turn.max(1),
        }
    }
}

impl Default for MoveBehavior {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS_PER_TURN)
    }
}

impl Behavior for MoveBehavior {
    fn try_act(&self, unit: &mut Unit, ctx: &mut TurnContext<'_>) -> Result<bool> {
        let Some(target) = unit.march_target() else {
            return Ok(false);
        };

        let mut moved = false;
        for _ in 0..self.steps_per_turn {
            let from = unit.position();
            if from == target {
                unit.clear_march();
                break;
            }

            // Blocking units may not step onto an occupied cell;
            // non-blocking units never check occupancy.
            let step = candidate_steps_sorted(from, target, ctx.world.map())
                .into_iter()
                .find(|&to| !unit.blocks_cell() || !ctx.world.map().is_occupied(to));
            let Some(to) = step else {
                break;
            };

            ctx.world.apply_move(unit, to)?;
            ctx.events.push(
                ctx.tick,
                Event::UnitMoved {
                    unit_id: unit.id(),
                    x: to.x as u32,
                    y: to.y as u32,
                },
            );
            moved = true;

            if to == target {
                ctx.events.push(
                    ctx.tick,
                    Event::MarchEnded {
                        unit_id: unit.id(),
                        x: to.x as u32,
                        y: to.y as u32,
                    },
                );
                unit.clear_march();
                break;
            }
        }
        Ok(moved)
    }
}
