//! Ranged ring combat behavior

use rand::Rng;

use crate::battle::targeting::filter_valid_targets;
use crate::core::error::Result;
use crate::core::unit::{Behavior, TurnContext, Unit};
use crate::io::events::Event;

/// Fires at one living unit inside a Chebyshev distance band, chosen
/// uniformly at random among the valid candidates.
///
/// With `require_clear_adjacency` set, any blocking unit in the 8-adjacent
/// ring suppresses the shot for the tick: the unit cannot fire point-blank
/// and falls through to the next behavior in its chain.
pub struct RangedRingAttackBehavior {
    min_dist: i32,
    max_dist: i32,
    damage: i32,
    require_clear_adjacency: bool,
}

impl RangedRingAttackBehavior {
    pub fn new(min_dist: i32, max_dist: i32, damage: i32, require_clear_adjacency: bool) -> Self {
        Self {
            min_dist,
            max_dist,
            damage,
            require_clear_adjacency,
        }
    }
}

impl Behavior for RangedRingAttackBehavior {
    fn try_act(&self, unit: &mut Unit, ctx: &mut TurnContext<'_>) -> Result<bool> {
        if self.require_clear_adjacency && ctx.world.has_adjacent_blocking_unit(unit.position()) {
            return Ok(false);
        }

        let in_range_ids =
            ctx.world
                .units_in_chebyshev_ring(unit.position(), self.min_dist, self.max_dist);
        let target_ids = filter_valid_targets(unit.id(), &in_range_ids, &ctx.world);
        if target_ids.is_empty() {
            return Ok(false);
        }

        let target_id = target_ids[ctx.rng.gen_range(0..target_ids.len())];
        ctx.world.change_hp(target_id, -self.damage);
        ctx.events.push(
            ctx.tick,
            Event::UnitAttacked {
                attacker_id: unit.id(),
                target_id,
                damage: self.damage as u32,
                target_hp: ctx.world.unit_hp(target_id).unwrap_or(0) as u32,
            },
        );
        Ok(true)
    }
}
