//! Melee combat behavior

use rand::Rng;

use crate::battle::targeting::filter_valid_targets;
use crate::core::error::Result;
use crate::core::unit::{Behavior, TurnContext, Unit};
use crate::io::events::Event;

/// Strikes one living unit in the 8-adjacent ring, chosen uniformly at
/// random among the valid candidates.
pub struct MeleeAttackBehavior {
    damage: i32,
}

impl MeleeAttackBehavior {
    pub fn new(damage: i32) -> Self {
        Self { damage }
    }
}

impl Behavior for MeleeAttackBehavior {
    fn try_act(&self, unit: &mut Unit, ctx: &mut TurnContext<'_>) -> Result<bool> {
        let neighbor_ids = ctx.world.neighboring_units(unit.position());
        let target_ids = filter_valid_targets(unit.id(), &neighbor_ids, &ctx.world);
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
