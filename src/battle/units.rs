//! Unit factories
//!
//! A unit type is a display name, a blocking flag, and a behavior chain;
//! the chain order is the type's attack-over-movement priority.

use crate::battle::melee::MeleeAttackBehavior;
use crate::battle::movement::MoveBehavior;
use crate::battle::ranged::RangedRingAttackBehavior;
use crate::core::coord::Coord;
use crate::core::types::UnitId;
use crate::core::unit::Unit;

/// Minimum ring distance of every hunter: adjacent cells are melee range.
pub const HUNTER_MIN_RANGE: i32 = 2;

/// Melee fighter: strikes an adjacent enemy, otherwise marches.
pub fn swordsman(id: UnitId, position: Coord, hp: i32, strength: i32) -> Unit {
    let mut unit = Unit::new(id, "Swordsman", position, hp, true);
    unit.add_behavior(Box::new(MeleeAttackBehavior::new(strength)));
    unit.add_behavior(Box::new(MoveBehavior::default()));
    unit
}

/// Ranged fighter: shoots inside its ring while no blocking unit is
/// adjacent, falls back to melee when cornered, and marches last.
pub fn hunter(
    id: UnitId,
    position: Coord,
    hp: i32,
    agility: i32,
    strength: i32,
    range: i32,
) -> Unit {
    let mut unit = Unit::new(id, "Hunter", position, hp, true);
    unit.add_behavior(Box::new(RangedRingAttackBehavior::new(
        HUNTER_MIN_RANGE,
        range,
        agility,
        true,
    )));
    unit.add_behavior(Box::new(MeleeAttackBehavior::new(strength)));
    unit.add_behavior(Box::new(MoveBehavior::default()));
    unit
}
