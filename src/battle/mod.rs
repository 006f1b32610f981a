//! Combat behaviors and the helpers they share
//!
//! Each behavior implements the single `try_act` capability; units chain
//! them in a fixed priority order and the first to act wins the turn.

pub mod melee;
pub mod movement;
pub mod pathfinding;
pub mod ranged;
pub mod targeting;
pub mod units;

// Re-exports for convenient access
pub use melee::MeleeAttackBehavior;
pub use movement::MoveBehavior;
pub use pathfinding::candidate_steps_sorted;
pub use ranged::RangedRingAttackBehavior;
pub use targeting::filter_valid_targets;
pub use units::{hunter, swordsman, HUNTER_MIN_RANGE};
