//! Typed scenario commands
//!
//! Fields mirror the scenario grammar and stay unsigned; range validation
//! happens when the runner converts them into world state.

use serde::{Deserialize, Serialize};

/// One scenario instruction, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    CreateMap {
        width: u32,
        height: u32,
    },
    SpawnSwordsman {
        unit_id: u32,
        x: u32,
        y: u32,
        hp: u32,
        strength: u32,
    },
    SpawnHunter {
        unit_id: u32,
        x: u32,
        y: u32,
        hp: u32,
        agility: u32,
        strength: u32,
        range: u32,
    },
    March {
        unit_id: u32,
        target_x: u32,
        target_y: u32,
    },
}
