//! Tick-stamped simulation facts
//!
//! Events record what happened, never what should happen. They are
//! appended in the order the simulation produced them and rendered either
//! as `[tick] NAME key=value` lines or as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Tick, UnitId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    MapCreated {
        width: u32,
        height: u32,
    },
    UnitSpawned {
        unit_id: UnitId,
        unit_type: String,
        x: u32,
        y: u32,
    },
    MarchStarted {
        unit_id: UnitId,
        from_x: u32,
        from_y: u32,
        target_x: u32,
        target_y: u32,
    },
    UnitMoved {
        unit_id: UnitId,
        x: u32,
        y: u32,
    },
    MarchEnded {
        unit_id: UnitId,
        x: u32,
        y: u32,
    },
    UnitAttacked {
        attacker_id: UnitId,
        target_id: UnitId,
        damage: u32,
        /// Target hp after the hit, already clamped at zero
        target_hp: u32,
    },
    UnitDied {
        unit_id: UnitId,
    },
}

/// One logged fact with the tick it happened on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub tick: Tick,
    pub event: Event,
}

/// Append-only log of simulation facts
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: Tick, event: Event) {
        self.records.push(EventRecord { tick, event });
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.tick)?;
        match &self.event {
            Event::MapCreated { width, height } => {
                write!(f, "MAP_CREATED width={} height={}", width, height)
            }
            Event::UnitSpawned {
                unit_id,
                unit_type,
                x,
                y,
            } => {
                write!(
                    f,
                    "UNIT_SPAWNED unit_id={} unit_type={} x={} y={}",
                    unit_id, unit_type, x, y
                )
            }
            Event::MarchStarted {
                unit_id,
                from_x,
                from_y,
                target_x,
                target_y,
            } => {
                write!(
                    f,
                    "MARCH_STARTED unit_id={} from_x={} from_y={} target_x={} target_y={}",
                    unit_id, from_x, from_y, target_x, target_y
                )
            }
            Event::UnitMoved { unit_id, x, y } => {
                write!(f, "UNIT_MOVED unit_id={} x={} y={}", unit_id, x, y)
            }
            Event::MarchEnded { unit_id, x, y } => {
                write!(f, "MARCH_ENDED unit_id={} x={} y={}", unit_id, x, y)
            }
            Event::UnitAttacked {
                attacker_id,
                target_id,
                damage,
                target_hp,
            } => {
                write!(
                    f,
                    "UNIT_ATTACKED attacker_id={} target_id={} damage={} target_hp={}",
                    attacker_id, target_id, damage, target_hp
                )
            }
            Event::UnitDied { unit_id } => {
                write!(f, "UNIT_DIED unit_id={}", unit_id)
            }
        }
    }
}
