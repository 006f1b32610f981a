//! Turn scheduler and command wiring
//!
//! Commands mutate the world; the tick loop then visits every unit in
//! creation order until one side remains, nobody can act, or the tick cap
//! fires.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::battle::units;
use crate::core::coord::Coord;
use crate::core::error::{Result, SkirmishError};
use crate::core::grid::GridMap;
use crate::core::types::{Tick, UnitId};
use crate::core::world::World;
use crate::io::commands::Command;
use crate::io::events::{Event, EventLog, EventRecord};

/// Hard cap on the tick counter, a guard for scenarios that can never
/// resolve
pub const MAX_SIMULATION_TICKS: Tick = 10_000;

pub struct SimulationRunner {
    tick: Tick,
    max_ticks: Tick,
    world: Option<World>,
    events: EventLog,
    rng: ChaCha8Rng,
}

impl SimulationRunner {
    pub fn new(seed: u64) -> Self {
        Self {
            tick: 1,
            max_ticks: MAX_SIMULATION_TICKS,
            world: None,
            events: EventLog::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: Tick) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn alive_units(&self) -> usize {
        self.world.as_ref().map_or(0, World::alive_units_count)
    }

    pub fn events(&self) -> &[EventRecord] {
        self.events.records()
    }

    /// Apply one scenario command to the world.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::CreateMap { width, height } => {
                if self.world.is_some() {
                    return Err(SkirmishError::MapAlreadyCreated);
                }
                self.world = Some(World::new(GridMap::new(width, height)?));
                self.events
                    .push(self.tick, Event::MapCreated { width, height });
            }
            Command::SpawnSwordsman {
                unit_id,
                x,
                y,
                hp,
                strength,
            } => {
                let world = self.world.as_mut().ok_or(SkirmishError::MapNotCreated)?;
                let id = UnitId(unit_id);
                let position = coord("SPAWN_SWORDSMAN", x, y)?;
                let hp = stat("SPAWN_SWORDSMAN", "hp", hp)?;
                let strength = stat("SPAWN_SWORDSMAN", "strength", strength)?;

                let unit = units::swordsman(id, position, hp, strength);
                let unit_type = unit.type_name().to_string();
                world.spawn(unit)?;
                self.events.push(
                    self.tick,
                    Event::UnitSpawned {
                        unit_id: id,
                        unit_type,
                        x,
                        y,
                    },
                );
            }
            Command::SpawnHunter {
                unit_id,
                x,
                y,
                hp,
                agility,
                strength,
                range,
            } => {
                let world = self.world.as_mut().ok_or(SkirmishError::MapNotCreated)?;
                let id = UnitId(unit_id);
                let position = coord("SPAWN_HUNTER", x, y)?;
                let hp = stat("SPAWN_HUNTER", "hp", hp)?;
                let agility = stat("SPAWN_HUNTER", "agility", agility)?;
                let strength = stat("SPAWN_HUNTER", "strength", strength)?;
                let range = stat("SPAWN_HUNTER", "range", range)?;

                let unit = units::hunter(id, position, hp, agility, strength, range);
                let unit_type = unit.type_name().to_string();
                world.spawn(unit)?;
                self.events.push(
                    self.tick,
                    Event::UnitSpawned {
                        unit_id: id,
                        unit_type,
                        x,
                        y,
                    },
                );
            }
            Command::March {
                unit_id,
                target_x,
                target_y,
            } => {
                let world = self.world.as_mut().ok_or(SkirmishError::MapNotCreated)?;
                let id = UnitId(unit_id);
                let from = world
                    .unit_position(id)
                    .ok_or(SkirmishError::UnknownUnit(id))?;
                let target = coord("MARCH", target_x, target_y)?;
                if !world.map().in_bounds(target) {
                    return Err(SkirmishError::OutOfBounds {
                        x: target.x,
                        y: target.y,
                    });
                }

                world.set_unit_march_target(id, target);
                self.events.push(
                    self.tick,
                    Event::MarchStarted {
                        unit_id: id,
                        from_x: from.x as u32,
                        from_y: from.y as u32,
                        target_x,
                        target_y,
                    },
                );
            }
        }
        Ok(())
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Drive the simulation to one of its termination conditions: at most
    /// one unit left alive, a full tick with no action, or the tick cap.
    pub fn run(&mut self) -> Result<()> {
        let world = self.world.as_mut().ok_or(SkirmishError::MapNotCreated)?;

        while world.alive_units_count() > 1 && self.tick < self.max_ticks {
            self.tick += 1;
            let mut any_acted = false;

            for slot in 0..world.slot_count() {
                if world.run_unit_turn(slot, &mut self.events, self.tick, &mut self.rng)? {
                    any_acted = true;
                }
            }

            // Death removal is strictly end-of-tick: units reduced to zero
            // hp earlier in the pass still took their turn above.
            for unit_id in world.remove_dead_units() {
                self.events.push(self.tick, Event::UnitDied { unit_id });
            }

            tracing::debug!(
                "tick {} complete, {} units alive",
                self.tick,
                world.alive_units_count()
            );

            if !any_acted {
                tracing::info!("stalemate at tick {}: no unit acted", self.tick);
                break;
            }
        }

        tracing::info!(
            "simulation finished after {} ticks, {} units alive",
            self.tick,
            world.alive_units_count()
        );
        Ok(())
    }
}

fn coord(command: &'static str, x: u32, y: u32) -> Result<Coord> {
    let x = i32::try_from(x).map_err(|_| SkirmishError::ValueOutOfRange { command, field: "x" })?;
    let y = i32::try_from(y).map_err(|_| SkirmishError::ValueOutOfRange { command, field: "y" })?;
    Ok(Coord::new(x, y))
}

fn stat(command: &'static str, field: &'static str, value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| SkirmishError::ValueOutOfRange { command, field })
}
