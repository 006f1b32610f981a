//! End-to-end scenario runs through the parser and the simulation loop

use skirmish::core::error::SkirmishError;
use skirmish::core::types::UnitId;
use skirmish::io::events::{Event, EventRecord};
use skirmish::io::scenario::parse_scenario;
use skirmish::runner::SimulationRunner;

fn run_scenario(text: &str, seed: u64) -> SimulationRunner {
    let commands = parse_scenario(text.as_bytes()).unwrap();
    let mut runner = SimulationRunner::new(seed);
    runner.apply_all(commands).unwrap();
    runner.run().unwrap();
    runner
}

fn attacked(tick: u64, attacker: u32, target: u32, damage: u32, target_hp: u32) -> EventRecord {
    EventRecord {
        tick,
        event: Event::UnitAttacked {
            attacker_id: UnitId(attacker),
            target_id: UnitId(target),
            damage,
            target_hp,
        },
    }
}

fn moved(tick: u64, unit: u32, x: u32, y: u32) -> EventRecord {
    EventRecord {
        tick,
        event: Event::UnitMoved {
            unit_id: UnitId(unit),
            x,
            y,
        },
    }
}

#[test]
fn test_swordsman_duel_event_sequence() {
    let runner = run_scenario(
        "CREATE_MAP 5 5\n\
         SPAWN_SWORDSMAN 1 0 0 10 3\n\
         SPAWN_SWORDSMAN 2 4 4 10 3\n\
         MARCH 1 4 4\n",
        0,
    );

    let expected = vec![
        EventRecord {
            tick: 1,
            event: Event::MapCreated {
                width: 5,
                height: 5,
            },
        },
        EventRecord {
            tick: 1,
            event: Event::UnitSpawned {
                unit_id: UnitId(1),
                unit_type: "Swordsman".to_string(),
                x: 0,
                y: 0,
            },
        },
        EventRecord {
            tick: 1,
            event: Event::UnitSpawned {
                unit_id: UnitId(2),
                unit_type: "Swordsman".to_string(),
                x: 4,
                y: 4,
            },
        },
        EventRecord {
            tick: 1,
            event: Event::MarchStarted {
                unit_id: UnitId(1),
                from_x: 0,
                from_y: 0,
                target_x: 4,
                target_y: 4,
            },
        },
        // The marcher closes the diagonal; the defender strikes first on
        // the tick the marcher arrives adjacent, because the marcher spent
        // that turn moving.
        moved(2, 1, 1, 1),
        moved(3, 1, 2, 2),
        moved(4, 1, 3, 3),
        attacked(4, 2, 1, 3, 7),
        attacked(5, 1, 2, 3, 7),
        attacked(5, 2, 1, 3, 4),
        attacked(6, 1, 2, 3, 4),
        attacked(6, 2, 1, 3, 1),
        attacked(7, 1, 2, 3, 1),
        attacked(7, 2, 1, 3, 0),
        EventRecord {
            tick: 7,
            event: Event::UnitDied {
                unit_id: UnitId(1),
            },
        },
    ];

    assert_eq!(runner.events(), expected.as_slice());
    assert_eq!(runner.alive_units(), 1);
    assert_eq!(runner.tick(), 7);
}

#[test]
fn test_hunter_shoots_from_inside_its_ring() {
    let runner = run_scenario(
        "CREATE_MAP 10 1\n\
         SPAWN_HUNTER 1 0 0 10 5 2 4\n\
         SPAWN_SWORDSMAN 2 3 0 10 3\n",
        0,
    );

    let combat: Vec<_> = runner
        .events()
        .iter()
        .filter(|r| !matches!(r.event, Event::MapCreated { .. } | Event::UnitSpawned { .. }))
        .cloned()
        .collect();

    assert_eq!(
        combat,
        vec![
            attacked(2, 1, 2, 5, 5),
            attacked(3, 1, 2, 5, 0),
            EventRecord {
                tick: 3,
                event: Event::UnitDied {
                    unit_id: UnitId(2),
                },
            },
        ]
    );
    assert_eq!(runner.alive_units(), 1);
}

#[test]
fn test_cornered_hunter_never_fires_its_bow() {
    let runner = run_scenario(
        "CREATE_MAP 4 4\n\
         SPAWN_HUNTER 1 0 0 20 5 2 3\n\
         SPAWN_SWORDSMAN 2 1 1 8 3\n",
        0,
    );

    // The adjacent blocker suppresses the ranged behavior every tick, so
    // all hunter damage is melee strength, never agility.
    let hunter_attacks: Vec<u32> = runner
        .events()
        .iter()
        .filter_map(|r| match r.event {
            Event::UnitAttacked {
                attacker_id: UnitId(1),
                damage,
                ..
            } => Some(damage),
            _ => None,
        })
        .collect();
    assert!(!hunter_attacks.is_empty());
    assert!(hunter_attacks.iter().all(|&damage| damage == 2));

    let deaths: Vec<_> = runner
        .events()
        .iter()
        .filter(|r| matches!(r.event, Event::UnitDied { .. }))
        .collect();
    assert_eq!(deaths.len(), 1);
    assert!(matches!(
        deaths[0].event,
        Event::UnitDied {
            unit_id: UnitId(2)
        }
    ));
}

#[test]
fn test_unreachable_units_stalemate_quickly() {
    let runner = run_scenario(
        "CREATE_MAP 3 3\n\
         SPAWN_SWORDSMAN 1 0 0 10 3\n\
         SPAWN_SWORDSMAN 2 2 2 10 3\n",
        0,
    );

    // Nobody has a target or an order: the first full tick with no action
    // ends the loop, far below the tick cap.
    assert_eq!(runner.tick(), 2);
    assert_eq!(runner.alive_units(), 2);
    assert!(runner
        .events()
        .iter()
        .all(|r| matches!(r.event, Event::MapCreated { .. } | Event::UnitSpawned { .. })));
}

#[test]
fn test_unit_reduced_to_zero_hp_still_acts_before_the_sweep() {
    let runner = run_scenario(
        "CREATE_MAP 3 3\n\
         SPAWN_SWORDSMAN 1 0 0 10 20\n\
         SPAWN_SWORDSMAN 2 1 1 5 3\n",
        0,
    );

    let combat: Vec<_> = runner
        .events()
        .iter()
        .filter(|r| !matches!(r.event, Event::MapCreated { .. } | Event::UnitSpawned { .. }))
        .cloned()
        .collect();

    // Unit 2 is dropped to zero before its turn but still strikes back;
    // it is only removed at the end of the tick.
    assert_eq!(
        combat,
        vec![
            attacked(2, 1, 2, 20, 0),
            attacked(2, 2, 1, 3, 7),
            EventRecord {
                tick: 2,
                event: Event::UnitDied {
                    unit_id: UnitId(2),
                },
            },
        ]
    );
}

#[test]
fn test_duplicate_spawn_aborts_without_partial_state() {
    let commands = parse_scenario(
        "CREATE_MAP 5 5\n\
         SPAWN_SWORDSMAN 1 0 0 10 3\n\
         SPAWN_SWORDSMAN 1 2 2 10 3\n"
            .as_bytes(),
    )
    .unwrap();

    let mut runner = SimulationRunner::new(0);
    let err = runner.apply_all(commands).unwrap_err();
    assert!(matches!(err, SkirmishError::DuplicateUnitId(UnitId(1))));

    // The rejected spawn left no trace: one unit, one spawn event.
    assert_eq!(runner.alive_units(), 1);
    let spawns = runner
        .events()
        .iter()
        .filter(|r| matches!(r.event, Event::UnitSpawned { .. }))
        .count();
    assert_eq!(spawns, 1);
}

#[test]
fn test_spawn_onto_occupied_cell_is_rejected() {
    let commands = parse_scenario(
        "CREATE_MAP 5 5\n\
         SPAWN_SWORDSMAN 1 2 2 10 3\n\
         SPAWN_HUNTER 2 2 2 10 5 1 4\n"
            .as_bytes(),
    )
    .unwrap();

    let mut runner = SimulationRunner::new(0);
    let err = runner.apply_all(commands).unwrap_err();
    assert!(matches!(err, SkirmishError::CellOccupied { x: 2, y: 2 }));
    assert_eq!(runner.alive_units(), 1);
}

#[test]
fn test_same_seed_reproduces_the_event_log() {
    let scenario = "CREATE_MAP 9 9\n\
                    SPAWN_HUNTER 1 4 4 30 3 1 4\n\
                    SPAWN_SWORDSMAN 2 2 2 10 2\n\
                    SPAWN_SWORDSMAN 3 6 6 10 2\n";

    // Two targets sit in the hunter's ring, so every shot draws from the
    // runner's seeded generator.
    let first = run_scenario(scenario, 42);
    let second = run_scenario(scenario, 42);
    assert_eq!(first.events(), second.events());
    assert_eq!(first.alive_units(), 1);
}
