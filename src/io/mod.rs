//! Boundary data contracts: scenario commands in, events out

pub mod commands;
pub mod events;
pub mod scenario;

pub use commands::Command;
pub use events::{Event, EventLog, EventRecord};
pub use scenario::parse_scenario;
