pub mod coord;
pub mod error;
pub mod grid;
pub mod types;
pub mod unit;
pub mod world;

pub use coord::Coord;
pub use grid::GridMap;
pub use unit::{Behavior, TurnContext, Unit};
pub use world::{World, WorldView};
