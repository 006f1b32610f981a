use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("map size must be positive, got {width}x{height}")]
    InvalidMapSize { width: u32, height: u32 },

    #[error("map is not created yet")]
    MapNotCreated,

    #[error("map is already created")]
    MapAlreadyCreated,

    #[error("coordinate ({x}, {y}) is out of map bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("unit {0} hp cannot be negative")]
    NegativeHp(UnitId),

    #[error("duplicate unit id {0}")]
    DuplicateUnitId(UnitId),

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },

    #[error("unknown unit id {0}")]
    UnknownUnit(UnitId),

    #[error("{command}: {field} is out of range")]
    ValueOutOfRange {
        command: &'static str,
        field: &'static str,
    },

    #[error("line {line}: unknown command {keyword:?}")]
    UnknownCommand { line: usize, keyword: String },

    #[error("line {line}: {command} expects {expected} arguments, got {got}")]
    WrongArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid argument {token:?}")]
    InvalidArgument { line: usize, token: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
