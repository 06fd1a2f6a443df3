use thiserror::Error;

use crate::core::types::Position;

#[derive(Error, Debug)]
pub enum DarwinError {
    #[error("Species '{species}' fetched instruction {index} but its program has {len}")]
    ProgramCounterOutOfRange {
        species: String,
        index: usize,
        len: usize,
    },

    #[error("Species '{species}' instruction {at} jumps to {target}, past the end of a {len}-instruction program")]
    JumpTargetOutOfRange {
        species: String,
        at: usize,
        target: usize,
        len: usize,
    },

    #[error("Species symbol '{0}' must be a single visible character other than '-'")]
    InvalidSymbol(String),

    #[error("Species '{0}' has an empty program")]
    EmptyProgram(String),

    #[error("World must have at least one row and one column and fit in memory, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Position {position} is outside the {rows}x{cols} world")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("Cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Species '{0}' is defined more than once")]
    DuplicateSpecies(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Creature of species '{species}' made no progress within {budget} steps")]
    NoProgress { species: String, budget: usize },

    #[error("Internal error: hop from {0} into a wall")]
    HopIntoWall(Position),

    #[error("Internal error: hop from {from} into occupied cell {to}")]
    HopIntoOccupied { from: Position, to: Position },

    #[error("Internal error: scheduled slot {0} is empty")]
    ScheduleDesync(Position),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl DarwinError {
    /// True for violations of the world/interpreter contract, as opposed to
    /// bad programs or scenarios.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::HopIntoWall(_) | Self::HopIntoOccupied { .. } | Self::ScheduleDesync(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DarwinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_classification() {
        assert!(DarwinError::HopIntoWall(Position::new(0, 0)).is_internal());
        assert!(DarwinError::ScheduleDesync(Position::new(1, 2)).is_internal());
        assert!(!DarwinError::NoProgress { species: "r".into(), budget: 10 }.is_internal());
        assert!(!DarwinError::CellOccupied(Position::new(0, 0)).is_internal());
    }

    #[test]
    fn test_messages_name_the_species() {
        let err = DarwinError::ProgramCounterOutOfRange {
            species: "h".into(),
            index: 2,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Species 'h' fetched instruction 2 but its program has 2"
        );
    }
}
