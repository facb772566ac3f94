//! Error types for building and feeding an astronomical system

use thiserror::Error;

use crate::simulation::space_point::SpacePoint;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("a body named {0:?} already exists in the system")]
    DuplicateBody(String),

    #[error("body name must not be empty")]
    EmptyName,

    #[error("body {name:?} starts at {position}, outside the accepted coordinate range")]
    CoordinateOutOfRange { name: String, position: SpacePoint },

    #[error("no step count given")]
    MissingSteps,

    #[error("record {record}: unknown body kind {token:?} (expected P or S)")]
    UnknownKind { record: usize, token: String },

    #[error("record {record}: invalid {axis} coordinate {token:?}")]
    InvalidCoordinate {
        record: usize,
        axis: char,
        token: String,
    },

    #[error("record {record}: expected 5 fields, found {found}")]
    TruncatedRecord { record: usize, found: usize },
}
