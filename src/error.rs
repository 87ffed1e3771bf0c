// src/error.rs

use thiserror::Error;

use crate::map::GridPos;

/// Errors raised while editing, loading, or saving a room map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("grid dimensions {width}x{height} are outside 1..={max}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("room {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: GridPos,
        width: usize,
        height: usize,
    },

    #[error("a room cannot be connected to itself ({0})")]
    SelfConnection(GridPos),

    #[error("please select a connection type")]
    MissingConnectionType,

    #[error("no connection is waiting for a type")]
    NoPendingConnection,

    #[error("no map is loaded")]
    NoDocument,

    #[error("malformed map: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
