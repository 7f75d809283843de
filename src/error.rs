use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RTreeError {
    /// The node size (maximum fanout) must be at least 2.
    #[error("Invalid node size {0}: every node must hold at least 2 children")]
    InvalidFanout(usize),

    /// A parent node was requested for an empty group of children.
    #[error("Cannot compute the bounding rectangle of an empty group")]
    EmptyGroup,

    /// A point passed to the Hilbert mapper lies outside the curve's grid.
    #[error("Coordinate ({x}, {y}) is outside the Hilbert grid")]
    OutOfRangeCoordinate { x: i64, y: i64 },

    /// A rectangle whose minimum corner is above or right of its maximum corner.
    #[error("Invalid rectangle: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidRect {
        min_x: i64,
        min_y: i64,
        max_x: i64,
        max_y: i64,
    },

    /// A paged buffer that does not decode into a valid tree.
    #[error("Corrupt page: {0}")]
    CorruptPage(String),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, RTreeError>;
