// Rust guideline compliant 2026-02-06

//! Error types for the riot model core library.

use crate::grid::Cell;
use thiserror::Error;

/// Result type alias for riot model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for riot model operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// City map dimensions or street layout are invalid.
    #[error("Invalid city map: {0}")]
    InvalidMap(String),

    /// Model parameters are out of range.
    #[error("Invalid model parameters: {0}")]
    InvalidParams(String),

    /// A position lies outside the grid.
    #[error("Cell {0} is outside the grid")]
    OutOfBounds(Cell),

    /// A position is not walkable on the city map.
    #[error("Cell {0} is not walkable")]
    NotWalkable(Cell),

    /// A cell already holds the maximum number of agents.
    #[error("Agent cannot be placed at {0}, as there are too many other agents already")]
    CellFull(Cell),

    /// Agent is not present in the model or grid.
    #[error("Agent not found: {0}")]
    AgentNotFound(u64),

    /// No fan could enter through an entry cell during population setup.
    #[error("Entry cell {0} is blocked, population cannot spread")]
    EntryBlocked(Cell),
}
