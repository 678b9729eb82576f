// Rust guideline compliant 2026-02-09

//! Error handling for riot model application services.

use riot_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Configuration could not be loaded or failed validation.
    InvalidConfig,
    /// The city map layout is invalid.
    InvalidMap,
    /// Model parameters are out of range.
    InvalidParams,
    /// A position lies outside the grid or on a building.
    InvalidPosition,
    /// A cell had no room for another agent.
    CellFull,
    /// The requested agent does not exist.
    NotFound,
    /// Fans could not enter the map.
    EntryBlocked,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing files.
    IoError,
    /// JSON serialization failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::JsonError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::InvalidMap(_) => ErrorCode::InvalidMap,
                CoreError::InvalidParams(_) => ErrorCode::InvalidParams,
                CoreError::OutOfBounds(_) | CoreError::NotWalkable(_) => {
                    ErrorCode::InvalidPosition
                }
                CoreError::CellFull(_) => ErrorCode::CellFull,
                CoreError::AgentNotFound(_) => ErrorCode::NotFound,
                CoreError::EntryBlocked(_) => ErrorCode::EntryBlocked,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(core) => match core {
                CoreError::OutOfBounds(cell)
                | CoreError::NotWalkable(cell)
                | CoreError::CellFull(cell)
                | CoreError::EntryBlocked(cell) => Some(serde_json::json!({
                    "cell": cell,
                })),
                CoreError::AgentNotFound(id) => Some(serde_json::json!({
                    "agent_id": id,
                })),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riot_core::Cell;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = AppError::from(CoreError::EntryBlocked(Cell::new(1, 0)));
        assert_eq!(err.code(), ErrorCode::EntryBlocked);
        let details = err.details().unwrap();
        assert_eq!(details["cell"]["col"], 1);

        let err = AppError::from(CoreError::NotWalkable(Cell::new(0, 5)));
        assert_eq!(err.code(), ErrorCode::InvalidPosition);

        let err = AppError::from(CoreError::InvalidMap("bad".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidMap);
        assert!(err.details().is_none());
    }

    #[test]
    fn test_transparent_messages() {
        let err = AppError::from(CoreError::InvalidParams("x".to_string()));
        assert_eq!(err.to_string(), "Invalid model parameters: x");
        let err = AppError::InvalidInput("runs must be positive".to_string());
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }
}
