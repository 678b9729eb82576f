// Rust guideline compliant 2026-02-09

//! Response envelopes for machine-readable command output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Status indicator.
    pub status: &'static str,
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riot_core::{Cell, Error as CoreError};

    #[test]
    fn test_error_envelope_serializes_code() {
        let err = AppError::from(CoreError::CellFull(Cell::new(2, 3)));
        let value = serde_json::to_value(ErrorEnvelope::from_error(&err)).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "cell_full");
        assert_eq!(value["details"]["cell"]["row"], 3);
    }

    #[test]
    fn test_success_envelope() {
        let value = serde_json::to_value(SuccessEnvelope::new(5)).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["result"], 5);
    }
}
