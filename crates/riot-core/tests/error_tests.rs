// Rust guideline compliant 2026-02-06

//! Unit tests for error types and messages.

use riot_core::{Cell, Error};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
}

#[test]
fn test_cell_full_mentions_position() {
    let msg = Error::CellFull(Cell::new(10, 0)).to_string();
    assert_eq!(
        msg,
        "Agent cannot be placed at (10, 0), as there are too many other agents already"
    );
}

#[test]
fn test_entry_blocked_formatting() {
    let msg = Error::EntryBlocked(Cell::new(90, 0)).to_string();
    assert!(msg.contains("(90, 0)"));
    assert!(msg.contains("blocked"));
}

#[test]
fn test_context_is_preserved() {
    let msg =
        Error::InvalidMap("Total width of streets exceeds grid width.".to_string()).to_string();
    assert_eq!(msg, "Invalid city map: Total width of streets exceeds grid width.");

    let msg = Error::InvalidConfig("RIOT_SEED has an invalid value: x".to_string()).to_string();
    assert!(msg.starts_with("Invalid config:"));

    assert_eq!(Error::AgentNotFound(12).to_string(), "Agent not found: 12");
    assert_eq!(Error::OutOfBounds(Cell::new(1, 2)).to_string(), "Cell (1, 2) is outside the grid");
}
