// Rust guideline compliant 2026-02-06

//! Command implementations for the Riot CLI.

pub mod batch;
pub mod init;
pub mod map;
pub mod run;
