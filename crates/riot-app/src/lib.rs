// Rust guideline compliant 2026-02-09

//! Shared application services for the riot model.
//!
//! This crate provides reusable, non-CLI-specific helpers for seeded simulation
//! runs, parallel batches of runs, run reports and standardized response envelopes.

pub mod batch;
pub mod error;
pub mod report;
pub mod response;
pub mod run;

pub use batch::{run_batch, BatchReport, BatchRun};
pub use error::{AppError, ErrorCode, Result};
pub use report::{RunReport, RunSummary};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use run::{resolve_seed, run_simulation, run_simulation_with};
