// Rust guideline compliant 2026-02-06

//! Implementation of the `riot batch` command.

use anyhow::Result;
use riot_app::run_batch;
use riot_core::Config;

use crate::output::OutputFormatter;

/// Runs `runs` seeded simulations in parallel and prints the aggregate.
///
/// # Errors
///
/// Returns an error if `runs` is zero or any run fails.
pub fn execute(config: &Config, runs: usize, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = run_batch(config, runs)?;
    println!("{}", formatter.format_batch(&report));
    Ok(())
}
