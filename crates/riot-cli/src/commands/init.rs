// Rust guideline compliant 2026-02-06

//! Implementation of the `riot init` command.
//!
//! Writes a configuration file holding every default so it can be edited by hand.

use anyhow::Result;
use riot_app::AppError;
use riot_core::Config;
use std::path::Path;

use crate::terminal::print_success;

/// Writes the default configuration to `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists and `force` is not set
/// - The file cannot be written
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists, use --force to overwrite it",
            path.display()
        ))
        .into());
    }

    Config::default().save(path).map_err(AppError::from)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
