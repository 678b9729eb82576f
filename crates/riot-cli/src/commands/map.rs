// Rust guideline compliant 2026-02-06

//! Implementation of the `riot map` command.

use anyhow::Result;
use riot_app::AppError;
use riot_core::{CityMap, Config};

use crate::output::OutputFormatter;

/// Prints the city map described by `config`.
///
/// Entry cells are not checked.
///
/// # Errors
///
/// Returns an error if the grid is empty or the street layout does not fit it.
pub fn execute(config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    config.validate_layout().map_err(AppError::from)?;
    let map = match config.build_city_map().map_err(AppError::from)? {
        Some(map) => map,
        None => CityMap::open(config.width, config.height).map_err(AppError::from)?,
    };
    println!("{}", formatter.format_map(&map));
    Ok(())
}
