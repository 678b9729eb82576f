// Rust guideline compliant 2026-02-06

//! Implementation of the `riot run` command.

use anyhow::{Context, Result};
use riot_app::{run_simulation_with, AppError};
use riot_core::city_map::DEFAULT_EXIT_SPACE_HEIGHT;
use riot_core::{Cell, CityMapConfig, Config};
use std::fs;
use std::path::PathBuf;

use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;
use crate::terminal::print_success;

/// Street width used when `--streets` is given without a width.
const DEFAULT_STREET_WIDTH: usize = 2;

/// Command-line overrides of the simulation configuration.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SimulationArgs {
    /// Grid width
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of steps to simulate
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Entry cell of home fans, as "col,row"
    #[arg(long)]
    pub home: Option<Cell>,

    /// Entry cell of away fans, as "col,row"
    #[arg(long)]
    pub away: Option<Cell>,

    /// Number of home fans entering the map
    #[arg(long)]
    pub home_fans: Option<usize>,

    /// Number of away fans entering the map
    #[arg(long)]
    pub away_fans: Option<usize>,

    /// Number of vertical streets (0 for an open grid)
    #[arg(long)]
    pub streets: Option<usize>,

    /// Width of each street
    #[arg(long)]
    pub street_width: Option<usize>,

    /// Rows of open space in front of the stadium
    #[arg(long)]
    pub exit_space: Option<usize>,
}

impl SimulationArgs {
    /// Applies the overrides to `config` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        self.apply_overrides(config)?;
        config.validate().map_err(AppError::from)?;
        Ok(())
    }

    /// Applies the overrides to `config` without validating it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a street option is given while there is no street layout.
    pub fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(home) = self.home {
            config.entry_home = home;
        }
        if let Some(away) = self.away {
            config.entry_away = away;
        }
        if let Some(fans) = self.home_fans {
            config.params.initial_entry_home = fans;
        }
        if let Some(fans) = self.away_fans {
            config.params.initial_entry_away = fans;
        }

        match self.streets {
            Some(0) => config.city_map = None,
            Some(streets) => {
                let layout = config.city_map.get_or_insert(CityMapConfig {
                    streets,
                    street_width: DEFAULT_STREET_WIDTH,
                    exit_space_height: DEFAULT_EXIT_SPACE_HEIGHT,
                });
                layout.streets = streets;
            }
            None => {}
        }

        let Some(layout) = config.city_map.as_mut() else {
            if self.street_width.is_some() || self.exit_space.is_some() {
                return Err(AppError::InvalidInput(
                    "--street-width and --exit-space need a street layout, pass --streets"
                        .to_string(),
                )
                .into());
            }
            return Ok(());
        };
        if let Some(width) = self.street_width {
            layout.street_width = width;
        }
        if let Some(rows) = self.exit_space {
            layout.exit_space_height = rows;
        }
        Ok(())
    }
}

/// Runs one simulation and prints its report.
///
/// # Arguments
///
/// * `config` - Fully resolved configuration
/// * `output` - Optional file receiving the JSON report
/// * `show_progress` - Whether to print progress to stderr
/// * `formatter` - Formatter for the report
///
/// # Errors
///
/// Returns an error if the simulation fails or the report cannot be written.
pub fn execute(
    config: &Config,
    output: Option<PathBuf>,
    show_progress: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let progress = ProgressReporter::new("run", config.steps, show_progress);
    let report = run_simulation_with(config, |step, _| progress.report(step))?;
    progress.finish();

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&report).map_err(AppError::from)?;
        fs::write(&path, json)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        print_success(&format!("Report written to {}", path.display()));
    }

    println!("{}", formatter.format_run(&report));
    Ok(())
}
