// Rust guideline compliant 2026-02-06

//! Configuration management for simulation runs.

use crate::city_map::{CityMap, DEFAULT_EXIT_SPACE_HEIGHT};
use crate::grid::Cell;
use crate::model::RiotModel;
use crate::params::ModelParams;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "riot.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Street layout of a generated city map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMapConfig {
    /// Number of vertical streets.
    pub streets: usize,
    /// Width of each street.
    pub street_width: usize,
    /// Rows of open space at the top of the map.
    #[serde(default = "default_exit_space_height")]
    pub exit_space_height: usize,
}

fn default_exit_space_height() -> usize {
    DEFAULT_EXIT_SPACE_HEIGHT
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Grid width.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Grid height.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Number of steps to simulate.
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Seed of the random generator; drawn at random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Entry cell of home fans.
    #[serde(default = "default_entry_home")]
    pub entry_home: Cell,

    /// Entry cell of away fans.
    #[serde(default = "default_entry_away")]
    pub entry_away: Cell,

    /// Street layout; the whole grid is walkable when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_map: Option<CityMapConfig>,

    /// Behavioural parameters.
    #[serde(default)]
    pub params: ModelParams,
}

fn default_width() -> usize {
    100
}

fn default_height() -> usize {
    200
}

fn default_steps() -> usize {
    1000
}

fn default_entry_home() -> Cell {
    Cell::new(10, 0)
}

fn default_entry_away() -> Cell {
    Cell::new(90, 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            steps: default_steps(),
            seed: None,
            output_format: OutputFormat::default(),
            entry_home: default_entry_home(),
            entry_away: default_entry_away(),
            city_map: None,
            params: ModelParams::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if it exists
    /// 3. Environment variables with `RIOT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| {
                Error::InvalidConfig(format!("Invalid config file {}: {}", path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RIOT_WIDTH` - Grid width
    /// - `RIOT_HEIGHT` - Grid height
    /// - `RIOT_STEPS` - Number of steps
    /// - `RIOT_SEED` - Random seed
    /// - `RIOT_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `RIOT_MAX_AGENTS_PER_CELL` - Cell capacity
    /// - `RIOT_INITIAL_RIOT_PROBABILITY` - Share of fans entering as rioters
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(val) = env_value("RIOT_WIDTH")? {
            self.width = val;
        }
        if let Some(val) = env_value("RIOT_HEIGHT")? {
            self.height = val;
        }
        if let Some(val) = env_value("RIOT_STEPS")? {
            self.steps = val;
        }
        if let Some(val) = env_value("RIOT_SEED")? {
            self.seed = Some(val);
        }
        if let Some(val) = env_value("RIOT_MAX_AGENTS_PER_CELL")? {
            self.params.max_agents_per_cell = val;
        }
        if let Some(val) = env_value("RIOT_INITIAL_RIOT_PROBABILITY")? {
            self.params.initial_riot_probability = val;
        }

        if let Ok(val) = std::env::var("RIOT_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "RIOT_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - width or height is zero
    /// - an entry cell lies outside the grid
    /// - the street layout or the model parameters are invalid
    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;

        for entry in [self.entry_home, self.entry_away] {
            if entry.col >= self.width || entry.row >= self.height {
                return Err(Error::InvalidConfig(format!(
                    "entry cell {} lies outside the {}x{} grid",
                    entry, self.width, self.height
                )));
            }
        }

        self.params.validate()
    }

    /// Validates only the grid dimensions and the street layout.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or the streets do not fit the grid.
    pub fn validate_layout(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "width and height must be greater than 0, got {}x{}",
                self.width, self.height
            )));
        }

        self.build_city_map().map(|_| ())
    }

    /// Builds the configured city map, or `None` for an open grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMap` if the street layout does not fit the grid.
    pub fn build_city_map(&self) -> Result<Option<CityMap>> {
        self.city_map
            .as_ref()
            .map(|layout| {
                CityMap::new(
                    self.width,
                    self.height,
                    layout.streets,
                    layout.street_width,
                    layout.exit_space_height,
                )
            })
            .transpose()
    }

    /// Creates an empty model from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the map or the entry cells are invalid.
    pub fn build_model(&self, seed: u64) -> Result<RiotModel> {
        RiotModel::new(
            self.width,
            self.height,
            self.entry_home,
            self.entry_away,
            self.build_city_map()?,
            self.params.clone(),
            seed,
        )
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn env_value<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidConfig(format!("{} has an invalid value: {}", name, val))),
        Err(_) => Ok(None),
    }
}
