// Rust guideline compliant 2026-02-06

//! Tunable parameters of the riot model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Behavioural parameters shared by every agent of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Maximum number of agents a single cell can hold.
    #[serde(default = "default_max_agents_per_cell")]
    pub max_agents_per_cell: usize,

    /// Probability that an entering fan starts as a rioter.
    #[serde(default = "default_initial_riot_probability")]
    pub initial_riot_probability: f64,

    /// Number of home fans admitted during population setup.
    #[serde(default = "default_initial_entry_home")]
    pub initial_entry_home: usize,

    /// Number of away fans admitted during population setup.
    #[serde(default = "default_initial_entry_away")]
    pub initial_entry_away: usize,

    /// Injuries only happen in cells holding more agents than this.
    #[serde(default = "default_injury_min_agents")]
    pub injury_min_agents: usize,

    /// Injury probability when the whole neighbourhood is packed with rioters.
    #[serde(default = "default_max_injury_probability")]
    pub max_injury_probability: f64,
}

fn default_max_agents_per_cell() -> usize {
    5
}

fn default_initial_riot_probability() -> f64 {
    0.1
}

fn default_initial_entry_home() -> usize {
    1000
}

fn default_initial_entry_away() -> usize {
    500
}

fn default_injury_min_agents() -> usize {
    3
}

fn default_max_injury_probability() -> f64 {
    0.3
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            max_agents_per_cell: default_max_agents_per_cell(),
            initial_riot_probability: default_initial_riot_probability(),
            initial_entry_home: default_initial_entry_home(),
            initial_entry_away: default_initial_entry_away(),
            injury_min_agents: default_injury_min_agents(),
            max_injury_probability: default_max_injury_probability(),
        }
    }
}

impl ModelParams {
    /// Probability that an entering fan starts as a bystander.
    pub fn initial_bystander_probability(&self) -> f64 {
        1.0 - self.initial_riot_probability
    }

    /// Validates parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if:
    /// - max_agents_per_cell is zero
    /// - a probability lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.max_agents_per_cell == 0 {
            return Err(Error::InvalidParams(
                "max_agents_per_cell must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("initial_riot_probability", self.initial_riot_probability),
            ("max_injury_probability", self.max_injury_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidParams(format!(
                    "{} must be within 0-1, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
