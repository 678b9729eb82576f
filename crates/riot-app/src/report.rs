// Rust guideline compliant 2026-02-09

//! Reports produced by simulation runs.

use chrono::Utc;
use riot_core::{RiotModel, StateCounts, Team, TeamCounts};
use serde::{Deserialize, Serialize};

/// Headline numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Home fans admitted to the map.
    pub entered_home: usize,
    /// Away fans admitted to the map.
    pub entered_away: usize,
    /// Home fans that left through the bottom row.
    pub left_home: usize,
    /// Away fans that left through the bottom row.
    pub left_away: usize,
    /// Agents per state after the last step.
    pub final_states: StateCounts,
    /// Agents per team after the last step.
    pub final_teams: TeamCounts,
    /// Largest number of simultaneous rioters.
    pub peak_rioters: u32,
    /// First step at which the peak was reached. 0 when no step ran or nobody ever rioted.
    pub peak_rioters_step: usize,
}

impl RunSummary {
    /// Summarizes a model's current state and collected history.
    pub fn from_model(model: &RiotModel) -> Self {
        let latest = model.collector().latest();
        let (peak_rioters_step, peak_rioters) = model
            .collector()
            .records()
            .iter()
            .fold((0, 0), |best, record| {
                if record.states.rioters > best.1 {
                    (record.step, record.states.rioters)
                } else {
                    best
                }
            });

        Self {
            entered_home: model.entered(Team::Home),
            entered_away: model.entered(Team::Away),
            left_home: model.left(Team::Home),
            left_away: model.left(Team::Away),
            final_states: latest.map(|record| record.states).unwrap_or_default(),
            final_teams: latest.map(|record| record.teams).unwrap_or_default(),
            peak_rioters,
            peak_rioters_step,
        }
    }

    /// Fans that left the map, both teams together.
    pub fn total_left(&self) -> usize {
        self.left_home + self.left_away
    }
}

/// Full report of a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Seed that reproduces the run.
    pub seed: u64,
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Number of simulated steps.
    pub steps: usize,
    /// Number of streets on the map (0 for an open grid).
    pub streets: usize,
    /// RFC 3339 timestamp of report creation.
    pub generated_at: String,
    /// Headline numbers.
    pub summary: RunSummary,
    /// Agents per state after each step.
    pub agent_states: Vec<StateCounts>,
    /// Agents per team after each step.
    pub team_control: Vec<TeamCounts>,
}

impl RunReport {
    /// Builds a report from a finished model.
    pub fn from_model(model: &RiotModel) -> Self {
        Self {
            seed: model.seed(),
            width: model.grid().width(),
            height: model.grid().height(),
            steps: model.steps(),
            streets: model.city_map().n_streets(),
            generated_at: Utc::now().to_rfc3339(),
            summary: RunSummary::from_model(model),
            agent_states: model.collector().state_series(),
            team_control: model.collector().team_series(),
        }
    }
}
