// Rust guideline compliant 2026-02-06

//! Per-step data collection.

use crate::agent::{AgentState, Team};
use crate::model::RiotModel;
use serde::{Deserialize, Serialize};

/// Number of agents on the map in each state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Agents in the bystander state.
    pub bystanders: u32,
    /// Agents in the rioter state.
    pub rioters: u32,
    /// Injured agents.
    pub injured: u32,
}

impl StateCounts {
    /// Sum over all states.
    pub fn total(&self) -> u32 {
        self.bystanders + self.rioters + self.injured
    }
}

/// Number of agents of each team on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCounts {
    /// Home fans.
    pub home: u32,
    /// Away fans.
    pub away: u32,
}

/// Snapshot of the model after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Step number, starting at 1.
    pub step: usize,
    /// Agents per state.
    pub states: StateCounts,
    /// Agents per team.
    pub teams: TeamCounts,
    /// Home fans that have left the map so far.
    pub left_home: usize,
    /// Away fans that have left the map so far.
    pub left_away: usize,
}

impl ModelRecord {
    /// Captures the current totals of a model.
    pub fn capture(model: &RiotModel) -> Self {
        let census = model.census();
        Self {
            step: model.steps(),
            states: StateCounts {
                bystanders: census.state_total(AgentState::Bystander),
                rioters: census.state_total(AgentState::Rioter),
                injured: census.state_total(AgentState::Injured),
            },
            teams: TeamCounts {
                home: census.team_total(Team::Home),
                away: census.team_total(Team::Away),
            },
            left_home: model.left(Team::Home),
            left_away: model.left(Team::Away),
        }
    }
}

/// Time series of model records.
#[derive(Debug, Clone, Default)]
pub struct DataCollector {
    records: Vec<ModelRecord>,
}

impl DataCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures and stores the current state of a model.
    pub fn collect(&mut self, model: &RiotModel) {
        self.push(ModelRecord::capture(model));
    }

    /// Stores an already captured record.
    pub fn push(&mut self, record: ModelRecord) {
        self.records.push(record);
    }

    /// All records in step order.
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&ModelRecord> {
        self.records.last()
    }

    /// Agent state totals per step.
    pub fn state_series(&self) -> Vec<StateCounts> {
        self.records.iter().map(|record| record.states).collect()
    }

    /// Team totals per step.
    pub fn team_series(&self) -> Vec<TeamCounts> {
        self.records.iter().map(|record| record.teams).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
