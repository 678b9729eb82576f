// Rust guideline compliant 2026-02-06

//! Agent counts computed by walking the agent list.
//!
//! These are the slow counterparts of the census totals and are mainly used to
//! cross-check them.

use crate::agent::{AgentState, Team};
use crate::model::RiotModel;

/// Counts agents in a given state.
pub fn count_agents_in_state(model: &RiotModel, target_state: AgentState) -> usize {
    model
        .agents()
        .filter(|agent| agent.state == target_state)
        .count()
}

/// Counts agents of a given team.
pub fn count_agents_in_team(model: &RiotModel, target_team: Team) -> usize {
    model.agents().filter(|agent| agent.team == target_team).count()
}
