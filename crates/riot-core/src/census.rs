// Rust guideline compliant 2026-02-06

//! Per-cell agent counts by team and state.
//!
//! The model keeps the census in step with the grid so that neighbourhood queries
//! (how many rioters of which team surround an agent) never have to walk agent lists.

use crate::agent::{AgentState, Team};
use crate::grid::Cell;

const TEAMS: usize = 2;
const STATES: usize = 3;

type CellCounts = [[u32; STATES]; TEAMS];

/// Counts of agents per cell, team and state, with running totals.
#[derive(Debug, Clone)]
pub struct Census {
    width: usize,
    height: usize,
    cells: Vec<CellCounts>,
    totals: CellCounts,
}

impl Census {
    /// Creates an empty census for a grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![[[0; STATES]; TEAMS]; width * height],
            totals: [[0; STATES]; TEAMS],
        }
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        let inside = cell.col < self.width && cell.row < self.height;
        inside.then(|| cell.row * self.width + cell.col)
    }

    /// Records an agent on a cell. Out-of-bounds cells are ignored.
    pub fn add(&mut self, cell: Cell, team: Team, state: AgentState) {
        if let Some(idx) = self.slot(cell) {
            self.cells[idx][team.index()][state.index()] += 1;
            self.totals[team.index()][state.index()] += 1;
        }
    }

    /// Forgets an agent on a cell. Counts never drop below zero.
    pub fn remove(&mut self, cell: Cell, team: Team, state: AgentState) {
        if let Some(idx) = self.slot(cell) {
            let count = &mut self.cells[idx][team.index()][state.index()];
            if *count > 0 {
                *count -= 1;
                self.totals[team.index()][state.index()] -= 1;
            }
        }
    }

    /// Number of agents of a team in a state on one cell.
    pub fn count(&self, cell: Cell, team: Team, state: AgentState) -> u32 {
        self.slot(cell)
            .map(|idx| self.cells[idx][team.index()][state.index()])
            .unwrap_or(0)
    }

    /// Rioters on a cell, restricted to one team or of both teams.
    pub fn rioters(&self, cell: Cell, team: Option<Team>) -> u32 {
        match team {
            Some(team) => self.count(cell, team, AgentState::Rioter),
            None => Team::ALL
                .iter()
                .map(|team| self.count(cell, *team, AgentState::Rioter))
                .sum(),
        }
    }

    /// Rioters summed over a set of cells.
    pub fn rioters_in(&self, cells: &[Cell], team: Option<Team>) -> u32 {
        cells.iter().map(|cell| self.rioters(*cell, team)).sum()
    }

    /// Total agents on a cell.
    pub fn occupants(&self, cell: Cell) -> u32 {
        self.slot(cell)
            .map(|idx| self.cells[idx].iter().flatten().sum())
            .unwrap_or(0)
    }

    /// Agents in a state across the whole map.
    pub fn state_total(&self, state: AgentState) -> u32 {
        self.totals.iter().map(|team| team[state.index()]).sum()
    }

    /// Agents of a team across the whole map.
    pub fn team_total(&self, team: Team) -> u32 {
        self.totals[team.index()].iter().sum()
    }
}
