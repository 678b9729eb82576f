// Rust guideline compliant 2026-02-06

//! Fan agents and their behaviour rules.
//!
//! An agent never mutates the model directly. Each rule reads the model through
//! [`Surroundings`] and returns a decision the model then applies:
//!
//! - Bystander → Rioter when own-team rioters outnumber opposing rioters nearby
//! - Rioter → Bystander when no other rioter is nearby
//! - Bystander/Rioter → Injured with a probability that grows with nearby rioters
//! - Injured agents neither change state nor move

use crate::census::Census;
use crate::city_map::CityMap;
use crate::grid::{AgentId, Cell, MultiGrid};
use crate::params::ModelParams;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team a fan supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Supporter of the home team.
    Home,
    /// Supporter of the away team.
    Away,
}

impl Team {
    /// Both teams, home first.
    pub const ALL: [Team; 2] = [Team::Home, Team::Away];

    /// The other team.
    pub fn opponent(self) -> Team {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Team::Home => 0,
            Team::Away => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Home => write!(f, "home"),
            Team::Away => write!(f, "away"),
        }
    }
}

/// Behavioural state of a fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    /// Peaceful fan heading for the bottom of the map.
    Bystander,
    /// Fan taking part in the riot.
    Rioter,
    /// Fan hurt in the riot; stays where it is.
    Injured,
}

impl AgentState {
    /// All states in reporting order.
    pub const ALL: [AgentState; 3] = [
        AgentState::Bystander,
        AgentState::Rioter,
        AgentState::Injured,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            AgentState::Bystander => 0,
            AgentState::Rioter => 1,
            AgentState::Injured => 2,
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentState::Bystander => write!(f, "bystander"),
            AgentState::Rioter => write!(f, "rioter"),
            AgentState::Injured => write!(f, "injured"),
        }
    }
}

/// Outcome of an agent's movement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Remain on the current cell.
    Stay,
    /// Move to a neighbouring (or the current) cell.
    MoveTo(Cell),
    /// Leave the map through the bottom row.
    Leave,
}

/// Row band relative to the agent, checked in order by moving bystanders.
#[derive(Debug, Clone, Copy)]
enum Band {
    Below,
    Same,
    Above,
}

impl Band {
    fn contains(self, row: usize, current: usize) -> bool {
        match self {
            Band::Below => row > current,
            Band::Same => row == current,
            Band::Above => row < current,
        }
    }
}

/// Bystanders first look for cells free of any rioter, then for cells free of
/// opposing rioters, preferring rows further down each time.
const BYSTANDER_SEARCH: [(Band, bool); 6] = [
    (Band::Below, false),
    (Band::Same, false),
    (Band::Above, false),
    (Band::Below, true),
    (Band::Same, true),
    (Band::Above, true),
];

/// Read-only view of the model an agent decides against.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings<'a> {
    /// Behavioural parameters.
    pub params: &'a ModelParams,
    /// Walkability of the map.
    pub city_map: &'a CityMap,
    /// Agent positions.
    pub grid: &'a MultiGrid,
    /// Per-cell team/state counts.
    pub census: &'a Census,
}

impl Surroundings<'_> {
    /// Walkable Moore neighbourhood of a cell, including the cell itself.
    pub fn walkable_neighborhood(&self, cell: Cell) -> Vec<Cell> {
        self.grid
            .neighborhood(cell, true)
            .into_iter()
            .filter(|candidate| self.city_map.is_walkable(*candidate))
            .collect()
    }

    /// Cells that still have room for another agent.
    pub fn cells_with_room(&self, cells: &[Cell]) -> Vec<Cell> {
        cells
            .iter()
            .copied()
            .filter(|cell| self.grid.count(*cell) < self.params.max_agents_per_cell)
            .collect()
    }
}

/// A football fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanAgent {
    /// Unique identifier.
    pub id: AgentId,
    /// Current position.
    pub pos: Cell,
    /// Supported team.
    pub team: Team,
    /// Behavioural state.
    pub state: AgentState,
}

impl FanAgent {
    /// Decides the agent's next state.
    ///
    /// # Returns
    ///
    /// The new state, or `None` when the state does not change.
    pub fn decide_state<R: Rng + ?Sized>(
        &self,
        view: &Surroundings<'_>,
        rng: &mut R,
    ) -> Option<AgentState> {
        if self.state == AgentState::Injured {
            return None;
        }

        let cells = view.walkable_neighborhood(self.pos);
        if self.rolls_injury(view, &cells, rng) {
            return Some(AgentState::Injured);
        }

        match self.state {
            AgentState::Bystander => {
                let own = view.census.rioters_in(&cells, Some(self.team));
                let opposing = view.census.rioters_in(&cells, Some(self.team.opponent()));
                (own > opposing).then_some(AgentState::Rioter)
            }
            AgentState::Rioter => {
                let rioters = view.census.rioters_in(&cells, None);
                (rioters == 1).then_some(AgentState::Bystander)
            }
            AgentState::Injured => None,
        }
    }

    /// Whether the agent's cell is crowded enough and rioters are close enough for
    /// an injury to happen at all.
    pub fn can_be_injured(&self, view: &Surroundings<'_>, cells: &[Cell]) -> bool {
        view.grid.count(self.pos) > view.params.injury_min_agents
            && view.census.rioters_in(cells, None) > 0
    }

    /// Probability of being injured with the given neighbourhood.
    pub fn injury_probability(&self, view: &Surroundings<'_>, cells: &[Cell]) -> f64 {
        let rioters = f64::from(view.census.rioters_in(cells, None));
        let capacity = (9 * view.params.max_agents_per_cell) as f64;
        rioters / capacity * view.params.max_injury_probability
    }

    fn rolls_injury<R: Rng + ?Sized>(
        &self,
        view: &Surroundings<'_>,
        cells: &[Cell],
        rng: &mut R,
    ) -> bool {
        self.can_be_injured(view, cells)
            && rng.gen::<f64>() < self.injury_probability(view, cells)
    }

    /// Decides where the agent moves this step, based on its current state.
    pub fn decide_move<R: Rng + ?Sized>(&self, view: &Surroundings<'_>, rng: &mut R) -> Movement {
        let neighborhood = view.walkable_neighborhood(self.pos);
        let candidates = view.cells_with_room(&neighborhood);
        if candidates.is_empty() {
            return Movement::Stay;
        }

        match self.state {
            AgentState::Bystander => self.move_bystander(view, &candidates, rng),
            AgentState::Rioter => self.move_rioter(view, &candidates, rng),
            AgentState::Injured => Movement::Stay,
        }
    }

    fn move_bystander<R: Rng + ?Sized>(
        &self,
        view: &Surroundings<'_>,
        candidates: &[Cell],
        rng: &mut R,
    ) -> Movement {
        if self.pos.row + 1 == view.grid.height() {
            return Movement::Leave;
        }

        for (band, only_opposing) in BYSTANDER_SEARCH {
            let avoided = if only_opposing {
                Some(self.team.opponent())
            } else {
                None
            };
            let matches: Vec<Cell> = candidates
                .iter()
                .copied()
                .filter(|cell| band.contains(cell.row, self.pos.row))
                .filter(|cell| view.census.rioters(*cell, avoided) == 0)
                .collect();
            if let Some(target) = matches.choose(rng) {
                return Movement::MoveTo(*target);
            }
        }

        Movement::Stay
    }

    fn move_rioter<R: Rng + ?Sized>(
        &self,
        view: &Surroundings<'_>,
        candidates: &[Cell],
        rng: &mut R,
    ) -> Movement {
        let own: Vec<u32> = candidates
            .iter()
            .map(|cell| view.census.rioters(*cell, Some(self.team)))
            .collect();
        let opposing: Vec<u32> = candidates
            .iter()
            .map(|cell| view.census.rioters(*cell, Some(self.team.opponent())))
            .collect();

        // Outnumbered rioters regroup with their own side.
        let picks: Vec<usize> = if own.iter().sum::<u32>() < opposing.iter().sum::<u32>() {
            let best = own.iter().copied().max().unwrap_or(0);
            (0..candidates.len()).filter(|i| own[*i] == best).collect()
        } else {
            let best = opposing.iter().copied().min().unwrap_or(0);
            (0..candidates.len()).filter(|i| opposing[*i] == best).collect()
        };

        match picks.choose(rng) {
            Some(idx) => Movement::MoveTo(candidates[*idx]),
            None => Movement::Stay,
        }
    }

    /// Picks a cell strictly below the agent for the initial spread of the crowd.
    pub fn decide_spread<R: Rng + ?Sized>(
        &self,
        view: &Surroundings<'_>,
        rng: &mut R,
    ) -> Option<Cell> {
        let neighborhood = view.walkable_neighborhood(self.pos);
        let downward: Vec<Cell> = view
            .cells_with_room(&neighborhood)
            .into_iter()
            .filter(|cell| cell.row > self.pos.row)
            .collect();
        downward.choose(rng).copied()
    }
}
