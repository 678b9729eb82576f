// Rust guideline compliant 2026-02-06

//! The riot model.
//!
//! Fans enter through one entry cell per team, spread down into the city and are then
//! activated once per step in random order. Every random draw comes from the model's
//! seeded generator, so a seed fully determines a run.

use crate::agent::{AgentState, FanAgent, Movement, Surroundings, Team};
use crate::census::Census;
use crate::city_map::CityMap;
use crate::collector::{DataCollector, ModelRecord};
use crate::grid::{AgentId, Cell, MultiGrid};
use crate::params::ModelParams;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Shared state every agent decides against.
#[derive(Debug, Clone)]
struct Environment {
    params: ModelParams,
    city_map: CityMap,
    grid: MultiGrid,
    census: Census,
}

impl Environment {
    fn view(&self) -> Surroundings<'_> {
        Surroundings {
            params: &self.params,
            city_map: &self.city_map,
            grid: &self.grid,
            census: &self.census,
        }
    }
}

/// Agent-based model of rival fans leaving a stadium.
#[derive(Debug, Clone)]
pub struct RiotModel {
    env: Environment,
    agents: BTreeMap<AgentId, FanAgent>,
    entry_home: Cell,
    entry_away: Cell,
    entered: [usize; 2],
    left: [usize; 2],
    next_id: AgentId,
    steps: usize,
    seed: u64,
    rng: StdRng,
    collector: DataCollector,
}

impl RiotModel {
    /// Creates an empty model.
    ///
    /// # Arguments
    ///
    /// * `width` - Grid width
    /// * `height` - Grid height
    /// * `entry_home` - Cell where home fans enter
    /// * `entry_away` - Cell where away fans enter
    /// * `city_map` - Optional city layout; an open map is used when absent
    /// * `params` - Behavioural parameters
    /// * `seed` - Seed of the model's random generator
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the parameters are invalid
    /// - the city map does not match the grid size
    /// - an entry cell is outside the grid or not walkable
    pub fn new(
        width: usize,
        height: usize,
        entry_home: Cell,
        entry_away: Cell,
        city_map: Option<CityMap>,
        params: ModelParams,
        seed: u64,
    ) -> Result<Self> {
        params.validate()?;

        let city_map = match city_map {
            Some(map) => {
                if map.width() != width || map.height() != height {
                    return Err(Error::InvalidMap(format!(
                        "City map is {}x{} but the grid is {}x{}",
                        map.width(),
                        map.height(),
                        width,
                        height
                    )));
                }
                map
            }
            None => CityMap::open(width, height)?,
        };

        let grid = MultiGrid::new(width, height);
        for entry in [entry_home, entry_away] {
            if !grid.in_bounds(entry) {
                return Err(Error::OutOfBounds(entry));
            }
            if !city_map.is_walkable(entry) {
                return Err(Error::NotWalkable(entry));
            }
        }

        Ok(Self {
            env: Environment {
                params,
                city_map,
                grid,
                census: Census::new(width, height),
            },
            agents: BTreeMap::new(),
            entry_home,
            entry_away,
            entered: [0; 2],
            left: [0; 2],
            next_id: 1,
            steps: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
            collector: DataCollector::new(),
        })
    }

    /// Fills the model and runs it for `n_steps` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot enter.
    pub fn run(&mut self, n_steps: usize) -> Result<()> {
        self.run_with(n_steps, |_| {})
    }

    /// Fills the model and runs `n_steps` steps, calling `observer` after each one.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot enter.
    pub fn run_with<F>(&mut self, n_steps: usize, mut observer: F) -> Result<()>
    where
        F: FnMut(&RiotModel),
    {
        self.init_population()?;
        for _ in 0..n_steps {
            self.step();
            observer(&*self);
        }
        Ok(())
    }

    /// Behavioural parameters.
    pub fn params(&self) -> &ModelParams {
        &self.env.params
    }

    /// City layout.
    pub fn city_map(&self) -> &CityMap {
        &self.env.city_map
    }

    /// Agent positions.
    pub fn grid(&self) -> &MultiGrid {
        &self.env.grid
    }

    /// Per-cell team/state counts.
    pub fn census(&self) -> &Census {
        &self.env.census
    }

    /// Collected per-step records.
    pub fn collector(&self) -> &DataCollector {
        &self.collector
    }

    /// Seed the model was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Entry cell of a team.
    pub fn entry(&self, team: Team) -> Cell {
        match team {
            Team::Home => self.entry_home,
            Team::Away => self.entry_away,
        }
    }

    /// Agents currently on the map, ordered by id.
    pub fn agents(&self) -> impl Iterator<Item = &FanAgent> {
        self.agents.values()
    }

    /// Looks up an agent.
    pub fn agent(&self, id: AgentId) -> Option<&FanAgent> {
        self.agents.get(&id)
    }

    /// Number of agents currently on the map.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Fans of a team that have entered the map so far.
    pub fn entered(&self, team: Team) -> usize {
        self.entered[team.index()]
    }

    /// Fans of a team that have left the map through the bottom row.
    pub fn left(&self, team: Team) -> usize {
        self.left[team.index()]
    }

    /// Adds a new agent to the model.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the cell is outside the grid or not walkable
    /// - the cell already holds the maximum number of agents
    pub fn add_agent(&mut self, pos: Cell, team: Team, state: AgentState) -> Result<AgentId> {
        if !self.env.grid.in_bounds(pos) {
            return Err(Error::OutOfBounds(pos));
        }
        if !self.env.city_map.is_walkable(pos) {
            return Err(Error::NotWalkable(pos));
        }
        if self.env.grid.count(pos) >= self.env.params.max_agents_per_cell {
            return Err(Error::CellFull(pos));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.env.grid.place_agent(id, pos)?;
        self.env.census.add(pos, team, state);
        self.agents.insert(
            id,
            FanAgent {
                id,
                pos,
                team,
                state,
            },
        );
        Ok(id)
    }

    /// Removes an agent from the model.
    ///
    /// # Errors
    ///
    /// Returns `AgentNotFound` if no such agent is on the map.
    pub fn remove_agent(&mut self, id: AgentId) -> Result<FanAgent> {
        let agent = self.agents.remove(&id).ok_or(Error::AgentNotFound(id))?;
        self.env.grid.remove_agent(id, agent.pos)?;
        self.env.census.remove(agent.pos, agent.team, agent.state);
        Ok(agent)
    }

    /// Changes the state of an agent.
    ///
    /// # Errors
    ///
    /// Returns `AgentNotFound` if no such agent is on the map.
    pub fn set_agent_state(&mut self, id: AgentId, state: AgentState) -> Result<()> {
        let agent = self.agents.get_mut(&id).ok_or(Error::AgentNotFound(id))?;
        self.env.census.remove(agent.pos, agent.team, agent.state);
        self.env.census.add(agent.pos, agent.team, state);
        agent.state = state;
        Ok(())
    }

    /// Moves an agent to another cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent does not exist or the target is outside the grid.
    pub fn move_agent(&mut self, id: AgentId, to: Cell) -> Result<()> {
        let agent = self.agents.get_mut(&id).ok_or(Error::AgentNotFound(id))?;
        if agent.pos == to {
            return Ok(());
        }
        self.env.grid.move_agent(id, agent.pos, to)?;
        self.env.census.remove(agent.pos, agent.team, agent.state);
        self.env.census.add(to, agent.team, agent.state);
        agent.pos = to;
        Ok(())
    }

    /// Lets home fans and then away fans enter through their entry cells.
    ///
    /// Each round fills the entry cell to capacity and spreads the team's crowd one
    /// cell further down, until the configured number of fans has entered.
    ///
    /// # Errors
    ///
    /// Returns `EntryBlocked` if a round cannot admit a single fan.
    pub fn init_population(&mut self) -> Result<()> {
        for team in Team::ALL {
            let target = match team {
                Team::Home => self.env.params.initial_entry_home,
                Team::Away => self.env.params.initial_entry_away,
            };
            let entry = self.entry(team);

            while self.entered(team) < target {
                let mut admitted = 0;
                while self.env.grid.count(entry) < self.env.params.max_agents_per_cell {
                    let state = if self.rng.gen_bool(self.env.params.initial_riot_probability) {
                        AgentState::Rioter
                    } else {
                        AgentState::Bystander
                    };
                    self.add_agent(entry, team, state)?;
                    self.entered[team.index()] += 1;
                    admitted += 1;
                }
                if admitted == 0 {
                    tracing::warn!(%team, %entry, "entry cell blocked during population setup");
                    return Err(Error::EntryBlocked(entry));
                }
                self.spread_fans(team)?;
            }

            tracing::debug!(%team, entered = self.entered(team), "team entered the map");
        }
        Ok(())
    }

    /// Pushes every fan of a team one cell down, starting from the bottom-most rows.
    fn spread_fans(&mut self, team: Team) -> Result<()> {
        let mut to_move: Vec<FanAgent> = self
            .agents
            .values()
            .filter(|agent| agent.team == team)
            .copied()
            .collect();
        to_move.shuffle(&mut self.rng);

        let mut by_row: BTreeMap<usize, Vec<AgentId>> = BTreeMap::new();
        for agent in to_move {
            by_row.entry(agent.pos.row).or_default().push(agent.id);
        }

        for ids in by_row.into_values().rev() {
            for id in ids {
                let agent = self.agents[&id];
                let target = agent.decide_spread(&self.env.view(), &mut self.rng);
                if let Some(target) = target {
                    self.move_agent(id, target)?;
                }
            }
        }
        Ok(())
    }

    /// Advances the model by one step.
    ///
    /// Agents are activated once each, in a freshly shuffled order. Each agent first
    /// updates its state and then moves; bystanders on the bottom row leave the map.
    pub fn step(&mut self) {
        let mut order: Vec<AgentId> = self.agents.keys().copied().collect();
        order.shuffle(&mut self.rng);

        for id in order {
            let result = self.step_agent(id);
            debug_assert!(result.is_ok(), "agent {} step failed: {:?}", id, result);
            if let Err(err) = result {
                tracing::error!(agent = id, error = %err, "agent step failed");
            }
        }

        self.steps += 1;
        let record = ModelRecord::capture(self);
        self.collector.push(record);
    }

    fn step_agent(&mut self, id: AgentId) -> Result<()> {
        let Some(agent) = self.agents.get(&id).copied() else {
            return Ok(());
        };
        if agent.state == AgentState::Injured {
            return Ok(());
        }

        let new_state = agent.decide_state(&self.env.view(), &mut self.rng);
        if let Some(state) = new_state {
            self.set_agent_state(id, state)?;
        }

        let agent = self.agents[&id];
        let movement = agent.decide_move(&self.env.view(), &mut self.rng);
        match movement {
            Movement::Stay => Ok(()),
            Movement::MoveTo(target) => self.move_agent(id, target),
            Movement::Leave => {
                self.left[agent.team.index()] += 1;
                self.remove_agent(id).map(|_| ())
            }
        }
    }

    /// Read-only view used to evaluate agent rules against the current model.
    pub fn view(&self) -> Surroundings<'_> {
        self.env.view()
    }
}
