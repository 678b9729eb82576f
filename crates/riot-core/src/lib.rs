// Rust guideline compliant 2026-02-06

//! Riot ABM Core Library
//!
//! This crate provides the domain components for the football riot agent-based model:
//! - City map generation (exit space, vertical streets)
//! - Multi-agent grid with Moore neighbourhoods
//! - Census maps of agents per cell, team and state
//! - Fan agents and their state/movement rules
//! - The riot model (population entry, random activation, data collection)
//! - Configuration, probability helpers and error types

pub mod agent;
pub mod census;
pub mod city_map;
pub mod collector;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod params;
pub mod probability;
pub mod stats;

pub use agent::{AgentState, FanAgent, Movement, Surroundings, Team};
pub use census::Census;
pub use city_map::CityMap;
pub use collector::{DataCollector, ModelRecord, StateCounts, TeamCounts};
pub use config::{CityMapConfig, Config, OutputFormat, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use grid::{AgentId, Cell, MultiGrid};
pub use model::RiotModel;
pub use params::ModelParams;
