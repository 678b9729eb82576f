// Rust guideline compliant 2026-02-09

//! Single simulation runs.

use crate::report::RunReport;
use crate::Result;
use rand::Rng;
use riot_core::Config;

/// Returns the configured seed, or draws a fresh one.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

/// Runs one simulation described by `config`.
///
/// # Errors
///
/// Returns an error if the model cannot be built or the population cannot enter.
pub fn run_simulation(config: &Config) -> Result<RunReport> {
    run_simulation_with(config, |_, _| {})
}

/// Runs one simulation, calling `on_step(step, total)` after each step.
///
/// # Errors
///
/// Returns an error if the model cannot be built or the population cannot enter.
pub fn run_simulation_with<F>(config: &Config, mut on_step: F) -> Result<RunReport>
where
    F: FnMut(usize, usize),
{
    let seed = resolve_seed(config.seed);
    tracing::info!(
        seed,
        width = config.width,
        height = config.height,
        steps = config.steps,
        "starting simulation"
    );

    let mut model = config.build_model(seed)?;
    let total = config.steps;
    model.run_with(total, |model| on_step(model.steps(), total))?;

    let report = RunReport::from_model(&model);
    tracing::info!(
        seed,
        left = report.summary.total_left(),
        injured = report.summary.final_states.injured,
        "simulation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riot_core::{Cell, ModelParams};

    fn small_config(seed: Option<u64>) -> Config {
        Config {
            width: 20,
            height: 25,
            steps: 15,
            seed,
            entry_home: Cell::new(3, 0),
            entry_away: Cell::new(16, 0),
            params: ModelParams {
                initial_entry_home: 30,
                initial_entry_away: 20,
                ..ModelParams::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_run_reports_every_step() {
        let report = run_simulation(&small_config(Some(4))).unwrap();
        assert_eq!(report.seed, 4);
        assert_eq!(report.steps, 15);
        assert_eq!(report.agent_states.len(), 15);
        assert_eq!(report.team_control.len(), 15);
        assert!(report.summary.entered_home >= 30);
        assert!(report.summary.entered_away >= 20);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = run_simulation(&small_config(Some(99))).unwrap();
        let second = run_simulation(&small_config(Some(99))).unwrap();
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.agent_states, second.agent_states);
    }

    #[test]
    fn test_progress_callback_sees_each_step() {
        let mut seen = Vec::new();
        run_simulation_with(&small_config(Some(1)), |step, total| seen.push((step, total)))
            .unwrap();
        assert_eq!(seen.len(), 15);
        assert_eq!(seen.first(), Some(&(1, 15)));
        assert_eq!(seen.last(), Some(&(15, 15)));
    }

    #[test]
    fn test_missing_seed_is_recorded() {
        let report = run_simulation(&small_config(None)).unwrap();
        let replay = run_simulation(&small_config(Some(report.seed))).unwrap();
        assert_eq!(report.summary, replay.summary);
    }
}
