// Rust guideline compliant 2026-02-09

//! Batches of independent runs executed in parallel.

use crate::report::{RunReport, RunSummary};
use crate::run::resolve_seed;
use crate::{AppError, Result};
use rayon::prelude::*;
use riot_core::Config;
use serde::{Deserialize, Serialize};

/// Outcome of one run inside a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRun {
    /// Seed of the run.
    pub seed: u64,
    /// Headline numbers of the run.
    pub summary: RunSummary,
}

/// Aggregated outcome of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Steps simulated by each run.
    pub steps: usize,
    /// Individual runs, in seed order.
    pub runs: Vec<BatchRun>,
    /// Mean number of injured fans at the end of a run.
    pub mean_injured: f64,
    /// Mean number of rioters at the end of a run.
    pub mean_rioters: f64,
    /// Mean number of fans that left the map.
    pub mean_left: f64,
    /// Mean peak of simultaneous rioters.
    pub mean_peak_rioters: f64,
}

impl BatchReport {
    fn from_runs(steps: usize, runs: Vec<BatchRun>) -> Self {
        let mean = |value: fn(&RunSummary) -> f64| -> f64 {
            if runs.is_empty() {
                return 0.0;
            }
            runs.iter().map(|run| value(&run.summary)).sum::<f64>() / runs.len() as f64
        };

        Self {
            steps,
            mean_injured: mean(|s| f64::from(s.final_states.injured)),
            mean_rioters: mean(|s| f64::from(s.final_states.rioters)),
            mean_left: mean(|s| s.total_left() as f64),
            mean_peak_rioters: mean(|s| f64::from(s.peak_rioters)),
            runs,
        }
    }
}

/// Runs `runs` simulations in parallel with consecutive seeds.
///
/// The first seed is `config.seed`, or a random one when unset.
///
/// # Errors
///
/// Returns an error if:
/// - `runs` is zero
/// - any run fails to build or populate its model
pub fn run_batch(config: &Config, runs: usize) -> Result<BatchReport> {
    if runs == 0 {
        return Err(AppError::InvalidInput(
            "a batch needs at least one run".to_string(),
        ));
    }

    let base_seed = resolve_seed(config.seed);
    tracing::info!(runs, base_seed, "starting batch");

    let results: Vec<BatchRun> = (0..runs as u64)
        .into_par_iter()
        .map(|offset| -> Result<BatchRun> {
            let seed = base_seed.wrapping_add(offset);
            let mut model = config.build_model(seed)?;
            model.run(config.steps)?;
            let report = RunReport::from_model(&model);
            tracing::debug!(seed, "batch run finished");
            Ok(BatchRun {
                seed,
                summary: report.summary,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchReport::from_runs(config.steps, results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use riot_core::{Cell, ModelParams};

    fn small_config() -> Config {
        Config {
            width: 16,
            height: 20,
            steps: 10,
            seed: Some(100),
            entry_home: Cell::new(2, 0),
            entry_away: Cell::new(13, 0),
            params: ModelParams {
                initial_entry_home: 20,
                initial_entry_away: 10,
                ..ModelParams::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_batch_uses_consecutive_seeds() {
        let report = run_batch(&small_config(), 4).unwrap();
        let seeds: Vec<u64> = report.runs.iter().map(|run| run.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102, 103]);
        assert_eq!(report.steps, 10);
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let config = small_config();
        let report = run_batch(&config, 3).unwrap();
        for run in &report.runs {
            let single = crate::run_simulation(&Config {
                seed: Some(run.seed),
                ..config.clone()
            })
            .unwrap();
            assert_eq!(single.summary, run.summary);
        }
    }

    #[test]
    fn test_batch_means() {
        let report = run_batch(&small_config(), 3).unwrap();
        let expected = report
            .runs
            .iter()
            .map(|run| run.summary.total_left() as f64)
            .sum::<f64>()
            / 3.0;
        assert!((report.mean_left - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let err = run_batch(&small_config(), 0).unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::InvalidInput);
    }
}
