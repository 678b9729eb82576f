// Rust guideline compliant 2026-02-06

//! Logistic probability curves for state changes and cell choice.
//!
//! Both curves map the share of a neighbourhood's capacity filled by some group of
//! agents onto `1 / (1 + e^(-k (r - 0.5)))`, where `r` is clamped to `[0, 1]`.

/// Default steepness of the logistic curves.
pub const DEFAULT_STEEPNESS: f64 = 5.0;

fn fill_ratio(count: f64, n_available_cells: usize, max_per_cell: usize) -> f64 {
    let capacity = (n_available_cells * max_per_cell) as f64;
    if capacity == 0.0 {
        return 0.0;
    }
    (count / capacity).clamp(0.0, 1.0)
}

fn logistic(ratio: f64, k: f64) -> f64 {
    1.0 / (1.0 + (-k * (ratio - 0.5)).exp())
}

/// Relative probability of a state change given how many nearby agents are already in
/// the target state.
///
/// # Arguments
///
/// * `n_in_state` - Agents in the target state within the neighbourhood
/// * `n_available_cells` - Walkable cells in the neighbourhood
/// * `max_per_cell` - Capacity of a single cell
/// * `k` - Steepness of the curve
pub fn state_change_probability(
    n_in_state: u32,
    n_available_cells: usize,
    max_per_cell: usize,
    k: f64,
) -> f64 {
    logistic(fill_ratio(f64::from(n_in_state), n_available_cells, max_per_cell), k)
}

/// Relative probability of moving to each cell given the team mates already on it.
pub fn cell_movement_probability(
    n_in_team: &[u32],
    n_available_cells: usize,
    max_per_cell: usize,
    k: f64,
) -> Vec<f64> {
    n_in_team
        .iter()
        .map(|count| logistic(fill_ratio(f64::from(*count), n_available_cells, max_per_cell), k))
        .collect()
}
