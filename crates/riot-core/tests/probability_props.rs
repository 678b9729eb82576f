// Rust guideline compliant 2026-02-06

//! Property-based tests for the logistic probability curves.

use proptest::prelude::*;
use riot_core::probability::{
    cell_movement_probability, state_change_probability, DEFAULT_STEEPNESS,
};

proptest! {
    /// Probabilities always lie strictly between 0 and 1.
    #[test]
    fn prop_probability_in_unit_interval(
        count in 0u32..200,
        cells in 1usize..10,
        cap in 1usize..8,
    ) {
        let p = state_change_probability(count, cells, cap, DEFAULT_STEEPNESS);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    /// More agents in the target state never lower the probability.
    #[test]
    fn prop_probability_is_monotonic(count in 0u32..100, cells in 1usize..10, cap in 1usize..8) {
        let lower = state_change_probability(count, cells, cap, DEFAULT_STEEPNESS);
        let higher = state_change_probability(count + 1, cells, cap, DEFAULT_STEEPNESS);
        prop_assert!(lower <= higher);
    }

    /// The per-cell curve has one entry per cell, in order.
    #[test]
    fn prop_cell_probabilities_follow_counts(counts in prop::collection::vec(0u32..50, 0..9)) {
        let probs = cell_movement_probability(&counts, 9, 5, DEFAULT_STEEPNESS);
        prop_assert_eq!(probs.len(), counts.len());
        for (i, j) in (0..counts.len()).flat_map(|i| (0..counts.len()).map(move |j| (i, j))) {
            if counts[i] <= counts[j] {
                prop_assert!(probs[i] <= probs[j]);
            }
        }
    }
}
