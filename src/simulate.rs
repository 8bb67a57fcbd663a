//! Batch spin statistics.
//!
//! Spin `i` of a batch is seeded with `start_seed + i`, so any single spin of
//! a run can be replayed on its own with the `spin` binary.
use crate::error::SpinError;
use crate::spin::SpinEngine;
use crate::symbol::Symbol;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

/// Aggregate results of a batch of spins.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimulationStats {
    pub spins: u64,
    /// Spins with at least one collapse, paying or not.
    pub winning_spins: u64,
    /// Sum of every spin's total multiplier.
    pub total_multiplier: f64,
    pub total_cascades: u64,
    pub max_cascades: usize,
    pub max_multiplier: f64,
}

impl SimulationStats {
    /// Fraction of spins that cascaded at least once.
    pub fn hit_rate(&self) -> f64 {
        if self.spins == 0 {
            0.0
        } else {
            self.winning_spins as f64 / self.spins as f64
        }
    }

    /// Average total multiplier per spin.
    pub fn mean_multiplier(&self) -> f64 {
        if self.spins == 0 {
            0.0
        } else {
            self.total_multiplier / self.spins as f64
        }
    }

    /// Average number of collapses per spin.
    pub fn mean_cascades(&self) -> f64 {
        if self.spins == 0 {
            0.0
        } else {
            self.total_cascades as f64 / self.spins as f64
        }
    }
}

/// Runs `spins` spins and aggregates their outcomes.
///
/// # Errors
/// Stops at the first spin that fails and returns its error.
pub fn run_simulation<T: Symbol>(
    engine: &SpinEngine<T>,
    spins: u64,
    start_seed: u64,
) -> Result<SimulationStats, SpinError> {
    let mut stats = SimulationStats::default();
    for i in 0..spins {
        let seed = start_seed.wrapping_add(i);
        let result = engine.spin(&mut SmallRng::seed_from_u64(seed))?;
        let total = result.total_multiplier();
        debug!(seed, cascades = result.cascade_count(), total, "spin finished");

        stats.spins += 1;
        if result.cascade_count() > 0 {
            stats.winning_spins += 1;
        }
        stats.total_multiplier += total;
        stats.total_cascades += result.cascade_count() as u64;
        stats.max_cascades = stats.max_cascades.max(result.cascade_count());
        stats.max_multiplier = stats.max_multiplier.max(total);
    }
    Ok(stats)
}
