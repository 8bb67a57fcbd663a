//! The cascade loop: find clusters, score them, collapse, repeat.
//!
//! A spin deals a fresh board and then runs matching passes until one finds
//! no winning cluster. Every pass that does find clusters produces one
//! [`CascadeStep`]: the board after the collapse and the positive multipliers
//! paid for the clusters that triggered it. The pass that finds nothing adds
//! no step; the settled board is the last step's board.
use crate::board::Board;
use crate::cluster::find_clusters;
use crate::collapse::collapse;
use crate::config::GameConfig;
use crate::error::SpinError;
use crate::scorer::score_clusters;
use crate::symbol::Symbol;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

/// One collapse of the cascade.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CascadeStep<T: Symbol> {
    board: Board<T>,
    multipliers: Vec<f64>,
}

impl<T: Symbol> CascadeStep<T> {
    /// The board immediately after this collapse (refilled, no empty cells).
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// Positive multipliers of the clusters removed by this collapse, in
    /// cluster order. Non-paying clusters are left out.
    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    pub fn total_multiplier(&self) -> f64 {
        self.multipliers.iter().sum()
    }
}

/// Complete trace of one spin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpinResult<T: Symbol> {
    initial: Board<T>,
    steps: Vec<CascadeStep<T>>,
}

impl<T: Symbol> SpinResult<T> {
    /// The board as dealt, before any matching.
    pub fn initial_board(&self) -> &Board<T> {
        &self.initial
    }

    /// Collapses in cascade order.
    pub fn steps(&self) -> &[CascadeStep<T>] {
        &self.steps
    }

    /// Number of collapses the spin went through.
    pub fn cascade_count(&self) -> usize {
        self.steps.len()
    }

    /// The settled board: the last step's board, or the initial board when
    /// nothing matched.
    pub fn final_board(&self) -> &Board<T> {
        self.steps.last().map_or(&self.initial, |s| &s.board)
    }

    /// Sum of every multiplier awarded during the spin.
    pub fn total_multiplier(&self) -> f64 {
        self.steps.iter().map(CascadeStep::total_multiplier).sum()
    }
}

/// Runs spins for one game variant.
///
/// The engine holds only the immutable configuration; each spin owns its board
/// and borrows the random generator it is given, so one engine can serve
/// independent spins on several threads as long as each has its own generator.
#[derive(Clone, Debug)]
pub struct SpinEngine<T: Symbol> {
    config: GameConfig<T>,
}

impl<T: Symbol> SpinEngine<T> {
    pub fn new(config: GameConfig<T>) -> Self {
        SpinEngine { config }
    }

    pub fn config(&self) -> &GameConfig<T> {
        &self.config
    }

    /// Deals a random board and cascades it to a settled state.
    ///
    /// Deterministic for a given generator state.
    ///
    /// # Errors
    /// * [`SpinError::UnknownSymbol`] if a cluster pays as a symbol missing
    ///   from the payout table.
    /// * [`SpinError::RoundLimit`] if the cascade has not settled after
    ///   `config.max_rounds()` collapses.
    ///
    /// # Examples
    /// ```
    /// use cascade_slots::spin::SpinEngine;
    /// use cascade_slots::variants::vegetable_fiesta;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let engine = SpinEngine::new(vegetable_fiesta::config());
    /// let a = engine.spin(&mut SmallRng::seed_from_u64(42)).unwrap();
    /// let b = engine.spin(&mut SmallRng::seed_from_u64(42)).unwrap();
    /// assert_eq!(a, b);
    /// assert!(a.total_multiplier() >= 0.0);
    /// ```
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SpinResult<T>, SpinError> {
        let board = Board::new_random(&self.config, rng);
        self.cascade(board, rng)
    }

    /// Cascades a given board to a settled state, refilling from `rng`.
    ///
    /// # Errors
    /// Same as [`SpinEngine::spin`], plus [`SpinError::BoardSize`] if the
    /// board's side differs from the configured side.
    pub fn cascade<R: Rng + ?Sized>(
        &self,
        initial: Board<T>,
        rng: &mut R,
    ) -> Result<SpinResult<T>, SpinError> {
        if initial.side() != self.config.side() {
            return Err(SpinError::BoardSize {
                expected: self.config.side(),
                found: initial.side(),
            });
        }

        let mut board = initial.clone();
        let mut steps = Vec::new();

        loop {
            let clusters = find_clusters(&board, &self.config);
            if clusters.is_empty() {
                debug!(rounds = steps.len(), "cascade settled");
                break;
            }
            if steps.len() == self.config.max_rounds() {
                warn!(rounds = steps.len(), "cascade round cap reached");
                return Err(SpinError::RoundLimit {
                    rounds: self.config.max_rounds(),
                });
            }

            let multipliers = score_clusters(&clusters, &board, &self.config)?;
            debug!(
                round = steps.len() + 1,
                clusters = clusters.len(),
                multipliers = ?multipliers,
                "cascade round"
            );
            collapse(&mut board, &clusters, &self.config, rng);
            steps.push(CascadeStep {
                board: board.clone(),
                multipliers,
            });
        }

        Ok(SpinResult { initial, steps })
    }
}
