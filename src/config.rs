//! Per-variant game configuration.
//!
//! A [`GameConfig`] is everything the engine needs to know about one game
//! variant: board dimensions, the minimum winning cluster, which symbols play
//! special roles, which symbols may be dealt onto the board and the payout
//! table. It is validated once, when built, so a spin never has to guess what
//! an unknown symbol is worth.
use crate::error::ConfigError;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};

/// Default side length of the square board (a 10x10 grid).
pub const DEFAULT_SIDE: usize = 10;

/// Default minimum number of cells in a winning cluster.
pub const DEFAULT_MIN_CLUSTER: usize = 6;

/// Default number of cascade rounds after which a spin is aborted.
pub const DEFAULT_MAX_ROUNDS: usize = 1000;

/// Base rate that marks a symbol as never paying.
pub const NO_PAYOUT: f64 = -1.0;

/// Special matching roles declared by a variant.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRoles<T: Symbol> {
    /// Marker for a vacated cell. Never seeds, never matches.
    pub empty: T,
    /// Jokers: join any cluster, never seed one.
    pub wilds: Vec<T>,
    /// Excluded from clustering entirely.
    pub scatters: Vec<T>,
}

/// Validated configuration of one game variant.
#[derive(Debug, Clone)]
pub struct GameConfig<T: Symbol> {
    side: usize,
    min_cluster: usize,
    max_rounds: usize,
    roles: TileRoles<T>,
    eligible: Vec<T>,
    base_rates: HashMap<T, f64>,
}

impl<T: Symbol> GameConfig<T> {
    /// Builds a configuration with the default dimensions
    /// ([`DEFAULT_SIDE`], [`DEFAULT_MIN_CLUSTER`], [`DEFAULT_MAX_ROUNDS`]).
    ///
    /// `eligible` is the pool used both for the initial deal and for refills.
    /// `base_rates` must name every symbol of `T::ALL`; use [`NO_PAYOUT`] (or
    /// any negative rate) for symbols that never pay.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] describing the first rule the configuration
    /// breaks.
    pub fn new(
        roles: TileRoles<T>,
        eligible: Vec<T>,
        base_rates: impl IntoIterator<Item = (T, f64)>,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            side: DEFAULT_SIDE,
            min_cluster: DEFAULT_MIN_CLUSTER,
            max_rounds: DEFAULT_MAX_ROUNDS,
            roles,
            eligible,
            base_rates: base_rates.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different board side length.
    pub fn with_side(mut self, side: usize) -> Result<Self, ConfigError> {
        self.side = side;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different minimum winning cluster size.
    pub fn with_min_cluster(mut self, min_cluster: usize) -> Result<Self, ConfigError> {
        self.min_cluster = min_cluster;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different cascade round cap.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Result<Self, ConfigError> {
        self.max_rounds = max_rounds;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy that deals and refills from a different symbol pool.
    pub fn with_eligible(mut self, eligible: Vec<T>) -> Result<Self, ConfigError> {
        self.eligible = eligible;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(missing) = T::ALL.iter().find(|&&s| !self.base_rates.contains_key(&s)) {
            return Err(ConfigError::MissingBaseRate {
                symbol: format!("{:?}", missing),
            });
        }
        if self.side == 0 {
            return Err(ConfigError::ZeroSide);
        }
        if self.min_cluster == 0 {
            return Err(ConfigError::ZeroMinCluster);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRoundCap);
        }

        let empty = self.roles.empty;
        if self.is_wild(empty) {
            return Err(conflict(empty, "empty", "wild"));
        }
        if self.is_scatter(empty) {
            return Err(conflict(empty, "empty", "scatter"));
        }
        if let Some(&both) = self.roles.wilds.iter().find(|w| self.is_scatter(**w)) {
            return Err(conflict(both, "wild", "scatter"));
        }

        if self.eligible.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        if self.eligible.contains(&empty) {
            return Err(ConfigError::EmptyInPool {
                symbol: format!("{:?}", empty),
            });
        }

        // A pool with a single matching symbol and nothing to break it up
        // fills the whole board with one cluster on every refill.
        let ordinary: HashSet<T> = self
            .eligible
            .iter()
            .copied()
            .filter(|&s| self.can_seed(s))
            .collect();
        let has_scatter = self.eligible.iter().any(|&s| self.is_scatter(s));
        if ordinary.len() == 1 && !has_scatter && self.cell_count() >= self.min_cluster {
            if let Some(only) = ordinary.iter().next() {
                return Err(ConfigError::DegeneratePool {
                    symbol: format!("{:?}", only),
                });
            }
        }
        Ok(())
    }

    /// Side length of the square board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells on the board (`side * side`).
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    pub fn min_cluster(&self) -> usize {
        self.min_cluster
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    pub fn roles(&self) -> &TileRoles<T> {
        &self.roles
    }

    /// The empty marker.
    pub fn empty(&self) -> T {
        self.roles.empty
    }

    /// Symbols dealt onto the board initially and on every refill.
    pub fn eligible(&self) -> &[T] {
        &self.eligible
    }

    pub fn is_empty_tile(&self, symbol: T) -> bool {
        symbol == self.roles.empty
    }

    pub fn is_wild(&self, symbol: T) -> bool {
        self.roles.wilds.contains(&symbol)
    }

    pub fn is_scatter(&self, symbol: T) -> bool {
        self.roles.scatters.contains(&symbol)
    }

    /// Whether a flood fill may start from a cell holding `symbol`.
    pub fn can_seed(&self, symbol: T) -> bool {
        !self.is_empty_tile(symbol) && !self.is_wild(symbol) && !self.is_scatter(symbol)
    }

    /// Whether a cell holding `symbol` joins a cluster seeded by `seed`.
    pub fn joins(&self, seed: T, symbol: T) -> bool {
        symbol == seed || self.is_wild(symbol)
    }

    /// Base payout rate of `symbol`. Negative rates never pay.
    pub fn base_rate(&self, symbol: T) -> Option<f64> {
        self.base_rates.get(&symbol).copied()
    }

    /// Drops a payout table entry without re-validating, to exercise the
    /// runtime lookup failure.
    #[cfg(test)]
    pub(crate) fn without_base_rate(mut self, symbol: T) -> Self {
        self.base_rates.remove(&symbol);
        self
    }
}

fn conflict<T: Symbol>(symbol: T, first: &'static str, second: &'static str) -> ConfigError {
    ConfigError::ConflictingRoles {
        symbol: format!("{:?}", symbol),
        first,
        second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::vegetable_fiesta::{self, VegetableFiestaTile as V};

    fn roles() -> TileRoles<V> {
        TileRoles {
            empty: V::Empty,
            wilds: vec![V::Wild],
            scatters: vec![V::Scatter],
        }
    }

    fn full_rates() -> Vec<(V, f64)> {
        V::ALL.iter().map(|&s| (s, 1.0)).collect()
    }

    #[test]
    fn test_default_dimensions() {
        let config = vegetable_fiesta::config();
        assert_eq!(config.side(), DEFAULT_SIDE);
        assert_eq!(config.cell_count(), 100);
        assert_eq!(config.min_cluster(), DEFAULT_MIN_CLUSTER);
        assert_eq!(config.max_rounds(), DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn test_missing_base_rate_is_rejected() {
        let rates: Vec<(V, f64)> = full_rates()
            .into_iter()
            .filter(|(s, _)| *s != V::Carrot)
            .collect();
        let err = GameConfig::new(roles(), vec![V::Star, V::Heart], rates).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingBaseRate {
                symbol: "Carrot".to_string()
            }
        );
    }

    #[test]
    fn test_empty_in_pool_is_rejected() {
        let err = GameConfig::new(roles(), vec![V::Star, V::Empty], full_rates()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyInPool { .. }));
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let err = GameConfig::new(roles(), vec![], full_rates()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPool);
    }

    #[test]
    fn test_conflicting_roles_are_rejected() {
        let mut r = roles();
        r.scatters.push(V::Wild);
        let err = GameConfig::new(r, vec![V::Star, V::Heart], full_rates()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConflictingRoles {
                first: "wild",
                second: "scatter",
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_pool_is_rejected() {
        let err = GameConfig::new(roles(), vec![V::Star, V::Wild], full_rates()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DegeneratePool {
                symbol: "Star".to_string()
            }
        );

        // A scatter in the pool can break clusters apart, so it is accepted.
        assert!(GameConfig::new(roles(), vec![V::Star, V::Scatter], full_rates()).is_ok());
        // So is a board too small to ever hold a winning cluster.
        let tiny = GameConfig::new(roles(), vec![V::Star, V::Heart], full_rates())
            .unwrap()
            .with_side(2)
            .unwrap();
        assert!(tiny.with_eligible(vec![V::Star]).is_ok());
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let config = vegetable_fiesta::config();
        assert_eq!(config.clone().with_side(0).unwrap_err(), ConfigError::ZeroSide);
        assert_eq!(
            config.clone().with_min_cluster(0).unwrap_err(),
            ConfigError::ZeroMinCluster
        );
        assert_eq!(config.with_max_rounds(0).unwrap_err(), ConfigError::ZeroRoundCap);
    }

    #[test]
    fn test_roles() {
        let config = vegetable_fiesta::config();
        assert!(config.can_seed(V::Tomato));
        assert!(!config.can_seed(V::Wild));
        assert!(!config.can_seed(V::Scatter));
        assert!(!config.can_seed(V::Empty));
        assert!(config.joins(V::Tomato, V::Tomato));
        assert!(config.joins(V::Tomato, V::Wild));
        assert!(!config.joins(V::Tomato, V::Beets));
        assert!(!config.joins(V::Tomato, V::Scatter));
    }
}
