//! Error types for configuring and running spins.
use thiserror::Error;

/// A variant configuration that the engine refuses to run with.
///
/// These are raised once, when a [`GameConfig`](crate::config::GameConfig) is
/// built, never in the middle of a spin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A symbol of the enumeration has no entry in the payout table.
    #[error("symbol {symbol} has no base rate in the payout table")]
    MissingBaseRate { symbol: String },

    #[error("board side must be at least 1")]
    ZeroSide,

    #[error("minimum cluster size must be at least 1")]
    ZeroMinCluster,

    #[error("round cap must be at least 1")]
    ZeroRoundCap,

    #[error("eligible symbol pool is empty")]
    EmptyPool,

    /// Refilling with the empty marker would leave holes in the board.
    #[error("eligible symbol pool contains the empty marker {symbol}")]
    EmptyInPool { symbol: String },

    /// A symbol was given two roles that exclude each other.
    #[error("symbol {symbol} cannot be both {first} and {second}")]
    ConflictingRoles {
        symbol: String,
        first: &'static str,
        second: &'static str,
    },

    /// Every refill would rebuild a winning cluster, so no spin could end.
    #[error("eligible pool only holds {symbol} as a matching symbol; every refill would match")]
    DegeneratePool { symbol: String },
}

/// Abnormal termination of a spin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    /// A cluster paid as a symbol the payout table does not know.
    #[error("no base rate for symbol {symbol}")]
    UnknownSymbol { symbol: String },

    /// The cascade did not settle within the configured number of rounds.
    #[error("cascade did not settle within {rounds} rounds")]
    RoundLimit { rounds: usize },

    /// A board handed to the engine does not match the configured side.
    #[error("board is {found}x{found}, configuration expects {expected}x{expected}")]
    BoardSize { expected: usize, found: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
