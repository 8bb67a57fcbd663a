//! # Cascade Slots
//!
//! This library computes the outcome of a single spin of a cascading
//! cluster-pays slot game. A spin deals a random square board, then
//! repeatedly finds connected clusters of matching symbols, pays them,
//! removes them, lets the remaining symbols fall and refills the gaps, until
//! no cluster is left.
//!
//! It is used by two binaries:
//! - `spin`: Runs one seeded spin (or cascades a board read from a file) and
//!   prints every cascade step, as text or JSON.
//! - `simulate`: Runs a batch of seeded spins and prints aggregate statistics.
//!
//! ## Modules
//! - `symbol`: The `Symbol` trait a game variant's tile enumeration implements.
//! - `config`: `GameConfig`, the validated per-variant configuration (tile roles,
//!   payout table, board dimensions, round cap).
//! - `error`: `ConfigError` and `SpinError`.
//! - `board`: The flat row-major `Board`.
//! - `cluster`: Flood-fill discovery of winning clusters.
//! - `scorer`: Cluster payout multipliers.
//! - `collapse`: Removal, gravity and refill.
//! - `spin`: `SpinEngine`, `SpinResult` and `CascadeStep`.
//! - `simulate`: Batch statistics over many seeded spins.
//! - `variants`: Concrete game variants.
//! - `utils`: Board parsing from text.
//!
//! ```
//! use cascade_slots::spin::SpinEngine;
//! use cascade_slots::variants::vegetable_fiesta;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let engine = SpinEngine::new(vegetable_fiesta::config());
//! let result = engine.spin(&mut SmallRng::seed_from_u64(514514)).unwrap();
//! for step in result.steps() {
//!     assert_eq!(step.board().len(), 100);
//! }
//! ```

pub mod board;
pub mod cluster;
pub mod collapse;
pub mod config;
pub mod error;
pub mod scorer;
pub mod simulate;
pub mod spin;
pub mod symbol;
pub mod utils;
pub mod variants;
