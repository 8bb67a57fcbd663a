//! "Vegetable Fiesta": a 10x10 cluster-pays game with one wild and one scatter.
use crate::config::{GameConfig, TileRoles, NO_PAYOUT};
use crate::symbol::Symbol;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VegetableFiestaTile {
    /// A vacated cell waiting for gravity and refill.
    Empty,
    Scatter,
    Star,
    Heart,
    Carrot,
    Lettuce,
    Cucumber,
    Beets,
    Tomato,
    Wild,
}

impl Symbol for VegetableFiestaTile {
    const ALL: &'static [Self] = &[
        VegetableFiestaTile::Empty,
        VegetableFiestaTile::Scatter,
        VegetableFiestaTile::Star,
        VegetableFiestaTile::Heart,
        VegetableFiestaTile::Carrot,
        VegetableFiestaTile::Lettuce,
        VegetableFiestaTile::Cucumber,
        VegetableFiestaTile::Beets,
        VegetableFiestaTile::Tomato,
        VegetableFiestaTile::Wild,
    ];

    fn to_char(self) -> char {
        match self {
            VegetableFiestaTile::Empty => '.',
            VegetableFiestaTile::Scatter => '$',
            VegetableFiestaTile::Star => 'S',
            VegetableFiestaTile::Heart => 'H',
            VegetableFiestaTile::Carrot => 'C',
            VegetableFiestaTile::Lettuce => 'L',
            VegetableFiestaTile::Cucumber => 'U',
            VegetableFiestaTile::Beets => 'B',
            VegetableFiestaTile::Tomato => 'T',
            VegetableFiestaTile::Wild => 'W',
        }
    }
}

impl VegetableFiestaTile {
    /// Base payout rate; [`NO_PAYOUT`] for tiles that never pay.
    pub fn base_rate(self) -> f64 {
        match self {
            VegetableFiestaTile::Empty => NO_PAYOUT,
            VegetableFiestaTile::Scatter => NO_PAYOUT,
            VegetableFiestaTile::Star => 0.5,
            VegetableFiestaTile::Heart => 0.4,
            VegetableFiestaTile::Carrot => 0.6,
            VegetableFiestaTile::Lettuce => 0.8,
            VegetableFiestaTile::Cucumber => 1.0,
            VegetableFiestaTile::Beets => 1.5,
            VegetableFiestaTile::Tomato => 2.0,
            VegetableFiestaTile::Wild => NO_PAYOUT,
        }
    }
}

/// The standard configuration: 10x10 board, clusters of 6 or more, every
/// non-empty tile (wild and scatter included) in the dealing pool.
pub fn config() -> GameConfig<VegetableFiestaTile> {
    let roles = TileRoles {
        empty: VegetableFiestaTile::Empty,
        wilds: vec![VegetableFiestaTile::Wild],
        scatters: vec![VegetableFiestaTile::Scatter],
    };
    let eligible = VegetableFiestaTile::ALL
        .iter()
        .copied()
        .filter(|&t| t != VegetableFiestaTile::Empty)
        .collect();
    let rates = VegetableFiestaTile::ALL.iter().map(|&t| (t, t.base_rate()));
    match GameConfig::new(roles, eligible, rates) {
        Ok(config) => config,
        // Rates and roles above cover every tile.
        Err(e) => unreachable!("vegetable fiesta configuration is invalid: {e}"),
    }
}
