//! Board collapse after a winning pass: removal, gravity and refill.
use crate::board::Board;
use crate::cluster::Cluster;
use crate::config::GameConfig;
use crate::symbol::Symbol;
use rand::Rng;

/// Sets every cell of every cluster to the empty marker.
///
/// Wilds shared by several clusters are simply emptied once.
pub fn remove_clusters<T: Symbol>(board: &mut Board<T>, clusters: &[Cluster<T>], empty: T) {
    for cluster in clusters {
        for &i in cluster.cells() {
            board.set(i, empty);
        }
    }
}

/// Applies gravity to the board column by column.
///
/// Within each column the non-empty tiles keep their top-to-bottom order and
/// drop to the bottom; the freed cells gather at the top as `empty`.
pub fn apply_gravity<T: Symbol>(board: &mut Board<T>, empty: T) {
    let side = board.side();
    for c in 0..side {
        // Walk upwards from the bottom, moving each tile to the lowest free slot.
        let mut write_row = side;
        for r in (0..side).rev() {
            let tile = board.get_tile(r, c);
            if tile == empty {
                continue;
            }
            write_row -= 1;
            if write_row != r {
                board.set_tile(write_row, c, tile);
                board.set_tile(r, c, empty);
            }
        }
    }
}

/// Replaces every empty cell, top row first, with a symbol drawn uniformly
/// from the configuration's eligible pool. Returns the number of cells filled.
pub fn refill<T: Symbol, R: Rng + ?Sized>(
    board: &mut Board<T>,
    config: &GameConfig<T>,
    rng: &mut R,
) -> usize {
    let pool = config.eligible();
    let empty = config.empty();
    let mut filled = 0;
    for i in 0..board.len() {
        if board.get(i) == empty {
            board.set(i, pool[rng.gen_range(0..pool.len())]);
            filled += 1;
        }
    }
    filled
}

/// Advances `board` to its next state: removes the winning clusters, lets
/// the remaining tiles fall and refills the gaps.
pub fn collapse<T: Symbol, R: Rng + ?Sized>(
    board: &mut Board<T>,
    clusters: &[Cluster<T>],
    config: &GameConfig<T>,
    rng: &mut R,
) {
    let empty = config.empty();
    remove_clusters(board, clusters, empty);
    apply_gravity(board, empty);
    refill(board, config, rng);
}
