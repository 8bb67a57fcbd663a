//! Winning-cluster discovery.
//!
//! One matching pass walks the board in ascending index order and flood-fills
//! from every cell that may seed a cluster. Cells of a winning cluster are
//! claimed for the rest of the pass, except wilds: a wild can be shared by
//! every cluster that grows into it. Because seeds are tried in ascending
//! order, the lowest-indexed seed reaches contested wilds first.
use crate::board::Board;
use crate::config::GameConfig;
use crate::symbol::Symbol;
use serde::Serialize;
use tracing::trace;

/// A connected group of cells that all hold the seed symbol or a wild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cluster<T: Symbol> {
    seed: T,
    /// Flat board indices in discovery order; the seed cell comes first.
    cells: Vec<usize>,
}

impl<T: Symbol> Cluster<T> {
    /// The symbol the flood fill started from. Never a wild or a scatter.
    pub fn seed(&self) -> T {
        self.seed
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Finds every winning cluster on `board`.
///
/// A cluster wins when it has at least `config.min_cluster()` cells. The
/// returned clusters never share a non-wild cell; they may share wilds.
/// Clusters are ordered by seed index.
///
/// # Examples
/// ```
/// use cascade_slots::cluster::find_clusters;
/// use cascade_slots::utils::board_from_str_array;
/// use cascade_slots::variants::vegetable_fiesta::{self, VegetableFiestaTile as V};
///
/// let config = vegetable_fiesta::config()
///     .with_side(3).unwrap()
///     .with_min_cluster(4).unwrap();
/// let board = board_from_str_array::<V>(3, &["TT$", "TW$", "$$$"]).unwrap();
/// let clusters = find_clusters(&board, &config);
/// assert_eq!(clusters.len(), 1);
/// assert_eq!(clusters[0].seed(), V::Tomato);
/// assert_eq!(clusters[0].len(), 4);
/// ```
pub fn find_clusters<T: Symbol>(board: &Board<T>, config: &GameConfig<T>) -> Vec<Cluster<T>> {
    let mut claimed = vec![false; board.len()];
    let mut visited = vec![false; board.len()];
    let mut clusters = Vec::new();

    for start in 0..board.len() {
        let seed = board.get(start);
        if !config.can_seed(seed) || claimed[start] {
            continue;
        }

        let cells = flood_fill(board, config, start, seed, &claimed, &mut visited);
        for &i in &cells {
            visited[i] = false;
        }
        if cells.len() < config.min_cluster() {
            // Losing fills claim nothing, so their wilds stay available.
            continue;
        }

        for &i in &cells {
            if !config.is_wild(board.get(i)) {
                claimed[i] = true;
            }
        }
        trace!(seed = ?seed, start, size = cells.len(), "winning cluster");
        clusters.push(Cluster { seed, cells });
    }

    clusters
}

/// Collects every cell reachable from `start` through orthogonal neighbours
/// holding `seed` or a wild, skipping cells already claimed this pass.
///
/// Uses an explicit stack so large boards cannot exhaust the call stack.
/// `visited` must be all `false` on entry; exactly the returned cells are
/// left marked.
fn flood_fill<T: Symbol>(
    board: &Board<T>,
    config: &GameConfig<T>,
    start: usize,
    seed: T,
    claimed: &[bool],
    visited: &mut [bool],
) -> Vec<usize> {
    let mut cells = Vec::new();
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(i) = stack.pop() {
        cells.push(i);
        for n in board.neighbors(i) {
            if !visited[n] && !claimed[n] && config.joins(seed, board.get(n)) {
                visited[n] = true;
                stack.push(n);
            }
        }
    }

    cells
}
