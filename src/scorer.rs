//! Cluster payouts.
//!
//! A winning cluster of `n` cells pays `base_rate * (n - min + 1)^2`, where
//! `min` is the minimum winning size and the base rate belongs to the
//! cluster's paying symbol. A negative result means the cluster pays nothing;
//! it is still removed from the board.
use crate::board::Board;
use crate::cluster::Cluster;
use crate::config::GameConfig;
use crate::error::SpinError;
use crate::symbol::Symbol;

/// The symbol a cluster pays as: its first non-wild cell, or the wild itself
/// when every cell is wild.
pub fn paying_symbol<T: Symbol>(
    cluster: &Cluster<T>,
    board: &Board<T>,
    config: &GameConfig<T>,
) -> T {
    let tiles = || cluster.cells().iter().map(|&i| board.get(i));
    tiles()
        .find(|&t| !config.is_wild(t))
        .or_else(|| tiles().next())
        .unwrap_or(cluster.seed())
}

/// Payout multiplier of one cluster.
///
/// Clusters below the minimum size, and clusters paying as a symbol with a
/// negative base rate, return a negative multiplier.
///
/// # Errors
/// Returns [`SpinError::UnknownSymbol`] if the paying symbol has no base rate.
///
/// # Examples
/// ```
/// use cascade_slots::cluster::find_clusters;
/// use cascade_slots::scorer::multiplier;
/// use cascade_slots::utils::board_from_str_array;
/// use cascade_slots::variants::vegetable_fiesta::{self, VegetableFiestaTile as V};
///
/// let config = vegetable_fiesta::config()
///     .with_side(3).unwrap()
///     .with_min_cluster(4).unwrap();
/// let board = board_from_str_array::<V>(3, &["TTT", "TT$", "$$$"]).unwrap();
/// let clusters = find_clusters(&board, &config);
/// // Five tomatoes, one over the minimum: 2.0 * (5 - 4 + 1)^2.
/// assert_eq!(multiplier(&clusters[0], &board, &config).unwrap(), 8.0);
/// ```
pub fn multiplier<T: Symbol>(
    cluster: &Cluster<T>,
    board: &Board<T>,
    config: &GameConfig<T>,
) -> Result<f64, SpinError> {
    let symbol = paying_symbol(cluster, board, config);
    let rate = config
        .base_rate(symbol)
        .ok_or_else(|| SpinError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        })?;

    let size = cluster.len();
    if size < config.min_cluster() {
        return Ok(-1.0);
    }
    let excess = (size - config.min_cluster() + 1) as f64;
    Ok(rate * excess * excess)
}

/// Positive multipliers of `clusters`, in cluster order.
pub fn score_clusters<T: Symbol>(
    clusters: &[Cluster<T>],
    board: &Board<T>,
    config: &GameConfig<T>,
) -> Result<Vec<f64>, SpinError> {
    let mut multipliers = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let m = multiplier(cluster, board, config)?;
        if m > 0.0 {
            multipliers.push(m);
        }
    }
    Ok(multipliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::find_clusters;
    use crate::utils::board_from_str_array;
    use crate::variants::vegetable_fiesta::{self, VegetableFiestaTile as V};

    fn column_board(rows_of_tomato: usize, wild_at_bottom: bool) -> Board<V> {
        let mut rows = vec!["$$$$$$$$$$".to_string(); 10];
        for row in rows.iter_mut().take(rows_of_tomato) {
            row.replace_range(0..1, "T");
        }
        if wild_at_bottom {
            rows[rows_of_tomato].replace_range(0..1, "W");
        }
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        board_from_str_array(10, &refs).unwrap()
    }

    fn only_multiplier(board: &Board<V>) -> f64 {
        let config = vegetable_fiesta::config();
        let clusters = find_clusters(board, &config);
        assert_eq!(clusters.len(), 1);
        multiplier(&clusters[0], board, &config).unwrap()
    }

    #[test]
    fn test_multiplier_grows_with_square_of_excess() {
        assert_eq!(only_multiplier(&column_board(6, false)), 2.0);
        assert_eq!(only_multiplier(&column_board(7, false)), 8.0);
        assert_eq!(only_multiplier(&column_board(8, false)), 18.0);
    }

    #[test]
    fn test_wild_counts_toward_size_but_not_symbol() {
        // Five tomatoes and a wild pay as a six-tomato cluster.
        assert_eq!(only_multiplier(&column_board(5, true)), 2.0);
    }

    #[test]
    fn test_paying_symbol_skips_wilds() {
        let config = vegetable_fiesta::config()
            .with_side(3)
            .unwrap()
            .with_min_cluster(3)
            .unwrap();
        let board = board_from_str_array::<V>(3, &["WWB", "$$B", "$$$"]).unwrap();
        let clusters = find_clusters(&board, &config);
        assert_eq!(clusters.len(), 1);
        assert_eq!(paying_symbol(&clusters[0], &board, &config), V::Beets);
        assert_eq!(multiplier(&clusters[0], &board, &config).unwrap(), 1.5);
    }

    #[test]
    fn test_no_payout_symbols_score_negative() {
        let config = vegetable_fiesta::config()
            .with_side(3)
            .unwrap()
            .with_min_cluster(3)
            .unwrap();
        let board = board_from_str_array::<V>(3, &["HHH", "$$$", "$$$"]).unwrap();
        let clusters = find_clusters(&board, &config);

        // Re-rate hearts as non-paying through a fresh configuration.
        let rates = V::ALL.iter().map(|&t| {
            let rate = if t == V::Heart { -1.0 } else { t.base_rate() };
            (t, rate)
        });
        let silent = GameConfig::new(config.roles().clone(), config.eligible().to_vec(), rates)
            .unwrap()
            .with_side(3)
            .unwrap()
            .with_min_cluster(3)
            .unwrap();
        assert!(multiplier(&clusters[0], &board, &silent).unwrap() < 0.0);
        assert!(score_clusters(&clusters, &board, &silent).unwrap().is_empty());
        assert_eq!(score_clusters(&clusters, &board, &config).unwrap(), vec![0.4]);
    }

    #[test]
    fn test_unknown_symbol_is_fatal() {
        let config = vegetable_fiesta::config();
        let board = column_board(6, false);
        let clusters = find_clusters(&board, &config);
        let broken = config.without_base_rate(V::Tomato);
        assert_eq!(
            multiplier(&clusters[0], &board, &broken).unwrap_err(),
            SpinError::UnknownSymbol {
                symbol: "Tomato".to_string()
            }
        );
        assert!(score_clusters(&clusters, &board, &broken).is_err());
    }

    #[test]
    fn test_score_clusters_keeps_cluster_order() {
        let config = vegetable_fiesta::config()
            .with_side(7)
            .unwrap()
            .with_min_cluster(4)
            .unwrap();
        let board = board_from_str_array::<V>(
            7,
            &["SSSWTTT", "$$$$$$$", "$$$$$$$", "$$$$$$$", "$$$$$$$", "$$$$$$$", "$$$$$$$"],
        )
        .unwrap();
        let clusters = find_clusters(&board, &config);
        assert_eq!(score_clusters(&clusters, &board, &config).unwrap(), vec![0.5, 2.0]);
    }
}
