/**
 * Property tests for the cascade engine.
 *
 * Invariants covered:
 * - Every cascade step holds a full board with no empty cells.
 * - Winning clusters meet the minimum size, hold only their seed symbol or
 *   wilds, never start on a wild or scatter, and never share a non-wild cell.
 * - Gravity keeps each column's surviving tiles in order.
 * - Spins are reproducible from a seed and always settle.
 */
use cascade_slots::board::Board;
use cascade_slots::cluster::find_clusters;
use cascade_slots::collapse::{apply_gravity, remove_clusters};
use cascade_slots::config::GameConfig;
use cascade_slots::spin::SpinEngine;
use cascade_slots::symbol::Symbol;
use cascade_slots::variants::vegetable_fiesta::{self, VegetableFiestaTile as V};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A 6x6 game with clusters of 4, small enough for boards to cascade often.
fn small_config() -> GameConfig<V> {
    vegetable_fiesta::config()
        .with_side(6)
        .unwrap()
        .with_min_cluster(4)
        .unwrap()
}

fn non_empty_tile() -> impl Strategy<Value = V> {
    prop::sample::select(
        V::ALL
            .iter()
            .copied()
            .filter(|&t| t != V::Empty)
            .collect::<Vec<_>>(),
    )
}

/// Boards skewed towards a few symbols so that clusters actually form.
fn clustered_board(side: usize) -> impl Strategy<Value = Board<V>> {
    let tile = prop_oneof![
        4 => Just(V::Tomato),
        3 => Just(V::Star),
        2 => Just(V::Wild),
        1 => Just(V::Scatter),
        2 => non_empty_tile(),
    ];
    prop::collection::vec(tile, side * side)
        .prop_map(move |cells| Board::from_cells(side, cells).unwrap())
}

fn assert_clusters_valid(board: &Board<V>, config: &GameConfig<V>) {
    let clusters = find_clusters(board, config);
    let mut claimed = vec![false; board.len()];
    for cluster in &clusters {
        assert!(cluster.len() >= config.min_cluster());
        assert!(config.can_seed(cluster.seed()));
        assert_eq!(board.get(cluster.cells()[0]), cluster.seed());
        for &i in cluster.cells() {
            let tile = board.get(i);
            assert!(tile == cluster.seed() || config.is_wild(tile));
            if !config.is_wild(tile) {
                assert!(!claimed[i], "non-wild cell {} claimed twice", i);
                claimed[i] = true;
            }
        }
    }
}

#[test]
fn end_to_end_single_vertical_cluster() {
    let config = vegetable_fiesta::config()
        .with_eligible(vec![V::Scatter])
        .unwrap();
    let mut cells = vec![V::Scatter; 100];
    for row in 0..6 {
        cells[row * 10] = V::Carrot;
    }
    let board = Board::from_cells(10, cells).unwrap();

    let clusters = find_clusters(&board, &config);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 6);

    let engine = SpinEngine::new(config);
    let result = engine
        .cascade(board, &mut SmallRng::seed_from_u64(8))
        .unwrap();
    assert_eq!(result.cascade_count(), 1);
    assert_eq!(result.steps()[0].multipliers(), &[0.6]);
    assert!(find_clusters(result.final_board(), engine.config()).is_empty());
}

#[test]
fn uniform_board_cascade_halts() {
    let engine = SpinEngine::new(vegetable_fiesta::config());
    for seed in 0..10 {
        let board = Board::filled(10, V::Beets);
        let result = engine
            .cascade(board, &mut SmallRng::seed_from_u64(seed))
            .unwrap();
        assert!(result.cascade_count() >= 1);
        assert!(result.cascade_count() < engine.config().max_rounds());
    }
}

proptest! {
    #[test]
    fn clusters_are_valid_on_any_board(board in clustered_board(6)) {
        assert_clusters_valid(&board, &small_config());
    }

    #[test]
    fn gravity_keeps_column_order(board in clustered_board(6)) {
        let config = small_config();
        let clusters = find_clusters(&board, &config);
        let mut collapsed = board.clone();
        remove_clusters(&mut collapsed, &clusters, V::Empty);
        let removed = collapsed.clone();
        apply_gravity(&mut collapsed, V::Empty);

        for c in 0..6 {
            let before: Vec<V> = (0..6)
                .map(|r| removed.get_tile(r, c))
                .filter(|&t| t != V::Empty)
                .collect();
            let after: Vec<V> = (0..6).map(|r| collapsed.get_tile(r, c)).collect();
            let gap = 6 - before.len();
            prop_assert!(after[..gap].iter().all(|&t| t == V::Empty));
            prop_assert_eq!(&after[gap..], &before[..]);
        }
    }

    #[test]
    fn cascade_steps_conserve_the_board(board in clustered_board(6), seed in any::<u64>()) {
        let config = small_config();
        let engine = SpinEngine::new(config.clone());
        let result = engine.cascade(board, &mut SmallRng::seed_from_u64(seed)).unwrap();
        for step in result.steps() {
            prop_assert_eq!(step.board().len(), 36);
            prop_assert_eq!(step.board().count(V::Empty), 0);
            prop_assert!(step.multipliers().iter().all(|&m| m > 0.0));
            assert_clusters_valid(step.board(), &config);
        }
        prop_assert!(find_clusters(result.final_board(), &config).is_empty());
    }

    #[test]
    fn spins_are_reproducible(seed in any::<u64>()) {
        let engine = SpinEngine::new(vegetable_fiesta::config());
        let a = engine.spin(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let b = engine.spin(&mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
