//! The square playing grid.
//!
//! A [`Board`] is a flat, row-major sequence of symbols: index `i` sits at row
//! `i / side` and column `i % side`. Its length is fixed at `side * side` for
//! its whole lifetime; cells are overwritten, never removed.
use crate::config::GameConfig;
use crate::symbol::Symbol;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// Row/column offsets of the four orthogonal neighbours (up, down, left, right).
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<T: Symbol> {
    side: usize,
    cells: Vec<T>,
}

impl<T: Symbol> Board<T> {
    /// Creates a `side` x `side` board with every cell set to `tile`.
    pub fn filled(side: usize, tile: T) -> Self {
        Board {
            side,
            cells: vec![tile; side * side],
        }
    }

    /// Creates a board with every cell set to the configuration's empty marker.
    pub fn new_empty(config: &GameConfig<T>) -> Self {
        Self::filled(config.side(), config.empty())
    }

    /// Deals a fresh board, drawing every cell uniformly from the
    /// configuration's eligible pool.
    ///
    /// # Examples
    /// ```
    /// use cascade_slots::board::Board;
    /// use cascade_slots::variants::vegetable_fiesta;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let config = vegetable_fiesta::config();
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let board = Board::new_random(&config, &mut rng);
    /// assert_eq!(board.len(), 100);
    /// assert!(board.cells().iter().all(|t| config.eligible().contains(t)));
    /// ```
    pub fn new_random<R: Rng + ?Sized>(config: &GameConfig<T>, rng: &mut R) -> Self {
        let pool = config.eligible();
        let cells = (0..config.cell_count())
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        Board {
            side: config.side(),
            cells,
        }
    }

    /// Wraps an existing row-major cell sequence.
    ///
    /// # Errors
    /// Returns an error if `side` is zero or `cells.len()` is not `side * side`.
    pub fn from_cells(side: usize, cells: Vec<T>) -> Result<Self, String> {
        if side == 0 {
            return Err("Board side must be at least 1".to_string());
        }
        if cells.len() != side * side {
            return Err(format!(
                "Expected {} cells for a {}x{} board, found {}",
                side * side,
                side,
                side,
                cells.len()
            ));
        }
        Ok(Board { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells, always `side * side`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Flat index of the cell at (`row`, `col`).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.side
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % self.side
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> T {
        self.cells[index]
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, tile: T) {
        self.cells[index] = tile;
    }

    /// Returns the tile at (`row`, `col`).
    pub fn get_tile(&self, row: usize, col: usize) -> T {
        self.cells[self.index(row, col)]
    }

    pub fn set_tile(&mut self, row: usize, col: usize, tile: T) {
        let i = self.index(row, col);
        self.cells[i] = tile;
    }

    /// Flat indices of the in-bounds orthogonal neighbours of `index`, in
    /// up, down, left, right order.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let row = self.row_of(index) as isize;
        let col = self.col_of(index) as isize;
        let side = self.side as isize;
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let (nr, nc) = (row + dr, col + dc);
            if nr >= 0 && nr < side && nc >= 0 && nc < side {
                Some((nr * side + nc) as usize)
            } else {
                None
            }
        })
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: T) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Copies the board into a vector of rows, top row first.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.chunks(self.side).map(|row| row.to_vec()).collect()
    }
}

impl<T: Symbol> Serialize for Board<T> {
    /// Serializes as a list of rows, top row first.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.chunks(self.side))
    }
}

impl<T: Symbol> fmt::Display for Board<T> {
    /// Prints one character per cell with row and column numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.side {
            write!(f, "{:<2}", c)?;
        }
        for (r, row) in self.cells.chunks(self.side).enumerate() {
            write!(f, "\n{:<3}", r)?;
            for tile in row {
                write!(f, "{:<2}", tile.to_char())?;
            }
        }
        Ok(())
    }
}
