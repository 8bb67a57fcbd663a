use crate::board::Board;
use crate::symbol::Symbol;
use std::fs;
use std::path::Path;

/// Parses an array of string slices into a `side` x `side` [`Board`].
///
/// Each string slice is one row, starting from the top (row 0), with one
/// character per cell as given by [`Symbol::to_char`]. Unlike random boards,
/// a parsed board may contain the empty marker or any special tile, which
/// makes it the usual way to set up a specific cascade in tests.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(String)` if:
///     - The number of rows is not `side`.
///     - Any row's character length is not `side`.
///     - An unrecognized character is encountered.
///
/// # Examples
/// ```
/// use cascade_slots::utils::board_from_str_array;
/// use cascade_slots::variants::vegetable_fiesta::VegetableFiestaTile as V;
///
/// let board = board_from_str_array::<V>(3, &["STW", "$..", "HHH"]).unwrap();
/// assert_eq!(board.get_tile(0, 0), V::Star);
/// assert_eq!(board.get_tile(0, 2), V::Wild);
/// assert_eq!(board.get_tile(1, 0), V::Scatter);
/// assert_eq!(board.get_tile(1, 1), V::Empty);
///
/// assert!(board_from_str_array::<V>(3, &["STX", "...", "..."]).is_err());
/// assert!(board_from_str_array::<V>(3, &["STW", "..."]).is_err());
/// ```
pub fn board_from_str_array<T: Symbol>(side: usize, s: &[&str]) -> Result<Board<T>, String> {
    if s.len() != side {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            side,
            s.len()
        ));
    }

    let mut cells = Vec::with_capacity(side * side);
    for (r, row_str) in s.iter().enumerate() {
        let width = row_str.chars().count();
        if width != side {
            return Err(format!(
                "Row {} has {} characters (expected {})",
                r, width, side
            ));
        }
        for (c, ch) in row_str.chars().enumerate() {
            let tile = T::from_char(ch).ok_or_else(|| {
                format!("Unrecognized character '{}' in row {} col {}", ch, r, c)
            })?;
            cells.push(tile);
        }
    }
    Board::from_cells(side, cells)
}

/// Reads a board file: `side` non-blank lines of `side` tile characters.
/// Surrounding whitespace on each line is ignored.
pub fn read_board_file<T: Symbol>(path: &Path, side: usize) -> Result<Board<T>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    board_from_str_array(side, &lines).map_err(|e| format!("Invalid board format: {}", e))
}
