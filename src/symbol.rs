//! The symbol alphabet a game variant draws its tiles from.
//!
//! A variant supplies a closed enumeration of tile values by implementing
//! [`Symbol`]. Which of those values act as the empty marker, as wilds or as
//! scatters is not a property of the type; it is declared by the variant's
//! [`GameConfig`](crate::config::GameConfig).
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// A tile value of one game variant.
///
/// # Examples
/// ```
/// use cascade_slots::symbol::Symbol;
/// use cascade_slots::variants::vegetable_fiesta::VegetableFiestaTile;
///
/// assert_eq!(VegetableFiestaTile::Tomato.to_char(), 'T');
/// assert_eq!(VegetableFiestaTile::from_char('T'), Some(VegetableFiestaTile::Tomato));
/// assert!(VegetableFiestaTile::ALL.contains(&VegetableFiestaTile::Wild));
/// ```
pub trait Symbol: Copy + Eq + Hash + Debug + Serialize + 'static {
    /// Every value of the enumeration, in declaration order.
    const ALL: &'static [Self];

    /// Single-character code used for text display and board files.
    fn to_char(self) -> char;

    /// Inverse of [`Symbol::to_char`]. Returns `None` for unknown characters.
    fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.to_char() == c)
    }
}
