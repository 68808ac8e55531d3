//! Action representation: a `(row, col)` coordinate on the board.
//!
//! Coordinates are signed so that out-of-range requests coming from a
//! caller (e.g. a parsed human move of `(-1, 0)`) are representable and
//! can be rejected by `Board::apply_action` instead of wrapping silently.
//! An action is only *legal* relative to a particular board: it must be in
//! bounds and address an empty cell.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;

/// A move: place the current player's mark at `(row, col)`.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::Action;
///
/// let center = Action::new(1, 1);
/// assert!(center.in_bounds());
/// assert_eq!(center.index(), Some(4));
///
/// let off_board = Action::new(3, 0);
/// assert!(!off_board.in_bounds());
/// assert_eq!(off_board.index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, valid in `0..3`.
    pub row: i32,

    /// Column, valid in `0..3`.
    pub col: i32,
}

impl Action {
    /// Create an action for the given coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create an action from a row-major cell index (`0..9`).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE) as i32,
            col: (index % BOARD_SIZE) as i32,
        }
    }

    /// Check if both coordinates address a square on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i32 && self.col >= 0 && self.col < BOARD_SIZE as i32
    }

    /// Row-major index of the addressed square, if in bounds.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Action {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        for row in 0..3 {
            for col in 0..3 {
                assert!(Action::new(row, col).in_bounds());
            }
        }

        assert!(!Action::new(3, 0).in_bounds());
        assert!(!Action::new(0, 3).in_bounds());
        assert!(!Action::new(-1, 0).in_bounds());
        assert!(!Action::new(0, -1).in_bounds());
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            assert_eq!(Action::from_index(index).index(), Some(index));
        }
        assert_eq!(Action::from_index(5), Action::new(1, 2));
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }

    #[test]
    fn test_from_tuple() {
        let action: Action = (2, 1).into();
        assert_eq!(action, Action::new(2, 1));
        assert_eq!(action.to_string(), "(2, 1)");
    }
}
