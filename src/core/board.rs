//! Immutable 3x3 board and its state transitions.
//!
//! `Board` is a small `Copy` value. Nothing mutates a board in place:
//! `apply_action` returns a fresh board and leaves its input untouched, so
//! sibling branches of a search can all start from the same parent value.
//!
//! The player to move is never stored. It is derived from the mark counts:
//! X moves whenever X has placed no more marks than O.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;
use super::error::{GameError, InvalidActionReason, Result};
use super::player::{Cell, Player};

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Legal actions for a position. Never more than nine, so kept inline.
pub type ActionList = SmallVec<[Action; CELL_COUNT]>;

/// A Tic-Tac-Toe position.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::{Action, Board, Cell, Player};
///
/// let empty = Board::new();
/// assert_eq!(empty.current_player(), Player::X);
///
/// let next = empty.apply_action(Action::new(1, 1)).unwrap();
/// assert_eq!(next.cell(1, 1), Cell::X);
/// assert_eq!(next.current_player(), Player::O);
///
/// // The predecessor is unchanged.
/// assert_eq!(empty.cell(1, 1), Cell::Empty);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The empty starting board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// No reachability check is made: any combination of marks is accepted.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the cell addressed by an action, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<Cell> {
        action
            .in_bounds()
            .then(|| self.cells[action.row as usize][action.col as usize])
    }

    /// The rows of the board.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Count cells holding the given content.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&c| c == cell).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Check if every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.iter().all(|c| !c.is_empty())
    }

    /// The player to move.
    ///
    /// X when `count(X) <= count(O)`, otherwise O. Total over all boards,
    /// including finished ones where the answer carries no meaning.
    #[must_use]
    pub fn current_player(&self) -> Player {
        if self.count(Cell::X) <= self.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty squares, in row-major order.
    ///
    /// The order is what makes minimax tie-breaking reproducible.
    #[must_use]
    pub fn legal_actions(&self) -> ActionList {
        (0..CELL_COUNT)
            .map(Action::from_index)
            .filter(|&action| self.get(action) == Some(Cell::Empty))
            .collect()
    }

    /// Return the board after the current player marks `action`.
    ///
    /// Fails with `GameError::InvalidAction` if the coordinate is off the
    /// board or the square is occupied.
    pub fn apply_action(&self, action: Action) -> Result<Board> {
        match self.get(action) {
            None => Err(GameError::InvalidAction {
                action,
                reason: InvalidActionReason::OutOfBounds,
            }),
            Some(Cell::Empty) => Ok(self.placed(action, self.current_player().mark())),
            Some(_) => Err(GameError::InvalidAction {
                action,
                reason: InvalidActionReason::Occupied,
            }),
        }
    }

    /// Each legal action paired with the board it produces, in row-major
    /// order. Same results as `apply_action` over `legal_actions`, without
    /// the per-move validation.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let mark = self.current_player().mark();
        self.legal_actions()
            .into_iter()
            .map(move |action| (action, self.placed(action, mark)))
    }

    fn placed(&self, action: Action, mark: Cell) -> Board {
        let mut next = *self;
        next.cells[action.row as usize][action.col as usize] = mark;
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// The empty starting board.
#[must_use]
pub fn initial_state() -> Board {
    Board::new()
}

/// The player to move on `board`.
#[must_use]
pub fn current_player(board: &Board) -> Player {
    board.current_player()
}

/// All legal actions on `board`, in row-major order.
#[must_use]
pub fn legal_actions(board: &Board) -> ActionList {
    board.legal_actions()
}

/// The board after the current player marks `action`.
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    board.apply_action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_current_player_alternates() {
        let board = Board::new();
        assert_eq!(board.current_player(), Player::X);

        let board = board.apply_action(Action::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Player::O);

        let board = board.apply_action(Action::new(1, 1)).unwrap();
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_current_player_on_unbalanced_board() {
        // More O marks than X: still X by the counting rule.
        let board = Board::from_rows([[O, O, E], [E, E, E], [E, E, E]]);
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_legal_actions_row_major() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, E]]);
        let actions: Vec<_> = board.legal_actions().into_iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_legal_actions_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert!(board.legal_actions().is_empty());
    }

    #[test]
    fn test_apply_action_places_current_mark() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let next = board.apply_action(Action::new(2, 2)).unwrap();

        assert_eq!(next.cell(2, 2), O);
        assert_eq!(board.cell(2, 2), E);
        assert_eq!(next.count(X), 1);
        assert_eq!(next.count(O), 1);
    }

    #[test]
    fn test_apply_action_out_of_bounds() {
        let board = Board::new();
        for action in [Action::new(3, 0), Action::new(0, 3), Action::new(-1, 0), Action::new(0, -1)] {
            let err = board.apply_action(action).unwrap_err();
            assert_eq!(
                err,
                GameError::InvalidAction {
                    action,
                    reason: InvalidActionReason::OutOfBounds,
                }
            );
        }
    }

    #[test]
    fn test_apply_action_occupied() {
        let board = Board::new().apply_action(Action::new(1, 1)).unwrap();
        let err = board.apply_action(Action::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidAction {
                action: Action::new(1, 1),
                reason: InvalidActionReason::Occupied,
            }
        );
    }

    #[test]
    fn test_successors_match_apply_action() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, E]]);
        let successors: Vec<_> = board.successors().collect();

        assert_eq!(successors.len(), board.legal_actions().len());
        for (action, next) in successors {
            assert_eq!(board.apply_action(action), Ok(next));
        }
    }

    #[test]
    fn test_get() {
        let board = Board::from_rows([[E, E, E], [E, E, E], [E, E, O]]);
        assert_eq!(board.get(Action::new(2, 2)), Some(O));
        assert_eq!(board.get(Action::new(2, 3)), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, X]]);
        assert_eq!(board.to_string(), "X.O\n.X.\nO.X");
    }

    #[test]
    fn test_serialization() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, E]]);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
