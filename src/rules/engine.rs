//! Terminal detection and scoring.
//!
//! - `winner`: first fully-marked line in `WINNING_LINES` order
//! - `is_terminal`: a winner exists or the board is full
//! - `utility`: +1 / -1 / 0 from X's perspective
//! - `outcome`: the same facts folded into one `Outcome`

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// The eight winning lines as `(row, col)` triples.
///
/// Ordered rows first, then columns, then the main diagonal and the
/// anti-diagonal. `winner` reports the first match in this order.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// State of a game, derived from a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Score from X's perspective. In-progress games score 0.
    #[must_use]
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Win(Player::X) => 1,
            Outcome::Win(Player::O) => -1,
            Outcome::InProgress | Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// The player owning the first completed line, if any.
///
/// Reachability is not validated; on a board where both players own a
/// line, the earlier line in `WINNING_LINES` decides.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.cell(row, col));
        if a == b && b == c {
            a.player()
        } else {
            None
        }
    })
}

/// Check if the game is over: someone won or no empty cell remains.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Score from X's perspective: 1 if X won, -1 if O won, 0 otherwise.
///
/// Only meaningful on terminal boards.
#[must_use]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classify a board.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
