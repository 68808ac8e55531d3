//! Exhaustive minimax over the full game tree.
//!
//! X maximises `utility`, O minimises it. `max_value` and `min_value` are
//! mutually recursive and take each board by reference; children come
//! from `Board::successors`, so a parent board is never touched while its
//! siblings are explored. No pruning, no memoisation.
//!
//! At the root every action is scored and the first one reaching the best
//! score (in row-major order) is kept. A later action with an equal score
//! does not replace it.

use std::time::Instant;

use crate::core::{Action, Board, Player};
use crate::rules::{is_terminal, utility};

use super::stats::SearchStats;

/// Reusable minimax search context.
///
/// Owns the statistics and root scores of the most recent search. The
/// chosen action depends only on the board.
///
/// ```
/// use tictactoe_minimax::core::{Action, Board, Cell};
/// use tictactoe_minimax::search::MinimaxSearch;
///
/// const E: Cell = Cell::Empty;
/// let board = Board::from_rows([[Cell::X, Cell::X, E], [Cell::O, Cell::O, E], [E, E, E]]);
///
/// let mut search = MinimaxSearch::new();
/// assert_eq!(search.search(&board), Some(Action::new(0, 2)));
/// assert_eq!(search.best_value(), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    /// Search statistics.
    stats: SearchStats,

    /// Score of every root action, in evaluation order.
    root_scores: Vec<(Action, i32)>,

    /// Selected action and its score.
    best: Option<(Action, i32)>,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the optimal action for the player to move.
    ///
    /// Returns `None` if the board is already terminal.
    pub fn search(&mut self, board: &Board) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();
        self.root_scores.clear();
        self.best = None;

        if is_terminal(board) {
            return None;
        }

        let player = board.current_player();
        for (action, child) in board.successors() {
            let score = match player {
                Player::X => min_value(&child, 1, &mut self.stats),
                Player::O => max_value(&child, 1, &mut self.stats),
            };
            self.root_scores.push((action, score));

            let improves = match self.best {
                None => true,
                Some((_, best_score)) => match player {
                    Player::X => score > best_score,
                    Player::O => score < best_score,
                },
            };
            if improves {
                self.best = Some((action, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        self.best.map(|(action, _)| action)
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax score of each root action from the last search, in
    /// row-major order.
    #[must_use]
    pub fn root_scores(&self) -> &[(Action, i32)] {
        &self.root_scores
    }

    /// Score of the selected action, or `None` if nothing was selected.
    #[must_use]
    pub fn best_value(&self) -> Option<i32> {
        self.best.map(|(_, score)| score)
    }
}

/// Optimal action for the player to move, or `None` on a terminal board.
///
/// ```
/// use tictactoe_minimax::core::initial_state;
/// use tictactoe_minimax::rules::is_terminal;
/// use tictactoe_minimax::search::minimax;
///
/// let board = initial_state();
/// let action = minimax(&board).unwrap();
/// let next = board.apply_action(action).unwrap();
/// assert!(!is_terminal(&next));
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    MinimaxSearch::new().search(board)
}

/// Game-theoretic value of a position under perfect play, from X's
/// perspective: 1 (X wins), -1 (O wins) or 0 (draw).
#[must_use]
pub fn value(board: &Board) -> i32 {
    let mut stats = SearchStats::new();
    match board.current_player() {
        Player::X => max_value(board, 0, &mut stats),
        Player::O => min_value(board, 0, &mut stats),
    }
}

fn max_value(board: &Board, depth: u16, stats: &mut SearchStats) -> i32 {
    let terminal = is_terminal(board);
    stats.visit(depth, terminal);
    if terminal {
        return utility(board);
    }

    board
        .successors()
        .map(|(_, child)| min_value(&child, depth + 1, stats))
        .fold(i32::MIN, i32::max)
}

fn min_value(board: &Board, depth: u16, stats: &mut SearchStats) -> i32 {
    let terminal = is_terminal(board);
    stats.visit(depth, terminal);
    if terminal {
        return utility(board);
    }

    board
        .successors()
        .map(|(_, child)| max_value(&child, depth + 1, stats))
        .fold(i32::MAX, i32::min)
}
