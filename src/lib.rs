//! # tictactoe-minimax
//!
//! Optimal Tic-Tac-Toe play by exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A `Board` is a `Copy` snapshot. Transitions
//!    return a new board; the predecessor stays valid for sibling branches.
//!
//! 2. **Derived State**: The player to move and the game outcome are
//!    computed from the marks, never stored alongside them.
//!
//! 3. **Exact Search**: The full game tree is explored. No pruning,
//!    heuristics or caching; ties break to the first action in row-major
//!    order.
//!
//! ## Modules
//!
//! - `core`: Cells, players, actions, boards, errors, RNG
//! - `rules`: Winner detection, terminal test, utility
//! - `search`: Minimax search and statistics
//! - `play`: Agents and the turn loop
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::{initial_state, is_terminal, minimax, utility};
//!
//! // Both sides play minimax from the start.
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = board.apply_action(action).unwrap();
//! }
//!
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

pub mod core;
pub mod rules;
pub mod search;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    apply_action, current_player, initial_state, legal_actions,
    Action, ActionList, Board, Cell, GameError, GameRng, InvalidActionReason, Player, Result,
};

pub use crate::rules::{is_terminal, outcome, utility, winner, Outcome, WINNING_LINES};

pub use crate::search::{minimax, value, MinimaxSearch, SearchStats};

pub use crate::play::{
    play_from, play_game, play_match,
    Agent, AgentKind, GameRecord, MatchConfig, MinimaxAgent, MoveRecord, RandomAgent, ScriptedAgent,
};
