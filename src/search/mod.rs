//! Minimax game-tree search.
//!
//! ## Overview
//!
//! Exhaustive search of the Tic-Tac-Toe game tree. The state space is
//! small enough that every line of play is explored to the end, so the
//! result is exact:
//!
//! - **Exact**: no heuristic evaluation, no depth limit
//! - **Deterministic**: ties go to the first action in row-major order
//! - **Value semantics**: each recursive call works on its own board
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::core::initial_state;
//! use tictactoe_minimax::search::{minimax, MinimaxSearch};
//!
//! let board = initial_state().apply_action((1, 1).into()).unwrap();
//!
//! // One-shot
//! let reply = minimax(&board);
//! assert!(reply.is_some());
//!
//! // With diagnostics
//! let mut search = MinimaxSearch::new();
//! assert_eq!(search.search(&board), reply);
//! assert!(search.stats().terminal_evaluations > 0);
//! ```

pub mod minimax;
pub mod stats;

pub use minimax::{minimax, value, MinimaxSearch};
pub use stats::SearchStats;
