//! Game rules over a `Board`: who won, whether play is over, and the
//! payoff of a finished game.
//!
//! All functions are total and pure. Calling them twice on the same board
//! yields the same answer.

pub mod engine;

pub use engine::{is_terminal, outcome, utility, winner, Outcome, WINNING_LINES};
