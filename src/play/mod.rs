//! Driving games between agents.
//!
//! This is the turn loop a front end would otherwise write itself: ask the
//! side to move for an action, apply it, stop at a terminal board.
//!
//! ## Overview
//!
//! - **Agent**: picks moves (`MinimaxAgent`, `RandomAgent`, `ScriptedAgent`)
//! - **MatchConfig**: which agent plays which side, plus a seed
//! - **GameRecord**: the moves played and the final outcome
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::play::{play_match, AgentKind, MatchConfig};
//! use tictactoe_minimax::rules::Outcome;
//!
//! let config = MatchConfig::default()
//!     .with_x(AgentKind::Random)
//!     .with_seed(7);
//!
//! let record = play_match(&config).unwrap();
//!
//! // Perfect play never loses.
//! assert!(record.outcome.is_terminal());
//! assert_ne!(record.outcome.utility(), 1);
//! ```

pub mod agent;
pub mod config;
pub mod game;
pub mod record;

pub use agent::{Agent, MinimaxAgent, RandomAgent, ScriptedAgent};
pub use config::{AgentKind, MatchConfig};
pub use game::{play_from, play_game, play_match};
pub use record::{GameRecord, MoveRecord};
