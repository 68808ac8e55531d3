//! Core data model: cells, players, actions, boards, errors, RNG.
//!
//! Every type here is a plain value. Boards are `Copy` and transitions
//! return new boards, so positions can be shared freely across search
//! branches.

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use action::Action;
pub use board::{
    apply_action, current_player, initial_state, legal_actions, ActionList, Board, BOARD_SIZE,
    CELL_COUNT,
};
pub use error::{GameError, InvalidActionReason, Result};
pub use player::{Cell, Player};
pub use rng::GameRng;
