//! Move-selection agents.
//!
//! An `Agent` picks an action for whichever player is to move on the board
//! it is shown. The match driver asks the agent assigned to that side.
//!
//! - `MinimaxAgent`: optimal play via `MinimaxSearch`
//! - `RandomAgent`: uniform over legal actions, seeded
//! - `ScriptedAgent`: replays a fixed list of actions (tests, external input)

use std::collections::VecDeque;

use crate::core::{Action, Board, GameRng};
use crate::rules::is_terminal;
use crate::search::{MinimaxSearch, SearchStats};

/// Something that chooses moves.
pub trait Agent: Send {
    /// Short name for logs and records.
    fn name(&self) -> &str;

    /// Choose an action for the player to move.
    ///
    /// Returns `None` when the agent has nothing to play. Scripted agents
    /// may return actions that are not legal; the driver rejects them.
    fn select_action(&mut self, board: &Board) -> Option<Action>;
}

/// Plays the minimax-optimal action.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent move.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_action(&mut self, board: &Board) -> Option<Action> {
        self.search.search(board)
    }
}

/// Plays a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create an agent drawing from an existing stream.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_action(&mut self, board: &Board) -> Option<Action> {
        if is_terminal(board) {
            return None;
        }
        self.rng.choose(&board.legal_actions()).copied()
    }
}

/// Plays a predetermined sequence of actions, one per call.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    actions: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Number of actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        "scripted"
    }

    fn select_action(&mut self, _board: &Board) -> Option<Action> {
        self.actions.pop_front()
    }
}
