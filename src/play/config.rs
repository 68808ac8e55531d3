//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player};

use super::agent::{Agent, MinimaxAgent, RandomAgent};

/// Which agent plays a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Perfect play.
    Minimax,
    /// Uniformly random legal moves.
    Random,
}

impl AgentKind {
    /// Build an agent of this kind. Random agents fork `rng`.
    pub fn build(self, rng: &mut GameRng) -> Box<dyn Agent> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::from_rng(rng.fork())),
        }
    }
}

/// Configuration for a single game between two agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Agent playing X (moves first).
    pub x: AgentKind,

    /// Agent playing O.
    pub o: AgentKind,

    /// Random seed for agents that need one.
    /// Same seed produces the same game.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: AgentKind::Minimax,
            o: AgentKind::Minimax,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent playing X.
    pub fn with_x(mut self, kind: AgentKind) -> Self {
        self.x = kind;
        self
    }

    /// Set the agent playing O.
    pub fn with_o(mut self, kind: AgentKind) -> Self {
        self.o = kind;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The agent kind assigned to `player`.
    #[must_use]
    pub fn agent_for(&self, player: Player) -> AgentKind {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}
