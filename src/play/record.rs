//! Game records.
//!
//! A record captures a finished (or abandoned) game:
//! - The starting board
//! - Every move with the player who made it
//! - The final board and its outcome

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Player, Result};
use crate::rules::{outcome, Outcome};

/// A single move in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Move number in the game (0-indexed).
    pub move_number: usize,
}

impl MoveRecord {
    pub fn new(player: Player, action: Action, move_number: usize) -> Self {
        Self {
            player,
            action,
            move_number,
        }
    }
}

/// A complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    pub start: Board,

    /// All moves in order.
    pub moves: Vec<MoveRecord>,

    /// Board after the last move.
    pub final_board: Board,

    /// Outcome of `final_board`.
    pub outcome: Outcome,

    /// Random seed the match was configured with.
    pub seed: u64,
}

impl GameRecord {
    /// Create an empty record starting from `start`.
    pub fn new(start: Board, seed: u64) -> Self {
        Self {
            start,
            moves: Vec::new(),
            final_board: start,
            outcome: outcome(&start),
            seed,
        }
    }

    /// Record a move and the board it produced.
    pub fn push(&mut self, player: Player, action: Action, board: Board) {
        let move_number = self.moves.len();
        self.moves.push(MoveRecord::new(player, action, move_number));
        self.final_board = board;
        self.outcome = outcome(&board);
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Replay the moves from `start`, returning the resulting board.
    ///
    /// Fails if any recorded action is illegal where it was played.
    pub fn replay(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(self.start, |board, m| board.apply_action(m.action))
    }

    /// Encode as compact bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> GameRecord {
        let mut record = GameRecord::new(Board::new(), 7);
        let mut board = Board::new();
        for action in [Action::new(0, 0), Action::new(1, 0), Action::new(0, 1)] {
            let player = board.current_player();
            board = board.apply_action(action).unwrap();
            record.push(player, action, board);
        }
        record
    }

    #[test]
    fn test_new_record() {
        let record = GameRecord::new(Board::new(), 0);
        assert!(record.is_empty());
        assert_eq!(record.outcome, Outcome::InProgress);
        assert_eq!(record.final_board, Board::new());
    }

    #[test]
    fn test_push_tracks_moves() {
        let record = sample_record();

        assert_eq!(record.len(), 3);
        assert_eq!(record.moves[2].move_number, 2);
        assert_eq!(record.player_moves(Player::X).count(), 2);
        assert_eq!(record.player_moves(Player::O).count(), 1);
        assert_eq!(record.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_replay_matches_final_board() {
        let record = sample_record();
        assert_eq!(record.replay(), Ok(record.final_board));
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let mut record = sample_record();
        record.moves.push(MoveRecord::new(Player::O, Action::new(0, 0), 3));
        assert!(record.replay().is_err());
    }

    #[test]
    fn test_bytes() {
        let record = sample_record();
        let bytes = record.to_bytes().unwrap();
        assert_eq!(GameRecord::from_bytes(&bytes).unwrap(), record);
    }
}
