//! The turn loop.
//!
//! Asks the agent for the side to move, applies its action, and stops at a
//! terminal board or when the agent has nothing to play. An illegal action
//! is returned to the caller as `GameError::InvalidAction`; deciding whether
//! to retry is the caller's business.

use crate::core::{Board, GameRng, Player, Result};
use crate::rules::is_terminal;

use super::agent::Agent;
use super::config::MatchConfig;
use super::record::GameRecord;

/// Play from `start` until the game ends.
pub fn play_from(start: Board, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord> {
    let mut record = GameRecord::new(start, 0);
    let mut board = start;

    while !is_terminal(&board) {
        let player = board.current_player();
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let Some(action) = agent.select_action(&board) else {
            break;
        };

        board = board.apply_action(action)?;
        record.push(player, action, board);
    }

    Ok(record)
}

/// Play a full game from the empty board.
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord> {
    play_from(Board::new(), x, o)
}

/// Build both agents from `config` and play a full game.
pub fn play_match(config: &MatchConfig) -> Result<GameRecord> {
    let mut rng = GameRng::new(config.seed);
    let mut x = config.x.build(&mut rng);
    let mut o = config.o.build(&mut rng);

    let mut record = play_game(x.as_mut(), o.as_mut())?;
    record.seed = config.seed;
    Ok(record)
}
