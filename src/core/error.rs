//! Error types for board transitions.

use thiserror::Error;

use super::action::Action;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidActionReason {
    /// Row or column outside `0..3`.
    OutOfBounds,
    /// The addressed cell already holds a mark.
    Occupied,
}

impl std::fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidActionReason::OutOfBounds => write!(f, "out of bounds"),
            InvalidActionReason::Occupied => write!(f, "cell is not empty"),
        }
    }
}

/// Errors raised by the game engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: Action,
        reason: InvalidActionReason,
    },
}

impl GameError {
    /// The rejected action.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            GameError::InvalidAction { action, .. } => *action,
        }
    }
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = GameError::InvalidAction {
            action: Action::new(3, 0),
            reason: InvalidActionReason::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid action (3, 0): out of bounds");
        assert_eq!(err.action(), Action::new(3, 0));

        let err = GameError::InvalidAction {
            action: Action::new(1, 1),
            reason: InvalidActionReason::Occupied,
        };
        assert_eq!(err.to_string(), "invalid action (1, 1): cell is not empty");
    }
}
