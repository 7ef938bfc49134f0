//! Error types for the rules engine.
//!
//! Every variant is recoverable: the host rejects the offending input back
//! to the player (re-prompt on `InvalidAction`/`DuplicateName`, fall back to
//! passing on `EmptyPile`) and the match keeps running. Nothing here should
//! ever abort the process.

use thiserror::Error;

use super::action::TurnAction;

/// Errors surfaced by the dominoes rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DominoError {
    /// A draw was attempted with no tiles remaining in the pile.
    #[error("the draw pile is empty")]
    EmptyPile,

    /// Positional access outside a hand, board, or playable set.
    #[error("index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The supplied action is not legal in the current state.
    #[error("action '{0}' is not legal right now")]
    InvalidAction(TurnAction),

    /// A player name was already taken during setup.
    #[error("player name \"{0}\" is already taken")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DominoError::EmptyPile.to_string(), "the draw pile is empty");
        assert_eq!(
            DominoError::IndexOutOfRange { index: 9, len: 7 }.to_string(),
            "index 9 is out of range (length 7)"
        );
        assert_eq!(
            DominoError::InvalidAction(TurnAction::Draw).to_string(),
            "action 'draw' is not legal right now"
        );
        assert_eq!(
            DominoError::DuplicateName("Ana".into()).to_string(),
            "player name \"Ana\" is already taken"
        );
    }
}
