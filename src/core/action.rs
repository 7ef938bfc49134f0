//! Turn actions, outcomes, and the match history record.
//!
//! The engine never chooses an action itself: the host supplies one of the
//! three [`TurnAction`]s each turn and the engine validates it against the
//! legality table before applying it. The resulting [`TurnOutcome`] tells
//! the host what to render (which tile landed where, whether a drawn tile
//! could be placed).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tile::{Side, Tile};

/// An action a player can take on their turn.
///
/// Exactly one is legal at any point of an in-progress match:
/// `Play` when the player holds a fitting tile, `Draw` when they hold none
/// and the pile still has tiles, `Pass` when they hold none and the pile is
/// empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Place a tile from the playable subset of the hand.
    Play,
    /// Take one tile from the draw pile.
    Draw,
    /// Forfeit the turn.
    Pass,
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnAction::Play => "play",
            TurnAction::Draw => "draw",
            TurnAction::Pass => "pass",
        };
        f.write_str(name)
    }
}

/// What actually happened when an action was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A tile was placed on the given side.
    ///
    /// `tile` is reported in the orientation it was held in hand, so the
    /// host shows the tile the player picked, not the board-adjusted one.
    Played { tile: Tile, side: Side },

    /// A tile was drawn from the pile. When it fit the board it was placed
    /// immediately and `placed` carries the side; otherwise it stayed in
    /// hand and the turn ended.
    Drew { tile: Tile, placed: Option<Side> },

    /// The turn was forfeited without any state change.
    Passed,
}

/// A completed turn in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting player (0 is the hand leader).
    pub seat: usize,
    /// The action taken.
    pub action: TurnAction,
    /// What the action did.
    pub outcome: TurnOutcome,
    /// Turn number, starting at 1.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new history record.
    #[must_use]
    pub fn new(seat: usize, action: TurnAction, outcome: TurnOutcome, turn: u32) -> Self {
        Self {
            seat,
            action,
            outcome,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(TurnAction::Play.to_string(), "play");
        assert_eq!(TurnAction::Draw.to_string(), "draw");
        assert_eq!(TurnAction::Pass.to_string(), "pass");
    }

    #[test]
    fn test_record_fields() {
        let outcome = TurnOutcome::Played {
            tile: Tile::new(2, 5),
            side: Side::Right,
        };
        let record = ActionRecord::new(1, TurnAction::Play, outcome, 3);

        assert_eq!(record.seat, 1);
        assert_eq!(record.action, TurnAction::Play);
        assert_eq!(record.outcome, outcome);
        assert_eq!(record.turn, 3);
    }

    #[test]
    fn test_serialization() {
        let record = ActionRecord::new(
            0,
            TurnAction::Draw,
            TurnOutcome::Drew {
                tile: Tile::new(4, 6),
                placed: Some(Side::Left),
            },
            8,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
