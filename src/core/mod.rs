//! Core types: tiles, actions, errors, RNG.
//!
//! The building blocks everything else is assembled from. Board, pile, and
//! player live in [`crate::table`]; the match state machine in
//! [`crate::rules`].

pub mod action;
pub mod error;
pub mod rng;
pub mod tile;

pub use action::{ActionRecord, TurnAction, TurnOutcome};
pub use error::DominoError;
pub use rng::GameRng;
pub use tile::{Side, Tile, MAX_PIP, TILES_PER_VALUE};
