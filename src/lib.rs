//! # rust-domino
//!
//! A rules engine for the draw variant of double-six dominoes, 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: tile matching, board ends, turn legality, terminal
//!    detection, and scoring. All I/O - prompting, parsing, rendering - is
//!    the host's job; `Display` impls on tiles, boards, and hands give it
//!    the textual building blocks.
//!
//! 2. **The host decides, the engine validates**: every turn the engine
//!    exposes which actions are legal and which tiles are playable; the
//!    host supplies a decision and the engine rejects anything outside the
//!    legality table. Malformed input is always an `Err`, never a coercion
//!    and never a crash.
//!
//! 3. **Deterministic**: the only randomness is the seeded pile shuffle, so
//!    a match can be replayed from its seed and action history.
//!
//! ## Modules
//!
//! - `core`: tiles and side matching, turn actions, errors, RNG
//! - `table`: board, draw pile, players
//! - `rules`: match setup and the turn state machine
//!
//! ## Driving a match
//!
//! ```
//! use rust_domino::{MatchBuilder, MatchPhase, TurnAction};
//!
//! let mut game = MatchBuilder::new()
//!     .add_player("Ana")?
//!     .add_player("Bea")?
//!     .hand_leader(1)?
//!     .start(42)?;
//!
//! while game.phase() == MatchPhase::InProgress {
//!     // A host would render state and prompt here; this loop just takes
//!     // the single legal action and the first playable tile.
//!     let action = game.legal_actions()[0];
//!     game.apply(action, Some(0))?;
//!     if action == TurnAction::Pass {
//!         break; // stalemate guard for doc-test brevity
//!     }
//! }
//! # Ok::<(), rust_domino::DominoError>(())
//! ```

pub mod core;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DominoError, GameRng, Side, Tile, TurnAction, TurnOutcome, MAX_PIP,
    TILES_PER_VALUE,
};

pub use crate::table::{Board, DrawPile, Player, HAND_SIZE, TILE_COUNT};

pub use crate::rules::{
    EndReason, Match, MatchBuilder, MatchPhase, MatchResult, MAX_PLAYERS, MIN_PLAYERS,
};
