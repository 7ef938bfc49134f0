//! The match controller: setup, turn progression, terminal detection, and
//! scoring.
//!
//! The host drives a [`Match`] in a loop: query legal actions and playable
//! tiles, render state, collect a decision, apply it, repeat until the
//! phase is finished.

pub mod engine;

pub use engine::{
    EndReason, Match, MatchBuilder, MatchPhase, MatchResult, MAX_PLAYERS, MIN_PLAYERS,
};
