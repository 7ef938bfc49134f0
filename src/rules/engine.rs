//! Match setup and the turn state machine.
//!
//! ## Lifecycle
//!
//! A [`MatchBuilder`] collects 2-4 uniquely named players, moves the
//! designated hand leader to seat 0, and deals seven tiles to each seat.
//! The resulting [`Match`] is strictly turn-sequential: the host supplies
//! one validated action per turn via [`Match::apply`] until the phase turns
//! [`MatchPhase::Finished`].
//!
//! ## Legality table
//!
//! For the acting player, exactly one action is legal per turn:
//!
//! - `Play` iff the playable subset of the hand is non-empty
//! - `Draw` iff the playable subset is empty and the pile is not
//! - `Pass` iff the playable subset and the pile are both empty
//!
//! ## Terminal conditions
//!
//! Checked after every action, in order: **domino** (the acting player's
//! hand is empty, sole winner) then **closure** (each open-end value has
//! appeared on seven placed tiles, so neither end can be extended). Only a
//! closure produces scores.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    ActionRecord, DominoError, GameRng, Side, Tile, TurnAction, TurnOutcome, TILES_PER_VALUE,
};
use crate::table::{Board, DrawPile, Player};

/// Minimum number of seated players.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of seated players.
pub const MAX_PLAYERS: usize = 4;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// A player emptied their hand.
    Domino,
    /// Both open ends were exhausted and the board blocked.
    Closure,
}

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    InProgress,
    Finished(EndReason),
}

/// Final report of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// How the match ended.
    pub reason: EndReason,
    /// Winning player names. A domino has exactly one; a closure has one or
    /// several (joint win between tied finalists).
    pub winners: Vec<String>,
    /// Per-player pip scores. Populated only on closure.
    pub scores: FxHashMap<String, u32>,
}

impl MatchResult {
    /// Check whether the named player won.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }
}

/// Collects players and deals the opening hands.
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    names: Vec<String>,
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player. Names are trimmed and must be unique; the uniqueness
    /// is what makes the closure tie-break resolvable by name.
    ///
    /// Panics on an empty name or a fifth seat - both are host programming
    /// errors, since the host owns the setup prompts.
    pub fn add_player(mut self, name: impl Into<String>) -> Result<Self, DominoError> {
        let name = name.into().trim().to_string();
        assert!(!name.is_empty(), "player name must not be empty");
        assert!(
            self.names.len() < MAX_PLAYERS,
            "at most {MAX_PLAYERS} players can be seated"
        );

        if self.names.iter().any(|n| *n == name) {
            return Err(DominoError::DuplicateName(name));
        }
        self.names.push(name);
        Ok(self)
    }

    /// Designate the hand leader: the seat at `index` moves to position 0,
    /// acts first, and holds tie-break authority at a closure.
    pub fn hand_leader(mut self, index: usize) -> Result<Self, DominoError> {
        if index >= self.names.len() {
            return Err(DominoError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        self.names.swap(0, index);
        Ok(self)
    }

    /// Start the match with a freshly shuffled pile.
    pub fn start(self, seed: u64) -> Result<Match, DominoError> {
        let mut rng = GameRng::new(seed);
        self.start_with_pile(DrawPile::shuffled(&mut rng))
    }

    /// Start the match drawing opening hands from the given pile. Intended
    /// for deterministic tests and replays.
    ///
    /// Panics unless 2-4 players are seated. A pile too short to deal seven
    /// tiles per seat surfaces `EmptyPile`, with the partial deal kept.
    pub fn start_with_pile(self, mut pile: DrawPile) -> Result<Match, DominoError> {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.names.len()),
            "a match needs {MIN_PLAYERS}-{MAX_PLAYERS} players"
        );

        let mut players: Vec<Player> = self.names.into_iter().map(Player::new).collect();
        for player in &mut players {
            pile.deal_initial_hand(player)?;
        }

        log::info!(
            "match started: {} players, {} tiles left in the pile",
            players.len(),
            pile.len()
        );

        Ok(Match {
            players,
            board: Board::new(),
            pile,
            current: 0,
            turn_number: 1,
            phase: MatchPhase::InProgress,
            history: Vector::new(),
            result: None,
        })
    }
}

/// One match of dominoes, from the first turn to a terminal state.
///
/// Owns its board, pile, and players exclusively; the only mutator is
/// [`Match::apply`], called once per decision. Queries are pure.
#[derive(Clone, Debug)]
pub struct Match {
    players: Vec<Player>,
    board: Board,
    pile: DrawPile,
    /// Seat index of the acting player.
    current: usize,
    turn_number: u32,
    phase: MatchPhase,
    history: Vector<ActionRecord>,
    result: Option<MatchResult>,
}

impl Match {
    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seat index of the acting player.
    #[must_use]
    pub fn current_seat(&self) -> usize {
        self.current
    }

    /// All players in seat order; seat 0 is the hand leader.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tiles remaining in the draw pile.
    #[must_use]
    pub fn pile_len(&self) -> usize {
        self.pile.len()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every turn applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The final report, once the match has finished.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// The acting player's playable tiles, in hand order.
    #[must_use]
    pub fn playable_tiles(&self) -> SmallVec<[Tile; 7]> {
        self.current_player().playable_tiles(&self.board)
    }

    /// Actions currently legal for the acting player.
    ///
    /// Empty once the match is finished; otherwise exactly one action per
    /// the legality table.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[TurnAction; 3]> {
        let mut actions = SmallVec::new();
        if let MatchPhase::Finished(_) = self.phase {
            return actions;
        }

        if !self.playable_tiles().is_empty() {
            actions.push(TurnAction::Play);
        } else if !self.pile.is_empty() {
            actions.push(TurnAction::Draw);
        } else {
            actions.push(TurnAction::Pass);
        }
        actions
    }

    /// Apply the acting player's decision and advance the state machine.
    ///
    /// `selection` indexes the playable set (see [`Match::playable_tiles`])
    /// and is only read for `Play`; `None` picks the first playable tile.
    ///
    /// Rejects with `InvalidAction` when the action is not in the legality
    /// table (or the match is over) and with `IndexOutOfRange` on a bad
    /// selection - both without touching state, so the host can re-prompt.
    pub fn apply(
        &mut self,
        action: TurnAction,
        selection: Option<usize>,
    ) -> Result<TurnOutcome, DominoError> {
        if !self.legal_actions().contains(&action) {
            return Err(DominoError::InvalidAction(action));
        }

        let seat = self.current;
        let outcome = match action {
            TurnAction::Play => {
                let playable = self.playable_tiles();
                let index = selection.unwrap_or(0);
                let tile = playable
                    .get(index)
                    .copied()
                    .ok_or(DominoError::IndexOutOfRange {
                        index,
                        len: playable.len(),
                    })?;

                let side = tile.fits(&self.board);
                self.players[seat].play(tile, side, &mut self.board);
                log::debug!("{} played {tile} on {side:?}", self.players[seat].name());
                TurnOutcome::Played { tile, side }
            }
            TurnAction::Draw => {
                let tile = self.players[seat].draw(&mut self.pile)?;
                let side = tile.fits(&self.board);
                let placed = if side == Side::None {
                    log::debug!("{} drew {tile}, kept in hand", self.players[seat].name());
                    None
                } else {
                    self.players[seat].play(tile, side, &mut self.board);
                    log::debug!("{} drew {tile}, placed on {side:?}", self.players[seat].name());
                    Some(side)
                };
                TurnOutcome::Drew { tile, placed }
            }
            TurnAction::Pass => {
                log::debug!("{} passed", self.players[seat].name());
                TurnOutcome::Passed
            }
        };

        self.history
            .push_back(ActionRecord::new(seat, action, outcome, self.turn_number));
        self.check_terminal();

        if self.phase == MatchPhase::InProgress {
            self.current = (self.current + 1) % self.players.len();
            self.turn_number += 1;
        }

        Ok(outcome)
    }

    /// Both open-end values have each appeared on seven placed tiles, so no
    /// remaining tile can extend either end. False on an empty board.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let (Some(left), Some(right)) = (self.board.left_end(), self.board.right_end()) else {
            return false;
        };
        self.board.pip_occurrences(left) == TILES_PER_VALUE
            && self.board.pip_occurrences(right) == TILES_PER_VALUE
    }

    /// Terminal checks in order: domino for the acting player, then closure.
    fn check_terminal(&mut self) {
        let acting = &self.players[self.current];

        if acting.hand_size() == 0 {
            let winner = acting.name().to_string();
            log::info!("{winner} made domino on turn {}", self.turn_number);
            self.phase = MatchPhase::Finished(EndReason::Domino);
            self.result = Some(MatchResult {
                reason: EndReason::Domino,
                winners: vec![winner],
                scores: FxHashMap::default(),
            });
        } else if self.is_closed() {
            let scores: FxHashMap<String, u32> = self
                .players
                .iter()
                .map(|p| (p.name().to_string(), p.score()))
                .collect();
            let winners = resolve_closure_winners(&self.players, &scores);

            log::info!(
                "board closed on turn {}, winner(s): {winners:?}",
                self.turn_number
            );
            self.phase = MatchPhase::Finished(EndReason::Closure);
            self.result = Some(MatchResult {
                reason: EndReason::Closure,
                winners,
                scores,
            });
        }
    }
}

/// Resolve the winners of a closure.
///
/// Finalists are every player at the minimum score. A sole finalist wins
/// outright. Among several, the hand leader (seat 0) wins alone when they
/// are one of them; otherwise all finalists win jointly.
fn resolve_closure_winners(players: &[Player], scores: &FxHashMap<String, u32>) -> Vec<String> {
    let min = players
        .iter()
        .map(|p| scores[p.name()])
        .min()
        .unwrap_or_default();

    let finalists: Vec<&str> = players
        .iter()
        .filter(|p| scores[p.name()] == min)
        .map(Player::name)
        .collect();

    let leader = players[0].name();
    if finalists.len() > 1 && finalists.contains(&leader) {
        vec![leader.to_string()]
    } else {
        finalists.into_iter().map(str::to_string).collect()
    }
}
