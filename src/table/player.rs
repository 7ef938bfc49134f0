//! A player: a name and an exclusive hand of tiles.
//!
//! The hand is insertion-ordered for display, while play-time lookups go by
//! unordered pip pair - a tile flipped during placement still removes its
//! hand counterpart. Hands shrink on plays and grow on draws; an emptied
//! hand is the domino win, detected by the match controller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{DominoError, Side, Tile};

use super::board::Board;
use super::pile::DrawPile;

/// A seated player and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Tile>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a tile to the hand.
    pub fn add_tile(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    /// Number of tiles in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// The hand in insertion order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Positional access into the hand.
    pub fn tile_at(&self, index: usize) -> Result<Tile, DominoError> {
        self.hand
            .get(index)
            .copied()
            .ok_or(DominoError::IndexOutOfRange {
                index,
                len: self.hand.len(),
            })
    }

    /// Remove the first hand tile carrying the same unordered pip pair.
    ///
    /// Returns whether a tile was removed. Orientation is ignored, so a
    /// tile flipped for placement still matches its hand counterpart.
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        match self.hand.iter().position(|t| t.matches_pips(tile)) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The subset of the hand that can currently be placed, in hand order.
    ///
    /// On an empty board every tile is a legal opening, so the whole hand
    /// is returned.
    #[must_use]
    pub fn playable_tiles(&self, board: &Board) -> SmallVec<[Tile; 7]> {
        if board.is_empty() {
            self.hand.iter().copied().collect()
        } else {
            self.hand
                .iter()
                .copied()
                .filter(|t| t.fits(board) != Side::None)
                .collect()
        }
    }

    /// Place `tile` on the given side of the board and remove it from the
    /// hand. The tile is oriented for the side before insertion, keeping
    /// the board's adjacency invariant.
    ///
    /// `Side::None` leaves board and hand untouched: callers are expected
    /// to play only after confirming a fit, so this is a defensive no-op
    /// rather than an error.
    pub fn play(&mut self, tile: Tile, side: Side, board: &mut Board) {
        let oriented = tile.oriented(board, side);
        match side {
            Side::Left => {
                board.append_left(oriented);
                self.remove_tile(tile);
            }
            Side::Right => {
                board.append_right(oriented);
                self.remove_tile(tile);
            }
            Side::None => {}
        }
    }

    /// Draw one tile from the pile into the hand and return it.
    ///
    /// On `EmptyPile` the hand is unchanged.
    pub fn draw(&mut self, pile: &mut DrawPile) -> Result<Tile, DominoError> {
        let tile = pile.draw()?;
        self.add_tile(tile);
        Ok(tile)
    }

    /// Pip sum over every tile remaining in hand, the player's score at a
    /// closure.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.hand.iter().map(|t| t.pip_sum()).sum()
    }
}

impl fmt::Display for Player {
    /// The hand as a run of tile renderings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.hand {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn player_with(name: &str, tiles: &[(u8, u8)]) -> Player {
        let mut player = Player::new(name);
        for &(a, b) in tiles {
            player.add_tile(Tile::new(a, b));
        }
        player
    }

    #[test]
    fn test_playable_tiles_empty_board_is_whole_hand() {
        let player = player_with("Ana", &[(0, 0), (3, 5), (6, 1)]);
        let board = Board::new();

        let playable = player.playable_tiles(&board);
        assert_eq!(playable.as_slice(), player.hand());
    }

    #[test]
    fn test_playable_tiles_subset_preserves_hand_order() {
        let player = player_with("Ana", &[(1, 1), (2, 6), (4, 4), (5, 2)]);
        let mut board = Board::new();
        board.append_right(Tile::new(2, 3)); // ends 2 and 3

        let playable = player.playable_tiles(&board);
        assert_eq!(
            playable.as_slice(),
            &[Tile::new(2, 6), Tile::new(5, 2)]
        );
    }

    #[test]
    fn test_play_left_removes_from_hand_and_appends() {
        let mut player = player_with("Ana", &[(6, 2), (1, 1)]);
        let mut board = Board::new();
        board.append_right(Tile::new(2, 5)); // ends 2 and 5

        player.play(Tile::new(6, 2), Side::Left, &mut board);

        assert_eq!(player.hand_size(), 1);
        assert_eq!(board.len(), 2);
        assert_eq!(board.left_end(), Some(6));
        // Junction holds: [6|2] [2|5]
        assert_eq!(board.get(0).unwrap().second(), board.get(1).unwrap().first());
    }

    #[test]
    fn test_play_orients_before_insertion() {
        // Held as (2,6); placing left of end 2 must flip it to [6|2].
        let mut player = player_with("Ana", &[(2, 6)]);
        let mut board = Board::new();
        board.append_right(Tile::new(2, 5));

        player.play(Tile::new(2, 6), Side::Left, &mut board);

        assert_eq!(board.get(0).unwrap(), Tile::new(6, 2));
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_play_none_is_noop() {
        let mut player = player_with("Ana", &[(3, 3)]);
        let mut board = Board::new();
        board.append_right(Tile::new(2, 5));

        player.play(Tile::new(3, 3), Side::None, &mut board);

        assert_eq!(player.hand_size(), 1);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_remove_tile_by_unordered_pair() {
        let mut player = player_with("Ana", &[(1, 4), (2, 2)]);

        assert!(player.remove_tile(Tile::new(4, 1)));
        assert_eq!(player.hand(), &[Tile::new(2, 2)]);
        assert!(!player.remove_tile(Tile::new(4, 1)));
    }

    #[test]
    fn test_tile_at_out_of_range() {
        let player = player_with("Ana", &[(0, 6)]);
        assert_eq!(player.tile_at(0).unwrap(), Tile::new(0, 6));
        assert_eq!(
            player.tile_at(3),
            Err(DominoError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_draw_from_empty_pile_leaves_hand_unchanged() {
        let mut player = player_with("Ana", &[(0, 1)]);
        let mut pile = DrawPile::from_tiles(vec![]);

        assert_eq!(player.draw(&mut pile), Err(DominoError::EmptyPile));
        assert_eq!(player.hand_size(), 1);
    }

    #[test]
    fn test_draw_adds_to_hand() {
        let mut player = Player::new("Ana");
        let mut pile = DrawPile::shuffled(&mut GameRng::new(11));
        let before = pile.len();

        let tile = player.draw(&mut pile).unwrap();
        assert_eq!(player.hand(), &[tile]);
        assert_eq!(pile.len(), before - 1);
    }

    #[test]
    fn test_score_sums_both_pips() {
        let player = player_with("Ana", &[(1, 2), (0, 0), (6, 6)]);
        assert_eq!(player.score(), 15);
    }

    #[test]
    fn test_display_concatenates_hand() {
        let player = player_with("Ana", &[(1, 2), (3, 4)]);
        assert_eq!(player.to_string(), " [1|2]  [3|4] ");
    }
}
