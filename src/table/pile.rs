//! The draw pile: every double-six tile, shuffled once at creation.
//!
//! Created full with the 28 unique unordered pairs over 0-6, depleted over
//! the match, never refilled. Drawing from an exhausted pile is the
//! recoverable [`DominoError::EmptyPile`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{DominoError, GameRng, Tile, MAX_PIP};

use super::player::Player;

/// Number of tiles in a full double-six set.
pub const TILE_COUNT: usize = 28;

/// Tiles dealt to each player at the start of a match.
pub const HAND_SIZE: usize = 7;

/// The shuffled stock of undrawn tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    /// Stored in reverse draw order; `draw` pops from the back.
    tiles: Vec<Tile>,
}

impl DrawPile {
    /// Create a full pile of all 28 tiles in a uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                tiles.push(Tile::new(i, j));
            }
        }
        rng.shuffle(&mut tiles);
        Self { tiles }
    }

    /// Create a pile with a fixed draw order: tiles come off the pile in
    /// the order given. Intended for deterministic tests and replays.
    ///
    /// Panics if the same unordered pair appears twice.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let mut seen = FxHashSet::default();
        for tile in &tiles {
            let key = (
                tile.first().min(tile.second()),
                tile.first().max(tile.second()),
            );
            assert!(seen.insert(key), "duplicate tile {tile} in pile");
        }

        let mut tiles = tiles;
        tiles.reverse();
        Self { tiles }
    }

    /// Remove and return the top tile.
    pub fn draw(&mut self) -> Result<Tile, DominoError> {
        self.tiles.pop().ok_or(DominoError::EmptyPile)
    }

    /// Draw tiles into `player`'s hand one at a time until it holds exactly
    /// [`HAND_SIZE`]. A player already holding that many receives nothing.
    ///
    /// If the pile runs out mid-deal the tiles already drawn stay in the
    /// hand and `EmptyPile` is returned. With a full pile and at most four
    /// players this cannot happen, but short custom piles surface it.
    pub fn deal_initial_hand(&mut self, player: &mut Player) -> Result<(), DominoError> {
        while player.hand_size() < HAND_SIZE {
            let tile = self.draw()?;
            player.add_tile(tile);
        }
        Ok(())
    }

    /// Number of tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pile_has_all_28_unique_tiles() {
        let mut rng = GameRng::new(42);
        let mut pile = DrawPile::shuffled(&mut rng);
        assert_eq!(pile.len(), TILE_COUNT);

        let mut seen = FxHashSet::default();
        while let Ok(tile) = pile.draw() {
            let key = (
                tile.first().min(tile.second()),
                tile.first().max(tile.second()),
            );
            assert!(seen.insert(key), "duplicate tile {tile}");
        }
        assert_eq!(seen.len(), TILE_COUNT);
    }

    #[test]
    fn test_draw_depletes_then_fails() {
        let mut rng = GameRng::new(1);
        let mut pile = DrawPile::shuffled(&mut rng);

        for _ in 0..TILE_COUNT {
            pile.draw().unwrap();
        }
        assert!(pile.is_empty());
        assert_eq!(pile.draw(), Err(DominoError::EmptyPile));
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut pile1 = DrawPile::shuffled(&mut GameRng::new(7));
        let mut pile2 = DrawPile::shuffled(&mut GameRng::new(7));

        for _ in 0..TILE_COUNT {
            assert_eq!(pile1.draw().unwrap(), pile2.draw().unwrap());
        }
    }

    #[test]
    fn test_from_tiles_draw_order() {
        let mut pile = DrawPile::from_tiles(vec![
            Tile::new(0, 0),
            Tile::new(0, 1),
            Tile::new(1, 1),
        ]);

        assert_eq!(pile.draw().unwrap(), Tile::new(0, 0));
        assert_eq!(pile.draw().unwrap(), Tile::new(0, 1));
        assert_eq!(pile.draw().unwrap(), Tile::new(1, 1));
        assert_eq!(pile.draw(), Err(DominoError::EmptyPile));
    }

    #[test]
    #[should_panic(expected = "duplicate tile")]
    fn test_from_tiles_rejects_duplicates() {
        let _ = DrawPile::from_tiles(vec![Tile::new(2, 5), Tile::new(5, 2)]);
    }

    #[test]
    fn test_deal_initial_hand() {
        let mut rng = GameRng::new(3);
        let mut pile = DrawPile::shuffled(&mut rng);
        let mut player = Player::new("Ana");

        pile.deal_initial_hand(&mut player).unwrap();
        assert_eq!(player.hand_size(), HAND_SIZE);
        assert_eq!(pile.len(), TILE_COUNT - HAND_SIZE);

        // A full hand receives nothing more.
        pile.deal_initial_hand(&mut player).unwrap();
        assert_eq!(player.hand_size(), HAND_SIZE);
        assert_eq!(pile.len(), TILE_COUNT - HAND_SIZE);
    }

    #[test]
    fn test_partial_deal_keeps_drawn_tiles() {
        let mut pile = DrawPile::from_tiles(vec![Tile::new(0, 0), Tile::new(0, 1)]);
        let mut player = Player::new("Ana");

        assert_eq!(
            pile.deal_initial_hand(&mut player),
            Err(DominoError::EmptyPile)
        );
        // The partial deal is not reverted.
        assert_eq!(player.hand_size(), 2);
        assert!(pile.is_empty());
    }
}
