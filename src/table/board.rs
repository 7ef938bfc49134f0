//! The board: an ordered, growing line of placed tiles with two open ends.
//!
//! ## Invariant
//!
//! At every junction the touching pips are equal: the second value of each
//! tile equals the first value of its right neighbor. The board itself does
//! not enforce this - callers orient tiles via [`Tile::oriented`] before
//! insertion, and the match controller only plays tiles that fit. The two
//! open ends are the first pip of the leftmost tile and the second pip of
//! the rightmost; both are `None` while the board is empty.
//!
//! Backed by `im::Vector`, which gives O(1) push at both ends and O(1)
//! clone for snapshotting.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{DominoError, Tile};

/// The line of played tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<Tile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tile at the left end.
    ///
    /// No validity check is performed; the caller must have oriented the
    /// tile for the left side.
    pub fn append_left(&mut self, tile: Tile) {
        self.tiles.push_front(tile);
    }

    /// Insert a tile at the right end.
    ///
    /// No validity check is performed; the caller must have oriented the
    /// tile for the right side.
    pub fn append_right(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }

    /// The outward-facing pip at the left end, or `None` when empty.
    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.tiles.front().map(|t| t.first())
    }

    /// The outward-facing pip at the right end, or `None` when empty.
    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.tiles.back().map(|t| t.second())
    }

    /// Positional access, left to right.
    pub fn get(&self, index: usize) -> Result<Tile, DominoError> {
        self.tiles
            .get(index)
            .copied()
            .ok_or(DominoError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            })
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether no tile has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over placed tiles, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of placed tiles that contain `value` on either half.
    ///
    /// Drives closure detection: when an open end's value has appeared on
    /// [`crate::core::TILES_PER_VALUE`] tiles, that end is exhausted. A tile
    /// is counted once per end value it contains, so a double sitting at
    /// both ends contributes to both counters.
    #[must_use]
    pub fn pip_occurrences(&self, value: u8) -> usize {
        self.tiles.iter().filter(|t| t.has_pip(value)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
