//! Domino tiles and end matching.
//!
//! ## Tile
//!
//! A tile is an ordered pair of pip values in 0-6. The order of the pair is
//! the tile's current *orientation*; the unordered pair is its identity and
//! never changes after construction. Flipping swaps the two values.
//!
//! ## Side
//!
//! Where a tile can attach to the board: left end, right end, or nowhere.
//! When a tile fits both ends, the left end wins.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::Board;

/// Highest pip value on a double-six tile.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in the full set that contain any given pip value.
///
/// Each value pairs with 0-6 plus itself once, so 7 tiles. Used by the
/// closure rule: an end value that has appeared on 7 placed tiles cannot
/// be extended further.
pub const TILES_PER_VALUE: usize = 7;

/// Board side a tile attaches to.
///
/// `None` means the tile fits neither open end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    None,
    Left,
    Right,
}

/// A domino tile: two pip values with a current orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    first: u8,
    second: u8,
}

impl Tile {
    /// Create a tile from two pip values.
    ///
    /// Panics if either value exceeds [`MAX_PIP`].
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!(first <= MAX_PIP, "pip value {first} exceeds {MAX_PIP}");
        assert!(second <= MAX_PIP, "pip value {second} exceeds {MAX_PIP}");
        Self { first, second }
    }

    /// The pip value currently facing left.
    #[must_use]
    pub const fn first(self) -> u8 {
        self.first
    }

    /// The pip value currently facing right.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// The same tile with its orientation reversed.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Check whether either pip equals `value`.
    #[must_use]
    pub const fn has_pip(self, value: u8) -> bool {
        self.first == value || self.second == value
    }

    /// Sum of both pip values, the tile's contribution to a closure score.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.first as u32 + self.second as u32
    }

    /// Unordered-pair equality: true if `other` carries the same two pip
    /// values in either orientation.
    ///
    /// Derived `PartialEq` stays orientation-sensitive; use this for
    /// identity checks (hand removal, pile uniqueness).
    #[must_use]
    pub fn matches_pips(self, other: Tile) -> bool {
        self == other || self == other.flipped()
    }

    /// Determine which board end this tile can attach to.
    ///
    /// An empty board yields `Side::Left` unconditionally (the first tile
    /// defines both ends). Otherwise the tile fits an end when either of its
    /// pips equals that end's value, and the left end takes priority when
    /// both fit.
    ///
    /// Pure: orientation is not touched. Use [`Tile::oriented`] to adjust a
    /// tile for placement.
    #[must_use]
    pub fn fits(self, board: &Board) -> Side {
        let (Some(left), Some(right)) = (board.left_end(), board.right_end()) else {
            return Side::Left;
        };

        if self.has_pip(left) {
            Side::Left
        } else if self.has_pip(right) {
            Side::Right
        } else {
            Side::None
        }
    }

    /// Return this tile oriented for placement on `side` of `board`.
    ///
    /// For the left side the matching pip must end up second (touching the
    /// board), leaving the non-matching pip as the new left open end; the
    /// right side is symmetric on the first pip. The tile is flipped only
    /// when its current orientation would violate adjacency, so an already
    /// oriented tile (or a double) passes through unchanged. With an empty
    /// board or `Side::None` the tile is returned as-is.
    #[must_use]
    pub fn oriented(self, board: &Board, side: Side) -> Self {
        match side {
            Side::Left => match board.left_end() {
                Some(end) if self.second != end => self.flipped(),
                _ => self,
            },
            Side::Right => match board.right_end() {
                Some(end) if self.first != end => self.flipped(),
                _ => self,
            },
            Side::None => self,
        }
    }
}

impl fmt::Display for Tile {
    /// Fixed-width bracketed form reflecting current orientation: `" [a|b] "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " [{}|{}] ", self.first, self.second)
    }
}
