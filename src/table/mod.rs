//! Where tiles live during a match: the board, the draw pile, and player
//! hands. All mutation flows through the match controller in
//! [`crate::rules`]; these types enforce their own local contracts only.

pub mod board;
pub mod pile;
pub mod player;

pub use board::Board;
pub use pile::{DrawPile, HAND_SIZE, TILE_COUNT};
pub use player::Player;
