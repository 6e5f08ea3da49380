//! Text maps for grid-walk search.
//!
//! A map is a block of text where every character is a cell: walls block
//! movement, one marker denotes the start, another the goal, and anything
//! else is open floor. Rows may have different lengths; every coordinate
//! outside a row is treated as blocked.

pub mod error;
pub mod map;

pub use error::MapError;
pub use map::{Legend, Tile, TileMap};
