//! Error types for map loading.

use thiserror::Error;

/// Failure to build a [`TileMap`](crate::TileMap) from text.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("map contains no rows")]
    Empty,

    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
}
