//! A ragged grid of character tiles.
//!
//! [`Tile`] is a newtype over `char`. [`TileMap`] stores one row per text
//! line and answers passability queries through a [`Legend`].

use std::fmt;
use std::path::Path;

use gridwalk_core::Point;
use log::debug;

use crate::error::MapError;

/// A single map cell, wrapping the character it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub char);

impl Tile {
    /// Create a new tile.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// The underlying character.
    pub const fn glyph(self) -> char {
        self.0
    }

    /// Whether this tile is `marker`, ignoring ASCII case.
    pub fn is(self, marker: char) -> bool {
        self.0.eq_ignore_ascii_case(&marker)
    }
}

impl From<char> for Tile {
    fn from(c: char) -> Self {
        Self(c)
    }
}

/// Which characters mean wall, start and goal.
///
/// Start and goal markers match regardless of ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Legend {
    pub wall: char,
    pub start: char,
    pub goal: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            wall: '#',
            start: 'T',
            goal: 'P',
        }
    }
}

/// A map parsed from text, one row per non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    rows: Vec<Vec<Tile>>,
    width: i32,
}

impl TileMap {
    /// Parse a map from text.
    ///
    /// Empty lines are skipped and a trailing `\r` is stripped from each
    /// line. Fails with [`MapError::Empty`] when no row remains.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<Vec<Tile>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Tile).collect())
            .collect();
        if rows.is_empty() {
            return Err(MapError::Empty);
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        debug!("parsed map: {} rows, width {}", rows.len(), width);
        Ok(Self { rows, width })
    }

    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Length of the widest row.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get the tile at a point, or `None` if it lies outside its row.
    pub fn at(&self, p: Point) -> Option<Tile> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Whether `p` is a wall or outside the map.
    pub fn is_blocked(&self, p: Point, legend: &Legend) -> bool {
        self.at(p).is_none_or(|t| t.glyph() == legend.wall)
    }

    /// Whether `p` can be stood on.
    pub fn is_passable(&self, p: Point, legend: &Legend) -> bool {
        !self.is_blocked(p, legend)
    }

    /// The last cell in row-major order showing `marker`, if any.
    pub fn find(&self, marker: char) -> Option<Point> {
        self.find_all(marker).last()
    }

    /// Every cell showing `marker`, in row-major order.
    pub fn find_all(&self, marker: char) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |(_, t)| t.is(marker)).map(|(p, _)| p)
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &t)| (Point::new(x as i32, y as i32), t))
        })
    }

    /// The rows of the map.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
