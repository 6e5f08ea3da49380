//! Remaining-cost estimators for A*.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::Point;

use crate::distance::{euclidean, manhattan};
use crate::error::{ConfigError, Result};

/// Which distance formula estimates the remaining cost.
///
/// Both formulas measure distance in cells, so they stay admissible as
/// long as no move costs less than 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// No estimate; A* degrades to uniform-cost search.
    #[default]
    None,
    /// `|dx| + |dy|`.
    Manhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
}

impl Heuristic {
    /// Estimate the cost from `from` to `goal`, or `None` for
    /// [`Heuristic::None`].
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> Option<f64> {
        match self {
            Heuristic::None => None,
            Heuristic::Manhattan => Some(manhattan(from, goal)),
            Heuristic::Euclidean => Some(euclidean(from, goal)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::None => "none",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Heuristic::None),
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(ConfigError::UnknownOption {
                kind: "heuristic",
                name: s.to_string(),
            }),
        }
    }
}
