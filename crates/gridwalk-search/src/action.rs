//! Cardinal moves and their costs.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use gridwalk_core::Point;

use crate::error::{ConfigError, Result};

/// One of the four cardinal moves.
///
/// The declaration order is the enumeration order used everywhere actions
/// are listed, which keeps searches reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every action, in enumeration order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Coordinate offset applied by this action. Y grows downwards.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Action::Up => Point::new(0, -1),
            Action::Down => Point::new(0, 1),
            Action::Left => Point::new(-1, 0),
            Action::Right => Point::new(1, 0),
        }
    }

    /// The point reached from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// Lowercase name, as used in cost-table configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownAction(s.to_string()))
    }
}

/// Cost of each action. Every action always has an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")
)]
pub struct CostTable {
    costs: [f64; 4],
}

impl CostTable {
    /// Every move costs 1.
    pub const UNIFORM: CostTable = CostTable { costs: [1.0; 4] };

    /// Moving up costs 5, every other move costs 1.
    pub const NON_UNIFORM: CostTable = CostTable {
        costs: [5.0, 1.0, 1.0, 1.0],
    };

    /// Every move costs `cost`.
    pub fn uniform(cost: f64) -> Result<Self> {
        Self::from_pairs(Action::ALL.map(|a| (a, cost)))
    }

    /// Build a table from `(action, cost)` pairs.
    ///
    /// Later pairs override earlier ones. Fails if an action has no entry
    /// or a cost is negative or not finite.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Action, f64)>) -> Result<Self> {
        let mut costs = [None; 4];
        for (action, cost) in pairs {
            if !cost.is_finite() || cost < 0.0 {
                return Err(ConfigError::InvalidCost { action, cost });
            }
            costs[action.index()] = Some(cost);
        }
        let mut table = [0.0; 4];
        for action in Action::ALL {
            table[action.index()] = costs[action.index()].ok_or(ConfigError::MissingCost(action))?;
        }
        Ok(Self { costs: table })
    }

    /// Build a table from `(name, cost)` pairs such as `("up", 5.0)`.
    pub fn from_names<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self> {
        let parsed = pairs
            .into_iter()
            .map(|(name, cost)| Ok((name.parse::<Action>()?, cost)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_pairs(parsed)
    }

    /// Cost of `action`.
    #[inline]
    pub fn get(&self, action: Action) -> f64 {
        self.costs[action.index()]
    }

    /// `(action, cost)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::UNIFORM
    }
}

impl TryFrom<BTreeMap<String, f64>> for CostTable {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        Self::from_names(map.iter().map(|(k, &v)| (k.as_str(), v)))
    }
}

impl From<CostTable> for BTreeMap<String, f64> {
    fn from(table: CostTable) -> Self {
        table.iter().map(|(a, c)| (a.name().to_string(), c)).collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_table_reads_name_map() {
        let t: CostTable =
            serde_json::from_str(r#"{"up": 5.0, "down": 1.0, "left": 1.0, "right": 1.0}"#).unwrap();
        assert_eq!(t, CostTable::NON_UNIFORM);
    }

    #[test]
    fn cost_table_incomplete_map_fails() {
        let r: std::result::Result<CostTable, _> = serde_json::from_str(r#"{"up": 5.0}"#);
        assert!(r.is_err());
    }

    #[test]
    fn action_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Action::Left).unwrap(), r#""left""#);
    }
}
