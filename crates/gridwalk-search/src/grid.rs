//! Walking a [`TileMap`] from its start marker to its goal marker.

use gridwalk_core::Point;
use gridwalk_map::{Legend, TileMap};
use log::{debug, warn};

use crate::action::{Action, CostTable};
use crate::error::{ConfigError, Result};
use crate::heuristic::Heuristic;
use crate::traits::SearchProblem;

/// Everything about a grid problem that is not read from the map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProblemConfig {
    pub costs: CostTable,
    pub heuristic: Heuristic,
    pub legend: Legend,
    /// Goal used when the map carries no goal marker. Without it a
    /// missing goal marker is an error.
    pub default_goal: Option<Point>,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            costs: CostTable::UNIFORM,
            heuristic: Heuristic::None,
            legend: Legend::default(),
            default_goal: None,
        }
    }
}

impl ProblemConfig {
    pub fn with_costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_default_goal(mut self, goal: Point) -> Self {
        self.default_goal = Some(goal);
        self
    }
}

/// Move between passable cells of a map with the four cardinal actions.
#[derive(Debug, Clone)]
pub struct GridProblem<'a> {
    map: &'a TileMap,
    start: Point,
    goal: Point,
    costs: CostTable,
    heuristic: Heuristic,
    legend: Legend,
}

impl<'a> GridProblem<'a> {
    /// Build a problem from the start and goal markers of `map`.
    ///
    /// When a marker occurs more than once the last one in row-major order
    /// wins.
    pub fn new(map: &'a TileMap, config: ProblemConfig) -> Result<Self> {
        let legend = config.legend;
        let start = map
            .find(legend.start)
            .ok_or(ConfigError::MissingStart(legend.start))?;
        let goal = match (map.find(legend.goal), config.default_goal) {
            (Some(goal), _) => goal,
            (None, Some(goal)) => {
                warn!("map has no goal marker '{}', using default goal {goal}", legend.goal);
                goal
            }
            (None, None) => return Err(ConfigError::MissingGoal(legend.goal)),
        };
        Ok(Self::with_endpoints(map, start, goal, config))
    }

    /// Build a problem with explicit endpoints, ignoring map markers.
    pub fn with_endpoints(map: &'a TileMap, start: Point, goal: Point, config: ProblemConfig) -> Self {
        debug!(
            "grid problem: start {start}, goal {goal}, heuristic {}",
            config.heuristic
        );
        Self {
            map,
            start,
            goal,
            costs: config.costs,
            heuristic: config.heuristic,
            legend: config.legend,
        }
    }

    pub fn map(&self) -> &'a TileMap {
        self.map
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The estimator A* consults; the `heuristic` method of
    /// [`SearchProblem`] returns its value for a state.
    pub fn heuristic_kind(&self) -> Heuristic {
        self.heuristic
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Whether `p` is inside the map and not a wall.
    pub fn is_valid(&self, p: Point) -> bool {
        self.map.is_passable(p, &self.legend)
    }
}

impl SearchProblem for GridProblem<'_> {
    type State = Point;
    type Action = Action;

    fn initial_state(&self) -> Point {
        self.start
    }

    fn actions(&self, state: &Point, buf: &mut Vec<Action>) {
        buf.extend(Action::ALL.into_iter().filter(|a| self.is_valid(a.apply(*state))));
    }

    fn result(&self, state: &Point, action: Action) -> Point {
        action.apply(*state)
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn cost(&self, _state: &Point, action: Action, _next: &Point) -> f64 {
        self.costs.get(action)
    }

    fn heuristic(&self, state: &Point) -> Option<f64> {
        self.heuristic.estimate(*state, self.goal)
    }
}
