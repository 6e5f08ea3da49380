//! The graph-search loop shared by every strategy.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{ConfigError, Result};
use crate::frontier::{FifoFrontier, Frontier, FrontierEntry, LifoFrontier, PriorityFrontier};
use crate::node::NodeArena;
use crate::result::{Outcome, SearchResult, SearchStats, Solution};
use crate::traits::SearchProblem;

/// Expansion order used by a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// FIFO frontier. Fewest actions, blind to costs.
    BreadthFirst,
    /// LIFO frontier. No optimality guarantee.
    DepthFirst,
    /// Frontier ordered by accumulated cost plus heuristic estimate.
    #[cfg_attr(feature = "serde", serde(rename = "astar", alias = "a-star"))]
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::AStar => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ConfigError::UnknownOption {
                kind: "strategy",
                name: s.to_string(),
            }),
        }
    }
}

/// Bounds on a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Stop with [`Outcome::LimitReached`] after this many expansions.
    pub max_expansions: Option<usize>,
}

/// Runs searches, reusing its node arena, visited map and frontiers
/// between runs.
///
/// Each call to [`solve`](Self::solve) starts from a clean slate; nothing
/// carries over from one run to the next except allocations.
pub struct Solver<S, A> {
    arena: NodeArena<S, A>,
    /// Lowest accumulated cost at which each state was expanded.
    visited: HashMap<S, f64>,
    abuf: Vec<A>,
    fifo: FifoFrontier,
    lifo: LifoFrontier,
    priority: PriorityFrontier,
    limits: SearchLimits,
}

impl<S, A> Default for Solver<S, A>
where
    S: Clone + Eq + Hash + fmt::Debug,
    A: Copy + Eq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Solver<S, A>
where
    S: Clone + Eq + Hash + fmt::Debug,
    A: Copy + Eq + fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_limits(SearchLimits::default())
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            arena: NodeArena::new(),
            visited: HashMap::new(),
            abuf: Vec::with_capacity(4),
            fifo: FifoFrontier::default(),
            lifo: LifoFrontier::default(),
            priority: PriorityFrontier::default(),
            limits,
        }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search `problem` with `strategy` until a goal is popped or the
    /// frontier runs dry.
    pub fn solve<P>(&mut self, problem: &P, strategy: Strategy) -> SearchResult<S, A>
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let (outcome, stats) = match strategy {
            Strategy::BreadthFirst => {
                let mut frontier = std::mem::take(&mut self.fifo);
                let r = self.run(problem, &mut frontier, false);
                self.fifo = frontier;
                r
            }
            Strategy::DepthFirst => {
                let mut frontier = std::mem::take(&mut self.lifo);
                let r = self.run(problem, &mut frontier, false);
                self.lifo = frontier;
                r
            }
            Strategy::AStar => {
                let mut frontier = std::mem::take(&mut self.priority);
                let r = self.run(problem, &mut frontier, true);
                self.priority = frontier;
                r
            }
        };

        debug!(
            "{strategy}: {} after {} iterations, {} expanded, {} generated, max frontier {}",
            match &outcome {
                Outcome::Solved(_) => "solved",
                Outcome::NoSolution => "no solution",
                Outcome::LimitReached => "limit reached",
            },
            stats.iterations,
            stats.expanded,
            stats.generated,
            stats.max_frontier,
        );

        SearchResult {
            strategy,
            outcome,
            stats,
        }
    }

    fn run<P, F>(&mut self, problem: &P, frontier: &mut F, informed: bool) -> (Outcome<S, A>, SearchStats)
    where
        P: SearchProblem<State = S, Action = A>,
        F: Frontier,
    {
        self.arena.clear();
        self.visited.clear();
        frontier.clear();

        let mut stats = SearchStats::default();
        let mut abuf = std::mem::take(&mut self.abuf);

        let initial = problem.initial_state();
        let root_priority = priority(problem, &initial, 0.0, informed);
        let root = self.arena.push_root(initial);
        frontier.push(FrontierEntry {
            node: root,
            priority: root_priority,
        });
        stats.generated = 1;
        stats.max_frontier = 1;

        let outcome = loop {
            let Some(id) = frontier.pop() else {
                break Outcome::NoSolution;
            };
            stats.iterations += 1;

            let node = self.arena.get(id);
            if problem.is_goal(&node.state) {
                break Outcome::Solved(Solution::new(self.arena.path(id), node.cost));
            }

            // Already expanded at an equal or lower cost.
            if self.visited.get(&node.state).is_some_and(|&c| c <= node.cost) {
                continue;
            }

            if self.limits.max_expansions.is_some_and(|max| stats.expanded >= max) {
                break Outcome::LimitReached;
            }

            let state = node.state.clone();
            let g = node.cost;
            self.visited.insert(state.clone(), g);
            stats.expanded += 1;
            trace!("expand {state:?} g={g}");

            abuf.clear();
            problem.actions(&state, &mut abuf);

            for &action in abuf.iter() {
                let next = problem.result(&state, action);
                let cost = g + problem.cost(&state, action, &next);
                if self.visited.get(&next).is_some_and(|&c| c <= cost) {
                    continue;
                }
                let p = priority(problem, &next, cost, informed);
                let child = self.arena.push_child(id, action, next, cost);
                frontier.push(FrontierEntry {
                    node: child,
                    priority: p,
                });
                stats.generated += 1;
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        self.abuf = abuf;
        (outcome, stats)
    }
}

/// Frontier key for a node: `g + h` when informed, `g` otherwise.
///
/// A missing heuristic counts as 0.
fn priority<P: SearchProblem>(problem: &P, state: &P::State, g: f64, informed: bool) -> f64 {
    if informed {
        g + problem.heuristic(state).unwrap_or(0.0)
    } else {
        g
    }
}

/// Run a single search with a fresh [`Solver`].
pub fn search<P: SearchProblem>(problem: &P, strategy: Strategy) -> SearchResult<P::State, P::Action> {
    Solver::new().solve(problem, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small weighted graph given as adjacency lists.
    struct Graph {
        edges: Vec<Vec<(usize, f64)>>,
        goal: usize,
        h: Option<Vec<f64>>,
    }

    impl SearchProblem for Graph {
        type State = usize;
        type Action = usize;

        fn initial_state(&self) -> usize {
            0
        }

        fn actions(&self, state: &usize, buf: &mut Vec<usize>) {
            buf.extend(0..self.edges[*state].len());
        }

        fn result(&self, state: &usize, action: usize) -> usize {
            self.edges[*state][action].0
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.goal
        }

        fn cost(&self, state: &usize, action: usize, _next: &usize) -> f64 {
            self.edges[*state][action].1
        }

        fn heuristic(&self, state: &usize) -> Option<f64> {
            self.h.as_ref().map(|h| h[*state])
        }
    }

    /// 0 -> 3 directly costs 10; 0 -> 1 -> 2 -> 3 costs 3.
    fn diamond() -> Graph {
        Graph {
            edges: vec![
                vec![(3, 10.0), (1, 1.0)],
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                vec![],
            ],
            goal: 3,
            h: None,
        }
    }

    fn goal_path(r: &SearchResult<usize, usize>) -> Vec<usize> {
        r.solution().unwrap().states().copied().collect()
    }

    #[test]
    fn bfs_takes_fewest_actions() {
        let r = search(&diamond(), Strategy::BreadthFirst);
        assert_eq!(goal_path(&r), vec![0, 3]);
        assert_eq!(r.solution().unwrap().cost(), 10.0);
    }

    #[test]
    fn astar_takes_cheapest_path() {
        let r = search(&diamond(), Strategy::AStar);
        assert_eq!(goal_path(&r), vec![0, 1, 2, 3]);
        assert_eq!(r.solution().unwrap().cost(), 3.0);
    }

    #[test]
    fn dfs_follows_last_pushed_action() {
        let r = search(&diamond(), Strategy::DepthFirst);
        assert_eq!(goal_path(&r), vec![0, 1, 2, 3]);
    }

    #[test]
    fn cheaper_rediscovery_is_expanded() {
        // h misleads A* into expanding 2 via the expensive edge first;
        // the later, cheaper route to 2 must still be explored.
        let g = Graph {
            edges: vec![
                vec![(2, 5.0), (1, 1.0)],
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                vec![],
            ],
            goal: 3,
            h: Some(vec![0.0, 4.0, 0.0, 0.0]),
        };
        let r = search(&g, Strategy::AStar);
        assert_eq!(goal_path(&r), vec![0, 1, 2, 3]);
        assert_eq!(r.solution().unwrap().cost(), 3.0);
    }

    #[test]
    fn start_on_goal_returns_immediately() {
        let mut g = diamond();
        g.goal = 0;
        for strategy in Strategy::ALL {
            let r = search(&g, strategy);
            let sol = r.solution().unwrap();
            assert_eq!(sol.len(), 1);
            assert_eq!(sol.cost(), 0.0);
            assert_eq!(r.stats.expanded, 0);
            assert_eq!(r.stats.iterations, 1);
        }
    }

    #[test]
    fn unreachable_goal_is_no_solution() {
        let mut g = diamond();
        g.goal = 7;
        for strategy in Strategy::ALL {
            let r = search(&g, strategy);
            assert_eq!(r.outcome, Outcome::NoSolution);
            // Every state gets expanded; breadth-first also re-expands 3
            // once it finds the cheaper route through 1 and 2.
            assert!(r.stats.expanded >= 4);
        }
    }

    #[test]
    fn expansion_limit_stops_search() {
        let mut solver = Solver::with_limits(SearchLimits {
            max_expansions: Some(1),
        });
        let r = solver.solve(&diamond(), Strategy::AStar);
        assert_eq!(r.outcome, Outcome::LimitReached);
        assert_eq!(r.stats.expanded, 1);
    }

    #[test]
    fn solver_reuse_is_deterministic() {
        let mut solver = Solver::new();
        let g = diamond();
        for strategy in Strategy::ALL {
            let a = solver.solve(&g, strategy);
            let b = solver.solve(&g, strategy);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn stats_are_counted() {
        let r = search(&diamond(), Strategy::BreadthFirst);
        // Pops 0 (expands, pushes 3 and 1), then pops 3 which is the goal.
        assert_eq!(r.stats.iterations, 2);
        assert_eq!(r.stats.expanded, 1);
        assert_eq!(r.stats.generated, 3);
        assert_eq!(r.stats.max_frontier, 2);
    }

    #[test]
    fn parse_strategy_names() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("Depth-First".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
        assert!("greedy".parse::<Strategy>().is_err());
    }
}
