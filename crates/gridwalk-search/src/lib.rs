//! State-space search over grid maps.
//!
//! The search machinery is generic over [`SearchProblem`]; [`GridProblem`]
//! instantiates it for walking a [`TileMap`](gridwalk_map::TileMap) from a
//! start marker to a goal marker.
//!
//! - **Breadth-first**: FIFO frontier, fewest actions
//! - **Depth-first**: LIFO frontier, no optimality guarantee
//! - **A\***: priority frontier ordered by `g + h`, lowest cost when the
//!   [`Heuristic`] never overestimates
//!
//! All strategies run in graph-search mode through [`Solver`], which keeps
//! its node arena and visited map between runs so repeated queries reuse
//! their allocations.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`SearchProblem`] | states, actions, transitions, costs, goal test |
//! | [`Frontier`] | expansion order of pending nodes |

mod action;
mod distance;
mod error;
mod frontier;
mod grid;
mod heuristic;
mod node;
mod result;
mod solver;
mod traits;

pub use action::{Action, CostTable};
pub use distance::{euclidean, manhattan};
pub use error::{ConfigError, Result};
pub use frontier::{FifoFrontier, Frontier, FrontierEntry, LifoFrontier, PriorityFrontier};
pub use grid::{GridProblem, ProblemConfig};
pub use heuristic::Heuristic;
pub use node::{Node, NodeArena, NodeId};
pub use result::{Outcome, SearchResult, SearchStats, Solution, Step, path_cost};
pub use solver::{SearchLimits, Solver, Strategy, search};
pub use traits::SearchProblem;
