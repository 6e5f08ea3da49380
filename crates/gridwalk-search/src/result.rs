//! What a search run hands back to its caller.

use crate::solver::Strategy;
use crate::traits::SearchProblem;

/// One entry of a solution path: the action taken and the state it led to.
///
/// The first step holds the initial state and no action.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<S, A> {
    pub action: Option<A>,
    pub state: S,
}

/// A path from the initial state to a goal state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<S, A> {
    steps: Vec<Step<S, A>>,
    cost: f64,
}

impl<S, A> Solution<S, A> {
    pub(crate) fn new(steps: Vec<Step<S, A>>, cost: f64) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps, cost }
    }

    /// The steps, initial state first.
    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    /// Number of steps including the initial state.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a solution holds at least the initial state.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of actions taken.
    pub fn action_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Accumulated cost recorded on the goal node.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Visited states in order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|s| &s.state)
    }

    /// Actions in order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().filter_map(|s| s.action.as_ref())
    }

    /// The goal state.
    pub fn goal(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }
}

impl<S, A: Copy> Solution<S, A> {
    /// Total cost recomputed from `problem` over the path's steps.
    pub fn replay_cost<P>(&self, problem: &P) -> f64
    where
        P: SearchProblem<State = S, Action = A>,
    {
        path_cost(problem, &self.steps)
    }
}

/// Sum `problem.cost` over consecutive steps of a path.
pub fn path_cost<P: SearchProblem>(problem: &P, steps: &[Step<P::State, P::Action>]) -> f64 {
    steps
        .windows(2)
        .filter_map(|w| {
            let action = w[1].action?;
            Some(problem.cost(&w[0].state, action, &w[1].state))
        })
        .sum()
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, A> {
    Solved(Solution<S, A>),
    /// The frontier emptied without reaching a goal.
    NoSolution,
    /// The expansion limit was hit before the search ended.
    LimitReached,
}

/// Counters collected by the search loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes taken off the frontier.
    pub iterations: usize,
    /// States whose successors were generated.
    pub expanded: usize,
    /// Nodes created, the initial one included.
    pub generated: usize,
    /// Largest frontier size seen.
    pub max_frontier: usize,
}

impl SearchStats {
    /// `(label, value)` pairs for display.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("iterations", self.iterations),
            ("expanded states", self.expanded),
            ("generated nodes", self.generated),
            ("max frontier size", self.max_frontier),
        ]
    }
}

/// The result of one search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S, A> {
    pub strategy: Strategy,
    pub outcome: Outcome<S, A>,
    pub stats: SearchStats,
}

impl<S, A> SearchResult<S, A> {
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match &self.outcome {
            Outcome::Solved(s) => Some(s),
            Outcome::NoSolution | Outcome::LimitReached => None,
        }
    }

    /// The solution path, or `None` when no goal was reached.
    pub fn path(&self) -> Option<&[Step<S, A>]> {
        self.solution().map(Solution::steps)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}
