use std::fmt::Debug;
use std::hash::Hash;

/// A state space the solver can explore.
///
/// Implementations must be pure: `actions`, `result` and `cost` may not
/// depend on anything but their arguments, so repeated runs are identical.
pub trait SearchProblem {
    /// A position in the state space.
    type State: Clone + Eq + Hash + Debug;
    /// A move label drawn from a fixed finite set.
    type Action: Copy + Eq + Debug;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Append every action applicable in `state` into `buf`, in a fixed
    /// order. The caller clears `buf` before calling.
    fn actions(&self, state: &Self::State, buf: &mut Vec<Self::Action>);

    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of stepping from `state` to `next` via `action`. Must be >= 0.
    fn cost(&self, state: &Self::State, action: Self::Action, next: &Self::State) -> f64;

    /// Estimated remaining cost from `state` to the goal, if the problem
    /// carries a heuristic.
    fn heuristic(&self, _state: &Self::State) -> Option<f64> {
        None
    }
}
