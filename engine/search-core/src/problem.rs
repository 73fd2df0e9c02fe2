//! Single-agent search problem contract consumed by graph search.
//!
//! A problem exposes a start state, a goal predicate, and successor
//! generation. States are opaque snapshots owned by the problem; the search
//! never mutates one in place, it only asks for successors.

use std::fmt::Debug;
use std::hash::Hash;

/// One outgoing edge from a state: the state reached, the action taken to
/// reach it, and the cost of that single step.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A deterministic single-agent search problem.
///
/// States are used as keys in the discovered-node map, so equal states must
/// compare equal and hash equal regardless of how they were reached. A state
/// that violates this defeats cycle avoidance and can make the search loop.
///
/// # Example
///
/// ```rust
/// use search_core::{SearchProblem, Successor};
///
/// /// Walk a number line from 0 to a target, one step at a time.
/// struct NumberLine {
///     target: i32,
/// }
///
/// impl SearchProblem for NumberLine {
///     type State = i32;
///     type Action = i32;
///
///     fn start(&self) -> i32 {
///         0
///     }
///
///     fn is_goal(&self, state: &i32) -> bool {
///         *state == self.target
///     }
///
///     fn successors(&self, state: &i32) -> Vec<Successor<i32, i32>> {
///         vec![
///             Successor::new(state + 1, 1, 1.0),
///             Successor::new(state - 1, -1, 1.0),
///         ]
///     }
/// }
/// ```
pub trait SearchProblem {
    /// State snapshot; must be a well-defined map key.
    type State: Clone + Eq + Hash + Debug;

    /// Action token drawn from a finite per-state legal set.
    type Action: Clone + Debug;

    /// The starting state of the search.
    fn start(&self) -> Self::State;

    /// Whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All legal outgoing edges from the given state.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}
