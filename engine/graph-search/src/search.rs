//! The shared expansion loop and its four instantiations.
//!
//! The loop maintains a frontier, a discovered-node map, and a visited set.
//! Each iteration pops one state; a goal pops out as a reconstructed
//! [`Plan`], anything else is expanded at most once. Duplicate frontier
//! entries for already-visited states are skipped at pop time.

use std::collections::{HashMap, HashSet};

use search_core::SearchProblem;
use thiserror::Error;
use tracing::{debug, trace};

use crate::frontier::{Frontier, PriorityQueue, Queue, Stack};
use crate::plan::{reconstruct, Discovered, Plan};

/// Errors that can occur during graph search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied without reaching a goal. Fatal for the
    /// invocation; the caller decides whether to re-plan on different
    /// inputs.
    #[error("frontier exhausted without reaching a goal")]
    NoPathFound,
}

/// Depth-first search: deepest discovered states expand first.
///
/// Complete on finite graphs; the returned plan is in general neither
/// shortest nor cheapest.
pub fn depth_first<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    run(problem, Stack::new(), |_, _, _: &P| 0.0)
}

/// Breadth-first search: shallowest discovered states expand first.
///
/// Returns a plan with the fewest actions (all step costs treated as
/// equal).
pub fn breadth_first<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    run(problem, Queue::new(), |_, _, _: &P| 0.0)
}

/// Uniform-cost search: cheapest accumulated path cost expands first.
///
/// The discovered-node map is write-once: if a cheaper route to an
/// already-discovered state turns up while that state is still on the
/// frontier, the recorded parent stands. The returned plan can therefore
/// be the first-discovered rather than the cheapest one when several
/// in-flight routes reach the same intermediate state at different costs.
pub fn uniform_cost<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    run(problem, PriorityQueue::new(), |_, g, _: &P| g)
}

/// A* search: accumulated cost plus heuristic expands first.
///
/// The heuristic must never overestimate the true remaining cost for the
/// optimality guarantee to hold; admissibility is the caller's obligation
/// and is not verified here. The write-once discovered-map caveat of
/// [`uniform_cost`] applies here as well.
pub fn astar<P, H>(problem: &P, heuristic: H) -> Result<Plan<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    run(problem, PriorityQueue::new(), move |state, g, problem| {
        g + heuristic(state, problem)
    })
}

/// The expansion loop all four algorithms instantiate.
///
/// `priority` maps (candidate state, accumulated cost, problem) to the
/// frontier priority; the unordered frontiers ignore it.
fn run<P, F, Pri>(problem: &P, mut frontier: F, priority: Pri) -> Result<Plan<P::Action>, SearchError>
where
    P: SearchProblem,
    F: Frontier<P::State>,
    Pri: Fn(&P::State, f64, &P) -> f64,
{
    let start = problem.start();
    let mut discovered: HashMap<P::State, Discovered<P::State, P::Action>> = HashMap::new();
    let mut visited: HashSet<P::State> = HashSet::new();

    frontier.push(start.clone(), priority(&start, 0.0, problem));

    let mut expanded = 0usize;
    while let Some(state) = frontier.pop() {
        if problem.is_goal(&state) {
            let plan = reconstruct(&start, &state, &discovered);
            debug!(
                expanded,
                plan_len = plan.len(),
                cost = plan.cost,
                "goal reached"
            );
            return Ok(plan);
        }

        if !visited.contains(&state) {
            // Accumulated cost of the node being expanded; the start state
            // has no discovered entry and costs nothing to reach.
            let g_here = discovered.get(&state).map(|node| node.cost).unwrap_or(0.0);

            for succ in problem.successors(&state) {
                if visited.contains(&succ.state) {
                    continue;
                }
                let g = g_here + succ.cost;

                // First discovery wins; rediscovery never rewrites the
                // recorded parent, even on a cheaper route.
                discovered
                    .entry(succ.state.clone())
                    .or_insert_with(|| Discovered {
                        parent: state.clone(),
                        action: succ.action.clone(),
                        cost: g,
                    });

                frontier.push(succ.state.clone(), priority(&succ.state, g, problem));
            }
            expanded += 1;
        }

        visited.insert(state);
    }

    trace!(expanded, "frontier exhausted");
    Err(SearchError::NoPathFound)
}
