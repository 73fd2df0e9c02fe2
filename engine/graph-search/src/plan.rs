//! Discovered-node records and path reconstruction.

use std::collections::HashMap;
use std::hash::Hash;

/// One entry in the discovered-node map: how a state was first reached.
///
/// `cost` is the cost accumulated along the recorded chain from the start
/// state, not the single step cost. Entries are written once and never
/// overwritten on rediscovery.
#[derive(Debug, Clone)]
pub struct Discovered<S, A> {
    pub parent: S,
    pub action: A,
    pub cost: f64,
}

/// The result of a graph search: the ordered action sequence from the start
/// state to the goal, and the cost accumulated along it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<A> {
    pub actions: Vec<A>,
    pub cost: f64,
}

impl<A> Plan<A> {
    /// The empty plan, returned when the start state is already a goal.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            cost: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Walk the discovered-parent chain from `goal` back to `start` and return
/// the forward action sequence.
///
/// Every non-start state on the chain is expected to have an entry; the map
/// is only ever read for states the search itself recorded, so a missing
/// link means the search loop broke its own invariant.
pub fn reconstruct<S, A>(start: &S, goal: &S, discovered: &HashMap<S, Discovered<S, A>>) -> Plan<A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    if goal == start {
        return Plan::empty();
    }

    let cost = discovered
        .get(goal)
        .map(|node| node.cost)
        .unwrap_or_default();

    let mut actions = Vec::new();
    let mut current = goal.clone();
    while &current != start {
        let node = &discovered[&current];
        actions.push(node.action.clone());
        current = node.parent.clone();
    }
    actions.reverse();

    Plan { actions, cost }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_walks_parent_chain() {
        let mut discovered = HashMap::new();
        discovered.insert(
            "b",
            Discovered {
                parent: "a",
                action: "a->b",
                cost: 1.0,
            },
        );
        discovered.insert(
            "c",
            Discovered {
                parent: "b",
                action: "b->c",
                cost: 3.0,
            },
        );

        let plan = reconstruct(&"a", &"c", &discovered);
        assert_eq!(plan.actions, vec!["a->b", "b->c"]);
        assert_eq!(plan.cost, 3.0);
    }

    #[test]
    fn test_reconstruct_start_is_goal() {
        let discovered: HashMap<&str, Discovered<&str, &str>> = HashMap::new();
        let plan = reconstruct(&"a", &"a", &discovered);
        assert!(plan.is_empty());
        assert_eq!(plan.cost, 0.0);
    }
}
