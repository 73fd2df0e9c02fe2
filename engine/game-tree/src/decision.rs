//! Decision values and shared layer plumbing.

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use search_core::AdversarialGame;
use thiserror::Error;

/// Errors that can occur when asking for a decision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// The root state has no legal actions left after filtering the idle
    /// token. Interior nodes in this situation fall back to the evaluation
    /// function; the root has no action to return.
    #[error("no legal actions available at the root")]
    NoLegalMoves,
}

/// The outcome of evaluating one layer of the tree: the layer's utility
/// value and, for non-terminal layers, the action that achieves it.
///
/// Terminal and depth-bounded layers carry `action: None`; their value comes
/// straight from the evaluation function and shares its scale with every
/// interior value, so the two are directly comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    pub value: f64,
    pub action: Option<A>,
}

impl<A> Decision<A> {
    /// A leaf decision: evaluation value, no action.
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            action: None,
        }
    }
}

/// Which end of the scored list a layer selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extreme {
    Max,
    Min,
}

/// Pick the best-valued entry, breaking exact-value ties uniformly at
/// random. `scored` must be non-empty.
///
/// Evaluation values are expected to be non-NaN; `f64::max`/`f64::min`
/// ignore NaN entries, and if every value is NaN the equality filter
/// matches nothing, so the first entry is returned rather than panicking.
pub(crate) fn pick<A: Clone>(
    scored: &[(f64, A)],
    extreme: Extreme,
    rng: &mut ChaCha20Rng,
) -> Decision<A> {
    debug_assert!(!scored.is_empty());

    let best = scored
        .iter()
        .map(|(value, _)| *value)
        .fold(None, |acc: Option<f64>, value| match (acc, extreme) {
            (None, _) => Some(value),
            (Some(best), Extreme::Max) => Some(best.max(value)),
            (Some(best), Extreme::Min) => Some(best.min(value)),
        })
        .unwrap_or(f64::NAN);

    let ties: Vec<&A> = scored
        .iter()
        .filter(|(value, _)| *value == best)
        .map(|(_, action)| action)
        .collect();

    let chosen = if ties.is_empty() {
        &scored[0].1
    } else {
        ties[rng.gen_range(0..ties.len())]
    };
    Decision {
        value: best,
        action: Some(chosen.clone()),
    }
}

/// Legal actions for the agent with the game's idle token filtered out.
pub(crate) fn active_actions<G: AdversarialGame>(state: &G, agent: usize) -> Vec<G::Action> {
    let idle = state.idle_action();
    state
        .legal_actions(agent)
        .into_iter()
        .filter(|action| idle.as_ref() != Some(action))
        .collect()
}

/// Next agent in cyclic turn order.
#[inline]
pub(crate) fn next_agent(agent: usize, num_agents: usize) -> usize {
    (agent + 1) % num_agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pick_max_and_min() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let scored = vec![(1.0, "a"), (3.0, "b"), (2.0, "c")];

        let max = pick(&scored, Extreme::Max, &mut rng);
        assert_eq!(max.value, 3.0);
        assert_eq!(max.action, Some("b"));

        let min = pick(&scored, Extreme::Min, &mut rng);
        assert_eq!(min.value, 1.0);
        assert_eq!(min.action, Some("a"));
    }

    #[test]
    fn test_pick_breaks_ties_uniformly() {
        let scored = vec![(5.0, "a"), (5.0, "b"), (5.0, "c")];
        let trials = 3000usize;
        let mut counts = [0usize; 3];

        for seed in 0..trials as u64 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let decision = pick(&scored, Extreme::Max, &mut rng);
            match decision.action.unwrap() {
                "a" => counts[0] += 1,
                "b" => counts[1] += 1,
                "c" => counts[2] += 1,
                _ => unreachable!(),
            }
        }

        // Expect ~1000 each; allow a generous band around the mean.
        for count in counts {
            assert!(
                (800..=1200).contains(&count),
                "tie-break not uniform: {counts:?}"
            );
        }
    }

    #[test]
    fn test_pick_survives_nan_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        // A lone NaN is ignored by the max fold.
        let mixed = vec![(f64::NAN, "a"), (1.0, "b")];
        let decision = pick(&mixed, Extreme::Max, &mut rng);
        assert_eq!(decision.value, 1.0);
        assert_eq!(decision.action, Some("b"));

        // All-NaN leaves nothing tied for best; the first entry is
        // returned rather than panicking.
        let all_nan = vec![(f64::NAN, "a"), (f64::NAN, "b")];
        let decision = pick(&all_nan, Extreme::Max, &mut rng);
        assert!(decision.value.is_nan());
        assert_eq!(decision.action, Some("a"));
    }

    #[test]
    fn test_next_agent_wraps() {
        assert_eq!(next_agent(0, 3), 1);
        assert_eq!(next_agent(2, 3), 0);
        assert_eq!(next_agent(0, 1), 0);
    }
}
