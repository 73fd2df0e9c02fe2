//! Expectimax: maximization against adversaries that move uniformly at
//! random instead of optimally.
//!
//! Max layers are identical to minimax. Adversary layers are chance nodes:
//! the layer's value is the arithmetic mean of its successor values. A mean
//! has no achieving action, so the chance layer surfaces one of its
//! minimal-valued actions purely to keep the layer interface uniform;
//! nothing above a chance node reads that action.

use rand_chacha::ChaCha20Rng;
use search_core::AdversarialGame;
use tracing::trace;

use crate::config::SearchConfig;
use crate::decision::{active_actions, next_agent, pick, Decision, DecisionError, Extreme};
use crate::minimax::is_cutoff;

/// Expectimax decision for the maximizing agent.
pub fn expectimax<G, E>(
    state: &G,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    max_value(state, 0, config, eval, rng)
}

/// The expectimax action, or [`DecisionError::NoLegalMoves`] if the root
/// has none.
pub fn expectimax_action<G, E>(
    state: &G,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Result<G::Action, DecisionError>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    let decision = expectimax(state, config, eval, rng);
    trace!(value = decision.value, action = ?decision.action, "expectimax decision");
    decision.action.ok_or(DecisionError::NoLegalMoves)
}

fn max_value<G, E>(
    state: &G,
    depth: u32,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    if is_cutoff(state, depth, config) {
        return Decision::leaf(eval(state));
    }

    let actions = active_actions(state, config.max_agent);
    if actions.is_empty() {
        return Decision::leaf(eval(state));
    }

    let next = next_agent(config.max_agent, state.num_agents());
    let mut scored = Vec::with_capacity(actions.len());
    for action in actions {
        let successor = state.successor(config.max_agent, &action);
        let value = descend(&successor, depth, next, config, eval, rng).value;
        scored.push((value, action));
    }

    pick(&scored, Extreme::Max, rng)
}

pub(crate) fn chance_value<G, E>(
    state: &G,
    depth: u32,
    agent: usize,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    if is_cutoff(state, depth, config) {
        return Decision::leaf(eval(state));
    }

    let actions = active_actions(state, agent);
    if actions.is_empty() {
        return Decision::leaf(eval(state));
    }

    let next = next_agent(agent, state.num_agents());
    let mut scored = Vec::with_capacity(actions.len());
    for action in actions {
        let successor = state.successor(agent, &action);
        let value = descend(&successor, depth, next, config, eval, rng).value;
        scored.push((value, action));
    }

    let mean = scored.iter().map(|(value, _)| value).sum::<f64>() / scored.len() as f64;
    let worst = pick(&scored, Extreme::Min, rng);
    Decision {
        value: mean,
        action: worst.action,
    }
}

fn descend<G, E>(
    state: &G,
    depth: u32,
    agent: usize,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    if agent == config.max_agent {
        max_value(state, depth + 1, config, eval, rng)
    } else {
        chance_value(state, depth, agent, config, eval, rng)
    }
}
