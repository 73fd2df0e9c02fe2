//! Unpruned minimax.

use rand_chacha::ChaCha20Rng;
use search_core::AdversarialGame;
use tracing::trace;

use crate::config::SearchConfig;
use crate::decision::{active_actions, next_agent, pick, Decision, DecisionError, Extreme};

/// Full minimax decision for the maximizing agent: value and best action.
pub fn minimax<G, E>(
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

/// The minimax action, or [`DecisionError::NoLegalMoves`] if the root has
/// none.
pub fn minimax_action<G, E>(
    state: &G,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Result<G::Action, DecisionError>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    let decision = minimax(state, config, eval, rng);
    trace!(value = decision.value, action = ?decision.action, "minimax decision");
    decision.action.ok_or(DecisionError::NoLegalMoves)
}

/// Whether this layer is a leaf: win, lose, or the ply depth bound.
#[inline]
pub(crate) fn is_cutoff<G: AdversarialGame>(state: &G, depth: u32, config: &SearchConfig) -> bool {
    depth == config.depth || state.is_win() || state.is_lose()
}

pub(crate) fn max_value<G, E>(
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
        // Implicit terminal: nowhere to go, score the state as it stands.
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

pub(crate) fn min_value<G, E>(
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

    pick(&scored, Extreme::Min, rng)
}

/// Route to the next layer: back to the maximizer means the ply advances.
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
        min_value(state, depth, agent, config, eval, rng)
    }
}
