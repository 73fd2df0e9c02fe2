//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value the maximizer can already force, `beta` the
//! best the adversaries can; both are threaded through every recursive call
//! and tightened as sibling successors are evaluated. A layer stops
//! expanding as soon as a child value falls strictly outside the window:
//! the remaining successors cannot change the parent's decision. Strict
//! comparisons mean a value exactly on a bound is never returned early, so
//! every root-level score that ties for best is exact and the chosen action
//! always matches one of unpruned minimax's tied-best actions.

use rand_chacha::ChaCha20Rng;
use search_core::AdversarialGame;
use tracing::trace;

use crate::config::SearchConfig;
use crate::decision::{active_actions, next_agent, pick, Decision, DecisionError, Extreme};
use crate::minimax::is_cutoff;

/// Alpha-beta pruned minimax decision for the maximizing agent.
pub fn alphabeta<G, E>(
    state: &G,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    max_value(
        state,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        config,
        eval,
        rng,
    )
}

/// The alpha-beta action, or [`DecisionError::NoLegalMoves`] if the root
/// has none.
pub fn alphabeta_action<G, E>(
    state: &G,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Result<G::Action, DecisionError>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    let decision = alphabeta(state, config, eval, rng);
    trace!(value = decision.value, action = ?decision.action, "alpha-beta decision");
    decision.action.ok_or(DecisionError::NoLegalMoves)
}

#[allow(clippy::too_many_arguments)]
fn max_value<G, E>(
    state: &G,
    depth: u32,
    mut alpha: f64,
    beta: f64,
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
        let value = descend(&successor, depth, next, alpha, beta, config, eval, rng).value;

        if value > beta {
            // The adversary above will never let play reach a line this
            // good; the remaining successors are irrelevant.
            return Decision {
                value,
                action: Some(action),
            };
        }
        alpha = alpha.max(value);
        scored.push((value, action));
    }

    pick(&scored, Extreme::Max, rng)
}

#[allow(clippy::too_many_arguments)]
fn min_value<G, E>(
    state: &G,
    depth: u32,
    agent: usize,
    alpha: f64,
    mut beta: f64,
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
        let value = descend(&successor, depth, next, alpha, beta, config, eval, rng).value;

        if value < alpha {
            // The maximizer above already has a better line than anything
            // this layer can now offer.
            return Decision {
                value,
                action: Some(action),
            };
        }
        beta = beta.min(value);
        scored.push((value, action));
    }

    pick(&scored, Extreme::Min, rng)
}

#[allow(clippy::too_many_arguments)]
fn descend<G, E>(
    state: &G,
    depth: u32,
    agent: usize,
    alpha: f64,
    beta: f64,
    config: &SearchConfig,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Decision<G::Action>
where
    G: AdversarialGame,
    E: Fn(&G) -> f64,
{
    if agent == config.max_agent {
        max_value(state, depth + 1, alpha, beta, config, eval, rng)
    } else {
        min_value(state, depth, agent, alpha, beta, config, eval, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax;
    use crate::test_games::{hash_eval, ScriptedGame};
    use rand::SeedableRng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(42)
    }

    #[test]
    fn test_matches_minimax_value_on_scripted_tree() {
        let game = ScriptedGame::new(2, 2);
        let eval = |g: &ScriptedGame| match g.path.as_slice() {
            [0, 0] => 3.0,
            [0, 1] => 7.0,
            [1, 0] => 6.0,
            [1, 1] => 9.0,
            other => panic!("unexpected leaf {other:?}"),
        };
        let config = SearchConfig::default().with_depth(1);

        let pruned = alphabeta(&game, &config, &eval, &mut rng());
        let full = minimax::minimax(&game, &config, &eval, &mut rng());
        assert_eq!(pruned.value, full.value);
        assert_eq!(pruned.action, full.action);
    }

    #[test]
    fn test_root_action_ties_with_unpruned_minimax() {
        // Dense pseudo-random tree, three agents, two plies. The pruned
        // root value must match minimax exactly and the chosen action must
        // be one of minimax's tied-best root actions.
        for agents in [2usize, 3] {
            let game = ScriptedGame::new(agents, 3);
            let config = SearchConfig::default().with_depth(2);

            let pruned = alphabeta(&game, &config, &hash_eval, &mut rng());
            let full = minimax::minimax(&game, &config, &hash_eval, &mut rng());
            assert_eq!(pruned.value, full.value);

            // Recompute each root action's exact adversary-chain value and
            // collect the tie set.
            let next = 1 % agents;
            let mut ties = Vec::new();
            for action in 0..3usize {
                let successor = game.successor(0, &action);
                let value = if next == 0 {
                    minimax::max_value(&successor, 1, &config, &hash_eval, &mut rng()).value
                } else {
                    minimax::min_value(&successor, 0, next, &config, &hash_eval, &mut rng()).value
                };
                if value == full.value {
                    ties.push(action);
                }
            }
            assert!(ties.contains(&pruned.action.unwrap()));
        }
    }

    #[test]
    fn test_prunes_nodes_minimax_visits() {
        // Same tree, same decision, strictly fewer successor generations.
        let config = SearchConfig::default().with_depth(2);

        let pruned_game = ScriptedGame::new(2, 4);
        alphabeta(&pruned_game, &config, &hash_eval, &mut rng());
        let pruned_calls = pruned_game.successor_calls.get();

        let full_game = ScriptedGame::new(2, 4);
        minimax::minimax(&full_game, &config, &hash_eval, &mut rng());
        let full_calls = full_game.successor_calls.get();

        assert!(
            pruned_calls < full_calls,
            "expected pruning: {pruned_calls} vs {full_calls}"
        );
    }

    #[test]
    fn test_terminal_state_short_circuits() {
        let game = ScriptedGame::new(2, 3).won();
        let eval = |_: &ScriptedGame| 55.0;

        let decision = alphabeta(&game, &SearchConfig::default(), &eval, &mut rng());
        assert_eq!(decision.value, 55.0);
        assert_eq!(game.successor_calls.get(), 0);
    }

    #[test]
    fn test_no_legal_moves_at_root_is_an_error() {
        let game = ScriptedGame::new(2, 0);
        let eval = |_: &ScriptedGame| 0.0;

        let result = alphabeta_action(&game, &SearchConfig::default(), &eval, &mut rng());
        assert_eq!(result, Err(DecisionError::NoLegalMoves));
    }
}
