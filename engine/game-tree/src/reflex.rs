//! One-ply reflex decisions.
//!
//! No lookahead at all: score every legal action with an action-aware
//! evaluation function and take a best one, ties broken uniformly at
//! random. Useful as a baseline and as the decision rule for evaluation
//! functions that already fold their own lookahead into the score.

use rand_chacha::ChaCha20Rng;
use search_core::AdversarialGame;
use tracing::trace;

use crate::decision::{active_actions, pick, DecisionError, Extreme};

/// Score the agent's legal actions in place and return a best one.
pub fn reflex_action<G, E>(
    state: &G,
    agent: usize,
    eval: &E,
    rng: &mut ChaCha20Rng,
) -> Result<G::Action, DecisionError>
where
    G: AdversarialGame,
    E: Fn(&G, &G::Action) -> f64,
{
    let actions = active_actions(state, agent);
    if actions.is_empty() {
        return Err(DecisionError::NoLegalMoves);
    }

    let scored: Vec<(f64, G::Action)> = actions
        .into_iter()
        .map(|action| (eval(state, &action), action))
        .collect();

    let decision = pick(&scored, Extreme::Max, rng);
    trace!(value = decision.value, action = ?decision.action, "reflex decision");
    decision.action.ok_or(DecisionError::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_games::ScriptedGame;
    use rand::SeedableRng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(42)
    }

    #[test]
    fn test_picks_highest_scored_action() {
        let game = ScriptedGame::new(2, 3);
        let eval = |_: &ScriptedGame, action: &usize| match action {
            0 => 1.0,
            1 => 5.0,
            _ => 3.0,
        };

        let action = reflex_action(&game, 0, &eval, &mut rng()).unwrap();
        assert_eq!(action, 1);
    }

    #[test]
    fn test_never_generates_successors() {
        let game = ScriptedGame::new(2, 3);
        let eval = |_: &ScriptedGame, action: &usize| *action as f64;

        reflex_action(&game, 0, &eval, &mut rng()).unwrap();
        assert_eq!(game.successor_calls.get(), 0);
    }

    #[test]
    fn test_ties_are_broken_across_seeds() {
        let game = ScriptedGame::new(2, 3);
        let eval = |_: &ScriptedGame, _: &usize| 1.0;

        let mut seen = std::collections::HashSet::new();
        for seed in 0..50u64 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            seen.insert(reflex_action(&game, 0, &eval, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        let game = ScriptedGame::new(2, 0);
        let eval = |_: &ScriptedGame, _: &usize| 0.0;

        let result = reflex_action(&game, 0, &eval, &mut rng());
        assert_eq!(result, Err(DecisionError::NoLegalMoves));
    }
}
