//! Multi-agent turn-based game contract consumed by game-tree search.

use std::fmt::Debug;

/// A turn-based multi-agent game state.
///
/// Agents are indexed `0..num_agents()`. One agent maximizes a utility; the
/// rest are adversaries or stochastic actors, depending on which search is
/// run over the state. Successor generation is pure: `successor` returns a
/// new state and leaves `self` untouched, so the recursion can fan out
/// without copy-back bookkeeping.
///
/// `idle_action` names the reserved no-op token, if the game has one. Every
/// decision layer filters it out of the legal set so the searched agent is
/// always making progress.
pub trait AdversarialGame: Clone {
    /// Action token; compared against `idle_action` for filtering.
    type Action: Clone + PartialEq + Debug;

    /// Total number of agents in the game.
    fn num_agents(&self) -> usize;

    /// Legal actions for the given agent in this state.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after the given agent takes the given action.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Whether the maximizing side has won.
    fn is_win(&self) -> bool;

    /// Whether the maximizing side has lost.
    fn is_lose(&self) -> bool;

    /// The reserved no-op token, filtered out of every searched legal set.
    fn idle_action(&self) -> Option<Self::Action> {
        None
    }
}
