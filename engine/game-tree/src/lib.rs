//! Bounded-depth game-tree search over a multi-agent turn-based state.
//!
//! Three recursive evaluators share one layering scheme: a maximizing layer
//! for the configured agent, then one adversary layer per remaining agent in
//! cyclic turn order, then the next maximizing layer at ply depth + 1.
//!
//! - [`minimax`]: adversaries pick the minimum-valued successor
//! - [`alphabeta`]: minimax with bound-threaded pruning; same root decision,
//!   strictly fewer nodes visited
//! - [`expectimax`]: adversaries act uniformly at random, so the layer value
//!   is the arithmetic mean over successors
//!
//! A fourth, non-recursive chooser ([`reflex_action`]) scores each root
//! action with a one-ply `(state, action)` evaluation.
//!
//! The game tree is never materialized: a node is just the recursion's
//! `(state, depth, agent, bounds)` arguments. Terminal states and the depth
//! bound return the evaluation function's value with no expansion; a
//! non-terminal node with no legal actions (after filtering the game's idle
//! token) is treated the same way. Ties among best-valued actions are broken
//! uniformly at random from an injected, seedable RNG.
//!
//! # Usage
//!
//! ```rust,ignore
//! use game_tree::{alphabeta_action, SearchConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let config = SearchConfig::default().with_depth(2);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let action = alphabeta_action(&state, &config, &|s| evaluate(s), &mut rng)?;
//! ```

pub mod alphabeta;
pub mod config;
pub mod decision;
pub mod expectimax;
pub mod minimax;
pub mod reflex;

// Re-export main types
pub use alphabeta::{alphabeta, alphabeta_action};
pub use config::SearchConfig;
pub use decision::{Decision, DecisionError};
pub use expectimax::{expectimax, expectimax_action};
pub use minimax::{minimax, minimax_action};
pub use reflex::reflex_action;

/// Test games shared across the algorithm modules (internal use only)
#[cfg(test)]
pub(crate) mod test_games;
