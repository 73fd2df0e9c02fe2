//! Core traits for the search-and-decision engine
//!
//! This crate defines the two collaborator contracts everything else is
//! written against:
//! - `SearchProblem`: a deterministic single-agent state graph with a start
//!   state, goal predicate, and successor generation
//! - `AdversarialGame`: a turn-based multi-agent game with per-agent legal
//!   actions, successor generation, and win/lose predicates
//!
//! Concrete games implement these traits; the `graph-search` and `game-tree`
//! crates consume them. No algorithms live here.

pub mod game;
pub mod problem;

// Re-export main types for convenience
pub use game::AdversarialGame;
pub use problem::{SearchProblem, Successor};
