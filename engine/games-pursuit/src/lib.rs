//! Maze-pursuit game for the search and decision crates.
//!
//! A single hunter (agent 0) clears food pellets from a walled grid while
//! chasers (agents 1..) pursue it. Power capsules briefly make the chasers
//! edible. The crate implements both collaborator contracts:
//! [`PursuitState`] is an `AdversarialGame` for the game-tree deciders, and
//! [`NavigationProblem`] is a `SearchProblem` for the graph searches.
//!
//! # Usage
//!
//! ```rust
//! use games_pursuit::{Layout, PursuitState};
//!
//! let layout = Layout::parse(
//!     "%%%%%\n\
//!      %P.G%\n\
//!      %%%%%",
//! )?;
//! let state = PursuitState::new(&layout);
//! assert_eq!(state.food.len(), 1);
//! # Ok::<(), games_pursuit::MazeError>(())
//! ```

pub mod eval;
pub mod grid;
pub mod nav;
pub mod state;

// Re-export main types
pub use eval::{reflex_score, score_state, EvalWeights, TacticalEval, TacticalWeights};
pub use grid::{Dir, Layout, Maze, MazeError, Pos};
pub use nav::{manhattan_heuristic, maze_distance, NavigationProblem};
pub use state::{Chaser, PursuitState};
