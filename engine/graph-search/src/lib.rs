//! Graph search over a deterministic single-agent state graph.
//!
//! Four algorithms share one frontier-driven expansion loop and differ only
//! in frontier discipline and cost accounting:
//!
//! | Algorithm         | Frontier       | Push priority                    |
//! |-------------------|----------------|----------------------------------|
//! | [`depth_first`]   | stack (LIFO)   | none (insertion order)           |
//! | [`breadth_first`] | queue (FIFO)   | none (insertion order)           |
//! | [`uniform_cost`]  | priority queue | accumulated path cost            |
//! | [`astar`]         | priority queue | accumulated cost + heuristic     |
//!
//! Each returns a [`Plan`]: the ordered action sequence from the problem's
//! start state to the first goal discovered, plus its accumulated cost, or
//! [`SearchError::NoPathFound`] if the frontier empties first.
//!
//! # Usage
//!
//! ```rust,ignore
//! use graph_search::{astar, breadth_first};
//!
//! let plan = breadth_first(&problem)?;
//! let plan = astar(&problem, |state, problem| my_heuristic(state, problem))?;
//! for action in &plan.actions {
//!     // apply in order from the start state to reach a goal
//! }
//! ```

pub mod frontier;
pub mod plan;
pub mod search;

// Re-export main types
pub use frontier::{Frontier, PriorityQueue, Queue, Stack};
pub use plan::Plan;
pub use search::{astar, breadth_first, depth_first, uniform_cost, SearchError};
