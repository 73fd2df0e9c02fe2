//! Point-to-point navigation over the maze as a graph-search problem.

use std::sync::Arc;

use graph_search::breadth_first;
use search_core::{SearchProblem, Successor};

use crate::grid::{Dir, Maze, Pos};

/// Reach a target cell from a start cell; every step costs 1.
#[derive(Debug, Clone)]
pub struct NavigationProblem {
    maze: Arc<Maze>,
    start: Pos,
    goal: Pos,
}

impl NavigationProblem {
    pub fn new(maze: Arc<Maze>, start: Pos, goal: Pos) -> Self {
        Self { maze, start, goal }
    }
}

impl SearchProblem for NavigationProblem {
    type State = Pos;
    type Action = Dir;

    fn start(&self) -> Pos {
        self.start
    }

    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Pos) -> Vec<Successor<Pos, Dir>> {
        Dir::CARDINAL
            .into_iter()
            .filter_map(|dir| {
                let next = state.step(dir);
                if self.maze.is_wall(next) {
                    None
                } else {
                    Some(Successor::new(next, dir, 1.0))
                }
            })
            .collect()
    }
}

/// Manhattan distance to the problem's goal; admissible on a unit-cost grid.
pub fn manhattan_heuristic(state: &Pos, problem: &NavigationProblem) -> f64 {
    state.manhattan(problem.goal)
}

/// True shortest-path length between two cells, or `None` when the maze
/// does not connect them. Walls at either endpoint also yield `None`.
pub fn maze_distance(maze: &Arc<Maze>, from: Pos, to: Pos) -> Option<f64> {
    if from == to {
        return Some(0.0);
    }
    breadth_first(&NavigationProblem::new(Arc::clone(maze), from, to))
        .ok()
        .map(|plan| plan.cost)
}
