//! Evaluation functions for the pursuit game.
//!
//! All scorers combine the raw game score with weighted reciprocal-distance
//! and reciprocal-count terms. Every term is guarded: count terms clamp
//! their divisor at one, and a distance term over an empty or unreachable
//! set contributes nothing instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::grid::{Dir, Pos};
use crate::nav::maze_distance;
use crate::state::PursuitState;
use search_core::AdversarialGame;

/// Weights for [`score_state`]. Fixed constants chosen by play-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Reward for having few pellets left.
    pub food_count: f64,
    /// Urgency term on the farthest remaining pellet.
    pub farthest_food: f64,
    /// Penalty term on proximity to the nearest brave chaser.
    pub nearest_threat: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            food_count: 100.0,
            farthest_food: 100.0,
            nearest_threat: 150.0,
        }
    }
}

/// Depth-independent state score: game score plus the weighted terms.
pub fn score_state(state: &PursuitState, weights: &EvalWeights) -> f64 {
    let mut value = state.score;

    value += weights.food_count / state.food.len().max(1) as f64;

    let farthest = state
        .food
        .iter()
        .map(|&pellet| state.hunter.manhattan(pellet))
        .fold(0.0f64, f64::max);
    if farthest > 0.0 {
        value += weights.farthest_food / farthest;
    }

    let nearest_threat = state
        .chasers
        .iter()
        .filter(|chaser| !chaser.is_scared())
        .map(|chaser| state.hunter.manhattan(chaser.pos))
        .fold(f64::INFINITY, f64::min);
    if nearest_threat.is_finite() && nearest_threat > 0.0 {
        value -= weights.nearest_threat / nearest_threat;
    }

    value
}

/// One-ply reflex score for taking `action` from `state`: the successor's
/// game score minus the manhattan distance to the nearest pellet that was
/// on the board before the move.
pub fn reflex_score(state: &PursuitState, action: &Dir) -> f64 {
    let next = state.successor(0, action);
    let nearest = state
        .food
        .iter()
        .map(|&pellet| next.hunter.manhattan(pellet))
        .fold(f64::INFINITY, f64::min);
    if nearest.is_finite() {
        next.score - nearest
    } else {
        next.score
    }
}

/// Weights for [`TacticalEval`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalWeights {
    /// Reward for having few pellets left.
    pub remaining_food: f64,
    /// Flat penalty when a brave chaser is within [`Self::threat_radius`].
    pub threat_penalty: f64,
    /// Maze-distance radius inside which a brave chaser counts as a threat.
    pub threat_radius: f64,
    /// Divisor softening the nearest-pellet distance term.
    pub distance_scale: f64,
    /// Flat penalty for standing on the previously observed cell.
    pub oscillation_penalty: f64,
    /// Smallest local pellet subset worth fixating on; below this the
    /// scorer falls back to the full board.
    pub local_food_min: usize,
}

impl Default for TacticalWeights {
    fn default() -> Self {
        Self {
            remaining_food: 1000.0,
            threat_penalty: -6.0,
            threat_radius: 3.0,
            distance_scale: 4.5,
            oscillation_penalty: -5.0,
            local_food_min: 2,
        }
    }
}

/// Stateful tactical scorer for one hunter over a sequence of turns.
///
/// Splits the board into a top and a bottom half and concentrates on
/// pellets in its own half while enough remain there. Carries the hunter
/// position observed last turn so it can penalize standing still or
/// oscillating in place. Call [`TacticalEval::observe`] once per turn with
/// the state actually reached.
#[derive(Debug, Clone)]
pub struct TacticalEval {
    weights: TacticalWeights,
    top_half: bool,
    last_seen: Option<Pos>,
}

impl TacticalEval {
    pub fn new(weights: TacticalWeights, top_half: bool) -> Self {
        Self {
            weights,
            top_half,
            last_seen: None,
        }
    }

    /// Record the turn's actual outcome for the anti-oscillation term.
    pub fn observe(&mut self, state: &PursuitState) {
        self.last_seen = Some(state.hunter);
    }

    /// Score a candidate state.
    pub fn score(&self, state: &PursuitState) -> f64 {
        let w = &self.weights;
        let mut value = state.score;

        value += w.remaining_food / state.food.len().max(1) as f64;

        // At most one threat penalty, no matter how many chasers crowd in.
        let threatened = state.chasers.iter().any(|chaser| {
            !chaser.is_scared()
                && maze_distance(&state.maze, state.hunter, chaser.pos)
                    .is_some_and(|d| d < w.threat_radius)
        });
        if threatened {
            value += w.threat_penalty;
        }

        let midline = (state.maze.height() / 2) as i32;
        let local: Vec<Pos> = state
            .food
            .iter()
            .copied()
            .filter(|pellet| {
                if self.top_half {
                    pellet.y < midline
                } else {
                    pellet.y >= midline
                }
            })
            .collect();
        let targets: Vec<Pos> = if local.len() <= w.local_food_min {
            state.food.iter().copied().collect()
        } else {
            local
        };
        let nearest = targets
            .iter()
            .filter_map(|&pellet| maze_distance(&state.maze, state.hunter, pellet))
            .fold(f64::INFINITY, f64::min);
        if nearest.is_finite() {
            value -= nearest / w.distance_scale;
        }

        if self.last_seen == Some(state.hunter) {
            value += w.oscillation_penalty;
        }

        value
    }
}
