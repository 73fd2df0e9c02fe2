//! The pursuit game state and its turn mechanics.

use std::collections::BTreeSet;
use std::sync::Arc;

use search_core::AdversarialGame;

use crate::grid::{Dir, Layout, Maze, Pos};

/// Score delta for every hunter move.
pub const TIME_PENALTY: f64 = -1.0;
/// Score delta for eating one food pellet.
pub const FOOD_SCORE: f64 = 10.0;
/// Score delta for clearing the last pellet.
pub const WIN_BONUS: f64 = 500.0;
/// Score delta for being caught by a brave chaser.
pub const LOSE_PENALTY: f64 = -500.0;
/// Score delta for eating a scared chaser.
pub const EAT_CHASER: f64 = 200.0;
/// Moves a chaser stays scared after the hunter eats a capsule.
pub const SCARED_TURNS: u32 = 40;

/// One chaser: current cell, respawn cell, and remaining scared moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chaser {
    pub pos: Pos,
    pub start: Pos,
    pub scared: u32,
}

impl Chaser {
    pub fn is_scared(&self) -> bool {
        self.scared > 0
    }
}

/// Complete game state. Agent 0 is the hunter; agents `1..=n` are the
/// chasers in layout order. Wall geometry is shared, everything else is
/// cloned per successor.
#[derive(Debug, Clone, PartialEq)]
pub struct PursuitState {
    pub maze: Arc<Maze>,
    pub hunter: Pos,
    pub chasers: Vec<Chaser>,
    pub food: BTreeSet<Pos>,
    pub capsules: BTreeSet<Pos>,
    pub score: f64,
    won: bool,
    lost: bool,
}

impl PursuitState {
    /// Initial state for a parsed layout.
    pub fn new(layout: &Layout) -> Self {
        Self {
            maze: Arc::clone(&layout.maze),
            hunter: layout.hunter,
            chasers: layout
                .chasers
                .iter()
                .map(|&pos| Chaser {
                    pos,
                    start: pos,
                    scared: 0,
                })
                .collect(),
            food: layout.food.clone(),
            capsules: layout.capsules.clone(),
            score: 0.0,
            won: false,
            lost: false,
        }
    }

    fn agent_pos(&self, agent: usize) -> Pos {
        if agent == 0 {
            self.hunter
        } else {
            self.chasers[agent - 1].pos
        }
    }

    /// Any chaser sharing the hunter's cell is resolved immediately: a
    /// scared chaser is eaten and respawns at its start, a brave one ends
    /// the game.
    fn resolve_contacts(&mut self) {
        for i in 0..self.chasers.len() {
            if self.chasers[i].pos != self.hunter {
                continue;
            }
            if self.chasers[i].is_scared() {
                self.score += EAT_CHASER;
                self.chasers[i].pos = self.chasers[i].start;
                self.chasers[i].scared = 0;
            } else if !self.lost {
                self.score += LOSE_PENALTY;
                self.lost = true;
            }
        }
    }
}

impl AdversarialGame for PursuitState {
    type Action = Dir;

    fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Dir> {
        if self.won || self.lost {
            return Vec::new();
        }
        let pos = self.agent_pos(agent);
        let mut actions = vec![Dir::Stop];
        for dir in Dir::CARDINAL {
            if !self.maze.is_wall(pos.step(dir)) {
                actions.push(dir);
            }
        }
        actions
    }

    fn successor(&self, agent: usize, action: &Dir) -> Self {
        let mut next = self.clone();
        if agent == 0 {
            next.hunter = next.hunter.step(*action);
            next.score += TIME_PENALTY;
            if next.food.remove(&next.hunter) {
                next.score += FOOD_SCORE;
            }
            if next.capsules.remove(&next.hunter) {
                for chaser in &mut next.chasers {
                    chaser.scared = SCARED_TURNS;
                }
            }
            next.resolve_contacts();
            if !next.lost && next.food.is_empty() {
                next.score += WIN_BONUS;
                next.won = true;
            }
        } else {
            let chaser = &mut next.chasers[agent - 1];
            chaser.pos = chaser.pos.step(*action);
            chaser.scared = chaser.scared.saturating_sub(1);
            next.resolve_contacts();
        }
        next
    }

    fn is_win(&self) -> bool {
        self.won
    }

    fn is_lose(&self) -> bool {
        self.lost
    }

    fn idle_action(&self) -> Option<Dir> {
        Some(Dir::Stop)
    }
}
