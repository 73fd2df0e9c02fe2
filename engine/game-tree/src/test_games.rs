//! Scripted games used by the algorithm test suites.

use search_core::AdversarialGame;
use std::cell::Cell;
use std::rc::Rc;

/// A game whose state is just the sequence of action indices taken so far.
///
/// Every agent has the same `branching` action indices available at every
/// turn. Evaluation functions for tests map `path` to a value, which makes
/// whole trees scriptable without building any game machinery. Clones share
/// the collaborator-call counters so tests can assert how much of the tree a
/// search actually touched.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedGame {
    pub path: Vec<usize>,
    pub agents: usize,
    pub branching: usize,
    pub win: bool,
    pub lose: bool,
    pub successor_calls: Rc<Cell<usize>>,
    pub legal_calls: Rc<Cell<usize>>,
}

impl ScriptedGame {
    pub fn new(agents: usize, branching: usize) -> Self {
        Self {
            path: Vec::new(),
            agents,
            branching,
            win: false,
            lose: false,
            successor_calls: Rc::new(Cell::new(0)),
            legal_calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn won(mut self) -> Self {
        self.win = true;
        self
    }
}

impl AdversarialGame for ScriptedGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        self.legal_calls.set(self.legal_calls.get() + 1);
        (0..self.branching).collect()
    }

    fn successor(&self, _agent: usize, action: &usize) -> Self {
        self.successor_calls.set(self.successor_calls.get() + 1);
        let mut next = self.clone();
        next.path.push(*action);
        next
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }
}

/// Deterministic pseudo-random leaf value for a path; keeps equivalence
/// tests independent of any hand-built table.
pub(crate) fn hash_eval(game: &ScriptedGame) -> f64 {
    let h = game
        .path
        .iter()
        .fold(7u64, |h, &a| h.wrapping_mul(31).wrapping_add(a as u64 + 1));
    (h % 13) as f64
}
