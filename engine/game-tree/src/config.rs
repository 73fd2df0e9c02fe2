//! Game-tree search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the bounded-depth searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ply depth bound. One ply is a full round: the maximizing agent and
    /// every adversary have each moved once. Kept small on purpose; the
    /// branching factor and per-node evaluation cost put deeper search past
    /// realistic per-turn time budgets.
    pub depth: u32,

    /// Index of the maximizing agent. Adversaries take their layers in
    /// cyclic order starting from the next index.
    pub max_agent: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            max_agent: 0,
        }
    }
}

impl SearchConfig {
    /// Single-ply config for wide boards where depth 2 is too slow per turn.
    pub fn shallow() -> Self {
        Self {
            depth: 1,
            max_agent: 0,
        }
    }

    /// Config used by the test suites.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Builder pattern: set the ply depth bound.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: set the maximizing agent index.
    pub fn with_max_agent(mut self, agent: usize) -> Self {
        self.max_agent = agent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.max_agent, 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_depth(3).with_max_agent(1);
        assert_eq!(config.depth, 3);
        assert_eq!(config.max_agent, 1);
    }

    #[test]
    fn test_shallow_config() {
        assert_eq!(SearchConfig::shallow().depth, 1);
    }
}
