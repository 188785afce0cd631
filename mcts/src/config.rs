//! Search configuration parameters.

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of simulations to run per search.
    pub simulations: u32,

    /// Exploration constant `k` in the UCT formula.
    /// Higher values encourage exploration, lower values favor
    /// exploitation. The classic choice is √2.
    pub exploration: f32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations: 1000,
            exploration: std::f32::consts::SQRT_2,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            simulations: 100,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.simulations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, k: f32) -> Self {
        self.exploration = k;
        self
    }
}
