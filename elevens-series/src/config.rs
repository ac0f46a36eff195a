//! Configuration types for series play
//!
//! Level 4 - Utilities and configuration

use elevens_core::{AssignConfig, SimulationConfig};

/// Series configuration
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    /// Number of matches to play
    pub matches: usize,
    /// Whether to run matches in parallel
    pub parallel: bool,
    /// Base seed; match `i` uses `seed + i` (None = fresh entropy per match)
    pub seed: Option<u64>,
    /// Simulation parameters for every match
    pub simulation: SimulationConfig,
    /// Auto-assignment parameters for the AI opponent
    pub assign: AssignConfig,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            matches: 10,
            parallel: true,
            seed: None,
            simulation: SimulationConfig::default(),
            assign: AssignConfig::default(),
        }
    }
}

impl SeriesConfig {
    /// Create config for the given number of matches
    pub fn new(matches: usize) -> Self {
        Self {
            matches,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run matches one after another
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Seed for the match at `index`
    pub(crate) fn match_seed(&self, index: usize) -> u64 {
        match self.seed {
            Some(seed) => seed.wrapping_add(index as u64),
            None => rand::random(),
        }
    }
}
