//! Tournament configuration.

use serde::{Deserialize, Serialize};

/// How many games to play and how to seed and schedule them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Games played per bracket.
    pub games_per_bracket: usize,

    /// Base seed. Every game derives its own seed from this, its bracket
    /// index and its game index.
    pub seed: u64,

    /// Worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_bracket: 100,
            seed: 0,
            threads: None,
        }
    }
}

impl TournamentConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per bracket.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games_per_bracket = games;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run on a dedicated pool of `threads` workers.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}
