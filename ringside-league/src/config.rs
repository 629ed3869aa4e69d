//! Configuration types for league play
//!
//! Level 4 - Utilities and configuration

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ringside_core::RosterConfig;

use crate::bracket::BracketMode;

/// Championship configuration
#[derive(Clone, Debug, PartialEq)]
pub struct LeagueConfig {
    /// Round-robin seasons before the tournaments
    pub seasons: u32,
    /// Bracket shape for every weight class
    pub bracket: BracketMode,
    /// Roster generation for each gym
    pub roster: RosterConfig,
    /// Random seed for reproducibility (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            seasons: 2,
            bracket: BracketMode::Standard,
            roster: RosterConfig::default(),
            seed: None,
        }
    }
}

impl LeagueConfig {
    pub fn with_seasons(mut self, seasons: u32) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn with_bracket(mut self, bracket: BracketMode) -> Self {
        self.bracket = bracket;
        self
    }

    pub fn with_roster_size(mut self, size: usize) -> Self {
        self.roster = self.roster.with_size(size);
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for the whole run
    pub fn create_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
