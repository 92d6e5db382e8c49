use std::fmt;
#[cfg(feature = "serde")]
use std::path::Path;

use crate::core::{Deck, RankPool};

use super::error::{Result, SimulationError};

/// Default number of rounds per run.
pub const DEFAULT_NUM_ROUNDS: u64 = 1000;

/// The two sides of the contest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Numbered cards.
    Blotkarz,
    /// Face cards.
    Figurant,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blotkarz => f.write_str("Blotkarz"),
            Side::Figurant => f.write_str("Figurant"),
        }
    }
}

/// Configuration for a Monte Carlo run
///
/// Suits are not configurable: every deck uses all four labels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent rounds to play
    pub num_rounds: u64,
    /// Ranks the Blotkarz side draws from
    pub blotkarz_ranks: Vec<u8>,
    /// Ranks the Figurant side draws from
    pub figurant_ranks: Vec<u8>,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
    /// Number of independent random streams the rounds are split across
    pub workers: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_rounds: DEFAULT_NUM_ROUNDS,
            blotkarz_ranks: RankPool::blotkarz().ranks(),
            figurant_ranks: RankPool::figurant().ranks(),
            seed: None,
            workers: 1,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values. The result is validated before it is returned.
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::from_json_file_unchecked(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file without validating it, for a
    /// base that other settings will still override.
    #[cfg(feature = "serde")]
    pub fn from_json_file_unchecked<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| SimulationError::ParseConfig {
            path: path.display().to_string(),
            source,
        })
    }

    /// Validate the simulation configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_rounds == 0 {
            return Err(SimulationError::InvalidRoundCount);
        }

        if self.workers == 0 {
            return Err(SimulationError::InvalidWorkerCount);
        }

        // Pools have to be in range and big enough to deal a hand.
        self.decks().map(|_| ())
    }

    /// Build the rank pool for one side.
    pub fn pool(&self, side: Side) -> Result<RankPool> {
        let ranks = match side {
            Side::Blotkarz => &self.blotkarz_ranks,
            Side::Figurant => &self.figurant_ranks,
        };
        RankPool::new(ranks).map_err(|source| SimulationError::InvalidPool { side, source })
    }

    /// Build the deck for one side.
    pub fn deck(&self, side: Side) -> Result<Deck> {
        let pool = self.pool(side)?;
        Deck::new(&pool).map_err(|source| SimulationError::InvalidPool { side, source })
    }

    /// Build both decks, Blotkarz first.
    pub fn decks(&self) -> Result<(Deck, Deck)> {
        Ok((self.deck(Side::Blotkarz)?, self.deck(Side::Figurant)?))
    }

    /// How many rounds each worker plays. The split is as even as possible
    /// with the first workers taking the remainder. Workers beyond the
    /// round count would play nothing and are left out.
    pub fn rounds_per_worker(&self) -> Vec<u64> {
        let workers = u64::try_from(self.workers)
            .unwrap_or(u64::MAX)
            .clamp(1, self.num_rounds.max(1));
        let base = self.num_rounds / workers;
        let extra = self.num_rounds % workers;
        (0..workers).map(|k| base + u64::from(k < extra)).collect()
    }
}
