use crate::core::RankPool;

use super::config::{DEFAULT_NUM_ROUNDS, SimulationConfig};
use super::error::Result;
use super::runner::Simulation;

/// Builder for constructing Simulation instances
///
/// # Example
///
/// ```
/// use blotkarz::simulation::{Side, SimulationBuilder};
///
/// let sim = SimulationBuilder::new()
///     .num_rounds(10_000)
///     .blotkarz_ranks(vec![2, 3, 4])
///     .figurant_ranks(vec![11, 12, 13, 14])
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(12, sim.deck(Side::Blotkarz).len());
/// ```
#[derive(Debug, Default)]
pub struct SimulationBuilder {
    num_rounds: Option<u64>,
    blotkarz_ranks: Option<Vec<u8>>,
    figurant_ranks: Option<Vec<u8>>,
    seed: Option<u64>,
    workers: Option<usize>,
}

impl SimulationBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration. Anything set afterwards
    /// overrides it.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self {
            num_rounds: Some(config.num_rounds),
            blotkarz_ranks: Some(config.blotkarz_ranks),
            figurant_ranks: Some(config.figurant_ranks),
            seed: config.seed,
            workers: Some(config.workers),
        }
    }

    /// Set the number of rounds to play
    pub fn num_rounds(mut self, num_rounds: u64) -> Self {
        self.num_rounds = Some(num_rounds);
        self
    }

    /// Set the ranks Blotkarz draws from
    pub fn blotkarz_ranks(mut self, ranks: Vec<u8>) -> Self {
        self.blotkarz_ranks = Some(ranks);
        self
    }

    /// Set the ranks Figurant draws from
    pub fn figurant_ranks(mut self, ranks: Vec<u8>) -> Self {
        self.figurant_ranks = Some(ranks);
        self
    }

    /// Set the Blotkarz ranks from an already built pool
    pub fn blotkarz_pool(self, pool: &RankPool) -> Self {
        self.blotkarz_ranks(pool.ranks())
    }

    /// Set the Figurant ranks from an already built pool
    pub fn figurant_pool(self, pool: &RankPool) -> Self {
        self.figurant_ranks(pool.ranks())
    }

    /// Set the random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many independent random streams to split the rounds across
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// The configuration this builder would produce, without validating it.
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            num_rounds: self.num_rounds.unwrap_or(DEFAULT_NUM_ROUNDS),
            blotkarz_ranks: self
                .blotkarz_ranks
                .clone()
                .unwrap_or_else(|| RankPool::blotkarz().ranks()),
            figurant_ranks: self
                .figurant_ranks
                .clone()
                .unwrap_or_else(|| RankPool::figurant().ranks()),
            seed: self.seed,
            workers: self.workers.unwrap_or(1),
        }
    }

    /// Build the Simulation
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Simulation> {
        Simulation::new(self.config())
    }
}
