use rand::{Rng, SeedableRng, rngs::StdRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::event;

use crate::core::{Deck, Rankable};

use super::config::{Side, SimulationConfig};
use super::error::Result;
use super::result::{RoundOutcome, SimulationResult};

/// A validated Monte Carlo run, ready to play.
///
/// Build one with `SimulationBuilder` or `Simulation::new`. Every round
/// deals one hand per side from that side's own deck, so the two hands
/// can share cards.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    blotkarz: Deck,
    figurant: Deck,
}

impl Simulation {
    /// Validate `config` and build both decks.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let (blotkarz, figurant) = config.decks()?;
        Ok(Self {
            config,
            blotkarz,
            figurant,
        })
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The deck one side is dealt from.
    pub fn deck(&self, side: Side) -> &Deck {
        match side {
            Side::Blotkarz => &self.blotkarz,
            Side::Figurant => &self.figurant,
        }
    }

    /// Deal both hands and score them.
    pub fn play_round<R: Rng + ?Sized>(&self, rng: &mut R) -> RoundOutcome {
        let figurant = self.figurant.deal_hand(rng);
        let blotkarz = self.blotkarz.deal_hand(rng);
        RoundOutcome {
            blotkarz: blotkarz.tier(),
            figurant: figurant.tier(),
        }
    }

    /// Play `rounds` rounds off one random stream.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rounds: u64,
        rng: &mut R,
        seed: u64,
    ) -> SimulationResult {
        let mut result = SimulationResult::new(seed);
        for round in 0..rounds {
            let outcome = self.play_round(rng);
            event!(
                tracing::Level::TRACE,
                round,
                blotkarz = %outcome.blotkarz,
                figurant = %outcome.figurant,
                "Played round"
            );
            result.record(outcome);
        }
        result
    }

    /// One worker: its own `StdRng`, seeded `seed + worker`, and its own
    /// partial tally.
    fn run_worker(&self, worker: usize, rounds: u64, seed: u64) -> SimulationResult {
        let worker_seed = seed.wrapping_add(worker as u64);
        event!(
            tracing::Level::DEBUG,
            worker,
            rounds,
            worker_seed,
            "Starting worker"
        );
        let mut rng = StdRng::seed_from_u64(worker_seed);
        let result = self.run_with_rng(rounds, &mut rng, worker_seed);
        event!(
            tracing::Level::DEBUG,
            worker,
            blotkarz_wins = result.blotkarz_wins,
            "Finished worker"
        );
        result
    }

    /// Run every configured round and return the merged tally.
    ///
    /// With a seed in the config the result only depends on the config,
    /// no matter whether the workers run in parallel.
    pub fn run(&self) -> SimulationResult {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        event!(
            tracing::Level::INFO,
            num_rounds = self.config.num_rounds,
            workers = self.config.workers,
            seed,
            blotkarz_cards = self.blotkarz.len(),
            figurant_cards = self.figurant.len(),
            "Starting simulation"
        );

        let plan: Vec<(usize, u64)> = self
            .config
            .rounds_per_worker()
            .into_iter()
            .enumerate()
            .collect();

        #[cfg(feature = "parallel")]
        let partials: Vec<SimulationResult> = plan
            .into_par_iter()
            .map(|(worker, rounds)| self.run_worker(worker, rounds, seed))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let partials: Vec<SimulationResult> = plan
            .into_iter()
            .map(|(worker, rounds)| self.run_worker(worker, rounds, seed))
            .collect();

        let mut result = SimulationResult::new(seed);
        for partial in &partials {
            result.merge(partial);
        }

        event!(
            tracing::Level::INFO,
            rounds = result.rounds,
            blotkarz_wins = result.blotkarz_wins,
            figurant_wins = result.figurant_wins,
            ties = result.ties,
            win_rate = result.win_rate(),
            "Finished simulation"
        );
        result
    }
}

/// Validate `config`, run it, and return the tally.
///
/// # Examples
///
/// ```
/// use blotkarz::simulation::{SimulationConfig, run_simulation};
///
/// let config = SimulationConfig {
///     seed: Some(7),
///     ..Default::default()
/// };
/// let result = run_simulation(&config).unwrap();
/// assert_eq!(1000, result.rounds);
/// assert!((0.0..=1.0).contains(&result.win_rate()));
/// ```
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult> {
    Ok(Simulation::new(config.clone())?.run())
}

#[cfg(test)]
mod tests {
    use crate::core::Tier;
    use crate::simulation::SimulationError;

    use super::*;

    fn seeded(num_rounds: u64, seed: u64) -> SimulationConfig {
        SimulationConfig {
            num_rounds,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_rounds_is_error() {
        let config = SimulationConfig {
            num_rounds: 0,
            ..Default::default()
        };
        assert!(matches!(
            run_simulation(&config),
            Err(SimulationError::InvalidRoundCount)
        ));
    }

    #[test_log::test]
    fn test_result_is_a_probability() {
        for n in [1, 2, 17, 1000] {
            let result = run_simulation(&SimulationConfig {
                num_rounds: n,
                ..Default::default()
            })
            .unwrap();
            assert_eq!(n, result.rounds);
            assert!(result.blotkarz_wins <= n);
            assert_eq!(n, result.blotkarz_wins + result.figurant_wins + result.ties);
            assert!((0.0..=1.0).contains(&result.win_rate()));
        }
    }

    #[test_log::test]
    fn test_seeded_runs_repeat() {
        let a = run_simulation(&seeded(2000, 1234)).unwrap();
        let b = run_simulation(&seeded(2000, 1234)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.win_rate(), b.win_rate());
        assert_eq!(1234, a.seed);
    }

    #[test]
    fn test_unseeded_run_reports_replayable_seed() {
        let first = run_simulation(&SimulationConfig {
            num_rounds: 500,
            ..Default::default()
        })
        .unwrap();
        let replay = run_simulation(&seeded(500, first.seed)).unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_seeded_workers_repeat() {
        let config = SimulationConfig {
            workers: 4,
            ..seeded(1001, 99)
        };
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(1001, a.rounds);
        assert_eq!(1001, a.blotkarz_tiers.total());
        assert_eq!(1001, a.figurant_tiers.total());
    }

    #[test]
    fn test_more_workers_than_rounds() {
        let config = SimulationConfig {
            workers: 8,
            ..seeded(3, 5)
        };
        let result = run_simulation(&config).unwrap();
        assert_eq!(3, result.rounds);

        let capped = SimulationConfig {
            workers: usize::MAX,
            ..seeded(10, 1)
        };
        let result = run_simulation(&capped).unwrap();
        assert_eq!(10, result.rounds);
        assert_eq!(
            result,
            run_simulation(&SimulationConfig {
                workers: 10,
                ..seeded(10, 1)
            })
            .unwrap()
        );
    }

    #[test]
    fn test_identical_pools_split_evenly() {
        // Same pool on both sides: wins and losses should come out close.
        let config = SimulationConfig {
            blotkarz_ranks: vec![2, 3, 4, 5, 6, 7, 8, 9, 10],
            figurant_ranks: vec![2, 3, 4, 5, 6, 7, 8, 9, 10],
            ..seeded(20_000, 3)
        };
        let result = run_simulation(&config).unwrap();
        assert!((result.win_rate() - result.loss_rate()).abs() < 0.03);
    }

    #[test]
    fn test_play_round_uses_both_decks() {
        let sim = Simulation::new(seeded(1, 0)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let outcome = sim.play_round(&mut rng);
            // Four face ranks means at least one repeat in every Figurant
            // hand.
            assert!(outcome.figurant >= Tier::Pair);
        }
        assert_eq!(36, sim.deck(Side::Blotkarz).len());
        assert_eq!(16, sim.deck(Side::Figurant).len());
    }

    #[test]
    fn test_figurant_is_favoured_by_default() {
        let result = run_simulation(&seeded(10_000, 2024)).unwrap();
        assert!(result.win_rate() < result.loss_rate());
    }
}
