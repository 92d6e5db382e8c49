use std::fmt;

use crate::core::Tier;

use super::config::Side;
use super::stats::TierHistogram;

/// Both tiers from a single round.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub blotkarz: Tier,
    pub figurant: Tier,
}

impl RoundOutcome {
    /// The side with the strictly stronger tier, `None` on a tie.
    pub fn winner(&self) -> Option<Side> {
        match self.blotkarz.cmp(&self.figurant) {
            std::cmp::Ordering::Greater => Some(Side::Blotkarz),
            std::cmp::Ordering::Less => Some(Side::Figurant),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Tally of a Monte Carlo run.
///
/// `blotkarz_wins + figurant_wins + ties == rounds` always holds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Rounds played
    pub rounds: u64,
    /// Rounds where Blotkarz scored a strictly higher tier
    pub blotkarz_wins: u64,
    /// Rounds where Figurant scored a strictly higher tier
    pub figurant_wins: u64,
    /// Rounds where both tiers matched
    pub ties: u64,
    /// Tiers dealt to Blotkarz
    pub blotkarz_tiers: TierHistogram,
    /// Tiers dealt to Figurant
    pub figurant_tiers: TierHistogram,
    /// Base seed the run used; rerunning with it replays the run
    pub seed: u64,
}

impl SimulationResult {
    /// Create an empty result for a run seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rounds: 0,
            blotkarz_wins: 0,
            figurant_wins: 0,
            ties: 0,
            blotkarz_tiers: TierHistogram::new(),
            figurant_tiers: TierHistogram::new(),
            seed,
        }
    }

    /// Add a round to the tally.
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        self.blotkarz_tiers.record(outcome.blotkarz);
        self.figurant_tiers.record(outcome.figurant);
        match outcome.winner() {
            Some(Side::Blotkarz) => self.blotkarz_wins += 1,
            Some(Side::Figurant) => self.figurant_wins += 1,
            None => self.ties += 1,
        }
    }

    /// Fold a partial result (from another worker) into this one.
    pub fn merge(&mut self, other: &SimulationResult) {
        self.rounds += other.rounds;
        self.blotkarz_wins += other.blotkarz_wins;
        self.figurant_wins += other.figurant_wins;
        self.ties += other.ties;
        self.blotkarz_tiers.merge(&other.blotkarz_tiers);
        self.figurant_tiers.merge(&other.figurant_tiers);
    }

    fn ratio(&self, count: u64) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            count as f64 / self.rounds as f64
        }
    }

    /// Fraction of rounds Blotkarz won outright. Ties don't count.
    pub fn win_rate(&self) -> f64 {
        self.ratio(self.blotkarz_wins)
    }

    /// Fraction of rounds Figurant won outright.
    pub fn loss_rate(&self) -> f64 {
        self.ratio(self.figurant_wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.ratio(self.ties)
    }

    /// Format results as Markdown output
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Blotkarz vs Figurant\n\n");
        output.push_str(&format!("- **Rounds**: {}\n", self.rounds));
        output.push_str(&format!("- **Seed**: {}\n", self.seed));
        output.push_str(&format!(
            "- **Blotkarz wins**: {} ({:.2}%)\n",
            self.blotkarz_wins,
            self.win_rate() * 100.0
        ));
        output.push_str(&format!(
            "- **Figurant wins**: {} ({:.2}%)\n",
            self.figurant_wins,
            self.loss_rate() * 100.0
        ));
        output.push_str(&format!(
            "- **Ties**: {} ({:.2}%)\n\n",
            self.ties,
            self.tie_rate() * 100.0
        ));

        output.push_str("| Tier | Blotkarz | Figurant |\n");
        output.push_str("|---|---:|---:|\n");
        for tier in Tier::ALL.iter().rev() {
            output.push_str(&format!(
                "| {} ({}) | {} | {} |\n",
                tier,
                tier.as_u8(),
                self.blotkarz_tiers.count(*tier),
                self.figurant_tiers.count(*tier)
            ));
        }
        output
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blotkarz vs Figurant (win chance): {}", self.win_rate())
    }
}
