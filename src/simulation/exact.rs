//! Exact odds by walking every hand each deck can deal.
//!
//! The two sides draw independently, so the chance that Blotkarz wins is
//! the sum over tier pairs `b > f` of `P(blotkarz = b) * P(figurant = f)`.
//! Only the per side tier distributions are needed, which keeps this to
//! one pass over each deck's hands rather than over pairs of hands.

use std::fmt;

use tracing::event;

use crate::core::{Deck, Rankable, Tier};

use super::config::{Side, SimulationConfig};
use super::error::Result;
use super::stats::TierHistogram;

/// Exact win, loss and tie chances for a pair of decks.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExactOdds {
    /// Every Blotkarz hand, by tier
    pub blotkarz_tiers: TierHistogram,
    /// Every Figurant hand, by tier
    pub figurant_tiers: TierHistogram,
    /// Chance Blotkarz scores a strictly higher tier
    pub win: f64,
    /// Chance Figurant scores a strictly higher tier
    pub loss: f64,
    /// Chance both tiers match
    pub tie: f64,
}

/// Count the tier of every hand a deck can make.
pub fn tier_distribution(deck: &Deck) -> TierHistogram {
    let mut histogram = TierHistogram::new();
    for hand in deck {
        histogram.record(hand.tier());
    }
    histogram
}

impl ExactOdds {
    /// Combine two independent tier distributions.
    pub fn from_distributions(blotkarz: TierHistogram, figurant: TierHistogram) -> Self {
        let mut win: u128 = 0;
        let mut loss: u128 = 0;
        let mut tie: u128 = 0;
        for (b_tier, b_count) in blotkarz.iter() {
            for (f_tier, f_count) in figurant.iter() {
                let pairs = u128::from(b_count) * u128::from(f_count);
                match b_tier.cmp(&f_tier) {
                    std::cmp::Ordering::Greater => win += pairs,
                    std::cmp::Ordering::Less => loss += pairs,
                    std::cmp::Ordering::Equal => tie += pairs,
                }
            }
        }
        let total = (win + loss + tie).max(1) as f64;
        Self {
            blotkarz_tiers: blotkarz,
            figurant_tiers: figurant,
            win: win as f64 / total,
            loss: loss as f64 / total,
            tie: tie as f64 / total,
        }
    }

    /// Chance a single hand from `side` lands in `tier`.
    pub fn tier_chance(&self, side: Side, tier: Tier) -> f64 {
        match side {
            Side::Blotkarz => self.blotkarz_tiers.frequency(tier),
            Side::Figurant => self.figurant_tiers.frequency(tier),
        }
    }
}

impl fmt::Display for ExactOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blotkarz vs Figurant (exact win chance): {}", self.win)
    }
}

/// Exact odds for the pools in `config`. The round count, seed and worker
/// count are ignored.
pub fn exact_odds(config: &SimulationConfig) -> Result<ExactOdds> {
    let (blotkarz, figurant) = config.decks()?;
    event!(
        tracing::Level::INFO,
        blotkarz_cards = blotkarz.len(),
        figurant_cards = figurant.len(),
        "Enumerating every hand"
    );
    let odds = ExactOdds::from_distributions(
        tier_distribution(&blotkarz),
        tier_distribution(&figurant),
    );
    event!(
        tracing::Level::INFO,
        blotkarz_hands = odds.blotkarz_tiers.total(),
        figurant_hands = odds.figurant_tiers.total(),
        win = odds.win,
        "Finished enumeration"
    );
    Ok(odds)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::RankPool;
    use crate::simulation::run_simulation;

    #[test]
    fn test_figurant_distribution() {
        let deck = Deck::new(&RankPool::figurant()).unwrap();
        let h = tier_distribution(&deck);
        // 16 choose 5
        assert_eq!(4368, h.total());
        // Four ranks can't make five distinct ones.
        assert_eq!(0, h.count(Tier::HighCard));
        assert_eq!(0, h.count(Tier::Straight));
        assert_eq!(0, h.count(Tier::Flush));
        assert_eq!(0, h.count(Tier::Poker));
        // One rank all four suits, plus any of the other 12 cards.
        assert_eq!(4 * 12, h.count(Tier::Quads));
        // Pair over three singles: pick the paired rank and two of its
        // suits, then one suit for each of the other three ranks.
        assert_eq!(4 * 6 * 4 * 4 * 4, h.count(Tier::Pair));
    }

    #[test]
    fn test_blotkarz_distribution() {
        let deck = Deck::new(&RankPool::blotkarz()).unwrap();
        let h = tier_distribution(&deck);
        // 36 choose 5
        assert_eq!(376_992, h.total());
        // Runs start at 2 through 6, each suited in 4 ways.
        assert_eq!(5 * 4, h.count(Tier::Poker));
        // Same runs in any suits other than all one suit.
        assert_eq!(5 * (1024 - 4), h.count(Tier::Straight));
    }

    #[test]
    fn test_odds_sum_to_one() {
        let odds = exact_odds(&SimulationConfig::default()).unwrap();
        assert_abs_diff_eq!(1.0, odds.win + odds.loss + odds.tie, epsilon = 1e-12);
        assert!(odds.win > 0.0 && odds.win < odds.loss);
    }

    #[test]
    fn test_symmetric_pools() {
        let config = SimulationConfig {
            blotkarz_ranks: vec![2, 3, 4, 5, 6, 7],
            figurant_ranks: vec![2, 3, 4, 5, 6, 7],
            ..Default::default()
        };
        let odds = exact_odds(&config).unwrap();
        assert_abs_diff_eq!(odds.win, odds.loss, epsilon = 1e-12);
    }

    #[test]
    fn test_monte_carlo_converges_on_exact() {
        let config = SimulationConfig {
            num_rounds: 40_000,
            seed: Some(17),
            ..Default::default()
        };
        let odds = exact_odds(&config).unwrap();
        let result = run_simulation(&config).unwrap();
        assert_abs_diff_eq!(odds.win, result.win_rate(), epsilon = 0.02);
        assert_abs_diff_eq!(odds.tie, result.tie_rate(), epsilon = 0.02);
    }

    #[test]
    fn test_tier_chance() {
        let odds = exact_odds(&SimulationConfig::default()).unwrap();
        assert_eq!(0.0, odds.tier_chance(Side::Figurant, Tier::HighCard));
        assert!(odds.tier_chance(Side::Blotkarz, Tier::HighCard) > 0.0);
    }
}
