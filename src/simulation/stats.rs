use crate::core::Tier;

/// How many hands landed in each tier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierHistogram {
    counts: [u64; 9],
}

impl TierHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more hand in `tier`.
    pub fn record(&mut self, tier: Tier) {
        self.counts[tier.as_u8() as usize] += 1;
    }

    /// Count `n` more hands in `tier`.
    pub fn record_many(&mut self, tier: Tier, n: u64) {
        self.counts[tier.as_u8() as usize] += n;
    }

    pub fn count(&self, tier: Tier) -> u64 {
        self.counts[tier.as_u8() as usize]
    }

    /// Total hands recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of recorded hands in `tier`, 0.0 when nothing was recorded.
    pub fn frequency(&self, tier: Tier) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(tier) as f64 / total as f64
        }
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &TierHistogram) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// `(tier, count)` pairs, weakest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u64)> + '_ {
        Tier::ALL.iter().map(|t| (*t, self.count(*t)))
    }
}
