use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::index;

use super::card::{Card, Suit, Value};
use super::error::BlotkarzError;
use super::hand::{HAND_SIZE, Hand};

/// The set of ranks one side is allowed to draw from.
///
/// Always non-empty, sorted and free of duplicates. Pools for the two sides
/// are independent and may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankPool {
    values: Vec<Value>,
}

impl RankPool {
    /// Build a pool from numeric ranks. Order and repeats don't matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::RankPool;
    ///
    /// let pool = RankPool::new(&[4, 2, 3, 3]).unwrap();
    /// assert_eq!(vec![2, 3, 4], pool.ranks());
    /// assert!(RankPool::new(&[]).is_err());
    /// assert!(RankPool::new(&[2, 15]).is_err());
    /// ```
    pub fn new(ranks: &[u8]) -> Result<Self, BlotkarzError> {
        let mut values = ranks
            .iter()
            .map(|&r| Value::from_rank(r))
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(BlotkarzError::EmptyRankPool);
        }
        values.sort_unstable();
        values.dedup();
        Ok(Self { values })
    }

    /// Every rank from `low` to `high` inclusive.
    pub fn from_range(low: u8, high: u8) -> Result<Self, BlotkarzError> {
        if low > high {
            return Err(BlotkarzError::InvalidRankRange(low, high));
        }
        let ranks: Vec<u8> = (low..=high).collect();
        Self::new(&ranks)
    }

    /// The numbered cards, two through ten.
    pub fn blotkarz() -> Self {
        Self {
            values: Value::values()
                .into_iter()
                .filter(|v| *v <= Value::Ten)
                .collect(),
        }
    }

    /// The face cards, Jack through Ace.
    pub fn figurant() -> Self {
        Self {
            values: Value::values()
                .into_iter()
                .filter(|v| *v >= Value::Jack)
                .collect(),
        }
    }

    /// The values in this pool, lowest first.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The numeric ranks in this pool, lowest first.
    pub fn ranks(&self) -> Vec<u8> {
        self.values.iter().map(|v| v.rank()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, pools are never empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.values.binary_search(&value).is_ok()
    }
}

/// Parse one rank, either as a number or as a value char.
fn parse_rank(s: &str) -> Result<u8, BlotkarzError> {
    let s = s.trim();
    if let Ok(rank) = s.parse::<u8>() {
        return Value::from_rank(rank).map(|v| v.rank());
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Value::from_char(c)
            .map(|v| v.rank())
            .ok_or(BlotkarzError::UnexpectedValueChar),
        _ => Err(BlotkarzError::UnexpectedValueChar),
    }
}

/// Parse a comma separated list of ranks and inclusive ranges.
///
/// # Examples
///
/// ```
/// use blotkarz::core::parse_ranks;
///
/// assert_eq!(vec![2, 3, 4, 5, 6, 7, 8, 9, 10], parse_ranks("2-10").unwrap());
/// assert_eq!(vec![11, 12, 13, 14], parse_ranks("J-A").unwrap());
/// assert_eq!(vec![2, 3, 4], parse_ranks("2,3,4").unwrap());
/// ```
pub fn parse_ranks(s: &str) -> Result<Vec<u8>, BlotkarzError> {
    let mut ranks = Vec::new();
    for item in s.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        match item.split_once('-') {
            Some((low, high)) => {
                let low = parse_rank(low)?;
                let high = parse_rank(high)?;
                if low > high {
                    return Err(BlotkarzError::InvalidRankRange(low, high));
                }
                ranks.extend(low..=high);
            }
            None => ranks.push(parse_rank(item)?),
        }
    }
    if ranks.is_empty() {
        return Err(BlotkarzError::EmptyRankPool);
    }
    Ok(ranks)
}

impl FromStr for RankPool {
    type Err = BlotkarzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&parse_ranks(s)?)
    }
}

/// Writes the pool back in the same compact form `parse_ranks` reads,
/// collapsing consecutive ranks into ranges.
impl fmt::Display for RankPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks = self.ranks();
        let mut start = 0;
        while start < ranks.len() {
            let mut end = start;
            while end + 1 < ranks.len() && ranks[end + 1] == ranks[end] + 1 {
                end += 1;
            }
            if start > 0 {
                f.write_str(",")?;
            }
            if end == start {
                write!(f, "{}", ranks[start])?;
            } else {
                write!(f, "{}-{}", ranks[start], ranks[end])?;
            }
            start = end + 1;
        }
        Ok(())
    }
}

/// Every card one side can be dealt: its rank pool crossed with all four
/// suits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the deck for a pool. It needs to hold at least a whole hand,
    /// so pools must have two or more ranks.
    pub fn new(pool: &RankPool) -> Result<Self, BlotkarzError> {
        let cards: Vec<Card> = pool
            .values()
            .iter()
            .flat_map(|&value| Suit::suits().map(|suit| Card::new(value, suit)))
            .collect();
        if cards.len() < HAND_SIZE {
            return Err(BlotkarzError::PoolTooSmall {
                available: cards.len(),
                needed: HAND_SIZE,
            });
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Decks are never empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw five distinct cards uniformly at random, without replacement.
    ///
    /// The deck itself isn't touched; every call is an independent draw
    /// from the full deck.
    pub fn deal_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> Hand {
        let picked = index::sample(rng, self.cards.len(), HAND_SIZE);
        let cards: [Card; HAND_SIZE] = std::array::from_fn(|i| self.cards[picked.index(i)]);
        Hand::new_unchecked(cards)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_default_pools() {
        assert_eq!(vec![2, 3, 4, 5, 6, 7, 8, 9, 10], RankPool::blotkarz().ranks());
        assert_eq!(vec![11, 12, 13, 14], RankPool::figurant().ranks());
        assert_eq!(RankPool::blotkarz(), RankPool::from_range(2, 10).unwrap());
        assert_eq!(RankPool::figurant(), RankPool::from_range(11, 14).unwrap());
    }

    #[test]
    fn test_pool_errors() {
        assert_eq!(Err(BlotkarzError::EmptyRankPool), RankPool::new(&[]));
        assert_eq!(Err(BlotkarzError::RankOutOfRange(1)), RankPool::new(&[1, 2]));
        assert_eq!(
            Err(BlotkarzError::InvalidRankRange(10, 2)),
            RankPool::from_range(10, 2)
        );
    }

    #[test]
    fn test_contains() {
        let pool = RankPool::figurant();
        assert!(pool.contains(Value::Ace));
        assert!(!pool.contains(Value::Ten));
        assert_eq!(4, pool.len());
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_parse_ranks() {
        assert_eq!(vec![11, 12, 13, 14], parse_ranks("11-14").unwrap());
        assert_eq!(vec![2, 10, 11], parse_ranks(" 2, T ,J ").unwrap());
        assert_eq!(vec![2, 3, 5, 6], parse_ranks("2-3,5-6").unwrap());
        assert_eq!(Err(BlotkarzError::EmptyRankPool), parse_ranks(""));
        assert_eq!(Err(BlotkarzError::EmptyRankPool), parse_ranks(" , "));
        assert_eq!(Err(BlotkarzError::RankOutOfRange(15)), parse_ranks("10-15"));
        assert_eq!(Err(BlotkarzError::RankOutOfRange(0)), parse_ranks("0"));
        assert_eq!(Err(BlotkarzError::InvalidRankRange(14, 2)), parse_ranks("A-2"));
        assert_eq!(Err(BlotkarzError::UnexpectedValueChar), parse_ranks("X"));
        assert_eq!(Err(BlotkarzError::UnexpectedValueChar), parse_ranks("JQ"));
    }

    #[test]
    fn test_pool_display_round_trips() {
        for s in ["2-10", "11-14", "2,4-6,14", "7"] {
            let pool: RankPool = s.parse().unwrap();
            assert_eq!(s, pool.to_string());
        }
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(36, Deck::new(&RankPool::blotkarz()).unwrap().len());
        assert_eq!(16, Deck::new(&RankPool::figurant()).unwrap().len());
        assert_eq!(
            Err(BlotkarzError::PoolTooSmall {
                available: 4,
                needed: 5
            }),
            Deck::new(&RankPool::new(&[7]).unwrap())
        );
    }

    #[test]
    fn test_deal_stays_in_pool() {
        let pool = RankPool::figurant();
        let deck = Deck::new(&pool).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let hand = deck.deal_hand(&mut rng);
            let unique: HashSet<Card> = hand.iter().copied().collect();
            assert_eq!(HAND_SIZE, unique.len());
            assert!(hand.iter().all(|c| pool.contains(c.value)));
        }
    }

    #[test]
    fn test_deal_smallest_deck() {
        // Two ranks make eight cards; every draw still has to be distinct.
        let deck = Deck::new(&RankPool::new(&[2, 3]).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hand = deck.deal_hand(&mut rng);
            assert!(Hand::new(*hand.cards()).is_ok());
        }
    }

    #[test]
    fn test_deal_covers_deck() {
        let deck = Deck::new(&RankPool::figurant()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(deck.deal_hand(&mut rng).iter().copied());
        }
        assert_eq!(deck.len(), seen.len());
    }

    #[test]
    fn test_seeded_deal_is_repeatable() {
        let deck = Deck::new(&RankPool::blotkarz()).unwrap();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(deck.deal_hand(&mut a), deck.deal_hand(&mut b));
        }
    }
}
