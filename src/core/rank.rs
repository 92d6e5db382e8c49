use std::fmt;

use super::card::{Card, Suit, Value};
use super::error::BlotkarzError;
use super::hand::{HAND_SIZE, Hand};

/// All the different strength tiers a hand can land in.
///
/// The discriminant is the numeric tier, 0 for the weakest through 8 for
/// the strongest, and the derived ordering follows it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
#[repr(u8)]
pub enum Tier {
    /// The lowest tier.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPairs = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit that are not in a sequence
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    Quads = 7,
    /// Five cards in a sequence all for the same suit.
    Poker = 8,
}

impl Tier {
    /// Every tier, weakest first.
    pub const ALL: [Tier; 9] = [
        Tier::HighCard,
        Tier::Pair,
        Tier::TwoPairs,
        Tier::ThreeOfAKind,
        Tier::Straight,
        Tier::Flush,
        Tier::FullHouse,
        Tier::Quads,
        Tier::Poker,
    ];

    /// The numeric strength, 0 through 8.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Turn a numeric strength back into a `Tier`.
    pub fn from_u8(tier: u8) -> Option<Self> {
        Self::ALL.get(tier as usize).copied()
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Tier::HighCard => "High card",
            Tier::Pair => "Pair",
            Tier::TwoPairs => "Two pairs",
            Tier::ThreeOfAKind => "Three of a kind",
            Tier::Straight => "Straight",
            Tier::Flush => "Flush",
            Tier::FullHouse => "Full house",
            Tier::Quads => "Quads",
            Tier::Poker => "Poker",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frequency tables for a five card hand.
///
/// Built once per hand so that every rule in `RULES` reads the same counts
/// instead of recounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandShape {
    /// rank => how many cards carry it. Indexed by the raw rank so slots 0
    /// and 1 stay empty.
    value_to_count: [u8; 15],
    /// suit label => how many cards carry it. Slot 0 stays empty.
    suit_to_count: [u8; 5],
    /// frequency => how many distinct ranks have exactly that frequency.
    count_to_values: [u8; HAND_SIZE + 1],
    /// frequency => how many distinct suits have exactly that frequency.
    count_to_suits: [u8; HAND_SIZE + 1],
    /// Number of distinct ranks.
    unique_values: u8,
    /// Lowest rank present.
    low: Value,
    /// Highest rank present.
    high: Value,
}

impl HandShape {
    /// Count ranks and suits of exactly five cards.
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut value_to_count = [0u8; 15];
        let mut suit_to_count = [0u8; 5];
        let mut low = Value::Ace;
        let mut high = Value::Two;

        for c in cards {
            value_to_count[c.value.rank() as usize] += 1;
            suit_to_count[c.suit.label() as usize] += 1;
            low = low.min(c.value);
            high = high.max(c.value);
        }

        // Now rotate the value to count map.
        let mut count_to_values = [0u8; HAND_SIZE + 1];
        let mut unique_values = 0;
        for &count in value_to_count.iter().filter(|&&c| c > 0) {
            count_to_values[count as usize] += 1;
            unique_values += 1;
        }
        let mut count_to_suits = [0u8; HAND_SIZE + 1];
        for &count in suit_to_count.iter().filter(|&&c| c > 0) {
            count_to_suits[count as usize] += 1;
        }

        Self {
            value_to_count,
            suit_to_count,
            count_to_values,
            count_to_suits,
            unique_values,
            low,
            high,
        }
    }

    /// How many distinct ranks appear exactly `num` times.
    pub fn count_values(&self, num: usize) -> u8 {
        self.count_to_values.get(num).copied().unwrap_or(0)
    }

    /// How many distinct suits appear exactly `num` times.
    pub fn count_suits(&self, num: usize) -> u8 {
        self.count_to_suits.get(num).copied().unwrap_or(0)
    }

    /// How many cards carry the given rank.
    pub fn value_count(&self, value: Value) -> u8 {
        self.value_to_count[value.rank() as usize]
    }

    /// How many cards carry the given suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_to_count[suit.label() as usize]
    }

    /// Are the ranks five distinct consecutive integers?
    ///
    /// There's no wheel: the Ace is 14 and only ever ends a run at 10-A.
    pub fn is_run(&self) -> bool {
        // Five distinct ranks spanning exactly four steps can only be
        // low, low + 1, .., low + 4.
        self.unique_values as usize == HAND_SIZE && self.high.rank() - self.low.rank() == 4
    }

    /// Do all five cards share one suit?
    pub fn is_single_suit(&self) -> bool {
        self.count_suits(HAND_SIZE) == 1
    }

    /// Highest rank present.
    pub fn high_card(&self) -> Value {
        self.high
    }
}

fn is_poker(shape: &HandShape) -> bool {
    shape.is_run() && shape.is_single_suit()
}

fn is_quads(shape: &HandShape) -> bool {
    shape.count_values(4) == 1
}

fn is_full_house(shape: &HandShape) -> bool {
    is_pair(shape) && is_three_of_a_kind(shape)
}

fn is_flush(shape: &HandShape) -> bool {
    shape.is_single_suit() && !shape.is_run()
}

fn is_straight(shape: &HandShape) -> bool {
    shape.is_run()
}

fn is_three_of_a_kind(shape: &HandShape) -> bool {
    shape.count_values(3) == 1
}

fn is_two_pairs(shape: &HandShape) -> bool {
    shape.count_values(2) == 2
}

fn is_pair(shape: &HandShape) -> bool {
    shape.count_values(2) == 1
}

/// Predicate over a hand shape.
type Rule = fn(&HandShape) -> bool;

/// The rule table, strongest first. The first rule that matches decides the
/// tier, so a hand that also satisfies weaker rules is still scored at its
/// best.
const RULES: [(Tier, Rule); 8] = [
    (Tier::Poker, is_poker),
    (Tier::Quads, is_quads),
    (Tier::FullHouse, is_full_house),
    (Tier::Flush, is_flush),
    (Tier::Straight, is_straight),
    (Tier::ThreeOfAKind, is_three_of_a_kind),
    (Tier::TwoPairs, is_two_pairs),
    (Tier::Pair, is_pair),
];

/// Walk `RULES` top down against a precomputed shape.
pub fn tier_of_shape(shape: &HandShape) -> Tier {
    RULES
        .iter()
        .find(|(_, rule)| rule(shape))
        .map(|(tier, _)| *tier)
        .unwrap_or(Tier::HighCard)
}

/// Classify a hand into its strength tier.
///
/// # Examples
///
/// ```
/// use blotkarz::core::{Hand, Tier, evaluate_hand};
///
/// let hand = Hand::new_from_str("5s5h5d9c9s").unwrap();
/// assert_eq!(Tier::FullHouse, evaluate_hand(&hand));
/// ```
pub fn evaluate_hand(hand: &Hand) -> Tier {
    tier_of_shape(&HandShape::new(hand.cards()))
}

/// Can this be scored? There are implementations for `Hand` and
/// `[Card; 5]`.
pub trait Rankable {
    /// The five cards that get scored.
    fn five_cards(&self) -> &[Card; HAND_SIZE];

    /// Count the cards. This will not cache the value.
    fn shape(&self) -> HandShape {
        HandShape::new(self.five_cards())
    }

    /// Score the current five card hand.
    /// It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more
    /// than once.
    fn tier(&self) -> Tier {
        tier_of_shape(&self.shape())
    }

    /// The highest rank in the hand.
    fn high_card(&self) -> Value {
        self.shape().high_card()
    }
}

impl Rankable for Hand {
    fn five_cards(&self) -> &[Card; HAND_SIZE] {
        self.cards()
    }
}

/// Raw arrays skip the duplicate check that `Hand::new` does. Callers are
/// responsible for handing over five distinct cards.
impl Rankable for [Card; HAND_SIZE] {
    fn five_cards(&self) -> &[Card; HAND_SIZE] {
        debug_assert!(
            Hand::new(*self).is_ok(),
            "duplicate card in {:?}",
            self
        );
        self
    }
}

/// Score an arbitrary slice, checking that it is a well formed hand first.
pub fn try_evaluate(cards: &[Card]) -> Result<Tier, BlotkarzError> {
    Hand::from_slice(cards).map(|h| evaluate_hand(&h))
}
