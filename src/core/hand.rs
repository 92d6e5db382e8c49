use std::fmt;
use std::str::FromStr;

use super::card::{Card, Suit, Value};
use super::error::BlotkarzError;

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Five distinct cards.
///
/// A `Hand` can only be built from exactly five cards with no duplicate
/// `(value, suit)` pair, so everything downstream can rely on that shape.
/// Card order is kept as given but never matters for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from exactly five cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::{Card, Hand, Suit, Value};
    ///
    /// let cards = [
    ///     Card::new(Value::Two, Suit::Spade),
    ///     Card::new(Value::Three, Suit::Spade),
    ///     Card::new(Value::Four, Suit::Spade),
    ///     Card::new(Value::Five, Suit::Spade),
    ///     Card::new(Value::Six, Suit::Spade),
    /// ];
    /// assert!(Hand::new(cards).is_ok());
    ///
    /// let mut dupe = cards;
    /// dupe[4] = dupe[0];
    /// assert!(Hand::new(dupe).is_err());
    /// ```
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, BlotkarzError> {
        for (i, c) in cards.iter().enumerate() {
            if cards[i + 1..].contains(c) {
                return Err(BlotkarzError::DuplicateCardInHand(*c));
            }
        }
        Ok(Self { cards })
    }

    /// Wrap five cards already known to be distinct, such as a draw
    /// of distinct positions from a deck without duplicates.
    pub(crate) fn new_unchecked(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(Self::new(cards).is_ok(), "duplicate card in {cards:?}");
        Self { cards }
    }

    /// Create a hand from a slice, failing if it isn't exactly five
    /// distinct cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, BlotkarzError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| BlotkarzError::WrongHandSize(cards.len()))?;
        Self::new(cards)
    }

    /// Build a hand from numeric `(rank, suit)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::Hand;
    ///
    /// let hand = Hand::from_numbers(&[(5, 1), (5, 2), (5, 3), (5, 4), (9, 1)]).unwrap();
    /// assert_eq!("5s5h5d5c9s", hand.to_string());
    /// ```
    pub fn from_numbers(pairs: &[(u8, u8)]) -> Result<Self, BlotkarzError> {
        let cards = pairs
            .iter()
            .map(|&(rank, suit)| Card::from_numbers(rank, suit))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&cards)
    }

    /// Parse a hand from a string of five two character cards.
    ///
    /// Each card is a value char (`2`-`9`, `T`, `J`, `Q`, `K`, `A`)
    /// followed by a suit char (`s`, `h`, `d`, `c`).
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::Hand;
    ///
    /// let hand = Hand::new_from_str("2s3h4d5c7s").unwrap();
    /// assert_eq!(5, hand.cards().len());
    /// assert!(Hand::new_from_str("2s3h4d5c").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, BlotkarzError> {
        let mut chars = hand_string.chars();
        let mut cards: Vec<Card> = Vec::with_capacity(HAND_SIZE);

        // Keep looping until we explicitly break
        loop {
            // Now try and get a char.
            let vco = chars.next();
            // If there was no char then we are done.
            if vco.is_none() {
                break;
            } else {
                // If we got a value char then we need to find the suit.
                let sco = chars.next();
                let v = vco
                    .and_then(Value::from_char)
                    .ok_or(BlotkarzError::UnexpectedValueChar)?;
                let s = sco
                    .and_then(Suit::from_char)
                    .ok_or(BlotkarzError::UnexpectedSuitChar)?;

                if cards.len() == HAND_SIZE {
                    return Err(BlotkarzError::UnparsedCharsRemaining);
                }
                cards.push(Card::new(v, s));
            }
        }

        Self::from_slice(&cards)
    }

    /// The five cards, in the order they were given.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromStr for Hand {
    type Err = BlotkarzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = BlotkarzError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
