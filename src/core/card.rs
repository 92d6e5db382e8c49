use std::fmt;

use super::error::BlotkarzError;

/// Card rank.
///
/// The discriminant is the numeric rank used everywhere else: two through ten
/// are their face numbers, then Jack (11), Queen (12), King (13) and Ace
/// (14). The Ace is always high.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Lowest rank a card can carry.
    pub const MIN_RANK: u8 = 2;
    /// Highest rank a card can carry.
    pub const MAX_RANK: u8 = 14;

    /// Take a numeric rank and turn it into a `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::Value;
    ///
    /// assert_eq!(Value::Jack, Value::from_rank(11).unwrap());
    /// assert!(Value::from_rank(15).is_err());
    /// ```
    pub fn from_rank(rank: u8) -> Result<Self, BlotkarzError> {
        if (Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            Ok(VALUES[(rank - Self::MIN_RANK) as usize])
        } else {
            Err(BlotkarzError::RankOutOfRange(rank))
        }
    }

    /// The numeric rank, 2 through 14.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Get all of the `Value`'s that are possible, lowest first.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range (It should
    /// be).
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::from_char('A').unwrap());
    /// assert_eq!(Value::Ten, Value::from_char('t').unwrap());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Suit label.
///
/// Suits carry no ordering in this game; they are only ever compared for
/// equality and counted. The discriminant is the label 1 through 4.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades, label 1
    Spade = 1,
    /// Hearts, label 2
    Heart = 2,
    /// Diamonds, label 3
    Diamond = 3,
    /// Clubs, label 4
    Club = 4,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Take a label 1..=4 and turn it into a `Suit`.
    pub fn from_label(label: u8) -> Result<Self, BlotkarzError> {
        match label {
            1 => Ok(Self::Spade),
            2 => Ok(Self::Heart),
            3 => Ok(Self::Diamond),
            4 => Ok(Self::Club),
            _ => Err(BlotkarzError::SuitOutOfRange(label)),
        }
    }

    /// The numeric label, 1 through 4.
    pub fn label(self) -> u8 {
        self as u8
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Diamond => 'd',
            Self::Club => 'c',
        }
    }

    /// Given a character that represents a suit try and parse that char.
    /// If the char can represent a suit return it.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'd' => Some(Self::Diamond),
            'c' => Some(Self::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from the numeric `(rank, suit)` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotkarz::core::{Card, Suit, Value};
    ///
    /// let c = Card::from_numbers(14, 1).unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), c);
    /// ```
    pub fn from_numbers(rank: u8, suit: u8) -> Result<Self, BlotkarzError> {
        Ok(Self {
            value: Value::from_rank(rank)?,
            suit: Suit::from_label(suit)?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_ranks_round_trip_through_values() {
        for v in Value::values() {
            assert_eq!(v, Value::from_rank(v.rank()).unwrap());
        }
        assert_eq!(14, Value::Ace.rank());
        assert_eq!(2, Value::Two.rank());
    }

    #[test]
    fn test_rank_out_of_range() {
        assert_eq!(
            Err(BlotkarzError::RankOutOfRange(1)),
            Value::from_rank(1)
        );
        assert_eq!(
            Err(BlotkarzError::RankOutOfRange(15)),
            Value::from_rank(15)
        );
    }

    #[test]
    fn test_suit_labels() {
        let labels: Vec<u8> = Suit::suits().iter().map(|s| s.label()).collect();
        assert_eq!(vec![1, 2, 3, 4], labels);
        assert_eq!(
            Err(BlotkarzError::SuitOutOfRange(0)),
            Suit::from_label(0)
        );
        assert_eq!(
            Err(BlotkarzError::SuitOutOfRange(5)),
            Suit::from_label(5)
        );
    }

    #[test]
    fn test_chars() {
        assert_eq!(Some(Value::Queen), Value::from_char('q'));
        assert_eq!(None, Value::from_char('1'));
        assert_eq!(Some(Suit::Club), Suit::from_char('C'));
        assert_eq!(None, Suit::from_char('x'));
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("Td", Card::from_numbers(10, 3).unwrap().to_string());
        assert_eq!("As", Card::from_numbers(14, 1).unwrap().to_string());
    }
}
