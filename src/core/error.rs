use thiserror::Error;

use super::card::Card;

/// Errors produced while building cards, hands, pools and decks.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BlotkarzError {
    #[error("Rank {0} is outside of 2..=14")]
    RankOutOfRange(u8),
    #[error("Suit label {0} is outside of 1..=4")]
    SuitOutOfRange(u8),
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("A hand holds exactly 5 cards, got {0}")]
    WrongHandSize(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCardInHand(Card),
    #[error("Rank pool is empty")]
    EmptyRankPool,
    #[error("Rank range {0}-{1} is reversed")]
    InvalidRankRange(u8, u8),
    #[error("Deck holds {available} cards but a hand needs {needed}")]
    PoolTooSmall { available: usize, needed: usize },
}
