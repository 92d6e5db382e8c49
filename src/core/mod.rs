//! Cards, hands, rank pools and the tier evaluator.

/// Card values, suits and the `Card` pair.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Errors for building cards, hands and pools.
mod error;
/// Export `BlotkarzError`
pub use self::error::BlotkarzError;

/// Exactly five distinct cards.
mod hand;
/// Export `Hand`
pub use self::hand::{HAND_SIZE, Hand};

/// The ordered rule table evaluator.
mod rank;
/// Export the tiers and the evaluator.
pub use self::rank::{HandShape, Rankable, Tier, evaluate_hand, tier_of_shape, try_evaluate};

/// Rank pools and the decks dealt from them.
mod pool;
/// Export `RankPool`, `Deck` and rank list parsing.
pub use self::pool::{Deck, RankPool, parse_ranks};

/// Enumerate every hand a deck can make.
mod card_iter;
/// Export `HandIter`
pub use self::card_iter::HandIter;
