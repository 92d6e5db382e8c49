use super::card::Card;
use super::hand::{HAND_SIZE, Hand};
use super::pool::Deck;

/// Walks every five card hand that can be made from a set of distinct
/// cards, in lexicographic order of positions.
#[derive(Debug)]
pub struct HandIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Set of current offsets being used to create hands.
    idx: [usize; HAND_SIZE],

    /// Set once the last combination has been handed out.
    done: bool,
}

impl HandIter<'_> {
    /// Create a new `HandIter` from a slice of distinct cards.
    pub fn new(possible_cards: &[Card]) -> HandIter<'_> {
        let mut idx: [usize; HAND_SIZE] = std::array::from_fn(|i| i);
        // Step the last index back one so the first call to `next` lands
        // on the first combination.
        idx[HAND_SIZE - 1] -= 1;
        HandIter {
            possible_cards,
            idx,
            done: possible_cards.len() < HAND_SIZE,
        }
    }
}

impl Iterator for HandIter<'_> {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        if self.done {
            return None;
        }
        // Keep track of where we are mutating
        let mut current_level: usize = HAND_SIZE - 1;

        while current_level < HAND_SIZE {
            // Move the current level forward one.
            self.idx[current_level] += 1;

            // Now check if moving this level forward means that
            // We will need more cards to fill out the rest of the hand
            // then are there.
            let cards_needed_after = HAND_SIZE - (current_level + 1);
            if self.idx[current_level] + cards_needed_after >= self.possible_cards.len() {
                if current_level == 0 {
                    self.done = true;
                    return None;
                }
                current_level -= 1;
            } else {
                // If we aren't at the end then
                if current_level < HAND_SIZE - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                // Move forward one level
                current_level += 1;
            }
        }

        let cards = self.idx.map(|i| self.possible_cards[i]);
        Some(Hand::new_unchecked(cards))
    }
}

/// This is useful for trying every possible hand a side can be dealt.
impl<'a> IntoIterator for &'a Deck {
    type Item = Hand;
    type IntoIter = HandIter<'a>;

    fn into_iter(self) -> HandIter<'a> {
        HandIter::new(self.cards())
    }
}
