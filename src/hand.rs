/// A hand: the cards dealt on the table, among which SETs are searched.
///
/// The cards are kept twice:
///     - in a vector, in first-occurrence order, which is the stable order
///       the searches enumerate pairs in
///     - in a hash set, so that the presence of a completing card can be
///       checked in O(1)

use std::fmt;

use rustc_hash::FxHashSet;

use crate::card::Card;
use crate::error::{Result, SetError};
use crate::search::{Strategy, find_set};
use crate::set::Triple;

#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
    index: FxHashSet<Card>,
}

impl Hand {
    /// Build a hand from any collection of cards, dropping duplicates.
    /// All cards must have the same number of properties.
    pub fn new<I>(cards: I) -> Result<Self>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut hand = Self::default();
        for card in cards {
            if let Some(first) = hand.cards.first() {
                if first.property_count() != card.property_count() {
                    return Err(SetError::ShapeMismatch {
                        left: first.property_count(),
                        right: card.property_count(),
                    });
                }
            }
            if hand.index.insert(card.clone()) {
                hand.cards.push(card);
            }
        }
        Ok(hand)
    }

    /// Number of distinct cards in the hand
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Property count shared by all cards, `None` for an empty hand
    pub fn property_count(&self) -> Option<usize> {
        self.cards.first().map(Card::property_count)
    }

    /// The cards in the hand's fixed iteration order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.index.contains(card)
    }

    /// Determine whether the given card is in the hand or not
    pub fn find_card(&self, card: &Card) -> bool {
        self.contains(card)
    }

    /// Find a SET with the partitioned pair checking strategy
    pub fn find_set(&self) -> Option<Triple> {
        find_set(self, Strategy::Partitioned)
    }

    /// Find a SET by checking every pair of cards of the hand
    pub fn find_set_brute_force(&self) -> Option<Triple> {
        find_set(self, Strategy::BruteForce)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand of {} cards: {{", self.cards.len())?;
        for card in &self.cards {
            writeln!(f, "    {}", card)?;
        }
        write!(f, "}}")
    }
}
