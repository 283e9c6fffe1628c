/// The deck: every possible card for a given number of properties.
///
/// A deck with p properties holds 3^p cards. The cards are not materialized:
/// card i of the deck is `Card::from_index(i, p)`, so that decks with many
/// properties stay cheap to build and hands are dealt by sampling indexes.

use std::fmt;

use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, VALUE_COUNT};
use crate::error::{Result, SetError};
use crate::hand::Hand;

/// Number of cards dealt when no hand size is given
pub const DEFAULT_HAND_SIZE: usize = 12;

/// Number of properties of the standard deck
pub const DEFAULT_PROPERTY_COUNT: usize = 4;

/// Largest supported property count (3^16 cards)
pub const MAX_PROPERTY_COUNT: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    property_count: usize,
    size: usize,
}

impl Deck {
    pub fn new(property_count: usize) -> Result<Self> {
        if property_count == 0 || property_count > MAX_PROPERTY_COUNT {
            return Err(SetError::InvalidPropertyCount {
                count: property_count,
                max: MAX_PROPERTY_COUNT,
            });
        }
        Ok(Self::with_property_count(property_count))
    }

    /// Property count is known to be in 1..=MAX_PROPERTY_COUNT.
    fn with_property_count(property_count: usize) -> Self {
        Self {
            property_count,
            size: (VALUE_COUNT as usize).pow(property_count as u32),
        }
    }

    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Number of cards in the deck, i.e. 3^p
    pub fn size(&self) -> usize {
        self.size
    }

    /// All the cards of the deck, in index order
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..self.size).map(|i| Card::from_valid_index(i, self.property_count))
    }

    /// Pick n distinct cards uniformly at random and make a hand of them
    pub fn deal<R: rand::Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Hand> {
        if n > self.size {
            return Err(SetError::NotEnoughCards {
                requested: n,
                available: self.size,
            });
        }
        let picked = index::sample(rng, self.size, n);
        Hand::new(
            picked
                .into_iter()
                .map(|i| Card::from_valid_index(i, self.property_count)),
        )
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_property_count(DEFAULT_PROPERTY_COUNT)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deck with {} cards, {} values, and {} properties",
            self.size, VALUE_COUNT, self.property_count
        )
    }
}

/// Random generator for dealing: reproducible when a seed is given
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
