/// The SET rule itself
///
/// Three cards form a SET when, for each property, their values are either
/// all identical or all different. With 3 values per property this is the
/// same as saying that the values of each property sum to 0 modulo 3, which
/// gives a closed form for the card completing any pair.

use crate::card::{Card, VALUE_COUNT};
use crate::error::{Result, SetError};

/// Three cards forming a SET, in the order they were found
pub type Triple = (Card, Card, Card);

fn check_shape(a: &Card, b: &Card) -> Result<()> {
    if a.property_count() != b.property_count() {
        return Err(SetError::ShapeMismatch {
            left: a.property_count(),
            right: b.property_count(),
        });
    }
    Ok(())
}

/// Value completing two values of one property: the same value if they are
/// equal, the remaining one of {0, 1, 2} otherwise.
#[inline]
fn third_value(x: u8, y: u8) -> u8 {
    (VALUE_COUNT - (x + y) % VALUE_COUNT) % VALUE_COUNT
}

/// Shapes are already known to match.
pub(crate) fn third_card_unchecked(a: &Card, b: &Card) -> Card {
    let values = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(x, y)| third_value(*x, *y))
        .collect();
    Card::from_valid_values(values)
}

/// Given two cards, compute the unique third card needed to form a SET.
///
/// Completing two equal cards gives the same card back, which never forms a
/// SET of three distinct cards: callers searching a hand must check for it.
pub fn third_card(a: &Card, b: &Card) -> Result<Card> {
    check_shape(a, b)?;
    Ok(third_card_unchecked(a, b))
}

/// Check whether three cards form a SET
pub fn is_set(a: &Card, b: &Card, c: &Card) -> Result<bool> {
    check_shape(a, b)?;
    check_shape(a, c)?;
    let valid = (0..a.property_count()).all(|p| {
        let sum: u8 = [a, b, c].iter().map(|card| card.values()[p]).sum();
        sum % VALUE_COUNT == 0
    });
    Ok(valid)
}

/// Go through all triplets of cards and return the first one forming a SET.
/// O(n^3): only meant as a reference to check the searches against.
pub fn contains_set_exhaustive(cards: &[Card]) -> Result<Option<Triple>> {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_set(&cards[i], &cards[j], &cards[k])? {
                    return Ok(Some((
                        cards[i].clone(),
                        cards[j].clone(),
                        cards[k].clone(),
                    )));
                }
            }
        }
    }
    Ok(None)
}
