/// A SET card: one value in {0, 1, 2} for each of its properties.
///
/// With the standard 81-card deck there are 4 properties:
///     - number of shapes: 1 -> 0, 2 -> 1, 3 -> 2
///     - shape: diamond -> 0, wave -> 1, oval -> 2
///     - shading: solid -> 0, striped -> 1, outline -> 2
///     - color: red -> 0, green -> 1, purple -> 2
/// so that "1 red outlined wave" is the card [0 1 2 0].
///
/// A card with p properties also has an index in 0..3^p: property j is the
/// j-th base-3 digit of the index, least significant first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetError};

/// Number of values each property can take. Both the third-card rule and the
/// partitioned search rely on it being exactly 3.
pub const VALUE_COUNT: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Card {
    values: Vec<u8>,
}

impl Card {
    /// Build a card from its property values, rejecting any value >= 3
    pub fn new(values: Vec<u8>) -> Result<Self> {
        if values.is_empty() {
            return Err(SetError::NoProperties);
        }
        if let Some((position, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| **v >= VALUE_COUNT)
        {
            return Err(SetError::InvalidValue { position, value });
        }
        Ok(Self { values })
    }

    /// Values are known to be in range (built by the third-card rule or the
    /// deck enumeration).
    pub(crate) fn from_valid_values(values: Vec<u8>) -> Self {
        debug_assert!(values.iter().all(|v| *v < VALUE_COUNT));
        Self { values }
    }

    /// Convert a card index (0..3^p) to the card with p properties
    pub fn from_index(index: usize, property_count: usize) -> Result<Self> {
        if property_count == 0 {
            return Err(SetError::NoProperties);
        }
        // 3^p above usize::MAX: every usize index fits
        if let Some(size) = (VALUE_COUNT as usize).checked_pow(property_count as u32) {
            if index >= size {
                return Err(SetError::IndexOutOfRange { index, size });
            }
        }
        Ok(Self::from_valid_index(index, property_count))
    }

    /// Index and property count are known to be valid (deck enumeration).
    pub(crate) fn from_valid_index(index: usize, property_count: usize) -> Self {
        let mut rem = index;
        let mut values = Vec::with_capacity(property_count);
        for _ in 0..property_count {
            values.push((rem % VALUE_COUNT as usize) as u8);
            rem /= VALUE_COUNT as usize;
        }
        Self::from_valid_values(values)
    }

    /// Inverse of `from_index`
    pub fn index(&self) -> usize {
        self.values
            .iter()
            .rev()
            .fold(0, |acc, v| acc * VALUE_COUNT as usize + *v as usize)
    }

    pub fn property_count(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn value(&self, property: usize) -> Option<u8> {
        self.values.get(property).copied()
    }
}

impl TryFrom<Vec<u8>> for Card {
    type Error = SetError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Card> for Vec<u8> {
    fn from(card: Card) -> Self {
        card.values
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Accepts either a compact digit string ("0120") or separated values
/// ("0 1 2 0", "0,1,2,0", "[0 1 2 0]").
impl FromStr for Card {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']').trim();
        if trimmed.is_empty() {
            return Err(SetError::Parse(format!("empty card '{}'", s)));
        }
        let separated = trimmed.contains(|c: char| c.is_whitespace() || c == ',');
        let values: std::result::Result<Vec<u8>, _> = if separated {
            trimmed
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|tok| !tok.is_empty())
                .map(|tok| tok.parse::<u8>())
                .collect()
        } else {
            trimmed.chars().map(|c| c.to_string().parse::<u8>()).collect()
        };
        let values = values.map_err(|e| SetError::Parse(format!("'{}': {}", s, e)))?;
        Self::new(values)
    }
}
