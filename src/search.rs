/// Search strategies for finding a SET in a hand
///
/// Both strategies share the same loop: for each candidate pair of cards,
/// compute the card completing the pair and check whether it is in the hand.
/// They only differ in the pairs they enumerate:
///     - brute force: every pair of the hand, i.e. C(n,2) pairs
///     - partitioned: the hand is split into its first n/2 cards and its
///       remaining cards, and only pairs within each half are checked, i.e.
///       C(n/2,2) + C(n-n/2,2) pairs (about half as many)
///
/// The partitioned strategy misses no SET. A SET has three cards and there
/// are only two halves, so at least two of its cards fall in the same half
/// (pigeonhole). That pair is enumerated, its completing card is the third
/// card of the SET, and that card is in the hand: the SET is found.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::set::{Triple, third_card_unchecked};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    BruteForce,
    Partitioned,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Partitioned, Strategy::BruteForce];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BruteForce => write!(f, "brute force"),
            Strategy::Partitioned => write!(f, "partitioned pair checking"),
        }
    }
}

/// Outcome of one search, with the number of pairs checked before stopping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub triple: Option<Triple>,
    pub pairs_checked: usize,
}

/// Positions (i, j), i < j, of the pairs a strategy checks for a hand of n
/// cards, in the order it checks them.
pub fn candidate_pairs(n: usize, strategy: Strategy) -> impl Iterator<Item = (usize, usize)> {
    let split = match strategy {
        Strategy::BruteForce => n,
        Strategy::Partitioned => n / 2,
    };
    (0..split)
        .tuple_combinations::<(usize, usize)>()
        .chain((split..n).tuple_combinations::<(usize, usize)>())
}

fn pairs_in(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Number of pairs a strategy checks when no SET is found
pub fn pair_count(n: usize, strategy: Strategy) -> usize {
    match strategy {
        Strategy::BruteForce => pairs_in(n),
        Strategy::Partitioned => pairs_in(n / 2) + pairs_in(n - n / 2),
    }
}

/// Search the hand with the given strategy and report how many pairs were
/// checked.
pub fn search_with_stats(hand: &Hand, strategy: Strategy) -> SearchReport {
    let cards = hand.cards();
    let mut pairs_checked = 0;
    for (i, j) in candidate_pairs(cards.len(), strategy) {
        pairs_checked += 1;
        let (a, b) = (&cards[i], &cards[j]);
        // cards of a hand share one shape, no need to check it again
        let c = third_card_unchecked(a, b);
        if c != *a && c != *b && hand.contains(&c) {
            return SearchReport {
                strategy,
                triple: Some((a.clone(), b.clone(), c)),
                pairs_checked,
            };
        }
    }
    SearchReport {
        strategy,
        triple: None,
        pairs_checked,
    }
}

/// Find a SET in the hand, or `None` if there is none
pub fn find_set(hand: &Hand, strategy: Strategy) -> Option<Triple> {
    search_with_stats(hand, strategy).triple
}
