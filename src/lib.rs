//! Find SETs in a hand of cards of the (generalized) game of SET
//!
//! A SET is a triple of cards where each property is either the same on all
//! three cards or different on all three. Two strategies are provided: brute
//! force over all pairs of the hand, and partitioned pair checking which only
//! pairs cards from the same half of the hand and still finds every SET.
//!
//! ```
//! use set_finder::{Card, Hand};
//!
//! let hand = Hand::new(vec![
//!     "0120".parse::<Card>().unwrap(),
//!     "1221".parse::<Card>().unwrap(),
//!     "2022".parse::<Card>().unwrap(),
//! ]).unwrap();
//! assert!(hand.find_set().is_some());
//! assert!(hand.find_set_brute_force().is_some());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod io_helpers;
pub mod search;
pub mod set;
pub mod timing;
pub mod utils;

pub use card::{Card, VALUE_COUNT};
pub use deck::Deck;
pub use error::{Result, SetError};
pub use hand::Hand;
pub use search::{SearchReport, Strategy, find_set, search_with_stats};
pub use set::{Triple, is_set, third_card};
