//! Search tests on the standard 81-card deck.
//!
//! Card values are [number, shape, shading, color]:
//! - number of shapes: 1 -> 0, 2 -> 1, 3 -> 2
//! - shape: diamond -> 0, wave -> 1, oval -> 2
//! - shading: solid -> 0, striped -> 1, outline -> 2
//! - color: red -> 0, green -> 1, purple -> 2

use proptest::prelude::*;

use set_finder::deck::seeded_rng;
use set_finder::set::contains_set_exhaustive;
use set_finder::{Card, Deck, Hand, Triple, is_set, third_card};

fn card(values: &[u8]) -> Card {
    Card::new(values.to_vec()).expect("valid card")
}

/// A found triple must be a SET of three distinct cards of the hand.
fn assert_valid(hand: &Hand, triple: &Triple) {
    let (a, b, c) = triple;
    assert!(is_set(a, b, c).unwrap(), "not a SET: {} {} {}", a, b, c);
    assert!(a != b && b != c && a != c);
    assert!(hand.contains(a) && hand.contains(b) && hand.contains(c));
}

#[test]
fn test_valid_set_outlined_cards() {
    let hand = Hand::new(vec![
        card(&[0, 1, 2, 0]), // 1 red outlined wave
        card(&[1, 2, 2, 1]), // 2 green outlined ovals
        card(&[2, 0, 2, 2]), // 3 purple outlined diamonds
    ])
    .unwrap();
    assert_valid(&hand, &hand.find_set().expect("partitioned finds the SET"));
    assert_valid(&hand, &hand.find_set_brute_force().expect("brute force finds the SET"));
}

#[test]
fn test_valid_set_green_cards() {
    let hand = Hand::new(vec![
        card(&[0, 0, 1, 1]), // 1 green striped diamond
        card(&[1, 2, 2, 1]), // 2 green outlined ovals
        card(&[2, 1, 0, 1]), // 3 green solid waves
    ])
    .unwrap();
    assert_valid(&hand, &hand.find_set().unwrap());
    assert_valid(&hand, &hand.find_set_brute_force().unwrap());
}

#[test]
fn test_invalid_set_three_cards() {
    let c1 = card(&[0, 0, 1, 0]); // 1 red striped diamond
    let c2 = card(&[0, 2, 2, 1]); // 1 green outlined oval
    let c3 = card(&[0, 0, 0, 2]); // 1 purple solid diamond
    assert!(!is_set(&c1, &c2, &c3).unwrap());
    let hand = Hand::new(vec![c1, c2, c3]).unwrap();
    assert_eq!(hand.find_set(), None);
    assert_eq!(hand.find_set_brute_force(), None);
}

#[test]
fn test_two_cards_cannot_form_a_set() {
    let hand = Hand::new(vec![card(&[0, 0, 1, 0]), card(&[0, 2, 2, 1])]).unwrap();
    assert_eq!(hand.find_set(), None);
    assert_eq!(hand.find_set_brute_force(), None);
}

#[test]
fn test_1000_dealt_hands_agree() {
    let deck = Deck::default();
    let mut rng = seeded_rng(Some(2024));
    for _ in 0..1000 {
        let hand = deck.deal(12, &mut rng).unwrap();
        let set1 = hand.find_set();
        let set2 = hand.find_set_brute_force();
        assert_eq!(set1.is_some(), set2.is_some(), "strategies disagree on {}", hand);
        if let (Some(t1), Some(t2)) = (&set1, &set2) {
            assert_valid(&hand, t1);
            assert_valid(&hand, t2);
        }
    }
}

#[test]
fn test_full_deck_always_has_a_set() {
    let deck = Deck::default();
    let hand = Hand::new(deck.cards()).unwrap();
    assert_eq!(hand.len(), 81);
    assert_valid(&hand, &hand.find_set().unwrap());
    assert_valid(&hand, &hand.find_set_brute_force().unwrap());
}

#[test]
fn test_binary_cards_have_no_set() {
    // Cards using only values 0 and 1: a property can never be all different,
    // and three distinct cards cannot be all same on every property
    let cards: Vec<Card> = (0..16u8)
        .map(|i| card(&[i & 1, (i >> 1) & 1, (i >> 2) & 1, (i >> 3) & 1]))
        .collect();
    let hand = Hand::new(cards).unwrap();
    assert_eq!(hand.find_set(), None);
    assert_eq!(hand.find_set_brute_force(), None);
}

fn hand_strategy() -> impl Strategy<Value = Hand> {
    prop::collection::vec(0usize..81, 0..24)
        .prop_map(|indexes| {
            Hand::new(indexes.into_iter().map(|i| Card::from_index(i, 4).unwrap())).unwrap()
        })
}

proptest! {
    #[test]
    fn prop_brute_force_is_complete(hand in hand_strategy()) {
        let truth = contains_set_exhaustive(hand.cards()).unwrap();
        let found = hand.find_set_brute_force();
        prop_assert_eq!(truth.is_some(), found.is_some());
        if let Some(t) = &found {
            assert_valid(&hand, t);
        }
    }

    #[test]
    fn prop_partitioned_matches_brute_force(hand in hand_strategy()) {
        let part = hand.find_set();
        prop_assert_eq!(part.is_some(), hand.find_set_brute_force().is_some());
        if let Some(t) = &part {
            assert_valid(&hand, t);
        }
        prop_assert_eq!(part, hand.find_set());
    }

    #[test]
    fn prop_third_card_symmetric(i in 0usize..243, j in 0usize..243) {
        prop_assume!(i != j);
        let a = Card::from_index(i, 5).unwrap();
        let b = Card::from_index(j, 5).unwrap();
        let c = third_card(&a, &b).unwrap();
        prop_assert_eq!(&c, &third_card(&b, &a).unwrap());
        prop_assert_eq!(third_card(&a, &c).unwrap(), b);
    }
}
