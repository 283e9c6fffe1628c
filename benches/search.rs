use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use set_finder::deck::seeded_rng;
use set_finder::{Deck, Strategy, find_set};

fn criterion_benchmark(c: &mut Criterion) {
    let deck = Deck::default();
    let mut rng = seeded_rng(Some(81));
    let hand_12 = deck.deal(12, &mut rng).unwrap();
    let hand_40 = deck.deal(40, &mut rng).unwrap();
    let wide = Deck::new(12).unwrap().deal(12, &mut rng).unwrap();

    c.bench_function("Partitioned (12 cards)", |b| {
        b.iter(|| find_set(black_box(&hand_12), Strategy::Partitioned))
    });
    c.bench_function("Brute force (12 cards)", |b| {
        b.iter(|| find_set(black_box(&hand_12), Strategy::BruteForce))
    });
    c.bench_function("Partitioned (40 cards)", |b| {
        b.iter(|| find_set(black_box(&hand_40), Strategy::Partitioned))
    });
    c.bench_function("Brute force (40 cards)", |b| {
        b.iter(|| find_set(black_box(&hand_40), Strategy::BruteForce))
    });
    c.bench_function("Partitioned (12 cards, 12 properties)", |b| {
        b.iter(|| find_set(black_box(&wide), Strategy::Partitioned))
    });
    c.bench_function("Brute force (12 cards, 12 properties)", |b| {
        b.iter(|| find_set(black_box(&wide), Strategy::BruteForce))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
