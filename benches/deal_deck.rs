#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use criterion::{BenchmarkId, Criterion};
use holdem_odds::core::{Card, FlatDeck};
use rand::{SeedableRng, rngs::StdRng};

fn sample_from_full_deck(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let deck = FlatDeck::full();
    let mut group = c.benchmark_group("Sample FlatDeck");

    for n in [2, 7, 52].iter() {
        group.bench_with_input(BenchmarkId::new("cards", n), n, |b, n| {
            b.iter(|| deck.sample_with(*n, &mut rng))
        });
    }
    group.finish();
}

fn remove_hole_cards(c: &mut Criterion) {
    let hole = [Card::try_from("As").unwrap(), Card::try_from("Kh").unwrap()];
    c.bench_function("Remove two cards from FlatDeck", move |b| {
        b.iter(|| FlatDeck::full().without(&hole))
    });
}

criterion_group!(benches, sample_from_full_deck, remove_hole_cards);
criterion_main!(benches);
