#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use criterion::Criterion;
use holdem_odds::core::FlatDeck;
use holdem_odds::holdem::{StartingHand, run_trial, simulate_holding};
use rand::{SeedableRng, rngs::StdRng};

fn all_starting(c: &mut Criterion) {
    c.bench_function("Generate all starting hands", |b| b.iter(StartingHand::all));
}

fn one_trial(c: &mut Criterion) {
    let hand: StartingHand = "AKs".parse().unwrap();
    let hole = hand.cards();
    let remaining = FlatDeck::full().without(&hole).unwrap();
    let mut rng = StdRng::seed_from_u64(420);

    c.bench_function("Play one AKs trial", move |b| {
        b.iter(|| run_trial(&remaining, hole, &mut rng))
    });
}

fn one_category(c: &mut Criterion) {
    let hand: StartingHand = "72o".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(420);

    c.bench_function("Simulate 1000 hands of 72o", move |b| {
        b.iter(|| simulate_holding(&hand, 1_000, &mut rng))
    });
}

criterion_group!(benches, all_starting, one_trial, one_category);
criterion_main!(benches);
