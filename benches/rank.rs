#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use criterion::Criterion;
use holdem_odds::core::{FlatDeck, Rankable};

fn rank_one(c: &mut Criterion) {
    let hand = FlatDeck::full().sample(5).unwrap();
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| hand.rank()));
}

fn rank_best_seven(c: &mut Criterion) {
    let hand = FlatDeck::full().sample(7).unwrap();
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

criterion_group!(benches, rank_one, rank_best_seven);
criterion_main!(benches);
