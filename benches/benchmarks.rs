criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_hand,
        searching_best_five,
        sampling_preflop_equity,
        synthesizing_strategy,
}

fn random_hand(n: usize) -> Hand {
    let mut rng = SmallRng::from_os_rng();
    Deck::new().deal(n, &mut rng)
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = random_hand(7);
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn searching_best_five(c: &mut criterion::Criterion) {
    c.bench_function("search the best 5-card subset of 7", |b| {
        let hand = random_hand(7);
        b.iter(|| Strength::from(hand))
    });
}

fn sampling_preflop_equity(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1,000 preflop equity trials", |b| {
        let hole = random_hand(2);
        b.iter(|| Simulator::new(hole, Hand::empty(), Some(42)).simulate(1_000))
    });
}

fn synthesizing_strategy(c: &mut criterion::Criterion) {
    c.bench_function("synthesize a strategy from a strength", |b| {
        b.iter(|| Synthesizer::from((0.62, GameContext::default(), Street::Flop)).synthesize())
    });
}

use railbird::cards::deck::Deck;
use railbird::cards::hand::Hand;
use railbird::cards::street::Street;
use railbird::equity::simulator::Simulator;
use railbird::evaluation::evaluator::Evaluator;
use railbird::evaluation::strength::Strength;
use railbird::strategy::context::GameContext;
use railbird::strategy::synthesizer::Synthesizer;
use rand::rngs::SmallRng;
use rand::SeedableRng;
