use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use voltorb_core::{BoardGenerator, GameConfig, GameModel, RandomBoardGenerator};

const TIERS: &[(&str, (u8, u8), u8)] = &[
    ("classic-1", (5, 5), 1),
    ("classic-8", (5, 5), 8),
    ("wide-4", (8, 16), 4),
    ("huge-10", (64, 64), 10),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(name, size, difficulty) in TIERS {
        let config = GameConfig::new(size, difficulty).expect("bench tier should be valid");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomBoardGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_new_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_game");
    for &(name, size, difficulty) in TIERS {
        let config = GameConfig::new(size, difficulty).expect("bench tier should be valid");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(GameModel::with_seed(config, seed))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_new_game);
criterion_main!(benches);
