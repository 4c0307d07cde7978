//! Compares the mapping, ranking and summary strategies on a demo-sized sample.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numeral_core::core::ranking::top_n_with;
use numeral_core::core::summary::summarize_with;
use numeral_core::{
    map_all, sample, EngineConfig, LabelCache, MapStrategy, RankStrategy, SummaryStrategy,
};

const SAMPLE_LEN: usize = 200_000;
const SEED: u64 = 42;

fn bench_map_all(c: &mut Criterion) {
    let source = sample::generate_seeded(SAMPLE_LEN, SEED);
    let cache = LabelCache::full_domain();
    let config = EngineConfig::default();

    let mut group = c.benchmark_group("map_all");
    group.throughput(Throughput::Elements(SAMPLE_LEN as u64));
    for strategy in MapStrategy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strategy.name()), &source, |b, source| {
            b.iter(|| map_all(black_box(source), &cache, strategy, &config).unwrap())
        });
    }
    group.finish();
}

fn bench_top_n(c: &mut Criterion) {
    let source = sample::generate_seeded(SAMPLE_LEN, SEED);

    let mut group = c.benchmark_group("top_n");
    group.throughput(Throughput::Elements(SAMPLE_LEN as u64));
    let rankers = [
        ("sequential", RankStrategy::Sequential),
        ("parallel", RankStrategy::Parallel),
    ];
    for (name, strategy) in rankers {
        group.bench_with_input(BenchmarkId::from_parameter(name), &source, |b, source| {
            b.iter(|| top_n_with(black_box(source), 5, strategy))
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let source = sample::generate_seeded(SAMPLE_LEN, SEED);
    let cache = LabelCache::full_domain();

    let mut group = c.benchmark_group("summarize");
    group.throughput(Throughput::Elements(SAMPLE_LEN as u64));
    for strategy in SummaryStrategy::ALL {
        let id = BenchmarkId::from_parameter(format!("{:?}", strategy));
        group.bench_with_input(id, &source, |b, source| {
            b.iter(|| summarize_with(black_box(source), &cache, strategy).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_all, bench_top_n, bench_summarize);
criterion_main!(benches);
