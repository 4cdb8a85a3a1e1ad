//! Benchmarks for counting and scoring
//!
//! Run with: cargo bench --bench discovery_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kotoba_core::{DiscoveryConfig, ExecutionMode, NgramCounter, WordDiscovery};
use std::hint::black_box;

const SENTENCES: &[&str] = &[
    "北京天安门广场上人很多",
    "我们去故宫博物院参观",
    "今天的天气非常好",
    "天安门广场在北京市中心",
    "博物院里有很多文物",
    "我爱北京天安门",
];

/// Generate a corpus of roughly `lines` sentences
fn generate_corpus(lines: usize) -> Vec<String> {
    SENTENCES
        .iter()
        .cycle()
        .take(lines)
        .enumerate()
        .map(|(i, sentence)| format!("{sentence}{}", i % 7))
        .collect()
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    for lines in [100, 1_000, 10_000] {
        let corpus = generate_corpus(lines);
        let chars: usize = corpus.iter().map(|s| s.chars().count()).sum();
        group.throughput(Throughput::Elements(chars as u64));

        group.bench_with_input(BenchmarkId::new("max_len_4", lines), &corpus, |b, corpus| {
            b.iter(|| {
                let mut counter = NgramCounter::new(4);
                counter.count_sentences(black_box(corpus));
                counter.finish()
            });
        });
    }

    group.finish();
}

/// Sequential vs parallel scoring over the same tables
fn bench_scoring_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring_modes");

    for lines in [1_000, 10_000] {
        let mut counter = NgramCounter::new(4);
        counter.count_sentences(generate_corpus(lines));
        let tables = counter.finish();

        let modes = [
            ExecutionMode::Sequential,
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel,
        ];

        for mode in modes {
            let config = DiscoveryConfig::builder()
                .execution_mode(mode)
                .build()
                .unwrap();
            let discovery = WordDiscovery::with_config(config).unwrap();

            group.bench_with_input(BenchmarkId::new(mode.as_str(), lines), &tables, |b, tables| {
                b.iter(|| discovery.score(black_box(tables.clone())).unwrap());
            });
        }
    }

    group.finish();
}

/// Effect of the maximum word length on the whole pipeline
fn bench_max_word_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_word_length");
    let text = generate_corpus(2_000).join("\n");

    for max_len in [2, 4, 6] {
        let config = DiscoveryConfig::builder()
            .max_word_length(max_len)
            .build()
            .unwrap();
        let discovery = WordDiscovery::with_config(config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(max_len), &text, |b, text| {
            b.iter(|| discovery.discover_text(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_counting,
    bench_scoring_modes,
    bench_max_word_length
);
criterion_main!(benches);
