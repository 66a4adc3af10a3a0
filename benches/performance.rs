//! Performance benchmarks for the statistics and collection paths

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use url_timer::{
    client::Prober,
    executor::RoundCollector,
    models::{ProbeResult, RoundOutcome},
    stats::{avg_of, max_of, min_of, StatsReporter},
    types::AbandonPolicy,
};

/// Sample durations spread over a realistic latency range
fn create_samples(count: usize) -> Vec<Duration> {
    (0..count)
        .map(|i| Duration::from_micros(5_000 + (i as u64 * 7_919) % 250_000))
        .collect()
}

/// Prober that answers immediately, isolating the fan-out/fan-in cost
struct InstantProber;

#[async_trait]
impl Prober for InstantProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        ProbeResult::success(url, Duration::from_micros(100), 200)
    }
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [10usize, 1_000, 100_000] {
        let samples = create_samples(size);
        group.bench_with_input(BenchmarkId::new("min_avg_max", size), &samples, |b, samples| {
            b.iter(|| {
                (
                    min_of(black_box(samples)),
                    avg_of(black_box(samples)),
                    max_of(black_box(samples)),
                )
            })
        });
    }

    group.finish();
}

fn bench_record_round(c: &mut Criterion) {
    let results: Vec<ProbeResult> = create_samples(16)
        .into_iter()
        .map(|d| ProbeResult::success("http://example.com/", d, 200))
        .collect();
    let outcome = RoundOutcome::new(results, 16);

    c.bench_function("record_round_16_urls", |b| {
        b.iter(|| {
            let mut stats = StatsReporter::new();
            stats.record_round(black_box(&outcome));
            stats.snapshot()
        })
    });
}

fn bench_collect(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let collector = RoundCollector::new(Arc::new(InstantProber), AbandonPolicy::Cancel);
    let mut group = c.benchmark_group("collect");

    for url_count in [1usize, 16, 256] {
        let urls: Vec<String> = (0..url_count).map(|i| format!("http://host{}.example/", i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(url_count), &urls, |b, urls| {
            b.iter(|| runtime.block_on(collector.collect(urls, Duration::from_secs(1))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_record_round, bench_collect);
criterion_main!(benches);
