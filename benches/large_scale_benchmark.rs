use bcisort::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_50k_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("50K Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 50_000;
    let input: Vec<i64> = (0..count).map(|_| rng.random_range(0..count as i64)).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("bci_sort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| bci_sort_all(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("counting_sort", |b| {
        b.iter(|| counting_sort(black_box(&input)))
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_sparse_keys(c: &mut Criterion) {
    // Counting sort pays for the whole key range, not the input size.
    let mut group = c.benchmark_group("Sparse Keys");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<i64> = (0..1_000).map(|_| rng.random_range(0..10_000_000)).collect();

    group.bench_function("counting_sort", |b| {
        b.iter(|| counting_sort(black_box(&input)))
    });

    group.bench_function("bci_sort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| bci_sort_all(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_50k_random, bench_sparse_keys);
criterion_main!(benches);
