use barcode_qc::core::hamming_unchecked;
use barcode_qc::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_store(count: usize, width: usize) -> SequenceStore {
    let mut rng = StdRng::seed_from_u64(2048);
    let barcodes: Vec<Vec<u8>> = (0..count)
        .map(|_| (0..width).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect())
        .collect();
    SequenceStore::new(&barcodes).unwrap()
}

fn bench_distance(c: &mut Criterion) {
    let store = random_store(2, 16);
    let (a, b) = (store.sequence(0), store.sequence(1));

    c.bench_function("hamming_distance_16", |bench| {
        bench.iter(|| black_box(hamming_unchecked(black_box(a), black_box(b))))
    });
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_histogram");
    group.sample_size(10);

    for count in [100usize, 1000, 3000] {
        let store = random_store(count, 16);
        group.throughput(Throughput::Elements(pair_count(count)));
        for kind in StrategyKind::ALL {
            let executor = ParallelExecutor::new(ExecutorConfig::new(kind));
            group.bench_with_input(BenchmarkId::new(kind.as_str(), count), &store, |bench, store| {
                bench.iter(|| black_box(executor.run(store).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_strategies);
criterion_main!(benches);
