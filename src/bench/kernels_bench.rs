use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use parkernels::{ClusterConfig, MatmulConfig, Strategy, cluster_with, multiply_with};
use std::hint::black_box;

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [128, 256, 512] {
        let a: Vec<f32> = (0..size * size).map(|i| (i % 100) as f32).collect();
        let b: Vec<f32> = (0..size * size).map(|i| (i % 100) as f32).collect();
        let mut out = vec![0.0f32; size * size];

        for (name, strategy) in [("naive", Strategy::Naive), ("blocked", Strategy::Blocked)] {
            let config = MatmulConfig {
                strategy,
                num_threads: Some(4),
                ..MatmulConfig::default()
            };
            group.bench_with_input(BenchmarkId::new(name, size), &size, |bench, &n| {
                bench.iter(|| {
                    multiply_with(black_box(&a), black_box(&b), &mut out, n, &config)
                        .expect("matmul bench run")
                });
            });
        }
    }
    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let (n, dim, k) = (20_000, 8, 8);
    // Eight loose blobs, deterministic
    let points: Vec<f32> = (0..n * dim)
        .map(|i| ((i / dim) % k) as f32 * 10.0 + ((i * 7919) % 13) as f32 * 0.1)
        .collect();
    let mut membership = vec![0i32; n];
    let config = ClusterConfig {
        num_threads: Some(4),
        ..ClusterConfig::default()
    };

    c.bench_function("kmeans_20k_8d", |bench| {
        bench.iter(|| {
            cluster_with(black_box(&points), dim, k, &mut membership, &config)
                .expect("kmeans bench run")
        });
    });
}

criterion_group!(benches, bench_matmul, bench_kmeans);
criterion_main!(benches);
