//! Benchmark for RedBlackTreeMap vs standard BTreeMap.
//!
//! Compares the performance of redblack's RedBlackTreeMap against Rust's
//! standard BTreeMap for common operations.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use redblack::tree::RedBlackTreeMap;
use std::collections::BTreeMap;

/// A permutation of `0..size` that defeats sorted-input fast paths.
fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);

        group.bench_with_input(
            BenchmarkId::new("RedBlackTreeMap", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut map = RedBlackTreeMap::new();
                    for &key in keys {
                        let _ = map.insert(black_box(key), black_box(key * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let red_black_map: RedBlackTreeMap<i32, i32> =
            scrambled(size).into_iter().map(|key| (key, key * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = red_black_map.get(&black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);
        let red_black_map: RedBlackTreeMap<i32, i32> =
            keys.iter().map(|&key| (key, key)).collect();
        let standard_map: BTreeMap<i32, i32> = keys.iter().map(|&key| (key, key)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTreeMap", size),
            &keys,
            |bencher, keys| {
                bencher.iter_batched(
                    || red_black_map.clone(),
                    |mut map| {
                        for key in keys {
                            black_box(map.remove(key));
                        }
                        map
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_get, benchmark_remove);
criterion_main!(benches);
