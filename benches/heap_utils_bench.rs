//! Criterion benchmarks for the heap primitives
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_utils_bench
//!
//! # Only the top-k group
//! cargo bench --bench heap_utils_bench -- top_k
//! ```
//!
//! `heapify` is compared against building by repeated `heap_push` and against
//! `std::collections::BinaryHeap::from`, and `largest_k` against a full sort.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heap_utils::{heap_pop, heap_push, heapify, largest_k, MaxOrder};
use std::collections::BinaryHeap;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_data(n: usize) -> Vec<u64> {
    let mut rng = Lcg::new(0xdecaf);
    (0..n).map(|_| rng.next()).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &SIZES {
        let data = random_data(n);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(
            BenchmarkId::new("heapify", &label),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut heap = data.clone();
                    heapify(&mut heap, MaxOrder);
                    black_box(heap)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("repeated_push", &label),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut heap = Vec::with_capacity(data.len());
                    for &v in data {
                        heap_push(&mut heap, v, MaxOrder);
                    }
                    black_box(heap)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary_heap", &label),
            &data,
            |b, data| b.iter(|| black_box(BinaryHeap::from(data.clone()))),
        );
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for &n in &SIZES[..2] {
        let mut heap = random_data(n);
        heapify(&mut heap, MaxOrder);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("heap_pop", &label), &heap, |b, heap| {
            b.iter(|| {
                let mut heap = heap.clone();
                let mut sum = 0u64;
                while let Ok(v) = heap_pop(&mut heap, MaxOrder) {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let data = random_data(SIZES[2]);

    for k in [10usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("largest_k", k), &k, |b, &k| {
            b.iter(|| black_box(largest_k(&data, k)))
        });
        group.bench_with_input(BenchmarkId::new("sort_and_truncate", k), &k, |b, &k| {
            b.iter(|| {
                let mut sorted = data.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                sorted.truncate(k);
                black_box(sorted)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_drain, bench_top_k);
criterion_main!(benches);
