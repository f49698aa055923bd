use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use primeseg::PrimeSieve;

fn bench_count_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_primes");
    for stop in [10_000_000u64, 100_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(stop), &stop, |b, &stop| {
            b.iter(|| {
                let mut ps = PrimeSieve::new();
                black_box(ps.count_primes(0, stop).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_sieve_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_size");
    for log2 in [12usize, 15, 18] {
        group.bench_with_input(BenchmarkId::from_parameter(1 << log2), &log2, |b, &log2| {
            b.iter(|| {
                let mut ps = PrimeSieve::new();
                ps.set_sieve_size(1 << log2);
                black_box(ps.count_primes(0, 10_000_000).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_count_twins(c: &mut Criterion) {
    c.bench_function("count_twins_1e8", |b| {
        b.iter(|| {
            let mut ps = PrimeSieve::new();
            black_box(ps.count_twins(0, 100_000_000).unwrap())
        })
    });
}

criterion_group!(benches, bench_count_primes, bench_sieve_sizes, bench_count_twins);
criterion_main!(benches);
