use std::{collections::VecDeque, hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use keylist::ReindexOrder;
use keylist_benchmark::fill_collection;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZES: [usize; 3] = [100usize, 1_000usize, 10_000usize];
// Front operations reindex the whole map, so keep them small.
const FRONT_SIZES: [usize; 2] = [100usize, 1_000usize];

fn bench_append(c: &mut Criterion) {
    let mut g = c.benchmark_group("append_bulk");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::new("OrderedCollection", size), &size, |b, &n| {
            b.iter(|| black_box(fill_collection(n, ReindexOrder::Numeric)))
        });
        g.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &n| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n as i64 {
                    d.push_back(i);
                }
                black_box(d)
            })
        });
    }
    g.finish();
}

fn bench_insert_first(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert_first");
    for &size in FRONT_SIZES.iter() {
        for order in [ReindexOrder::Numeric, ReindexOrder::Lexicographic] {
            g.bench_with_input(BenchmarkId::new(order.as_str(), size), &size, |b, &n| {
                b.iter_batched(
                    || fill_collection(n, order),
                    |mut list| {
                        list.insert_first(black_box(-1));
                        list
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    g.finish();
}

fn bench_remove_ends(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove_ends");
    for &size in FRONT_SIZES.iter() {
        g.bench_with_input(BenchmarkId::new("remove_first", size), &size, |b, &n| {
            b.iter_batched(
                || fill_collection(n, ReindexOrder::Numeric),
                |mut list| black_box(list.remove_first()),
                BatchSize::SmallInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("remove_last", size), &size, |b, &n| {
            b.iter_batched(
                || fill_collection(n, ReindexOrder::Numeric),
                |mut list| black_box(list.remove_last()),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut g = c.benchmark_group("traversal");
    for &size in SIZES.iter() {
        let list = fill_collection(size, ReindexOrder::Numeric);
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::new("map", size), &list, |b, list| {
            b.iter(|| black_box(list.map(|x, _| x * 2)))
        });
        g.bench_with_input(BenchmarkId::new("filter", size), &list, |b, list| {
            b.iter(|| black_box(list.filter(|x| x % 2 == 0)))
        });
        g.bench_with_input(BenchmarkId::new("reduce", size), &list, |b, list| {
            b.iter(|| black_box(list.reduce(|acc, x, _| acc + x, 0i64)))
        });
    }
    g.finish();
}

fn bench_random_get(c: &mut Criterion) {
    let size = 10_000usize;
    let list = fill_collection(size, ReindexOrder::Numeric);
    let mut rng = SmallRng::seed_from_u64(42);
    let indices: Vec<usize> = (0..1_000).map(|_| rng.gen_range(0..size)).collect();

    c.bench_function("get_random_1000", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &i in &indices {
                sum += list.get(i).copied().unwrap_or_default();
            }
            black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_first,
    bench_remove_ends,
    bench_traversal,
    bench_random_get
);
criterion_main!(benches);
