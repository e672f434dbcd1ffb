use chain_hashmap::ChainHashMap;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::collections::HashMap;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Operation counts mirroring the regression driver's sweep; 1e7 is left out
// of the default run to keep `cargo bench` tractable.
const SWEEP: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

// Per-operation cost of a set-then-get sweep over sequential integer keys,
// ChainHashMap against std's HashMap as the platform-native baseline.
// Throughput is 2 * n elements so criterion reports per-operation figures.
fn bench_set_then_get_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_then_get");
    for n in SWEEP {
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_with_input(BenchmarkId::new("chain_hashmap", n), &n, |b, &n| {
            b.iter_batched(
                || ChainHashMap::<i64, &str>::new(1024, 0.3),
                |mut m| {
                    for i in 0..n as i64 {
                        m.set(i, "");
                    }
                    for i in 0..n as i64 {
                        black_box(m.get(&i).ok());
                    }
                    m
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("std_hashmap", n), &n, |b, &n| {
            b.iter_batched(
                || HashMap::<i64, &str>::with_capacity(1024),
                |mut m| {
                    for i in 0..n as i64 {
                        m.insert(i, "");
                    }
                    for i in 0..n as i64 {
                        black_box(m.get(&i));
                    }
                    m
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chain_hashmap_get_hit", |b| {
        let mut m = ChainHashMap::<u64, u64>::new(1024, 0.75);
        let keys: Vec<u64> = lcg(7).take(20_000).collect();
        for (i, &k) in keys.iter().enumerate() {
            m.set(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k).ok());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chain_hashmap_get_miss", |b| {
        let mut m = ChainHashMap::<u64, u64>::new(1024, 0.75);
        for (i, k) in lcg(11).take(10_000).enumerate() {
            m.set(k, i as u64);
        }
        // A disjoint keystream: misses probe full chains before failing.
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = miss.next().unwrap();
            black_box(m.get(&k).ok());
        })
    });
}

fn bench_delete_reinsert(c: &mut Criterion) {
    c.bench_function("chain_hashmap_delete_reinsert", |b| {
        let mut m = ChainHashMap::<u64, u64>::new(1024, 0.75);
        let keys: Vec<u64> = lcg(3).take(10_000).collect();
        for (i, &k) in keys.iter().enumerate() {
            m.set(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            let v = m.delete(&k).unwrap();
            m.set(k, v);
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_set_then_get_sweep, bench_get_hit, bench_get_miss, bench_delete_reinsert
}
criterion_main!(benches);
