use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kvmap::{KvStore, KvsEngine, SortedStore};
use rand::prelude::*;

fn filled<E: KvsEngine + Default>(n: u32) -> E {
    let mut store = E::default();
    for key_i in 1..n {
        store.put(format!("key{}", key_i), format!("value{}", key_i));
    }
    store
}

fn put_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_bench");
    group.bench_function("kvs", |b| {
        b.iter_batched(
            KvStore::new,
            |mut store| {
                for i in 1..(1 << 12) {
                    store.put(format!("key{}", i), "value".to_string());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("skiplist", |b| {
        b.iter_batched(
            SortedStore::new,
            |mut store| {
                for i in 1..(1 << 12) {
                    store.put(format!("key{}", i), "value".to_string());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn get_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_bench");
    for i in &vec![8, 12, 16] {
        group.bench_with_input(format!("kvs_{}", i), i, |b, i| {
            let store: KvStore = filled(1 << i);
            let mut rng = SmallRng::from_seed([0; 16]);
            b.iter(|| {
                store.get(&format!("key{}", rng.gen_range(1, 1 << i)));
            })
        });
    }
    for i in &vec![8, 12, 16] {
        group.bench_with_input(format!("skiplist_{}", i), i, |b, i| {
            let store: SortedStore = filled(1 << i);
            let mut rng = SmallRng::from_seed([0; 16]);
            b.iter(|| {
                store.get(&format!("key{}", rng.gen_range(1, 1 << i)));
            })
        });
    }
    group.finish();
}

fn scan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_bench");
    for i in &vec![8, 12] {
        group.bench_with_input(format!("contains_value_kvs_{i}"), i, |b, i| {
            let store: KvStore = filled(1 << i);
            let mut rng = SmallRng::from_seed([1; 16]);
            b.iter(|| store.contains_value(&format!("value{}", rng.gen_range(1, 2 << i))))
        });
        group.bench_with_input(format!("contains_value_skiplist_{i}"), i, |b, i| {
            let store: SortedStore = filled(1 << i);
            let mut rng = SmallRng::from_seed([1; 16]);
            b.iter(|| store.contains_value(&format!("value{}", rng.gen_range(1, 2 << i))))
        });
        group.bench_with_input(format!("display_skiplist_{i}"), i, |b, i| {
            let store: SortedStore = filled(1 << i);
            b.iter(|| store.to_display_string())
        });
    }
    group.finish();
}

criterion_group!(benches, put_bench, get_bench, scan_bench);
criterion_main!(benches);
