use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;
use record_store::RecordStore;

fn filled(size: u32) -> RecordStore {
    let mut store = RecordStore::new(Vec::new(), 4).unwrap();
    store.insert_range(&0u32.to_be_bytes(), size as usize).unwrap();
    store
}

/// Point lookups against stores of growing size.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [1_000u32, 100_000, 1_000_000] {
        let store = filled(size);
        let mut rng = rand::thread_rng();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let key: u32 = rng.gen_range(0..size * 2);
                black_box(store.contains(&key.to_be_bytes()))
            });
        });
    }

    group.finish();
}

/// Single insert + remove in the middle of the buffer (worst-case shift).
fn bench_point_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_insert");

    for size in [1_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut store = RecordStore::new(Vec::new(), 4).unwrap();
            for k in 0..size {
                store.insert(&(k * 2).to_be_bytes());
            }
            let key = (size | 1).to_be_bytes();
            b.iter(|| {
                black_box(store.insert(&key));
                store.remove(&key);
            });
        });
    }

    group.finish();
}

/// Range insert that is already present (merge-by-count fast path) versus
/// one that has to splice.
fn bench_insert_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_range");
    let base = 1_000u32.to_be_bytes();

    group.bench_function("already_present_65536", |b| {
        let mut store = filled(100_000);
        b.iter(|| store.insert_range(black_box(&base), 65_536).unwrap());
    });

    group.bench_function("splice_65536", |b| {
        b.iter_batched(
            || {
                let mut store = RecordStore::new(Vec::new(), 4).unwrap();
                for k in (0..200_000u32).step_by(3) {
                    store.insert(&k.to_be_bytes());
                }
                store
            },
            |mut store| store.insert_range(&base, 65_536).unwrap(),
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_contains, bench_point_insert, bench_insert_range);
criterion_main!(benches);
