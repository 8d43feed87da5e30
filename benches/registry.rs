use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moor::Registry;

fn bench_insert_get_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    for size in [1024usize, 8192, 65536] {
        group.bench_with_input(
            BenchmarkId::new("insert_get_remove", size),
            &size,
            |b, &size| {
                let registry = Registry::new();
                b.iter(|| {
                    let tokens: Vec<_> = (0..size).map(|i| registry.insert(i as u64)).collect();
                    for &token in &tokens {
                        black_box(registry.get(token));
                    }
                    for token in tokens {
                        registry.remove(token);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_get_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    for size in [1024usize, 8192, 65536] {
        let registry = Registry::new();
        let tokens: Vec<_> = (0..size).map(|i| registry.insert(i as u64)).collect();
        group.bench_with_input(BenchmarkId::new("get", size), &tokens, |b, tokens| {
            b.iter(|| {
                for &token in tokens {
                    black_box(registry.get(token));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(registry_benches, bench_insert_get_remove, bench_get_only);
criterion_main!(registry_benches);
