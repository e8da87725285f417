use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use manifold_core::parallel::{gather, scatter, sequence, transform_reduce, ExecutionPolicy};
use manifold_core::{Manifold, Vec3};

const POLICIES: [ExecutionPolicy; 2] = [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel];

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_reduce");
    for size in [1_000usize, 100_000, 1_000_000] {
        let data: Vec<f64> = (0..size).map(|i| i as f64).collect();
        for policy in POLICIES {
            group.bench_with_input(BenchmarkId::new(format!("{policy:?}"), size), &data, |b, data| {
                b.iter(|| transform_reduce(policy, black_box(data), 0.0, |a, b| a + b, |x| x * x))
            });
        }
    }
    group.finish();
}

fn bench_scatter_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_gather");
    for size in [10_000usize, 1_000_000] {
        let mut perm = vec![0u32; size];
        sequence(ExecutionPolicy::Sequential, &mut perm);
        perm.reverse();
        let data: Vec<u64> = (0..size as u64).collect();
        for policy in POLICIES {
            group.bench_function(BenchmarkId::new(format!("{policy:?}"), size), |b| {
                let mut tmp = vec![0u64; size];
                let mut out = vec![0u64; size];
                b.iter(|| {
                    // SAFETY: `perm` is a reversed identity permutation.
                    unsafe { scatter(policy, &data, &perm, &mut tmp) };
                    gather(policy, &perm, &tmp, &mut out);
                    black_box(&out);
                })
            });
        }
    }
    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let cubes: Vec<Manifold> = (0..1_000)
        .map(|i| Manifold::cube(Vec3::splat(1.0), false).translate(Vec3::new(2.0 * i as f64, 0.0, 0.0)))
        .collect();
    let composed = Manifold::compose(&cubes);
    c.bench_function("decompose_1000_cubes", |b| b.iter(|| black_box(composed.decompose())));
}

criterion_group!(benches, bench_reduce, bench_scatter_gather, bench_decompose);
criterion_main!(benches);
