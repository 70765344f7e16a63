//! Benchmarks for SSS-RS kernel synthesis.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sss_kernel::{compute_kernel, compute_kernel_n, CachedProfile, Profile, ProfileSet};
use sss_math::{gaussian_mix, normal_cdf_inverse, Vec3};

fn skin() -> Profile {
    Profile::new(Vec3::new(0.3, 0.2, 0.1), Vec3::new(1.0, 0.8, 0.5), 0.5)
}

/// Benchmark the quantile approximation and mixture density.
fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");

    let probs: Vec<f32> = (1..10_000).map(|i| i as f32 / 10_000.0).collect();
    group.throughput(Throughput::Elements(probs.len() as u64));

    group.bench_function("normal_cdf_inverse", |b| {
        b.iter(|| {
            probs
                .iter()
                .map(|&p| normal_cdf_inverse(black_box(p), 1.0))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("gaussian_mix", |b| {
        b.iter(|| {
            probs
                .iter()
                .map(|&x| gaussian_mix(black_box(x * 4.0 - 2.0), 0.3, 1.0, 0.5))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark kernel synthesis at several tap counts.
fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    let profile = skin();

    group.bench_function(BenchmarkId::new("compute", 7), |b| {
        b.iter(|| compute_kernel(black_box(&profile)))
    });
    group.bench_function(BenchmarkId::new("compute", 15), |b| {
        b.iter(|| compute_kernel_n::<15>(black_box(&profile)))
    });
    group.bench_function(BenchmarkId::new("compute", 63), |b| {
        b.iter(|| compute_kernel_n::<63>(black_box(&profile)))
    });

    group.finish();
}

/// Benchmark cached access against recomputation.
fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    group.bench_function("hit", |b| {
        let mut slot = CachedProfile::new(skin());
        b.iter(|| slot.kernel().map(|k| black_box(k.center().position)))
    });

    group.bench_function("miss", |b| {
        let mut slot = CachedProfile::new(skin());
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            slot.set_lerp_weight(if toggle { 0.25 } else { 0.75 });
            slot.kernel().map(|k| black_box(k.center().position))
        })
    });

    group.finish();
}

/// Benchmark recomputing a full profile set.
fn bench_profile_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_set");

    for count in [1usize, 4, 8] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("kernels", count), &count, |b, &count| {
            b.iter(|| {
                let mut set = ProfileSet::from_parts(Vec::new(), 0.1);
                for i in 0..count {
                    let w = i as f32 / count as f32;
                    set.push(format!("p{i}"), Profile::new(Vec3::splat(0.3), Vec3::splat(1.0), w));
                }
                set.kernels()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_math,
    bench_kernel,
    bench_cache,
    bench_profile_set,
);

criterion_main!(benches);
