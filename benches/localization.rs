//! Benchmark catalog construction and signature matching.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use disha::signature::build_catalog_parallel;
use disha::{
    LandmarkField, MatcherConfig, SignatureMatcher, WorldPoint, build_catalog, build_signature,
};

/// Uniformly scattered landmarks over a square area.
fn random_field(n: usize, size: f64, seed: u64) -> LandmarkField {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| WorldPoint::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size)))
        .collect()
}

fn bench_catalog_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_build");

    for n in [100, 400, 1000].iter() {
        let field = random_field(*n, 1000.0, 17);

        group.bench_with_input(BenchmarkId::new("sequential", n), n, |b, _| {
            b.iter(|| black_box(build_catalog(black_box(&field))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), n, |b, _| {
            b.iter(|| black_box(build_catalog_parallel(black_box(&field))))
        });
    }

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let field = random_field(500, 1000.0, 23);
    let catalog = build_catalog(&field);

    let observer = field.points()[250];
    let visible = field.within_radius(observer, 150.0);
    let query = build_signature(observer, &visible);

    let matcher_seq = SignatureMatcher::with_defaults();
    c.bench_function("match_500_landmarks_sequential", |b| {
        b.iter(|| black_box(matcher_seq.find_candidates(black_box(&catalog), black_box(&query))))
    });

    let matcher_par = SignatureMatcher::new(MatcherConfig::parallel());
    c.bench_function("match_500_landmarks_parallel", |b| {
        b.iter(|| black_box(matcher_par.find_candidates(black_box(&catalog), black_box(&query))))
    });
}

fn bench_matching_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_radius");
    let field = random_field(500, 1000.0, 29);
    let catalog = build_catalog(&field);
    let matcher = SignatureMatcher::with_defaults();
    let observer = field.points()[100];

    for radius in [50.0, 150.0, 400.0].iter() {
        let visible = field.within_radius(observer, *radius);
        let query = build_signature(observer, &visible);

        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, _| {
            b.iter(|| black_box(matcher.find_candidates(black_box(&catalog), black_box(&query))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_build, bench_matching, bench_matching_radius);
criterion_main!(benches);
