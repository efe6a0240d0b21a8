// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
#![allow(clippy::expect_used)]
//! Octree build/query and broad-phase pairing throughput.
//!
//! # Running
//!
//! ```sh
//! cargo bench --package octa-benches --bench spatial_index
//! ```
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use octa_geom::broad::{BroadPhase, SweepBroadPhase};
use octa_geom::{Aabb, Octree, OctreeConfig, Vec3};
use octa_math::{random_sphere_point, Prng};

const WORLD: f64 = 200.0;

fn scatter(n: usize) -> Vec<Aabb> {
    let mut rng = Prng::from_seed_u64(n as u64);
    (0..n)
        .map(|_| {
            let c = random_sphere_point(&mut rng, Vec3::ZERO, WORLD / 2.0 - 4.0);
            Aabb::cube(c, rng.next_range(0.5, 4.0))
        })
        .collect()
}

fn build_octree(boxes: &[Aabb]) -> Octree<usize> {
    let mut tree = Octree::new(Aabb::cube(Vec3::ZERO, WORLD), OctreeConfig::default())
        .expect("default config is valid");
    for (id, b) in boxes.iter().enumerate() {
        tree.insert(b, id).expect("scatter stays inside the world");
    }
    tree
}

fn bench_octree(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree");
    for &n in &[100usize, 1_000, 10_000] {
        let boxes = scatter(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("build", n), &boxes, |b, boxes| {
            b.iter(|| build_octree(black_box(boxes)));
        });
        let tree = build_octree(&boxes);
        let region = Aabb::cube(Vec3::ZERO, 20.0);
        group.bench_with_input(BenchmarkId::new("query", n), &tree, |b, tree| {
            b.iter(|| tree.query(black_box(&region)).len());
        });
    }
    group.finish();
}

fn bench_broad_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("broad_phase");
    for &n in &[100usize, 1_000, 10_000] {
        let boxes = scatter(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("pairs", n), &boxes, |b, boxes| {
            b.iter_batched(
                || {
                    let mut bp = SweepBroadPhase::new();
                    for (id, aabb) in boxes.iter().enumerate() {
                        bp.upsert(id, *aabb);
                    }
                    bp
                },
                |bp| bp.pairs().len(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_octree, bench_broad_phase);
criterion_main!(benches);
