// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use octa_geom::{Aabb, Vec3};

// Seed pinned so failures reproduce across machines. Override locally with
// PROPTEST_SEED when hunting for new counterexamples.
const SEED_BYTES: [u8; 32] = [
    0x0c, 0x7a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-1.0e3f64..1.0e3).prop_map(Vec3::from)
}

fn aabb() -> impl Strategy<Value = Aabb> {
    (vec3(), vec3()).prop_map(|(a, b)| Aabb::from_min_max(a, b))
}

#[test]
fn intersects_is_symmetric() {
    runner()
        .run(&(aabb(), aabb()), |(a, b)| {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            Ok(())
        })
        .unwrap();
}

#[test]
fn constructed_boxes_are_canonical() {
    runner()
        .run(&(vec3(), vec3()), |(p, q)| {
            let b = Aabb::from_min_max(p, q);
            prop_assert_eq!(b, Aabb::from_min_max(q, p));
            prop_assert!(b.min().x() <= b.max().x());
            prop_assert!(b.min().y() <= b.max().y());
            prop_assert!(b.min().z() <= b.max().z());
            prop_assert!(b.contains(&p) && b.contains(&q));
            Ok(())
        })
        .unwrap();
}

#[test]
fn fit_implies_intersection() {
    runner()
        .run(&(aabb(), aabb()), |(a, b)| {
            if a.fits_in(&b) {
                prop_assert!(a.intersects(&b));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn encapsulation_is_monotone() {
    runner()
        .run(&(aabb(), vec3()), |(b, p)| {
            let mut grown = b;
            grown.encapsulate_point(p);
            prop_assert!(b.fits_in(&grown));
            prop_assert!(grown.contains(&p));
            Ok(())
        })
        .unwrap();
}

#[test]
fn split_conserves_volume() {
    runner()
        .run(&aabb(), |b| {
            let total: f64 = b.split().iter().map(Aabb::volume).sum();
            let tol = b.volume().abs() * 1e-9 + 1e-9;
            prop_assert!((total - b.volume()).abs() <= tol, "{} vs {}", total, b.volume());
            for child in b.split() {
                prop_assert!(child.fits_in(&b));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn octant_of_points_inside_lands_in_matching_child() {
    runner()
        .run(&(aabb(), vec3()), |(b, p)| {
            let clamped = p.component_max(&b.min()).component_min(&b.max());
            let octant = b.octant_of(&clamped);
            prop_assert!(b.child(octant).contains(&clamped));
            Ok(())
        })
        .unwrap();
}
