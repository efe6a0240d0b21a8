// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for octa.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) with inclusive containment and overlap.
- A fixed octant layout (`Octant`) and 8-way subdivision (`Aabb::split`).
- X/Y minimum-translation resolution (`minimum_translation`).
- A region octree (`Octree`) built on `split` and `fits_in`.
- A broad-phase trait and a sweep-based pairing structure.

Design notes:
- Boxes store min/max corners; center/extents are derived on demand.
- Overlap and containment are inclusive on faces, edges and corners.
- Deterministic: no ambient RNG; pair outputs and octree queries are ordered
  canonically.
"]

/// Broad-phase pairing of many boxes.
pub mod broad;
mod error;
/// Region octree over a fixed root box.
pub mod octree;
/// Box types, octant layout, separation and the `Volume` seam.
pub mod types;

pub use error::GeomError;
pub use octree::{Octree, OctreeConfig};
pub use types::aabb::Aabb;
pub use types::octant::Octant;
pub use types::separation::minimum_translation;
pub use types::volume::Volume;

pub use octa_math::{Axis, MathError, Vec3, VecN};
