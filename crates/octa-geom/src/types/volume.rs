// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use octa_math::Vec3;

use crate::Aabb;

/// Anything that can report axis-aligned bounds.
///
/// Spatial structures ([`crate::Octree`], broad phases) accept any `Volume`
/// and work on its bounds, so the containment and overlap semantics are the
/// ones defined on [`Aabb`].
pub trait Volume {
    /// Tight axis-aligned bounds.
    fn bounds(&self) -> Aabb;

    /// Whether these bounds lie entirely inside `other`'s.
    fn fits(&self, other: &dyn Volume) -> bool {
        self.bounds().fits_in(&other.bounds())
    }

    /// Whether these bounds overlap `other`'s (inclusive).
    fn overlaps(&self, other: &dyn Volume) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

impl Volume for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// A point is a zero-volume box.
impl Volume for Vec3 {
    fn bounds(&self) -> Aabb {
        Aabb::from_min_max(*self, *self)
    }
}
