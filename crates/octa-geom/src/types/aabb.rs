// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use octa_math::{MathError, Vec3, VecN};

/// Axis-aligned bounding box.
///
/// Representation:
/// - Stored as `min`/`max` corners; center, extents and size are derived.
///
/// Invariants:
/// - Constructors normalize so that `min <= max` per axis, except
///   [`Aabb::from_center_size`] / [`Aabb::cube`] with a negative size and the
///   raw mutator [`Aabb::set_min_max`], which store what they are given. An
///   inverted axis makes every point test on that axis fail.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Corners", into = "Corners")
)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

/// Wire shape for serde; deserialization normalizes through
/// [`Aabb::from_min_max`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Corners {
    min: Vec3,
    max: Vec3,
}

#[cfg(feature = "serde")]
impl From<Corners> for Aabb {
    fn from(value: Corners) -> Self {
        Self::from_min_max(value.min, value.max)
    }
}

#[cfg(feature = "serde")]
impl From<Aabb> for Corners {
    fn from(value: Aabb) -> Self {
        Self {
            min: value.min,
            max: value.max,
        }
    }
}

impl Aabb {
    /// Builds a box from two opposite corners given in any order.
    ///
    /// The corners are normalized with component-wise min/max, so
    /// `from_min_max(a, b) == from_min_max(b, a)`.
    #[must_use]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.component_min(&b),
            max: a.component_max(&b),
        }
    }

    /// Builds a box centered at `center` spanning `size` along each axis
    /// (half-extents are `size / 2`).
    ///
    /// A negative size component yields an inverted axis; it is not
    /// normalized.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size.scale(0.5))
    }

    /// Builds a box centered at `center` with the given half-extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center.minus(&extents),
            max: center.plus(&extents),
        }
    }

    /// Builds a cube of edge length `size` centered at `center`.
    #[must_use]
    pub fn cube(center: Vec3, size: f64) -> Self {
        Self::from_center_size(center, Vec3::splat(size))
    }

    /// Builds the minimal box that contains all `points`, or `None` when the
    /// slice is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bounds.encapsulate_point(*p);
        }
        Some(bounds)
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Edge lengths, `max - min`.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max.minus(&self.min)
    }

    /// Half of [`Aabb::size`].
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.size().scale(0.5)
    }

    /// Product of the edge lengths. Negative for a box inverted along an odd
    /// number of axes.
    #[must_use]
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x() * s.y() * s.z()
    }

    /// Overwrites both corners as given, without normalizing.
    pub fn set_min_max(&mut self, min: Vec3, max: Vec3) {
        self.min = min;
        self.max = max;
    }

    /// Returns `true` if `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: &Vec3) -> bool {
        let p = point.to_array();
        let lo = self.min.to_array();
        let hi = self.max.to_array();
        (0..3).all(|i| lo[i] <= p[i] && p[i] <= hi[i])
    }

    /// [`Aabb::contains`] for a variable-length point.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] unless `point` has three
    /// components.
    pub fn try_contains(&self, point: &VecN) -> Result<bool, MathError> {
        let p = Vec3::try_from(point).map_err(|_| MathError::DimensionMismatch {
            left: 3,
            right: point.len(),
        })?;
        Ok(self.contains(&p))
    }

    /// Returns `true` if this box lies entirely inside `other`: both corners
    /// of `self` are contained in `other` (boundary inclusive).
    #[must_use]
    pub fn fits_in(&self, other: &Self) -> bool {
        other.contains(&self.min) && other.contains(&self.max)
    }

    /// Returns `true` if this box overlaps another (inclusive on faces, edges
    /// and corners). Symmetric.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        // Touching counts as overlap so contact pairs do not flicker.
        (0..3).all(|i| a_max[i] >= b_min[i] && b_max[i] >= a_min[i])
    }

    /// Grows the box to the smallest one containing both its previous volume
    /// and `point`.
    pub fn encapsulate_point(&mut self, point: Vec3) {
        self.set_min_max(
            self.min.component_min(&point),
            self.max.component_max(&point),
        );
    }

    /// Grows the box to contain `other` (both of its corners).
    pub fn encapsulate_box(&mut self, other: &Self) {
        self.encapsulate_point(other.min);
        self.encapsulate_point(other.max);
    }

    /// Returns the union of two boxes without mutating either.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.encapsulate_box(other);
        out
    }

    /// Increases the size by `amount` along every axis, keeping the center
    /// fixed (each face moves out by `amount / 2`).
    pub fn expand(&mut self, amount: f64) {
        self.expand_by(Vec3::splat(amount));
    }

    /// Per-axis variant of [`Aabb::expand`].
    pub fn expand_by(&mut self, amount: Vec3) {
        let half = amount.scale(0.5);
        self.set_min_max(self.min.minus(&half), self.max.plus(&half));
    }

    /// Approximate equality of both corners, see [`Vec3::approx_eq`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.min.approx_eq(&other.min) && self.max.approx_eq(&other.max)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aabb{{ min: {}, max: {} }}", self.min, self.max)
    }
}
