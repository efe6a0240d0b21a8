// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use octa_math::{Axis, MathError, Vec3};

use crate::Aabb;

/// Position of a child box inside its parent.
///
/// The index is a 3-bit mask read as binary `xyz`: bit 2 selects the max half
/// along X, bit 1 along Y, bit 0 along Z. This is the same lane order as
/// [`octa_math::morton`], so walking octants in index order walks the
/// Z-order curve.
///
/// ```text
/// 0: (min,min,min)   1: (min,min,max)   2: (min,max,min)   3: (min,max,max)
/// 4: (max,min,min)   5: (max,min,max)   6: (max,max,min)   7: (max,max,max)
/// ```
///
/// Octree code indexes children positionally, so this layout never changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    /// All eight octants in index order.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Octant for `index`.
    ///
    /// # Errors
    /// [`MathError::InvalidIndex`] when `index > 7`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Result<Self, MathError> {
        if index < 8 {
            Ok(Self(index as u8))
        } else {
            Err(MathError::InvalidIndex { index, len: 8 })
        }
    }

    /// Octant selecting the max half on each axis flagged `true`.
    pub const fn from_halves(x_max: bool, y_max: bool, z_max: bool) -> Self {
        const fn bit(set: bool, shift: u8) -> u8 {
            if set {
                1 << shift
            } else {
                0
            }
        }
        Self(bit(x_max, 2) | bit(y_max, 1) | bit(z_max, 0))
    }

    /// Position in [`Octant::ALL`] and in the array returned by
    /// [`Aabb::split`].
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// `true` if this octant covers the max half along `axis`.
    pub const fn is_max(self, axis: Axis) -> bool {
        (self.0 >> (2 - axis.index())) & 1 == 1
    }
}

impl Aabb {
    /// Child box for `octant`: on each axis, `[min, center]` for the min half
    /// or `[center, max]` for the max half.
    #[must_use]
    pub fn child(&self, octant: Octant) -> Self {
        let center = self.center();
        let mut lo = self.min();
        let mut hi = self.max();
        for axis in Axis::ALL {
            if octant.is_max(axis) {
                lo.set_axis(axis, center[axis]);
            } else {
                hi.set_axis(axis, center[axis]);
            }
        }
        Self::from_min_max(lo, hi)
    }

    /// Splits the box into its eight octant children, indexed by
    /// [`Octant::index`].
    ///
    /// The children tile the parent exactly: they share only faces, and their
    /// corners use the parent's `min`, `center` and `max` values verbatim.
    /// Degenerate axes produce zero-extent children.
    #[must_use]
    pub fn split(&self) -> [Self; 8] {
        Octant::ALL.map(|octant| self.child(octant))
    }

    /// Octant of `point` relative to this box's center. Points on a splitting
    /// plane go to the max half. Points outside the box still get the octant
    /// on their side of the center.
    #[must_use]
    pub fn octant_of(&self, point: &Vec3) -> Octant {
        let c = self.center();
        Octant::from_halves(
            point.x() >= c.x(),
            point.y() >= c.y(),
            point.z() >= c.z(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_halves_matches_bit_layout() {
        assert_eq!(Octant::from_halves(false, false, false).index(), 0);
        assert_eq!(Octant::from_halves(false, false, true).index(), 1);
        assert_eq!(Octant::from_halves(false, true, false).index(), 2);
        assert_eq!(Octant::from_halves(true, false, false).index(), 4);
        assert_eq!(Octant::from_halves(true, true, true).index(), 7);
    }

    #[test]
    fn is_max_reads_x_from_the_high_bit() {
        let o = Octant::from_index(4).unwrap_or(Octant::ALL[0]);
        assert!(o.is_max(Axis::X));
        assert!(!o.is_max(Axis::Y));
        assert!(!o.is_max(Axis::Z));
        assert!(Octant::ALL[1].is_max(Axis::Z));
    }

    #[test]
    fn from_index_rejects_eight() {
        assert_eq!(
            Octant::from_index(8),
            Err(MathError::InvalidIndex { index: 8, len: 8 })
        );
        assert_eq!(Octant::from_index(5).map(Octant::index), Ok(5));
    }

    #[test]
    fn octant_of_sends_center_to_max_corner() {
        let b = Aabb::cube(Vec3::ZERO, 2.0);
        assert_eq!(b.octant_of(&Vec3::ZERO).index(), 7);
        assert_eq!(b.octant_of(&Vec3::new(-0.5, -0.5, -0.5)).index(), 0);
        assert_eq!(b.octant_of(&Vec3::new(0.5, -0.5, -0.5)).index(), 4);
        assert_eq!(b.octant_of(&Vec3::new(-0.5, -0.5, 0.5)).index(), 1);
    }
}
