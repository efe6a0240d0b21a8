// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use octa_math::Vec3;
use tracing::debug;

use crate::Aabb;

/// Shortest single-axis push that moves `b` out of `a` in the XY plane.
///
/// Adding the result to both corners of `b` leaves the boxes touching. Only
/// X and Y are resolved; the returned `z` is always zero. For each axis the
/// two candidate depths are `a.min - b.max` and `a.max - b.min`; the one with
/// the smaller magnitude is kept, then only the axis with the smaller
/// resulting magnitude survives (ties keep Y). Swapping the arguments is not
/// a plain sign flip: the per-axis pick compares `|left|` against `right`.
///
/// Boxes that do not overlap in X or Y yield the zero vector. This is a soft
/// result rather than an error so callers can probe speculatively; it is
/// reported through a `debug` event.
#[must_use]
pub fn minimum_translation(a: &Aabb, b: &Aabb) -> Vec3 {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());

    let left = a_min.x() - b_max.x();
    let right = a_max.x() - b_min.x();
    let top = a_min.y() - b_max.y();
    let bottom = a_max.y() - b_min.y();

    if left > 0.0 || right < 0.0 || top > 0.0 || bottom < 0.0 {
        debug!(%a, %b, "minimum_translation: boxes do not overlap in XY");
        return Vec3::ZERO;
    }

    let x = if left.abs() < right { left } else { right };
    let y = if top.abs() < bottom { top } else { bottom };

    if x.abs() < y.abs() {
        Vec3::new(x, 0.0, 0.0)
    } else {
        Vec3::new(0.0, y, 0.0)
    }
}
