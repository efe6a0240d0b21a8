// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! octa-math: vector primitives for the octa geometry stack.
//!
//! This crate provides:
//! - [`Vec3`], the fixed three-component vector every box operation is
//!   written against.
//! - [`VecN`], a variable-length vector whose length-sensitive operations
//!   fail fast with [`MathError`] instead of producing partial results.
//! - Morton (Z-order) encoding of points in the unit cube ([`morton`]).
//! - A seeded [`Prng`] and helpers that sample random points without any
//!   process-global RNG state.
//!
//! Numeric policy:
//! - `f64` throughout.
//! - Equality via `==` is exact. [`Vec3::approx_eq`] and [`VecN::approx_eq`]
//!   compare within [`APPROX_EPSILON`] and are documented as approximate.
//! - Normalizing a zero vector yields the zero vector; it is not an error.
#![forbid(unsafe_code)]

mod axis;
mod error;
pub mod morton;
mod prng;
mod vec3;
mod vecn;

pub use axis::Axis;
pub use error::MathError;
pub use prng::{random_circle_point, random_sphere_point, Prng};
pub use vec3::Vec3;
pub use vecn::VecN;

/// Per-component tolerance used by the approximate equality helpers.
///
/// Two components are considered equal when their absolute difference is
/// strictly less than this value.
pub const APPROX_EPSILON: f64 = 1e-16;

/// Writes `components` as `Vector{ c0, c1, ..., cN }` with two decimals.
pub(crate) fn fmt_components(
    f: &mut core::fmt::Formatter<'_>,
    components: &[f64],
) -> core::fmt::Result {
    if components.is_empty() {
        return f.write_str("Vector{ }");
    }
    f.write_str("Vector{ ")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c:.2}")?;
    }
    f.write_str(" }")
}
