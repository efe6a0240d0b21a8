// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{morton, Axis, MathError, APPROX_EPSILON};

/// Three-component vector used by every box operation.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Binary operations (`plus`, `minus`, `scale`, `cross`, `lerp`, and the
///   operator impls) return new values; only `+=`, `-=`, `*=`, [`Vec3::set`]
///   and [`Vec3::set_all`] mutate the receiver.
/// * `==` is exact. Use [`Vec3::approx_eq`] for tolerant comparison.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Component along `axis`.
    pub const fn axis(&self, axis: Axis) -> f64 {
        self.data[axis.index()]
    }

    /// Component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidIndex`] when `index > 2`.
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::InvalidIndex { index, len: 3 })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidIndex`] when `index > 2`; the vector is left
    /// untouched.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::InvalidIndex { index, len: 3 })?;
        *slot = value;
        Ok(())
    }

    /// Overwrites the component along `axis`.
    pub fn set_axis(&mut self, axis: Axis, value: f64) {
        self.data[axis.index()] = value;
    }

    /// Sets every component to `value`.
    pub fn set_all(&mut self, value: f64) {
        self.data = [value; 3];
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
    }

    /// Component-wise sum.
    pub fn plus(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn minus(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a - b)
    }

    /// Scales every component by `m`.
    pub fn scale(&self, m: f64) -> Self {
        self.map(|c| c * m)
    }

    /// Divides every component by `m`.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] when `m == 0`.
    pub fn try_div(&self, m: f64) -> Result<Self, MathError> {
        if m == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|c| c / m))
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Sum of squared components.
    pub fn norm(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length, `sqrt(norm)`.
    pub fn magnitude(&self) -> f64 {
        self.norm().sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        self.minus(other).magnitude()
    }

    /// Per-component minimum.
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip(*other, f64::min)
    }

    /// Per-component maximum.
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip(*other, f64::max)
    }

    /// Linear interpolation `self + (other - self) * f`.
    ///
    /// `f` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp(&self, other: &Self, f: f64) -> Self {
        self.zip(*other, |a, b| (b - a) * f + a)
    }

    /// Approximate equality: every component differs by less than
    /// [`APPROX_EPSILON`].
    ///
    /// This is not `==`; it tolerates rounding noise at the scale of
    /// `1e-16` only.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < APPROX_EPSILON)
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(f64::abs)
    }

    /// Sum of the components.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Component-wise square.
    pub fn squared(&self) -> Self {
        self.map(|c| c * c)
    }

    /// Unsigned angle to `other` in radians, `atan2(|a × b|, a · b)`.
    pub fn angle(&self, other: &Self) -> f64 {
        self.cross(other).magnitude().atan2(self.dot(other))
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// 30-bit Morton code of this point, see [`morton::encode`].
    pub fn morton_code(&self) -> u32 {
        morton::encode(self)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.data[axis.index()]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(&rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(&rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(&rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(&rhs);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(rhs);
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_components(f, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_do_not_mutate_operands() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let sum = a + b;
        assert_eq!(sum.to_array(), [5.0, 7.0, 9.0]);
        assert_eq!(a.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(b.to_array(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn compound_assignment_mutates_receiver() {
        let mut v = Vec3::ONE;
        v += Vec3::UNIT_X;
        v -= Vec3::UNIT_Z;
        v *= 2.0;
        assert_eq!(v.to_array(), [4.0, 2.0, 0.0]);
    }

    #[test]
    fn set_rejects_out_of_range_index() {
        let mut v = Vec3::ZERO;
        assert_eq!(v.set(3, 1.0), Err(MathError::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(v, Vec3::ZERO);
        assert_eq!(v.set(1, 7.5), Ok(()));
        assert_eq!(v.get(1), Ok(7.5));
    }

    #[test]
    fn display_uses_two_decimals() {
        let v = Vec3::new(1.0, -2.5, 1.0 / 3.0);
        assert_eq!(v.to_string(), "Vector{ 1.00, -2.50, 0.33 }");
    }

    #[test]
    fn index_by_axis() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[Axis::Y], 2.0);
        assert_eq!(v.axis(Axis::Z), 3.0);
    }
}
