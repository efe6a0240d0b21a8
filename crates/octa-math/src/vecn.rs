// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::{morton, MathError, Vec3, APPROX_EPSILON};

/// Variable-length vector for callers that need more (or fewer) than three
/// components.
///
/// Every operation that combines two vectors checks lengths first and returns
/// [`MathError::DimensionMismatch`] rather than computing a partial result.
/// Box operations never take a `VecN` directly; convert with
/// [`Vec3::try_from`] at the boundary.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VecN {
    data: Vec<f64>,
}

impl VecN {
    /// Creates a vector that owns `components`.
    pub fn new(components: Vec<f64>) -> Self {
        Self { data: components }
    }

    /// `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// `len` ones.
    pub fn ones(len: usize) -> Self {
        Self::new(vec![1.0; len])
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` for the zero-length vector.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the components.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Component at `index`.
    ///
    /// # Errors
    /// [`MathError::InvalidIndex`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.data.get(index).copied().ok_or(MathError::InvalidIndex {
            index,
            len: self.data.len(),
        })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    /// [`MathError::InvalidIndex`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::InvalidIndex { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Sets every component to `value`.
    pub fn set_all(&mut self, value: f64) {
        self.data.fill(value);
    }

    fn check_len(&self, other: &Self) -> Result<(), MathError> {
        if self.data.len() == other.data.len() {
            Ok(())
        } else {
            Err(MathError::DimensionMismatch {
                left: self.data.len(),
                right: other.data.len(),
            })
        }
    }

    fn zip(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, MathError> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(*a, *b))
            .collect())
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.data.iter().map(|c| f(*c)).collect()
    }

    /// Component-wise sum.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn plus(&self, other: &Self) -> Result<Self, MathError> {
        self.zip(other, |a, b| a + b)
    }

    /// Component-wise difference.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn minus(&self, other: &Self) -> Result<Self, MathError> {
        self.zip(other, |a, b| a - b)
    }

    /// Scales every component by `m`.
    pub fn scale(&self, m: f64) -> Self {
        self.map(|c| c * m)
    }

    /// Divides every component by `m`.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] when `m == 0`.
    pub fn try_div(&self, m: f64) -> Result<Self, MathError> {
        if m == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|c| c / m))
    }

    /// Dot product.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64, MathError> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cross product; only defined for three components.
    ///
    /// # Errors
    /// [`MathError::InvalidDimension`] unless both vectors have length 3.
    pub fn cross(&self, other: &Self) -> Result<Self, MathError> {
        let a = Vec3::try_from(self)?;
        let b = Vec3::try_from(other)?;
        Ok(a.cross(&b).into())
    }

    /// Sum of squared components.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum()
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.norm().sqrt()
    }

    /// Unit vector in the same direction; a zero vector of the same length
    /// when the magnitude is zero.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return Self::zeros(self.len());
        }
        self.scale(1.0 / len)
    }

    /// Euclidean distance.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn distance(&self, other: &Self) -> Result<f64, MathError> {
        Ok(self.minus(other)?.magnitude())
    }

    /// Per-component minimum.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn component_min(&self, other: &Self) -> Result<Self, MathError> {
        self.zip(other, f64::min)
    }

    /// Per-component maximum.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn component_max(&self, other: &Self) -> Result<Self, MathError> {
        self.zip(other, f64::max)
    }

    /// Linear interpolation `self + (other - self) * f`, unclamped.
    ///
    /// # Errors
    /// [`MathError::DimensionMismatch`] when the lengths differ.
    pub fn lerp(&self, other: &Self, f: f64) -> Result<Self, MathError> {
        self.zip(other, |a, b| (b - a) * f + a)
    }

    /// Approximate equality within [`APPROX_EPSILON`]; vectors of different
    /// lengths are never equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
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

    /// Unsigned angle in radians; only defined for three components.
    ///
    /// # Errors
    /// [`MathError::InvalidDimension`] unless both vectors have length 3.
    pub fn angle(&self, other: &Self) -> Result<f64, MathError> {
        Ok(Vec3::try_from(self)?.angle(&Vec3::try_from(other)?))
    }

    /// Joins `parts` end to end.
    pub fn concatenate(parts: &[Self]) -> Self {
        parts.iter().flat_map(|p| p.data.iter().copied()).collect()
    }

    /// 30-bit Morton code; only defined for three components.
    ///
    /// # Errors
    /// [`MathError::InvalidDimension`] unless the length is 3.
    pub fn morton_code(&self) -> Result<u32, MathError> {
        Ok(morton::encode(&Vec3::try_from(self)?))
    }
}

impl FromIterator<f64> for VecN {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for VecN {
    fn from(value: Vec<f64>) -> Self {
        Self::new(value)
    }
}

impl From<Vec3> for VecN {
    fn from(value: Vec3) -> Self {
        Self::new(value.to_array().to_vec())
    }
}

impl TryFrom<&VecN> for Vec3 {
    type Error = MathError;

    fn try_from(value: &VecN) -> Result<Self, Self::Error> {
        match value.data.as_slice() {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            other => Err(MathError::InvalidDimension {
                expected: 3,
                found: other.len(),
            }),
        }
    }
}

impl TryFrom<VecN> for Vec3 {
    type Error = MathError;

    fn try_from(value: VecN) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl fmt::Display for VecN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_components(f, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_fail_fast() {
        let a = VecN::new(vec![1.0, 2.0]);
        let b = VecN::new(vec![1.0, 2.0, 3.0]);
        let err = MathError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(a.plus(&b), Err(err));
        assert_eq!(a.minus(&b), Err(err));
        assert_eq!(a.dot(&b), Err(err));
        assert_eq!(a.lerp(&b, 0.5), Err(err));
    }

    #[test]
    fn cross_requires_three_components() {
        let a = VecN::new(vec![1.0, 0.0, 0.0, 0.0]);
        let b = VecN::new(vec![0.0, 1.0, 0.0, 0.0]);
        assert_eq!(
            a.cross(&b),
            Err(MathError::InvalidDimension { expected: 3, found: 4 })
        );
    }

    #[test]
    fn normalize_zero_keeps_length() {
        let z = VecN::zeros(5).normalize();
        assert_eq!(z.len(), 5);
        assert_eq!(z.sum(), 0.0);
    }

    #[test]
    fn display_handles_empty_vector() {
        assert_eq!(VecN::default().to_string(), "Vector{ }");
        assert_eq!(VecN::new(vec![0.5]).to_string(), "Vector{ 0.50 }");
    }
}
