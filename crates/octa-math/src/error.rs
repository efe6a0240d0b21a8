// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors returned by length- or index-sensitive vector operations.
///
/// Every variant is local to the call that produced it; nothing in this crate
/// retries or treats these as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Two vectors of different lengths were combined component-wise.
    #[error("vector length mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the argument.
        right: usize,
    },
    /// The operation is only defined for a specific number of components.
    #[error("expected a vector of {expected} components, found {found}")]
    InvalidDimension {
        /// Required component count.
        expected: usize,
        /// Component count that was supplied.
        found: usize,
    },
    /// A component accessor was given an axis past the end of the vector.
    #[error("component index {index} out of range for length {len}")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of components in the vector.
        len: usize,
    },
    /// A fallible division was asked to divide by zero.
    #[error("division by zero")]
    DivisionByZero,
}
