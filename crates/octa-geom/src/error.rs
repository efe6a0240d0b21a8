// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use octa_math::MathError;
use thiserror::Error;

use crate::Aabb;

/// Errors raised by box-level structures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A vector operation failed underneath a geometry call.
    #[error(transparent)]
    Math(#[from] MathError),
    /// An octree insert was given a volume that does not fit the root box.
    #[error("{bounds} does not fit inside octree root {root}")]
    OutOfBounds {
        /// Bounds of the rejected volume.
        bounds: Aabb,
        /// Bounds of the octree root.
        root: Aabb,
    },
    /// An octree configuration value is unusable.
    #[error("invalid octree config: {0}")]
    InvalidConfig(&'static str),
}
