// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::GeomError;

/// Tuning knobs for [`crate::Octree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctreeConfig {
    /// Maximum number of subdivision levels below the root.
    pub max_depth: u8,
    /// A leaf splits once it holds more than this many items.
    pub max_items_per_node: usize,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_items_per_node: 8,
        }
    }
}

impl OctreeConfig {
    /// Checks that the configuration can build a tree.
    ///
    /// # Errors
    /// [`GeomError::InvalidConfig`] when `max_items_per_node` is zero.
    pub fn validate(&self) -> Result<(), GeomError> {
        if self.max_items_per_node == 0 {
            return Err(GeomError::InvalidConfig("max_items_per_node must be at least 1"));
        }
        Ok(())
    }
}
