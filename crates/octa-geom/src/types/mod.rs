// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types (AABB, octant layout) and the predicates built on them.
//!
//! Semantics notes:
//! - Containment and overlap are inclusive on faces so that touching boxes
//!   pair up and boundary points belong to the box.
//! - Octant indices are positional and stable: read as binary `xyz`, a set
//!   bit selects the max half along that axis (bit 2 = X, bit 0 = Z).

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Octant layout and 8-way subdivision."]
pub mod octant;
#[doc = "Minimum translation between overlapping boxes."]
pub mod separation;
#[doc = "Trait for anything with axis-aligned bounds."]
pub mod volume;
