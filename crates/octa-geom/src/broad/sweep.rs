// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use octa_math::{morton, Vec3};

use crate::Aabb;

/// Broad-phase interface for inserting proxies and querying overlapping pairs.
///
/// Implementations must return pairs deterministically: the pair `(a, b)` is
/// canonicalized such that `a < b`, and the full list is sorted ascending by
/// `(a, b)`.
pub trait BroadPhase {
    /// Inserts or updates the proxy with the given `id` and `aabb`.
    fn upsert(&mut self, id: usize, aabb: Aabb);
    /// Removes a proxy if present.
    fn remove(&mut self, id: usize);
    /// Returns a canonical, deterministically-ordered list of overlapping pairs.
    fn pairs(&self) -> Vec<(usize, usize)>;
}

/// Sweep-and-prune along X.
///
/// Proxies are sorted by `(min.x, id)`; each proxy is tested only against
/// the following proxies whose `min.x` does not exceed its `max.x`, then the
/// remaining axes are checked with [`Aabb::intersects`]. The output is
/// re-sorted into canonical order, so it matches an all-pairs scan exactly.
#[derive(Debug, Default)]
pub struct SweepBroadPhase {
    items: BTreeMap<usize, Aabb>,
}

impl SweepBroadPhase {
    /// Creates an empty broad phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Number of proxies.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there are no proxies.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounds of proxy `id`, if present.
    pub fn get(&self, id: usize) -> Option<&Aabb> {
        self.items.get(&id)
    }

    /// Union of every proxy, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut it = self.items.values();
        let first = *it.next()?;
        Some(it.fold(first, |acc, b| acc.union(b)))
    }

    /// Proxy ids ordered along the Z-order curve of their centers.
    ///
    /// Centers are normalized into [`SweepBroadPhase::bounds`] before
    /// encoding; axes with zero extent map to 0. Ties keep id order.
    pub fn morton_order(&self) -> Vec<usize> {
        let Some(world) = self.bounds() else {
            return Vec::new();
        };
        let origin = world.min();
        let size = world.size();
        let unit = |c: f64, o: f64, s: f64| if s > 0.0 { (c - o) / s } else { 0.0 };

        let mut keyed: Vec<(u32, usize)> = self
            .items
            .iter()
            .map(|(id, aabb)| {
                let c = aabb.center();
                let n = Vec3::new(
                    unit(c.x(), origin.x(), size.x()),
                    unit(c.y(), origin.y(), size.y()),
                    unit(c.z(), origin.z(), size.z()),
                );
                (morton::encode(&n), *id)
            })
            .collect();
        keyed.sort_unstable();
        keyed.into_iter().map(|(_, id)| id).collect()
    }
}

impl BroadPhase for SweepBroadPhase {
    fn upsert(&mut self, id: usize, aabb: Aabb) {
        self.items.insert(id, aabb);
    }

    fn remove(&mut self, id: usize) {
        self.items.remove(&id);
    }

    fn pairs(&self) -> Vec<(usize, usize)> {
        let mut sorted: Vec<(usize, Aabb)> = self.items.iter().map(|(id, b)| (*id, *b)).collect();
        sorted.sort_by(|(a_id, a), (b_id, b)| {
            a.min().x().total_cmp(&b.min().x()).then(a_id.cmp(b_id))
        });

        let mut out: Vec<(usize, usize)> = Vec::new();
        for (i, (a_id, a_bb)) in sorted.iter().enumerate() {
            let reach = a_bb.max().x();
            for (b_id, b_bb) in sorted[i + 1..].iter().take_while(|(_, b)| b.min().x() <= reach) {
                if a_bb.intersects(b_bb) {
                    out.push(((*a_id).min(*b_id), (*a_id).max(*b_id)));
                }
            }
        }
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_faces_pair_up() {
        let mut bp = SweepBroadPhase::new();
        bp.upsert(0, Aabb::from_min_max(Vec3::ZERO, Vec3::ONE));
        bp.upsert(1, Aabb::from_min_max(Vec3::ONE, Vec3::splat(2.0)));
        assert_eq!(bp.pairs(), vec![(0, 1)]);
    }

    #[test]
    fn remove_drops_pairs() {
        let mut bp = SweepBroadPhase::new();
        bp.upsert(4, Aabb::cube(Vec3::ZERO, 2.0));
        bp.upsert(2, Aabb::cube(Vec3::ZERO, 1.0));
        assert_eq!(bp.pairs(), vec![(2, 4)]);
        bp.remove(4);
        assert!(bp.pairs().is_empty());
        assert_eq!(bp.len(), 1);
    }

    #[test]
    fn morton_order_walks_octants_in_index_order() {
        let mut bp = SweepBroadPhase::new();
        let world = Aabb::cube(Vec3::ZERO, 8.0);
        // Insert children in reverse so id order differs from curve order.
        for (octant, child) in world.split().iter().enumerate().rev() {
            bp.upsert(100 - octant, *child);
        }
        let order: Vec<usize> = bp.morton_order().into_iter().map(|id| 100 - id).collect();
        assert_eq!(order, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn empty_broad_phase_has_no_bounds() {
        let bp = SweepBroadPhase::new();
        assert!(bp.bounds().is_none());
        assert!(bp.morton_order().is_empty());
    }
}
