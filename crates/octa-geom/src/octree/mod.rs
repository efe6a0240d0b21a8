// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Region octree keyed on item bounds.
//!
//! Each item lives in the deepest node whose box it fits in (inclusive), so
//! items straddling a splitting plane stay at the parent. Nodes split lazily
//! with [`Aabb::split`] once they hold more than
//! [`OctreeConfig::max_items_per_node`] items and are shallower than
//! [`OctreeConfig::max_depth`].
//!
//! Queries walk children in [`crate::Octant`] index order and items in
//! insertion order, so results are deterministic for a given insert sequence.

mod config;

pub use config::OctreeConfig;

use tracing::trace;

use crate::{Aabb, GeomError, Volume};

#[derive(Debug)]
struct Node<T> {
    bounds: Aabb,
    items: Vec<(Aabb, T)>,
    children: Option<Box<[Node<T>; 8]>>,
}

impl<T> Node<T> {
    const fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, bounds: Aabb, item: T, depth: u8, config: &OctreeConfig) {
        if let Some(children) = self.children.as_mut() {
            if let Some(child) = children.iter_mut().find(|c| bounds.fits_in(&c.bounds)) {
                child.insert(bounds, item, depth + 1, config);
                return;
            }
            self.items.push((bounds, item));
            return;
        }

        self.items.push((bounds, item));
        if self.items.len() > config.max_items_per_node && depth < config.max_depth {
            self.subdivide(depth, config);
        }
    }

    fn subdivide(&mut self, depth: u8, config: &OctreeConfig) {
        trace!(depth, bounds = %self.bounds, items = self.items.len(), "octree: subdividing node");
        let mut children = Box::new(self.bounds.split().map(Node::new));
        for (bounds, item) in std::mem::take(&mut self.items) {
            match children.iter_mut().find(|c| bounds.fits_in(&c.bounds)) {
                Some(child) => child.insert(bounds, item, depth + 1, config),
                None => self.items.push((bounds, item)),
            }
        }
        self.children = Some(children);
    }

    fn query<'a>(&'a self, region: &Aabb, out: &mut Vec<&'a T>) {
        if !self.bounds.intersects(region) {
            return;
        }
        out.extend(
            self.items
                .iter()
                .filter(|(bounds, _)| bounds.intersects(region))
                .map(|(_, item)| item),
        );
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(region, out);
            }
        }
    }

    fn depth(&self) -> usize {
        self.children
            .as_ref()
            .map_or(0, |children| 1 + children.iter().map(Node::depth).max().unwrap_or(0))
    }
}

/// Octree over a fixed root box.
#[derive(Debug)]
pub struct Octree<T> {
    root: Node<T>,
    config: OctreeConfig,
    len: usize,
}

impl<T> Octree<T> {
    /// Creates an empty octree covering `bounds`.
    ///
    /// # Errors
    /// [`GeomError::InvalidConfig`] if `config` fails
    /// [`OctreeConfig::validate`].
    pub fn new(bounds: Aabb, config: OctreeConfig) -> Result<Self, GeomError> {
        config.validate()?;
        Ok(Self {
            root: Node::new(bounds),
            config,
            len: 0,
        })
    }

    /// Root bounds.
    pub fn bounds(&self) -> Aabb {
        self.root.bounds
    }

    /// Active configuration.
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of subdivision levels below the root (0 for an unsplit tree).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Inserts `item` with the bounds of `volume`.
    ///
    /// # Errors
    /// [`GeomError::OutOfBounds`] if the volume does not fit in the root box;
    /// the item is dropped and the tree is unchanged.
    pub fn insert<V: Volume + ?Sized>(&mut self, volume: &V, item: T) -> Result<(), GeomError> {
        let bounds = volume.bounds();
        if !bounds.fits_in(&self.root.bounds) {
            return Err(GeomError::OutOfBounds {
                bounds,
                root: self.root.bounds,
            });
        }
        self.root.insert(bounds, item, 0, &self.config);
        self.len += 1;
        Ok(())
    }

    /// Items whose bounds intersect `region` (inclusive on faces).
    pub fn query<V: Volume + ?Sized>(&self, region: &V) -> Vec<&T> {
        let region = region.bounds();
        let mut out = Vec::new();
        self.root.query(&region, &mut out);
        out
    }
}
