// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use octa_geom::Aabb;
use serde::Deserialize;
use tracing::debug;

/// A list of boxes loaded from JSON. Box ids are positions in `boxes`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scene {
    pub boxes: Vec<Aabb>,
}

impl Scene {
    pub(crate) fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed scene JSON")
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        let scene =
            Self::from_json(&text).with_context(|| format!("in scene {}", path.display()))?;
        debug!(path = %path.display(), boxes = scene.boxes.len(), "loaded scene");
        Ok(scene)
    }
}
