// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use anyhow::Result;
use octa_geom::broad::{BroadPhase, SweepBroadPhase};
use octa_geom::{minimum_translation, Vec3};
use tracing::{debug, info};

use crate::cli::{boxes_from, Command};
use crate::scene::Scene;

/// Executes `command` and returns what should be printed.
pub(crate) fn run(command: &Command) -> Result<String> {
    debug!(?command, "running command");
    match command {
        Command::Intersects { values } => {
            let b = boxes_from(values, 2)?;
            Ok(b[0].intersects(&b[1]).to_string())
        }
        Command::Fit { values } => {
            let b = boxes_from(values, 2)?;
            Ok(b[0].fits_in(&b[1]).to_string())
        }
        Command::Split { values } => {
            let b = boxes_from(values, 1)?;
            let lines: Vec<String> = b[0]
                .split()
                .iter()
                .enumerate()
                .map(|(i, child)| format!("{i}: {child}"))
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Morton { x, y, z } => Ok(Vec3::new(*x, *y, *z).morton_code().to_string()),
        Command::Translate { values } => {
            let b = boxes_from(values, 2)?;
            Ok(minimum_translation(&b[0], &b[1]).to_string())
        }
        Command::Scene { path } => {
            let scene = Scene::load(path)?;
            Ok(describe_scene(&scene))
        }
    }
}

fn describe_scene(scene: &Scene) -> String {
    let mut bp = SweepBroadPhase::new();
    for (id, b) in scene.boxes.iter().enumerate() {
        bp.upsert(id, *b);
    }
    let pairs = bp.pairs();
    info!(boxes = bp.len(), pairs = pairs.len(), "scene paired");

    let mut lines = vec![format!("pairs: {}", pairs.len())];
    lines.extend(pairs.iter().map(|(a, b)| format!("{a} {b}")));
    lines.push(match bp.bounds() {
        Some(bounds) => format!("bounds: {bounds}"),
        None => "bounds: none".to_owned(),
    });
    lines.join("\n")
}
