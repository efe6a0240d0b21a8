// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use octa_geom::{Aabb, Vec3};

#[derive(Parser, Debug)]
#[command(name = "octa", author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `octa_geom=trace`)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// Print whether two boxes overlap (touching counts)
    Intersects {
        /// Two boxes, six numbers each
        #[arg(num_args = 12, allow_negative_numbers = true, value_name = "N")]
        values: Vec<f64>,
    },
    /// Print whether the first box lies inside the second
    Fit {
        /// Two boxes, six numbers each
        #[arg(num_args = 12, allow_negative_numbers = true, value_name = "N")]
        values: Vec<f64>,
    },
    /// Print the eight octant children of a box
    Split {
        /// One box: six numbers
        #[arg(num_args = 6, allow_negative_numbers = true, value_name = "N")]
        values: Vec<f64>,
    },
    /// Print the Morton code of a point in the unit cube
    Morton {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Print the X/Y push that separates the first box from the second
    Translate {
        /// Two boxes, six numbers each
        #[arg(num_args = 12, allow_negative_numbers = true, value_name = "N")]
        values: Vec<f64>,
    },
    /// Print overlapping pairs and overall bounds of a JSON scene file
    Scene {
        /// Path to a scene file: `{"boxes": [{"min": [..], "max": [..]}, ..]}`
        path: PathBuf,
    },
}

/// Reads consecutive groups of six numbers as boxes (corners in any order).
pub(crate) fn boxes_from(values: &[f64], expected: usize) -> Result<Vec<Aabb>> {
    ensure!(
        values.len() == expected * 6,
        "expected {} numbers ({expected} boxes), got {}",
        expected * 6,
        values.len()
    );
    Ok(values
        .chunks_exact(6)
        .map(|c| Aabb::from_min_max(Vec3::new(c[0], c[1], c[2]), Vec3::new(c[3], c[4], c[5])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_box_coordinates() {
        let args = Args::try_parse_from([
            "octa", "split", "-1", "-2", "-3", "1", "2", "3",
        ])
        .map(|a| a.command);
        assert_eq!(
            args.ok(),
            Some(Command::Split {
                values: vec![-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]
            })
        );
    }

    #[test]
    fn log_level_defaults_to_warn() {
        let args = Args::try_parse_from(["octa", "morton", "0.5", "0.5", "0.5"]);
        assert_eq!(args.map(|a| a.log_level).ok().as_deref(), Some("warn"));
    }

    #[test]
    fn boxes_from_rejects_short_input() {
        assert!(boxes_from(&[0.0; 5], 1).is_err());
        assert_eq!(boxes_from(&[0.0; 12], 2).map(|b| b.len()).ok(), Some(2));
    }
}
