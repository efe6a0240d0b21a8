// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! octa CLI entrypoint.
//!
//! Thin front end over `octa-geom` for poking at boxes from a shell:
//! overlap and fit checks, octant subdivision, Morton codes, minimum
//! translation, and broad-phase pairing of a JSON scene.
//!
//! # Usage
//! ```text
//! octa [--log-level <filter>] <command> [args]
//! ```
//!
//! Boxes are given as six numbers, `min_x min_y min_z max_x max_y max_z`.
//! The CLI exits with code `0` on success and non-zero on error.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod scene;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::Args;

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let output = commands::run(&args.command)?;
    println!("{output}");
    Ok(())
}
