// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod commands;
mod output;

#[cfg(test)]
mod tests;

use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    args.run(io::stdout().lock())
}

/// Logs go to stderr so stdout carries only the rendered response.
/// `RUST_LOG` wins over the `-v`/`-q` flags when set.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}
