// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;

use crate::cli::Args;

pub fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("armory").chain(argv.iter().copied()))
        .expect("arguments should parse")
}

/// Runs a command line and returns what it wrote to stdout.
pub fn run(argv: &[&str]) -> String {
    let mut out: Vec<u8> = Vec::new();
    parse(argv).run(&mut out).expect("command should succeed");
    String::from_utf8(out).expect("output should be UTF-8")
}

pub fn run_json(argv: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run(argv)).expect("output should be JSON")
}
