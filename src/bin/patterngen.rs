// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `patterngen` generates the oscilloscope patterns for the I2S display firmware.

use std::error::Error;
use std::path::PathBuf;

use log::{debug, info};
use structopt::StructOpt;

use firmtone::output::pattern::save_story;
use firmtone::pattern::{sets, Pattern};

#[derive(Debug, StructOpt)]
#[structopt(name = "patterngen", about = "Generating oscilloscope patterns for firmware")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Rust source file receiving the story patterns.
    #[structopt(short, long, parse(from_os_str), default_value = "story_patterns.rs")]
    output: PathBuf,
}

fn summarize(patterns: &[Pattern]) {
    for (i, pattern) in patterns.iter().enumerate() {
        match pattern.stats() {
            Some(stats) => info!(
                "{}. {}: {} samples, range 0x{:04x} - 0x{:04x}, avg 0x{:04x}",
                i + 1,
                pattern.name,
                stats.len,
                stats.min,
                stats.max,
                stats.mean
            ),
            None => info!("{}. {}: empty", i + 1, pattern.name),
        }
        debug!("   preview: {}...", pattern.preview(8));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    firmtone::cli::init_logging(opt.verbose)?;

    info!("basic patterns:");
    summarize(&sets::basic_patterns());

    let story = sets::story_patterns();
    info!("story pattern sequence:");
    summarize(&story);
    save_story(&opt.output, &story)?;

    info!("oscilloscope test patterns:");
    summarize(&sets::test_patterns());
    Ok(())
}
