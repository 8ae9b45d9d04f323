// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `tonegen` renders the birthday melody for the I2S speaker firmware,
//! both as a WAV file for listening and as a Rust byte array for embedding.

use std::error::Error;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use firmtone::melody::{self, RenderSettings};
use firmtone::note::SCALE;
use firmtone::output::{source::SourceArray, wav};

#[derive(Debug, StructOpt)]
#[structopt(name = "tonegen", about = "Rendering the birthday melody for firmware")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// WAV file for listening to the rendered audio.
    #[structopt(long, parse(from_os_str), default_value = "happy_birthday_16khz.wav")]
    wav: PathBuf,

    /// Rust source file embedding the samples.
    #[structopt(long, parse(from_os_str), default_value = "happy_birthday_audio.rs")]
    source: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    firmtone::cli::init_logging(opt.verbose)?;

    let settings = RenderSettings::default();
    info!("generating Happy Birthday audio data");
    let samples = melody::render_melody(melody::HAPPY_BIRTHDAY, &SCALE, &settings)?;
    info!(
        "generated {} samples ({:.1} seconds)",
        samples.len(),
        firmtone::wave::duration(settings.sample_rate, samples.len())
    );

    wav::save_wav(&opt.wav, &samples, settings.sample_rate)?;
    SourceArray::mono16(
        "HAPPY_BIRTHDAY_AUDIO",
        "Happy Birthday",
        settings.sample_rate,
        settings.target_duration,
    )
    .save(&opt.source, &samples)?;

    info!(
        "{} Hz, {} seconds, 16-bit signed, mono, {} bytes",
        settings.sample_rate,
        settings.target_duration,
        samples.len() * 2
    );
    Ok(())
}
