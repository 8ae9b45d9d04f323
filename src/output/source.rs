// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rust source files embedding PCM samples as a byte array.
//!
//! The layout is consumed verbatim by the firmware build, so it must not change:
//! lowercase `0x%02x` literals, 16 per row, no trailing comma after the last row.

use std::io::{self, Write};
use std::path::Path;

use log::info;

use super::ExportError;
use crate::wave;

/// Number of byte literals on each row of the table.
pub const BYTES_PER_ROW: usize = 16;

/// Names and metadata of an exported audio array.
#[derive(Debug, Clone)]
pub struct SourceArray<'a> {
    /// Name of the `&[u8]` constant holding the samples.
    pub name: &'a str,
    /// Free text for the first comment line.
    pub description: String,
    pub sample_rate: u32,
    /// Nominal length of the audio in seconds.
    pub duration: f64,
}

impl<'a> SourceArray<'a> {
    /// An array described as `<title> audio data - <rate>kHz, 16-bit, mono, <duration> seconds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use firmtone::output::source::SourceArray;
    ///
    /// let array = SourceArray::mono16("HAPPY_BIRTHDAY_AUDIO", "Happy Birthday", 16000, 10.0);
    /// assert_eq!(
    ///     array.description,
    ///     "Happy Birthday audio data - 16kHz, 16-bit, mono, 10 seconds"
    /// );
    /// ```
    pub fn mono16(name: &'a str, title: &str, sample_rate: u32, duration: f64) -> Self {
        let description = format!(
            "{} audio data - {}kHz, 16-bit, mono, {} seconds",
            title,
            sample_rate / 1000,
            duration
        );
        Self {
            name,
            description,
            sample_rate,
            duration,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, samples: &[i16]) -> io::Result<()> {
        writeln!(out, "// {}", self.description)?;
        writeln!(out, "// Generated automatically - do not edit")?;
        writeln!(out)?;
        writeln!(out, "#[allow(dead_code)]")?;
        writeln!(out, "pub const {}: &[u8] = &[", self.name)?;
        write_byte_table(out, &wave::le_bytes(samples).collect::<Vec<_>>())?;
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(out, "pub const SAMPLE_RATE: u32 = {};", self.sample_rate)?;
        // Debug formatting keeps the decimal point of whole numbers
        writeln!(out, "pub const AUDIO_LENGTH_SECONDS: f32 = {:?};", self.duration)?;
        writeln!(out, "pub const AUDIO_SAMPLES: usize = {};", samples.len())?;
        Ok(())
    }

    pub fn save(&self, path: &Path, samples: &[i16]) -> Result<(), ExportError> {
        super::write_file(path, |out| self.write(out, samples))?;
        info!(
            "generated Rust audio data {} ({} bytes)",
            path.display(),
            samples.len() * 2
        );
        Ok(())
    }
}

fn write_byte_table<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    let rows = bytes.chunks(BYTES_PER_ROW);
    let last = rows.len().saturating_sub(1);
    for (index, row) in rows.enumerate() {
        let literals: Vec<String> = row.iter().map(|b| format!("0x{:02x}", b)).collect();
        write!(out, "    {}", literals.join(", "))?;
        if index < last {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
