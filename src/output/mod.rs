// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing rendered samples and patterns to disk.

pub mod pattern;
pub mod source;
pub mod wav;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use snafu::{ResultExt, Snafu};

/// Possible errors when exporting to a file.
#[derive(Debug, Snafu)]
pub enum ExportError {
    #[snafu(display("Could not write {}: {}", path.display(), source))]
    Io { path: PathBuf, source: io::Error },
    #[snafu(display("Could not write WAV file {}: {}", path.display(), source))]
    Wav {
        path: PathBuf,
        source: hound::Error,
    },
}

/// Create `path` and let `write` fill it through a buffered writer.
fn write_file<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    debug!("writing {}", path.display());
    let file = File::create(path).context(Io { path })?;
    let mut out = BufWriter::new(file);
    write(&mut out)
        .and_then(|_| out.flush())
        .context(Io { path })
}
