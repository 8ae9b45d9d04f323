// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rust source for patterns, ready to be pasted into the firmware.

use std::io::{self, Write};
use std::path::Path;

use log::info;

use super::ExportError;
use crate::pattern::Pattern;

/// Number of values on each row of a pattern array.
pub const VALUES_PER_ROW: usize = 8;

/// A `&[u16]` constant holding `samples`.
///
/// # Examples
///
/// ```
/// use firmtone::output::pattern::pattern_array;
///
/// assert_eq!(
///     pattern_array("TINY", &[0x8000, 0]),
///     "const TINY: &[u16] = &[\n    0x8000, 0x0000\n];\n"
/// );
/// ```
pub fn pattern_array(name: &str, samples: &[u16]) -> String {
    let mut code = format!("const {}: &[u16] = &[\n", name);
    let last = samples.len().saturating_sub(1);
    for (row_index, row) in samples.chunks(VALUES_PER_ROW).enumerate() {
        code.push_str("    ");
        for (column, value) in row.iter().enumerate() {
            code.push_str(&format!("0x{:04x}", value));
            if row_index * VALUES_PER_ROW + column < last {
                code.push_str(", ");
            }
        }
        code.push('\n');
    }
    code.push_str("];\n");
    code
}

/// All patterns of the story, followed by tables listing the patterns and their names in order.
pub fn write_story<W: Write>(out: &mut W, patterns: &[Pattern]) -> io::Result<()> {
    writeln!(out, "// Visual Story Patterns for ESP32 I2S Oscilloscope Display")?;
    writeln!(out)?;
    for pattern in patterns {
        write!(out, "{}", pattern_array(&pattern.const_name(), &pattern.samples))?;
        writeln!(out)?;
    }

    writeln!(out, "const STORY_PATTERNS: &[&[u16]] = &[")?;
    for pattern in patterns {
        writeln!(out, "    &{},", pattern.const_name())?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "const STORY_NAMES: &[&str] = &[")?;
    for pattern in patterns {
        writeln!(out, "    {:?},", pattern.name)?;
    }
    writeln!(out, "];")?;
    Ok(())
}

pub fn save_story(path: &Path, patterns: &[Pattern]) -> Result<(), ExportError> {
    super::write_file(path, |out| write_story(out, patterns))?;
    info!(
        "generated {} with {} patterns",
        path.display(),
        patterns.len()
    );
    Ok(())
}
