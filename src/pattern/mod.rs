// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Short sample patterns for drawing shapes on an oscilloscope.
//!
//! The firmware loops one pattern at a time through the I2S output,
//! so every value is a raw unsigned 16-bit DAC level.

pub mod sets;
pub mod shapes;

/// A named sequence of DAC levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub samples: Vec<u16>,
}

/// Summary of the levels in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternStats {
    pub len: usize,
    pub min: u16,
    pub max: u16,
    /// Arithmetic mean, rounded down.
    pub mean: u16,
}

impl Pattern {
    pub fn new<S: Into<String>>(name: S, samples: Vec<u16>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Returns `None` for an empty pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use firmtone::pattern::*;
    ///
    /// let stats = Pattern::new("ramp", vec![0, 1, 2, 4]).stats().unwrap();
    /// assert_eq!((stats.min, stats.max, stats.mean), (0, 4, 1));
    /// assert_eq!(Pattern::new("empty", vec![]).stats(), None);
    /// ```
    pub fn stats(&self) -> Option<PatternStats> {
        let min = *self.samples.iter().min()?;
        let max = *self.samples.iter().max()?;
        let sum: u64 = self.samples.iter().map(|s| *s as u64).sum();
        Some(PatternStats {
            len: self.samples.len(),
            min,
            max,
            mean: (sum / self.samples.len() as u64) as u16,
        })
    }

    /// The first `count` levels as hex literals, for showing in the log.
    pub fn preview(&self, count: usize) -> String {
        let values: Vec<String> = self
            .samples
            .iter()
            .take(count)
            .map(|s| format!("0x{:04x}", s))
            .collect();
        values.join(", ")
    }

    /// Name of the exported constant, e.g. `ADDING_ROOF_PATTERN`.
    pub fn const_name(&self) -> String {
        format!("{}_PATTERN", self.name.to_uppercase())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preview_is_short() {
        let p = Pattern::new("Trigger_Test", vec![0x8000; 64]);
        assert_eq!(p.preview(2), "0x8000, 0x8000");
        assert_eq!(Pattern::new("x", vec![0xab]).preview(8), "0x00ab");
    }

    #[test]
    fn const_names() {
        assert_eq!(Pattern::new("Happy_Ending", vec![]).const_name(), "HAPPY_ENDING_PATTERN");
    }

    #[test]
    fn mean_does_not_overflow() {
        let stats = Pattern::new("high", vec![0xffff; 1000]).stats().unwrap();
        assert_eq!(stats.mean, 0xffff);
        assert_eq!(stats.len, 1000);
    }
}
