// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of the notes a melody can refer to.

/// Name of the silence marker. It maps to a frequency of zero.
pub const REST: &str = "REST";

/// A fixed mapping from note names to frequencies in Hz.
///
/// A frequency of zero denotes silence. The table is defined once and never changes,
/// which is why it only borrows static data.
#[derive(Copy, Clone, Debug)]
pub struct NoteTable {
    entries: &'static [(&'static str, f64)],
}

/// The notes between C4 and C5 in the natural scale, plus the silence marker.
pub const SCALE: NoteTable = NoteTable::new(&[
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.00),
    ("A4", 440.00),
    ("B4", 493.88),
    ("C5", 523.25),
    (REST, 0.0),
]);

impl NoteTable {
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    /// Look up the frequency of a note by its exact name.
    ///
    /// # Examples
    ///
    /// ```
    /// use firmtone::note::*;
    ///
    /// assert_eq!(SCALE.frequency("A4"), Some(440.0));
    /// assert_eq!(SCALE.frequency(REST), Some(0.0));
    /// assert_eq!(SCALE.frequency("a4"), None);
    /// ```
    pub fn frequency(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, frequency)| *frequency)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frequency(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        SCALE
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scale_is_ascending() {
        let pitched: Vec<f64> = SCALE
            .names()
            .filter(|name| *name != REST)
            .filter_map(|name| SCALE.frequency(name))
            .collect();
        assert_eq!(pitched.len(), 8);
        assert!(pitched.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn octave_doubles() {
        let c4 = SCALE.frequency("C4").unwrap();
        let c5 = SCALE.frequency("C5").unwrap();
        assert!((c5 / c4 - 2.0).abs() < 1e-3);
    }

    #[test]
    fn unknown_names() {
        assert!(!SCALE.contains("H4"));
        assert!(!SCALE.contains("rest"));
        assert!(!SCALE.contains(""));
    }
}
