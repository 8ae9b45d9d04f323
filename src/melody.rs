// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rendering a fixed melody into one buffer of PCM samples.

use log::{debug, info, trace, warn};
use snafu::{OptionExt, Snafu};

use crate::note::NoteTable;
use crate::synth::Tone;
use crate::wave;

/// One entry of a melody.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MelodyNote {
    /// Name of the note in the note table.
    pub note: &'static str,
    /// How long the note is held, in beats.
    pub beats: f64,
}

const fn n(note: &'static str, beats: f64) -> MelodyNote {
    MelodyNote { note, beats }
}

/// "Happy Birthday", in playback order.
pub const HAPPY_BIRTHDAY: &[MelodyNote] = &[
    n("C4", 0.75),
    n("C4", 0.25),
    n("D4", 1.0),
    n("C4", 1.0),
    n("F4", 1.0),
    n("E4", 2.0),
    n("C4", 0.75),
    n("C4", 0.25),
    n("D4", 1.0),
    n("C4", 1.0),
    n("G4", 1.0),
    n("F4", 2.0),
    n("C4", 0.75),
    n("C4", 0.25),
    n("C5", 1.0),
    n("A4", 1.0),
    n("F4", 1.0),
    n("E4", 1.0),
    n("D4", 2.0),
    n("B4", 0.75),
    n("B4", 0.25),
    n("A4", 1.0),
    n("F4", 1.0),
    n("G4", 1.0),
    n("F4", 2.0),
];

/// Converts beats into seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tempo {
    pub beats_per_minute: f64,
}

impl Tempo {
    pub fn new(beats_per_minute: f64) -> Self {
        Self { beats_per_minute }
    }

    /// # Examples
    ///
    /// ```
    /// # use firmtone::melody::Tempo;
    /// assert_eq!(Tempo::new(120.0).seconds(1.0), 0.5);
    /// assert_eq!(Tempo::new(120.0).seconds(0.75), 0.375);
    /// assert_eq!(Tempo::new(60.0).seconds(2.0), 2.0);
    /// ```
    pub fn seconds(&self, beats: f64) -> f64 {
        beats * (60.0 / self.beats_per_minute)
    }
}

/// Everything that determines the rendered audio apart from the melody itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Samples per second of the generated audio.
    pub sample_rate: u32,
    pub tempo: Tempo,
    /// Peak amplitude of every tone as a fraction of full scale.
    pub amplitude: f64,
    /// Exact length of the rendered buffer in seconds.
    pub target_duration: f64,
    /// Silence appended after every note, in seconds.
    pub gap: f64,
}

/// The configuration the firmware expects: 16 kHz, 10 seconds, moderate volume.
impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            tempo: Tempo::new(120.0),
            amplitude: 0.3,
            target_duration: 10.0,
            gap: 0.05,
        }
    }
}

impl RenderSettings {
    pub fn target_samples(&self) -> usize {
        wave::sample_count(self.sample_rate, self.target_duration)
    }
}

/// Possible errors when rendering a melody.
#[derive(Debug, PartialEq, Snafu)]
pub enum RenderError {
    #[snafu(display(
        "Note {:?} at position {} of the melody is not in the note table",
        note,
        position
    ))]
    UnknownNote { note: String, position: usize },
}

/// Render `melody` into exactly `settings.target_samples()` samples.
///
/// Every note is followed by `settings.gap` seconds of silence, including the last one.
/// The result is cut or padded with silence at the end to reach the target length.
pub fn render_melody(
    melody: &[MelodyNote],
    notes: &NoteTable,
    settings: &RenderSettings,
) -> Result<Vec<i16>, RenderError> {
    let tones = melody_tones(melody, notes, settings)?;

    let mut samples = Vec::with_capacity(settings.target_samples());
    for tone in &tones {
        trace!(
            "{:7}: {:.2} Hz for {:.3}s",
            samples.len(),
            tone.frequency,
            tone.duration
        );
        tone.render_into(settings.sample_rate, &mut samples);
        Tone::silence(settings.gap).render_into(settings.sample_rate, &mut samples);
    }

    info!(
        "rendered {} notes at {} bpm into {} samples ({:.2} seconds)",
        tones.len(),
        settings.tempo.beats_per_minute,
        samples.len(),
        wave::duration(settings.sample_rate, samples.len())
    );
    fit_length(&mut samples, settings.target_samples());
    Ok(samples)
}

/// Resolve every note of the melody before any audio is generated.
fn melody_tones(
    melody: &[MelodyNote],
    notes: &NoteTable,
    settings: &RenderSettings,
) -> Result<Vec<Tone>, RenderError> {
    melody
        .iter()
        .enumerate()
        .map(|(position, entry)| -> Result<Tone, RenderError> {
            let frequency = notes.frequency(entry.note).context(UnknownNote {
                note: entry.note,
                position,
            })?;
            let duration = settings.tempo.seconds(entry.beats);
            Ok(Tone::new(frequency, duration, settings.amplitude))
        })
        .collect()
}

/// Cut or pad `samples` with silence at the end so that it holds exactly `target` samples.
fn fit_length(samples: &mut Vec<i16>, target: usize) {
    if samples.len() > target {
        let audible_cut = samples[target..].iter().any(|s| *s != 0);
        if audible_cut {
            warn!(
                "melody is {} samples longer than the target of {} samples, cutting off the end",
                samples.len() - target,
                target
            );
        } else {
            debug!("trimming {} silent samples", samples.len() - target);
        }
    } else if samples.len() < target {
        debug!("padding with {} silent samples", target - samples.len());
    }
    samples.resize(target, 0);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::note::{REST, SCALE};

    #[test]
    fn happy_birthday_has_exact_length() {
        let settings = RenderSettings::default();
        let samples = render_melody(HAPPY_BIRTHDAY, &SCALE, &settings).unwrap();
        assert_eq!(samples.len(), 160000);
    }

    #[test]
    fn happy_birthday_is_cut_short() {
        // 25 beats plus 25 gaps take 13.75 seconds
        let settings = RenderSettings::default();
        let tones = melody_tones(HAPPY_BIRTHDAY, &SCALE, &settings).unwrap();
        let natural: usize = tones
            .iter()
            .map(|t| t.sample_count(16000) + wave::sample_count(16000, settings.gap))
            .sum();
        assert_eq!(natural, 220000);

        let samples = render_melody(HAPPY_BIRTHDAY, &SCALE, &settings).unwrap();
        assert!(samples.iter().rev().take(100).any(|s| *s != 0));
    }

    #[test]
    fn short_melody_is_padded() {
        let settings = RenderSettings {
            target_duration: 1.0,
            ..RenderSettings::default()
        };
        let melody = [n("A4", 0.5)];
        let samples = render_melody(&melody, &SCALE, &settings).unwrap();
        assert_eq!(samples.len(), 16000);
        // tone, gap and padding
        assert!(samples[..4000].iter().any(|s| *s != 0));
        assert!(samples[4000..].iter().all(|s| *s == 0));
    }

    #[test]
    fn gap_follows_last_note() {
        // Exactly one note plus its gap fits the target.
        let settings = RenderSettings {
            target_duration: 0.3,
            ..RenderSettings::default()
        };
        let melody = [n("C5", 0.5)];
        let samples = render_melody(&melody, &SCALE, &settings).unwrap();
        assert_eq!(samples.len(), 4800);
        assert_eq!(&samples[..4000], &Tone::new(523.25, 0.25, 0.3).render(16000)[..]);
        assert!(samples[4000..].iter().all(|s| *s == 0));
    }

    #[test]
    fn rests_are_silent() {
        let settings = RenderSettings {
            target_duration: 2.0,
            ..RenderSettings::default()
        };
        let melody = [n(REST, 1.0), n(REST, 0.25), n(REST, 2.5)];
        let samples = render_melody(&melody, &SCALE, &settings).unwrap();
        assert_eq!(samples.len(), 32000);
        assert!(samples.iter().all(|s| *s == 0));
    }

    #[test]
    fn unknown_note_is_an_error() {
        let melody = [n("C4", 1.0), n("H4", 1.0), n("X9", 1.0)];
        let err = render_melody(&melody, &SCALE, &RenderSettings::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownNote {
                note: "H4".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn melody_uses_known_notes() {
        assert!(HAPPY_BIRTHDAY.iter().all(|entry| SCALE.contains(entry.note)));
        let beats: f64 = HAPPY_BIRTHDAY.iter().map(|entry| entry.beats).sum();
        assert_eq!(beats, 25.0);
    }
}
