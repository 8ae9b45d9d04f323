// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Sine tones with a click-free envelope.

use std::f64::consts::PI;

use super::envelope::Fade;
use crate::wave;

/// A single sine tone of fixed length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in Hz, zero for silence.
    pub frequency: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Peak amplitude as a fraction of full scale.
    pub amplitude: f64,
}

impl Tone {
    pub fn new(frequency: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            duration,
            amplitude,
        }
    }

    pub fn silence(duration: f64) -> Self {
        Self::new(0.0, duration, 0.0)
    }

    pub fn is_silent(&self) -> bool {
        self.frequency == 0.0
    }

    /// Number of samples this tone occupies at the given sample rate.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        wave::sample_count(sample_rate, self.duration)
    }

    /// Value of the tone at `t` seconds before quantization.
    fn evaluate(&self, envelope: &Fade, t: f64) -> f64 {
        self.amplitude * envelope.gain(t) * (2.0 * PI * self.frequency * t).sin()
    }

    /// Append the samples of this tone to `output`.
    pub fn render_into(&self, sample_rate: u32, output: &mut Vec<i16>) {
        let samples = self.sample_count(sample_rate);
        output.reserve(samples);
        if self.is_silent() {
            output.extend(std::iter::repeat(0).take(samples));
            return;
        }
        let envelope = Fade::for_duration(self.duration);
        output.extend((0..samples).map(|i| {
            let t = i as f64 / sample_rate as f64;
            wave::quantize(self.evaluate(&envelope, t))
        }));
    }

    pub fn render(&self, sample_rate: u32) -> Vec<i16> {
        let mut output = Vec::new();
        self.render_into(sample_rate, &mut output);
        output
    }
}

/// Generate `round(sample_rate * duration)` samples of a sine tone.
///
/// # Examples
///
/// ```
/// use firmtone::synth::tone::generate_tone;
///
/// let tone = generate_tone(261.63, 0.5, 16000, 0.3);
/// assert_eq!(tone.len(), 8000);
/// // faded in from silence
/// assert_eq!(tone[0], 0);
///
/// let rest = generate_tone(0.0, 0.5, 16000, 0.3);
/// assert!(rest.iter().all(|s| *s == 0));
/// ```
pub fn generate_tone(frequency: f64, duration: f64, sample_rate: u32, amplitude: f64) -> Vec<i16> {
    Tone::new(frequency, duration, amplitude).render(sample_rate)
}
