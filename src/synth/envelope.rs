// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

/// A linear fade-in and fade-out envelope for a tone of known length.
/// The gain rises from zero to one over the first `fade_time` seconds, stays at one,
/// and falls back to zero over the last `fade_time` seconds of the tone.
///
/// Tones of at most [`Fade::MIN_DURATION`] seconds are not faded at all,
/// the gain is one for their whole length.
///
/// # Example
///
/// ```
/// use firmtone::synth::envelope::*;
/// let e = Fade::for_duration(0.5);
/// assert_eq!(e.fade_time(), 0.05);
/// assert_eq!(e.gain(0.0), 0.0);
/// assert_eq!(e.gain(0.025), 0.5);
/// assert_eq!(e.gain(0.25), 1.0);
/// assert_eq!(e.gain(0.5), 0.0);
///
/// // Shorter notes fade over a quarter of their length
/// let e = Fade::for_duration(0.125);
/// assert_eq!(e.fade_time(), 0.03125);
///
/// // and very short notes are not faded
/// let e = Fade::for_duration(0.1);
/// assert_eq!(e.fade_time(), 0.0);
/// assert_eq!(e.gain(0.0), 1.0);
/// assert_eq!(e.gain(0.1), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Length of the faded tone in seconds.
    duration: f64,
    /// Length of each of the two ramps, zero for no fading.
    fade_time: f64,
}

impl Fade {
    /// Longest ramp applied at either end of a tone.
    pub const MAX_FADE: f64 = 0.05;
    /// Tones up to this length keep a constant gain.
    pub const MIN_DURATION: f64 = 0.1;

    pub fn for_duration(duration: f64) -> Self {
        let fade_time = if duration > Self::MIN_DURATION {
            Self::MAX_FADE.min(duration / 4.0)
        } else {
            0.0
        };
        Self {
            duration,
            fade_time,
        }
    }

    pub fn fade_time(&self) -> f64 {
        self.fade_time
    }

    /// Gain of the envelope at `t` seconds after the start of the tone.
    pub fn gain(&self, t: f64) -> f64 {
        if self.fade_time <= 0.0 {
            1.0
        } else if t < self.fade_time {
            // Rise from 0.0 to 1.0
            t / self.fade_time
        } else if t > self.duration - self.fade_time {
            // Drop from 1.0 to 0.0
            (self.duration - t) / self.fade_time
        } else {
            1.0
        }
    }
}
