// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Generators for the individual pattern shapes.
//!
//! Every generator returns unsigned 16-bit DAC values. Fractional levels are
//! truncated toward zero and clamped to the range of `u16`.

use std::f64::consts::PI;

use log::warn;

/// Truncate a level to an integer DAC value, saturating at both ends of the range.
fn level(value: f64) -> u16 {
    (value as i64).clamp(0, u16::MAX as i64) as u16
}

/// Level at `fraction` of `amplitude`.
fn scaled(fraction: f64, amplitude: u16) -> u16 {
    level(fraction * amplitude as f64)
}

/// One pulse: high for the first `duty_cycle` fraction of the samples, zero after.
///
/// # Examples
///
/// ```
/// # use firmtone::pattern::shapes::square;
/// assert_eq!(square(4, 0x8000, 0.5), vec![0x8000, 0x8000, 0, 0]);
/// assert_eq!(square(10, 0x100, 0.3), vec![0x100, 0x100, 0x100, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn square(samples: usize, amplitude: u16, duty_cycle: f64) -> Vec<u16> {
    let high_samples = (samples as f64 * duty_cycle) as usize;
    (0..samples)
        .map(|i| if i < high_samples { amplitude } else { 0 })
        .collect()
}

/// A single ramp up to `amplitude` over the first half and back down over the second.
pub fn triangle(samples: usize, amplitude: u16) -> Vec<u16> {
    let half = (samples / 2).max(1) as f64;
    (0..samples)
        .map(|i| {
            let position = if (i as f64) < half {
                i as f64
            } else {
                (samples - i) as f64
            };
            scaled(position / half, amplitude)
        })
        .collect()
}

/// A single ramp from zero towards `amplitude`.
///
/// # Examples
///
/// ```
/// # use firmtone::pattern::shapes::sawtooth;
/// assert_eq!(sawtooth(4, 0x8000), vec![0x0000, 0x2000, 0x4000, 0x6000]);
/// ```
pub fn sawtooth(samples: usize, amplitude: u16) -> Vec<u16> {
    (0..samples)
        .map(|i| scaled(i as f64 / samples as f64, amplitude))
        .collect()
}

/// `cycles` periods of a sine oscillating around `amplitude`, between zero and twice `amplitude`.
pub fn sine(samples: usize, amplitude: u16, cycles: u32) -> Vec<u16> {
    let amplitude = amplitude as f64;
    (0..samples)
        .map(|i| {
            let angle = (i as f64 / samples as f64) * 2.0 * PI * cycles as f64;
            level(amplitude + amplitude * angle.sin())
        })
        .collect()
}

/// `steps` evenly spaced levels from zero to `amplitude`, each held for `samples / steps` samples.
/// Samples left over by the division stay at `amplitude`.
///
/// With fewer than two steps there is only the top level.
///
/// # Examples
///
/// ```
/// # use firmtone::pattern::shapes::staircase;
/// assert_eq!(staircase(9, 3, 0x1000), vec![0, 0, 0, 0x800, 0x800, 0x800, 0x1000, 0x1000, 0x1000]);
/// assert_eq!(staircase(5, 2, 0x1000), vec![0, 0, 0x1000, 0x1000, 0x1000]);
/// ```
pub fn staircase(samples: usize, steps: usize, amplitude: u16) -> Vec<u16> {
    if steps < 2 {
        return vec![amplitude; samples];
    }
    let samples_per_step = samples / steps;
    let mut pattern = Vec::with_capacity(samples);
    for step in 0..steps {
        let step_value = scaled(step as f64 / (steps - 1) as f64, amplitude);
        pattern.extend(std::iter::repeat(step_value).take(samples_per_step));
    }
    pattern.resize(samples, amplitude);
    pattern
}

/// The vertical component of the heart curve, traced twice.
pub fn heart(samples: usize, amplitude: u16) -> Vec<u16> {
    (0..samples)
        .map(|i| {
            let t = (i as f64 / samples as f64) * 4.0 * PI;
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            // y lies within [-21, 21]
            scaled((y + 21.0) / 42.0, amplitude)
        })
        .collect()
}

/// The outline of a house in eight sections:
/// foundation, left wall, roof, right wall, foundation, door, window, foundation.
pub fn house(samples: usize, amplitude: u16) -> Vec<u16> {
    let sections = samples / 8;
    let half = (sections / 2).max(1);
    let ground = scaled(0.2, amplitude);
    let mut pattern = Vec::with_capacity(sections * 8);

    // Foundation
    pattern.extend(std::iter::repeat(ground).take(sections));
    // Left wall rising
    for i in 0..sections {
        let progress = i as f64 / sections as f64;
        pattern.push(scaled(0.2 + 0.4 * progress, amplitude));
    }
    // Roof peak
    for i in 0..sections {
        let height = if i < half {
            0.6 + 0.4 * (i as f64 / half as f64)
        } else {
            1.0 - 0.4 * ((i - half) as f64 / half as f64)
        };
        pattern.push(scaled(height, amplitude));
    }
    // Right wall falling
    for i in 0..sections {
        let progress = i as f64 / sections as f64;
        pattern.push(scaled(0.6 - 0.4 * progress, amplitude));
    }
    // Foundation again
    pattern.extend(std::iter::repeat(ground).take(sections));
    // Door
    for i in 0..sections {
        let outside = i < sections / 3 || i > 2 * sections / 3;
        pattern.push(if outside { ground } else { scaled(0.35, amplitude) });
    }
    // Window
    for i in 0..sections {
        let outside = i < sections / 4 || i > 3 * sections / 4;
        pattern.push(if outside { ground } else { scaled(0.5, amplitude) });
    }
    // Final foundation
    pattern.extend(std::iter::repeat(ground).take(sections));

    pattern.truncate(samples);
    pattern
}

/// Spell out `text` in four quarters of the pattern.
///
/// Only `"HI"` has a shape so far, any other text yields an empty pattern.
pub fn text(text: &str, samples: usize, amplitude: u16) -> Vec<u16> {
    if text != "HI" {
        warn!("no pattern for text {:?}", text);
        return Vec::new();
    }
    let quarter = samples / 4;
    let bar = scaled(0.8, amplitude);
    let mut pattern = Vec::with_capacity(quarter * 4);

    // Left bar of the H
    pattern.extend(std::iter::repeat(bar).take(quarter));
    // Crossbar of the H
    for i in 0..quarter {
        let progress = i as f64 / quarter as f64;
        pattern.push(scaled(0.4 + 0.4 * progress, amplitude));
    }
    // Right bar of the H
    pattern.extend(std::iter::repeat(bar).take(quarter));
    // Space, then the I
    for i in 0..quarter {
        let space = i < quarter / 4 || i > 3 * quarter / 4;
        let height = if space { 0.1 } else { 0.7 };
        pattern.push(scaled(height, amplitude));
    }
    pattern
}

/// A sine ripple of `0x1000` around the middle of the range, advancing half a radian per sample.
pub fn ripple(samples: usize) -> Vec<u16> {
    (0..samples)
        .map(|i| {
            let offset = (0x1000 as f64 * (i as f64 * 0.5).sin()) as i64;
            level((0x4000 + offset) as f64)
        })
        .collect()
}

/// Alternating low and high blocks of `block` samples each, starting low.
pub fn trigger(blocks: usize, block: usize, high: u16) -> Vec<u16> {
    (0..blocks * block)
        .map(|i| if (i / block) % 2 == 0 { 0 } else { high })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn square_waves() {
        let s = square(64, 0x8000, 0.5);
        assert_eq!(s.len(), 64);
        assert!(s[..32].iter().all(|v| *v == 0x8000));
        assert!(s[32..].iter().all(|v| *v == 0));

        // 64 * 0.3 = 19.2
        let s = square(64, 0x8000, 0.3);
        assert_eq!(s.iter().filter(|v| **v == 0x8000).count(), 19);
    }

    #[test]
    fn triangle_peaks_in_the_middle() {
        let t = triangle(64, 0x8000);
        assert_eq!(t[0], 0);
        assert_eq!(t[1], 0x0400);
        assert_eq!(t[31], 0x7c00);
        assert_eq!(t[32], 0x8000);
        assert_eq!(t[63], 0x0400);
        assert_eq!(triangle(1, 0x8000), vec![0]);
    }

    #[test]
    fn sine_stays_in_range() {
        let s = sine(64, 0x4000, 2);
        assert_eq!(s[0], 0x4000);
        assert_eq!(s[8], 0x8000);
        assert!(s[24] < 0x10);
        // an amplitude above half the range saturates
        let s = sine(64, 0xc000, 1);
        assert_eq!(*s.iter().max().unwrap(), 0xffff);
    }

    #[test]
    fn staircase_levels() {
        let s = staircase(64, 8, 0x8000);
        assert_eq!(s.len(), 64);
        assert_eq!(s[0], 0);
        // 1/7 * 0x8000 = 4681.14
        assert_eq!(s[8], 4681);
        assert_eq!(s[63], 0x8000);

        // 48 / 6 divides evenly, 64 / 6 leaves 4 samples at the top
        assert_eq!(staircase(48, 6, 0x8000).len(), 48);
        let s = staircase(64, 6, 0x8000);
        assert!(s[60..].iter().all(|v| *v == 0x8000));

        assert_eq!(staircase(4, 1, 0x100), vec![0x100; 4]);
        assert_eq!(staircase(3, 8, 0x100), vec![0x100; 3]);
    }

    #[test]
    fn heart_starts_above_middle() {
        let h = heart(64, 0x8000);
        assert_eq!(h.len(), 64);
        // y = 13 - 5 - 2 - 1 at t = 0
        assert_eq!(h[0], 20284);
        // traced twice
        assert_eq!(h[0], h[32]);
    }

    #[test]
    fn house_outline() {
        let h = house(64, 0x8000);
        assert_eq!(h.len(), 64);
        assert_eq!(h[0], 6553);
        assert_eq!(h[8], 6553);
        assert_eq!(h[16], 19660);
        assert_eq!(h[20], 0x8000);
        assert_eq!(*h.iter().max().unwrap(), 0x8000);
        // door in the middle of section six
        assert_eq!(h[40], 6553);
        assert_eq!(h[43], 11468);
        // window in the middle of section seven
        assert_eq!(h[52], 0x4000);
        assert_eq!(h[63], 6553);

        // sections are whole, the remainder is dropped
        assert_eq!(house(70, 0x8000).len(), 64);
        assert!(house(7, 0x8000).is_empty());
    }

    #[test]
    fn text_patterns() {
        let hi = text("HI", 64, 0x8000);
        assert_eq!(hi.len(), 64);
        assert_eq!(hi[0], 26214);
        assert_eq!(hi[16], 13107);
        assert_eq!(hi[48], 3276);
        assert_eq!(hi[56], 22937);
        assert!(text("HELLO", 64, 0x8000).is_empty());
    }

    #[test]
    fn ripple_and_trigger() {
        let r = ripple(64);
        assert_eq!(r[0], 0x4000);
        // sin(3.5) < 0
        assert!(r[7] < 0x4000);

        let t = trigger(4, 16, 0x8000);
        assert_eq!(t.len(), 64);
        assert_eq!(t[15], 0);
        assert_eq!(t[16], 0x8000);
        assert_eq!(t[32], 0);
        assert_eq!(t[63], 0x8000);
    }
}
