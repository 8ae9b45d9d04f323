// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// Largest magnitude a normalized sample is scaled to.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Number of samples covering `seconds` at the given sample rate.
///
/// # Examples
///
/// ```
/// # use firmtone::wave::*;
/// assert_eq!(sample_count(16000, 0.5), 8000);
/// assert_eq!(sample_count(16000, 0.0), 0);
/// assert_eq!(sample_count(44100, 0.01), 441);
/// ```
pub fn sample_count(sample_rate: u32, seconds: f64) -> usize {
    (sample_rate as f64 * seconds).round() as usize
}

/// Length in seconds of a buffer with `samples` samples.
pub fn duration(sample_rate: u32, samples: usize) -> f64 {
    samples as f64 / sample_rate as f64
}

/// Convert a normalized sample to signed 16-bit PCM.
///
/// The scaled value is truncated toward zero and clamped to the `i16` range,
/// so overdriven input saturates instead of wrapping around.
///
/// # Examples
///
/// ```
/// # use firmtone::wave::*;
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-0.5), -16383);
/// assert_eq!(quantize(3.0), 32767);
/// assert_eq!(quantize(-3.0), -32768);
/// ```
pub fn quantize(sample: f64) -> i16 {
    let scaled = (sample * FULL_SCALE) as i64;
    scaled.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

/// Iterate over the little-endian bytes of 16-bit samples, in sample order.
pub fn le_bytes(samples: &[i16]) -> impl Iterator<Item = u8> + '_ {
    samples.iter().flat_map(|sample| sample.to_le_bytes().to_vec())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantize_truncates_toward_zero() {
        // 0.3 * 32767 = 9830.1
        assert_eq!(quantize(0.3), 9830);
        assert_eq!(quantize(-0.3), -9830);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn le_byte_order() {
        let bytes: Vec<u8> = le_bytes(&[0x1234, -1, i16::MIN]).collect();
        assert_eq!(bytes, vec![0x34, 0x12, 0xff, 0xff, 0x00, 0x80]);
    }

    #[test]
    fn duration_of_count() {
        assert_eq!(duration(16000, 160000), 10.0);
        assert_eq!(duration(16000, sample_count(16000, 0.05)), 0.05);
    }
}
