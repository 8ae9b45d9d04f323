// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Mono 16-bit PCM WAV files.

use std::io::{Seek, Write};
use std::path::Path;

use log::info;
use snafu::ResultExt;

use super::ExportError;

/// Format of the written files: one channel of signed 16-bit integers.
pub fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode `samples` unchanged into a WAV container.
pub fn write_wav<W: Write + Seek>(
    writer: W,
    samples: &[i16],
    sample_rate: u32,
) -> hound::Result<()> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()
}

pub fn save_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).context(super::Io { path })?;
    write_wav(std::io::BufWriter::new(file), samples, sample_rate)
        .context(super::Wav { path })?;
    info!(
        "saved WAV file {} ({} samples at {} Hz)",
        path.display(),
        samples.len(),
        sample_rate
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn encode(samples: &[i16], sample_rate: u32) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        write_wav(&mut cursor, samples, sample_rate).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn decodes_to_same_samples() {
        let samples: Vec<i16> = vec![0, 1, -1, 12345, -12345, i16::MAX, i16::MIN, 0];
        let bytes = encode(&samples, 16000);

        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec(), wav_spec(16000));
        let decoded: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn header_and_data_layout() {
        let bytes = encode(&[0x0102, -2], 16000);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // the data chunk holds the little-endian samples at the end
        let data = &bytes[bytes.len() - 4..];
        assert_eq!(data, &[0x02, 0x01, 0xfe, 0xff]);
    }

    #[test]
    fn rendered_melody_round_trip() {
        use crate::melody::{render_melody, RenderSettings, HAPPY_BIRTHDAY};
        use crate::note::SCALE;

        let settings = RenderSettings::default();
        let samples = render_melody(HAPPY_BIRTHDAY, &SCALE, &settings).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("happy_birthday_16khz.wav");
        save_wav(&path, &samples, settings.sample_rate).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.duration(), 160000);
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        match save_wav(&path, &[0, 1, 2], 16000) {
            Err(ExportError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
