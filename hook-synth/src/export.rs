//! PCM encoding and WAV export
//!
//! Samples arrive already in 16-bit units, so encoding is just clamping
//! and truncation. Files are always mono, 16-bit signed integer.

use crate::error::{Result, SynthError};
use crate::units::SAMPLE_RATE;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Convert full-scale samples to PCM i16
///
/// Clamps to `[-32768, 32767]` and truncates toward zero.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| s.clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

/// WAV header used for every rendered file
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write PCM samples to a WAV file
///
/// The parent directory must already exist; creating it is the caller's job.
///
/// # Arguments
/// * `samples` - PCM i16 samples
/// * `sample_rate` - Sample rate in Hz
/// * `path` - Output file path
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<()> {
    let encoding = |source| SynthError::Encoding {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(encoding)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(encoding)?;
    }
    writer.finalize().map_err(encoding)?;

    Ok(())
}

/// Encode full-scale samples and write them at [`SAMPLE_RATE`]
///
/// Returns the number of frames written.
pub fn write_samples(samples: &[f64], path: &Path) -> Result<usize> {
    let pcm = to_pcm_i16(samples);
    write_wav(&pcm, SAMPLE_RATE, path)?;
    Ok(pcm.len())
}

/// Read a 16-bit WAV file back into its header and PCM samples
pub fn read_wav(path: &Path) -> Result<(WavSpec, Vec<i16>)> {
    let decoding = |source| SynthError::Decoding {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = WavReader::open(path).map_err(decoding)?;
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(decoding)?;

    Ok((spec, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_to_pcm_i16_truncates() {
        let pcm = to_pcm_i16(&[0.0, 1.9, -1.9, 16383.5, -16383.5]);
        assert_eq!(pcm, vec![0, 1, -1, 16383, -16383]);
    }

    #[test]
    fn test_to_pcm_i16_clamp() {
        let pcm = to_pcm_i16(&[32767.0, 40000.0, -32768.0, -99999.0, f64::INFINITY]);
        assert_eq!(pcm, vec![i16::MAX, i16::MAX, i16::MIN, i16::MIN, i16::MAX]);
    }

    #[test]
    fn test_wav_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tone.wav");
        let samples = vec![0.0, 12000.7, -12000.7, 50000.0, -50000.0, 1.0];

        let frames = write_samples(&samples, &path).unwrap();
        assert_eq!(frames, 6);

        let (spec, decoded) = read_wav(&path).unwrap();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(decoded, to_pcm_i16(&samples));
        assert_eq!(decoded, vec![0, 12000, -12000, 32767, -32768, 1]);
    }

    #[test]
    fn test_wav_layout_is_little_endian() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("two.wav");
        write_wav(&[0x0102, -2], SAMPLE_RATE, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[bytes.len() - 4..], &[0x02, 0x01, 0xFE, 0xFF]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("out.wav");
        let err = write_samples(&[0.0; 10], &path).unwrap_err();
        assert!(matches!(err, SynthError::Encoding { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = read_wav(&dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, SynthError::Decoding { .. }));
    }
}
