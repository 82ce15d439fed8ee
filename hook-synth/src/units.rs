//! Sample-domain constants, duration conversion and parameter checks

use crate::error::{Result, SynthError};

/// Output sample rate for every rendered sound (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

/// Scale applied by generators so samples are expressed in 16-bit PCM units
pub const FULL_SCALE: f64 = 32767.0;

/// Number of samples covering `duration` seconds
///
/// Truncates toward zero. Every generator goes through this so sequences
/// rendered for the same duration always line up index for index.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration) as usize
}

/// Number of samples covering `ms` milliseconds
pub fn ms_to_samples(ms: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * ms / 1000.0) as usize
}

pub(crate) fn check_duration(duration: f64) -> Result<f64> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(SynthError::invalid("duration", duration, "must be a positive number of seconds"))
    }
}

pub(crate) fn check_sample_rate(sample_rate: u32) -> Result<u32> {
    if sample_rate > 0 {
        Ok(sample_rate)
    } else {
        Err(SynthError::invalid("sample rate", 0.0, "must be positive"))
    }
}

pub(crate) fn check_frequency(frequency: f64) -> Result<f64> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(SynthError::invalid("frequency", frequency, "must be a positive number of Hz"))
    }
}

pub(crate) fn check_amplitude(amplitude: f64) -> Result<f64> {
    if amplitude > 0.0 && amplitude <= 1.0 {
        Ok(amplitude)
    } else {
        Err(SynthError::invalid("amplitude", amplitude, "must be in (0, 1]"))
    }
}

/// Validates the common (duration, sample rate, amplitude) triple and
/// returns the sample count
pub(crate) fn check_signal(duration: f64, sample_rate: u32, amplitude: f64) -> Result<usize> {
    let duration = check_duration(duration)?;
    let sample_rate = check_sample_rate(sample_rate)?;
    check_amplitude(amplitude)?;
    Ok(sample_count(duration, sample_rate))
}
