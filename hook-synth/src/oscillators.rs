//! Audio oscillators and noise
//!
//! Basic waveform generation. All output is in full-scale PCM units.

use crate::error::Result;
use crate::units::{check_frequency, check_signal, FULL_SCALE};
use rand::Rng;
use std::f64::consts::PI;

/// Waveform types for the basic oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine wave
    Sine,
    /// Square wave - hollow, retro beep (only ever +/- amplitude)
    Square,
}

/// Generate oscillator samples for a given waveform
///
/// # Arguments
/// * `waveform` - The type of waveform to generate
/// * `frequency` - Frequency in Hz (non-integer multipliers are fine for detuning)
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak level in (0, 1]
pub fn oscillator(
    waveform: Waveform,
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<Vec<f64>> {
    let num_samples = check_signal(duration, sample_rate, amplitude)?;
    let frequency = check_frequency(frequency)?;

    let omega = 2.0 * PI * frequency / sample_rate as f64;

    let samples = (0..num_samples)
        .map(|i| {
            let value = (omega * i as f64).sin();
            let value = match waveform {
                Waveform::Sine => value,
                // Zero crossings fall on the negative side
                Waveform::Square => {
                    if value > 0.0 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };
            amplitude * value * FULL_SCALE
        })
        .collect();

    Ok(samples)
}

/// Generate white noise samples
///
/// Each sample is drawn independently and uniformly from
/// `[-amplitude, amplitude]`; use a low-pass filter to add correlation.
pub fn noise<R: Rng + ?Sized>(
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let num_samples = check_signal(duration, sample_rate, amplitude)?;

    let samples = (0..num_samples)
        .map(|_| rng.random_range(-amplitude..=amplitude) * FULL_SCALE)
        .collect();

    Ok(samples)
}
