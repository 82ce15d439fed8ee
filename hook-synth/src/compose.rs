//! Sample-domain composition
//!
//! Parallel mixing, serial concatenation, silence and offset overlays.
//! Sequences are aligned at index 0; anything past the end of a shorter
//! sequence is treated as silence.

use crate::error::{Result, SynthError};
use crate::units::{check_duration, check_sample_rate, sample_count};

/// Mix multiple signals together
///
/// The output is as long as the longest input. Every input is divided by
/// the total number of inputs, not by the number still sounding at a given
/// index, so the tail of the longest input stays at its mixed level rather
/// than jumping back to full volume.
///
/// The fixed-N normalization is possibly an inherited quirk rather than a
/// deliberate choice. It is kept as-is because every theme's balance was
/// tuned against it.
///
/// # Example
/// ```
/// use hook_synth::mix;
///
/// let a = vec![300.0, 300.0, 300.0];
/// let b = vec![600.0];
/// assert_eq!(mix(&[&a, &b]), vec![450.0, 150.0, 150.0]);
/// ```
pub fn mix(signals: &[&[f64]]) -> Vec<f64> {
    let count = signals.len() as f64;
    let max_len = signals.iter().map(|s| s.len()).max().unwrap_or(0);

    let mut result = vec![0.0f64; max_len];
    for samples in signals {
        for (out, &sample) in result.iter_mut().zip(samples.iter()) {
            *out += sample / count;
        }
    }

    result
}

/// Concatenate multiple signals in order, with no gap or crossfade
pub fn concat(signals: &[&[f64]]) -> Vec<f64> {
    let total_len: usize = signals.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total_len);
    for signal in signals {
        result.extend_from_slice(signal);
    }
    result
}

/// Silence (zero samples) of specified duration
pub fn silence(duration: f64, sample_rate: u32) -> Result<Vec<f64>> {
    let duration = check_duration(duration)?;
    let sample_rate = check_sample_rate(sample_rate)?;
    Ok(vec![0.0; sample_count(duration, sample_rate)])
}

/// Extend a signal with trailing silence up to `len` samples
///
/// Never truncates: a signal already at least `len` long is left alone.
pub fn pad_to(samples: &mut Vec<f64>, len: usize) {
    if samples.len() < len {
        samples.resize(len, 0.0);
    }
}

/// Lay `overlay` over `base` starting at `offset`, averaging the two
///
/// Every overlaid position becomes `(base + overlay) / 2`, including
/// positions where the base is silent. The base is extended with silence
/// if the overlay runs past its end.
pub fn overlay(base: &[f64], overlay: &[f64], offset: usize) -> Vec<f64> {
    let mut result = base.to_vec();
    pad_to(&mut result, offset + overlay.len());
    for (out, &sample) in result[offset..].iter_mut().zip(overlay) {
        *out = (*out + sample) / 2.0;
    }
    result
}

/// Serial builder for sequences assembled piece by piece
///
/// With a declared total length the buffer is allocated once up front and
/// [`SequenceBuilder::finish`] verifies the pieces added up to exactly that
/// length.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    sample_rate: u32,
    samples: Vec<f64>,
    expected_len: Option<usize>,
}

impl SequenceBuilder {
    /// Open-ended builder
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: Vec::new(),
            expected_len: None,
        }
    }

    /// Builder that must end up exactly `len` samples long
    pub fn with_total_len(sample_rate: u32, len: usize) -> Self {
        Self {
            sample_rate,
            samples: Vec::with_capacity(len),
            expected_len: Some(len),
        }
    }

    /// Append a piece
    pub fn push(&mut self, piece: &[f64]) -> Result<&mut Self> {
        if let Some(expected) = self.expected_len {
            let actual = self.samples.len() + piece.len();
            if actual > expected {
                return Err(SynthError::LengthMismatch { expected, actual });
            }
        }
        self.samples.extend_from_slice(piece);
        Ok(self)
    }

    /// Append `duration` seconds of silence
    pub fn push_silence(&mut self, duration: f64) -> Result<&mut Self> {
        let gap = silence(duration, self.sample_rate)?;
        self.push(&gap)
    }

    /// Samples appended so far
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Finish the sequence
    pub fn finish(self) -> Result<Vec<f64>> {
        match self.expected_len {
            Some(expected) if expected != self.samples.len() => Err(SynthError::LengthMismatch {
                expected,
                actual: self.samples.len(),
            }),
            _ => Ok(self.samples),
        }
    }
}
