//! Envelope shaping
//!
//! Linear fades for click suppression and an exponential decay that fakes
//! a reverb tail. Every rendered sound goes through a [`Fade`] last.

use crate::error::{Result, SynthError};
use crate::units::ms_to_samples;

/// Exponent granularity used by the drift theme (faster decay)
pub const COARSE_GRANULARITY: f64 = 100.0;

/// Exponent granularity used by the void theme (slower decay)
pub const FINE_GRANULARITY: f64 = 200.0;

/// Linear fade-in / fade-out envelope
///
/// Times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Ramp from silence to full level
    pub fade_in_ms: f64,
    /// Ramp from full level to silence at the end
    pub fade_out_ms: f64,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            fade_in_ms: 50.0,
            fade_out_ms: 200.0,
        }
    }
}

impl Fade {
    /// Create a fade with custom times
    pub fn new(fade_in_ms: f64, fade_out_ms: f64) -> Self {
        Self {
            fade_in_ms,
            fade_out_ms,
        }
    }

    /// Apply the fade to samples (in-place)
    ///
    /// A fade-out window longer than the whole sequence starts before
    /// index 0; those leading positions are skipped, so the first sample
    /// is already partly attenuated.
    pub fn apply(&self, samples: &mut [f64], sample_rate: u32) -> Result<()> {
        for (name, ms) in [("fade-in", self.fade_in_ms), ("fade-out", self.fade_out_ms)] {
            if !(ms.is_finite() && ms >= 0.0) {
                return Err(SynthError::invalid(name, ms, "must be a non-negative number of ms"));
            }
        }

        let fade_in = ms_to_samples(self.fade_in_ms, sample_rate);
        let fade_out = ms_to_samples(self.fade_out_ms, sample_rate);
        let len = samples.len();

        for (i, sample) in samples.iter_mut().take(fade_in).enumerate() {
            *sample *= i as f64 / fade_in as f64;
        }

        if fade_out > 0 {
            // Signed: the window may begin before the first sample
            let start = len as i64 - fade_out as i64;
            for i in start.max(0) as usize..len {
                let factor = 1.0 - (i as i64 - start) as f64 / fade_out as f64;
                samples[i] *= factor;
            }
        }

        Ok(())
    }
}

/// Exponential decay `x[i] * factor^(i / granularity)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    factor: f64,
    granularity: f64,
}

impl Decay {
    /// Create a decay envelope
    ///
    /// `factor` must lie in (0, 1) and `granularity` (how many samples it
    /// takes the exponent to advance by one) must be positive.
    pub fn new(factor: f64, granularity: f64) -> Result<Self> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(SynthError::invalid("decay factor", factor, "must be in (0, 1)"));
        }
        if !(granularity.is_finite() && granularity > 0.0) {
            return Err(SynthError::invalid("decay granularity", granularity, "must be positive"));
        }
        Ok(Self {
            factor,
            granularity,
        })
    }

    /// Decay whose exponent advances every 100 samples
    pub fn coarse(factor: f64) -> Result<Self> {
        Self::new(factor, COARSE_GRANULARITY)
    }

    /// Decay whose exponent advances every 200 samples
    pub fn fine(factor: f64) -> Result<Self> {
        Self::new(factor, FINE_GRANULARITY)
    }

    /// Gain at a given sample index
    pub fn gain(&self, index: usize) -> f64 {
        self.factor.powf(index as f64 / self.granularity)
    }

    /// Apply the decay to samples (in-place)
    pub fn apply(&self, samples: &mut [f64]) {
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= self.gain(i);
        }
    }
}
