//! Audio filters
//!
//! A single-pole smoothing low-pass, used to turn white noise into
//! water and wind textures.

use crate::error::{Result, SynthError};

/// Simple one-pole low-pass filter state
struct OnePoleFilter {
    z1: f64,
}

impl OnePoleFilter {
    fn new() -> Self {
        Self { z1: 0.0 }
    }

    /// `y[i] = y[i-1] + k * (x[i] - y[i-1])`
    fn process(&mut self, input: f64, k: f64) -> f64 {
        self.z1 += k * (input - self.z1);
        self.z1
    }
}

/// Apply a one-pole low-pass to samples (in-place)
///
/// `cutoff_ratio` is the smoothing coefficient in (0, 1]: 1.0 passes the
/// input through unchanged, smaller values smooth harder. The filter
/// always starts from zero history.
///
/// # Arguments
/// * `samples` - Audio samples to filter (modified in-place)
/// * `cutoff_ratio` - Smoothing coefficient in (0, 1]
pub fn low_pass_smooth(samples: &mut [f64], cutoff_ratio: f64) -> Result<()> {
    if !(cutoff_ratio > 0.0 && cutoff_ratio <= 1.0) {
        return Err(SynthError::invalid(
            "cutoff ratio",
            cutoff_ratio,
            "must be in (0, 1]",
        ));
    }

    let mut filter = OnePoleFilter::new();
    for sample in samples.iter_mut() {
        *sample = filter.process(*sample, cutoff_ratio);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillators::noise;
    use crate::units::SAMPLE_RATE;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_first_sample_scaled_by_ratio() {
        let mut samples = vec![1000.0, 0.0, 0.0];
        low_pass_smooth(&mut samples, 0.1).unwrap();
        assert!((samples[0] - 100.0).abs() < 1e-9);
        assert!((samples[1] - 90.0).abs() < 1e-9);
        assert!((samples[2] - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_input_never_overshoots() {
        let mut samples = vec![-5000.0; 2000];
        low_pass_smooth(&mut samples, 0.15).unwrap();
        assert!(samples.iter().all(|&s| s <= 0.0 && s >= -5000.0));
        // Monotone approach toward the input level
        assert!(samples.windows(2).all(|w| w[1].abs() >= w[0].abs()));
        assert!((samples[1999] + 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_unity_ratio_passes_through() {
        let original = vec![3.0, -2.0, 7.5, 0.0];
        let mut samples = original.clone();
        low_pass_smooth(&mut samples, 1.0).unwrap();
        assert_eq!(samples, original);
    }

    #[test]
    fn test_smooths_noise() {
        let mut rng = Pcg64::seed_from_u64(2024);
        let original = noise(0.2, SAMPLE_RATE, 0.25, &mut rng).unwrap();
        let mut filtered = original.clone();
        low_pass_smooth(&mut filtered, 0.12).unwrap();

        let roughness = |s: &[f64]| s.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>();
        assert_eq!(filtered.len(), original.len());
        assert!(roughness(&filtered) < roughness(&original) * 0.5);
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let mut samples = vec![1.0; 4];
        assert!(low_pass_smooth(&mut samples, 0.0).is_err());
        assert!(low_pass_smooth(&mut samples, 1.5).is_err());
        assert!(low_pass_smooth(&mut samples, f64::NAN).is_err());
        assert_eq!(samples, vec![1.0; 4]);
    }

    #[test]
    fn test_filter_empty() {
        let mut samples: Vec<f64> = vec![];
        low_pass_smooth(&mut samples, 0.1).unwrap();
        assert!(samples.is_empty());
    }
}
