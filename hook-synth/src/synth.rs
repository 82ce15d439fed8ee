//! High-level synthesizer API
//!
//! Wraps the basic oscillators with a fixed sample rate and adds the
//! composite textures the notification themes are built from: detuned
//! drones, decaying particle bursts, harmonic shimmer and chords.

use crate::error::Result;
use crate::oscillators::{noise, oscillator, Waveform};
use crate::units::{check_frequency, check_signal, FULL_SCALE};
use rand::Rng;
use std::f64::consts::PI;

/// Drone voices as (frequency ratio, relative level)
///
/// The near-unison detune produces slow beating between the voices.
const DRONE_VOICES: [(f64, f64); 3] = [(1.0, 1.0), (1.003, 0.8), (0.997, 0.6)];

/// Drone breathing LFO rate in Hz
const DRONE_LFO_RATE: f64 = 0.3;

/// Burst envelope steepness: `exp(-8 * i / n)` ends near 0.03% of the start level
const BURST_DECAY: f64 = 8.0;

/// Shimmer partials as (frequency ratio, relative level)
const SHIMMER_PARTIALS: [(f64, f64); 3] = [(1.0, 1.0), (2.01, 0.5), (3.02, 0.3)];

/// Range of the sparkle term frequency, redrawn every sample
const SPARKLE_RANGE: std::ops::RangeInclusive<f64> = 5.0..=15.0;

/// Sparkle term level (not scaled by the shimmer amplitude)
const SPARKLE_LEVEL: f64 = 0.1;

/// Synthesizer bound to a sample rate
///
/// Stateless apart from the sample rate, so one instance can be shared
/// across every event of a theme.
///
/// # Example
/// ```
/// use hook_synth::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
/// let drone = synth.drone(110.0, 0.5, 0.15).unwrap();
/// let chime = synth.tone(440.0, 0.5, 0.2).unwrap();
/// let layered = mix(&[&drone, &chime]);
/// assert_eq!(layered.len(), drone.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Synth {
    sample_rate: u32,
}

impl Synth {
    /// Create a new synthesizer with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate this synthesizer renders at
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sine tone
    pub fn tone(&self, frequency: f64, duration: f64, amplitude: f64) -> Result<Vec<f64>> {
        oscillator(Waveform::Sine, frequency, duration, self.sample_rate, amplitude)
    }

    /// Square-wave beep
    pub fn square(&self, frequency: f64, duration: f64, amplitude: f64) -> Result<Vec<f64>> {
        oscillator(Waveform::Square, frequency, duration, self.sample_rate, amplitude)
    }

    /// Uniform white noise
    pub fn noise<R: Rng + ?Sized>(
        &self,
        duration: f64,
        amplitude: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        noise(duration, self.sample_rate, amplitude, rng)
    }

    /// Sum of equal-level sines on one sample grid (no per-voice normalization)
    ///
    /// Each note contributes `amplitude`, so the caller keeps
    /// `notes.len() * amplitude` within range.
    pub fn chord(&self, frequencies: &[f64], duration: f64, amplitude: f64) -> Result<Vec<f64>> {
        let num_samples = check_signal(duration, self.sample_rate, amplitude)?;
        let omegas = frequencies
            .iter()
            .map(|&f| Ok(2.0 * PI * check_frequency(f)? / self.sample_rate as f64))
            .collect::<Result<Vec<f64>>>()?;

        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f64;
                let sum: f64 = omegas.iter().map(|omega| amplitude * (omega * t).sin()).sum();
                sum * FULL_SCALE
            })
            .collect();

        Ok(samples)
    }

    /// Deep drone: three detuned sines under a slow breathing LFO
    ///
    /// The LFO swings between 0.85 and 1.15 at 0.3Hz and the voice sum is
    /// divided by three to keep the result bounded.
    pub fn drone(&self, frequency: f64, duration: f64, amplitude: f64) -> Result<Vec<f64>> {
        let num_samples = check_signal(duration, self.sample_rate, amplitude)?;
        let frequency = check_frequency(frequency)?;
        let step = 2.0 * PI / self.sample_rate as f64;

        let samples = (0..num_samples)
            .map(|i| {
                let t = step * i as f64;
                let voices: f64 = DRONE_VOICES
                    .iter()
                    .map(|&(ratio, level)| amplitude * level * (frequency * ratio * t).sin())
                    .sum();
                let lfo = 0.85 + 0.15 * (DRONE_LFO_RATE * t).sin();
                voices * lfo * FULL_SCALE / DRONE_VOICES.len() as f64
            })
            .collect();

        Ok(samples)
    }

    /// Particle burst: white noise under an exponential decay
    ///
    /// The envelope is `exp(-8 * i / n)` over the burst's own length, so it
    /// always dies away by the end regardless of duration.
    pub fn particle_burst<R: Rng + ?Sized>(
        &self,
        duration: f64,
        amplitude: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let num_samples = check_signal(duration, self.sample_rate, amplitude)?;
        let n = num_samples as f64;

        let samples = (0..num_samples)
            .map(|i| {
                let noise: f64 = rng.random_range(-1.0..=1.0);
                let envelope = (-BURST_DECAY * i as f64 / n).exp();
                amplitude * noise * envelope * FULL_SCALE
            })
            .collect();

        Ok(samples)
    }

    /// Shimmer: fundamental plus slightly stretched 2nd and 3rd harmonics
    ///
    /// A sparkle term is added on top: a sine whose frequency is redrawn
    /// from 5..15Hz on every sample. It is summed into the signal, not used
    /// to modulate the phase of the partials.
    pub fn shimmer<R: Rng + ?Sized>(
        &self,
        frequency: f64,
        duration: f64,
        amplitude: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let num_samples = check_signal(duration, self.sample_rate, amplitude)?;
        let frequency = check_frequency(frequency)?;
        let step = 2.0 * PI / self.sample_rate as f64;

        let samples = (0..num_samples)
            .map(|i| {
                let t = step * i as f64;
                let partials: f64 = SHIMMER_PARTIALS
                    .iter()
                    .map(|&(ratio, level)| amplitude * level * (frequency * ratio * t).sin())
                    .sum();
                let sparkle_rate = rng.random_range(SPARKLE_RANGE);
                let sparkle = SPARKLE_LEVEL * (sparkle_rate * t).sin();
                (partials + sparkle) * FULL_SCALE
            })
            .collect();

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{sample_count, SAMPLE_RATE};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn synth() -> Synth {
        Synth::new(SAMPLE_RATE)
    }

    fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0f64, |a, &s| a.max(s.abs()))
    }

    #[test]
    fn test_generator_lengths_agree() {
        let mut rng = Pcg64::seed_from_u64(7);
        let s = synth();
        for &duration in &[0.08, 0.12, 0.25, 0.4, 1.0] {
            let expected = sample_count(duration, SAMPLE_RATE);
            assert_eq!(s.tone(440.0, duration, 0.3).unwrap().len(), expected);
            assert_eq!(s.square(440.0, duration, 0.3).unwrap().len(), expected);
            assert_eq!(s.noise(duration, 0.3, &mut rng).unwrap().len(), expected);
            assert_eq!(s.drone(45.0, duration, 0.3).unwrap().len(), expected);
            assert_eq!(s.particle_burst(duration, 0.3, &mut rng).unwrap().len(), expected);
            assert_eq!(s.shimmer(880.0, duration, 0.3, &mut rng).unwrap().len(), expected);
            assert_eq!(s.chord(&[523.25, 659.25], duration, 0.2).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_drone_bounded() {
        let amplitude = 0.28;
        let samples = synth().drone(45.0, 1.0, amplitude).unwrap();
        // (1.0 + 0.8 + 0.6) * 1.15 / 3 is the worst case
        let bound = amplitude * 2.4 * 1.15 / 3.0 * FULL_SCALE;
        assert!(peak(&samples) <= bound);
        assert!(peak(&samples) > 0.0);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_drone_matches_formula() {
        let samples = synth().drone(80.0, 0.1, 0.2).unwrap();
        let i = 1234usize;
        let t = 2.0 * PI * i as f64 / SAMPLE_RATE as f64;
        let expected = (0.2 * (80.0 * t).sin()
            + 0.2 * 0.8 * (80.0 * 1.003 * t).sin()
            + 0.2 * 0.6 * (80.0 * 0.997 * t).sin())
            * (0.85 + 0.15 * (0.3 * t).sin())
            * FULL_SCALE
            / 3.0;
        assert!((samples[i] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_particle_burst_decays() {
        let mut rng = Pcg64::seed_from_u64(99);
        let amplitude = 0.2;
        let samples = synth().particle_burst(0.2, amplitude, &mut rng).unwrap();
        let n = samples.len();
        assert!(peak(&samples) <= amplitude * FULL_SCALE);

        // Each sample is bounded by the envelope at its index
        for (i, &s) in samples.iter().enumerate() {
            let envelope = (-8.0 * i as f64 / n as f64).exp();
            assert!(s.abs() <= amplitude * envelope * FULL_SCALE + 1e-9);
        }

        let head = peak(&samples[..n / 10]);
        let tail = peak(&samples[n - n / 10..]);
        assert!(tail < head * 0.05);
    }

    #[test]
    fn test_shimmer_bounded() {
        let mut rng = Pcg64::seed_from_u64(3);
        let amplitude = 0.2;
        let samples = synth().shimmer(440.0, 0.5, amplitude, &mut rng).unwrap();
        let bound = (amplitude * 1.8 + SPARKLE_LEVEL) * FULL_SCALE;
        assert!(peak(&samples) <= bound);
        assert!(peak(&samples) > amplitude * FULL_SCALE * 0.5);
    }

    #[test]
    fn test_shimmer_matches_formula() {
        let (frequency, amplitude) = (440.0, 0.05);
        let samples = synth()
            .shimmer(frequency, 0.1, amplitude, &mut Pcg64::seed_from_u64(17))
            .unwrap();

        let sparkle: Vec<f64> = samples
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let t = 2.0 * PI * i as f64 / SAMPLE_RATE as f64;
                let partials = amplitude
                    * ((frequency * t).sin()
                        + 0.5 * (frequency * 2.01 * t).sin()
                        + 0.3 * (frequency * 3.02 * t).sin());
                s - partials * FULL_SCALE
            })
            .collect();

        // The sparkle stays at 0.1 full scale whatever the shimmer amplitude
        assert!(sparkle.iter().all(|s| s.abs() <= 0.1 * FULL_SCALE + 1e-6));
        assert!(peak(&sparkle) > 0.05 * FULL_SCALE);

        // Replaying the seed gives one fresh 5..15Hz rate per sample
        let mut replay = Pcg64::seed_from_u64(17);
        for (i, &s) in sparkle.iter().enumerate() {
            let rate: f64 = replay.random_range(5.0..=15.0);
            let t = 2.0 * PI * i as f64 / SAMPLE_RATE as f64;
            let expected = 0.1 * (rate * t).sin() * FULL_SCALE;
            assert!((s - expected).abs() < 1e-6, "sample {i}");
        }

        // No single fixed rate explains the whole remainder
        let fixed_fits = (50..=150).map(|r| r as f64 / 10.0).any(|rate| {
            sparkle.iter().enumerate().all(|(i, &s)| {
                let t = 2.0 * PI * i as f64 / SAMPLE_RATE as f64;
                (s - 0.1 * (rate * t).sin() * FULL_SCALE).abs() < 1.0
            })
        });
        assert!(!fixed_fits);
    }

    #[test]
    fn test_chord_is_sum_of_tones() {
        let s = synth();
        let chord = s.chord(&[523.25, 659.25, 783.99], 0.05, 0.2).unwrap();
        let c = s.tone(523.25, 0.05, 0.2).unwrap();
        let e = s.tone(659.25, 0.05, 0.2).unwrap();
        let g = s.tone(783.99, 0.05, 0.2).unwrap();
        for i in 0..chord.len() {
            assert!((chord[i] - (c[i] + e[i] + g[i])).abs() < 1e-6);
        }
    }

    #[test]
    fn test_composites_reject_bad_parameters() {
        let mut rng = Pcg64::seed_from_u64(1);
        let s = synth();
        assert!(s.drone(-45.0, 1.0, 0.2).is_err());
        assert!(s.particle_burst(0.0, 0.2, &mut rng).is_err());
        assert!(s.shimmer(440.0, 0.5, 2.0, &mut rng).is_err());
        assert!(s.chord(&[440.0, 0.0], 0.5, 0.2).is_err());
        assert!(Synth::new(0).tone(440.0, 0.5, 0.2).is_err());
    }
}
