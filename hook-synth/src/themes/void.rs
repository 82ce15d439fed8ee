//! Void theme
//!
//! Deep space and liminal thresholds: sub-bass drones, decaying particle
//! bursts and harmonic shimmer with long fades.

use super::{Recipe, SoundEvent};
use crate::compose::{concat, mix, overlay, pad_to, SequenceBuilder};
use crate::envelope::{Decay, Fade};
use crate::error::Result;
use crate::synth::Synth;
use crate::units::sample_count;
use rand::Rng;

// Cosmic frequency palette (Hz)
const DEEP_VOID: f64 = 45.0;
const LOW_DRONE: f64 = 80.0;
const THRESHOLD: f64 = 110.0;
const RESONANCE: f64 = 220.0;
const STELLAR: f64 = 440.0;
const PARTICLE: f64 = 880.0;
const SHIMMER: f64 = 1760.0;

pub(super) fn describe(event: SoundEvent) -> &'static str {
    match event {
        SoundEvent::SessionStart => "Portal opening: void swelling, particles emerging",
        SoundEvent::SessionEnd => "Portal closing: void recedes",
        SoundEvent::ToolStart => "Particle ignition",
        SoundEvent::ToolComplete => "Resonance bloom",
        SoundEvent::PromptSubmit => "Thought released into the void",
        SoundEvent::ResponseStart => "Void whispers",
        SoundEvent::ResponseEnd => "Void settles",
        SoundEvent::SubagentDone => "Stellar achievement",
        SoundEvent::PrecompactWarning => "Void pressure: pulsing urgency",
        SoundEvent::Notification => "Cosmic ping with a resonant tail",
    }
}

pub(super) fn recipe<R: Rng + ?Sized>(
    synth: &Synth,
    event: SoundEvent,
    rng: &mut R,
) -> Result<Recipe> {
    let sample_rate = synth.sample_rate();

    let recipe = match event {
        SoundEvent::SessionStart => {
            let drone = synth.drone(DEEP_VOID, 1.0, 0.28)?;
            let mut resonance = synth.tone(THRESHOLD, 0.8, 0.15)?;

            // Particles emerge late in the swell
            let mut particles = SequenceBuilder::new(sample_rate);
            particles.push_silence(0.6)?;
            particles.push(&synth.particle_burst(0.15, 0.18, rng)?)?;
            particles.push_silence(0.1)?;
            particles.push(&synth.particle_burst(0.12, 0.15, rng)?)?;
            let mut particles = particles.finish()?;

            pad_to(&mut resonance, drone.len());
            pad_to(&mut particles, drone.len());
            (mix(&[&drone, &resonance, &particles]), Fade::new(200.0, 500.0))
        }
        SoundEvent::SessionEnd => {
            let particles = synth.particle_burst(0.2, 0.16, rng)?;
            let drone = synth.drone(LOW_DRONE, 0.8, 0.22)?;

            // The drone enters right after the particles, over the trailing gap
            let mut head = SequenceBuilder::with_total_len(
                sample_rate,
                particles.len() + sample_count(0.2, sample_rate),
            );
            head.push(&particles)?;
            head.push_silence(0.2)?;
            let head = head.finish()?;

            (overlay(&head, &drone, particles.len()), Fade::new(100.0, 800.0))
        }
        SoundEvent::ToolStart => {
            let particle = synth.particle_burst(0.1, 0.18, rng)?;
            let resonance = synth.tone(RESONANCE, 0.1, 0.12)?;
            (mix(&[&particle, &resonance]), Fade::new(10.0, 120.0))
        }
        SoundEvent::ToolComplete => {
            let shimmer = synth.shimmer(STELLAR, 0.5, 0.2, rng)?;
            let drone = synth.drone(THRESHOLD, 0.5, 0.15)?;
            let mut samples = mix(&[&shimmer, &drone]);
            Decay::fine(0.992)?.apply(&mut samples);
            (samples, Fade::new(20.0, 450.0))
        }
        SoundEvent::PromptSubmit => (synth.particle_burst(0.08, 0.16, rng)?, Fade::new(5.0, 90.0)),
        SoundEvent::ResponseStart => {
            let drone = synth.drone(LOW_DRONE, 0.5, 0.18)?;
            let shimmer = synth.shimmer(PARTICLE, 0.5, 0.15, rng)?;
            (mix(&[&drone, &shimmer]), Fade::new(200.0, 250.0))
        }
        SoundEvent::ResponseEnd => {
            let shimmer = synth.shimmer(RESONANCE, 0.4, 0.14, rng)?;
            let drone = synth.drone(DEEP_VOID, 0.4, 0.16)?;
            (mix(&[&shimmer, &drone]), Fade::new(100.0, 500.0))
        }
        SoundEvent::SubagentDone => {
            let burst_len = sample_count(0.12, sample_rate);
            let gap_len = sample_count(0.08, sample_rate);
            let celebration_len = sample_count(0.6, sample_rate);
            let mut seq = SequenceBuilder::with_total_len(
                sample_rate,
                3 * burst_len + 2 * gap_len + celebration_len,
            );

            // Ascending particle bursts
            for i in 0..3 {
                seq.push(&synth.particle_burst(0.12, 0.17 + i as f64 * 0.02, rng)?)?;
                if i < 2 {
                    seq.push_silence(0.08)?;
                }
            }

            let resonance = synth.shimmer(STELLAR, 0.6, 0.2, rng)?;
            let drone = synth.drone(THRESHOLD, 0.6, 0.18)?;
            seq.push(&mix(&[&resonance, &drone]))?;
            (seq.finish()?, Fade::new(50.0, 500.0))
        }
        SoundEvent::PrecompactWarning => {
            let pulse_len = sample_count(0.25, sample_rate);
            let gap_len = sample_count(0.12, sample_rate);
            let mut seq = SequenceBuilder::with_total_len(sample_rate, 3 * pulse_len + 2 * gap_len);

            // Three pulses of increasing intensity
            for i in 0..3 {
                let step = i as f64;
                let drone = synth.drone(LOW_DRONE, 0.25, 0.2 + step * 0.05)?;
                let shimmer = synth.shimmer(RESONANCE * (1.0 + step * 0.2), 0.25, 0.15, rng)?;
                seq.push(&mix(&[&drone, &shimmer]))?;
                if i < 2 {
                    seq.push_silence(0.12)?;
                }
            }
            (seq.finish()?, Fade::new(100.0, 400.0))
        }
        SoundEvent::Notification => {
            let particle = synth.particle_burst(0.15, 0.22, rng)?;
            let resonance = synth.shimmer(SHIMMER, 0.4, 0.18, rng)?;
            let mut samples = concat(&[&particle, &resonance]);
            Decay::fine(0.988)?.apply(&mut samples);
            (samples, Fade::new(10.0, 450.0))
        }
    };
    Ok(recipe)
}
