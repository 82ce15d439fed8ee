//! Drift theme
//!
//! Meditative water sounds: low-passed noise drops and ripples under soft,
//! slowly decaying sine pads in the lower octaves.

use super::{Recipe, SoundEvent};
use crate::compose::{concat, mix, SequenceBuilder};
use crate::envelope::{Decay, Fade};
use crate::error::Result;
use crate::filters::low_pass_smooth;
use crate::synth::Synth;
use crate::units::sample_count;
use rand::Rng;

// Musical notes (Hz), lower octaves for calm
const A3: f64 = 220.00;
const C4: f64 = 261.63;
const E4: f64 = 329.63;
const G4: f64 = 392.00;
const C5: f64 = 523.25;

/// Low-passed noise: the water texture every drift sound leans on
fn ripple<R: Rng + ?Sized>(
    synth: &Synth,
    duration: f64,
    amplitude: f64,
    cutoff_ratio: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut samples = synth.noise(duration, amplitude, rng)?;
    low_pass_smooth(&mut samples, cutoff_ratio)?;
    Ok(samples)
}

/// Single water drop: a short ripple with a fast decay
fn water_drop<R: Rng + ?Sized>(
    synth: &Synth,
    duration: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut samples = ripple(synth, duration, 0.25, 0.15, rng)?;
    Decay::coarse(0.92)?.apply(&mut samples);
    Ok(samples)
}

/// Soft pad: three slightly detuned sines with a long decay
fn ambient_pad(synth: &Synth, frequency: f64, duration: f64) -> Result<Vec<f64>> {
    let pad1 = synth.tone(frequency, duration, 0.15)?;
    let pad2 = synth.tone(frequency * 1.01, duration, 0.12)?;
    let pad3 = synth.tone(frequency * 0.99, duration, 0.12)?;

    let mut samples = mix(&[&pad1, &pad2, &pad3]);
    Decay::coarse(0.995)?.apply(&mut samples);
    Ok(samples)
}

pub(super) fn describe(event: SoundEvent) -> &'static str {
    match event {
        SoundEvent::SessionStart => "Water drops building into an ambient pad",
        SoundEvent::SessionEnd => "Pad fading into descending drops",
        SoundEvent::ToolStart => "Subtle ripple with a soft chime",
        SoundEvent::ToolComplete => "Gentle splash with ambient bloom",
        SoundEvent::PromptSubmit => "Single water drop",
        SoundEvent::ResponseStart => "Soft water flow beginning",
        SoundEvent::ResponseEnd => "Water flow gently fading",
        SoundEvent::SubagentDone => "Cluster of drops with an ambient swell",
        SoundEvent::PrecompactWarning => "Rippling waves with a rising alert tone",
        SoundEvent::Notification => "Crystal-clear bell drop",
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
            let mut seq = SequenceBuilder::new(sample_rate);
            for gap in [0.1, 0.08, 0.05] {
                seq.push(&water_drop(synth, 0.15, rng)?)?;
                seq.push_silence(gap)?;
            }
            seq.push(&ambient_pad(synth, C4, 0.7)?)?;
            (seq.finish()?, Fade::new(50.0, 400.0))
        }
        SoundEvent::SessionEnd => {
            let mut seq = SequenceBuilder::new(sample_rate);
            seq.push(&ambient_pad(synth, A3, 0.4)?)?;
            seq.push(&water_drop(synth, 0.12, rng)?)?;
            seq.push_silence(0.15)?;
            seq.push(&water_drop(synth, 0.12, rng)?)?;
            seq.push_silence(0.2)?;
            seq.push(&water_drop(synth, 0.15, rng)?)?;
            seq.push_silence(0.3)?;
            (seq.finish()?, Fade::new(100.0, 600.0))
        }
        SoundEvent::ToolStart => {
            let water = ripple(synth, 0.08, 0.12, 0.2, rng)?;
            let chime = synth.tone(E4, 0.08, 0.15)?;
            (mix(&[&water, &chime]), Fade::new(20.0, 100.0))
        }
        SoundEvent::ToolComplete => {
            let splash = ripple(synth, 0.1, 0.18, 0.18, rng)?;
            let bloom = ambient_pad(synth, G4, 0.4)?;
            (concat(&[&splash, &bloom]), Fade::new(10.0, 350.0))
        }
        SoundEvent::PromptSubmit => (water_drop(synth, 0.08, rng)?, Fade::new(5.0, 80.0)),
        SoundEvent::ResponseStart => {
            let flow = ripple(synth, 0.4, 0.12, 0.12, rng)?;
            let pad = ambient_pad(synth, C4, 0.4)?;
            (mix(&[&flow, &pad]), Fade::new(150.0, 200.0))
        }
        SoundEvent::ResponseEnd => {
            let flow = ripple(synth, 0.4, 0.12, 0.12, rng)?;
            let pad = ambient_pad(synth, A3, 0.4)?;
            (mix(&[&flow, &pad]), Fade::new(100.0, 400.0))
        }
        SoundEvent::SubagentDone => {
            let drop_len = sample_count(0.1, sample_rate);
            let gap_len = sample_count(0.05, sample_rate);
            let pad_len = sample_count(0.5, sample_rate);
            let mut seq =
                SequenceBuilder::with_total_len(sample_rate, 3 * drop_len + 2 * gap_len + pad_len);
            for i in 0..3 {
                seq.push(&water_drop(synth, 0.1, rng)?)?;
                if i < 2 {
                    seq.push_silence(0.05)?;
                }
            }
            seq.push(&ambient_pad(synth, E4, 0.5)?)?;
            (seq.finish()?, Fade::new(50.0, 400.0))
        }
        SoundEvent::PrecompactWarning => {
            let wave_len = sample_count(0.2, sample_rate);
            let gap_len = sample_count(0.1, sample_rate);
            let mut seq = SequenceBuilder::with_total_len(sample_rate, 3 * wave_len + 2 * gap_len);
            for i in 0..3 {
                let step = i as f64;
                let water = ripple(synth, 0.2, 0.18 + step * 0.03, 0.15, rng)?;
                // Rising tone to get attention
                let tone = synth.tone(A3 + step * 50.0, 0.2, 0.15)?;
                seq.push(&mix(&[&water, &tone]))?;
                if i < 2 {
                    seq.push_silence(0.1)?;
                }
            }
            (seq.finish()?, Fade::new(100.0, 300.0))
        }
        SoundEvent::Notification => {
            let mut bell = synth.tone(C5, 0.15, 0.25)?;
            Decay::coarse(0.985)?.apply(&mut bell);
            let droplet = water_drop(synth, 0.15, rng)?;
            (mix(&[&bell, &droplet]), Fade::new(10.0, 350.0))
        }
    };
    Ok(recipe)
}
