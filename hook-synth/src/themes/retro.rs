//! Retro Terminal theme
//!
//! Classic 80s computing sounds: sine arpeggios for session and response
//! events, square-wave blips for tools and warnings.

use super::{Recipe, SoundEvent};
use crate::compose::{concat, SequenceBuilder};
use crate::envelope::Fade;
use crate::error::Result;
use crate::synth::Synth;
use crate::units::sample_count;

// Musical notes (Hz)
const C5: f64 = 523.25;
const D5: f64 = 587.33;
const E5: f64 = 659.25;
const G5: f64 = 783.99;
const C6: f64 = 1046.50;

/// Default sine level
const TONE_LEVEL: f64 = 0.5;
/// Default square level
const BEEP_LEVEL: f64 = 0.3;

fn fade_out(ms: f64) -> Fade {
    Fade {
        fade_out_ms: ms,
        ..Fade::default()
    }
}

/// Sine notes played back to back as (frequency, duration)
fn arpeggio(synth: &Synth, notes: &[(f64, f64)]) -> Result<Vec<f64>> {
    let tones = notes
        .iter()
        .map(|&(frequency, duration)| synth.tone(frequency, duration, TONE_LEVEL))
        .collect::<Result<Vec<_>>>()?;
    let refs: Vec<&[f64]> = tones.iter().map(Vec::as_slice).collect();
    Ok(concat(&refs))
}

pub(super) fn describe(event: SoundEvent) -> &'static str {
    match event {
        SoundEvent::SessionStart => "Boot-up arpeggio C5-E5-G5-C6",
        SoundEvent::SessionEnd => "Shutdown arpeggio C6-G5-E5-C5",
        SoundEvent::ToolStart => "Brief rising square blip",
        SoundEvent::ToolComplete => "Two-tone success confirmation",
        SoundEvent::PromptSubmit => "Quick keystroke click",
        SoundEvent::ResponseStart => "Soft data incoming chime",
        SoundEvent::ResponseEnd => "Gentle completion tone",
        SoundEvent::SubagentDone => "C major chord",
        SoundEvent::PrecompactWarning => "Oscillating warning tone",
        SoundEvent::Notification => "Terminal bell",
    }
}

pub(super) fn recipe(synth: &Synth, event: SoundEvent) -> Result<Recipe> {
    let recipe = match event {
        SoundEvent::SessionStart => (
            arpeggio(synth, &[(C5, 0.15), (E5, 0.15), (G5, 0.15), (C6, 0.3)])?,
            Fade::default(),
        ),
        SoundEvent::SessionEnd => (
            arpeggio(synth, &[(C6, 0.2), (G5, 0.2), (E5, 0.2), (C5, 0.4)])?,
            fade_out(300.0),
        ),
        SoundEvent::ToolStart => {
            let low = synth.square(220.0, 0.08, BEEP_LEVEL)?;
            let high = synth.square(330.0, 0.08, BEEP_LEVEL)?;
            (concat(&[&low, &high]), Fade::new(10.0, 50.0))
        }
        SoundEvent::ToolComplete => (
            arpeggio(synth, &[(D5, 0.12), (G5, 0.18)])?,
            Fade::default(),
        ),
        SoundEvent::PromptSubmit => (synth.square(800.0, 0.05, 0.25)?, Fade::new(5.0, 30.0)),
        SoundEvent::ResponseStart => (
            arpeggio(synth, &[(C5, 0.15), (E5, 0.15)])?,
            Fade::default(),
        ),
        SoundEvent::ResponseEnd => (
            arpeggio(synth, &[(E5, 0.12), (C5, 0.18)])?,
            fade_out(250.0),
        ),
        SoundEvent::SubagentDone => (synth.chord(&[C5, E5, G5], 0.25, 0.2)?, Fade::default()),
        SoundEvent::PrecompactWarning => {
            let high = synth.square(440.0, 0.15, 0.35)?;
            let low = synth.square(330.0, 0.15, 0.35)?;
            let mut warning = SequenceBuilder::with_total_len(
                synth.sample_rate(),
                3 * 2 * sample_count(0.15, synth.sample_rate()),
            );
            for _ in 0..3 {
                warning.push(&high)?.push(&low)?;
            }
            (warning.finish()?, Fade::default())
        }
        SoundEvent::Notification => (synth.tone(1000.0, 0.25, 0.4)?, fade_out(180.0)),
    };
    Ok(recipe)
}
