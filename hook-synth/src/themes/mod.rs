//! Notification sound themes
//!
//! Each theme maps the ten hook events onto a recipe over the shared
//! generators. Recipes return the raw waveform together with the fade that
//! finishes it; [`Theme::compose`] applies that fade, so no sound leaves
//! here unfaded.
//!
//! **TO ADD A NEW THEME:**
//! 1. Add a variant to [`Theme`] and fill in its names
//! 2. Add a module with `recipe()` and `describe()` covering every [`SoundEvent`]
//! 3. Dispatch to it from [`Theme::compose`] and [`Theme::describe`]

mod drift;
mod retro;
mod void;

use crate::envelope::Fade;
use crate::error::{Result, SynthError};
use crate::synth::Synth;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Hook event that gets its own sound file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    SessionStart,
    SessionEnd,
    ToolStart,
    ToolComplete,
    PromptSubmit,
    ResponseStart,
    ResponseEnd,
    SubagentDone,
    PrecompactWarning,
    Notification,
}

impl SoundEvent {
    /// Every event, in render order
    pub const ALL: [SoundEvent; 10] = [
        SoundEvent::SessionStart,
        SoundEvent::SessionEnd,
        SoundEvent::ToolStart,
        SoundEvent::ToolComplete,
        SoundEvent::PromptSubmit,
        SoundEvent::ResponseStart,
        SoundEvent::ResponseEnd,
        SoundEvent::SubagentDone,
        SoundEvent::PrecompactWarning,
        SoundEvent::Notification,
    ];

    /// File stem, e.g. `session_start`
    pub fn name(&self) -> &'static str {
        match self {
            SoundEvent::SessionStart => "session_start",
            SoundEvent::SessionEnd => "session_end",
            SoundEvent::ToolStart => "tool_start",
            SoundEvent::ToolComplete => "tool_complete",
            SoundEvent::PromptSubmit => "prompt_submit",
            SoundEvent::ResponseStart => "response_start",
            SoundEvent::ResponseEnd => "response_end",
            SoundEvent::SubagentDone => "subagent_done",
            SoundEvent::PrecompactWarning => "precompact_warning",
            SoundEvent::Notification => "notification",
        }
    }

    /// Output file name, e.g. `session_start.wav`
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name())
    }

    /// When the hook fires
    pub fn trigger(&self) -> &'static str {
        match self {
            SoundEvent::SessionStart => "Session opened",
            SoundEvent::SessionEnd => "Session closed",
            SoundEvent::ToolStart => "Tool invocation starts",
            SoundEvent::ToolComplete => "Tool invocation finished",
            SoundEvent::PromptSubmit => "Prompt submitted",
            SoundEvent::ResponseStart => "Response begins",
            SoundEvent::ResponseEnd => "Response finished",
            SoundEvent::SubagentDone => "Subagent finished its task",
            SoundEvent::PrecompactWarning => "Context is about to be compacted",
            SoundEvent::Notification => "Attention needed",
        }
    }
}

impl fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sound suite with its own palette and envelope timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// 80s terminal beeps: sine arpeggios and square blips
    Retro,
    /// Ambient water: drops, filtered noise and soft pads
    Drift,
    /// Deep space: drones, particle bursts and shimmer
    Void,
}

impl Theme {
    /// Every theme, in render order
    pub const ALL: [Theme; 3] = [Theme::Retro, Theme::Drift, Theme::Void];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Retro => "retro",
            Theme::Drift => "drift",
            Theme::Void => "void",
        }
    }

    /// Output directory for this theme's files
    pub fn dir_name(&self) -> &'static str {
        match self {
            Theme::Retro => "retro-terminal",
            Theme::Drift => "drift",
            Theme::Void => "void",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Theme::Retro => "Retro Terminal",
            Theme::Drift => "Drift",
            Theme::Void => "Void",
        }
    }

    /// One-line summary of the suite's character
    pub fn summary(&self) -> &'static str {
        match self {
            Theme::Retro => "Classic 80s computing beeps and chimes",
            Theme::Drift => "Ambient water and transcendent flow",
            Theme::Void => "Cosmic liminal space, deep void, stellar resonance",
        }
    }

    /// What this theme's sound for `event` is meant to evoke
    pub fn describe(&self, event: SoundEvent) -> &'static str {
        match self {
            Theme::Retro => retro::describe(event),
            Theme::Drift => drift::describe(event),
            Theme::Void => void::describe(event),
        }
    }

    /// Synthesize the finished (faded) waveform for one event
    pub fn compose<R: Rng + ?Sized>(
        &self,
        synth: &Synth,
        event: SoundEvent,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let (mut samples, fade) = match self {
            Theme::Retro => retro::recipe(synth, event)?,
            Theme::Drift => drift::recipe(synth, event, rng)?,
            Theme::Void => void::recipe(synth, event, rng)?,
        };
        fade.apply(&mut samples, synth.sample_rate())?;
        Ok(samples)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted || theme.dir_name() == wanted)
            .ok_or_else(|| SynthError::UnknownTheme(s.to_string()))
    }
}

/// Waveform plus the fade that finishes it
type Recipe = (Vec<f64>, Fade);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FULL_SCALE, SAMPLE_RATE};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::collections::HashSet;

    #[test]
    fn test_event_names_unique() {
        let names: HashSet<_> = SoundEvent::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(SoundEvent::PromptSubmit.file_name(), "prompt_submit.wav");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("retro".parse::<Theme>().unwrap(), Theme::Retro);
        assert_eq!("retro-terminal".parse::<Theme>().unwrap(), Theme::Retro);
        assert_eq!(" Drift ".parse::<Theme>().unwrap(), Theme::Drift);
        assert_eq!("VOID".parse::<Theme>().unwrap(), Theme::Void);
        assert!(matches!(
            "lofi".parse::<Theme>(),
            Err(SynthError::UnknownTheme(name)) if name == "lofi"
        ));
    }

    #[test]
    fn test_every_recipe_renders() {
        let synth = Synth::new(SAMPLE_RATE);
        let mut rng = Pcg64::seed_from_u64(11);
        for theme in Theme::ALL {
            for event in SoundEvent::ALL {
                let samples = theme.compose(&synth, event, &mut rng).unwrap();
                assert!(!samples.is_empty(), "{theme}/{event} is empty");
                // Every sound starts from silence after the fade-in
                assert_eq!(samples[0], 0.0, "{theme}/{event} does not start silent");
                assert!(
                    samples.iter().all(|s| s.abs() < FULL_SCALE),
                    "{theme}/{event} clips"
                );
                assert!(!theme.describe(event).is_empty());
            }
        }
    }

    #[test]
    fn test_prompt_submit_is_short() {
        let synth = Synth::new(SAMPLE_RATE);
        let mut rng = Pcg64::seed_from_u64(5);
        for theme in Theme::ALL {
            let samples = theme.compose(&synth, SoundEvent::PromptSubmit, &mut rng).unwrap();
            let seconds = samples.len() as f64 / SAMPLE_RATE as f64;
            assert!((0.049..=0.2).contains(&seconds), "{theme}: {seconds}s");
        }
    }
}
