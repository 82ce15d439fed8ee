//! Procedural notification sounds
//!
//! Synthesizes short hook sounds (session start/end, tool start/complete,
//! prompt submit, ...) for several sonic themes and writes each one as a
//! mono 16-bit 44.1kHz WAV file.
//!
//! The building blocks are oscillators and noise, composite textures
//! (drone, particle burst, shimmer), a one-pole low-pass, fade and decay
//! envelopes, and mix/concat compositors. Samples are `f64` values already
//! scaled to 16-bit PCM units; the encoder only clamps and truncates.
//!
//! # Example
//! ```no_run
//! use hook_synth::*;
//!
//! let synth = Synth::new(SAMPLE_RATE);
//! let mut rng = rand::rng();
//!
//! // Build a sound by hand
//! let drone = synth.drone(110.0, 0.5, 0.15)?;
//! let shimmer = synth.shimmer(440.0, 0.5, 0.2, &mut rng)?;
//! let mut samples = mix(&[&drone, &shimmer]);
//! Decay::fine(0.992)?.apply(&mut samples);
//! Fade::new(20.0, 450.0).apply(&mut samples, SAMPLE_RATE)?;
//! write_samples(&samples, std::path::Path::new("bloom.wav"))?;
//!
//! // Or render a whole theme
//! let report = render_theme(Theme::Void, std::path::Path::new("void"), &mut rng);
//! assert!(report.is_complete());
//! # Ok::<(), hook_synth::SynthError>(())
//! ```

mod compose;
mod envelope;
mod error;
mod export;
mod filters;
mod oscillators;
mod render;
mod synth;
mod themes;
mod units;

// Constants and units
pub use units::{ms_to_samples, sample_count, FULL_SCALE, SAMPLE_RATE};

// Errors
pub use error::{Result, SynthError};

// Generators
pub use oscillators::{noise, oscillator, Waveform};
pub use synth::Synth;

// Filters and envelopes
pub use envelope::{Decay, Fade, COARSE_GRANULARITY, FINE_GRANULARITY};
pub use filters::low_pass_smooth;

// Composition
pub use compose::{concat, mix, overlay, pad_to, silence, SequenceBuilder};

// Encoding and export
pub use export::{read_wav, to_pcm_i16, wav_spec, write_samples, write_wav};

// Themes and rendering
pub use render::{render_event, render_theme, RenderedFile, ThemeReport};
pub use themes::{SoundEvent, Theme};
