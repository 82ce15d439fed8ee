//! Batch rendering of a theme to WAV files
//!
//! Each event is composed, encoded and written on its own; a failure is
//! recorded in the report and the remaining events still render.

use crate::error::{Result, SynthError};
use crate::export::write_samples;
use crate::synth::Synth;
use crate::themes::{SoundEvent, Theme};
use crate::units::SAMPLE_RATE;
use rand::Rng;
use std::path::{Path, PathBuf};

/// A sound written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub event: SoundEvent,
    pub path: PathBuf,
    /// Number of PCM frames written
    pub frames: usize,
}

impl RenderedFile {
    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.frames as f64 / SAMPLE_RATE as f64
    }
}

/// Outcome of rendering every event of one theme
#[derive(Debug)]
pub struct ThemeReport {
    pub theme: Theme,
    /// One entry per event, in render order
    pub results: Vec<(SoundEvent, Result<RenderedFile>)>,
}

impl ThemeReport {
    /// Files that were written
    pub fn rendered(&self) -> impl Iterator<Item = &RenderedFile> {
        self.results.iter().filter_map(|(_, result)| result.as_ref().ok())
    }

    /// Events that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (SoundEvent, &SynthError)> {
        self.results
            .iter()
            .filter_map(|(event, result)| result.as_ref().err().map(|err| (*event, err)))
    }

    /// True if every event rendered
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Render one event of a theme to `dir/{event}.wav`
///
/// `dir` must exist.
pub fn render_event<R: Rng + ?Sized>(
    theme: Theme,
    event: SoundEvent,
    dir: &Path,
    rng: &mut R,
) -> Result<RenderedFile> {
    let synth = Synth::new(SAMPLE_RATE);
    let samples = theme.compose(&synth, event, rng)?;
    let path = dir.join(event.file_name());
    let frames = write_samples(&samples, &path)?;

    tracing::debug!(
        theme = theme.name(),
        event = event.name(),
        frames,
        "rendered {}",
        path.display()
    );

    Ok(RenderedFile {
        event,
        path,
        frames,
    })
}

/// Render all ten events of a theme into `dir`
///
/// Events are rendered in [`SoundEvent::ALL`] order. Failures are isolated
/// per file and reported, never propagated.
pub fn render_theme<R: Rng + ?Sized>(theme: Theme, dir: &Path, rng: &mut R) -> ThemeReport {
    let results = SoundEvent::ALL
        .into_iter()
        .map(|event| {
            let result = render_event(theme, event, dir, rng);
            if let Err(err) = &result {
                tracing::warn!(theme = theme.name(), event = event.name(), "{err}");
            }
            (event, result)
        })
        .collect();

    ThemeReport { theme, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use tempfile::tempdir;

    #[test]
    fn test_render_event_writes_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut rng = Pcg64::seed_from_u64(1);
        let file =
            render_event(Theme::Retro, SoundEvent::Notification, dir.path(), &mut rng).unwrap();
        assert_eq!(file.path, dir.path().join("notification.wav"));
        assert!(file.path.exists());
        assert_eq!(file.frames, 11025);
        assert!((file.duration() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_report_collects_failures() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("not-created");
        let mut rng = Pcg64::seed_from_u64(2);
        let report = render_theme(Theme::Void, &missing, &mut rng);

        assert_eq!(report.results.len(), 10);
        assert!(!report.is_complete());
        assert_eq!(report.failures().count(), 10);
        assert_eq!(report.rendered().count(), 0);
    }
}
