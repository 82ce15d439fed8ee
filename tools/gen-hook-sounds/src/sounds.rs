//! Theme rendering and console reporting

use anyhow::{bail, Context, Result};
use hook_synth::{render_theme, SoundEvent, Theme};
use std::path::Path;

/// Render each theme into `{output}/{theme dir}`
///
/// Every theme is attempted even if an earlier one had failures; the
/// error returned at the end counts all files that could not be written.
pub fn generate_themes(themes: &[Theme], output: &Path) -> Result<()> {
    let mut failed = 0;

    for &theme in themes {
        let dir = output.join(theme.dir_name());
        println!("{}", theme.title());

        // A theme without a directory loses all of its files, not the run
        if let Err(err) = std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))
        {
            eprintln!("  !! {err:#}\n");
            failed += SoundEvent::ALL.len();
            continue;
        }

        println!("  {}", theme.summary());
        println!("  Output -> {}", dir.display());

        let report = render_theme(theme, &dir, &mut rand::rng());

        for file in report.rendered() {
            println!(
                "    -> {} ({} samples, {:.2}s) - {}",
                file.event.file_name(),
                file.frames,
                file.duration(),
                theme.describe(file.event)
            );
        }

        for (event, err) in report.failures() {
            eprintln!("    !! {}: {err}", event.file_name());
            failed += 1;
        }

        println!(
            "  Done! Generated {} of {} sounds\n",
            report.rendered().count(),
            SoundEvent::ALL.len()
        );
    }

    if failed > 0 {
        bail!("{failed} sound(s) failed to render");
    }

    tracing::info!("All sounds generated in {}", output.display());
    Ok(())
}

/// Print every theme and the hook events it renders
pub fn list_themes() {
    for theme in Theme::ALL {
        println!("{} ({}/)", theme.name(), theme.dir_name());
        println!("  {}", theme.summary());
        for event in SoundEvent::ALL {
            println!(
                "    {:<20} {:<28} {}",
                event.file_name(),
                event.trigger(),
                theme.describe(event)
            );
        }
        println!();
    }
}
