//! Notification sound generator
//!
//! Renders the hook sound suites into WAV files, one directory per theme:
//! - `retro-terminal/` - square-wave arpeggios and chiptune beeps
//! - `drift/` - water drops and ambient pads
//! - `void/` - sub-bass drones, particle bursts and shimmer
//!
//! ## Naming Convention
//!
//! Each hook event is saved as `{event}.wav` (e.g. `session_start.wav`,
//! `prompt_submit.wav`) inside its theme directory.
//!
//! Set `RUST_LOG=debug` to trace every file as it is written.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hook_synth::Theme;
use std::path::PathBuf;

mod sounds;

#[derive(Parser)]
#[command(name = "gen-hook-sounds")]
#[command(about = "Generate procedural notification sounds for coding-agent hooks")]
struct Cli {
    /// Root directory; each theme is written to its own subdirectory
    #[arg(short, long, global = true, default_value = ".")]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every theme (default)
    All,
    /// Generate a single theme (retro, drift or void)
    Theme {
        /// Theme to render
        theme: Theme,
    },
    /// List themes and the events each one covers
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => sounds::generate_themes(&Theme::ALL, &cli.output),
        Commands::Theme { theme } => sounds::generate_themes(&[theme], &cli.output),
        Commands::List => {
            sounds::list_themes();
            Ok(())
        }
    }
}
