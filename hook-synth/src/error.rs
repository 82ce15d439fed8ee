//! Error type shared by every synthesis stage

use std::path::PathBuf;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors raised while synthesizing or encoding a sound
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// A generator or processor was handed an out-of-domain argument.
    ///
    /// Raised before any sample is produced.
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Sequences could not be aligned (a pre-sized sequence was over- or under-filled)
    #[error("sequence length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The WAV writer could not produce the output file
    #[error("failed to write {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// The WAV reader could not decode a file
    #[error("failed to read {}: {source}", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Theme name that does not match any known suite
    #[error("unknown theme '{0}' (expected retro, drift or void)")]
    UnknownTheme(String),
}

impl SynthError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
