//! Crate-level error type and `Result` alias.
//! Separates command-line usage problems (reported by clap) from per-file
//! path resolution failures, and converts I/O and JSON errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed command line. Display renders clap's message and usage.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Cannot resolve input '{nominal}': {reason}")]
    PathResolution { nominal: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub(crate) fn path_resolution(nominal: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::PathResolution {
            nominal: nominal.into(),
            reason: reason.into(),
        }
    }

    /// True for clap's help/version "errors", which are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Error::Usage(e) if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            )
        )
    }
}
