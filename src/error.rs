//! Per-file conversion errors.

use std::path::PathBuf;

/// Errors that fail the conversion of a single file.
///
/// None of these abort a batch; the driver logs them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No title found")]
    MissingTitle,

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
