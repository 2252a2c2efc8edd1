//! Error types for nvsync-sync.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use nvsync_core::{ConfigName, Direction, ManifestError, Side};

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The side being synced from does not exist. Nothing was touched.
    #[error("{side} config '{name}' not found at {path}")]
    MissingSource {
        name: ConfigName,
        side: Side,
        path: PathBuf,
    },

    /// The mirror tool ran and exited non-zero. `diagnostic` is its output,
    /// verbatim.
    #[error("{program} failed ({status}):\n{diagnostic}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        diagnostic: String,
    },

    /// The mirror tool could not be started (usually: not on `PATH`).
    #[error("could not run {program}: {source}")]
    ToolUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `backup all` finished, but some entries failed along the way.
    #[error(
        "{} of {total} configs failed to {}: {}",
        .failed.len(),
        .direction.verb(),
        join_names(.failed)
    )]
    Incomplete {
        direction: Direction,
        failed: Vec<ConfigName>,
        total: usize,
    },

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

fn join_names(names: &[ConfigName]) -> String {
    names
        .iter()
        .map(|name| name.0.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
