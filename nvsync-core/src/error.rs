//! Error types for nvsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from resolving the repository root or the home directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// `std::env::current_exe()` failed.
    #[error("cannot locate the running executable: {0}")]
    ExecutableNotFound(#[source] std::io::Error),

    /// The executable sits too close to the filesystem root to have a
    /// repository directory above it.
    #[error("no repository root above executable {exe}; pass --repo")]
    NoRepoRoot { exe: PathBuf },

    /// A relative `--repo` could not be anchored to the working directory.
    #[error("cannot read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Errors from loading or querying the config catalogue.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Reading `nvsync.yaml` failed for a reason other than absence.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with the manifest path for context.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two entries share a name (compared case-insensitively).
    #[error("duplicate config '{name}' in {path}")]
    DuplicateName { path: PathBuf, name: String },

    /// An entry has a blank name.
    #[error("config with empty name in {path}")]
    EmptyName { path: PathBuf },

    /// An entry uses a name the command line gives another meaning.
    #[error("config name '{name}' in {path} is reserved")]
    ReservedName { path: PathBuf, name: String },

    /// An entry path would resolve outside the root it belongs to.
    #[error("config '{name}' in {path}: {reason}")]
    InvalidPath {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },

    /// A lookup named a config the catalogue does not contain.
    #[error("unknown config '{name}'; available: {available}")]
    UnknownConfig { name: String, available: String },
}
