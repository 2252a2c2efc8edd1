//! Domain types for the config catalogue.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a catalogue entry, e.g. `neovim`. Lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigName(pub String);

impl ConfigName {
    /// Case-insensitive comparison against user input.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for ConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ConfigName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConfigName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether an entry is mirrored as a whole tree or copied as a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    #[default]
    Directory,
    File,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Directory => write!(f, "directory"),
            ConfigKind::File => write!(f, "file"),
        }
    }
}

/// Direction of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Repository → live config.
    Update,
    /// Live config → repository.
    Backup,
}

impl Direction {
    /// The side a transfer in this direction reads from.
    pub fn source_side(self) -> Side {
        match self {
            Direction::Update => Side::Repository,
            Direction::Backup => Side::Live,
        }
    }

    /// Heading form: "Updating neovim config...".
    pub fn progressive(self) -> &'static str {
        match self {
            Direction::Update => "Updating",
            Direction::Backup => "Backing up",
        }
    }

    /// Completion form: "neovim config updated successfully".
    pub fn past(self) -> &'static str {
        match self {
            Direction::Update => "updated",
            Direction::Backup => "backed up",
        }
    }

    /// Imperative form: "failed to update neovim config".
    pub fn verb(self) -> &'static str {
        match self {
            Direction::Update => "update",
            Direction::Backup => "back up",
        }
    }
}

/// One of the two locations an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Repository,
    Live,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Repository => write!(f, "repository"),
            Side::Live => write!(f, "live"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A named config kept in sync between the repository and the home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub name: ConfigName,
    #[serde(default)]
    pub kind: ConfigKind,
    /// Path relative to the repository root.
    pub repo_path: PathBuf,
    /// Absolute path, or `~`-prefixed path relative to the home directory.
    pub system_path: PathBuf,
    /// Extra rsync exclude patterns on top of the fixed ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

impl ConfigEntry {
    pub fn new(
        name: &str,
        kind: ConfigKind,
        repo_path: impl Into<PathBuf>,
        system_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: ConfigName::from(name),
            kind,
            repo_path: repo_path.into(),
            system_path: system_path.into(),
            excludes: Vec::new(),
        }
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_name_matches_ignoring_case() {
        let name = ConfigName::from("oh-my-posh");
        assert!(name.matches("Oh-My-Posh"));
        assert!(!name.matches("oh-my-zsh"));
    }

    #[test]
    fn direction_reads_from_expected_side() {
        assert_eq!(Direction::Update.source_side(), Side::Repository);
        assert_eq!(Direction::Backup.source_side(), Side::Live);
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Update.progressive(), "Updating");
        assert_eq!(Direction::Backup.past(), "backed up");
        assert_eq!(Direction::Backup.verb(), "back up");
    }

    #[test]
    fn kind_defaults_to_directory_when_omitted() {
        let yaml = "name: nvim\nrepo_path: config/nvim\nsystem_path: ~/.config/nvim\n";
        let entry: ConfigEntry = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(entry.kind, ConfigKind::Directory);
        assert!(entry.excludes.is_empty());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ConfigKind::File.to_string(), "file");
        assert_eq!(ConfigKind::Directory.to_string(), "directory");
    }
}
