//! The config catalogue.
//!
//! The built-in catalogue covers neovim plus the shell, prompt, terminal and
//! asdf configs kept next to it in the repository. A repository can replace
//! it wholesale with an `nvsync.yaml` at its root:
//!
//! ```yaml
//! configs:
//!   - name: neovim
//!     kind: directory
//!     repo_path: config/nvim
//!     system_path: ~/.config/nvim
//!   - name: alacritty
//!     repo_path: config/alacritty
//!     system_path: ~/.config/alacritty
//!     excludes: [".DS_Store"]
//! ```

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::types::{ConfigEntry, ConfigKind};

/// File name of the optional catalogue override at the repository root.
pub const MANIFEST_FILE: &str = "nvsync.yaml";

/// Entry used by `update` / `backup` when no name is given.
pub const DEFAULT_CONFIG: &str = "neovim";

/// Command-line name selecting every entry. No entry may use it.
pub const ALL_CONFIGS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub configs: Vec<ConfigEntry>,
}

impl Manifest {
    /// The catalogue used when the repository has no `nvsync.yaml`.
    pub fn builtin() -> Self {
        Self {
            configs: vec![
                ConfigEntry::new(
                    "neovim",
                    ConfigKind::Directory,
                    "config/nvim",
                    "~/.config/nvim",
                ),
                ConfigEntry::new("zsh", ConfigKind::File, "config/zshrc", "~/.zshrc"),
                ConfigEntry::new(
                    "asdf",
                    ConfigKind::File,
                    "config/tool-versions",
                    "~/.tool-versions",
                ),
                ConfigEntry::new(
                    "alacritty",
                    ConfigKind::Directory,
                    "config/alacritty",
                    "~/.config/alacritty",
                )
                .with_excludes([".DS_Store"]),
                ConfigEntry::new("oh-my-posh", ConfigKind::File, "config/omp.json", "~/.omp.json"),
            ],
        }
    }

    /// `<repo_root>/nvsync.yaml` — pure, no I/O.
    pub fn path_at(repo_root: &Path) -> PathBuf {
        repo_root.join(MANIFEST_FILE)
    }

    /// Load `<repo_root>/nvsync.yaml`, falling back to [`Manifest::builtin`]
    /// when the file does not exist.
    pub fn load_at(repo_root: &Path) -> Result<Self, ManifestError> {
        let path = Self::path_at(repo_root);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::builtin()),
            Err(source) => return Err(ManifestError::Io { path, source }),
        };
        Self::parse(&path, &contents)
    }

    /// Parse and validate manifest YAML. `path` is only used in errors.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest =
            serde_yaml::from_str(contents).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        manifest.validate(path)?;
        Ok(manifest)
    }

    fn validate(&self, path: &Path) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for entry in &self.configs {
            let name = entry.name.0.trim();
            if name.is_empty() {
                return Err(ManifestError::EmptyName {
                    path: path.to_path_buf(),
                });
            }
            if name.eq_ignore_ascii_case(ALL_CONFIGS) {
                return Err(ManifestError::ReservedName {
                    path: path.to_path_buf(),
                    name: entry.name.0.clone(),
                });
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(ManifestError::DuplicateName {
                    path: path.to_path_buf(),
                    name: entry.name.0.clone(),
                });
            }
            if let Some(reason) = path_violation(entry) {
                return Err(ManifestError::InvalidPath {
                    path: path.to_path_buf(),
                    name: entry.name.0.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&ConfigEntry> {
        self.configs.iter().find(|entry| entry.name.matches(name))
    }

    /// Like [`Manifest::find`], but an unknown name is an error listing the
    /// available entries.
    pub fn get(&self, name: &str) -> Result<&ConfigEntry, ManifestError> {
        self.find(name).ok_or_else(|| ManifestError::UnknownConfig {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.configs.iter().map(|entry| entry.name.0.as_str()).collect()
    }
}

/// `repo_path` must stay inside the repository and `system_path` must not
/// depend on the working directory.
fn path_violation(entry: &ConfigEntry) -> Option<&'static str> {
    let repo = &entry.repo_path;
    if repo.has_root() || repo.is_absolute() {
        return Some("repo_path must be relative to the repository root");
    }
    if repo.components().any(|c| c == Component::ParentDir) {
        return Some("repo_path must not contain '..'");
    }
    if !repo.components().any(|c| matches!(c, Component::Normal(_))) {
        return Some("repo_path must name a path inside the repository");
    }

    let system = &entry.system_path;
    if system.components().any(|c| c == Component::ParentDir) {
        return Some("system_path must not contain '..'");
    }
    let home_relative = matches!(
        system.components().next(),
        Some(Component::Normal(first)) if first == "~"
    );
    if !system.is_absolute() && !home_relative {
        return Some("system_path must be absolute or start with '~/'");
    }
    None
}
