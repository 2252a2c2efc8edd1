//! Read-only health reports: catalogue presence and host readiness.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use nvsync_core::{ConfigName, Manifest, PathError};

use crate::rsync::Rsync;

/// Whether one catalogue entry exists on the repository side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub name: ConfigName,
    pub path: PathBuf,
    pub present: bool,
}

/// Check every entry's repository path. Only the repository root is needed.
pub fn repository_presence(repo_root: &Path, manifest: &Manifest) -> Vec<Presence> {
    manifest
        .configs
        .iter()
        .map(|entry| {
            let path = repo_root.join(&entry.repo_path);
            Presence {
                name: entry.name.clone(),
                present: path.exists(),
                path,
            }
        })
        .collect()
}

/// One line of `nvsync check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCheck {
    pub label: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Is the mirror tool on `PATH`, does the repository exist, is `$HOME` known,
/// and does the catalogue load?
///
/// Takes already-resolved roots so a failure in one does not hide the others.
pub fn check_host(
    program: &OsStr,
    repo_root: &Result<PathBuf, PathError>,
    home: &Result<PathBuf, PathError>,
) -> Vec<HostCheck> {
    let mut checks = Vec::with_capacity(4);

    checks.push(match Rsync::new(program).locate() {
        Some(path) => HostCheck {
            label: "mirror tool",
            passed: true,
            detail: path.display().to_string(),
        },
        None => HostCheck {
            label: "mirror tool",
            passed: false,
            detail: format!("{} not found on PATH", program.to_string_lossy()),
        },
    });

    checks.push(match repo_root {
        Ok(root) if root.is_dir() => HostCheck {
            label: "repository",
            passed: true,
            detail: root.display().to_string(),
        },
        Ok(root) => HostCheck {
            label: "repository",
            passed: false,
            detail: format!("{} is not a directory", root.display()),
        },
        Err(err) => HostCheck {
            label: "repository",
            passed: false,
            detail: err.to_string(),
        },
    });

    checks.push(match home {
        Ok(home) => HostCheck {
            label: "home directory",
            passed: true,
            detail: home.display().to_string(),
        },
        Err(err) => HostCheck {
            label: "home directory",
            passed: false,
            detail: err.to_string(),
        },
    });

    if let Ok(root) = repo_root {
        checks.push(match Manifest::load_at(root) {
            Ok(manifest) => HostCheck {
                label: "catalogue",
                passed: true,
                detail: format!("{} configs", manifest.configs.len()),
            },
            Err(err) => HostCheck {
                label: "catalogue",
                passed: false,
                detail: err.to_string(),
            },
        });
    }

    checks
}
