//! The rsync invoker.
//!
//! Everything about copying, deleting and comparing files is rsync's job.
//! This module only decides the argument list and interprets the exit status.
//!
//! ```text
//! rsync -av [--delete] --exclude=.git --exclude=*.swp --exclude=*.swo \
//!       [--exclude=<entry excludes>...] [--dry-run] <source>/ <target>/
//! ```
//!
//! Directory entries get `--delete` and trailing slashes (mirror the
//! contents); file entries get neither.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use nvsync_core::ConfigKind;

use crate::error::SyncError;

/// Program used when `--rsync` is not given.
pub const DEFAULT_PROGRAM: &str = "rsync";

/// Patterns excluded from every transfer: VCS metadata and vim swap files.
pub const BASE_EXCLUDES: [&str; 3] = [".git", "*.swp", "*.swo"];

/// One transfer request handed to a [`Mirror`].
#[derive(Debug, Clone)]
pub struct MirrorJob<'a> {
    pub source: &'a Path,
    pub target: &'a Path,
    pub kind: ConfigKind,
    pub excludes: &'a [String],
    pub dry_run: bool,
}

/// What the tool printed on success, one entry per non-empty stdout line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    pub lines: Vec<String>,
}

/// The seam between the pipeline and the external tool.
pub trait Mirror {
    /// Mirror `job.source` onto `job.target`, blocking until done.
    fn mirror(&self, job: &MirrorJob<'_>) -> Result<MirrorReport, SyncError>;
}

/// Build the rsync argument list for `job`.
pub fn rsync_args(job: &MirrorJob<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-av".into()];
    if job.kind == ConfigKind::Directory {
        args.push("--delete".into());
    }
    for pattern in BASE_EXCLUDES
        .iter()
        .copied()
        .chain(job.excludes.iter().map(String::as_str))
    {
        args.push(format!("--exclude={pattern}").into());
    }
    if job.dry_run {
        args.push("--dry-run".into());
    }
    match job.kind {
        ConfigKind::Directory => {
            args.push(with_trailing_slash(job.source));
            args.push(with_trailing_slash(job.target));
        }
        ConfigKind::File => {
            args.push(job.source.as_os_str().to_owned());
            args.push(job.target.as_os_str().to_owned());
        }
    }
    args
}

fn with_trailing_slash(path: &Path) -> OsString {
    let mut s = path.as_os_str().to_owned();
    if !path.as_os_str().to_string_lossy().ends_with('/') {
        s.push("/");
    }
    s
}

/// [`Mirror`] backed by a spawned `rsync` process.
#[derive(Debug, Clone)]
pub struct Rsync {
    program: OsString,
}

impl Default for Rsync {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Rsync {
    /// `program` is a bare name looked up on `PATH`, or a path.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Where `program` resolves on `PATH`, if anywhere.
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.program).ok()
    }

    fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Mirror for Rsync {
    fn mirror(&self, job: &MirrorJob<'_>) -> Result<MirrorReport, SyncError> {
        let args = rsync_args(job);
        tracing::debug!(program = %self.display_name(), ?args, "spawning mirror");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| SyncError::ToolUnavailable {
                program: self.display_name(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = if stderr.trim().is_empty() {
                stdout.trim_end()
            } else {
                stderr.trim_end()
            };
            return Err(SyncError::ToolFailed {
                program: self.display_name(),
                status: output.status,
                diagnostic: diagnostic.to_string(),
            });
        }

        let lines: Vec<String> = stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        for line in &lines {
            tracing::debug!("{line}");
        }
        Ok(MirrorReport { lines })
    }
}
