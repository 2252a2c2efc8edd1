//! Shared sync pipeline entrypoint used by the `update` and `backup` commands.
//!
//! A transfer is two steps:
//!
//! 1. [`plan`] — resolve source and target for the direction and check that
//!    the source exists. Failing here means nothing was touched.
//! 2. [`execute`] — create the target (or its parent for file entries) and
//!    hand the job to a [`Mirror`].
//!
//! [`run`] applies both steps to a [`SyncScope`] and reports progress through
//! a callback so the caller decides how to render it.

use std::path::PathBuf;

use nvsync_core::{
    ConfigEntry, ConfigKind, ConfigName, Direction, Locations, Manifest, ALL_CONFIGS,
};

use crate::error::{io_err, SyncError};
use crate::rsync::{Mirror, MirrorJob};

/// Which entries a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Every entry in the catalogue.
    All,
    /// A single entry, looked up case-insensitively.
    Config(String),
}

impl SyncScope {
    /// `"all"` (any case) selects everything; anything else names an entry.
    /// Catalogues cannot contain an entry called `all`.
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case(ALL_CONFIGS) {
            SyncScope::All
        } else {
            SyncScope::Config(arg.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Pass `--dry-run` to the mirror and create no directories.
    pub dry_run: bool,
}

/// A validated transfer: the source is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    pub name: ConfigName,
    pub direction: Direction,
    pub kind: ConfigKind,
    pub source: PathBuf,
    pub target: PathBuf,
    pub excludes: Vec<String>,
}

/// Result of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub plan: SyncPlan,
    /// The mirror's stdout lines (files transferred, rsync summary).
    pub lines: Vec<String>,
    pub dry_run: bool,
}

/// Progress notifications emitted by [`run`].
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// About to mirror.
    Started(&'a SyncPlan),
    /// Mirror finished successfully.
    Completed(&'a SyncOutcome),
    /// Entry failed but the run continues (`backup all` only).
    Skipped(&'a ConfigName, &'a SyncError),
}

/// Resolve endpoints for `entry` and check the source exists.
pub fn plan(
    locations: &Locations,
    entry: &ConfigEntry,
    direction: Direction,
) -> Result<SyncPlan, SyncError> {
    let (source, target) = locations.endpoints(entry, direction);
    if !source.exists() {
        return Err(SyncError::MissingSource {
            name: entry.name.clone(),
            side: direction.source_side(),
            path: source,
        });
    }
    Ok(SyncPlan {
        name: entry.name.clone(),
        direction,
        kind: entry.kind,
        source,
        target,
        excludes: entry.excludes.clone(),
    })
}

/// Create the directory rsync writes into: the target itself for directory
/// entries, its parent for file entries.
pub fn prepare_target(plan: &SyncPlan) -> Result<(), SyncError> {
    let dir = match plan.kind {
        ConfigKind::Directory => Some(plan.target.as_path()),
        ConfigKind::File => plan.target.parent(),
    };
    if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    Ok(())
}

/// Prepare the target and run the mirror for `plan`.
pub fn execute(
    plan: SyncPlan,
    mirror: &dyn Mirror,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    if !options.dry_run {
        prepare_target(&plan)?;
    }

    let report = mirror.mirror(&MirrorJob {
        source: &plan.source,
        target: &plan.target,
        kind: plan.kind,
        excludes: &plan.excludes,
        dry_run: options.dry_run,
    })?;

    tracing::info!(
        config = %plan.name,
        source = %plan.source.display(),
        target = %plan.target.display(),
        dry_run = options.dry_run,
        "sync complete"
    );
    Ok(SyncOutcome {
        plan,
        lines: report.lines,
        dry_run: options.dry_run,
    })
}

/// Select the entries `scope` covers, in catalogue order.
pub fn select<'m>(
    manifest: &'m Manifest,
    scope: &SyncScope,
) -> Result<Vec<&'m ConfigEntry>, SyncError> {
    match scope {
        SyncScope::All => Ok(manifest.configs.iter().collect()),
        SyncScope::Config(name) => Ok(vec![manifest.get(name)?]),
    }
}

/// Run the pipeline for a scope.
///
/// Single entries and `update all` stop at the first error. `backup all`
/// reports each failure as [`SyncEvent::Skipped`], keeps going, and returns
/// [`SyncError::Incomplete`] at the end if anything failed, so one missing
/// live config does not block backing up the rest.
pub fn run(
    locations: &Locations,
    manifest: &Manifest,
    scope: &SyncScope,
    direction: Direction,
    mirror: &dyn Mirror,
    options: SyncOptions,
    on_event: &mut dyn FnMut(SyncEvent<'_>),
) -> Result<Vec<SyncOutcome>, SyncError> {
    let entries = select(manifest, scope)?;
    let keep_going = *scope == SyncScope::All && direction == Direction::Backup;

    let mut outcomes = Vec::with_capacity(entries.len());
    let mut failed = Vec::new();
    for entry in &entries {
        let result = plan(locations, entry, direction).and_then(|plan| {
            on_event(SyncEvent::Started(&plan));
            execute(plan, mirror, options)
        });
        match result {
            Ok(outcome) => {
                on_event(SyncEvent::Completed(&outcome));
                outcomes.push(outcome);
            }
            Err(err) if keep_going => {
                tracing::warn!(config = %entry.name, error = %err, "skipping config");
                on_event(SyncEvent::Skipped(&entry.name, &err));
                failed.push(entry.name.clone());
            }
            Err(err) => return Err(err),
        }
    }

    if !failed.is_empty() {
        return Err(SyncError::Incomplete {
            direction,
            failed,
            total: entries.len(),
        });
    }
    Ok(outcomes)
}
