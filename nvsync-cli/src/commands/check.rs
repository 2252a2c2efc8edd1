//! `nvsync check` — can this host run a sync at all?

use std::ffi::OsStr;

use anyhow::{bail, Result};

use nvsync_core::paths;
use nvsync_sync::validate::check_host;

use crate::commands::GlobalArgs;
use crate::output;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let repo_root = paths::resolve_repo_root(global.repo.as_deref());
    let home = paths::home();

    output::heading("Running checks...");
    println!();

    let checks = check_host(OsStr::new(&global.rsync), &repo_root, &home);
    for check in &checks {
        output::status(check.label, check.passed, &check.detail);
    }
    println!();

    let failed: Vec<_> = checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.label)
        .collect();
    if !failed.is_empty() {
        bail!("checks failed: {}", failed.join(", "));
    }
    output::success("All checks passed!");
    Ok(())
}
