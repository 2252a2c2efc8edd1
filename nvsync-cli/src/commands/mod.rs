pub mod check;
pub mod list;
pub mod transfer;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args};

use nvsync_core::{paths, Locations, Manifest};
use nvsync_sync::rsync::DEFAULT_PROGRAM;

/// Flags accepted by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Repository root (default: parent of the directory holding this binary).
    #[arg(long, value_name = "DIR", global = true)]
    pub repo: Option<PathBuf>,

    /// rsync program name or path.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM, global = true)]
    pub rsync: String,

    /// Show what rsync would transfer without changing anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl GlobalArgs {
    pub fn repo_root(&self) -> Result<PathBuf> {
        paths::resolve_repo_root(self.repo.as_deref())
            .context("could not determine repository root")
    }

    pub fn locations(&self) -> Result<Locations> {
        Locations::resolve(self.repo.as_deref()).context("could not resolve config locations")
    }

    pub fn manifest(&self, repo_root: &Path) -> Result<Manifest> {
        Manifest::load_at(repo_root).context("failed to load config catalogue")
    }
}
