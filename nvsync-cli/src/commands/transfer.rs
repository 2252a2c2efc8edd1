//! `nvsync update` / `nvsync backup` — mirror configs in either direction.

use anyhow::{Context, Result};
use clap::Args;

use nvsync_core::{Direction, DEFAULT_CONFIG};
use nvsync_sync::{
    pipeline::{self, SyncEvent, SyncOptions, SyncScope},
    Rsync,
};

use crate::commands::GlobalArgs;
use crate::output;

/// Arguments shared by `update` and `backup`.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Config to sync, or `all` (see `nvsync list`).
    #[arg(value_name = "NAME", default_value = DEFAULT_CONFIG)]
    pub name: String,
}

impl TransferArgs {
    pub fn run(self, direction: Direction, global: &GlobalArgs) -> Result<()> {
        let locations = global.locations()?;
        tracing::debug!(
            repo = %locations.repo_root.display(),
            home = %locations.home.display(),
            "resolved locations"
        );
        let manifest = global.manifest(&locations.repo_root)?;
        let scope = SyncScope::from_arg(&self.name);
        let rsync = Rsync::new(&global.rsync);
        let options = SyncOptions {
            dry_run: global.dry_run,
        };
        let show_lines = global.dry_run || global.verbose > 0;

        if scope == SyncScope::All {
            output::heading(&format!("{} all configurations...", direction.progressive()));
            println!();
        }

        let mut on_event = |event: SyncEvent<'_>| match event {
            SyncEvent::Started(plan) => {
                output::heading(&format!("{} {} config...", direction.progressive(), plan.name));
                output::field("Source:", &plan.source);
                output::field("Target:", &plan.target);
            }
            SyncEvent::Completed(outcome) => {
                if show_lines {
                    for line in &outcome.lines {
                        output::dim_line(line);
                    }
                }
                if outcome.dry_run {
                    output::success(&format!(
                        "[dry-run] {} config would be {}",
                        outcome.plan.name,
                        direction.past()
                    ));
                } else {
                    output::success(&format!(
                        "{} config {} successfully",
                        outcome.plan.name,
                        direction.past()
                    ));
                }
                if scope == SyncScope::All {
                    println!();
                }
            }
            SyncEvent::Skipped(name, err) => {
                output::warn(&format!(
                    "Warning: failed to {} {name}: {err}",
                    direction.verb()
                ));
                println!();
            }
        };

        let outcomes = pipeline::run(
            &locations,
            &manifest,
            &scope,
            direction,
            &rsync,
            options,
            &mut on_event,
        )
        .with_context(|| match &scope {
            SyncScope::All => format!("failed to {} configurations", direction.verb()),
            SyncScope::Config(name) => format!("failed to {} {name} config", direction.verb()),
        })?;

        if scope == SyncScope::All {
            output::success(&format!(
                "All {} configurations {}!",
                outcomes.len(),
                direction.past()
            ));
        }
        Ok(())
    }
}
