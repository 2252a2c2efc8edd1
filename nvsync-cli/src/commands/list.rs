//! `nvsync list` — show the config catalogue.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use nvsync_core::{ConfigEntry, Manifest, MANIFEST_FILE};

use crate::commands::GlobalArgs;
use crate::output;

/// Arguments for `nvsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "kind")]
    kind: String,
    #[tabled(rename = "repository")]
    repository: String,
    #[tabled(rename = "system")]
    system: String,
}

#[derive(Serialize)]
struct ListJson<'a> {
    source: String,
    configs: &'a [ConfigEntry],
}

impl ListArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let repo_root = global.repo_root()?;
        let manifest = global.manifest(&repo_root)?;
        let manifest_path = Manifest::path_at(&repo_root);
        let source = if manifest_path.exists() {
            manifest_path.display().to_string()
        } else {
            "builtin".to_string()
        };

        if self.json {
            let payload = ListJson {
                source,
                configs: &manifest.configs,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize config list")?
            );
            return Ok(());
        }

        output::heading("Available Configurations:");
        if manifest.configs.is_empty() {
            println!("No configurations defined in {MANIFEST_FILE}.");
            return Ok(());
        }

        let rows: Vec<ConfigRow> = manifest
            .configs
            .iter()
            .map(|entry| ConfigRow {
                name: entry.name.to_string(),
                kind: entry.kind.to_string(),
                repository: entry.repo_path.display().to_string(),
                system: entry.system_path.display().to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("Catalogue: {source}");
        Ok(())
    }
}
