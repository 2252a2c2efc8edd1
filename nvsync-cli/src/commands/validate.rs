//! `nvsync validate` — every catalogue entry must exist in the repository.

use anyhow::{bail, Result};

use nvsync_sync::validate::repository_presence;

use crate::commands::GlobalArgs;
use crate::output;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let repo_root = global.repo_root()?;
    let manifest = global.manifest(&repo_root)?;

    output::heading("Validating configurations...");
    println!();

    let report = repository_presence(&repo_root, &manifest);
    for presence in &report {
        if presence.present {
            output::status(&presence.name.0, true, "");
        } else {
            output::status(
                &presence.name.0,
                false,
                format!("(missing: {})", presence.path.display()),
            );
        }
    }
    println!();

    let missing = report.iter().filter(|p| !p.present).count();
    if missing > 0 {
        bail!("{missing} configuration(s) missing from the repository");
    }
    output::success("All configurations are present!");
    Ok(())
}
