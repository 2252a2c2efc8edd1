//! nvsync — keep neovim (and friends) in sync between a dotfiles repository
//! and the home directory.
//!
//! # Usage
//!
//! ```text
//! nvsync update [NAME|all]     repository → ~/.config/nvim (default: neovim)
//! nvsync backup [NAME|all]     ~/.config/nvim → repository
//! nvsync list [--json]
//! nvsync validate
//! nvsync check
//! ```

mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{list::ListArgs, transfer::TransferArgs, GlobalArgs};
use nvsync_core::Direction;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "nvsync",
    version,
    about = "Synchronize neovim configuration between this repository and ~/.config/nvim",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sync config from the repository to the live location (~/.config/nvim).
    Update(TransferArgs),

    /// Back up the live config (~/.config/nvim) into the repository.
    Backup(TransferArgs),

    /// List available configurations.
    List(ListArgs),

    /// Verify every configuration exists in the repository.
    Validate,

    /// Check that rsync, the repository and the home directory are usable.
    Check,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.global.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.global.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Update(args) => args.run(Direction::Update, &cli.global),
        Commands::Backup(args) => args.run(Direction::Backup, &cli.global),
        Commands::List(args) => args.run(&cli.global),
        Commands::Validate => commands::validate::run(&cli.global),
        Commands::Check => commands::check::run(&cli.global),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
