//! Colored terminal output shared by every command.
//!
//! Headings are bold cyan, labels dim, success bold green, warnings bold
//! yellow and errors bold red on stderr.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

pub fn heading(message: &str) {
    println!("{}", message.cyan().bold());
}

/// `Source: /path` with a dim label.
pub fn field(label: &str, path: &Path) {
    println!("{} {}", label.dimmed(), path.display());
}

pub fn dim_line(line: &str) {
    println!("  {}", line.dimmed());
}

pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

pub fn warn(message: &str) {
    println!("{}", message.yellow().bold());
}

/// `  name ✓` / `  name ✗ (detail)`
pub fn status(name: &str, passed: bool, detail: impl Display) {
    if passed {
        println!(
            "  {} {} {}",
            name.magenta().bold(),
            "✓".green().bold(),
            detail.to_string().dimmed()
        );
    } else {
        println!("  {} {} {}", name.magenta().bold(), "✗".red().bold(), detail);
    }
}

/// `Error: <context>: <cause>...` on stderr.
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "Error:".red().bold());
}
