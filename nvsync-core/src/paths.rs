//! Repository and home directory resolution.
//!
//! # Layout
//!
//! ```text
//! <repo>/
//!   bin/nvsync            (installed binary; <repo> = parent of its directory)
//!   nvsync.yaml           (optional catalogue override)
//!   config/nvim/          (repository-side neovim config)
//! ~/.config/nvim/         (live neovim config)
//! ```
//!
//! # API pattern
//!
//! Resolution is split the same way as everywhere else in the workspace:
//! - pure helpers taking explicit roots (`expand_home`, `repo_root_from_exe`,
//!   [`Locations::new`]) — used in tests with `TempDir`
//! - `resolve`-style functions that consult the process environment
//!
//! Nothing here checks that a path exists.

use std::path::{Path, PathBuf};

use crate::error::PathError;
use crate::types::{ConfigEntry, Direction};

/// `dirs::home_dir()` or [`PathError::HomeNotFound`].
pub fn home() -> Result<PathBuf, PathError> {
    dirs::home_dir().ok_or(PathError::HomeNotFound)
}

/// The repository root for a binary at `exe`: the parent of the directory
/// containing it. Pure, no I/O.
pub fn repo_root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Repository root derived from the running executable.
///
/// Symlinks are resolved first so a binary linked into `~/.local/bin` still
/// finds its checkout.
pub fn repo_root() -> Result<PathBuf, PathError> {
    let exe = std::env::current_exe().map_err(PathError::ExecutableNotFound)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    repo_root_from_exe(&exe).ok_or(PathError::NoRepoRoot { exe })
}

/// `override_root` anchored at the working directory when relative, else
/// [`repo_root`].
pub fn resolve_repo_root(override_root: Option<&Path>) -> Result<PathBuf, PathError> {
    match override_root {
        Some(root) if root.is_absolute() => Ok(root.to_path_buf()),
        Some(root) => Ok(std::env::current_dir()
            .map_err(PathError::CurrentDir)?
            .join(root)),
        None => repo_root(),
    }
}

/// Expand a leading `~` component to `home`.
///
/// `~` → `home`, `~/x` → `home/x`; anything else (including `~user/x`) is
/// returned unchanged.
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// The two roots every entry path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub repo_root: PathBuf,
    pub home: PathBuf,
}

impl Locations {
    pub fn new(repo_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            home: home.into(),
        }
    }

    /// Resolve both roots from the process environment.
    pub fn resolve(repo_override: Option<&Path>) -> Result<Self, PathError> {
        Ok(Self {
            repo_root: resolve_repo_root(repo_override)?,
            home: home()?,
        })
    }

    /// `<repo_root>/<repo_path>`
    pub fn repo_path(&self, entry: &ConfigEntry) -> PathBuf {
        self.repo_root.join(&entry.repo_path)
    }

    /// `system_path` with `~` expanded against `home`.
    pub fn live_path(&self, entry: &ConfigEntry) -> PathBuf {
        expand_home(&entry.system_path, &self.home)
    }

    /// `(source, target)` for a transfer of `entry` in `direction`.
    pub fn endpoints(&self, entry: &ConfigEntry, direction: Direction) -> (PathBuf, PathBuf) {
        let repo = self.repo_path(entry);
        let live = self.live_path(entry);
        match direction {
            Direction::Update => (repo, live),
            Direction::Backup => (live, repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfigKind;

    fn nvim() -> ConfigEntry {
        ConfigEntry::new("neovim", ConfigKind::Directory, "config/nvim", "~/.config/nvim")
    }

    #[test]
    fn expand_home_variants() {
        let home = Path::new("/home/tester");
        assert_eq!(expand_home(Path::new("~"), home), PathBuf::from("/home/tester"));
        assert_eq!(
            expand_home(Path::new("~/.config/nvim"), home),
            PathBuf::from("/home/tester/.config/nvim")
        );
        assert_eq!(expand_home(Path::new("/etc/zshrc"), home), PathBuf::from("/etc/zshrc"));
        assert_eq!(expand_home(Path::new("~other/x"), home), PathBuf::from("~other/x"));
    }

    #[test]
    fn repo_root_is_parent_of_binary_dir() {
        assert_eq!(
            repo_root_from_exe(Path::new("/src/dotfiles/bin/nvsync")),
            Some(PathBuf::from("/src/dotfiles"))
        );
        assert_eq!(repo_root_from_exe(Path::new("nvsync")), None);
    }

    #[test]
    fn absolute_override_is_used_verbatim() {
        let root = resolve_repo_root(Some(Path::new("/srv/dots"))).expect("resolve");
        assert_eq!(root, PathBuf::from("/srv/dots"));
    }

    #[test]
    fn relative_override_is_anchored_at_cwd() {
        let root = resolve_repo_root(Some(Path::new("dots"))).expect("resolve");
        assert!(root.is_absolute());
        assert!(root.ends_with("dots"));
    }

    #[test]
    fn default_neovim_locations() {
        let loc = Locations::new("/repo", "/home/tester");
        assert_eq!(loc.repo_path(&nvim()), PathBuf::from("/repo/config/nvim"));
        assert_eq!(loc.live_path(&nvim()), PathBuf::from("/home/tester/.config/nvim"));
    }

    #[test]
    fn endpoints_follow_direction() {
        let loc = Locations::new("/repo", "/home/tester");
        let (src, dst) = loc.endpoints(&nvim(), Direction::Update);
        assert_eq!(src, PathBuf::from("/repo/config/nvim"));
        assert_eq!(dst, PathBuf::from("/home/tester/.config/nvim"));

        let (src, dst) = loc.endpoints(&nvim(), Direction::Backup);
        assert_eq!(src, PathBuf::from("/home/tester/.config/nvim"));
        assert_eq!(dst, PathBuf::from("/repo/config/nvim"));
    }
}
