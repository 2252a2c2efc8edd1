//! End-to-end mirror behaviour against a real `rsync`, plus failure
//! propagation through a stub tool.
//!
//! Tests that need rsync return early when it is not on `PATH`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use nvsync_core::{ConfigEntry, ConfigKind, Direction, Locations, Manifest};
use nvsync_sync::{
    pipeline::{self, SyncOptions},
    Rsync, SyncError,
};
use tempfile::TempDir;

fn rsync_available() -> bool {
    if which::which("rsync").is_ok() {
        return true;
    }
    eprintln!("skipping: rsync not on PATH");
    false
}

/// Relative paths of every regular file under `root`, recursively.
fn file_set(root: &Path) -> BTreeSet<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<PathBuf>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let path = entry.expect("entry").path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.insert(path.strip_prefix(root).expect("prefix").to_path_buf());
            }
        }
    }
    let mut out = BTreeSet::new();
    if root.exists() {
        walk(root, root, &mut out);
    }
    out
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}

fn populate_repo_nvim(repo: &Path) -> PathBuf {
    let nvim = repo.join("config").join("nvim");
    write(&nvim.join("init.lua"), "require('plugins')\n");
    write(&nvim.join("lua/plugins.lua"), "return {}\n");
    write(&nvim.join("after/ftplugin/rust.lua"), "vim.opt_local.tw = 100\n");
    write(&nvim.join(".git/HEAD"), "ref: refs/heads/main\n");
    write(&nvim.join(".init.lua.swp"), "swap");
    write(&nvim.join("lua/.plugins.lua.swo"), "swap");
    nvim
}

fn nvim() -> ConfigEntry {
    Manifest::builtin().get("neovim").expect("neovim").clone()
}

#[test]
fn update_into_missing_target_copies_everything_but_excludes() {
    if !rsync_available() {
        return;
    }
    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    populate_repo_nvim(repo.path());
    let loc = Locations::new(repo.path(), home.path());

    let plan = pipeline::plan(&loc, &nvim(), Direction::Update).expect("plan");
    let outcome = pipeline::execute(plan, &Rsync::default(), SyncOptions::default()).expect("sync");
    assert!(!outcome.lines.is_empty(), "rsync -v prints a file list");

    let expected: BTreeSet<PathBuf> = ["init.lua", "lua/plugins.lua", "after/ftplugin/rust.lua"]
        .into_iter()
        .map(PathBuf::from)
        .collect();
    assert_eq!(file_set(&home.path().join(".config/nvim")), expected);
}

#[test]
fn update_deletes_stray_target_files() {
    if !rsync_available() {
        return;
    }
    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    populate_repo_nvim(repo.path());
    let live = home.path().join(".config/nvim");
    write(&live.join("lua/old_plugin.lua"), "-- removed upstream\n");
    write(&live.join("init.lua"), "-- stale\n");
    let loc = Locations::new(repo.path(), home.path());

    let plan = pipeline::plan(&loc, &nvim(), Direction::Update).expect("plan");
    pipeline::execute(plan, &Rsync::default(), SyncOptions::default()).expect("sync");

    assert!(!live.join("lua/old_plugin.lua").exists(), "stray file must be deleted");
    assert_eq!(
        fs::read_to_string(live.join("init.lua")).expect("read"),
        "require('plugins')\n"
    );
}

#[test]
fn backup_mirrors_live_config_into_repository() {
    if !rsync_available() {
        return;
    }
    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    let live = home.path().join(".config/nvim");
    write(&live.join("init.lua"), "-- edited locally\n");
    write(&repo.path().join("config/nvim/gone.lua"), "-- deleted locally\n");
    let loc = Locations::new(repo.path(), home.path());

    let plan = pipeline::plan(&loc, &nvim(), Direction::Backup).expect("plan");
    pipeline::execute(plan, &Rsync::default(), SyncOptions::default()).expect("sync");

    assert_eq!(
        file_set(&repo.path().join("config/nvim")),
        BTreeSet::from([PathBuf::from("init.lua")])
    );
}

#[test]
fn file_entry_copies_single_file() {
    if !rsync_available() {
        return;
    }
    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    write(&repo.path().join("config/zshrc"), "export EDITOR=nvim\n");
    let entry = ConfigEntry::new("zsh", ConfigKind::File, "config/zshrc", "~/.zshrc");
    let loc = Locations::new(repo.path(), home.path());

    let plan = pipeline::plan(&loc, &entry, Direction::Update).expect("plan");
    pipeline::execute(plan, &Rsync::default(), SyncOptions::default()).expect("sync");

    assert_eq!(
        fs::read_to_string(home.path().join(".zshrc")).expect("read"),
        "export EDITOR=nvim\n"
    );
}

#[test]
fn dry_run_leaves_target_untouched() {
    if !rsync_available() {
        return;
    }
    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    populate_repo_nvim(repo.path());
    let live = home.path().join(".config/nvim");
    write(&live.join("keep.lua"), "-- local\n");
    let loc = Locations::new(repo.path(), home.path());

    let plan = pipeline::plan(&loc, &nvim(), Direction::Update).expect("plan");
    let outcome =
        pipeline::execute(plan, &Rsync::default(), SyncOptions { dry_run: true }).expect("sync");

    assert!(outcome.dry_run);
    assert_eq!(file_set(&live), BTreeSet::from([PathBuf::from("keep.lua")]));
}

#[cfg(unix)]
#[test]
fn failing_tool_surfaces_diagnostic() {
    use std::os::unix::fs::PermissionsExt;

    let repo = TempDir::new().expect("repo");
    let home = TempDir::new().expect("home");
    let tools = TempDir::new().expect("tools");
    populate_repo_nvim(repo.path());

    let stub = tools.path().join("fake-rsync");
    fs::write(
        &stub,
        "#!/bin/sh\necho 'rsync: [receiver] mkstemp failed: Permission denied (13)' >&2\nexit 23\n",
    )
    .expect("write stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).expect("chmod");

    let loc = Locations::new(repo.path(), home.path());
    let plan = pipeline::plan(&loc, &nvim(), Direction::Update).expect("plan");
    let err = pipeline::execute(plan, &Rsync::new(&stub), SyncOptions::default()).unwrap_err();

    match &err {
        SyncError::ToolFailed {
            status, diagnostic, ..
        } => {
            assert_eq!(status.code(), Some(23));
            assert_eq!(
                diagnostic,
                "rsync: [receiver] mkstemp failed: Permission denied (13)"
            );
        }
        other => panic!("expected ToolFailed, got: {other}"),
    }
    assert!(err.to_string().contains("Permission denied (13)"));
}
