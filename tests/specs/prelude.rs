//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the groom binary with a clean
/// environment for color and logging.
pub fn groom_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("groom"));
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("GROOM_LOG");
    cmd
}

/// Creates a temp project marked as a repository boundary so config
/// discovery never escapes into the host filesystem.
pub fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Writes a file under `root`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
