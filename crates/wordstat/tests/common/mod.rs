//! Shared test utilities for wordstat integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Path to a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// A `wordstat` command with an empty, private config directory so the
/// developer's own profiles never leak into a test.
pub fn wordstat_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordstat"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}
