//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a single fixture.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture's contents.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir, returning the dir and the copy.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, load_fixture(name)).expect("Failed to write fixture copy");
    (dir, path)
}

/// The codekit binary, isolated from the user's config and environment.
///
/// `config_dir` holds the config file the command will see (absent unless
/// the test writes one).
pub fn codekit(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codekit"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("CODEKIT_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

/// Write `content` as the config file `codekit(dir)` will load.
pub fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("config.toml"), content).expect("Failed to write config");
}
