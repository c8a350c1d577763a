//! Shared testing utilities for rsvp CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no configuration file.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Create an environment whose `rsvp.toml` contains `content`.
    pub fn with_config(content: &str) -> Self {
        let ctx = Self::new();
        fs::write(ctx.config_path(), content).expect("Failed to write rsvp.toml");
        ctx
    }

    /// Create an environment pointing the collector at `url`.
    pub fn with_collector(url: &str) -> Self {
        Self::with_config(&format!("[gateway]\nurl = \"{}\"\ntimeout_secs = 2\n", url))
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the configuration file picked up from the working directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("rsvp.toml")
    }

    /// Build a command for invoking the compiled `rsvp` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rsvp").expect("Failed to locate rsvp binary");
        cmd.current_dir(self.work_dir())
            .env_remove("RSVP_CONFIG")
            .env_remove("RSVP_GATEWAY_URL")
            .env_remove("RUST_LOG");
        cmd
    }
}
