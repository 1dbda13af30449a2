//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment per test:
//! - A scratch backing file (via `XFILES_STORAGE`)
//! - A scratch working directory
//! - A scratch home directory (via `HOME`)
//!
//! Standard input is always given explicitly. Under a test harness it is
//! never a terminal, so a bare `xfiles` would read it as a replacement
//! list; `list()` therefore uses `xfiles +` with empty input, which adds
//! nothing and prints the list.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated storage, cwd, and home.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical working directory for invocations
    pub work_dir: PathBuf,
    /// Home directory exposed through `HOME`
    pub home_dir: PathBuf,
    /// Backing file location
    pub storage: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let work_dir = root.join("work");
        let home_dir = root.join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&home_dir).expect("Failed to create home dir");
        let storage = root.join("state").join("xfiles");

        Self {
            temp_dir,
            work_dir,
            home_dir,
            storage,
        }
    }

    /// Get a command builder with the environment pre-configured and
    /// empty piped input.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("xfiles").expect("Failed to find xfiles binary");
        cmd.current_dir(&self.work_dir)
            .env("XFILES_STORAGE", &self.storage)
            .env("XFILES_CONFIG", self.home_dir.join("no-config.yaml"))
            .env("HOME", &self.home_dir)
            .env_remove("XFILES_LOG_MODE")
            .write_stdin("");
        cmd
    }

    /// Run with arguments and piped input; assert success and return the
    /// output lines.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .write_stdin(stdin.to_string())
            .output()
            .expect("Failed to run xfiles");

        assert!(
            output.status.success(),
            "xfiles {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run with arguments and empty piped input.
    pub fn run(&self, args: &[&str]) -> Vec<String> {
        self.run_with_stdin(args, "")
    }

    /// The current list.
    pub fn list(&self) -> Vec<String> {
        self.run(&["+"])
    }

    /// Empty the list and check it is empty.
    pub fn reset(&self) {
        assert!(self.run(&["--"]).is_empty());
        assert!(self.list().is_empty());
    }

    /// Absolute path of `name` inside the working directory.
    pub fn work(&self, name: &str) -> String {
        format!("{}/{name}", self.work_dir.display())
    }

    /// Absolute path of `name` inside the home directory.
    pub fn home(&self, name: &str) -> String {
        format!("{}/{name}", self.home_dir.display())
    }

    /// Raw content of the backing file.
    pub fn storage_content(&self) -> String {
        fs::read_to_string(&self.storage).expect("Failed to read backing file")
    }

    /// Returns true if the backing file exists.
    pub fn storage_exists(&self) -> bool {
        Path::new(&self.storage).is_file()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
