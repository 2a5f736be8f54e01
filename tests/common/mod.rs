//! Common test utilities for Dreamz integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, uninitialized test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a test workspace and run `dreamz init` in it
    #[allow(dead_code)]
    pub fn initialized() -> Self {
        let workspace = Self::new();
        workspace.cmd().arg("init").assert().success();
        workspace
    }

    /// Command running in this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = dreamz_cmd();
        cmd.current_dir(&self.path);
        cmd
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Run a command that must succeed and return its stdout
    #[allow(dead_code)]
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success().get_output().clone();
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}

/// The dreamz binary, isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn dreamz_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dreamz").expect("dreamz binary not built");
    cmd.env_remove("DREAMZ_WORKSPACE").env_remove("DREAMZ_LOG");
    cmd
}
