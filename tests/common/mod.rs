//! Shared testing utilities for alternate CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SINGLE_ALTERNATE: &str = r#"
[[patterns]]
main = '(.*)\.(js)$'
alternates = ["$1.test.$2"]
"#;

pub const MULTIPLE_ALTERNATES: &str = r#"
[[patterns]]
main = '(.*)\.js$'
alternates = ["$1.unit.test.js", "$1.integration.test.js"]
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Settings file handed to the CLI.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config").join("config.toml")
    }

    /// State file handed to the CLI.
    pub fn state_path(&self) -> PathBuf {
        self.root.path().join("state").join("state.json")
    }

    /// Write the settings file.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config directory");
        fs::write(path, content).expect("Failed to write config");
    }

    /// Create empty files relative to the work directory.
    pub fn touch(&self, files: &[&str]) {
        for file in files {
            let path = self.work_dir.join(file);
            fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directory");
            fs::write(&path, "").expect("Failed to create file");
        }
    }

    /// Build a command for invoking the compiled `alternate` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("alternate").expect("Failed to locate alternate binary");
        cmd.current_dir(&self.work_dir)
            .env("ALTERNATE_CONFIG", self.config_path())
            .env("ALTERNATE_STATE", self.state_path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `alternate run FILE`, asserting success, and return stdout.
    pub fn run(&self, file: &str) -> String {
        let output = self.cli().args(["run", file]).output().expect("Failed to run alternate");
        assert!(
            output.status.success(),
            "alternate run failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout should be UTF-8")
    }

    /// The previous file recorded in the state file, if any.
    pub fn previous_file(&self) -> Option<String> {
        let content = fs::read_to_string(self.state_path()).ok()?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).expect("state file should be valid JSON");
        entries.get("prev").cloned()
    }
}
