//! Test environment builder for isolated apiwarden runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running an apiwarden CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated project directory and user config directory
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to the project root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// User config directory as resolved on Linux through XDG_CONFIG_HOME
    pub fn user_config_dir(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.user_config_dir().join("apiwarden").join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_apiwarden"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.user_config_dir())
            .env_remove("APIWARDEN_LOG")
            .env_remove("APIWARDEN_WINDOW")
            .env_remove("APIWARDEN_EXCLUDE");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run `check` against two snapshot files in the project root
    pub fn check(&self, old: &Path, new: &Path, extra: &[&str]) -> TestResult {
        let mut args = vec![
            "check",
            "--old",
            old.to_str().unwrap(),
            "--new",
            new.to_str().unwrap(),
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
