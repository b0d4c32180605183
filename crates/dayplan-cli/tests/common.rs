//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".dayplan");

        Self {
            temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn calendar_path(&self) -> PathBuf {
        self.data_dir.join("calendar.json")
    }

    /// Scratch file next to the data directory
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_config(&self, content: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dayplan");
        cmd.arg("--data-dir").arg(self.data_dir()).env_remove("RUST_LOG");
        cmd
    }
}
