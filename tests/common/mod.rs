//! Shared test utilities for the CLI E2E tests.
//!
//! Provides a fixture that lays out a source tree (and optionally a
//! `.ddply` config) inside a temporary directory, plus a preconfigured
//! command for the `ddply` binary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::DeployFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = DeployFixture::new()
//!         .with_source_file("app.php", "<?php")
//!         .with_config("shared: [uploads]");
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::PathBuf;

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Single shared directory.
    pub const UPLOADS_SHARED: &str = "shared:\n  - uploads\n";

    /// Empty shared list.
    pub const NOTHING_SHARED: &str = "shared: []\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "shared: [unclosed\n";
}

/// A temp-dir fixture holding a `source/` tree and a `dest` path.
pub struct DeployFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl DeployFixture {
    /// Create a new fixture with an empty `source/` directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("source")
            .create_dir_all()
            .expect("Failed to create source directory");
        Self { temp_dir }
    }

    /// Add a file (with parents) under the source tree.
    pub fn with_source_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("source")
            .child(path)
            .write_str(content)
            .expect("Failed to write source file");
        self
    }

    /// Add an empty directory under the source tree.
    pub fn with_source_dir(self, path: &str) -> Self {
        self.temp_dir
            .child("source")
            .child(path)
            .create_dir_all()
            .expect("Failed to create source subdirectory");
        self
    }

    /// Add a `.ddply` configuration file at the source root.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("source")
            .child(".ddply")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file outside the source tree (e.g. an explicit config).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Path to the source directory.
    pub fn source(&self) -> PathBuf {
        self.temp_dir.path().join("source")
    }

    /// Path to the (not yet created) destination directory.
    pub fn destination(&self) -> PathBuf {
        self.temp_dir.path().join("dest")
    }

    /// Get access to the underlying TempDir for advanced usage.
    pub fn temp_dir(&self) -> &assert_fs::TempDir {
        &self.temp_dir
    }

    /// Create a command for the ddply binary, running in the fixture
    /// directory with the config and logging environment cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ddply");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("DEPLOY_CONFIG_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command with SOURCE and DESTINATION already supplied.
    pub fn deploy_command(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("source").arg("dest");
        cmd
    }
}

impl Default for DeployFixture {
    fn default() -> Self {
        Self::new()
    }
}
