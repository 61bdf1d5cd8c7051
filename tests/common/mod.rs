// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed config and settings file plus a
// fluent builder, so each integration test runs against an isolated
// environment and never reads the real user's settings.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use hyprkeys::cli::GlobalOpts;
use hyprkeys::logging::Logger;

/// The bundled sample configuration.
pub const SAMPLE_CONFIG: &str = include_str!("../fixtures/hyprland.conf");

/// An isolated config directory backed by a [`tempfile::TempDir`].
///
/// Holds `hyprland.conf` and an empty `settings.toml`; the directory is
/// deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding the files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context whose config is the bundled sample.
    pub fn new() -> Self {
        TestContextBuilder::new().build()
    }

    /// Path to the directory root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the Hyprland config inside the context.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("hyprland.conf")
    }

    /// Path of the settings file inside the context.
    pub fn settings_path(&self) -> PathBuf {
        self.root.path().join("settings.toml")
    }

    /// Global options pointing at this context's files.
    pub fn global_opts(&self) -> GlobalOpts {
        GlobalOpts {
            config: Some(self.config_path()),
            test: false,
            settings: Some(self.settings_path()),
        }
    }

    /// Run a command that writes to an output stream and return what it wrote.
    pub fn capture(
        &self,
        f: impl FnOnce(&GlobalOpts, &Logger, &mut Vec<u8>) -> anyhow::Result<()>,
    ) -> anyhow::Result<String> {
        let log = Logger::new();
        let mut out = Vec::new();
        f(&self.global_opts(), &log, &mut out)?;
        Ok(String::from_utf8(out).expect("command output should be utf-8"))
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a context with the sample config and empty settings.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::write(root.path().join("hyprland.conf"), SAMPLE_CONFIG)
            .expect("write hyprland.conf");
        std::fs::write(root.path().join("settings.toml"), "").expect("write settings.toml");
        Self {
            ctx: IntegrationTestContext { root },
        }
    }

    /// Replace `hyprland.conf` with `content`.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.ctx.config_path(), content).expect("write hyprland.conf");
        self
    }

    /// Replace `settings.toml` with `content`.
    pub fn with_settings(self, content: &str) -> Self {
        std::fs::write(self.ctx.settings_path(), content).expect("write settings.toml");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
