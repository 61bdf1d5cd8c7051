//! Top-level subcommand orchestration.
pub mod blocks;
pub mod check;
pub mod generate;
pub mod variables;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::config::paths;
use crate::config::{Document, ParseReport, Settings, parse_report};
use crate::error::HyprkeysError;
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates settings loading, path resolution, reading and parsing so
/// that each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Effective settings.
    pub settings: Settings,
    /// The Hyprland config that was read.
    pub config_path: PathBuf,
    /// Parse result for `config_path`.
    pub report: ParseReport,
}

impl CommandSetup {
    /// Load settings, resolve the config path, read and parse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, no config path can be
    /// resolved, the file cannot be read, or its braces are unbalanced.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let settings = Settings::load(global.settings.as_deref()).context("loading settings")?;
        let config_path = paths::resolve_config_path(
            global.config.as_deref(),
            global.test,
            &settings,
            paths::config_home().as_deref(),
        )?;

        log.stage(&format!("Parsing {}", config_path.display()));
        let content =
            std::fs::read_to_string(&config_path).map_err(|source| HyprkeysError::Io {
                path: config_path.display().to_string(),
                source,
            })?;
        let report = parse_report(&content)
            .map_err(HyprkeysError::from)
            .with_context(|| format!("parsing {}", config_path.display()))?;

        log.debug(&format!("{} blocks", report.document.block_count()));
        log.debug(&format!("{} entries", report.document.entry_count()));
        log.debug(&format!("{} ignored lines", report.ignored.len()));

        Ok(Self {
            settings,
            config_path,
            report,
        })
    }

    /// The parsed document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.report.document
    }
}
