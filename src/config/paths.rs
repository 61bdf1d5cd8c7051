//! Resolution of the Hyprland config, settings and output paths.
use std::path::{Path, PathBuf};

use super::settings::Settings;
use crate::error::HyprkeysError;

/// Config file read when `--test` is passed, relative to the working directory.
pub const TEST_CONFIG_PATH: &str = "tests/fixtures/hyprland.conf";

/// File name `generate` writes next to the input when no output is given.
pub const GENERATED_FILE_NAME: &str = "hyprland-generated.conf";

/// Return the user config directory from `$XDG_CONFIG_HOME`, or `$HOME/.config`.
#[must_use]
pub fn config_home() -> Option<PathBuf> {
    config_home_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// Pure form of [`config_home`]. Empty values count as unset.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use hyprkeys::config::paths::config_home_from;
///
/// assert_eq!(
///     config_home_from(None, Some("/home/me".into())),
///     Some(PathBuf::from("/home/me/.config"))
/// );
/// ```
#[must_use]
pub fn config_home_from(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|v| !v.is_empty())
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

/// Default Hyprland config location under `config_home`.
#[must_use]
pub fn hyprland_config_in(config_home: &Path) -> PathBuf {
    config_home.join("hypr").join("hyprland.conf")
}

/// Default settings file location under `config_home`.
#[must_use]
pub fn settings_file_in(config_home: &Path) -> PathBuf {
    config_home.join("hyprkeys").join("settings.toml")
}

/// Pick the config file to read.
///
/// Precedence: `explicit`, then the test fixture when `use_test` is set, then
/// `settings.config_path`, then the default under `config_home`.
///
/// # Errors
///
/// Returns [`HyprkeysError::NoConfigPath`] if nothing is set and there is no
/// config home.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    use_test: bool,
    settings: &Settings,
    config_home: Option<&Path>,
) -> Result<PathBuf, HyprkeysError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if use_test {
        return Ok(PathBuf::from(TEST_CONFIG_PATH));
    }
    if let Some(path) = &settings.config_path {
        return Ok(path.clone());
    }
    config_home
        .map(hyprland_config_in)
        .ok_or(HyprkeysError::NoConfigPath)
}

/// Pick the file `generate` writes to.
///
/// Precedence: `explicit`, then `settings.output_path`, then
/// [`GENERATED_FILE_NAME`] in the input's directory.
#[must_use]
pub fn resolve_output_path(explicit: Option<&Path>, settings: &Settings, input: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| settings.output_path.clone())
        .unwrap_or_else(|| {
            input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(GENERATED_FILE_NAME)
        })
}
