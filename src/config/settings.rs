//! User settings loaded from `settings.toml`.
//!
//! Format:
//! ```toml
//! indent = 2
//! config_path = "/home/me/dotfiles/hypr/hyprland.conf"
//! output_path = "/tmp/hyprland-generated.conf"
//! ```
//!
//! Every key is optional. A missing default settings file yields
//! [`Settings::default`]. `indent` may not exceed [`MAX_INDENT`].
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use super::paths;
use super::serializer::{DEFAULT_INDENT, MAX_INDENT};
use crate::error::HyprkeysError;

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Spaces per nesting level in generated output.
    #[serde(deserialize_with = "bounded_indent")]
    pub indent: usize,
    /// Hyprland config to read when `--config` is not given.
    pub config_path: Option<PathBuf>,
    /// File `generate` writes when `--output` is not given.
    pub output_path: Option<PathBuf>,
}

fn bounded_indent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let indent = usize::deserialize(deserializer)?;
    if indent > MAX_INDENT {
        return Err(serde::de::Error::custom(format!(
            "indent must be at most {MAX_INDENT}, got {indent}"
        )));
    }
    Ok(indent)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            config_path: None,
            output_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// An explicit file must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self, HyprkeysError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match paths::config_home().map(|home| paths::settings_file_in(&home)) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, HyprkeysError> {
        let content = std::fs::read_to_string(path).map_err(|source| HyprkeysError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| HyprkeysError::Settings {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Parse settings from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyprkeys::config::settings::Settings;
    ///
    /// let settings = Settings::from_toml_str("indent = 2\n").unwrap();
    /// assert_eq!(settings.indent, 2);
    /// assert!(settings.config_path.is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input, unknown keys, or an
    /// `indent` wider than [`MAX_INDENT`].
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let settings = Settings::from_toml_str("").expect("empty settings should parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.indent, 4);
    }

    #[test]
    fn all_keys() {
        let settings = Settings::from_toml_str(
            "indent = 8\nconfig_path = \"/a/hyprland.conf\"\noutput_path = \"/b/out.conf\"\n",
        )
        .expect("should parse");
        assert_eq!(settings.indent, 8);
        assert_eq!(settings.config_path, Some(PathBuf::from("/a/hyprland.conf")));
        assert_eq!(settings.output_path, Some(PathBuf::from("/b/out.conf")));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Settings::from_toml_str("colour = \"red\"\n").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Settings::from_toml_str("indent = \"wide\"\n").is_err());
    }

    #[test]
    fn indent_bounds() {
        let widest = Settings::from_toml_str("indent = 16\n").expect("16 is allowed");
        assert_eq!(widest.indent, MAX_INDENT);
        let err = Settings::from_toml_str("indent = 17\n").expect_err("17 is too wide");
        assert!(err.message().contains("at most 16"), "{}", err.message());
        assert!(Settings::from_toml_str("indent = 18446744073709551615\n").is_err());
    }

    #[test]
    fn from_file_rejects_oversized_indent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "indent = 1000\n").expect("write settings");
        let err = Settings::from_file(&path).expect_err("oversized indent");
        assert!(matches!(err, HyprkeysError::Settings { .. }));
    }

    #[test]
    fn from_file_reports_path_on_bad_toml() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "indent = [").expect("write settings");
        let err = Settings::from_file(&path).expect_err("malformed settings");
        assert!(matches!(err, HyprkeysError::Settings { .. }));
        assert!(err.to_string().contains("settings.toml"));
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("absent.toml");
        let err = Settings::load(Some(missing.as_path())).expect_err("missing");
        assert!(matches!(err, HyprkeysError::Io { .. }));
    }
}
