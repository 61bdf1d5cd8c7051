//! Domain-specific error types for hyprkeys.
//!
//! The block parser returns [`MalformedBlockError`], the only failure the
//! core can produce. Everything around it (settings, path resolution, file
//! I/O) reports through [`HyprkeysError`], and command handlers at the CLI
//! boundary convert both to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! HyprkeysError
//! ├── MalformedBlock(MalformedBlockError) — unbalanced braces
//! ├── Io                                  — reading or writing a file
//! ├── Settings                            — invalid settings.toml
//! ├── NoConfigPath                        — no home directory to default from
//! └── RoundTripMismatch                   — re-parsed output differs
//! ```

use thiserror::Error;

/// Brace nesting in a configuration file is unbalanced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedBlockError {
    /// A closing brace appeared with no block open.
    #[error("unmatched closing brace at line {line}")]
    UnmatchedClose {
        /// 1-based line of the stray `}`.
        line: usize,
    },

    /// Input ended while a block was still open.
    #[error("block '{name}' opened at line {line} is never closed")]
    Unclosed {
        /// Name of the innermost unclosed block.
        name: String,
        /// 1-based line the block was opened on.
        line: usize,
    },
}

/// Top-level error type for hyprkeys.
#[derive(Error, Debug)]
pub enum HyprkeysError {
    /// The configuration file has unbalanced braces.
    #[error("Malformed block: {0}")]
    MalformedBlock(#[from] MalformedBlockError),

    /// An I/O error occurred while reading or writing a file.
    #[error("IO error on {path}: {source}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file could not be parsed.
    #[error("Invalid settings in {path}: {message}")]
    Settings {
        /// Path of the settings file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// No configuration path was given and none could be derived.
    #[error("Cannot locate hyprland.conf: neither XDG_CONFIG_HOME nor HOME is set")]
    NoConfigPath,

    /// Serializing and re-parsing a document produced a different tree.
    #[error("Round-trip mismatch for {path}")]
    RoundTripMismatch {
        /// Path of the file whose document did not round-trip.
        path: String,
    },
}
