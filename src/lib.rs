//! Hyprland configuration block engine.
//!
//! Reads the line-oriented `hyprland.conf` dialect into a tree of named
//! blocks and `key = value` entries, and writes such a tree back out as
//! equivalent configuration text.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — block model, parser, serializer, settings and paths
//! - **[`error`]** — typed errors for parsing and file handling
//! - **[`logging`]** — tracing-based console output
//! - **[`commands`]** — top-level subcommand orchestration (`blocks`, `generate`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
