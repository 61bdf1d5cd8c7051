//! Command: print version information.
use anyhow::{Context as _, Result};
use std::io::Write;

/// Version string: `HYPRKEYS_VERSION` from the build, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("HYPRKEYS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the hyprkeys version.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "hyprkeys {}", version()).context("writing version")
}
