//! Command: print the parsed block tree as JSON.
use anyhow::{Context as _, Result};
use std::io::Write;

use super::CommandSetup;
use crate::cli::{BlocksOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the blocks command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the output cannot be written.
pub fn run(
    global: &GlobalOpts,
    opts: &BlocksOpts,
    log: &Logger,
    out: &mut impl Write,
) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let doc = setup.document();
    let json = if opts.compact {
        serde_json::to_string(doc)
    } else {
        serde_json::to_string_pretty(doc)
    }
    .context("serializing block tree to JSON")?;
    writeln!(out, "{json}").context("writing block tree")?;
    Ok(())
}
