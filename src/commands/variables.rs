//! Command: list `$variable` declarations.
use anyhow::{Context as _, Result};
use std::io::Write;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::logging::Logger;

/// Run the variables command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the output cannot be written.
pub fn run(global: &GlobalOpts, log: &Logger, out: &mut impl Write) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let mut found = 0usize;
    for var in setup.document().variables() {
        writeln!(out, "{} = {}", var.key, var.value).context("writing variables")?;
        found += 1;
    }
    if found == 0 {
        log.info("no variables declared");
    }
    Ok(())
}
