//! Command: validate a config file.
use anyhow::{Context as _, Result};
use std::io::Write;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::config::serializer::{SerializeOptions, round_trips};
use crate::error::HyprkeysError;
use crate::logging::Logger;

/// Run the check command.
///
/// Parsing already rejects unbalanced braces; on top of that every ignored
/// line is reported as a warning and the document must survive a
/// serialize/parse round trip.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or does not round-trip.
pub fn run(global: &GlobalOpts, log: &Logger, out: &mut impl Write) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let doc = setup.document();

    for ignored in &setup.report.ignored {
        log.warn(&format!(
            "line {}: unrecognized line ignored: {}",
            ignored.line, ignored.text
        ));
    }

    writeln!(out, "{}", setup.config_path.display()).context("writing report")?;
    writeln!(out, "  blocks:        {}", doc.block_count()).context("writing report")?;
    writeln!(out, "  entries:       {}", doc.entry_count()).context("writing report")?;
    writeln!(out, "  variables:     {}", doc.variables().count()).context("writing report")?;
    writeln!(out, "  ignored lines: {}", setup.report.ignored.len())
        .context("writing report")?;

    let options = SerializeOptions {
        indent: setup.settings.indent,
    };
    if !round_trips(doc, &options) {
        log.error(&format!(
            "regenerating at indent {} does not reproduce the parsed blocks",
            options.indent
        ));
        return Err(HyprkeysError::RoundTripMismatch {
            path: setup.config_path.display().to_string(),
        }
        .into());
    }
    writeln!(out, "  round-trip:    ok").context("writing report")?;

    let warnings = log.warning_count();
    if warnings > 0 {
        log.info(&format!("passed with {warnings} warning(s)"));
    }
    Ok(())
}
