//! Command: regenerate configuration text from the parsed blocks.
use anyhow::{Context as _, Result};
use std::io::Write;

use super::CommandSetup;
use crate::cli::{GenerateOpts, GlobalOpts};
use crate::config::paths;
use crate::config::serializer::{SerializeOptions, serialize_with};
use crate::error::HyprkeysError;
use crate::logging::Logger;

/// Run the generate command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the output cannot be written.
pub fn run(
    global: &GlobalOpts,
    opts: &GenerateOpts,
    log: &Logger,
    out: &mut impl Write,
) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let options = SerializeOptions {
        indent: opts.indent.unwrap_or(setup.settings.indent),
    };
    let text = serialize_with(setup.document(), &options);

    if opts.stdout {
        out.write_all(text.as_bytes())
            .context("writing generated config")?;
        return Ok(());
    }

    let output = paths::resolve_output_path(
        opts.output.as_deref(),
        &setup.settings,
        &setup.config_path,
    );
    std::fs::write(&output, &text).map_err(|source| HyprkeysError::Io {
        path: output.display().to_string(),
        source,
    })?;
    log.info(&format!(
        "wrote {} lines to {}",
        text.lines().count(),
        output.display()
    ));
    Ok(())
}
