//! Clean command implementation: classify a message and print its cleaned form.

use anyhow::Result;
use log::{debug, info};
use std::io::{self, Write};

use ttsclean_core::CleaningPipeline;

use crate::cli::CleanCommand;
use crate::commands::{build_context, read_message};
use crate::ui;

/// Runs the `clean` command.
///
/// Prints the cleaned message to stdout, or the full classification result
/// when `--json` was requested. A rejected message cleans to the empty
/// string, so rejection prints an empty line.
pub fn run(cmd: &CleanCommand, quiet: bool) -> Result<()> {
    info!("Starting clean operation.");

    let message = read_message(&cmd.message, &cmd.input_file)?;
    let ctx = build_context(&cmd.filters)?;

    let mut pipeline = CleaningPipeline::new(ctx.config, &ctx.lexicon);
    if let Some(resolver) = &ctx.resolver {
        pipeline = pipeline.with_resolver(resolver);
    }
    let result = pipeline.classify(&message);
    debug!(
        "Message classified. was_clean: {}, tripped filter: '{}'.",
        result.was_clean, result.tripped_filter
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(writer, "{}", result.cleaned_message)?;
        if !result.was_clean && !quiet {
            ui::warn_msg(format!("Message rejected by filter: {}", result.tripped_filter));
        }
    }

    info!("Clean operation completed.");
    Ok(())
}
