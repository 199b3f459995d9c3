//! Check command implementation: classify a message without transforming it.

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use ttsclean_core::CleaningPipeline;

use crate::cli::CheckCommand;
use crate::commands::{build_context, read_message};
use crate::ui;

/// The verdict printed by `check --json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    was_clean: bool,
    tripped_filter: String,
    lexicon_version: String,
}

/// Runs the `check` command and returns whether the message was clean.
///
/// The caller turns a false return into a non-zero exit status, so scripts
/// can gate on cleanliness without parsing output.
pub fn run(cmd: &CheckCommand, _quiet: bool) -> Result<bool> {
    info!("Starting check operation.");

    let message = read_message(&cmd.message, &cmd.input_file)?;
    let mut ctx = build_context(&cmd.filters)?;

    // The verdict only depends on the checkers; skip the transformers.
    ctx.config.replace_usernames = false;
    ctx.config.strip_emotes = false;
    ctx.config.strip_urls = false;

    let pipeline = CleaningPipeline::new(ctx.config, &ctx.lexicon);
    let result = pipeline.classify(&message);
    debug!(
        "Message checked. was_clean: {}, tripped filter: '{}'.",
        result.was_clean, result.tripped_filter
    );

    if cmd.json {
        let report = CheckReport {
            was_clean: result.was_clean,
            tripped_filter: result.tripped_filter.as_str().to_string(),
            lexicon_version: ctx.lexicon.version().to_string(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        ui::print_verdict(&result);
    }

    info!("Check operation completed.");
    Ok(result.was_clean)
}
