// ttsclean/src/commands/mod.rs
//! Command implementations and the plumbing they share.
//!
//! This module owns the calling-layer responsibilities the core refuses:
//! filling in the default filter configuration (every filter enabled, the
//! defaults the original host applied), assembling the effective lexicon,
//! and constructing the mention resolver.
//!
//! License: MIT OR Apache-2.0

pub mod check;
pub mod clean;

use anyhow::{Context, Result};
use log::debug;
use std::io::Read;
use std::path::PathBuf;

use ttsclean_core::{EmoteSet, FilterConfig, Lexicon, LexiconConfig, MapResolver};

use crate::cli::{FilterArgs, FilterName};
use crate::names;

/// Everything a command needs to run the core pipeline once.
pub struct PipelineContext {
    pub config: FilterConfig,
    pub lexicon: Lexicon,
    pub resolver: Option<MapResolver>,
}

/// Builds the pipeline context from the shared filter arguments.
///
/// Filter selection starts from all-enabled defaults: a non-empty
/// `--enable` list switches to allow-list semantics, and `--disable` always
/// wins over both.
pub fn build_context(args: &FilterArgs) -> Result<PipelineContext> {
    let enabled = |name: FilterName| -> bool {
        if args.enable.is_empty() {
            !args.disable.contains(&name)
        } else {
            args.enable.contains(&name) && !args.disable.contains(&name)
        }
    };

    let config = FilterConfig {
        filter_non_ascii: enabled(FilterName::Ascii),
        strip_urls: enabled(FilterName::Urls),
        filter_bad_words: enabled(FilterName::BadWord),
        replace_usernames: enabled(FilterName::Mentions),
        tts_name_key: args.tts_name_key.clone(),
        strip_emotes: enabled(FilterName::Emotes),
        emotes: args.emotes.iter().map(String::as_str).collect::<EmoteSet>(),
    };
    config.warn_on_degraded_features();

    let base = match &args.lexicon {
        Some(path) => Lexicon::compile(&LexiconConfig::load_from_file(path)?)?,
        None => Lexicon::default_lexicon().clone(),
    };
    let lexicon = if args.ban.is_empty() && args.allow.is_empty() {
        base
    } else {
        base.with_overrides(&args.ban, &args.allow)
    };
    debug!(
        "Pipeline context ready: lexicon version {}, {} effective word(s).",
        lexicon.version(),
        lexicon.len()
    );

    let resolver = names::build_resolver(args)?;
    Ok(PipelineContext {
        config,
        lexicon,
        resolver,
    })
}

/// Reads the message from the argument, the input file, or stdin.
///
/// A single trailing newline from file or pipe input is not part of the
/// message and is trimmed.
pub fn read_message(message: &Option<String>, input_file: &Option<PathBuf>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message.clone());
    }
    let raw = match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read message from stdin")?;
            buffer
        }
    };
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}
