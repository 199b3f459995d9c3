// ttsclean/src/cli.rs
//! This file defines the command-line interface (CLI) for the ttsclean
//! application, including all available commands and their arguments.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ttsclean",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean chat messages for text-to-speech output",
    long_about = "ttsclean is a command-line utility for preparing chat messages for a text-to-speech voice. It classifies a message against configurable filters (non-ASCII content, profanity) and, when the message is clean, rewrites @username mentions to display names and strips emote tokens and URLs according to a configurable rule set.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'ttsclean' crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `ttsclean` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies a message and, when it is clean, prints its cleaned form.
    #[command(about = "Classifies a message and, when it is clean, prints its cleaned form.")]
    Clean(CleanCommand),

    /// Classifies a message without transforming it and reports the verdict.
    #[command(about = "Classifies a message without transforming it; exits non-zero when a filter trips.")]
    Check(CheckCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// The message to clean (reads stdin when omitted).
    #[arg(value_name = "MESSAGE", conflicts_with = "input_file", help = "The message to clean. Reads stdin when omitted.")]
    pub message: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the message from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the full classification result as JSON.
    #[arg(long, help = "Print the full classification result as JSON instead of the cleaned message.")]
    pub json: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// The message to check (reads stdin when omitted).
    #[arg(value_name = "MESSAGE", conflicts_with = "input_file", help = "The message to check. Reads stdin when omitted.")]
    pub message: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the message from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the verdict as JSON.
    #[arg(long, help = "Print the verdict as JSON.")]
    pub json: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Filter-selection arguments shared by `clean` and `check`.
///
/// Every filter starts enabled (the defaults a hosting UI would apply), and
/// `--enable`/`--disable` adjust from there.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Explicitly enable only these filters (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', value_enum, help = "Explicitly enable only these filters (comma-separated); all others start disabled.")]
    pub enable: Vec<FilterName>,

    /// Explicitly disable these filters (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', value_enum, help = "Explicitly disable these filters (comma-separated).")]
    pub disable: Vec<FilterName>,

    /// Path to a custom profanity lexicon (YAML).
    #[arg(long = "lexicon", value_name = "FILE", help = "Path to a custom profanity lexicon file (YAML).")]
    pub lexicon: Option<PathBuf>,

    /// Additional words to treat as profane.
    #[arg(long = "ban", value_name = "WORDS", value_delimiter = ',', help = "Additional words to treat as profane (comma-separated).")]
    pub ban: Vec<String>,

    /// Words to remove from the effective lexicon.
    #[arg(long = "allow", value_name = "WORDS", value_delimiter = ',', help = "Words to remove from the effective lexicon (comma-separated).")]
    pub allow: Vec<String>,

    /// Emote names to strip (case-sensitive).
    #[arg(long = "emotes", value_name = "NAMES", value_delimiter = ',', help = "Emote names to strip (comma-separated, case-sensitive).")]
    pub emotes: Vec<String>,

    /// YAML file mapping usernames to metadata.
    #[arg(long = "names-file", value_name = "FILE", help = "YAML file mapping usernames to metadata; display names are read from the --tts-name-key field.")]
    pub names_file: Option<PathBuf>,

    /// Literal display-name override for a username (repeatable).
    #[arg(long = "name", value_name = "USER=DISPLAY", help = "Literal display-name override for a username (repeatable).")]
    pub name: Vec<String>,

    /// Metadata key display names are read from.
    #[arg(long = "tts-name-key", value_name = "KEY", default_value = "ttsName", help = "Metadata key display names are read from in --names-file.")]
    pub tts_name_key: String,
}

/// The five filters a host can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterName {
    /// Reject messages containing non-ASCII characters.
    Ascii,
    /// Reject messages containing profanity-lexicon words.
    BadWord,
    /// Replace @username mentions with display names.
    Mentions,
    /// Strip known emote tokens.
    Emotes,
    /// Strip URL substrings.
    Urls,
}
