//! Configuration management for `ttsclean-core`.
//!
//! This module defines the filter configuration consumed by the cleaning
//! pipeline and the emote-name set used by the emote stripper. It handles
//! serialization/deserialization of YAML configurations and provides
//! utilities for loading and validating them.
//!
//! The core deliberately never default-fills configuration: every toggle is
//! an explicit field, and any defaulting is the calling layer's job.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A set of case-sensitive emote names, used for membership tests only.
///
/// Hosts supply emote names as a delimited list (the original host used a
/// comma-separated text field); [`EmoteSet::parse_delimited`] turns that list
/// into a set, trimming surrounding whitespace and skipping empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmoteSet(HashSet<String>);

impl EmoteSet {
    /// Creates an empty emote set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a delimited emote list (e.g. `"LUL,Kappa"` with `','`).
    ///
    /// Entries are trimmed and empty entries are skipped, so trailing
    /// delimiters and stray whitespace in host input are harmless.
    pub fn parse_delimited(list: &str, delimiter: char) -> Self {
        let emotes: HashSet<String> = list
            .split(delimiter)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        debug!("Parsed {} emote name(s) from delimited list.", emotes.len());
        Self(emotes)
    }

    /// Tests membership. Emote names are case-sensitive.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Adds a single emote name to the set.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for EmoteSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for EmoteSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// The complete filter configuration for one classification run.
///
/// Every field is explicit. The core applies no defaults; hosts (the CLI,
/// or an embedding application) decide what "unset" means and must hand the
/// pipeline a fully populated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Reject the message if any character falls outside the ASCII range.
    pub filter_non_ascii: bool,
    /// Remove URL substrings from a clean message.
    pub strip_urls: bool,
    /// Reject the message if any token matches the profanity lexicon.
    pub filter_bad_words: bool,
    /// Rewrite `@username` mentions using the host-supplied resolver.
    pub replace_usernames: bool,
    /// The metadata key the host's resolver reads display names from.
    ///
    /// The pipeline itself never interprets this value; it is carried so
    /// that the calling layer can construct its resolver from it.
    pub tts_name_key: String,
    /// Remove known emote tokens from a clean message.
    pub strip_emotes: bool,
    /// The emote names recognized by the emote stripper.
    pub emotes: EmoteSet,
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    ///
    /// All fields must be present in the file; the core does not invent
    /// defaults for missing toggles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.warn_on_degraded_features();
        Ok(config)
    }

    /// Logs a warning for every enabled feature that will degrade to a no-op.
    ///
    /// Degraded features are not errors (the pipeline stays total); the
    /// warnings exist so hosts can spot configuration mistakes.
    pub fn warn_on_degraded_features(&self) {
        if self.strip_emotes && self.emotes.is_empty() {
            warn!("strip_emotes is enabled but the emote list is empty; no emotes will be stripped.");
        }
        if self.replace_usernames && self.tts_name_key.is_empty() {
            warn!("replace_usernames is enabled but tts_name_key is empty; resolver construction may fail host-side.");
        }
    }
}
