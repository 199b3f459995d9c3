//! lexicon.rs - The owned, versioned profanity lexicon.
//!
//! The original system leaned on a third-party word-list package; here the
//! lexicon is explicit data shipped with the crate. A `LexiconConfig` is the
//! serializable document (version plus word list); a `Lexicon` is the
//! compiled, normalized membership set the profanity checker queries. The
//! built-in default is embedded at build time and compiled exactly once at
//! first use, then shared as immutable read-only data.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::TtsCleanError;

/// The serializable lexicon document (what lives in the YAML file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Version of the word list, so behavior changes are traceable.
    pub version: String,
    /// The words classified as profane. Each entry must be a single
    /// alphanumeric word; matching is whole-token and case-insensitive.
    pub words: Vec<String>,
}

impl LexiconConfig {
    /// Loads a lexicon document from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom lexicon from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let config: LexiconConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;
        info!(
            "Loaded lexicon version {} with {} word(s) from file.",
            config.version,
            config.words.len()
        );
        Ok(config)
    }

    /// Loads the default lexicon document embedded in the crate.
    pub fn load_default() -> Result<Self, TtsCleanError> {
        debug!("Loading default lexicon from embedded string...");
        let default_yaml = include_str!("../config/default_lexicon.yaml");
        let config: LexiconConfig = serde_yml::from_str(default_yaml)
            .map_err(|e| TtsCleanError::LexiconParse(e.to_string()))?;
        debug!("Loaded {} default lexicon words.", config.words.len());
        Ok(config)
    }
}

/// Validates lexicon word integrity, collecting every problem before failing.
///
/// A valid word is a non-empty run of alphanumeric characters: the profanity
/// checker matches whole tokens, and a token can never contain whitespace or
/// punctuation, so such entries would be silently dead.
fn validate_words(words: &[String]) -> Result<(), TtsCleanError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for word in words {
        if word.is_empty() {
            errors.push("The lexicon contains an empty word entry.".to_string());
            continue;
        }
        if !word.chars().all(char::is_alphanumeric) {
            errors.push(format!(
                "Word '{}' contains non-alphanumeric characters and can never match a whole token.",
                word
            ));
        }
        if !seen.insert(word.to_lowercase()) {
            errors.push(format!("Duplicate lexicon word found: '{}'.", word));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TtsCleanError::LexiconValidation(errors.join("\n")))
    }
}

/// The compiled profanity lexicon: a normalized (lowercase) membership set.
///
/// Compiled once from a `LexiconConfig` and immutable afterwards. Runtime
/// deny/allow additions derive a new `Lexicon` rather than mutating this one.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    words: HashSet<String>,
}

/// The compiled default lexicon, built on first use and shared after.
///
/// The embedded document is part of the crate and must always compile; a
/// failure here is a packaging defect, not a runtime condition.
static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let config = LexiconConfig::load_default()
        .unwrap_or_else(|e| panic!("embedded default lexicon is invalid: {}", e));
    Lexicon::compile(&config)
        .unwrap_or_else(|e| panic!("embedded default lexicon failed validation: {}", e))
});

impl Lexicon {
    /// Compiles a lexicon document into a normalized membership set.
    pub fn compile(config: &LexiconConfig) -> Result<Self, TtsCleanError> {
        debug!(
            "Compiling lexicon version {} ({} words).",
            config.version,
            config.words.len()
        );
        validate_words(&config.words)?;
        let words = config.words.iter().map(|w| w.to_lowercase()).collect();
        Ok(Self {
            version: config.version.clone(),
            words,
        })
    }

    /// Returns the built-in default lexicon.
    pub fn default_lexicon() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// Derives a new lexicon with host-supplied additions applied.
    ///
    /// `deny` words extend the effective set; `allow` words are removed from
    /// it. Allow wins over deny and over the base list. The receiver is left
    /// untouched.
    pub fn with_overrides(&self, deny: &[String], allow: &[String]) -> Lexicon {
        let mut words = self.words.clone();
        for word in deny {
            words.insert(word.to_lowercase());
        }
        for word in allow {
            words.remove(&word.to_lowercase());
        }
        debug!(
            "Derived lexicon: {} base word(s), {} denied, {} allowed, {} effective.",
            self.words.len(),
            deny.len(),
            allow.len(),
            words.len()
        );
        Lexicon {
            version: self.version.clone(),
            words,
        }
    }

    /// Version string of the document this lexicon was compiled from.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Case-insensitive whole-word membership test.
    pub fn contains_word(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(words: &[&str]) -> LexiconConfig {
        LexiconConfig {
            version: "test".to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn default_lexicon_compiles_and_is_nonempty() {
        let lexicon = Lexicon::default_lexicon();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.version(), "1.0.0");
        assert!(lexicon.contains_word("fuck"));
        assert!(lexicon.contains_word("SHIT"));
        assert!(!lexicon.contains_word("hello"));
    }

    #[test]
    fn compile_normalizes_case() {
        let lexicon = Lexicon::compile(&config_of(&["Frick", "HECK"])).unwrap();
        assert!(lexicon.contains_word("frick"));
        assert!(lexicon.contains_word("Heck"));
    }

    #[test]
    fn validation_collects_all_problems() {
        let config = config_of(&["", "two words", "dup", "DUP"]);
        let err = Lexicon::compile(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("empty word"));
        assert!(message.contains("two words"));
        assert!(message.contains("Duplicate"));
    }

    #[test]
    fn overrides_deny_then_allow() {
        let base = Lexicon::compile(&config_of(&["frick"])).unwrap();
        let derived = base.with_overrides(
            &["Heck".to_string()],
            &["FRICK".to_string()],
        );
        assert!(derived.contains_word("heck"));
        assert!(!derived.contains_word("frick"));
        // Base lexicon is untouched.
        assert!(base.contains_word("frick"));
        assert!(!base.contains_word("heck"));
    }

    #[test]
    fn allow_wins_over_deny() {
        let base = Lexicon::compile(&config_of(&["frick"])).unwrap();
        let derived = base.with_overrides(&["heck".to_string()], &["heck".to_string()]);
        assert!(!derived.contains_word("heck"));
    }
}
